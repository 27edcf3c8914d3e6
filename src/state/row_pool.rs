//! RowPool - Bounded Live Rows with Recycling
//!
//! Only rows inside the live window hold image state. A row that scrolls
//! away keeps its slot until the slot is needed for another post; the
//! least recently used off-window slot is recycled first.
//!
//! Every slot assignment bumps a generation. Load results carry the
//! `(slot, post, generation)` they were issued for and are dropped when
//! the slot has since been handed to another post.

use crate::domain::{Post, PostId};
use crate::services::LoadState;
use ahash::{AHashMap, AHashSet};
use gpui::SharedString;
use std::ops::Range;
use tracing::debug;

/// Which image of a post card a load belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageRole {
    Avatar,
    Media,
}

/// Image state of one post card
#[derive(Debug, Clone, Default)]
pub struct RowImages {
    pub avatar: LoadState,
    pub media: LoadState,
}

impl RowImages {
    /// State shown before any load resolves
    pub fn pending(post: &Post) -> Self {
        Self {
            avatar: LoadState::for_url(&post.user_image_url),
            media: LoadState::for_url(&post.post_image_url),
        }
    }

    fn set(&mut self, role: ImageRole, state: LoadState) {
        match role {
            ImageRole::Avatar => self.avatar = state,
            ImageRole::Media => self.media = state,
        }
    }
}

/// A load request bound to one slot assignment
#[derive(Debug, Clone)]
pub struct LoadTicket {
    pub slot: usize,
    pub post: PostId,
    pub generation: u64,
    pub role: ImageRole,
    pub url: SharedString,
}

/// Result of moving the live window
#[derive(Debug, Default)]
pub struct Materialized {
    /// Loads to start for newly live rows
    pub tickets: Vec<LoadTicket>,
    /// Posts whose slots were recycled
    pub evicted: Vec<PostId>,
}

#[derive(Debug, Default)]
struct RowSlot {
    occupant: Option<PostId>,
    generation: u64,
    last_used: u64,
    images: RowImages,
}

/// Compute the post-index range to keep live
///
/// The visible range is widened by `overscan` on both sides and clamped
/// to the list. If that exceeds `capacity`, the window starts at the first
/// visible row instead.
pub fn live_window(
    visible: Range<usize>,
    overscan: usize,
    len: usize,
    capacity: usize,
) -> Range<usize> {
    let capacity = capacity.max(1);
    let visible_start = visible.start.min(len);
    let visible_end = visible.end.clamp(visible_start, len);

    let start = visible_start.saturating_sub(overscan);
    let end = visible_end.saturating_add(overscan).min(len);
    if end - start <= capacity {
        return start..end;
    }

    visible_start..(visible_start + capacity).min(len)
}

/// Fixed-capacity pool of live post rows, keyed by post id
#[derive(Debug)]
pub struct RowPool {
    capacity: usize,
    slots: Vec<RowSlot>,
    by_post: AHashMap<PostId, usize>,
    next_generation: u64,
    clock: u64,
}

impl RowPool {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            slots: Vec::with_capacity(capacity),
            by_post: AHashMap::with_capacity(capacity),
            next_generation: 0,
            clock: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of rows currently holding a slot
    pub fn live_count(&self) -> usize {
        self.by_post.len()
    }

    pub fn is_live(&self, post: PostId) -> bool {
        self.by_post.contains_key(&post)
    }

    pub fn slot_of(&self, post: PostId) -> Option<usize> {
        self.by_post.get(&post).copied()
    }

    /// Image state of a live row
    pub fn images(&self, post: PostId) -> Option<&RowImages> {
        self.slot_of(post).map(|ix| &self.slots[ix].images)
    }

    /// Make the posts in `window` live, recycling slots as needed
    pub fn materialize(&mut self, posts: &[Post], window: Range<usize>) -> Materialized {
        let end = window.end.min(posts.len());
        let start = window.start.min(end);
        let wanted = &posts[start..end];
        let wanted = &wanted[..wanted.len().min(self.capacity)];

        self.clock += 1;
        let wanted_ids: AHashSet<PostId> = wanted.iter().map(|p| p.id).collect();
        let mut out = Materialized::default();

        for post in wanted {
            if let Some(&ix) = self.by_post.get(&post.id) {
                self.slots[ix].last_used = self.clock;
                continue;
            }

            let Some(ix) = self.claim_slot(&wanted_ids) else {
                debug!(post = %post.id, "No free row slot");
                continue;
            };

            if let Some(previous) = self.slots[ix].occupant.take() {
                self.by_post.remove(&previous);
                debug!(post = %previous, slot = ix, next = %post.id, "Row recycled");
                out.evicted.push(previous);
            }

            self.next_generation += 1;
            let generation = self.next_generation;
            let slot = &mut self.slots[ix];
            slot.occupant = Some(post.id);
            slot.generation = generation;
            slot.last_used = self.clock;
            slot.images = RowImages::pending(post);
            self.by_post.insert(post.id, ix);

            for (role, url) in [
                (ImageRole::Avatar, &post.user_image_url),
                (ImageRole::Media, &post.post_image_url),
            ] {
                if !url.trim().is_empty() {
                    out.tickets.push(LoadTicket {
                        slot: ix,
                        post: post.id,
                        generation,
                        role,
                        url: SharedString::from(url.clone()),
                    });
                }
            }
        }

        out
    }

    fn claim_slot(&mut self, wanted: &AHashSet<PostId>) -> Option<usize> {
        if let Some(ix) = self.slots.iter().position(|s| s.occupant.is_none()) {
            return Some(ix);
        }
        if self.slots.len() < self.capacity {
            self.slots.push(RowSlot::default());
            return Some(self.slots.len() - 1);
        }
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.occupant.is_some_and(|id| !wanted.contains(&id)))
            .min_by_key(|(_, s)| s.last_used)
            .map(|(ix, _)| ix)
    }

    /// Store a load result if its slot still belongs to the ticket's post
    pub fn apply(&mut self, ticket: &LoadTicket, state: LoadState) -> bool {
        let Some(slot) = self.slots.get_mut(ticket.slot) else {
            return false;
        };

        if slot.occupant != Some(ticket.post) || slot.generation != ticket.generation {
            debug!(
                post = %ticket.post,
                slot = ticket.slot,
                role = ?ticket.role,
                "Discarding stale image load"
            );
            return false;
        }

        slot.images.set(ticket.role, state);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{Image, ImageFormat};
    use std::sync::Arc;

    fn post(id: u32) -> Post {
        Post::new(
            id,
            format!("user{id}"),
            format!("https://cdn.test/avatar/{id}.png"),
            format!("https://cdn.test/media/{id}.jpg"),
            "",
        )
    }

    fn posts(n: u32) -> Vec<Post> {
        (1..=n).map(post).collect()
    }

    fn image(tag: u8) -> Arc<Image> {
        Arc::new(Image::from_bytes(ImageFormat::Png, vec![0x89, b'P', b'N', b'G', tag]))
    }

    fn media_ticket(m: &Materialized, id: u32) -> LoadTicket {
        m.tickets
            .iter()
            .find(|t| t.post == PostId(id) && t.role == ImageRole::Media)
            .cloned()
            .expect("media ticket")
    }

    #[test]
    fn test_live_window_adds_overscan() {
        assert_eq!(live_window(2..4, 2, 10, 12), 0..6);
        assert_eq!(live_window(8..10, 2, 10, 12), 6..10);
    }

    #[test]
    fn test_live_window_clamps_to_list() {
        assert_eq!(live_window(0..5, 2, 0, 12), 0..0);
        assert_eq!(live_window(3..9, 1, 4, 12), 2..4);
    }

    #[test]
    fn test_live_window_respects_capacity() {
        assert_eq!(live_window(10..14, 3, 100, 5), 10..15);
        assert_eq!(live_window(10..20, 0, 100, 4), 10..14);
    }

    #[test]
    fn test_materialize_issues_ticket_per_url() {
        let list = posts(2);
        let mut pool = RowPool::new(4);
        let m = pool.materialize(&list, 0..2);
        assert_eq!(m.tickets.len(), 4);
        assert!(m.evicted.is_empty());
        assert!(pool.is_live(PostId(1)) && pool.is_live(PostId(2)));
    }

    #[test]
    fn test_empty_avatar_is_placeholder_without_ticket() {
        let list = vec![Post::new(1, "a", "", "https://cdn.test/m.jpg", "")];
        let mut pool = RowPool::new(2);
        let m = pool.materialize(&list, 0..1);
        assert_eq!(m.tickets.len(), 1);
        assert_eq!(m.tickets[0].role, ImageRole::Media);
        let images = pool.images(PostId(1)).expect("live row");
        assert!(matches!(images.avatar, LoadState::Empty));
        assert!(images.media.is_loading());
    }

    #[test]
    fn test_live_rows_are_not_reloaded() {
        let list = posts(3);
        let mut pool = RowPool::new(4);
        pool.materialize(&list, 0..2);
        let m = pool.materialize(&list, 1..3);
        assert!(m.tickets.iter().all(|t| t.post == PostId(3)));
        assert!(m.evicted.is_empty());
    }

    #[test]
    fn test_memory_bounded_by_capacity() {
        let list = posts(200);
        let mut pool = RowPool::new(5);
        for start in 0..196 {
            let window = live_window(start..start + 3, 1, list.len(), pool.capacity());
            pool.materialize(&list, window);
            assert!(pool.live_count() <= 5);
        }
        assert!(pool.slots.len() <= 5);
        assert!(pool.is_live(PostId(198)));
        assert!(!pool.is_live(PostId(1)));
    }

    #[test]
    fn test_recycles_least_recently_used_off_window_slot() {
        let list = posts(4);
        let mut pool = RowPool::new(2);
        pool.materialize(&list, 0..2);
        pool.materialize(&list, 1..2);
        let m = pool.materialize(&list, 1..3);
        assert_eq!(m.evicted, vec![PostId(1)]);
        assert!(pool.is_live(PostId(2)) && pool.is_live(PostId(3)));
    }

    #[test]
    fn test_stale_load_after_recycle_is_discarded() {
        let list = posts(2);
        let mut pool = RowPool::new(1);

        let first = pool.materialize(&list, 0..1);
        let ticket_a = media_ticket(&first, 1);
        let second = pool.materialize(&list, 1..2);
        let ticket_b = media_ticket(&second, 2);
        assert_eq!(ticket_a.slot, ticket_b.slot);
        assert_eq!(second.evicted, vec![PostId(1)]);

        let image_a = image(1);
        let image_b = image(2);

        // B resolves first, then the stale A load arrives
        assert!(pool.apply(&ticket_b, LoadState::Loaded(image_b.clone())));
        assert!(!pool.apply(&ticket_a, LoadState::Loaded(image_a.clone())));

        let shown = pool.images(PostId(2)).expect("live row");
        assert!(Arc::ptr_eq(shown.media.image().expect("loaded"), &image_b));
        assert!(pool.images(PostId(1)).is_none());
    }

    #[test]
    fn test_stale_load_arriving_first_is_discarded() {
        let list = posts(2);
        let mut pool = RowPool::new(1);

        let ticket_a = media_ticket(&pool.materialize(&list, 0..1), 1);
        let ticket_b = media_ticket(&pool.materialize(&list, 1..2), 2);

        let image_b = image(2);
        assert!(!pool.apply(&ticket_a, LoadState::Loaded(image(1))));
        assert!(pool.images(PostId(2)).expect("live row").media.is_loading());
        assert!(pool.apply(&ticket_b, LoadState::Loaded(image_b.clone())));

        let shown = pool.images(PostId(2)).expect("live row");
        assert!(Arc::ptr_eq(shown.media.image().expect("loaded"), &image_b));
    }

    #[test]
    fn test_returning_post_ignores_its_old_ticket() {
        let list = posts(2);
        let mut pool = RowPool::new(1);

        let old_a = media_ticket(&pool.materialize(&list, 0..1), 1);
        pool.materialize(&list, 1..2);
        let new_a = media_ticket(&pool.materialize(&list, 0..1), 1);
        assert_ne!(old_a.generation, new_a.generation);

        assert!(!pool.apply(&old_a, LoadState::failed("old")));
        assert!(pool.images(PostId(1)).expect("live row").media.is_loading());
        assert!(pool.apply(&new_a, LoadState::failed("new")));
        assert!(pool.images(PostId(1)).expect("live row").media.is_failed());
    }

    #[test]
    fn test_failed_load_only_affects_its_row() {
        let list = posts(2);
        let mut pool = RowPool::new(4);
        let m = pool.materialize(&list, 0..2);
        assert!(pool.apply(&media_ticket(&m, 1), LoadState::failed("404")));
        assert!(pool.images(PostId(1)).expect("row 1").media.is_failed());
        assert!(pool.images(PostId(2)).expect("row 2").media.is_loading());
    }
}
