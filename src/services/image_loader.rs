//! Image Loading
//!
//! The loader turns a URL into a [`LoadState`]. Loads never fail loudly:
//! every error ends up as `LoadState::Failed` so a broken image only
//! degrades its own slot.
//!
//! ```text
//! CachedImageLoader (LRU of shared futures, one fetch per URL)
//!       │
//!       ▼
//! HttpImageLoader (reqwest, format sniffing)
//! ```

use crate::constants::{HTTP_USER_AGENT, MAX_IMAGE_BYTES};
use crate::error::{Error, Result};
use futures::future::{self, BoxFuture, FutureExt, Shared};
use gpui::{Image, ImageFormat};
use hashlink::LruCache;
use reqwest::header::CONTENT_TYPE;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, warn};

/// Load state of a single image slot
#[derive(Clone, Default)]
pub enum LoadState {
    /// No URL was supplied; rendered as a placeholder
    Empty,
    /// Request in flight; rendered as a placeholder
    #[default]
    Loading,
    /// Bytes fetched and recognized
    Loaded(Arc<Image>),
    /// Fetch or format detection failed; rendered as a fallback
    Failed(Arc<str>),
}

impl LoadState {
    /// Initial state for a URL: `Empty` for a blank URL, otherwise `Loading`
    pub fn for_url(url: &str) -> Self {
        if url.trim().is_empty() {
            LoadState::Empty
        } else {
            LoadState::Loading
        }
    }

    pub fn failed(reason: impl Into<Arc<str>>) -> Self {
        LoadState::Failed(reason.into())
    }

    pub fn image(&self) -> Option<&Arc<Image>> {
        match self {
            LoadState::Loaded(image) => Some(image),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }
}

impl fmt::Debug for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadState::Empty => f.write_str("Empty"),
            LoadState::Loading => f.write_str("Loading"),
            LoadState::Loaded(_) => f.write_str("Loaded"),
            LoadState::Failed(reason) => f.debug_tuple("Failed").field(reason).finish(),
        }
    }
}

/// Asynchronous image source
pub trait ImageLoader: Send + Sync + 'static {
    /// Start loading `url`; the future resolves off the UI thread
    fn load(&self, url: &str) -> BoxFuture<'static, LoadState>;
}

// ==================== HTTP ====================

/// Fetches images over HTTP(S)
#[derive(Clone)]
pub struct HttpImageLoader {
    client: reqwest::Client,
}

impl HttpImageLoader {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(HTTP_USER_AGENT)
            .build()
            .map_err(|e| Error::Invalid {
                message: format!("Failed to build HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }
}

impl ImageLoader for HttpImageLoader {
    fn load(&self, url: &str) -> BoxFuture<'static, LoadState> {
        if url.trim().is_empty() {
            return future::ready(LoadState::Empty).boxed();
        }

        let client = self.client.clone();
        let url = url.to_string();
        async move {
            match fetch_image(&client, &url).await {
                Ok(image) => {
                    debug!(url = %url, "Image loaded");
                    LoadState::Loaded(Arc::new(image))
                }
                Err(e) => {
                    warn!(url = %url, error = %e, "Image load failed");
                    LoadState::failed(e.to_string())
                }
            }
        }
        .boxed()
    }
}

async fn fetch_image(client: &reqwest::Client, url: &str) -> Result<Image> {
    let response = client.get(url).send().await.map_err(|source| Error::Http {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let mime = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let bytes = response.bytes().await.map_err(|source| Error::Http {
        url: url.to_string(),
        source,
    })?;

    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(Error::ImageTooLarge {
            url: url.to_string(),
            size: bytes.len(),
        });
    }

    let format = sniff_image_format(&bytes)
        .or_else(|| mime.as_deref().and_then(format_from_mime))
        .ok_or_else(|| Error::UnsupportedImage {
            url: url.to_string(),
        })?;

    Ok(Image::from_bytes(format, bytes.to_vec()))
}

/// Detect an image format from its leading magic bytes
pub fn sniff_image_format(bytes: &[u8]) -> Option<ImageFormat> {
    match bytes {
        [0x89, b'P', b'N', b'G', ..] => Some(ImageFormat::Png),
        [0xFF, 0xD8, 0xFF, ..] => Some(ImageFormat::Jpeg),
        [b'G', b'I', b'F', b'8', ..] => Some(ImageFormat::Gif),
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some(ImageFormat::Webp),
        [b'B', b'M', ..] => Some(ImageFormat::Bmp),
        [b'I', b'I', 0x2A, 0x00, ..] | [b'M', b'M', 0x00, 0x2A, ..] => Some(ImageFormat::Tiff),
        _ if looks_like_svg(bytes) => Some(ImageFormat::Svg),
        _ => None,
    }
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(512)]);
    let head = head.trim_start();
    head.starts_with("<svg") || (head.starts_with("<?xml") && head.contains("<svg"))
}

/// Map a `Content-Type` value to an image format
pub fn format_from_mime(mime: &str) -> Option<ImageFormat> {
    let essence = mime
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.as_str() {
        "image/png" => Some(ImageFormat::Png),
        "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
        "image/gif" => Some(ImageFormat::Gif),
        "image/webp" => Some(ImageFormat::Webp),
        "image/bmp" => Some(ImageFormat::Bmp),
        "image/tiff" => Some(ImageFormat::Tiff),
        "image/svg+xml" => Some(ImageFormat::Svg),
        _ => None,
    }
}

// ==================== Cache ====================

type SharedLoad = Shared<BoxFuture<'static, LoadState>>;

/// Bounded LRU in front of another loader
///
/// Entries are shared futures, so concurrent requests for one URL resolve
/// from a single fetch. Failed results stay cached until evicted.
pub struct CachedImageLoader<L> {
    inner: L,
    cache: Mutex<LruCache<String, SharedLoad>>,
}

impl<L: ImageLoader> CachedImageLoader<L> {
    pub fn new(inner: L, capacity: usize) -> Self {
        Self {
            inner,
            cache: Mutex::new(LruCache::new(capacity.max(1))),
        }
    }

    /// Number of cached URLs
    pub fn len(&self) -> usize {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<L: ImageLoader> ImageLoader for CachedImageLoader<L> {
    fn load(&self, url: &str) -> BoxFuture<'static, LoadState> {
        if url.trim().is_empty() {
            return future::ready(LoadState::Empty).boxed();
        }

        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(pending) = cache.get(url) {
            return pending.clone().boxed();
        }

        let shared = self.inner.load(url).shared();
        cache.insert(url.to_string(), shared.clone());
        shared.boxed()
    }
}

// ==================== Fallback ====================

/// Loader used when no HTTP client could be created; every load fails
pub struct UnavailableImageLoader {
    reason: Arc<str>,
}

impl UnavailableImageLoader {
    pub fn new(reason: impl Into<Arc<str>>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl ImageLoader for UnavailableImageLoader {
    fn load(&self, url: &str) -> BoxFuture<'static, LoadState> {
        if url.trim().is_empty() {
            return future::ready(LoadState::Empty).boxed();
        }
        future::ready(LoadState::Failed(self.reason.clone())).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Default)]
    struct CountingLoader {
        calls: Arc<AtomicUsize>,
    }

    impl ImageLoader for CountingLoader {
        fn load(&self, url: &str) -> BoxFuture<'static, LoadState> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            future::ready(LoadState::failed(format!("fake: {url}"))).boxed()
        }
    }

    #[test]
    fn test_sniff_common_formats() {
        assert!(matches!(
            sniff_image_format(b"\x89PNG\r\n\x1a\n...."),
            Some(ImageFormat::Png)
        ));
        assert!(matches!(
            sniff_image_format(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00]),
            Some(ImageFormat::Jpeg)
        ));
        assert!(matches!(sniff_image_format(b"GIF89a"), Some(ImageFormat::Gif)));
        assert!(matches!(
            sniff_image_format(b"RIFF\x24\x00\x00\x00WEBPVP8 "),
            Some(ImageFormat::Webp)
        ));
        assert!(matches!(
            sniff_image_format(b"  <?xml version=\"1.0\"?><svg></svg>"),
            Some(ImageFormat::Svg)
        ));
    }

    #[test]
    fn test_sniff_rejects_html() {
        assert!(sniff_image_format(b"<!DOCTYPE html><html></html>").is_none());
        assert!(sniff_image_format(b"").is_none());
    }

    #[test]
    fn test_format_from_mime_ignores_parameters() {
        assert!(matches!(
            format_from_mime("image/JPEG; charset=binary"),
            Some(ImageFormat::Jpeg)
        ));
        assert!(format_from_mime("text/html").is_none());
    }

    #[test]
    fn test_load_state_for_url() {
        assert!(matches!(LoadState::for_url(""), LoadState::Empty));
        assert!(matches!(LoadState::for_url("   "), LoadState::Empty));
        assert!(LoadState::for_url("https://example.com/a.png").is_loading());
    }

    #[test]
    fn test_http_loader_empty_url_is_placeholder() {
        let loader = HttpImageLoader::new().expect("client");
        let state = block_on(loader.load(""));
        assert!(matches!(state, LoadState::Empty));
    }

    #[test]
    fn test_cache_deduplicates_same_url() {
        let inner = CountingLoader::default();
        let calls = inner.calls.clone();
        let loader = CachedImageLoader::new(inner, 4);

        let first = loader.load("https://example.com/a.jpg");
        let second = loader.load("https://example.com/a.jpg");
        assert!(block_on(first).is_failed());
        assert!(block_on(second).is_failed());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(loader.len(), 1);
    }

    #[test]
    fn test_cache_evicts_least_recently_used() {
        let inner = CountingLoader::default();
        let calls = inner.calls.clone();
        let loader = CachedImageLoader::new(inner, 1);

        block_on(loader.load("https://example.com/a.jpg"));
        block_on(loader.load("https://example.com/b.jpg"));
        block_on(loader.load("https://example.com/a.jpg"));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(loader.len(), 1);
    }

    #[test]
    fn test_cache_skips_empty_url() {
        let inner = CountingLoader::default();
        let calls = inner.calls.clone();
        let loader = CachedImageLoader::new(inner, 4);

        assert!(matches!(block_on(loader.load("")), LoadState::Empty));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(loader.is_empty());
    }

    #[test]
    fn test_unavailable_loader_fails() {
        let loader = UnavailableImageLoader::new("no client");
        assert!(block_on(loader.load("https://example.com/a.jpg")).is_failed());
    }
}
