//! Tokio Runtime Bridge
//!
//! GPUI uses its own executor, but reqwest requires tokio.
//! This module provides a bridge to run tokio futures from GPUI context.
//!
//! ## Pattern
//!
//! ```text
//! GPUI async task (cx.spawn)
//!       │
//!       ▼
//! run_in_tokio(loader.load(url))
//!       │
//!       ▼
//! tokio::Runtime::spawn()
//!       │
//!       ▼
//! LoadState returned to GPUI
//! ```

use std::future::Future;
use std::sync::OnceLock;
use tokio::runtime::{Builder, Runtime};
use tokio::task::JoinHandle;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| {
        Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("snapfeed-io")
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime")
    })
}

/// Execute a future in the tokio runtime and wait for the result
///
/// Image fetches go through here so that decode and network work never
/// runs on the UI thread.
pub async fn run_in_tokio<F, T>(future: F) -> T
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    match spawn_in_tokio(future).await {
        Ok(result) => result,
        Err(e) => std::panic::resume_unwind(e.into_panic()),
    }
}

/// Start a future on the tokio runtime
///
/// Unlike [`run_in_tokio`], the caller keeps the handle and can abort the
/// work, e.g. a fetch for a row that scrolled away.
pub fn spawn_in_tokio<F>(future: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    get_runtime().spawn(future)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_in_tokio_returns_result() {
        let value = futures::executor::block_on(run_in_tokio(async {
            tokio::task::yield_now().await;
            21 * 2
        }));
        assert_eq!(value, 42);
    }

    #[test]
    fn test_aborted_work_is_cancelled() {
        let handle = spawn_in_tokio(futures::future::pending::<()>());
        handle.abort();
        let result = futures::executor::block_on(handle);
        assert!(result.is_err_and(|e| e.is_cancelled()));
    }
}
