//! Shared runtime for synchronous callers.
//!
//! Synchronous hosts (UI glue, scripts) can drive icon fetches through the
//! runtime here instead of owning one.

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::Runtime;

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

fn runtime() -> &'static Runtime {
    RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("mui-icon-net")
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime")
    })
}

/// Block on a future using the shared runtime, creating it on first use.
///
/// # Warning
///
/// Do not call this from within an async context; it will panic inside a
/// tokio worker and block any other executor thread.
pub fn block_on<F: Future>(future: F) -> F::Output {
    runtime().block_on(future)
}
