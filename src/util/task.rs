//! Cancellable local tasks and timers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers that suspend (role lookups, alert expiry) hold a `TaskHandle`
//! for every outstanding task. Dropping or cancelling the handle guarantees
//! the task is never polled again, so a torn-down controller cannot be
//! mutated by a late completion.
//!
//! Browser builds (`hydrate`) spawn on the wasm microtask queue and sleep
//! with `gloo-timers`; native builds use the current tokio `LocalSet`.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::future::Future;
use std::time::Duration;

use futures::future::{AbortHandle, abortable};

/// Owning handle for a spawned task. The task is aborted when the handle is
/// cancelled or dropped.
#[derive(Debug)]
pub struct TaskHandle {
    abort: AbortHandle,
}

impl TaskHandle {
    /// Abort the task. Idempotent.
    pub fn cancel(&self) {
        self.abort.abort();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

/// Spawn `fut` on the local executor and return its cancellation handle.
///
/// Must be called from within a local executor context (a tokio `LocalSet`
/// natively, the browser event loop under `hydrate`).
pub fn spawn_cancellable<F>(fut: F) -> TaskHandle
where
    F: Future<Output = ()> + 'static,
{
    let (task, abort) = abortable(fut);
    spawn_local(async move {
        // `Err(Aborted)` is the expected outcome of a cancelled task.
        let _ = task.await;
    });
    TaskHandle { abort }
}

/// Wait for `duration` on the platform timer.
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        tokio::time::sleep(duration).await;
    }
}

fn spawn_local<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        wasm_bindgen_futures::spawn_local(fut);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        drop(tokio::task::spawn_local(fut));
    }
}
