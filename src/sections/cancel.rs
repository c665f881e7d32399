//! Cancellable section loads
//!
//! A section load is wrapped so its owner can stop it when the view goes
//! away. Dropping the [`LoadGuard`] aborts the load; the wrapped future then
//! resolves to `None` without polling the inner batch again.

use futures_util::future::{abortable, AbortHandle};
use std::future::Future;

/// Owner-side handle of an in-flight load
#[derive(Debug)]
pub struct LoadGuard {
    handle: AbortHandle,
}

impl LoadGuard {
    /// Abort the load now
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }
}

impl Drop for LoadGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Wrap a future so it can be aborted through the returned guard
pub fn cancellable<F>(future: F) -> (impl Future<Output = Option<F::Output>>, LoadGuard)
where
    F: Future,
{
    let (future, handle) = abortable(future);
    let wrapped = async move { future.await.ok() };
    (wrapped, LoadGuard { handle })
}
