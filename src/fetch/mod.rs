//! Per-page fetch lifecycle.
//!
//! A mounted page owns a [`FetchHandle`] for its single in-flight request.
//! Dropping the handle (the page unmounting) aborts the request task, and
//! results carry the [`MountId`] of the page that asked for them so a late
//! result can be recognized and discarded.

use std::future::Future;

use futures::future::{abortable, AbortHandle};

use crate::error::FetchError;

/// Identifies one mounting of one page. Strictly increasing per app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MountId(pub u64);

impl MountId {
    pub fn next(self) -> Self {
        MountId(self.0 + 1)
    }
}

impl std::fmt::Display for MountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// State of a page's data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(FetchError),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, FetchState::Loaded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchState::Failed(_))
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchState<U> {
        match self {
            FetchState::Loading => FetchState::Loading,
            FetchState::Loaded(value) => FetchState::Loaded(f(value)),
            FetchState::Failed(err) => FetchState::Failed(err),
        }
    }
}

impl<T> From<Result<T, FetchError>> for FetchState<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => FetchState::Loaded(value),
            Err(err) => FetchState::Failed(err),
        }
    }
}

/// Owner of one spawned fetch task. Aborts the task on drop.
#[derive(Debug)]
pub struct FetchHandle {
    mount_id: MountId,
    abort: AbortHandle,
}

impl FetchHandle {
    /// Spawn `task` on the tokio runtime, abortable through the returned handle.
    pub fn spawn<F>(mount_id: MountId, task: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let (task, abort) = abortable(task);
        tokio::spawn(async move {
            if task.await.is_err() {
                tracing::debug!("fetch for mount {} aborted", mount_id);
            }
        });
        Self { mount_id, abort }
    }

    pub fn mount_id(&self) -> MountId {
        self.mount_id
    }

    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

impl Drop for FetchHandle {
    fn drop(&mut self) {
        self.abort.abort();
    }
}
