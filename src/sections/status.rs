//! Section fetch status

use serde::Serialize;
use std::fmt;

/// Lifecycle of one section's data
///
/// `Failed` keeps the underlying cause for logs and debugging output; the
/// rendered message comes from the section, never from this string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum FetchStatus<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for FetchStatus<T> {
    fn default() -> Self {
        FetchStatus::Idle
    }
}

impl<T> FetchStatus<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, FetchStatus::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchStatus::Failed(_))
    }

    /// Loaded data, if any
    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchStatus::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn loaded_mut(&mut self) -> Option<&mut T> {
        match self {
            FetchStatus::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Failure cause, if the load failed
    pub fn failure(&self) -> Option<&str> {
        match self {
            FetchStatus::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Enter the loading state, dropping any previous data
    pub fn begin(&mut self) {
        *self = FetchStatus::Loading;
    }

    /// Settle with the outcome of a load
    pub fn settle<E: fmt::Display>(&mut self, result: Result<T, E>) {
        *self = match result {
            Ok(data) => FetchStatus::Loaded(data),
            Err(e) => FetchStatus::Failed(e.to_string()),
        };
    }
}
