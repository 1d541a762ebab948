//! Three-state lifecycle shared by every screen that renders remote data.
//!
//! DESIGN
//! ======
//! A view starts in `Loading` the moment it is created and settles exactly
//! once into `Success` or `Failure`. Admin lists start a fresh cycle after a
//! save or delete with [`ViewState::restart`]; public screens never do.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use wire::ApiError;

/// Render state of one remote resource.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ViewState<T> {
    #[default]
    Loading,
    Success(T),
    /// Human-readable message for the error banner.
    Failure(String),
}

impl<T> ViewState<T> {
    /// Settle a request outcome into a terminal state.
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(err) => Self::Failure(err.user_message()),
        }
    }

    /// Begin a new cycle, discarding the previous outcome.
    pub fn restart(&mut self) {
        *self = Self::Loading;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ViewState<U> {
        match self {
            Self::Loading => ViewState::Loading,
            Self::Success(data) => ViewState::Success(f(data)),
            Self::Failure(message) => ViewState::Failure(message),
        }
    }
}

impl<T> ViewState<Vec<T>> {
    /// Number of rows the populated view would render; zero otherwise.
    pub fn row_count(&self) -> usize {
        self.data().map_or(0, Vec::len)
    }
}
