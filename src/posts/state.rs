//! State of the posts slice.

use std::fmt;

use crate::mvi::SliceState;

use super::entity::EntityStore;

/// Lifecycle of the bulk fetch. Create/update/delete don't touch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl FetchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            FetchStatus::Idle => "idle",
            FetchStatus::Loading => "loading",
            FetchStatus::Succeeded => "succeeded",
            FetchStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the posts slice holds.
///
/// Read it through [`super::selectors`]; change it through
/// [`super::PostsReducer`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostsState {
    pub(crate) posts: EntityStore,
    pub(crate) status: FetchStatus,
    pub(crate) error: Option<String>,
    /// UI interaction counter, unrelated to the posts themselves.
    pub(crate) count: u64,
}

impl SliceState for PostsState {}

impl PostsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posts(&self) -> &EntityStore {
        &self.posts
    }
}
