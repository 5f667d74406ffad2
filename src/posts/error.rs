//! Error types for the posts slice.

use thiserror::Error;

use crate::api::ApiError;

use super::model::PostId;

/// Rejected entity-store mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityError {
    /// `add_one` refuses to overwrite an existing post.
    #[error("Post {id} already exists")]
    DuplicateId { id: PostId },
}

/// Errors reported to the caller of an orchestrated operation.
#[derive(Debug, Error)]
pub enum PostsError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Post {id} already exists")]
    DuplicateId { id: PostId },

    #[error("Post {id} not found")]
    NotFound { id: PostId },

    /// A draft with an empty title, body or author was submitted.
    #[error("Post draft is incomplete")]
    IncompleteDraft,
}

impl From<EntityError> for PostsError {
    fn from(err: EntityError) -> Self {
        match err {
            EntityError::DuplicateId { id } => PostsError::DuplicateId { id },
        }
    }
}
