//! REST client for the posts and users collections.
//!
//! One call is one round trip; nothing here retries or caches.

mod client;
pub mod error;
pub mod types;

pub use client::HttpApi;
pub use error::ApiError;
pub use types::{DeleteConfirmation, NewPostRequest, RawPost, UpdatePostRequest};

use async_trait::async_trait;

use crate::posts::PostId;
use crate::users::User;

/// Remote operations on the posts collection.
#[async_trait]
pub trait PostApi: Send + Sync {
    /// `GET /posts`
    async fn list_posts(&self) -> Result<Vec<RawPost>, ApiError>;

    /// `POST /posts`; the service echoes the body with an assigned id.
    async fn create_post(&self, request: &NewPostRequest) -> Result<RawPost, ApiError>;

    /// `PUT /posts/{id}`; the service echoes the body.
    async fn update_post(
        &self,
        id: PostId,
        request: &UpdatePostRequest,
    ) -> Result<RawPost, ApiError>;

    /// `DELETE /posts/{id}`; only `200 OK` counts as confirmation.
    async fn delete_post(&self, id: PostId) -> Result<DeleteConfirmation, ApiError>;
}

/// Remote read access to the users collection.
#[async_trait]
pub trait UserApi: Send + Sync {
    /// `GET /users`
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;
}
