use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::posts::{PostId, Reactions, UserId};

/// A post exactly as the remote API returns it.
///
/// `date` and `reactions` are client-side fields; the service only has them
/// when it echoes a request body that carried them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPost {
    pub id: PostId,
    pub user_id: UserId,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reactions: Option<Reactions>,
}

/// Body of `POST /posts`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPostRequest {
    pub user_id: UserId,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub reactions: Reactions,
}

/// Body of `PUT /posts/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub id: PostId,
    pub user_id: UserId,
    pub title: String,
    pub body: String,
    pub reactions: Reactions,
}

/// Server acknowledgement of a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pub id: PostId,
}
