//! Remote calls that complete into a [`PostsIntent`].
//!
//! These never touch state. Dispatching the returned intent is the
//! completion step, so callers may run several at once and apply the results
//! in whatever order they finish; the last one applied wins.

use chrono::{TimeDelta, Utc};

use crate::api::{ApiError, NewPostRequest, PostApi, UpdatePostRequest};

use super::draft::{PostDraft, PostEdit};
use super::error::PostsError;
use super::intent::PostsIntent;
use super::model::{Post, PostId, Reactions};
use super::normalize::{normalize_batch, normalize_one};

/// Result of an update: always something to dispatch, plus the error (if
/// any) for the caller.
#[derive(Debug)]
pub struct UpdateOutcome {
    pub intent: PostsIntent,
    pub error: Option<ApiError>,
}

/// Fetch every post. Failures become [`PostsIntent::FetchFailed`].
pub async fn fetch_posts<A>(api: &A, backdate_step: TimeDelta) -> PostsIntent
where
    A: PostApi + ?Sized,
{
    match api.list_posts().await {
        Ok(raws) => {
            tracing::info!(count = raws.len(), "Fetched posts");
            PostsIntent::FetchSucceeded {
                posts: normalize_batch(raws, Utc::now(), backdate_step),
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Fetching posts failed");
            PostsIntent::FetchFailed {
                message: e.to_string(),
            }
        }
    }
}

/// Submit a new post. The normalized echo is dispatched as
/// [`PostsIntent::Created`].
pub async fn create_post<A>(api: &A, draft: &PostDraft) -> Result<Post, PostsError>
where
    A: PostApi + ?Sized,
{
    let Some(user_id) = draft.user_id.filter(|_| draft.can_save()) else {
        return Err(PostsError::IncompleteDraft);
    };

    let request = NewPostRequest {
        user_id,
        title: draft.title.clone(),
        body: draft.body.clone(),
        date: Utc::now(),
        reactions: Reactions::default(),
    };

    let raw = api.create_post(&request).await?;
    tracing::info!(post_id = raw.id, "Post created");
    Ok(normalize_one(raw, Utc::now()))
}

/// Submit an edit of `original`.
///
/// If the server rejects it, the outcome merges the pre-edit post back with a
/// fresh timestamp and carries the error for the caller.
pub async fn update_post<A>(api: &A, original: &Post, edit: &PostEdit) -> UpdateOutcome
where
    A: PostApi + ?Sized,
{
    let request = UpdatePostRequest {
        id: original.id,
        user_id: edit.user_id,
        title: edit.title.clone(),
        body: edit.body.clone(),
        reactions: original.reactions,
    };

    match api.update_post(original.id, &request).await {
        Ok(raw) => {
            tracing::info!(post_id = raw.id, "Post updated");
            UpdateOutcome {
                intent: PostsIntent::Updated {
                    post: Some(normalize_one(raw, Utc::now())),
                },
                error: None,
            }
        }
        Err(e) => {
            tracing::warn!(post_id = original.id, error = %e, "Update failed, keeping pre-edit post");
            let mut fallback = original.clone();
            fallback.created_at = Utc::now();
            UpdateOutcome {
                intent: PostsIntent::Updated {
                    post: Some(fallback),
                },
                error: Some(e),
            }
        }
    }
}

/// Delete a post. Only a confirmed delete produces an intent.
pub async fn delete_post<A>(api: &A, id: PostId) -> Result<PostsIntent, ApiError>
where
    A: PostApi + ?Sized,
{
    let confirmation = api.delete_post(id).await?;
    tracing::info!(post_id = confirmation.id, "Post deleted");
    Ok(PostsIntent::Deleted {
        id: confirmation.id,
    })
}
