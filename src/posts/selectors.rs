//! Read-only projections over [`PostsState`].

use std::sync::Arc;

use parking_lot::Mutex;

use crate::users::UserDirectory;

use super::entity::EntityStore;
use super::model::{Post, PostId, UserId};
use super::state::{FetchStatus, PostsState};

/// Shown when a post's author isn't among the known users.
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

/// Every post, newest first.
pub fn all_posts(state: &PostsState) -> Vec<&Post> {
    state.posts.iter().collect()
}

pub fn post_by_id(state: &PostsState, id: PostId) -> Option<&Post> {
    state.posts.get(id)
}

pub fn post_ids(state: &PostsState) -> &[PostId] {
    state.posts.ids()
}

pub fn posts_status(state: &PostsState) -> FetchStatus {
    state.status
}

pub fn posts_error(state: &PostsState) -> Option<&str> {
    state.error.as_deref()
}

pub fn count(state: &PostsState) -> u64 {
    state.count
}

/// Display name for a post's author.
pub fn author_name<'a, D>(post: &Post, users: &'a D) -> &'a str
where
    D: UserDirectory + ?Sized,
{
    users
        .user_by_id(post.user_id)
        .map_or(UNKNOWN_AUTHOR, |user| user.name.as_str())
}

struct Memo {
    snapshot: EntityStore,
    user_id: UserId,
    posts: Arc<[Post]>,
}

/// Posts written by one user, memoized on the store snapshot and user id.
///
/// Holding a clone of the last store seen keeps its snapshot alive, so any
/// later mutation of the state's store is guaranteed to produce a different
/// snapshot and invalidate the cache.
#[derive(Default)]
pub struct PostsByUser {
    memo: Mutex<Option<Memo>>,
    recomputations: Mutex<usize>,
}

impl PostsByUser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&self, state: &PostsState, user_id: UserId) -> Arc<[Post]> {
        let mut memo = self.memo.lock();
        if let Some(cached) = memo.as_ref() {
            if cached.user_id == user_id && cached.snapshot.same_snapshot(&state.posts) {
                return Arc::clone(&cached.posts);
            }
        }

        let posts: Arc<[Post]> = state
            .posts
            .iter()
            .filter(|post| post.user_id == user_id)
            .cloned()
            .collect();
        *self.recomputations.lock() += 1;

        *memo = Some(Memo {
            snapshot: state.posts.clone(),
            user_id,
            posts: Arc::clone(&posts),
        });
        posts
    }

    /// How many times the filter actually ran.
    pub fn recomputations(&self) -> usize {
        *self.recomputations.lock()
    }
}
