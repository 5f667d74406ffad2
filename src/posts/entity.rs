//! Normalized post collection.
//!
//! Posts are kept by id with a separate id list ordered by descending
//! `created_at`; equal timestamps keep first-insertion order. The whole
//! collection sits behind one copy-on-write `Arc`, so cloning is cheap and a
//! clone never observes mutations made through another value.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;

use super::error::EntityError;
use super::model::{Post, PostId, ReactionKind};

#[derive(Debug, Clone, Default, PartialEq)]
struct Inner {
    ids: Vec<PostId>,
    entities: HashMap<PostId, Post>,
    /// First-insertion rank per id, used to break `created_at` ties.
    ranks: HashMap<PostId, u64>,
    next_rank: u64,
}

impl Inner {
    /// Insert or replace without re-sorting.
    fn put(&mut self, post: Post) {
        let id = post.id;
        if self.entities.insert(id, post).is_none() {
            self.ids.push(id);
            self.ranks.insert(id, self.next_rank);
            self.next_rank += 1;
        }
    }

    fn sort(&mut self) {
        let Inner {
            ids,
            entities,
            ranks,
            ..
        } = self;
        ids.sort_by_key(|id| (Reverse(entities[id].created_at), ranks[id]));
    }
}

/// Posts keyed by id, iterated newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityStore {
    inner: Arc<Inner>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace every post. Applying the same batch twice is a no-op
    /// the second time.
    pub fn upsert_many<I>(&mut self, posts: I)
    where
        I: IntoIterator<Item = Post>,
    {
        let mut posts = posts.into_iter().peekable();
        if posts.peek().is_none() {
            return;
        }

        let inner = Arc::make_mut(&mut self.inner);
        for post in posts {
            inner.put(post);
        }
        inner.sort();
    }

    /// Insert a post whose id must not be present yet.
    ///
    /// # Errors
    /// Returns [`EntityError::DuplicateId`] and leaves the store untouched
    /// when the id is already taken.
    pub fn add_one(&mut self, post: Post) -> Result<(), EntityError> {
        if self.contains(post.id) {
            return Err(EntityError::DuplicateId { id: post.id });
        }
        let inner = Arc::make_mut(&mut self.inner);
        inner.put(post);
        inner.sort();
        Ok(())
    }

    /// Insert or replace a single post.
    pub fn upsert_one(&mut self, post: Post) {
        let inner = Arc::make_mut(&mut self.inner);
        inner.put(post);
        inner.sort();
    }

    /// Remove a post, returning it if it was present.
    pub fn remove_one(&mut self, id: PostId) -> Option<Post> {
        if !self.contains(id) {
            return None;
        }
        let inner = Arc::make_mut(&mut self.inner);
        inner.ids.retain(|existing| *existing != id);
        inner.ranks.remove(&id);
        inner.entities.remove(&id)
    }

    /// Bump one reaction counter. Returns `false` when the post is absent.
    pub fn increment_reaction(&mut self, id: PostId, kind: ReactionKind) -> bool {
        if !self.contains(id) {
            return false;
        }
        let inner = Arc::make_mut(&mut self.inner);
        match inner.entities.get_mut(&id) {
            Some(post) => {
                post.reactions.increment(kind);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.inner.entities.get(&id)
    }

    pub fn contains(&self, id: PostId) -> bool {
        self.inner.entities.contains_key(&id)
    }

    /// Ids in canonical order.
    pub fn ids(&self) -> &[PostId] {
        &self.inner.ids
    }

    /// Posts in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Post> + '_ {
        self.inner.ids.iter().map(|id| &self.inner.entities[id])
    }

    pub fn len(&self) -> usize {
        self.inner.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.ids.is_empty()
    }

    /// True when both values share the same underlying snapshot, i.e. neither
    /// has been mutated since one was cloned from the other.
    pub fn same_snapshot(&self, other: &EntityStore) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
