//! User-entered post content, before it reaches the server.

use super::model::UserId;

/// Content for a new post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
    /// `None` until an author is picked.
    pub user_id: Option<UserId>,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>, user_id: UserId) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            user_id: Some(user_id),
        }
    }

    /// Every field is filled in.
    pub fn can_save(&self) -> bool {
        !self.title.is_empty() && !self.body.is_empty() && self.user_id.is_some()
    }
}

/// Replacement content for an existing post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostEdit {
    pub title: String,
    pub body: String,
    pub user_id: UserId,
}

impl PostEdit {
    pub fn new(title: impl Into<String>, body: impl Into<String>, user_id: UserId) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            user_id,
        }
    }

    pub fn can_save(&self) -> bool {
        !self.title.is_empty() && !self.body.is_empty()
    }
}
