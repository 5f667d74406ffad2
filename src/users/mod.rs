//! Read-only user directory consumed by the posts slice.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::api::{ApiError, UserApi};
use crate::posts::UserId;

/// A post author. Extra fields the API sends are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

/// Lookup capability the posts slice needs from the users side.
pub trait UserDirectory {
    fn all_users(&self) -> &[User];

    fn user_by_id(&self, id: UserId) -> Option<&User> {
        self.all_users().iter().find(|user| user.id == id)
    }
}

/// Unkeyed list of users, replaced wholesale on fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserList {
    users: Vec<User>,
}

impl UserList {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Load the full list from the remote API.
    pub async fn fetch<A>(api: &A) -> Result<Self, ApiError>
    where
        A: UserApi + ?Sized,
    {
        let users = api.list_users().await?;
        tracing::info!(count = users.len(), "Fetched users");
        Ok(Self::new(users))
    }

    pub fn add_user(&mut self, id: UserId, name: impl Into<String>) {
        self.users.push(User {
            id,
            name: name.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserDirectory for UserList {
    fn all_users(&self) -> &[User] {
        &self.users
    }
}

#[async_trait]
impl UserApi for UserList {
    /// Serves the list as if it were remote, for wiring tests and demos.
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        Ok(self.users.clone())
    }
}
