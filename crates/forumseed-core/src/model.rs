//! # Data Model
//!
//! The four forum entities this tool seeds. Ids are assigned by the store, so
//! each entity comes in two shapes: a `New*` candidate payload produced by the
//! generators, and the persisted record returned by the store with its id.
//!
//! The tool does not own the schema; these types mirror the tables as given.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User role, stored uppercase in the database enum.
///
/// Communities may only be owned by users with an elevated role
/// (`Moderator` or `Admin`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Regular,
    Moderator,
    Admin,
}

impl Role {
    /// Whether this role qualifies its holder to own a community.
    pub fn is_elevated(self) -> bool {
        matches!(self, Role::Moderator | Role::Admin)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Regular => "regular",
            Role::Moderator => "moderator",
            Role::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    /// Argon2 hash, never the plaintext.
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProfile {
    pub user_id: Uuid,
    pub bio: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub bio: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCommunity {
    pub name: String,
    pub description: String,
    pub owner_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Community {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub owner_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub published: bool,
    pub community_id: Uuid,
    pub author_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub community_id: Uuid,
    pub author_id: Uuid,
}
