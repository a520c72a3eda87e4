//! # Store Abstraction
//!
//! `SeedStore` is the persistence seam for the seeding workflow: per entity a
//! "create one record, return it with its assigned id" write, plus a
//! read-only count over all four tables and a teardown hook. The orchestrator
//! is generic over this trait; the production implementation is
//! [`postgres::PgStore`], and tests use an in-memory store from
//! `forumseed-testutil`.
//!
//! Trait methods speak `sqlx::Error`; the orchestrator attaches entity and
//! record-index context when it wraps them into `SeedError`.

use serde::{Deserialize, Serialize};

use crate::model::{
    Community, NewCommunity, NewPost, NewProfile, NewUser, Post, Profile, User,
};

pub mod postgres;

/// Per-table record counts, as reported by the existence guard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreCounts {
    pub users: u64,
    pub profiles: u64,
    pub communities: u64,
    pub posts: u64,
}

impl StoreCounts {
    pub fn total(&self) -> u64 {
        self.users + self.profiles + self.communities + self.posts
    }

    /// The existence guard: seeding only runs when this is true.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Persistence collaborator for the seeding workflow.
///
/// Create calls within a phase may run concurrently, so implementations must
/// be usable through a shared reference.
#[allow(async_fn_in_trait)]
pub trait SeedStore {
    /// Count existing records across all four tables. Read-only.
    async fn counts(&self) -> sqlx::Result<StoreCounts>;

    async fn create_user(&self, user: NewUser) -> sqlx::Result<User>;

    async fn create_profile(&self, profile: NewProfile) -> sqlx::Result<Profile>;

    async fn create_community(&self, community: NewCommunity) -> sqlx::Result<Community>;

    async fn create_post(&self, post: NewPost) -> sqlx::Result<Post>;

    /// Release the underlying connection. Safe to call once on any exit path.
    async fn close(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_counts_pass_the_guard() {
        assert!(StoreCounts::default().is_empty());
    }

    #[test]
    fn any_single_table_blocks_the_guard() {
        let counts = StoreCounts {
            posts: 1,
            ..Default::default()
        };
        assert!(!counts.is_empty());
        assert_eq!(counts.total(), 1);
    }
}
