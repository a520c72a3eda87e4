//! Test utilities for forumseed.
//!
//! [`MemoryStore`] implements `SeedStore` over an in-memory event log. It
//! assigns UUIDs like the real store, records every create call in arrival
//! order, and can be pre-populated (guard tests) or told to reject the nth
//! create of a given entity (phase-abort tests).

use std::sync::Mutex;

use uuid::Uuid;

use forumseed_core::model::{
    Community, NewCommunity, NewPost, NewProfile, NewUser, Post, Profile, User,
};
use forumseed_core::store::{SeedStore, StoreCounts};

/// Which entity a create call targeted, in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    User,
    Profile,
    Community,
    Post,
}

#[derive(Default)]
struct Inner {
    users: Vec<User>,
    profiles: Vec<Profile>,
    communities: Vec<Community>,
    posts: Vec<Post>,
    /// Every create call that was accepted, in the order it arrived.
    events: Vec<Entity>,
    /// Reject the nth create call (0-based) of this entity.
    fail_on: Option<(Entity, usize)>,
    /// Counts reported on top of created records, simulating prior data.
    preexisting: StoreCounts,
    closed: bool,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already reports the given counts, for guard tests.
    pub fn pre_seeded(counts: StoreCounts) -> Self {
        let store = Self::new();
        store.inner.lock().unwrap().preexisting = counts;
        store
    }

    /// Reject the `index`th create call (0-based) of `entity`.
    pub fn fail_on(self, entity: Entity, index: usize) -> Self {
        self.inner.lock().unwrap().fail_on = Some((entity, index));
        self
    }

    /// Arrival order of all accepted create calls.
    pub fn events(&self) -> Vec<Entity> {
        self.inner.lock().unwrap().events.clone()
    }

    pub fn created_counts(&self) -> StoreCounts {
        let inner = self.inner.lock().unwrap();
        StoreCounts {
            users: inner.users.len() as u64,
            profiles: inner.profiles.len() as u64,
            communities: inner.communities.len() as u64,
            posts: inner.posts.len() as u64,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.inner.lock().unwrap().closed
    }
}

impl Inner {
    /// Count-or-reject bookkeeping shared by all four create paths.
    fn admit(&mut self, entity: Entity) -> sqlx::Result<()> {
        let nth = self.events.iter().filter(|e| **e == entity).count();
        if self.fail_on == Some((entity, nth)) {
            return Err(sqlx::Error::Protocol(format!(
                "injected failure on {:?} create {}",
                entity, nth
            )));
        }
        self.events.push(entity);
        Ok(())
    }
}

impl SeedStore for MemoryStore {
    async fn counts(&self) -> sqlx::Result<StoreCounts> {
        let inner = self.inner.lock().unwrap();
        Ok(StoreCounts {
            users: inner.preexisting.users + inner.users.len() as u64,
            profiles: inner.preexisting.profiles + inner.profiles.len() as u64,
            communities: inner.preexisting.communities + inner.communities.len() as u64,
            posts: inner.preexisting.posts + inner.posts.len() as u64,
        })
    }

    async fn create_user(&self, user: NewUser) -> sqlx::Result<User> {
        let mut inner = self.inner.lock().unwrap();
        inner.admit(Entity::User)?;
        let user = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            password: user.password,
            role: user.role,
        };
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn create_profile(&self, profile: NewProfile) -> sqlx::Result<Profile> {
        let mut inner = self.inner.lock().unwrap();
        inner.admit(Entity::Profile)?;
        let profile = Profile {
            id: Uuid::new_v4(),
            user_id: profile.user_id,
            bio: profile.bio,
        };
        inner.profiles.push(profile.clone());
        Ok(profile)
    }

    async fn create_community(&self, community: NewCommunity) -> sqlx::Result<Community> {
        let mut inner = self.inner.lock().unwrap();
        inner.admit(Entity::Community)?;
        let community = Community {
            id: Uuid::new_v4(),
            name: community.name,
            description: community.description,
            owner_id: community.owner_id,
        };
        inner.communities.push(community.clone());
        Ok(community)
    }

    async fn create_post(&self, post: NewPost) -> sqlx::Result<Post> {
        let mut inner = self.inner.lock().unwrap();
        inner.admit(Entity::Post)?;
        let post = Post {
            id: Uuid::new_v4(),
            title: post.title,
            content: post.content,
            published: post.published,
            community_id: post.community_id,
            author_id: post.author_id,
        };
        inner.posts.push(post.clone());
        Ok(post)
    }

    async fn close(&self) {
        self.inner.lock().unwrap().closed = true;
    }
}
