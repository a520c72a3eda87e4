//! # Seeding Orchestrator
//!
//! Runs the four strictly ordered phases (users, profiles, communities,
//! posts) against a [`SeedStore`]. Within a phase every create call is
//! dispatched concurrently and awaited as a batch (`try_join_all`), so the
//! first rejected write aborts the rest of the phase and propagates. The
//! phase boundary is a synchronization barrier: no phase starts until every
//! call in the prior phase has resolved, which is the only ordering guarantee
//! the foreign keys rely on.
//!
//! There is no retry and no cross-phase rollback: writes from completed
//! phases stay committed when a later phase fails.

use std::cell::RefCell;

use futures::future::try_join_all;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, SeedError};
use crate::generate::{self, password};
use crate::model::{Community, Post, Profile, Role, User};
use crate::store::SeedStore;

/// Parameters for one seeding run.
#[derive(Debug, Clone)]
pub struct SeedPlan {
    /// Regular user count (first batch).
    pub regular: usize,
    /// Admin user count (second batch).
    pub admins: usize,
    /// Moderator user count (third batch).
    pub moderators: usize,
    /// Post count.
    pub posts: usize,
    /// RNG seed; wall clock when absent.
    pub rng_seed: Option<u64>,
    /// Plaintext shared by all seeded accounts, hashed once per run.
    pub password: String,
}

impl Default for SeedPlan {
    fn default() -> Self {
        Self {
            regular: 30,
            admins: 3,
            moderators: 20,
            posts: 30,
            rng_seed: None,
            password: password::DEFAULT_PASSWORD.to_string(),
        }
    }
}

impl SeedPlan {
    pub fn total_users(&self) -> usize {
        self.regular + self.admins + self.moderators
    }
}

/// The four phases, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Users,
    Profiles,
    Communities,
    Posts,
}

impl Phase {
    /// 1-based position, for "[2/4]"-style progress prefixes.
    pub fn number(self) -> usize {
        match self {
            Phase::Users => 1,
            Phase::Profiles => 2,
            Phase::Communities => 3,
            Phase::Posts => 4,
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            Phase::Users => "users",
            Phase::Profiles => "profiles",
            Phase::Communities => "communities",
            Phase::Posts => "posts",
        }
    }
}

/// Per-phase success counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedReport {
    pub users: usize,
    pub profiles: usize,
    pub communities: usize,
    pub posts: usize,
}

/// Everything a successful run created, with store-assigned ids.
#[derive(Debug, Clone)]
pub struct SeedOutcome {
    pub users: Vec<User>,
    pub profiles: Vec<Profile>,
    pub communities: Vec<Community>,
    pub posts: Vec<Post>,
}

impl SeedOutcome {
    pub fn report(&self) -> SeedReport {
        SeedReport {
            users: self.users.len(),
            profiles: self.profiles.len(),
            communities: self.communities.len(),
            posts: self.posts.len(),
        }
    }
}

/// Check the existence guard: error out unless the store is completely empty.
///
/// Read-only; this is what makes the whole process idempotent.
pub async fn ensure_unseeded<S: SeedStore>(store: &S) -> Result<()> {
    let counts = store
        .counts()
        .await
        .map_err(|source| SeedError::CountFailed { source })?;
    if counts.is_empty() {
        Ok(())
    } else {
        Err(SeedError::AlreadySeeded { counts })
    }
}

/// Execute a full seeding run against an empty store.
///
/// The caller is expected to have passed [`ensure_unseeded`] first; this
/// function only sequences the four creation phases. `progress` receives
/// `(phase, None)` when a phase starts and `(phase, Some(created))` when it
/// completes, so a CLI can drive spinners without the core knowing about
/// terminals.
pub async fn run_seed<S: SeedStore>(
    store: &S,
    plan: &SeedPlan,
    progress: Option<&(dyn Fn(Phase, Option<usize>) + Send + Sync)>,
) -> Result<SeedOutcome> {
    let mut rng = match plan.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Hashing is deliberately slow, so do it once and share the hash.
    let password_hash = password::hash_password(&plan.password)?;

    // Phase 1: users, in fixed batch order regular -> admin -> moderator.
    report(progress, Phase::Users, None);
    tracing::info!(
        regular = plan.regular,
        admins = plan.admins,
        moderators = plan.moderators,
        "creating users"
    );
    let mut candidates = generate::users(plan.regular, Role::Regular, &password_hash, &mut rng);
    candidates.extend(generate::users(plan.admins, Role::Admin, &password_hash, &mut rng));
    candidates.extend(generate::users(
        plan.moderators,
        Role::Moderator,
        &password_hash,
        &mut rng,
    ));

    let users: Vec<User> = try_join_all(candidates.into_iter().enumerate().map(
        |(index, user)| async move {
            store
                .create_user(user)
                .await
                .map_err(|source| SeedError::CreateFailed {
                    entity: "user",
                    index,
                    source,
                })
        },
    ))
    .await?;
    report(progress, Phase::Users, Some(users.len()));

    // Phase 2: profiles, one per created user, using the real assigned ids.
    report(progress, Phase::Profiles, None);
    tracing::info!(count = users.len(), "creating profiles");
    let candidates = generate::profiles(&users, &mut rng);

    let profiles: Vec<Profile> = try_join_all(candidates.into_iter().enumerate().map(
        |(index, profile)| async move {
            store
                .create_profile(profile)
                .await
                .map_err(|source| SeedError::CreateFailed {
                    entity: "profile",
                    index,
                    source,
                })
        },
    ))
    .await?;
    report(progress, Phase::Profiles, Some(profiles.len()));

    // Phase 3: communities, owners sampled among elevated-role users only.
    report(progress, Phase::Communities, None);
    let elevated: Vec<Uuid> = users
        .iter()
        .filter(|u| u.role.is_elevated())
        .map(|u| u.id)
        .collect();
    if elevated.is_empty() {
        return Err(SeedError::NoElevatedUsers);
    }
    tracing::info!(eligible_owners = elevated.len(), "creating communities");
    let candidates = generate::communities(|| elevated[rng.random_range(0..elevated.len())]);

    let communities: Vec<Community> = try_join_all(candidates.into_iter().enumerate().map(
        |(index, community)| async move {
            store
                .create_community(community)
                .await
                .map_err(|source| SeedError::CreateFailed {
                    entity: "community",
                    index,
                    source,
                })
        },
    ))
    .await?;
    report(progress, Phase::Communities, Some(communities.len()));

    // Phase 4: posts, sampled over the full created collections.
    report(progress, Phase::Posts, None);
    if plan.posts > 0 && communities.is_empty() {
        return Err(SeedError::NoCommunities);
    }
    tracing::info!(count = plan.posts, "creating posts");
    // Both resolvers need randomness, so they share a child RNG derived from
    // the run's stream. Determinism under a fixed seed is preserved.
    let pick_rng = RefCell::new(StdRng::from_rng(&mut rng));
    let candidates = generate::posts(
        plan.posts,
        || {
            let mut r = pick_rng.borrow_mut();
            communities[r.random_range(0..communities.len())].id
        },
        || {
            let mut r = pick_rng.borrow_mut();
            users[r.random_range(0..users.len())].id
        },
        &mut rng,
    );

    let posts: Vec<Post> = try_join_all(candidates.into_iter().enumerate().map(
        |(index, post)| async move {
            store
                .create_post(post)
                .await
                .map_err(|source| SeedError::CreateFailed {
                    entity: "post",
                    index,
                    source,
                })
        },
    ))
    .await?;
    report(progress, Phase::Posts, Some(posts.len()));

    Ok(SeedOutcome {
        users,
        profiles,
        communities,
        posts,
    })
}

fn report(
    progress: Option<&(dyn Fn(Phase, Option<usize>) + Send + Sync)>,
    phase: Phase,
    done: Option<usize>,
) {
    if let Some(cb) = progress {
        cb(phase, done);
    }
}
