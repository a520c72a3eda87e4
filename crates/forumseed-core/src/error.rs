//! # Error Types
//!
//! Defines `SeedError`, the unified error enum for every failure mode in the
//! seeding workflow. Every variant carries enough context (entity name, record
//! index, existing counts) to debug a failed run without digging through logs.

use std::path::PathBuf;

use thiserror::Error;

use crate::store::StoreCounts;

/// All errors that can occur while seeding.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Database connection failed: {message}\n  Connection string: {connection_hint}\n  Cause: {source}")]
    Connection {
        message: String,
        connection_hint: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("No database URL provided. forumseed looks for a connection in this order:\n  1. --db flag\n  2. DATABASE_URL environment variable\n  3. .env file with DATABASE_URL\n  4. forumseed.toml [database] section\n\nExample: forumseed seed --db postgres://localhost/forum")]
    NoDatabaseUrl,

    #[error(
        "Database already has data ({} users, {} profiles, {} communities, {} posts): refusing to seed",
        counts.users, counts.profiles, counts.communities, counts.posts
    )]
    AlreadySeeded { counts: StoreCounts },

    #[error("Existence check failed: {source}")]
    CountFailed {
        #[source]
        source: sqlx::Error,
    },

    #[error("Create failed on {entity} record {index}: {source}")]
    CreateFailed {
        entity: &'static str,
        index: usize,
        #[source]
        source: sqlx::Error,
    },

    #[error("No moderator or admin users in this run: community owners require an elevated role")]
    NoElevatedUsers,

    #[error("No communities in this run: posts require at least one community")]
    NoCommunities,

    #[error("Password hashing failed: {message}")]
    Password { message: String },

    #[error("Snapshot write failed at {}: {}", path.display(), source)]
    Snapshot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, SeedError>;
