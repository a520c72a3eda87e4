use anyhow::Result;

use forumseed_core::config::ForumseedConfig;

pub mod seed;
pub mod status;

/// Resolve database URL from args, env, .env file, or forumseed.toml.
pub(crate) fn resolve_db_url(
    explicit: Option<&str>,
    config: Option<&ForumseedConfig>,
) -> Result<String> {
    if let Some(url) = explicit {
        return Ok(url.to_string());
    }

    // Try environment variable
    if let Ok(url) = std::env::var("DATABASE_URL") {
        return Ok(url);
    }

    // Try .env file
    if dotenvy::dotenv().is_ok() {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            return Ok(url);
        }
    }

    // Try forumseed.toml
    if let Some(cfg) = config {
        if let Some(ref url) = cfg.database.url {
            return Ok(url.clone());
        }
    }

    Err(forumseed_core::SeedError::NoDatabaseUrl.into())
}
