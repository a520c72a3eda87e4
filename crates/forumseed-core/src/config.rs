//! # Configuration File Parser
//!
//! Reads and parses `forumseed.toml`, the optional user configuration file
//! that customizes seeding without requiring CLI flags. CLI flags always win
//! over config values.
//!
//! Example `forumseed.toml`:
//!
//! ```toml
//! [database]
//! url = "postgres://localhost/forum"
//!
//! [seed]
//! regular = 30
//! admins = 3
//! moderators = 20
//! posts = 30
//! seed = 42
//! password = "correct-horse"
//! snapshot = "seed-snapshot.json"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, SeedError};

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = "forumseed.toml";

/// Top-level forumseed.toml structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ForumseedConfig {
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Default seeding parameters.
    pub seed: SeedConfig,
}

/// Database connection configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "postgres://localhost/forum").
    pub url: Option<String>,
}

/// Default seeding parameters; any omitted field falls back to the built-in
/// defaults (30 regular / 3 admins / 20 moderators / 30 posts).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub regular: Option<usize>,
    pub admins: Option<usize>,
    pub moderators: Option<usize>,
    pub posts: Option<usize>,
    /// Fixed RNG seed for deterministic generation.
    pub seed: Option<u64>,
    /// Plaintext password shared by seeded accounts.
    pub password: Option<String>,
    /// Snapshot output path; no snapshot is written when absent.
    pub snapshot: Option<PathBuf>,
}

/// Read and parse a forumseed.toml file from the given directory.
///
/// Returns `None` if the file doesn't exist (config is optional).
/// Returns an error if the file exists but can't be parsed.
pub fn read_config(dir: &Path) -> Result<Option<ForumseedConfig>> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path).map_err(|e| SeedError::Config {
        message: format!("Failed to read {}: {}", path.display(), e),
    })?;

    let config: ForumseedConfig = toml::from_str(&content).map_err(|e| SeedError::Config {
        message: format!("Failed to parse {}: {}", path.display(), e),
    })?;

    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, body: &str) {
        std::fs::write(dir.join(CONFIG_FILE_NAME), body).unwrap();
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn parses_full_config() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            r#"
[database]
url = "postgres://localhost/forum"

[seed]
regular = 5
admins = 1
moderators = 2
posts = 10
seed = 42
password = "correct-horse"
snapshot = "out.json"
"#,
        );

        let config = read_config(dir.path()).unwrap().unwrap();
        assert_eq!(
            config.database.url.as_deref(),
            Some("postgres://localhost/forum")
        );
        assert_eq!(config.seed.regular, Some(5));
        assert_eq!(config.seed.seed, Some(42));
        assert_eq!(config.seed.snapshot, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn empty_sections_default_to_none() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "[seed]\nposts = 7\n");

        let config = read_config(dir.path()).unwrap().unwrap();
        assert!(config.database.url.is_none());
        assert_eq!(config.seed.posts, Some(7));
        assert!(config.seed.regular.is_none());
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "[seed\nregular = ");

        let err = read_config(dir.path()).unwrap_err();
        assert!(matches!(err, SeedError::Config { .. }));
    }
}
