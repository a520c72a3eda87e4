//! # Snapshot Writer
//!
//! Serializes the complete outcome of a successful run, every created
//! record with its store-assigned id, as pretty-printed JSON, for downstream
//! tooling or manual inspection. Each run overwrites the file; there are no
//! append or merge semantics. A failed write never invalidates the rows
//! already committed to the database.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SeedError};
use crate::model::{Community, Post, Profile, User};
use crate::seed::{SeedOutcome, SeedReport};

/// On-disk snapshot format.
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub generated_at: DateTime<Utc>,
    pub report: SeedReport,
    pub users: Vec<User>,
    pub profiles: Vec<Profile>,
    pub communities: Vec<Community>,
    pub posts: Vec<Post>,
}

impl Snapshot {
    pub fn from_outcome(outcome: &SeedOutcome) -> Self {
        Self {
            generated_at: Utc::now(),
            report: outcome.report(),
            users: outcome.users.clone(),
            profiles: outcome.profiles.clone(),
            communities: outcome.communities.clone(),
            posts: outcome.posts.clone(),
        }
    }
}

/// Write the full seeded dataset to `path`, truncating any previous file.
pub fn write_snapshot(outcome: &SeedOutcome, path: &Path) -> Result<()> {
    let snapshot_err = |source: std::io::Error| SeedError::Snapshot {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(snapshot_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &Snapshot::from_outcome(outcome))
        .map_err(|e| snapshot_err(e.into()))?;
    writer.write_all(b"\n").map_err(snapshot_err)?;
    writer.flush().map_err(snapshot_err)
}
