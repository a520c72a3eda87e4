use std::path::Path;

use anyhow::Result;
use comfy_table::{Cell, Table};

use forumseed_core::config::read_config;
use forumseed_core::store::postgres::PgStore;
use forumseed_core::store::SeedStore;
use forumseed_core::SeedError;

use crate::args::StatusArgs;

/// Read-only: print per-table counts and whether the store is seedable.
pub async fn run(args: &StatusArgs) -> Result<()> {
    let config = read_config(Path::new("."))?;
    let db_url = super::resolve_db_url(args.db.as_deref(), config.as_ref())?;

    let store = PgStore::connect(&db_url).await?;
    let result = store.counts().await;
    store.close().await;
    let counts = result.map_err(|source| SeedError::CountFailed { source })?;

    let mut table = Table::new();
    table.set_header(vec!["Table", "Records"]);
    table.add_row(vec![Cell::new("users"), Cell::new(counts.users)]);
    table.add_row(vec![Cell::new("profiles"), Cell::new(counts.profiles)]);
    table.add_row(vec![Cell::new("communities"), Cell::new(counts.communities)]);
    table.add_row(vec![Cell::new("posts"), Cell::new(counts.posts)]);
    println!("{}", table);

    if counts.is_empty() {
        println!("\nStore is empty, ready for `forumseed seed`.");
    } else {
        println!(
            "\nStore already contains {} records; `forumseed seed` will refuse to run.",
            counts.total()
        );
    }

    Ok(())
}
