use std::path::Path;
use std::process;
use std::sync::Mutex;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use forumseed_core::config::read_config;
use forumseed_core::seed::{ensure_unseeded, run_seed, Phase, SeedOutcome, SeedPlan};
use forumseed_core::snapshot::write_snapshot;
use forumseed_core::store::postgres::PgStore;
use forumseed_core::store::SeedStore;
use forumseed_core::SeedError;

use crate::args::SeedArgs;

/// Run the guard + orchestrator.
///
/// Exit codes:
///   0 - fresh seeding succeeded
///   1 - store already populated, nothing done (or any other error)
pub async fn run(args: &SeedArgs) -> Result<()> {
    let config = read_config(Path::new("."))?;
    let plan = args.plan(config.as_ref());
    let snapshot_path = args.snapshot_path(config.as_ref());
    let db_url = super::resolve_db_url(args.db.as_deref(), config.as_ref())?;

    let store = PgStore::connect(&db_url).await?;

    // Guard first: never write into a populated store.
    if let Err(err) = ensure_unseeded(&store).await {
        store.close().await;
        if matches!(err, SeedError::AlreadySeeded { .. }) {
            eprintln!("Error: {}", err);
            eprintln!();
            eprintln!("To re-seed, first clear all four tables (users, profiles,");
            eprintln!("communities, posts), e.g. via your migration tool's reset, and");
            eprintln!("then run `forumseed seed` again.");
            process::exit(1);
        }
        return Err(err.into());
    }

    // The connection is released on every exit path, so hold the run result
    // until close() has been awaited.
    let result = seed_with_progress(&store, &plan).await;
    store.close().await;
    let outcome = result?;

    if let Some(path) = snapshot_path {
        write_snapshot(&outcome, &path)?;
        eprintln!("Snapshot written to {}", path.display());
    }

    let report = outcome.report();
    eprintln!(
        "\n✓ Seeding complete: {} users, {} profiles, {} communities, {} posts",
        report.users, report.profiles, report.communities, report.posts
    );

    Ok(())
}

/// Drive one spinner per phase off the orchestrator's progress callback.
async fn seed_with_progress(
    store: &PgStore,
    plan: &SeedPlan,
) -> forumseed_core::Result<SeedOutcome> {
    let current: Mutex<Option<ProgressBar>> = Mutex::new(None);

    let progress = |phase: Phase, done: Option<usize>| {
        let mut slot = current.lock().unwrap();
        match done {
            None => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(
                    ProgressStyle::default_spinner()
                        .template("{spinner:.cyan} [{prefix}] {msg}")
                        .unwrap(),
                );
                pb.set_prefix(format!("{}/4", phase.number()));
                pb.set_message(format!("Creating {}...", phase.noun()));
                pb.enable_steady_tick(std::time::Duration::from_millis(100));
                *slot = Some(pb);
            }
            Some(count) => {
                if let Some(pb) = slot.take() {
                    pb.finish_with_message(format!(
                        "Creating {}... ✓ {} created",
                        phase.noun(),
                        count
                    ));
                }
            }
        }
    };

    let result = run_seed(store, plan, Some(&progress)).await;

    // A failed phase leaves its spinner hanging; clear it so the error
    // message prints on a clean line.
    if let Some(pb) = current.lock().unwrap().take() {
        pb.abandon();
    }

    result
}
