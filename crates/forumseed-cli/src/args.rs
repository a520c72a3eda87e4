use std::path::PathBuf;

use clap::{Parser, Subcommand};

use forumseed_core::config::ForumseedConfig;
use forumseed_core::generate::password::DEFAULT_PASSWORD;
use forumseed_core::seed::SeedPlan;

#[derive(Parser, Debug)]
#[command(
    name = "forumseed",
    about = "Seed an empty forum database with realistic fake data",
    version,
    after_help = "Examples:\n  forumseed seed --db postgres://localhost/forum\n  forumseed seed --regular 100 --posts 250 --seed 42\n  forumseed seed --snapshot seed-snapshot.json\n  forumseed status --db postgres://localhost/forum"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Seed the database (refuses to run against a non-empty store)
    Seed(SeedArgs),

    /// Show per-table record counts and whether the store is seedable
    Status(StatusArgs),
}

#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Database connection URL (postgres://)
    /// Falls back to DATABASE_URL env var, .env file, or forumseed.toml
    #[arg(long, env = "DATABASE_URL")]
    pub db: Option<String>,

    /// Number of regular users to create
    #[arg(long)]
    pub regular: Option<usize>,

    /// Number of admin users to create
    #[arg(long)]
    pub admins: Option<usize>,

    /// Number of moderator users to create
    #[arg(long)]
    pub moderators: Option<usize>,

    /// Number of posts to create
    #[arg(long)]
    pub posts: Option<usize>,

    /// Random seed for deterministic generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Plaintext password shared by every seeded account
    #[arg(long)]
    pub password: Option<String>,

    /// Write the full seeded dataset as JSON to this path
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Database connection URL
    #[arg(long, env = "DATABASE_URL")]
    pub db: Option<String>,
}

impl SeedArgs {
    /// Merge CLI flags over forumseed.toml over built-in defaults.
    pub fn plan(&self, config: Option<&ForumseedConfig>) -> SeedPlan {
        let defaults = SeedPlan::default();
        let cfg = config.map(|c| &c.seed);
        let pick = |flag: Option<usize>, file: Option<usize>, default: usize| {
            flag.or(file).unwrap_or(default)
        };

        SeedPlan {
            regular: pick(self.regular, cfg.and_then(|c| c.regular), defaults.regular),
            admins: pick(self.admins, cfg.and_then(|c| c.admins), defaults.admins),
            moderators: pick(
                self.moderators,
                cfg.and_then(|c| c.moderators),
                defaults.moderators,
            ),
            posts: pick(self.posts, cfg.and_then(|c| c.posts), defaults.posts),
            rng_seed: self.seed.or(cfg.and_then(|c| c.seed)),
            password: self
                .password
                .clone()
                .or_else(|| cfg.and_then(|c| c.password.clone()))
                .unwrap_or_else(|| DEFAULT_PASSWORD.to_string()),
        }
    }

    /// Snapshot path: CLI flag wins over forumseed.toml; None disables it.
    pub fn snapshot_path(&self, config: Option<&ForumseedConfig>) -> Option<PathBuf> {
        self.snapshot
            .clone()
            .or_else(|| config.and_then(|c| c.seed.snapshot.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_args() -> SeedArgs {
        SeedArgs {
            db: None,
            regular: None,
            admins: None,
            moderators: None,
            posts: None,
            seed: None,
            password: None,
            snapshot: None,
        }
    }

    #[test]
    fn plan_defaults_to_30_3_20_30() {
        let plan = bare_args().plan(None);
        assert_eq!(
            (plan.regular, plan.admins, plan.moderators, plan.posts),
            (30, 3, 20, 30)
        );
        assert_eq!(plan.password, DEFAULT_PASSWORD);
    }

    #[test]
    fn flags_override_config_file() {
        let config: ForumseedConfig =
            toml::from_str("[seed]\nregular = 5\nposts = 7\nseed = 1\n").unwrap();
        let args = SeedArgs {
            regular: Some(9),
            ..bare_args()
        };

        let plan = args.plan(Some(&config));
        assert_eq!(plan.regular, 9); // flag wins
        assert_eq!(plan.posts, 7); // file wins over default
        assert_eq!(plan.rng_seed, Some(1));
    }
}
