pub mod config;
pub mod error;
pub mod generate;
pub mod model;
pub mod seed;
pub mod snapshot;
pub mod store;

// Re-export key types for convenience
pub use error::{Result, SeedError};
pub use model::Role;
pub use store::{SeedStore, StoreCounts};
