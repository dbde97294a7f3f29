pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{router, ReqwestFetcher};
pub use config::{lambda::LambdaConfig, toml_config::TomlConfig};
pub use core::cache::FreshnessCache;
pub use core::handler::{Outcome, ScoreTotalService};
pub use utils::error::{Result, ScoreError};
