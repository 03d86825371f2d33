pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FixedEntropy, OsEntropy, RngEntropy};
pub use config::toml_config::TomlConfig;
pub use core::calculator::calculate_minor_ren;
pub use core::random::rand_int;
pub use core::session::{
    start_by_random, start_by_random_with, start_by_time, start_by_time_at, RandomRange,
    DEFAULT_MAX, DEFAULT_MIN,
};
pub use domain::model::{MinorRenResult, Palace, MINOR_REN_NAMES};
pub use domain::ports::EntropySource;
pub use utils::error::{MinorRenError, Result};
