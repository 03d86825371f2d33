pub mod calculator;
pub mod random;
pub mod session;

pub use crate::domain::model::{MinorRenResult, Palace, MINOR_REN_NAMES};
pub use crate::domain::ports::EntropySource;
pub use crate::utils::error::Result;
