// Adapters layer: concrete entropy sources behind the domain port.

pub mod entropy;

pub use entropy::{FixedEntropy, OsEntropy, RngEntropy};
