use crate::utils::error::Result;

/// Byte-level randomness capability.
///
/// The random session starter only sees this trait, so the OS source, a
/// seeded generator or a fixed byte script can be swapped in.
pub trait EntropySource {
    /// Fill `buf` completely with random bytes.
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()>;
}
