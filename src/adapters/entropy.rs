use crate::domain::ports::EntropySource;
use crate::utils::error::{MinorRenError, Result};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// 作業系統的密碼學安全隨機源
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        getrandom::fill(buf).map_err(|e| MinorRenError::Entropy {
            message: e.to_string(),
        })
    }
}

/// Wraps any `rand` generator. Seeded instances give reproducible sessions.
#[derive(Debug, Clone)]
pub struct RngEntropy<R> {
    rng: R,
}

impl<R: RngCore> RngEntropy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngEntropy<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> EntropySource for RngEntropy<R> {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        self.rng.fill_bytes(buf);
        Ok(())
    }
}

/// 依序重播固定的位元組，用完後從頭循環
#[derive(Debug, Clone)]
pub struct FixedEntropy {
    bytes: Vec<u8>,
    position: usize,
}

impl FixedEntropy {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes, position: 0 }
    }

    /// 已讀取的位元組數
    pub fn consumed(&self) -> usize {
        self.position
    }
}

impl EntropySource for FixedEntropy {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        if buf.is_empty() {
            return Ok(());
        }
        if self.bytes.is_empty() {
            return Err(MinorRenError::Entropy {
                message: "fixed entropy source has no bytes".to_string(),
            });
        }
        for byte in buf.iter_mut() {
            *byte = self.bytes[self.position % self.bytes.len()];
            self.position += 1;
        }
        Ok(())
    }
}
