use crate::domain::ports::EntropySource;
use crate::utils::error::{MinorRenError, Result};

/// 生成 [min, max] 的真隨機整數（含端點）
///
/// Rejection sampling over little-endian byte draws: values at or above the
/// largest multiple of the range are discarded, so every integer in the
/// range is equally likely.
pub fn rand_int<S: EntropySource + ?Sized>(source: &mut S, min: i64, max: i64) -> Result<i64> {
    if min > max {
        return Err(MinorRenError::InvalidRange { min, max });
    }

    // 以 128 位元計算，完整的 i64 區間共有 2^64 個值
    let range = (max as i128 - min as i128 + 1) as u128;
    let bytes_needed = bytes_needed(range);
    if bytes_needed == 0 {
        return Ok(min);
    }

    let max_value = 1u128 << (8 * bytes_needed);
    let threshold = max_value - max_value % range;

    let mut buf = [0u8; 8];
    let draw = &mut buf[..bytes_needed];
    let mut rejected = 0u32;
    loop {
        source.fill_bytes(draw)?;
        let value = draw
            .iter()
            .rev()
            .fold(0u128, |acc, &byte| (acc << 8) | byte as u128);
        if value < threshold {
            if rejected > 0 {
                tracing::trace!(rejected, min, max, "accepted draw after rejections");
            }
            return Ok((min as i128 + (value % range) as i128) as i64);
        }
        rejected += 1;
        tracing::trace!(value, threshold, "rejected biased draw");
    }
}

/// ceil(log2(range) / 8)：表示 range - 1 所需的位元組數
fn bytes_needed(range: u128) -> usize {
    let bits = 128 - (range - 1).leading_zeros() as usize;
    bits.div_ceil(8)
}
