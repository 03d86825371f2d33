use crate::adapters::OsEntropy;
use crate::core::random::rand_int;
use crate::domain::model::MinorRenResult;
use crate::domain::ports::EntropySource;
use crate::utils::error::{MinorRenError, Result};
use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN: i64 = 1;
pub const DEFAULT_MAX: i64 = 60;

/// 隨機起課的取數範圍（含端點）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomRange {
    pub min: i64,
    pub max: i64,
}

impl Default for RandomRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

impl RandomRange {
    pub fn new(min: Option<i64>, max: Option<i64>) -> Self {
        Self {
            min: min.unwrap_or(DEFAULT_MIN),
            max: max.unwrap_or(DEFAULT_MAX),
        }
    }
}

/// 隨機起課，使用系統隨機源
pub fn start_by_random(min: Option<i64>, max: Option<i64>) -> Result<MinorRenResult> {
    start_by_random_with(&mut OsEntropy, min, max)
}

/// 隨機起課，由呼叫端注入隨機源
pub fn start_by_random_with<S: EntropySource + ?Sized>(
    source: &mut S,
    min: Option<i64>,
    max: Option<i64>,
) -> Result<MinorRenResult> {
    let RandomRange { min, max } = RandomRange::new(min, max);
    if min < 1 {
        return Err(MinorRenError::invalid_input("min", min));
    }
    if min > max {
        return Err(MinorRenError::InvalidRange { min, max });
    }

    let x = rand_int(source, min, max)?;
    let y = rand_int(source, min, max)?;
    let z = rand_int(source, min, max)?;

    let result = MinorRenResult::new(x, y, z)?;
    tracing::debug!(min, max, %result, "started session by random");
    Ok(result)
}

/// 時間起課，取當下本地時間
pub fn start_by_time() -> Result<MinorRenResult> {
    start_by_time_at(&Local::now())
}

/// 時間起課：x 取時辰序（1..12），y 取分鐘+1，z 取秒+1
pub fn start_by_time_at<T: Timelike>(at: &T) -> Result<MinorRenResult> {
    let x = i64::from(at.hour() % 12) + 1;
    let y = i64::from(at.minute()) + 1;
    // 閏秒在 chrono 中仍回報 59，z 不會超過 60
    let z = i64::from(at.second()) + 1;

    let result = MinorRenResult::new(x, y, z)?;
    tracing::debug!(
        hour = at.hour(),
        minute = at.minute(),
        second = at.second(),
        %result,
        "started session by time"
    );
    Ok(result)
}
