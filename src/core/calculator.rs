use crate::domain::model::Palace;
use crate::utils::error::{MinorRenError, Result};

/// 計算小六壬
///
/// 由大安起數：第一宮取 x，第二宮由第一宮再數 y，第三宮再數 z。
/// 等同於 `(x-1) % 6`、`(x+y-2) % 6`、`(x+y+z-3) % 6`。
pub fn calculate_minor_ren(x: i64, y: i64, z: i64) -> Result<[Palace; 3]> {
    for (field, value) in [("x", x), ("y", y), ("z", z)] {
        if value < 1 {
            return Err(MinorRenError::invalid_input(field, value));
        }
    }

    // 先各自取餘再相加，避免大數溢位
    let step1 = (x - 1) % 6;
    let step2 = (y - 1) % 6;
    let step3 = (z - 1) % 6;

    let index1 = step1;
    let index2 = (step1 + step2) % 6;
    let index3 = (step1 + step2 + step3) % 6;

    Ok([palace_at(index1), palace_at(index2), palace_at(index3)])
}

fn palace_at(index: i64) -> Palace {
    Palace::ALL[index as usize]
}
