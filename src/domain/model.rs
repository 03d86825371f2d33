use serde::{Deserialize, Serialize};
use std::fmt;

/// 小六壬六宮名稱，依序對應索引 0..5
pub const MINOR_REN_NAMES: [&str; 6] = ["大安", "留连", "速喜", "赤口", "小吉", "空亡"];

/// 六宮之一。序列化時使用中文名稱。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Palace {
    #[serde(rename = "大安")]
    DaAn,
    #[serde(rename = "留连")]
    LiuLian,
    #[serde(rename = "速喜")]
    SuXi,
    #[serde(rename = "赤口")]
    ChiKou,
    #[serde(rename = "小吉")]
    XiaoJi,
    #[serde(rename = "空亡")]
    KongWang,
}

impl Palace {
    pub const ALL: [Palace; 6] = [
        Palace::DaAn,
        Palace::LiuLian,
        Palace::SuXi,
        Palace::ChiKou,
        Palace::XiaoJi,
        Palace::KongWang,
    ];

    pub fn from_index(index: usize) -> Option<Palace> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        MINOR_REN_NAMES[self.index()]
    }
}

impl fmt::Display for Palace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 一次起課的結果：三個輸入數字與推得的三宮
///
/// 由 [`MinorRenResult::new`] 建立的結果中，x、y、z 恆大於等於 1。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MinorRenResult {
    pub x: i64,
    pub y: i64,
    pub z: i64,
    pub names: [Palace; 3],
}

impl MinorRenResult {
    /// 以計算器建立結果；任一數字小於 1 時失敗
    pub fn new(x: i64, y: i64, z: i64) -> crate::Result<Self> {
        let names = crate::core::calculator::calculate_minor_ren(x, y, z)?;
        Ok(Self { x, y, z, names })
    }
}

impl fmt::Display for MinorRenResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, second, third] = self.names;
        write!(
            f,
            "x={} y={} z={} → {} {} {}",
            self.x, self.y, self.z, first, second, third
        )
    }
}
