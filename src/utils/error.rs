use thiserror::Error;

#[derive(Error, Debug)]
pub enum MinorRenError {
    #[error("Invalid input: {field} must be at least 1, got {value}")]
    InvalidInput { field: String, value: i64 },

    #[error("Invalid range: min ({min}) is greater than max ({max})")]
    InvalidRange { min: i64, max: i64 },

    #[error("Entropy source failed: {message}")]
    Entropy { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl MinorRenError {
    pub(crate) fn invalid_input(field: &str, value: i64) -> Self {
        MinorRenError::InvalidInput {
            field: field.to_string(),
            value,
        }
    }

    /// 給使用者的修正建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MinorRenError::InvalidInput { .. } => "所有數字都必須大於等於 1",
            MinorRenError::InvalidRange { .. } => "請確認 min 不大於 max",
            MinorRenError::Entropy { .. } => "系統隨機源不可用，可改用 --seed 指定種子",
            MinorRenError::IoError(_) => "請確認檔案路徑存在且可讀取",
            MinorRenError::SerializationError(_) => "輸出序列化失敗，請改用 text 格式",
            MinorRenError::ConfigError { .. } | MinorRenError::InvalidConfigValueError { .. } => {
                "請檢查設定檔內容與命令列參數"
            }
        }
    }

    /// 命令列的退出碼：輸入或設定錯誤為 2，環境錯誤為 3
    pub fn exit_code(&self) -> i32 {
        match self {
            MinorRenError::InvalidInput { .. }
            | MinorRenError::InvalidRange { .. }
            | MinorRenError::ConfigError { .. }
            | MinorRenError::InvalidConfigValueError { .. } => 2,
            MinorRenError::Entropy { .. }
            | MinorRenError::IoError(_)
            | MinorRenError::SerializationError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, MinorRenError>;
