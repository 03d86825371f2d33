use crate::config::{ConfigProvider, OutputFormat};
use crate::utils::error::{MinorRenError, Result};
use crate::utils::validation::{validate_ordered_bounds, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub random: Option<RandomConfig>,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RandomConfig {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MinorRenError::IoError)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| MinorRenError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }
}

impl ConfigProvider for TomlConfig {
    fn random_min(&self) -> Option<i64> {
        self.random.as_ref().and_then(|r| r.min)
    }

    fn random_max(&self) -> Option<i64> {
        self.random.as_ref().and_then(|r| r.max)
    }

    fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }

    fn verbose(&self) -> Option<bool> {
        self.logging.as_ref().and_then(|l| l.verbose)
    }
}

impl Validate for TomlConfig {
    /// 只檢查檔案內自身的一致性；與命令列合併後的結果由 Settings 再驗證
    fn validate(&self) -> Result<()> {
        if let Some(min) = self.random_min() {
            validate_positive_number("random.min", min, 1)?;
        }
        if let (Some(min), Some(max)) = (self.random_min(), self.random_max()) {
            validate_ordered_bounds("random", min, max)?;
        }
        Ok(())
    }
}
