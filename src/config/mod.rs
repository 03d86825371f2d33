pub mod toml_config;

use crate::core::session::{RandomRange, DEFAULT_MAX, DEFAULT_MIN};
use crate::domain::model::MinorRenResult;
use crate::utils::error::Result;
use crate::utils::validation::{validate_ordered_bounds, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use chrono::NaiveTime;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn render(self, result: &MinorRenResult) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(result.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        }
    }
}

/// 一層設定來源；未提供的值回傳 None，交由下一層決定
pub trait ConfigProvider {
    fn random_min(&self) -> Option<i64>;
    fn random_max(&self) -> Option<i64>;
    fn output_format(&self) -> Option<OutputFormat>;
    fn verbose(&self) -> Option<bool>;
}

/// 合併後的有效設定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub range: RandomRange,
    pub format: OutputFormat,
    pub verbose: bool,
}

impl Settings {
    /// 依序合併設定來源，排在前面的優先；最後套用內建預設值
    pub fn resolve(layers: &[&dyn ConfigProvider]) -> Result<Self> {
        let min = layers.iter().find_map(|l| l.random_min()).unwrap_or(DEFAULT_MIN);
        let max = layers.iter().find_map(|l| l.random_max()).unwrap_or(DEFAULT_MAX);
        let settings = Self {
            range: RandomRange { min, max },
            format: layers
                .iter()
                .find_map(|l| l.output_format())
                .unwrap_or_default(),
            verbose: layers.iter().find_map(|l| l.verbose()).unwrap_or(false),
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_positive_number("random.min", self.range.min, 1)?;
        validate_ordered_bounds("random", self.range.min, self.range.max)
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "minor-ren")]
#[command(about = "小六壬起課：直接計算、真隨機起課或時間起課")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON on stderr")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// 直接以三個數字計算
    Calc {
        #[arg(allow_negative_numbers = true)]
        x: i64,
        #[arg(allow_negative_numbers = true)]
        y: i64,
        #[arg(allow_negative_numbers = true)]
        z: i64,
    },
    /// 隨機起課
    Random {
        #[arg(long, allow_negative_numbers = true)]
        min: Option<i64>,
        #[arg(long, allow_negative_numbers = true)]
        max: Option<i64>,
        #[arg(long, help = "Seed for a reproducible session")]
        seed: Option<u64>,
    },
    /// 時間起課
    Time {
        #[arg(long, help = "Time of day as HH:MM:SS (defaults to now)")]
        at: Option<NaiveTime>,
    },
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load_config_file(&self) -> Result<Option<toml_config::TomlConfig>> {
        self.config
            .as_deref()
            .map(toml_config::TomlConfig::from_file)
            .transpose()
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn random_min(&self) -> Option<i64> {
        match self.command {
            Command::Random { min, .. } => min,
            _ => None,
        }
    }

    fn random_max(&self) -> Option<i64> {
        match self.command {
            Command::Random { max, .. } => max,
            _ => None,
        }
    }

    fn output_format(&self) -> Option<OutputFormat> {
        self.format
    }

    fn verbose(&self) -> Option<bool> {
        // 旗標未出現時讓設定檔決定
        self.verbose.then_some(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Layer {
        min: Option<i64>,
        max: Option<i64>,
        format: Option<OutputFormat>,
    }

    impl ConfigProvider for Layer {
        fn random_min(&self) -> Option<i64> {
            self.min
        }
        fn random_max(&self) -> Option<i64> {
            self.max
        }
        fn output_format(&self) -> Option<OutputFormat> {
            self.format
        }
        fn verbose(&self) -> Option<bool> {
            None
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let settings = Settings::resolve(&[]).unwrap();
        assert_eq!(settings.range, RandomRange::default());
        assert_eq!(settings.format, OutputFormat::Text);
        assert!(!settings.verbose);
    }

    #[test]
    fn test_resolve_precedence() {
        let cli = Layer {
            min: Some(5),
            max: None,
            format: None,
        };
        let file = Layer {
            min: Some(2),
            max: Some(30),
            format: Some(OutputFormat::Json),
        };
        let settings = Settings::resolve(&[&cli, &file]).unwrap();
        assert_eq!(settings.range, RandomRange { min: 5, max: 30 });
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_resolve_rejects_bad_range() {
        let zero_min = Layer {
            min: Some(0),
            max: None,
            format: None,
        };
        assert!(Settings::resolve(&[&zero_min]).is_err());

        let inverted = Layer {
            min: Some(61),
            max: None,
            format: None,
        };
        assert!(Settings::resolve(&[&inverted]).is_err());
    }

    #[test]
    fn test_render_json() {
        let result = MinorRenResult::new(3, 4, 5).unwrap();
        let json = OutputFormat::Json.render(&result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["names"], serde_json::json!(["速喜", "空亡", "赤口"]));
        assert_eq!(value["z"], 5);
    }
}
