use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::quantity::UnitSystem;

/// 应用设置。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub unit_system: UnitSystem,
    /// 界面语言代码。"auto" 表示跟随系统区域设置。
    pub language: String,
}

impl Default for Config {
    fn default() -> Self {
        // 与前端现状一致:默认英制,语言跟随系统。
        Self {
            unit_system: UnitSystem::Imperial,
            language: "auto".to_string(),
        }
    }
}

/// 设置加载/保存过程中可能出现的错误。
#[derive(Debug)]
pub enum ConfigError {
    /// 文件读写错误
    Io(std::io::Error),
    /// TOML 解析错误
    Serde(toml::de::Error),
    /// TOML 序列化错误
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "文件读写错误: {e}"),
            ConfigError::Serde(e) => write!(f, "设置解析错误: {e}"),
            ConfigError::Serialize(e) => write!(f, "设置序列化错误: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 加载 config.toml,不存在时生成默认设置并落盘。
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 把设置保存到 config.toml。
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
