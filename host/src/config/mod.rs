//! # Config 模块
//!
//! 运行时配置管理，集中管理所有配置项。
//!
//! ## 配置优先级
//!
//! 1. 命令行参数（最高）
//! 2. 配置文件 (config.json)
//! 3. 默认值（最低）

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 资源根目录
    #[serde(default = "default_assets_root")]
    pub assets_root: PathBuf,

    /// 特效目录文件路径（相对于 assets_root）
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// 播放配置
    #[serde(default)]
    pub playback: PlaybackConfig,
}

/// 播放配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// 每次播放的固定时长（秒）
    #[serde(default = "default_effect_duration")]
    pub effect_duration: f32,

    /// 无头主循环的帧率（帧/秒）
    #[serde(default = "default_tick_rate")]
    pub tick_rate: u32,
}

// 默认值函数
fn default_assets_root() -> PathBuf {
    PathBuf::from("assets")
}

fn default_catalog_path() -> String {
    "effects.json".to_string()
}

fn default_effect_duration() -> f32 {
    5.0
}

fn default_tick_rate() -> u32 {
    60
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assets_root: default_assets_root(),
            catalog_path: default_catalog_path(),
            playback: PlaybackConfig::default(),
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            effect_duration: default_effect_duration(),
            tick_rate: default_tick_rate(),
        }
    }
}

impl AppConfig {
    /// 加载配置文件
    ///
    /// 如果文件不存在或解析失败，返回默认配置并打印警告。
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            println!("⚠️ 配置文件不存在: {:?}，使用默认配置", path);
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => {
                    println!("✅ 配置文件加载成功: {:?}", path);
                    config
                }
                Err(e) => {
                    eprintln!("⚠️ 配置文件解析失败: {}，使用默认配置", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("⚠️ 配置文件读取失败: {}，使用默认配置", e);
                Self::default()
            }
        }
    }

    /// 保存配置到文件
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        fs::write(path, json).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// 获取特效目录文件完整路径
    pub fn catalog_full_path(&self) -> PathBuf {
        self.assets_root.join(&self.catalog_path)
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 检查资源目录存在
        if !self.assets_root.exists() {
            return Err(ConfigError::ValidationFailed(format!(
                "资源目录不存在: {:?}",
                self.assets_root
            )));
        }

        // 检查特效目录文件存在
        let catalog_full_path = self.catalog_full_path();
        if !catalog_full_path.exists() {
            return Err(ConfigError::ValidationFailed(format!(
                "特效目录文件不存在: {:?}",
                catalog_full_path
            )));
        }

        // 播放时长必须为正的有限值
        if !self.playback.effect_duration.is_finite() || self.playback.effect_duration <= 0.0 {
            return Err(ConfigError::ValidationFailed(format!(
                "播放时长必须大于 0，当前值: {}",
                self.playback.effect_duration
            )));
        }

        // 帧率范围
        if self.playback.tick_rate == 0 || self.playback.tick_rate > 1000 {
            return Err(ConfigError::ValidationFailed(format!(
                "帧率必须在 1 - 1000 之间，当前值: {}",
                self.playback.tick_rate
            )));
        }

        Ok(())
    }
}

/// 配置错误
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// 序列化失败
    SerializationFailed(String),
    /// IO 错误
    IoError(String),
    /// 验证失败
    ValidationFailed(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::SerializationFailed(e) => write!(f, "配置序列化失败: {}", e),
            ConfigError::IoError(e) => write!(f, "配置 IO 错误: {}", e),
            ConfigError::ValidationFailed(e) => write!(f, "配置验证失败: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
