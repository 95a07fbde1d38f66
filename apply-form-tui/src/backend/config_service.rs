//! 配置服务

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use apply_form_core::ModalConfig;
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 配置目录名
const APP_DIR_NAME: &str = "apply-form";
/// 配置文件名
const CONFIG_FILE_NAME: &str = "config.json";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub theme: Theme,
    /// 提交成功后自动关闭的延迟（毫秒）
    pub close_delay_ms: u64,
    /// 在状态栏中显示播报区域的内容
    pub screen_reader: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            close_delay_ms: 1000,
            screen_reader: false,
        }
    }
}

impl AppConfig {
    /// 转换为核心库的弹窗配置
    pub fn modal_config(&self) -> ModalConfig {
        ModalConfig::default().with_close_delay(Duration::from_millis(self.close_delay_ms))
    }
}

/// 配置服务 trait
pub trait ConfigService {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务（JSON 文件）
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用默认路径 `<config_dir>/apply-form/config.json`
    pub fn new() -> Self {
        Self::with_path(app_dir().join(CONFIG_FILE_NAME))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!("No config file at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config file {}", self.path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid config file {}", self.path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write config file {}", self.path.display()))?;
        Ok(())
    }
}

/// 应用数据目录（配置与日志）
pub fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
}
