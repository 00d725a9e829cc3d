//! 配置服务
//!
//! 配置文件：`~/.config/portfolio-admin/config.json`
//!
//! ```json
//! {
//!   "apiUrl": "http://localhost:5000/api",
//!   "apiKey": "...",
//!   "language": "es-ES",
//!   "theme": "dark"
//! }
//! ```
//!
//! 环境变量 `PORTFOLIO_ADMIN_API_URL` / `PORTFOLIO_ADMIN_API_KEY` 覆盖文件中的值。

use std::fmt;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use portfolio_admin_client::log_sanitizer::mask_secret;
use portfolio_admin_client::{ApiError, ClientConfig};

use crate::view::theme::Theme;

/// API 地址环境变量
pub const API_URL_ENV: &str = "PORTFOLIO_ADMIN_API_URL";
/// API 密钥环境变量
pub const API_KEY_ENV: &str = "PORTFOLIO_ADMIN_API_KEY";

const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// 应用配置
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub api_url: String,
    pub api_key: String,
    pub language: String,
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            language: "es-ES".to_string(),
            theme: Theme::Dark,
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &mask_secret(&self.api_key))
            .field("language", &self.language)
            .field("theme", &self.theme)
            .finish()
    }
}

impl AppConfig {
    /// 用环境变量覆盖 API 地址和密钥
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.api_url = url;
        }
        if let Some(key) = lookup(API_KEY_ENV) {
            self.api_key = key;
        }
    }

    /// 构建 API 客户端配置
    pub fn client_config(&self) -> Result<ClientConfig, ApiError> {
        ClientConfig::new(self.api_url.trim(), self.api_key.trim())
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地 JSON 文件配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用默认配置路径
    pub fn new() -> Self {
        let dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("portfolio-admin");
        Self::with_path(dir.join("config.json"))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// 配置文件是否已存在
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// 只读文件，不应用环境变量
    fn load_file(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("invalid config file {}", self.path.display()))
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let mut config = self.load_file()?;
        config.apply_env(|key| std::env::var(key).ok());
        log::debug!("loaded config {config:?}");
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        log::info!("config saved to {}", self.path.display());
        Ok(())
    }
}
