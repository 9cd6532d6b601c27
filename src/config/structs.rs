use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::{LinkdeskError, Result};

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 环境变量前缀，示例：LD__API__BASE_URL=http://localhost:8080
pub const ENV_PREFIX: &str = "LD";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// - api: remote short-link API location and transport timeout
/// - ui: console timings and column widths
/// - logging: log level, format and destination
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StaticConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > config file > 默认值
    pub fn load_from(path: &str) -> Result<Self> {
        Self::load_layered(path, None)
    }

    /// `env` replaces the process environment when given
    fn load_layered(path: &str, env: Option<config::Map<String, String>>) -> Result<Self> {
        use config::{Config, Environment, File};

        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        let config: StaticConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Like `load_from`, but falls back to defaults on any error
    pub fn load(path: Option<&str>) -> Self {
        let path = path.unwrap_or(DEFAULT_CONFIG_PATH);
        match Self::load_from(path) {
            Ok(config) => {
                if std::path::Path::new(path).exists() {
                    eprintln!("[INFO] Configuration loaded from: {}", path);
                }
                config
            }
            Err(e) => {
                eprintln!("[ERROR] Failed to load config: {}", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.api.base_url()?;
        if self.ui.tick_ms == 0 {
            return Err(LinkdeskError::config("ui.tick_ms must be greater than 0"));
        }
        match self.logging.format.as_str() {
            "text" | "json" => Ok(()),
            other => Err(LinkdeskError::config(format!(
                "Invalid logging.format: '{}'. Valid: text, json",
                other
            ))),
        }
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 远程 API 配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Transport timeout in seconds; 0 disables it
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url)?;
        if url.cannot_be_a_base() {
            return Err(LinkdeskError::config(format!(
                "api.base_url cannot be used as a base: {}",
                self.base_url
            )));
        }
        Ok(url)
    }
}

/// 界面配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    /// Delay before the copy button label reverts
    #[serde(default = "default_copy_revert_ms")]
    pub copy_revert_ms: u64,
    /// Destination column width before truncation
    #[serde(default = "default_destination_width")]
    pub destination_width: usize,
    /// Event poll interval of the TUI loop
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Empty means stderr (CLI) or nowhere (TUI)
    #[serde(default)]
    pub file: String,
}

// ============================================================
// Default value functions
// ============================================================

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_copy_revert_ms() -> u64 {
    2000
}

fn default_destination_width() -> usize {
    50
}

fn default_tick_ms() -> u64 {
    100
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            copy_revert_ms: default_copy_revert_ms(),
            destination_width: default_destination_width(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: String::new(),
        }
    }
}
