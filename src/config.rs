//! 服务配置
//!
//! 从 TOML 文件加载，配置文件不存在时使用默认值（监听 0.0.0.0:3000）。
//! 配置文件路径可通过 APP_CONFIG 环境变量覆盖。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 默认配置文件路径
const DEFAULT_CONFIG_PATH: &str = "config/app.toml";

/// 服务配置结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP 服务配置
    #[serde(default)]
    pub server: ServerConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 绑定地址
    #[serde(default = "default_host")]
    pub host: String,
    /// 服务端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// 加载配置
    ///
    /// 优先读取 APP_CONFIG 指定的文件，其次读取默认路径；
    /// 文件不存在时回退到默认配置，文件存在但解析失败时报错。
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var("APP_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from_path(&path)
    }

    fn load_from_path(path: &str) -> Result<Self, ConfigError> {
        if !Path::new(path).exists() {
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }

        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::FileRead(e.to_string()))?;
        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("服务端口必须大于0".to_string()));
        }
        if self.server.host.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        Ok(())
    }

    /// 监听地址字符串，如 "0.0.0.0:3000"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}
