//! 配置管理模块
//! 支持从环境变量和 TOML 配置文件加载配置
//!
//! 路由核心自身不持有任何进程级可变状态；`RouterConfig` 作为整体
//! 传给执行层实现的构造函数（网络选择、payer/proposer 注入均在执行层）

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::service::strategies::EVM_GAS_LIMIT;

/// 路由核心配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterConfig {
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 目标 Flow 网络
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowNetwork {
    Mainnet,
    Testnet,
}

/// 网络配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// 目标网络
    pub network: FlowNetwork,
    /// EVM 调用 gas 上限
    pub evm_gas_limit: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String, // "json" or "text"
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            network: match std::env::var("FLOW_NETWORK").as_deref() {
                Ok("testnet") => FlowNetwork::Testnet,
                _ => FlowNetwork::Mainnet,
            },
            evm_gas_limit: std::env::var("EVM_GAS_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(EVM_GAS_LIMIT),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            format: std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".into()),
        }
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl RouterConfig {
    /// 从环境变量加载配置（先加载 .env，如存在）
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(Self::default())
    }

    /// 从 TOML 配置文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: RouterConfig =
            toml::from_str(&content).with_context(|| "Failed to parse config file as TOML")?;

        Ok(config)
    }

    /// 从环境变量和配置文件合并加载（配置文件优先级更高）
    pub fn from_env_and_file<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let mut config = Self::from_env()?;

        if let Some(path) = path {
            if path.as_ref().exists() {
                config = Self::from_file(path)?;
            }
        }

        Ok(config)
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<()> {
        if self.network.evm_gas_limit == 0 {
            anyhow::bail!("EVM_GAS_LIMIT must be greater than zero");
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            anyhow::bail!("LOG_LEVEL must be one of: {:?}", valid_levels);
        }

        if self.logging.format != "json" && self.logging.format != "text" {
            anyhow::bail!("LOG_FORMAT must be 'json' or 'text'");
        }

        Ok(())
    }
}
