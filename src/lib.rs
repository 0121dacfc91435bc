//! FlowCore - Flow 钱包转账路由核心
//!
//! 纯决策引擎：给定一次转账请求，在 Cadence 主/子账户与 COA 桥接的
//! EVM 账户层级之间确定唯一正确的链上操作，并按脚本层契约编码参数。
//! 不签名、不重试、不落库；执行层通过 [`service::TransactionExecutor`] 注入。

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod service;
pub mod utils;

// 重新导出常用类型
pub use error::TransferError;

// 统一模块导出
pub mod prelude {
    pub use crate::{
        config::{FlowNetwork, LoggingConfig, NetworkConfig, RouterConfig},
        domain::{AssetKind, NetworkDomain, TransferRequest},
        error::TransferError,
        service::{
            ArgValue, ExecutionReceipt, OperationCall, TransactionExecutor, TransferRouter,
        },
    };
}
