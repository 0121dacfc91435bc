//! 交易执行层接口
//!
//! 引擎只产出「操作名 + 位置参数」；签名、payer/proposer/authorizer 注入、
//! 提交与排序（nonce 串行化等）全部由注入的执行层实现负责。
//! 操作名与参数顺序是与脚本层的线上契约，外部测试套件会逐字断言。

use async_trait::async_trait;
use serde::Serialize;

/// 位置参数值
///
/// 与脚本层参数类型一一对应：地址/标识符/金额为字符串，
/// NFT id 批量为整数列表，gas 上限为整数，EVM call data 为原始字节
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ArgValue {
    Str(String),
    UInt(u64),
    UIntList(Vec<u64>),
    StrList(Vec<String>),
    Bytes(Vec<u8>),
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<u64> for ArgValue {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<Vec<u64>> for ArgValue {
    fn from(value: Vec<u64>) -> Self {
        Self::UIntList(value)
    }
}

impl From<Vec<String>> for ArgValue {
    fn from(value: Vec<String>) -> Self {
        Self::StrList(value)
    }
}

impl From<Vec<u8>> for ArgValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

/// 一次已规划好的执行层调用
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationCall {
    /// 脚本层操作名
    pub operation: &'static str,
    /// 位置参数，顺序即契约
    pub args: Vec<ArgValue>,
}

/// 提交回执
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionReceipt {
    /// 链上交易 id
    pub tx_id: String,
}

/// 交易执行层统一接口
///
/// 实现方持有网络配置与签名通道；失败原样上抛，引擎不重试不包装
#[async_trait]
pub trait TransactionExecutor: Send + Sync {
    /// 以位置参数调用命名操作
    async fn execute(
        &self,
        operation: &str,
        args: Vec<ArgValue>,
    ) -> anyhow::Result<ExecutionReceipt>;
}
