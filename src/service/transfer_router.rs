//! 转账路由入口
//!
//! 流程：校验 → 按注册顺序解析策略 → 参数编码 → 委托执行层。
//! 无匹配路由返回 `Ok(None)`（正常的否定结果，不是错误）；
//! 执行层失败原样透传，调用方自行决定重试策略。

use std::sync::Arc;

use crate::domain::TransferRequest;
use crate::error::TransferError;
use crate::service::executor::{ExecutionReceipt, OperationCall, TransactionExecutor};
use crate::service::strategies::{Strategy, STRATEGIES};

/// 转账路由器
///
/// 自身无可变状态；策略表为进程级只读静态表，可跨并发调用共享
pub struct TransferRouter {
    executor: Arc<dyn TransactionExecutor>,
}

impl TransferRouter {
    pub fn new(executor: Arc<dyn TransactionExecutor>) -> Self {
        Self { executor }
    }

    /// 解析请求归属的策略（只做谓词匹配，不校验、不编码、不执行）
    pub fn resolve(request: &TransferRequest) -> Option<&'static Strategy> {
        STRATEGIES.iter().find(|s| (s.can_handle)(request))
    }

    /// 校验请求并规划执行层调用（不提交）
    ///
    /// 返回策略名与调用，便于调用方做预检或干跑展示
    pub fn plan(
        request: &TransferRequest,
    ) -> Result<Option<(&'static str, OperationCall)>, TransferError> {
        request.validate()?;

        let strategy = match Self::resolve(request) {
            Some(strategy) => strategy,
            None => {
                tracing::debug!(
                    kind = ?request.kind,
                    network = ?request.network,
                    "no transfer route matched"
                );
                return Ok(None);
            }
        };

        let operation_call = (strategy.plan)(request)?;
        Ok(Some((strategy.name, operation_call)))
    }

    /// 校验、路由并提交一次转账
    pub async fn send(
        &self,
        request: &TransferRequest,
    ) -> Result<Option<ExecutionReceipt>, TransferError> {
        let (name, operation_call) = match Self::plan(request)? {
            Some(planned) => planned,
            None => return Ok(None),
        };

        tracing::info!(
            strategy = name,
            operation = operation_call.operation,
            proposer = %request.proposer,
            "dispatching transfer"
        );

        let receipt = self
            .executor
            .execute(operation_call.operation, operation_call.args)
            .await?;
        Ok(Some(receipt))
    }
}
