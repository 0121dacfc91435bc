//! 转账路由策略表
//!
//! 每条策略是一组 `(名字, 谓词, 规划函数)`：谓词纯同步判断请求是否归属该路由，
//! 规划函数构造对应的执行层调用。注册顺序即匹配优先级：多个谓词可能同时为真
//! （例如子账户互转同时满足宽泛的桥接谓词），必须先测更特化的路由。
//! 表构建一次后只读，可跨并发调用方共享。

pub mod nft;
pub mod token;

use once_cell::sync::Lazy;

use crate::domain::TransferRequest;
use crate::error::TransferError;
use crate::service::executor::{ArgValue, OperationCall};

/// EVM 调用统一 gas 上限
pub const EVM_GAS_LIMIT: u64 = 30_000_000;

/// EVM 零地址：原生 FLOW 在 EVM 侧转账的 call 目标
pub const EVM_ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// 一条转账路由策略
pub struct Strategy {
    /// 策略名（日志与诊断用）
    pub name: &'static str,
    /// 路由谓词：纯同步，无副作用
    pub can_handle: fn(&TransferRequest) -> bool,
    /// 构造执行层调用
    pub plan: fn(&TransferRequest) -> Result<OperationCall, TransferError>,
}

pub(crate) fn call(
    operation: &'static str,
    args: Vec<ArgValue>,
) -> Result<OperationCall, TransferError> {
    Ok(OperationCall { operation, args })
}

/// 全量策略表（注册顺序即匹配顺序）
pub static STRATEGIES: Lazy<Vec<Strategy>> = Lazy::new(|| {
    let mut table = Vec::with_capacity(17);
    table.extend(token::strategies());
    table.extend(nft::strategies());
    table
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_order_is_fixed() {
        let names: Vec<&str> = STRATEGIES.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec![
                "child_to_child_token",
                "child_to_others_token",
                "parent_to_child_token",
                "flow_to_flow_token",
                "flow_to_evm_token",
                "flow_token_bridge_to_evm",
                "evm_to_flow_coa_withdrawal",
                "evm_to_flow_token_bridge",
                "evm_to_evm_token",
                "child_to_child_nft",
                "child_to_others_nft",
                "parent_to_child_nft",
                "topshot_nft",
                "flow_to_flow_nft",
                "flow_bridge_to_evm_nft",
                "evm_bridge_to_flow_nft",
                "evm_to_evm_nft",
            ]
        );
    }
}
