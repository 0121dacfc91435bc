//! FT 转账策略（9 条，按特化程度降序注册）

use crate::domain::{AssetKind, NetworkDomain, TransferRequest};
use crate::error::TransferError;
use crate::service::executor::{ArgValue, OperationCall};
use crate::utils::address_validator::{is_evm_address, is_flow_address};
use crate::utils::amount::scale_to_integer_units;
use crate::utils::call_data::encode_contract_call_data;

use super::{call, Strategy, EVM_GAS_LIMIT, EVM_ZERO_ADDRESS};

pub(super) fn strategies() -> Vec<Strategy> {
    vec![
        Strategy {
            name: "child_to_child_token",
            can_handle: child_to_child,
            plan: plan_child_to_child,
        },
        Strategy {
            name: "child_to_others_token",
            can_handle: child_to_others,
            plan: plan_child_to_others,
        },
        Strategy {
            name: "parent_to_child_token",
            can_handle: parent_to_child,
            plan: plan_parent_to_child,
        },
        Strategy {
            name: "flow_to_flow_token",
            can_handle: flow_to_flow,
            plan: plan_flow_to_flow,
        },
        Strategy {
            name: "flow_to_evm_token",
            can_handle: flow_to_evm_native,
            plan: plan_flow_to_evm_native,
        },
        Strategy {
            name: "flow_token_bridge_to_evm",
            can_handle: flow_bridge_to_evm,
            plan: plan_flow_bridge_to_evm,
        },
        Strategy {
            name: "evm_to_flow_coa_withdrawal",
            can_handle: coa_withdrawal,
            plan: plan_coa_withdrawal,
        },
        Strategy {
            name: "evm_to_flow_token_bridge",
            can_handle: evm_bridge_to_flow,
            plan: plan_evm_bridge_to_flow,
        },
        Strategy {
            name: "evm_to_evm_token",
            can_handle: evm_to_evm,
            plan: plan_evm_to_evm,
        },
    ]
}

fn is_token(request: &TransferRequest) -> bool {
    request.kind == AssetKind::Token
}

/// 子账户 → 子账户
fn child_to_child(r: &TransferRequest) -> bool {
    is_token(r) && r.has_children() && r.is_child(&r.receiver) && r.is_child(&r.sender)
}

fn plan_child_to_child(r: &TransferRequest) -> Result<OperationCall, TransferError> {
    call(
        "sendChildFtToChild",
        vec![
            ArgValue::from(r.resource_identifier.as_str()),
            ArgValue::from(r.sender.as_str()),
            ArgValue::from(r.receiver.as_str()),
            ArgValue::from(r.amount.as_str()),
        ],
    )
}

/// 子账户 → 其余目标（主账户回收 / COA / 外部 EVM / 普通 Flow 地址）
fn child_to_others(r: &TransferRequest) -> bool {
    is_token(r) && r.has_children() && r.is_child(&r.sender) && r.network == NetworkDomain::Flow
}

fn plan_child_to_others(r: &TransferRequest) -> Result<OperationCall, TransferError> {
    if r.receiver == r.proposer {
        call(
            "transferChildFt",
            vec![
                ArgValue::from(r.resource_identifier.as_str()),
                ArgValue::from(r.sender.as_str()),
                ArgValue::from(r.amount.as_str()),
            ],
        )
    } else if r.receiver == r.coa_address {
        call(
            "bridgeChildFtToEvm",
            vec![
                ArgValue::from(r.resource_identifier.as_str()),
                ArgValue::from(r.sender.as_str()),
                ArgValue::from(r.amount.as_str()),
            ],
        )
    } else if is_evm_address(&r.receiver) {
        call(
            "bridgeChildFtToEvmAddress",
            vec![
                ArgValue::from(r.resource_identifier.as_str()),
                ArgValue::from(r.sender.as_str()),
                ArgValue::from(r.amount.as_str()),
                ArgValue::from(r.receiver.as_str()),
            ],
        )
    } else {
        call(
            "sendChildFt",
            vec![
                ArgValue::from(r.resource_identifier.as_str()),
                ArgValue::from(r.sender.as_str()),
                ArgValue::from(r.receiver.as_str()),
                ArgValue::from(r.amount.as_str()),
            ],
        )
    }
}

/// 主账户 COA → 子账户（EVM 资产桥回）
fn parent_to_child(r: &TransferRequest) -> bool {
    is_token(r)
        && r.has_children()
        && r.is_child(&r.receiver)
        && r.network == NetworkDomain::Evm
        && r.sender == r.coa_address
}

fn plan_parent_to_child(r: &TransferRequest) -> Result<OperationCall, TransferError> {
    let decimals = r
        .decimals
        .ok_or_else(|| TransferError::InvalidTokenAmount("missing decimals".to_string()))?;
    let units = scale_to_integer_units(&r.amount, decimals)?;
    call(
        "bridgeChildFtFromEvm",
        vec![
            ArgValue::from(r.resource_identifier.as_str()),
            ArgValue::from(r.receiver.as_str()),
            ArgValue::from(units),
        ],
    )
}

/// Flow → Flow
fn flow_to_flow(r: &TransferRequest) -> bool {
    is_token(r) && r.network == NetworkDomain::Flow && is_flow_address(&r.receiver)
}

fn plan_flow_to_flow(r: &TransferRequest) -> Result<OperationCall, TransferError> {
    call(
        "transferTokensV3",
        vec![
            ArgValue::from(r.resource_identifier.as_str()),
            ArgValue::from(r.receiver.as_str()),
            ArgValue::from(r.amount.as_str()),
        ],
    )
}

/// 原生 FLOW → EVM 地址（无需过桥，必须先于通用桥接路由匹配）
fn flow_to_evm_native(r: &TransferRequest) -> bool {
    is_token(r)
        && r.network == NetworkDomain::Flow
        && r.identifier_contains("FlowToken")
        && is_evm_address(&r.receiver)
}

fn plan_flow_to_evm_native(r: &TransferRequest) -> Result<OperationCall, TransferError> {
    call(
        "transferFlowToEvmAddress",
        vec![
            ArgValue::from(r.receiver.as_str()),
            ArgValue::from(r.amount.as_str()),
            ArgValue::from(EVM_GAS_LIMIT),
        ],
    )
}

/// 任意 Flow 资产 → EVM 地址（过桥）
fn flow_bridge_to_evm(r: &TransferRequest) -> bool {
    is_token(r) && r.network == NetworkDomain::Flow && is_evm_address(&r.receiver)
}

fn plan_flow_bridge_to_evm(r: &TransferRequest) -> Result<OperationCall, TransferError> {
    call(
        "bridgeTokensToEvmAddressV2",
        vec![
            ArgValue::from(r.resource_identifier.as_str()),
            ArgValue::from(r.amount.as_str()),
            ArgValue::from(r.receiver.as_str()),
        ],
    )
}

/// COA 提取原生 FLOW → Flow 地址（必须先于通用桥回路由匹配）
fn coa_withdrawal(r: &TransferRequest) -> bool {
    is_token(r)
        && r.network == NetworkDomain::Evm
        && r.identifier_contains("FlowToken")
        && is_flow_address(&r.receiver)
}

fn plan_coa_withdrawal(r: &TransferRequest) -> Result<OperationCall, TransferError> {
    call(
        "withdrawCoa",
        vec![
            ArgValue::from(r.amount.as_str()),
            ArgValue::from(r.receiver.as_str()),
        ],
    )
}

/// 任意 EVM 资产 → Flow 地址（过桥）
fn evm_bridge_to_flow(r: &TransferRequest) -> bool {
    is_token(r) && r.network == NetworkDomain::Evm && is_flow_address(&r.receiver)
}

fn plan_evm_bridge_to_flow(r: &TransferRequest) -> Result<OperationCall, TransferError> {
    call(
        "bridgeTokensFromEvmToFlowV3",
        vec![
            ArgValue::from(r.resource_identifier.as_str()),
            ArgValue::from(r.amount.as_str()),
            ArgValue::from(r.receiver.as_str()),
        ],
    )
}

/// EVM → EVM（原生 FLOW 直转，ERC-20 走合约 call data）
fn evm_to_evm(r: &TransferRequest) -> bool {
    is_token(r) && r.network == NetworkDomain::Evm && is_evm_address(&r.receiver)
}

fn plan_evm_to_evm(r: &TransferRequest) -> Result<OperationCall, TransferError> {
    if r.identifier_contains("FlowToken") {
        call(
            "callContract",
            vec![
                ArgValue::from(EVM_ZERO_ADDRESS),
                ArgValue::from(r.amount.as_str()),
                ArgValue::Bytes(Vec::new()),
                ArgValue::from(EVM_GAS_LIMIT),
            ],
        )
    } else {
        let data = encode_contract_call_data(r)?;
        call(
            "callContract",
            vec![
                ArgValue::from(r.token_contract_address.as_str()),
                ArgValue::from("0.0"),
                ArgValue::Bytes(data),
                ArgValue::from(EVM_GAS_LIMIT),
            ],
        )
    }
}
