//! NFT 转账策略（8 条，按特化程度降序注册）

use crate::domain::{AssetKind, NetworkDomain, TransferRequest};
use crate::error::TransferError;
use crate::service::executor::{ArgValue, OperationCall};
use crate::utils::address_validator::{is_evm_address, is_flow_address};
use crate::utils::call_data::encode_contract_call_data;

use super::{call, Strategy, EVM_GAS_LIMIT};

pub(super) fn strategies() -> Vec<Strategy> {
    vec![
        Strategy {
            name: "child_to_child_nft",
            can_handle: child_to_child,
            plan: plan_child_to_child,
        },
        Strategy {
            name: "child_to_others_nft",
            can_handle: child_to_others,
            plan: plan_child_to_others,
        },
        Strategy {
            name: "parent_to_child_nft",
            can_handle: parent_to_child,
            plan: plan_parent_to_child,
        },
        Strategy {
            name: "topshot_nft",
            can_handle: topshot,
            plan: plan_topshot,
        },
        Strategy {
            name: "flow_to_flow_nft",
            can_handle: flow_to_flow,
            plan: plan_flow_to_flow,
        },
        Strategy {
            name: "flow_bridge_to_evm_nft",
            can_handle: flow_bridge_to_evm,
            plan: plan_flow_bridge_to_evm,
        },
        Strategy {
            name: "evm_bridge_to_flow_nft",
            can_handle: evm_bridge_to_flow,
            plan: plan_evm_bridge_to_flow,
        },
        Strategy {
            name: "evm_to_evm_nft",
            can_handle: evm_to_evm,
            plan: plan_evm_to_evm,
        },
    ]
}

fn is_nft(request: &TransferRequest) -> bool {
    request.kind == AssetKind::Nft
}

fn ids_as_strings(request: &TransferRequest) -> Vec<String> {
    request.ids.iter().map(|id| id.to_string()).collect()
}

fn first_id(request: &TransferRequest) -> Result<u64, TransferError> {
    request
        .ids
        .first()
        .copied()
        .ok_or_else(|| TransferError::InvalidNftPayload("ids cannot be empty".to_string()))
}

/// 子账户 → 子账户
fn child_to_child(r: &TransferRequest) -> bool {
    is_nft(r) && r.has_children() && r.is_child(&r.receiver) && r.is_child(&r.sender)
}

fn plan_child_to_child(r: &TransferRequest) -> Result<OperationCall, TransferError> {
    call(
        "batchSendChildNftToChild",
        vec![
            ArgValue::from(r.resource_identifier.as_str()),
            ArgValue::from(r.sender.as_str()),
            ArgValue::from(r.receiver.as_str()),
            ArgValue::from(r.ids.clone()),
        ],
    )
}

/// 子账户 → 其余目标（主账户回收 / COA / 外部 EVM / 普通 Flow 地址）
fn child_to_others(r: &TransferRequest) -> bool {
    is_nft(r) && r.has_children() && r.is_child(&r.sender) && r.network == NetworkDomain::Flow
}

fn plan_child_to_others(r: &TransferRequest) -> Result<OperationCall, TransferError> {
    if r.receiver == r.proposer {
        call(
            "batchTransferChildNft",
            vec![
                ArgValue::from(r.resource_identifier.as_str()),
                ArgValue::from(r.sender.as_str()),
                ArgValue::from(r.ids.clone()),
            ],
        )
    } else if r.receiver == r.coa_address {
        call(
            "batchBridgeChildNftToEvm",
            vec![
                ArgValue::from(r.resource_identifier.as_str()),
                ArgValue::from(r.sender.as_str()),
                ArgValue::from(r.ids.clone()),
            ],
        )
    } else if is_evm_address(&r.receiver) {
        call(
            "batchBridgeChildNftToEvmAddress",
            vec![
                ArgValue::from(r.resource_identifier.as_str()),
                ArgValue::from(r.sender.as_str()),
                ArgValue::from(r.ids.clone()),
                ArgValue::from(r.receiver.as_str()),
            ],
        )
    } else {
        call(
            "batchSendChildNft",
            vec![
                ArgValue::from(r.resource_identifier.as_str()),
                ArgValue::from(r.sender.as_str()),
                ArgValue::from(r.receiver.as_str()),
                ArgValue::from(r.ids.clone()),
            ],
        )
    }
}

/// 主账户 COA → 子账户（EVM 资产桥回）
fn parent_to_child(r: &TransferRequest) -> bool {
    is_nft(r)
        && r.has_children()
        && r.is_child(&r.receiver)
        && r.network == NetworkDomain::Evm
        && r.sender == r.coa_address
}

fn plan_parent_to_child(r: &TransferRequest) -> Result<OperationCall, TransferError> {
    call(
        "batchBridgeChildNftFromEvm",
        vec![
            ArgValue::from(r.resource_identifier.as_str()),
            ArgValue::from(r.receiver.as_str()),
            ArgValue::from(ids_as_strings(r)),
        ],
    )
}

/// NBA TopShot 专用通道（必须先于通用 Flow → Flow 路由匹配）
fn topshot(r: &TransferRequest) -> bool {
    is_nft(r)
        && r.network == NetworkDomain::Flow
        && r.identifier_contains("TopShot")
        && is_flow_address(&r.receiver)
}

fn plan_topshot(r: &TransferRequest) -> Result<OperationCall, TransferError> {
    call(
        "sendNbaNftV3",
        vec![
            ArgValue::from(r.resource_identifier.as_str()),
            ArgValue::from(r.receiver.as_str()),
            ArgValue::from(first_id(r)?),
        ],
    )
}

/// Flow → Flow（单个 id）
fn flow_to_flow(r: &TransferRequest) -> bool {
    is_nft(r)
        && r.network == NetworkDomain::Flow
        && is_flow_address(&r.receiver)
        && r.ids.len() == 1
}

fn plan_flow_to_flow(r: &TransferRequest) -> Result<OperationCall, TransferError> {
    call(
        "sendNft",
        vec![
            ArgValue::from(r.resource_identifier.as_str()),
            ArgValue::from(r.receiver.as_str()),
            ArgValue::from(first_id(r)?),
        ],
    )
}

/// Flow NFT → EVM 地址（过桥，支持批量）
fn flow_bridge_to_evm(r: &TransferRequest) -> bool {
    is_nft(r) && r.network == NetworkDomain::Flow && is_evm_address(&r.receiver)
}

fn plan_flow_bridge_to_evm(r: &TransferRequest) -> Result<OperationCall, TransferError> {
    call(
        "batchBridgeNftToEvmAddress",
        vec![
            ArgValue::from(r.resource_identifier.as_str()),
            ArgValue::from(r.ids.clone()),
            ArgValue::from(r.receiver.as_str()),
        ],
    )
}

/// EVM NFT → Flow 地址（过桥，支持批量）
fn evm_bridge_to_flow(r: &TransferRequest) -> bool {
    is_nft(r) && r.network == NetworkDomain::Evm && is_flow_address(&r.receiver)
}

fn plan_evm_bridge_to_flow(r: &TransferRequest) -> Result<OperationCall, TransferError> {
    call(
        "batchBridgeNftFromEvmToFlow",
        vec![
            ArgValue::from(r.resource_identifier.as_str()),
            ArgValue::from(ids_as_strings(r)),
            ArgValue::from(r.receiver.as_str()),
        ],
    )
}

/// EVM → EVM（合约 call data）
fn evm_to_evm(r: &TransferRequest) -> bool {
    is_nft(r) && r.network == NetworkDomain::Evm && is_evm_address(&r.receiver)
}

fn plan_evm_to_evm(r: &TransferRequest) -> Result<OperationCall, TransferError> {
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
