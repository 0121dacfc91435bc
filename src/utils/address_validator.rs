//! 地址格式校验
//!
//! Flow 地址为 `0x` + 16 位 hex，EVM 地址为 `0x` + 40 位 hex；
//! 两者仅做语法校验，不做 checksum（Flow 地址无 checksum 约定）

use once_cell::sync::Lazy;
use regex::Regex;

static FLOW_ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[0-9a-fA-F]{16}$").expect("valid regex literal"));

static EVM_ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("valid regex literal"));

/// 校验 Flow (Cadence) 地址格式
pub fn is_flow_address(address: &str) -> bool {
    FLOW_ADDRESS_RE.is_match(address)
}

/// 校验 EVM 地址格式
pub fn is_evm_address(address: &str) -> bool {
    EVM_ADDRESS_RE.is_match(address)
}
