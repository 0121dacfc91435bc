//! 转账请求数据模型
//!
//! 引擎处理的唯一输入值：一次转账对应一个请求，校验、路由、
//! 提交后即丢弃，不缓存、不复用。构造后只读，路由过程不修改任何字段。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::resource_identifier;
use crate::error::TransferError;
use crate::utils::address_validator;

/// 资产类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// 同质化代币
    Token,
    /// 非同质化代币
    Nft,
}

/// 资产原生所在的网络
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkDomain {
    /// Cadence 主网络
    Flow,
    /// Flow EVM
    Evm,
}

/// 转账请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferRequest {
    /// 资产类型
    pub kind: AssetKind,
    /// 资产原生网络
    #[serde(alias = "networkDomain")]
    pub network: NetworkDomain,
    /// 发起签名的 Flow 地址
    pub proposer: String,
    /// 源地址（Flow 或 EVM 格式，取决于路由）
    pub sender: String,
    /// 目标地址
    pub receiver: String,
    /// 链上资源标识符（FT Vault 或 NFT/Collection 类型）；原生 EVM 转账可为空
    #[serde(default, alias = "resourceIdentifier")]
    pub resource_identifier: String,
    /// proposer 主账户下的 hybrid-custody 子账户地址集合
    #[serde(default, alias = "childAddresses")]
    pub child_addresses: Vec<String>,
    /// NFT id 列表（仅 NFT 转账）
    #[serde(default)]
    pub ids: Vec<u64>,
    /// 十进制金额字符串（仅 FT 转账）
    #[serde(default)]
    pub amount: String,
    /// 资产小数位数（仅 FT 转账）
    #[serde(default)]
    pub decimals: Option<u32>,
    /// proposer 的 COA EVM 地址（未开通为空字符串）
    #[serde(default, alias = "coaAddress")]
    pub coa_address: String,
    /// 资产的 EVM 合约地址
    #[serde(default, alias = "tokenContractAddress")]
    pub token_contract_address: String,
}

impl TransferRequest {
    /// 校验请求
    ///
    /// 纯本地同步校验，不触达执行层；所有失败均可由调用方修正请求后重试
    pub fn validate(&self) -> Result<(), TransferError> {
        if !address_validator::is_flow_address(&self.proposer) {
            return Err(TransferError::InvalidProposer(self.proposer.clone()));
        }
        if self.sender.is_empty() {
            return Err(TransferError::MissingField("sender"));
        }
        if self.receiver.is_empty() {
            return Err(TransferError::MissingField("receiver"));
        }
        match self.kind {
            AssetKind::Token => self.validate_token(),
            AssetKind::Nft => self.validate_nft(),
        }
    }

    fn validate_token(&self) -> Result<(), TransferError> {
        if !self.resource_identifier.is_empty()
            && !resource_identifier::is_vault_identifier(&self.resource_identifier)
        {
            return Err(TransferError::InvalidTokenIdentifier(
                self.resource_identifier.clone(),
            ));
        }
        let amount = self
            .amount
            .trim()
            .parse::<Decimal>()
            .map_err(|_| TransferError::InvalidTokenAmount(self.amount.clone()))?;
        if amount <= Decimal::ZERO {
            return Err(TransferError::InvalidTokenAmount(self.amount.clone()));
        }
        if self.decimals.is_none() {
            return Err(TransferError::InvalidTokenAmount("missing decimals".to_string()));
        }
        // TODO: 等客户端不再对 EVM 代币发送空 token_contract_address 后，
        // 在这里恢复对该字段的格式校验（参见 DESIGN.md 的已知缺口）
        Ok(())
    }

    fn validate_nft(&self) -> Result<(), TransferError> {
        if !self.resource_identifier.is_empty()
            && !resource_identifier::is_nft_identifier(&self.resource_identifier)
        {
            return Err(TransferError::InvalidNftIdentifier(
                self.resource_identifier.clone(),
            ));
        }
        if self.ids.is_empty() {
            return Err(TransferError::InvalidNftPayload("ids cannot be empty".to_string()));
        }
        Ok(())
    }

    /// proposer 是否挂有子账户
    pub fn has_children(&self) -> bool {
        !self.child_addresses.is_empty()
    }

    /// 给定地址是否为 proposer 的子账户
    pub fn is_child(&self, address: &str) -> bool {
        self.child_addresses.iter().any(|a| a == address)
    }

    /// 资源标识符是否包含给定合约名片段
    pub fn identifier_contains(&self, needle: &str) -> bool {
        self.resource_identifier.contains(needle)
    }
}
