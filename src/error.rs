//! 转账引擎错误类型
//!
//! 校验错误全部在触达执行层之前同步抛出，调用方修正请求后均可重试；
//! 执行层错误原样透传，不包装、不重试

use thiserror::Error;

/// 转账引擎统一错误
#[derive(Debug, Error)]
pub enum TransferError {
    /// proposer 不是合法的 Flow 地址
    #[error("invalid proposer address: {0}")]
    InvalidProposer(String),

    /// 必填字段为空
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// FT 资源标识符不符合 Vault 文法
    #[error("invalid token identifier: {0}")]
    InvalidTokenIdentifier(String),

    /// FT 金额缺失、无法解析或不为正数
    #[error("invalid token amount: {0}")]
    InvalidTokenAmount(String),

    /// NFT 资源标识符不符合 NFT 文法
    #[error("invalid nft identifier: {0}")]
    InvalidNftIdentifier(String),

    /// NFT 请求缺少 id 或 id 形态不符
    #[error("invalid nft payload: {0}")]
    InvalidNftPayload(String),

    /// 地址格式错误（EVM 侧编码要求 20 字节地址）
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// 金额无法解析为十进制数
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// 执行层失败，原样透传
    #[error(transparent)]
    Execution(#[from] anyhow::Error),
}

impl TransferError {
    /// 稳定的机器可读错误代码（与前端文案映射对齐）
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidProposer(_) => "invalid_proposer",
            Self::MissingField(_) => "missing_field",
            Self::InvalidTokenIdentifier(_) => "invalid_token_identifier",
            Self::InvalidTokenAmount(_) => "invalid_token_amount",
            Self::InvalidNftIdentifier(_) => "invalid_nft_identifier",
            Self::InvalidNftPayload(_) => "invalid_nft_payload",
            Self::InvalidAddress(_) => "invalid_address",
            Self::InvalidAmount(_) => "invalid_amount",
            Self::Execution(_) => "execution_failed",
        }
    }

    /// 是否为本地校验错误（非执行层透传）
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Execution(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(
            TransferError::InvalidProposer("0x123".into()).code(),
            "invalid_proposer"
        );
        assert_eq!(TransferError::MissingField("sender").code(), "missing_field");
        assert_eq!(
            TransferError::Execution(anyhow::anyhow!("rpc down")).code(),
            "execution_failed"
        );
    }

    #[test]
    fn test_validation_classification() {
        assert!(TransferError::InvalidAmount("abc".into()).is_validation());
        assert!(!TransferError::Execution(anyhow::anyhow!("timeout")).is_validation());
    }

    #[test]
    fn test_execution_error_passes_through_message() {
        let err = TransferError::from(anyhow::anyhow!("sequence number mismatch"));
        assert_eq!(err.to_string(), "sequence number mismatch");
    }
}
