//! 链上资源标识符文法
//!
//! 标识符形如 `A.<16位hex地址>.<合约名>.<后缀>`：
//! - 地址段不区分大小写
//! - 合约名匹配 `[A-Za-z0-9_]+`，区分大小写
//! - 后缀必须精确等于 `Vault` / `NFT` / `Collection` 之一，不允许多余的点或片段
//!
//! 所有非法输入一律返回 false，不会 panic

use once_cell::sync::Lazy;
use regex::Regex;

static VAULT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^A\.[0-9a-fA-F]{16}\.[A-Za-z0-9_]+\.Vault$").expect("valid regex literal")
});

static NFT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^A\.[0-9a-fA-F]{16}\.[A-Za-z0-9_]+\.NFT$").expect("valid regex literal")
});

static COLLECTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^A\.[0-9a-fA-F]{16}\.[A-Za-z0-9_]+\.Collection$").expect("valid regex literal")
});

/// 是否为 FT Vault 标识符
pub fn is_vault_identifier(identifier: &str) -> bool {
    VAULT_RE.is_match(identifier)
}

/// 是否为单个 NFT 标识符
pub fn is_nft_identifier(identifier: &str) -> bool {
    NFT_RE.is_match(identifier)
}

/// 是否为 NFT Collection 标识符
pub fn is_collection_identifier(identifier: &str) -> bool {
    COLLECTION_RE.is_match(identifier)
}

/// 是否为任一资源标识符（Vault / NFT / Collection）
pub fn is_any_resource_identifier(identifier: &str) -> bool {
    is_vault_identifier(identifier)
        || is_nft_identifier(identifier)
        || is_collection_identifier(identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLOW_VAULT: &str = "A.1654653399040a61.FlowToken.Vault";
    const TOPSHOT_NFT: &str = "A.0b2a3299cc857e29.TopShot.NFT";
    const TOPSHOT_COLLECTION: &str = "A.0b2a3299cc857e29.TopShot.Collection";

    #[test]
    fn test_well_formed_identifiers() {
        assert!(is_vault_identifier(FLOW_VAULT));
        assert!(is_nft_identifier(TOPSHOT_NFT));
        assert!(is_collection_identifier(TOPSHOT_COLLECTION));

        // 三类判定互斥
        assert!(!is_nft_identifier(FLOW_VAULT));
        assert!(!is_collection_identifier(FLOW_VAULT));
        assert!(!is_vault_identifier(TOPSHOT_NFT));
        assert!(!is_collection_identifier(TOPSHOT_NFT));
        assert!(!is_vault_identifier(TOPSHOT_COLLECTION));
        assert!(!is_nft_identifier(TOPSHOT_COLLECTION));

        assert!(is_any_resource_identifier(FLOW_VAULT));
        assert!(is_any_resource_identifier(TOPSHOT_NFT));
        assert!(is_any_resource_identifier(TOPSHOT_COLLECTION));
    }

    #[test]
    fn test_address_segment_is_case_insensitive() {
        assert!(is_vault_identifier("A.1654653399040A61.FlowToken.Vault"));
    }

    #[test]
    fn test_contract_name_charset() {
        assert!(is_vault_identifier("A.1654653399040a61.Flow_Token2.Vault"));
        assert!(!is_vault_identifier("A.1654653399040a61.Flow-Token.Vault"));
        assert!(!is_vault_identifier("A.1654653399040a61..Vault"));
    }

    #[test]
    fn test_malformed_identifiers_rejected() {
        // 前缀错误
        assert!(!is_any_resource_identifier("B.1654653399040a61.FlowToken.Vault"));
        // 地址长度错误
        assert!(!is_any_resource_identifier("A.1654653399040a6.FlowToken.Vault"));
        assert!(!is_any_resource_identifier("A.1654653399040a611.FlowToken.Vault"));
        // 后缀大小写错误
        assert!(!is_any_resource_identifier("A.1654653399040a61.FlowToken.vault"));
        assert!(!is_any_resource_identifier("A.1654653399040a61.TopShot.nft"));
        // 后缀缺失或多余片段
        assert!(!is_any_resource_identifier("A.1654653399040a61.FlowToken"));
        assert!(!is_any_resource_identifier("A.1654653399040a61.FlowToken.Vault.Extra"));
        assert!(!is_any_resource_identifier("A.1654653399040a61.FlowToken.Receiver"));
        // 空串
        assert!(!is_any_resource_identifier(""));
    }
}
