//! EVM 合约调用数据编码
//!
//! 覆盖三种标准转账调用：
//! - ERC-20  `transfer(address,uint256)`
//! - ERC-721 `safeTransferFrom(address,address,uint256)`
//! - ERC-1155 `safeTransferFrom(address,address,uint256,uint256,bytes)`
//!
//! 输出为原始字节序列（selector + ABI 编码参数），供执行层直接作为 call data 提交

use ethers::abi::{encode, Token};
use ethers::types::{Address, U256};
use ethers::utils::keccak256;

use crate::domain::{AssetKind, TransferRequest};
use crate::error::TransferError;
use crate::utils::address_validator::is_evm_address;
use crate::utils::amount::scale_to_integer_units;

/// 函数选择器：签名 keccak256 的前 4 字节
fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

fn encode_call(signature: &str, args: Vec<Token>) -> Vec<u8> {
    let mut out = Vec::with_capacity(4 + 32 * args.len());
    out.extend_from_slice(&selector(signature));
    out.extend_from_slice(&encode(&args));
    out
}

fn parse_evm_address(address: &str) -> Result<Address, TransferError> {
    if !is_evm_address(address) {
        return Err(TransferError::InvalidAddress(address.to_string()));
    }
    address
        .parse::<Address>()
        .map_err(|_| TransferError::InvalidAddress(address.to_string()))
}

/// 构建 EVM 侧转账的 ABI call data
///
/// FT 请求编码 ERC-20 transfer；单个 id 的 NFT 请求按 amount 是否为空
/// 区分 ERC-721 与 ERC-1155 两种 safeTransferFrom
pub fn encode_contract_call_data(request: &TransferRequest) -> Result<Vec<u8>, TransferError> {
    let receiver = parse_evm_address(&request.receiver)?;

    match request.kind {
        AssetKind::Token => {
            let decimals = request
                .decimals
                .ok_or_else(|| TransferError::InvalidTokenAmount("missing decimals".to_string()))?;
            let units = scale_to_integer_units(&request.amount, decimals)?;
            let value = U256::from_dec_str(&units)
                .map_err(|_| TransferError::InvalidAmount(request.amount.clone()))?;
            Ok(encode_call(
                "transfer(address,uint256)",
                vec![Token::Address(receiver), Token::Uint(value)],
            ))
        }
        AssetKind::Nft => {
            let id = match request.ids.as_slice() {
                [id] => *id,
                _ => {
                    return Err(TransferError::InvalidNftPayload(
                        "contract call data requires exactly one id".to_string(),
                    ))
                }
            };
            let sender = parse_evm_address(&request.sender)?;

            if request.amount.is_empty() {
                Ok(encode_call(
                    "safeTransferFrom(address,address,uint256)",
                    vec![
                        Token::Address(sender),
                        Token::Address(receiver),
                        Token::Uint(U256::from(id)),
                    ],
                ))
            } else {
                // 半同质化：amount 为整数份额
                let value = U256::from_dec_str(request.amount.trim())
                    .map_err(|_| TransferError::InvalidAmount(request.amount.clone()))?;
                Ok(encode_call(
                    "safeTransferFrom(address,address,uint256,uint256,bytes)",
                    vec![
                        Token::Address(sender),
                        Token::Address(receiver),
                        Token::Uint(U256::from(id)),
                        Token::Uint(value),
                        Token::Bytes(Vec::new()),
                    ],
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NetworkDomain;

    const SENDER: &str = "0x000000000000000000000002299bc271a3fa5a61";
    const RECEIVER: &str = "0x742d35cc6634c0532925a3b844bc9e7595f0beb6";

    fn evm_request(kind: AssetKind) -> TransferRequest {
        TransferRequest {
            kind,
            network: NetworkDomain::Evm,
            proposer: "0x1654653399040a61".into(),
            sender: SENDER.into(),
            receiver: RECEIVER.into(),
            resource_identifier: String::new(),
            child_addresses: vec![],
            ids: vec![],
            amount: String::new(),
            decimals: None,
            coa_address: String::new(),
            token_contract_address: "0x7f27352d5f83db87a5a3e00f4b07cc2138d8ee52".into(),
        }
    }

    #[test]
    fn test_erc20_transfer_call_data() {
        let mut request = evm_request(AssetKind::Token);
        request.amount = "1.5".into();
        request.decimals = Some(6);

        let data = encode_contract_call_data(&request).unwrap();
        // selector + 2 个 32 字节参数字
        assert_eq!(data.len(), 4 + 64);
        assert_eq!(&data[..4], hex::decode("a9059cbb").unwrap().as_slice());
        // 第一个参数字：receiver 左侧补零
        assert_eq!(&data[4..16], &[0u8; 12]);
        assert_eq!(hex::encode(&data[16..36]), RECEIVER.trim_start_matches("0x"));
        // 第二个参数字：1.5 × 10^6 = 1500000
        assert_eq!(U256::from_big_endian(&data[36..68]), U256::from(1_500_000u64));
    }

    #[test]
    fn test_erc721_safe_transfer_call_data() {
        let mut request = evm_request(AssetKind::Nft);
        request.ids = vec![42];

        let data = encode_contract_call_data(&request).unwrap();
        assert_eq!(data.len(), 4 + 96);
        assert_eq!(&data[..4], hex::decode("42842e0e").unwrap().as_slice());
        assert_eq!(hex::encode(&data[16..36]), SENDER.trim_start_matches("0x"));
        assert_eq!(hex::encode(&data[48..68]), RECEIVER.trim_start_matches("0x"));
        assert_eq!(U256::from_big_endian(&data[68..100]), U256::from(42u64));
    }

    #[test]
    fn test_erc1155_safe_transfer_call_data() {
        let mut request = evm_request(AssetKind::Nft);
        request.ids = vec![7];
        request.amount = "3".into();

        let data = encode_contract_call_data(&request).unwrap();
        assert_eq!(&data[..4], hex::decode("f242432a").unwrap().as_slice());
        // 5 个 head 字 + 动态 bytes 的长度字（空 payload）
        assert_eq!(data.len(), 4 + 5 * 32 + 32);
        assert_eq!(U256::from_big_endian(&data[68..100]), U256::from(7u64));
        assert_eq!(U256::from_big_endian(&data[100..132]), U256::from(3u64));
        // 空 bytes：长度字为 0
        assert_eq!(U256::from_big_endian(&data[164..196]), U256::zero());
    }

    #[test]
    fn test_receiver_must_be_20_bytes() {
        let mut request = evm_request(AssetKind::Token);
        request.amount = "1".into();
        request.decimals = Some(18);
        request.receiver = "0x1654653399040a61".into();

        assert!(matches!(
            encode_contract_call_data(&request),
            Err(TransferError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_nft_call_data_requires_single_id() {
        let mut request = evm_request(AssetKind::Nft);
        request.ids = vec![1, 2];

        assert!(matches!(
            encode_contract_call_data(&request),
            Err(TransferError::InvalidNftPayload(_))
        ));
    }
}
