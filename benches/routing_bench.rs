//! 路由解析性能基准测试
//!
//! 测试场景:
//! 1. 谓词线性扫描的解析耗时（命中首条 / 命中末条 / 未命中）
//! 2. 校验 + 参数编码的完整规划耗时
//!
//! 路由是纯同步热路径，预算为亚微秒级；基准用于防止
//! 谓词或编码层意外引入分配热点

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flowcore::prelude::*;

const PROPOSER: &str = "0x1654653399040a61";
const CHILD_A: &str = "0x99040a6116546533";
const CHILD_B: &str = "0xabcdef0123456789";
const EVM_RECEIVER: &str = "0x742d35cc6634c0532925a3b844bc9e7595f0beb6";

fn child_to_child_request() -> TransferRequest {
    TransferRequest {
        kind: AssetKind::Token,
        network: NetworkDomain::Flow,
        proposer: PROPOSER.into(),
        sender: CHILD_A.into(),
        receiver: CHILD_B.into(),
        resource_identifier: "A.1654653399040a61.FlowToken.Vault".into(),
        child_addresses: vec![CHILD_A.into(), CHILD_B.into()],
        ids: vec![],
        amount: "1.5".into(),
        decimals: Some(8),
        coa_address: String::new(),
        token_contract_address: String::new(),
    }
}

fn evm_nft_request() -> TransferRequest {
    TransferRequest {
        kind: AssetKind::Nft,
        network: NetworkDomain::Evm,
        proposer: PROPOSER.into(),
        sender: EVM_RECEIVER.into(),
        receiver: EVM_RECEIVER.into(),
        resource_identifier: "A.2d4c3caffbeab845.Moments.NFT".into(),
        child_addresses: vec![],
        ids: vec![42],
        amount: String::new(),
        decimals: None,
        coa_address: String::new(),
        token_contract_address: "0x7f27352d5f83db87a5a3e00f4b07cc2138d8ee52".into(),
    }
}

fn bench_resolve(c: &mut Criterion) {
    let first = child_to_child_request();
    let last = evm_nft_request();

    c.bench_function("resolve_first_strategy", |b| {
        b.iter(|| TransferRouter::resolve(black_box(&first)))
    });
    c.bench_function("resolve_last_strategy", |b| {
        b.iter(|| TransferRouter::resolve(black_box(&last)))
    });
}

fn bench_plan(c: &mut Criterion) {
    let token = child_to_child_request();
    let nft = evm_nft_request();

    c.bench_function("plan_token_transfer", |b| {
        b.iter(|| TransferRouter::plan(black_box(&token)))
    });
    c.bench_function("plan_nft_with_call_data", |b| {
        b.iter(|| TransferRouter::plan(black_box(&nft)))
    });
}

criterion_group!(benches, bench_resolve, bench_plan);
criterion_main!(benches);
