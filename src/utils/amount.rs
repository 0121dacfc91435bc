//! 金额编码
//!
//! Cadence 侧 UFix64 固定 8 位小数；EVM 侧使用 amount × 10^decimals 的整数基本单位。
//! 全程使用十进制精确计算，避免二进制浮点的舍入漂移。

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::TransferError;

/// 链原生定点格式的小数位数
pub const FIXED_POINT_SCALE: u32 = 8;

/// 定点零值，同时也是 safe 变体的默认返回
pub const FIXED_POINT_ZERO: &str = "0.00000000";

/// 转为 8 位小数的定点字符串
///
/// 超出 8 位的部分四舍五入（中点远离零），不截断；
/// 对自身输出幂等：`f(f(x)) == f(x)`
pub fn to_fixed_point_string(amount: &str) -> Result<String, TransferError> {
    let value = amount
        .trim()
        .parse::<Decimal>()
        .map_err(|_| TransferError::InvalidAmount(amount.to_string()))?;
    let rounded =
        value.round_dp_with_strategy(FIXED_POINT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    Ok(format!("{rounded:.8}"))
}

/// 同 [`to_fixed_point_string`]，解析失败时返回定点零值而不报错
pub fn safe_to_fixed_point_string(amount: &str) -> String {
    to_fixed_point_string(amount).unwrap_or_else(|_| FIXED_POINT_ZERO.to_string())
}

/// 转为 10^decimals 整数基本单位的十进制字符串（EVM 侧）
///
/// 超出 decimals 的小数位直接舍去（整数结果）；
/// 通过字符串拼接移位，不受定长整数宽度限制
pub fn scale_to_integer_units(amount: &str, decimals: u32) -> Result<String, TransferError> {
    let value = amount
        .trim()
        .parse::<Decimal>()
        .map_err(|_| TransferError::InvalidAmount(amount.to_string()))?;
    let normalized = value.normalize().to_string();

    let negative = normalized.starts_with('-');
    let unsigned = normalized.trim_start_matches('-');
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (unsigned, ""),
    };

    let mut frac = frac_part.to_string();
    frac.truncate(decimals as usize);
    while frac.len() < decimals as usize {
        frac.push('0');
    }

    let digits = format!("{int_part}{frac}");
    let digits = digits.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    Ok(if negative && digits != "0" {
        format!("-{digits}")
    } else {
        digits.to_string()
    })
}
