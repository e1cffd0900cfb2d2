//! Integer helpers for reserve and share arithmetic.
//! Products of reserves are carried in 256 bits so they never overflow;
//! every division truncates toward zero.

use soroban_sdk::{Env, U256};

use crate::errors::PoolError;

/// Shares permanently locked on the first deposit.
pub const MINIMUM_LIQUIDITY: i128 = 1_000;
/// Swap fee, expressed as `FEE_NUMERATOR / FEE_DENOMINATOR` (0.3%).
pub const FEE_NUMERATOR: u32 = 3;
pub const FEE_DENOMINATOR: u32 = 1_000;

pub fn sub_native(a: u64, b: u64) -> Result<u64, PoolError> {
    a.checked_sub(b).ok_or(PoolError::Overflow)
}

pub fn sub_paired(a: u128, b: u128) -> Result<u128, PoolError> {
    a.checked_sub(b).ok_or(PoolError::Overflow)
}

/// Widens a non-negative share amount.
pub fn shares_to_u256(env: &Env, shares: i128) -> Result<U256, PoolError> {
    let shares = u128::try_from(shares).map_err(|_| PoolError::Overflow)?;
    Ok(U256::from_u128(env, shares))
}

pub fn u256_to_shares(value: &U256) -> Result<i128, PoolError> {
    let value = value.to_u128().ok_or(PoolError::Overflow)?;
    i128::try_from(value).map_err(|_| PoolError::Overflow)
}

pub fn u256_to_native(value: &U256) -> Result<u64, PoolError> {
    let value = value.to_u128().ok_or(PoolError::Overflow)?;
    u64::try_from(value).map_err(|_| PoolError::Overflow)
}

pub fn u256_to_paired(value: &U256) -> Result<u128, PoolError> {
    value.to_u128().ok_or(PoolError::Overflow)
}

/// `native * paired` in 256 bits.
pub fn product(env: &Env, native: u64, paired: u128) -> U256 {
    U256::from_u128(env, native as u128).mul(&U256::from_u128(env, paired))
}

/// Computes the integer square root (floor) using Newton's method.
pub fn sqrt(env: &Env, value: &U256) -> U256 {
    let zero = U256::from_u32(env, 0);
    if *value == zero {
        return zero;
    }
    let one = U256::from_u32(env, 1);
    let two = U256::from_u32(env, 2);
    let mut x = value.clone();
    let mut y = x.add(&one).div(&two);
    while y < x {
        x = y;
        y = x.add(&value.div(&x)).div(&two);
    }
    x
}

/// Returns the smaller of two values.
pub fn min(a: U256, b: U256) -> U256 {
    if a < b {
        a
    } else {
        b
    }
}
