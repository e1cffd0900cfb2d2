use crate::errors::RouterError;
use soroban_sdk::{contractclient, Address, Bytes, Env};

/// Fee kept by the pool on every input, `FEE_NUMERATOR / FEE_DENOMINATOR`.
const FEE_NUMERATOR: u128 = 3;
const FEE_DENOMINATOR: u128 = 1_000;

#[contractclient(name = "PoolClient")]
pub trait PoolInterface {
    fn mint(env: Env, sender: Address, to: Address) -> i128;
    fn burn(env: Env, sender: Address, to: Address) -> (u64, u128);
    fn swap(
        env: Env,
        sender: Address,
        native_out: u64,
        paired_out: u128,
        to: Address,
        data: Bytes,
    );
    fn get_reserves(env: Env) -> (u64, u128);
    fn native(env: Env) -> Address;
    fn token(env: Env) -> Address;
}

/// Amount of the other asset worth `amount_a` at the current reserve ratio.
///
/// Formula: amount_b = amount_a * reserve_b / reserve_a
pub fn quote(amount_a: u128, reserve_a: u128, reserve_b: u128) -> Result<u128, RouterError> {
    if amount_a == 0 {
        return Err(RouterError::ZeroAmount);
    }
    if reserve_a == 0 || reserve_b == 0 {
        return Err(RouterError::InsufficientLiquidity);
    }
    let numerator = amount_a
        .checked_mul(reserve_b)
        .ok_or(RouterError::Overflow)?;
    Ok(numerator / reserve_a)
}

/// Computes output amount for an exact input swap using constant-product formula.
///
/// Formula: amount_out = (amount_in * 997 * reserve_out) /
///                       (reserve_in * 1000 + amount_in * 997)
pub fn get_amount_out(
    amount_in: u128,
    reserve_in: u128,
    reserve_out: u128,
) -> Result<u128, RouterError> {
    if amount_in == 0 {
        return Err(RouterError::ZeroAmount);
    }
    if reserve_in == 0 || reserve_out == 0 {
        return Err(RouterError::InsufficientLiquidity);
    }

    let amount_in_with_fee = amount_in
        .checked_mul(FEE_DENOMINATOR - FEE_NUMERATOR)
        .ok_or(RouterError::Overflow)?;
    let numerator = amount_in_with_fee
        .checked_mul(reserve_out)
        .ok_or(RouterError::Overflow)?;
    let denominator = reserve_in
        .checked_mul(FEE_DENOMINATOR)
        .ok_or(RouterError::Overflow)?
        .checked_add(amount_in_with_fee)
        .ok_or(RouterError::Overflow)?;

    let amount_out = numerator / denominator;
    if amount_out == 0 {
        return Err(RouterError::InsufficientOutputAmount);
    }

    Ok(amount_out)
}

/// Computes input amount required for an exact output swap.
///
/// Formula: amount_in = (reserve_in * amount_out * 1000) /
///                      ((reserve_out - amount_out) * 997) + 1
pub fn get_amount_in(
    amount_out: u128,
    reserve_in: u128,
    reserve_out: u128,
) -> Result<u128, RouterError> {
    if amount_out == 0 {
        return Err(RouterError::ZeroAmount);
    }
    if reserve_in == 0 || amount_out >= reserve_out {
        return Err(RouterError::InsufficientLiquidity);
    }

    let numerator = reserve_in
        .checked_mul(amount_out)
        .ok_or(RouterError::Overflow)?
        .checked_mul(FEE_DENOMINATOR)
        .ok_or(RouterError::Overflow)?;
    let denominator = (reserve_out - amount_out)
        .checked_mul(FEE_DENOMINATOR - FEE_NUMERATOR)
        .ok_or(RouterError::Overflow)?;

    (numerator / denominator)
        .checked_add(1)
        .ok_or(RouterError::Overflow)
}

pub fn to_native(amount: u128) -> Result<u64, RouterError> {
    u64::try_from(amount).map_err(|_| RouterError::Overflow)
}

pub fn to_token_amount(amount: u128) -> Result<i128, RouterError> {
    i128::try_from(amount).map_err(|_| RouterError::Overflow)
}
