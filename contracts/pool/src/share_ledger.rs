//! Pool share ledger (SEP-41 shaped).
//!
//! Supply only changes through `mint_shares`/`burn_shares`, which the reserve
//! engine calls; `transfer`, `transfer_from` and `approve` move shares between
//! accounts without touching reserves. Total supply always equals the sum of
//! all balances.

use soroban_sdk::{Address, Env, String};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};

use crate::{
    errors::PoolError,
    storage::{
        read_allowance, read_balance, read_total_supply, write_allowance, write_balance,
        write_total_supply, AllowanceValue,
    },
};

pub const DECIMALS: u32 = 7;
const NAME: &str = "NativeSwap Pool Share";
const SYMBOL: &str = "NSPS";

pub fn write_metadata(env: &Env) {
    TokenUtils::new(env).metadata().set_metadata(&TokenMetadata {
        decimal: DECIMALS,
        name: String::from_str(env, NAME),
        symbol: String::from_str(env, SYMBOL),
    });
}

pub fn read_metadata(env: &Env) -> TokenMetadata {
    TokenUtils::new(env).metadata().get_metadata()
}

fn check_nonnegative(amount: i128) -> Result<(), PoolError> {
    if amount < 0 {
        return Err(PoolError::NegativeAmount);
    }
    Ok(())
}

pub fn balance(env: &Env, id: &Address) -> i128 {
    read_balance(env, id)
}

pub fn allowance(env: &Env, from: &Address, spender: &Address) -> i128 {
    read_allowance(env, from, spender).amount
}

pub fn total_supply(env: &Env) -> i128 {
    read_total_supply(env)
}

fn receive(env: &Env, to: &Address, amount: i128) -> Result<(), PoolError> {
    let balance = read_balance(env, to)
        .checked_add(amount)
        .ok_or(PoolError::Overflow)?;
    write_balance(env, to, balance);
    Ok(())
}

fn spend(env: &Env, from: &Address, amount: i128) -> Result<(), PoolError> {
    let balance = read_balance(env, from);
    if balance < amount {
        return Err(PoolError::InsufficientBalance);
    }
    write_balance(env, from, balance - amount);
    Ok(())
}

fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), PoolError> {
    let allowance = read_allowance(env, from, spender);
    if allowance.amount < amount {
        return Err(PoolError::InsufficientAllowance);
    }
    if amount > 0 {
        write_allowance(
            env,
            from,
            spender,
            &AllowanceValue {
                amount: allowance.amount - amount,
                expiration_ledger: allowance.expiration_ledger,
            },
        );
    }
    Ok(())
}

/// Creates `amount` new shares for `to`.
pub fn mint_shares(env: &Env, to: &Address, amount: i128) -> Result<(), PoolError> {
    check_nonnegative(amount)?;
    let supply = read_total_supply(env)
        .checked_add(amount)
        .ok_or(PoolError::Overflow)?;
    receive(env, to, amount)?;
    write_total_supply(env, supply);
    TokenUtils::new(env)
        .events()
        .mint(env.current_contract_address(), to.clone(), amount);
    Ok(())
}

/// Destroys `amount` shares held by `from`.
pub fn burn_shares(env: &Env, from: &Address, amount: i128) -> Result<(), PoolError> {
    check_nonnegative(amount)?;
    spend(env, from, amount)?;
    let supply = read_total_supply(env)
        .checked_sub(amount)
        .ok_or(PoolError::Overflow)?;
    write_total_supply(env, supply);
    TokenUtils::new(env).events().burn(from.clone(), amount);
    Ok(())
}

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), PoolError> {
    check_nonnegative(amount)?;
    spend(env, from, amount)?;
    receive(env, to, amount)?;
    TokenUtils::new(env)
        .events()
        .transfer(from.clone(), to.clone(), amount);
    Ok(())
}

pub fn transfer_from(
    env: &Env,
    spender: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), PoolError> {
    check_nonnegative(amount)?;
    spend_allowance(env, from, spender, amount)?;
    spend(env, from, amount)?;
    receive(env, to, amount)?;
    TokenUtils::new(env)
        .events()
        .transfer(from.clone(), to.clone(), amount);
    Ok(())
}

pub fn approve(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), PoolError> {
    check_nonnegative(amount)?;
    if amount > 0 && expiration_ledger < env.ledger().sequence() {
        return Err(PoolError::InvalidExpiration);
    }
    write_allowance(
        env,
        from,
        spender,
        &AllowanceValue {
            amount,
            expiration_ledger,
        },
    );
    TokenUtils::new(env)
        .events()
        .approve(from.clone(), spender.clone(), amount, expiration_ledger);
    Ok(())
}
