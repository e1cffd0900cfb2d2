#![no_std]

mod errors;
mod helpers;

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod test;

pub use errors::RouterError;
use helpers::{get_amount_in, get_amount_out, quote, to_native, to_token_amount, PoolClient};
use soroban_sdk::{
    contract, contractimpl, contracttype, token::TokenClient, Address, Bytes, Env,
};

/// The asset a swap takes in.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Native,
    Paired,
}

fn check_deadline(env: &Env, deadline: u64) -> Result<(), RouterError> {
    if env.ledger().timestamp() > deadline {
        return Err(RouterError::Expired);
    }
    Ok(())
}

/// Orients the pool reserves as `(reserve_in, reserve_out)`.
fn reserves_for(pool_client: &PoolClient, input: Side) -> (u128, u128) {
    let (reserve_native, reserve_paired) = pool_client.get_reserves();
    match input {
        Side::Native => (u128::from(reserve_native), reserve_paired),
        Side::Paired => (reserve_paired, u128::from(reserve_native)),
    }
}

/// Moves `amount_in` from `sender` into the pool and asks for `amount_out`
/// of the other asset, all inside the current invocation.
fn pay_and_swap(
    env: &Env,
    pool_client: &PoolClient,
    sender: &Address,
    input: Side,
    amount_in: u128,
    amount_out: u128,
    to: &Address,
) -> Result<(), RouterError> {
    let router = env.current_contract_address();
    let data = Bytes::new(env);
    match input {
        Side::Native => {
            TokenClient::new(env, &pool_client.native()).transfer(
                sender,
                &pool_client.address,
                &to_token_amount(amount_in)?,
            );
            pool_client.swap(&router, &0, &amount_out, to, &data);
        }
        Side::Paired => {
            TokenClient::new(env, &pool_client.token()).transfer(
                sender,
                &pool_client.address,
                &to_token_amount(amount_in)?,
            );
            pool_client.swap(&router, &to_native(amount_out)?, &0, to, &data);
        }
    }
    Ok(())
}

#[contract]
pub struct Router;

#[contractimpl]
impl Router {
    /// Deposits both assets at the pool's current ratio and mints shares to
    /// `to`. Returns `(native, paired, shares)`.
    pub fn add_liquidity(
        env: Env,
        pool: Address,
        sender: Address,
        native_desired: u64,
        paired_desired: u128,
        native_min: u64,
        paired_min: u128,
        to: Address,
        deadline: u64,
    ) -> Result<(u64, u128, i128), RouterError> {
        check_deadline(&env, deadline)?;
        if native_desired == 0 || paired_desired == 0 {
            return Err(RouterError::ZeroAmount);
        }
        sender.require_auth();

        let pool_client = PoolClient::new(&env, &pool);
        let (reserve_native, reserve_paired) = pool_client.get_reserves();

        let (amount_native, amount_paired) = if reserve_native == 0 && reserve_paired == 0 {
            (native_desired, paired_desired)
        } else {
            let paired_optimal = quote(
                u128::from(native_desired),
                u128::from(reserve_native),
                reserve_paired,
            )?;
            if paired_optimal <= paired_desired {
                if paired_optimal < paired_min {
                    return Err(RouterError::InsufficientPairedAmount);
                }
                (native_desired, paired_optimal)
            } else {
                let native_optimal = to_native(quote(
                    paired_desired,
                    reserve_paired,
                    u128::from(reserve_native),
                )?)?;
                if native_optimal < native_min {
                    return Err(RouterError::InsufficientNativeAmount);
                }
                (native_optimal, paired_desired)
            }
        };

        TokenClient::new(&env, &pool_client.native()).transfer(
            &sender,
            &pool,
            &i128::from(amount_native),
        );
        TokenClient::new(&env, &pool_client.token()).transfer(
            &sender,
            &pool,
            &to_token_amount(amount_paired)?,
        );

        let liquidity = pool_client.mint(&env.current_contract_address(), &to);
        Ok((amount_native, amount_paired, liquidity))
    }

    /// Returns `liquidity` shares to the pool and sends the redeemed assets
    /// to `to`.
    pub fn remove_liquidity(
        env: Env,
        pool: Address,
        sender: Address,
        liquidity: i128,
        native_min: u64,
        paired_min: u128,
        to: Address,
        deadline: u64,
    ) -> Result<(u64, u128), RouterError> {
        check_deadline(&env, deadline)?;
        if liquidity <= 0 {
            return Err(RouterError::ZeroAmount);
        }
        sender.require_auth();

        // The pool is its own share token.
        TokenClient::new(&env, &pool).transfer(&sender, &pool, &liquidity);

        let pool_client = PoolClient::new(&env, &pool);
        let (amount_native, amount_paired) =
            pool_client.burn(&env.current_contract_address(), &to);

        if amount_native < native_min {
            return Err(RouterError::InsufficientNativeAmount);
        }
        if amount_paired < paired_min {
            return Err(RouterError::InsufficientPairedAmount);
        }

        Ok((amount_native, amount_paired))
    }

    /// Sells exactly `amount_in` of the `input` asset. Returns the amount
    /// received.
    pub fn swap_exact_in(
        env: Env,
        pool: Address,
        sender: Address,
        input: Side,
        amount_in: u128,
        amount_out_min: u128,
        to: Address,
        deadline: u64,
    ) -> Result<u128, RouterError> {
        check_deadline(&env, deadline)?;
        if amount_in == 0 {
            return Err(RouterError::ZeroAmount);
        }
        sender.require_auth();

        let pool_client = PoolClient::new(&env, &pool);
        let (reserve_in, reserve_out) = reserves_for(&pool_client, input);
        let amount_out = get_amount_out(amount_in, reserve_in, reserve_out)?;
        if amount_out < amount_out_min {
            return Err(RouterError::InsufficientOutputAmount);
        }

        pay_and_swap(&env, &pool_client, &sender, input, amount_in, amount_out, &to)?;
        Ok(amount_out)
    }

    /// Buys exactly `amount_out` of the other asset with the `input` asset.
    /// Returns the amount paid.
    pub fn swap_exact_out(
        env: Env,
        pool: Address,
        sender: Address,
        input: Side,
        amount_out: u128,
        amount_in_max: u128,
        to: Address,
        deadline: u64,
    ) -> Result<u128, RouterError> {
        check_deadline(&env, deadline)?;
        if amount_out == 0 {
            return Err(RouterError::ZeroAmount);
        }
        sender.require_auth();

        let pool_client = PoolClient::new(&env, &pool);
        let (reserve_in, reserve_out) = reserves_for(&pool_client, input);
        let amount_in = get_amount_in(amount_out, reserve_in, reserve_out)?;
        if amount_in > amount_in_max {
            return Err(RouterError::ExcessiveInputAmount);
        }

        pay_and_swap(&env, &pool_client, &sender, input, amount_in, amount_out, &to)?;
        Ok(amount_in)
    }

    pub fn quote(amount_a: u128, reserve_a: u128, reserve_b: u128) -> Result<u128, RouterError> {
        quote(amount_a, reserve_a, reserve_b)
    }

    pub fn get_amount_out(
        amount_in: u128,
        reserve_in: u128,
        reserve_out: u128,
    ) -> Result<u128, RouterError> {
        get_amount_out(amount_in, reserve_in, reserve_out)
    }

    pub fn get_amount_in(
        amount_out: u128,
        reserve_in: u128,
        reserve_out: u128,
    ) -> Result<u128, RouterError> {
        get_amount_in(amount_out, reserve_in, reserve_out)
    }
}
