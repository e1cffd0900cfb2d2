#![no_std]

use nativeswap_callee_interface::{BorrowReceiver, SwapCallee};
use soroban_sdk::{
    contract, contractclient, contractimpl, contracttype, token::TokenClient, Address, Bytes,
    Env,
};

#[contractclient(name = "PoolClient")]
pub trait PoolInterface {
    fn sync(env: Env);
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Repayment,
}

/// Amounts the callee sends back to the pool from `on_swap`.
#[contracttype]
#[derive(Clone, Debug)]
pub struct Repayment {
    pub native: i128,
    pub paired: i128,
}

#[contract]
pub struct MockCallee;

#[contractimpl]
impl MockCallee {
    pub fn set_repayment(env: Env, native: i128, paired: i128) {
        env.storage()
            .instance()
            .set(&DataKey::Repayment, &Repayment { native, paired });
    }

    /// Alternative borrow callback name: always repays one unit short.
    pub fn repay_short(
        env: Env,
        pool: Address,
        native: Address,
        token: Address,
        amount_native: u64,
        amount_paired: u128,
        _data: Bytes,
    ) {
        let me = env.current_contract_address();
        if amount_native > 0 {
            TokenClient::new(&env, &native).transfer(&me, &pool, &(amount_native as i128 - 1));
        }
        if amount_paired > 0 {
            TokenClient::new(&env, &token).transfer(&me, &pool, &(amount_paired as i128 - 1));
        }
    }
}

#[contractimpl]
impl BorrowReceiver for MockCallee {
    /// `data` selects the behaviour:
    /// - `repay`   returns exactly what was borrowed
    /// - `reenter` calls back into the pool before repaying
    /// - anything else keeps the funds
    fn on_borrow(
        env: Env,
        pool: Address,
        native: Address,
        token: Address,
        amount_native: u64,
        amount_paired: u128,
        data: Bytes,
    ) {
        let repay_bytes = Bytes::from_slice(&env, b"repay");
        let reenter_bytes = Bytes::from_slice(&env, b"reenter");

        if data == reenter_bytes {
            PoolClient::new(&env, &pool).sync();
        } else if data != repay_bytes {
            return;
        }

        let me = env.current_contract_address();
        if amount_native > 0 {
            TokenClient::new(&env, &native).transfer(&me, &pool, &(amount_native as i128));
        }
        if amount_paired > 0 {
            TokenClient::new(&env, &token).transfer(&me, &pool, &(amount_paired as i128));
        }
    }
}

#[contractimpl]
impl SwapCallee for MockCallee {
    /// Pays the configured repayment back to the pool.
    fn on_swap(
        env: Env,
        pool: Address,
        _sender: Address,
        native: Address,
        token: Address,
        _amount_native_out: u64,
        _amount_paired_out: u128,
        _data: Bytes,
    ) {
        let repayment: Repayment = env
            .storage()
            .instance()
            .get(&DataKey::Repayment)
            .unwrap_or(Repayment {
                native: 0,
                paired: 0,
            });

        let me = env.current_contract_address();
        if repayment.native > 0 {
            TokenClient::new(&env, &native).transfer(&me, &pool, &repayment.native);
        }
        if repayment.paired > 0 {
            TokenClient::new(&env, &token).transfer(&me, &pool, &repayment.paired);
        }
    }
}
