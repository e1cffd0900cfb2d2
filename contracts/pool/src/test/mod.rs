#![cfg(test)]

// ---------------------------------------------------------------------------
// Pool test suite
//
// Every integration test runs against real Stellar Asset Contracts for both
// assets, a live Controller for the fee-beneficiary lookup, and MockCallee
// for borrow and flash-swap callbacks.
// ---------------------------------------------------------------------------


use nativeswap_controller::{Controller, ControllerClient};
use nativeswap_mock_callee::{MockCallee, MockCalleeClient};
use soroban_sdk::{
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    Address, Bytes, BytesN, Env,
};

use crate::{gateway::zero_address, Pool, PoolClient};

/// Starting balance of each asset for `user`.
pub const USER_FUNDS: i128 = 1_000_000_000;

pub struct Setup<'a> {
    pub env: Env,
    pub user: Address,
    pub fee_to: Address,
    pub native: TokenClient<'a>,
    pub paired: TokenClient<'a>,
    pub native_admin: StellarAssetClient<'a>,
    pub paired_admin: StellarAssetClient<'a>,
    pub controller: ControllerClient<'a>,
    pub pool: PoolClient<'a>,
    pub callee: MockCalleeClient<'a>,
}

impl<'a> Setup<'a> {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let user = Address::generate(&env);
        let fee_to = Address::generate(&env);

        let native = env.register_stellar_asset_contract_v2(admin.clone()).address();
        let paired = env.register_stellar_asset_contract_v2(admin.clone()).address();
        let native_admin = StellarAssetClient::new(&env, &native);
        let paired_admin = StellarAssetClient::new(&env, &paired);
        native_admin.mint(&user, &USER_FUNDS);
        paired_admin.mint(&user, &USER_FUNDS);

        let controller = ControllerClient::new(&env, &env.register_contract(None, Controller));
        controller.initialize(&admin, &native, &BytesN::from_array(&env, &[0u8; 32]));
        controller.set_fee_to(&Some(fee_to.clone()));

        let pool = PoolClient::new(&env, &env.register_contract(None, Pool));
        pool.initialize(&controller.address, &native, &paired);

        let callee = MockCalleeClient::new(&env, &env.register_contract(None, MockCallee));

        Setup {
            native: TokenClient::new(&env, &native),
            paired: TokenClient::new(&env, &paired),
            native_admin,
            paired_admin,
            controller,
            pool,
            callee,
            user,
            fee_to,
            env,
        }
    }

    /// Sends assets from `user` to the pool without recording them.
    pub fn send_to_pool(&self, native: i128, paired: i128) {
        if native > 0 {
            self.native.transfer(&self.user, &self.pool.address, &native);
        }
        if paired > 0 {
            self.paired.transfer(&self.user, &self.pool.address, &paired);
        }
    }

    /// Deposits both assets and mints the shares to `user`.
    pub fn add_liquidity(&self, native: i128, paired: i128) -> i128 {
        self.send_to_pool(native, paired);
        self.pool.mint(&self.user, &self.user)
    }

    /// Hands `shares` back to the pool and redeems them for `user`.
    pub fn remove_liquidity(&self, shares: i128) -> (u64, u128) {
        self.pool.transfer(&self.user, &self.pool.address, &shares);
        self.pool.burn(&self.user, &self.user)
    }

    /// A pool holding exactly (1000, 1000) with only the locked minimum left.
    pub fn minimum_pool(&self) {
        let shares = self.add_liquidity(10_000, 10_000);
        self.remove_liquidity(shares);
    }

    pub fn zero_address(&self) -> Address {
        zero_address(&self.env)
    }

    pub fn bytes(&self, data: &[u8]) -> Bytes {
        Bytes::from_slice(&self.env, data)
    }
}
