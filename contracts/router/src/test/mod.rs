#![cfg(test)]

use crate::{Router, RouterClient, RouterError, Side};
use nativeswap_controller::{Controller, ControllerClient};
use nativeswap_pool::{Pool, PoolClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{StellarAssetClient, TokenClient},
    Address, BytesN, Env,
};

const DEADLINE: u64 = 1_000;

struct Setup<'a> {
    env: Env,
    user: Address,
    native: TokenClient<'a>,
    paired: TokenClient<'a>,
    pool: PoolClient<'a>,
    router: RouterClient<'a>,
}

impl<'a> Setup<'a> {
    fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let user = Address::generate(&env);

        let native = env.register_stellar_asset_contract_v2(admin.clone()).address();
        let paired = env.register_stellar_asset_contract_v2(admin.clone()).address();
        StellarAssetClient::new(&env, &native).mint(&user, &1_000_000_000);
        StellarAssetClient::new(&env, &paired).mint(&user, &1_000_000_000);

        let controller_id = env.register_contract(None, Controller);
        let controller = ControllerClient::new(&env, &controller_id);
        controller.initialize(&admin, &native, &BytesN::from_array(&env, &[0u8; 32]));
        controller.set_fee_to(&Some(Address::generate(&env)));

        let pool = PoolClient::new(&env, &env.register_contract(None, Pool));
        pool.initialize(&controller_id, &native, &paired);

        let router = RouterClient::new(&env, &env.register_contract(None, Router));

        Setup {
            native: TokenClient::new(&env, &native),
            paired: TokenClient::new(&env, &paired),
            env,
            user,
            pool,
            router,
        }
    }

    /// Seeds the pool with 10M native and 40M paired.
    fn seed(&self) -> i128 {
        let (_, _, shares) = self.router.add_liquidity(
            &self.pool.address,
            &self.user,
            &10_000_000,
            &40_000_000,
            &0,
            &0,
            &self.user,
            &DEADLINE,
        );
        shares
    }
}

// ---------- Liquidity ----------

#[test]
fn test_add_liquidity_first_deposit() {
    let s = Setup::new();

    let result = s.router.add_liquidity(
        &s.pool.address,
        &s.user,
        &10_000_000,
        &40_000_000,
        &0,
        &0,
        &s.user,
        &DEADLINE,
    );

    // sqrt(10M * 40M) = 20M, less the locked minimum.
    assert_eq!(result, (10_000_000, 40_000_000, 19_999_000));
    assert_eq!(s.pool.balance(&s.user), 19_999_000);
    assert_eq!(s.pool.get_reserves(), (10_000_000, 40_000_000));
}

#[test]
fn test_add_liquidity_uses_optimal_paired_amount() {
    let s = Setup::new();
    s.seed();

    let result = s.router.add_liquidity(
        &s.pool.address,
        &s.user,
        &1_000_000,
        &5_000_000,
        &0,
        &0,
        &s.user,
        &DEADLINE,
    );

    assert_eq!(result, (1_000_000, 4_000_000, 2_000_000));
    assert_eq!(s.pool.get_reserves(), (11_000_000, 44_000_000));
}

#[test]
fn test_add_liquidity_uses_optimal_native_amount() {
    let s = Setup::new();
    s.seed();

    let result = s.router.add_liquidity(
        &s.pool.address,
        &s.user,
        &2_000_000,
        &4_000_000,
        &0,
        &0,
        &s.user,
        &DEADLINE,
    );

    assert_eq!(result, (1_000_000, 4_000_000, 2_000_000));
}

#[test]
fn test_add_liquidity_below_paired_min_fails() {
    let s = Setup::new();
    s.seed();

    let result = s.router.try_add_liquidity(
        &s.pool.address,
        &s.user,
        &1_000_000,
        &5_000_000,
        &0,
        &4_500_000,
        &s.user,
        &DEADLINE,
    );
    assert_eq!(result, Err(Ok(RouterError::InsufficientPairedAmount)));
}

#[test]
fn test_add_liquidity_below_native_min_fails() {
    let s = Setup::new();
    s.seed();

    let result = s.router.try_add_liquidity(
        &s.pool.address,
        &s.user,
        &2_000_000,
        &4_000_000,
        &1_500_000,
        &0,
        &s.user,
        &DEADLINE,
    );
    assert_eq!(result, Err(Ok(RouterError::InsufficientNativeAmount)));
}

#[test]
fn test_add_liquidity_zero_amount_fails() {
    let s = Setup::new();

    let result = s.router.try_add_liquidity(
        &s.pool.address,
        &s.user,
        &0,
        &40_000_000,
        &0,
        &0,
        &s.user,
        &DEADLINE,
    );
    assert_eq!(result, Err(Ok(RouterError::ZeroAmount)));
}

#[test]
fn test_remove_liquidity_success() {
    let s = Setup::new();
    s.seed();
    let native_before = s.native.balance(&s.user);
    let paired_before = s.paired.balance(&s.user);

    let result = s.router.remove_liquidity(
        &s.pool.address,
        &s.user,
        &1_000_000,
        &0,
        &0,
        &s.user,
        &DEADLINE,
    );

    // 1M of 20M shares redeems a twentieth of each reserve.
    assert_eq!(result, (500_000, 2_000_000));
    assert_eq!(s.native.balance(&s.user), native_before + 500_000);
    assert_eq!(s.paired.balance(&s.user), paired_before + 2_000_000);
    assert_eq!(s.pool.balance(&s.user), 18_999_000);
    assert_eq!(s.pool.get_reserves(), (9_500_000, 38_000_000));
}

#[test]
fn test_remove_liquidity_below_min_rolls_back() {
    let s = Setup::new();
    let shares = s.seed();

    let result = s.router.try_remove_liquidity(
        &s.pool.address,
        &s.user,
        &1_000_000,
        &500_001,
        &0,
        &s.user,
        &DEADLINE,
    );
    assert_eq!(result, Err(Ok(RouterError::InsufficientNativeAmount)));
    assert_eq!(s.pool.balance(&s.user), shares);
    assert_eq!(s.pool.get_reserves(), (10_000_000, 40_000_000));
}

#[test]
fn test_remove_liquidity_zero_amount_fails() {
    let s = Setup::new();
    s.seed();

    let result = s.router.try_remove_liquidity(
        &s.pool.address,
        &s.user,
        &0,
        &0,
        &0,
        &s.user,
        &DEADLINE,
    );
    assert_eq!(result, Err(Ok(RouterError::ZeroAmount)));
}

#[test]
fn test_remove_liquidity_expired_deadline() {
    let s = Setup::new();
    s.seed();
    s.env.ledger().set_timestamp(2_000);

    let result = s.router.try_remove_liquidity(
        &s.pool.address,
        &s.user,
        &1_000_000,
        &0,
        &0,
        &s.user,
        &DEADLINE,
    );
    assert_eq!(result, Err(Ok(RouterError::Expired)));
}

// ---------- Swaps ----------

#[test]
fn test_swap_exact_in_native_for_paired() {
    let s = Setup::new();
    s.seed();
    let to = Address::generate(&s.env);

    let out = s.router.swap_exact_in(
        &s.pool.address,
        &s.user,
        &Side::Native,
        &100_000,
        &0,
        &to,
        &DEADLINE,
    );

    assert_eq!(out, 394_863);
    assert_eq!(s.paired.balance(&to), 394_863);
    assert_eq!(s.pool.get_reserves(), (10_100_000, 40_000_000 - 394_863));
}

#[test]
fn test_swap_exact_in_slippage_fails() {
    let s = Setup::new();
    s.seed();

    let result = s.router.try_swap_exact_in(
        &s.pool.address,
        &s.user,
        &Side::Native,
        &100_000,
        &394_864,
        &s.user,
        &DEADLINE,
    );
    assert_eq!(result, Err(Ok(RouterError::InsufficientOutputAmount)));
    assert_eq!(s.pool.get_reserves(), (10_000_000, 40_000_000));
}

#[test]
fn test_swap_exact_in_expired_deadline() {
    let s = Setup::new();
    s.seed();
    s.env.ledger().set_timestamp(DEADLINE + 1);

    let result = s.router.try_swap_exact_in(
        &s.pool.address,
        &s.user,
        &Side::Native,
        &100_000,
        &0,
        &s.user,
        &DEADLINE,
    );
    assert_eq!(result, Err(Ok(RouterError::Expired)));
}

#[test]
fn test_swap_exact_in_zero_amount_fails() {
    let s = Setup::new();
    s.seed();

    let result = s.router.try_swap_exact_in(
        &s.pool.address,
        &s.user,
        &Side::Paired,
        &0,
        &0,
        &s.user,
        &DEADLINE,
    );
    assert_eq!(result, Err(Ok(RouterError::ZeroAmount)));
}

#[test]
fn test_swap_exact_out_paired_for_native() {
    let s = Setup::new();
    s.seed();
    let to = Address::generate(&s.env);
    let paired_before = s.paired.balance(&s.user);

    let paid = s.router.swap_exact_out(
        &s.pool.address,
        &s.user,
        &Side::Paired,
        &50_000,
        &1_000_000,
        &to,
        &DEADLINE,
    );

    assert_eq!(paid, 201_610);
    assert_eq!(s.native.balance(&to), 50_000);
    assert_eq!(s.paired.balance(&s.user), paired_before - 201_610);
    assert_eq!(s.pool.get_reserves(), (9_950_000, 40_201_610));
}

#[test]
fn test_swap_exact_out_excessive_input_fails() {
    let s = Setup::new();
    s.seed();

    let result = s.router.try_swap_exact_out(
        &s.pool.address,
        &s.user,
        &Side::Paired,
        &50_000,
        &201_609,
        &s.user,
        &DEADLINE,
    );
    assert_eq!(result, Err(Ok(RouterError::ExcessiveInputAmount)));
}

#[test]
fn test_swap_on_empty_pool_fails() {
    let s = Setup::new();

    let result = s.router.try_swap_exact_in(
        &s.pool.address,
        &s.user,
        &Side::Native,
        &100_000,
        &0,
        &s.user,
        &DEADLINE,
    );
    assert_eq!(result, Err(Ok(RouterError::InsufficientLiquidity)));
}

// ---------- Pricing helpers ----------

#[test]
fn test_quote() {
    let s = Setup::new();
    assert_eq!(s.router.quote(&100, &1_000, &2_000), 200);
    assert_eq!(
        s.router.try_quote(&100, &0, &2_000),
        Err(Ok(RouterError::InsufficientLiquidity))
    );
}

#[test]
fn test_get_amount_out_keeps_fee() {
    let s = Setup::new();
    // Without the fee the output would be 990.
    assert_eq!(s.router.get_amount_out(&1_000, &100_000, &100_000), 987);
}

#[test]
fn test_get_amount_in_covers_amount_out() {
    let s = Setup::new();
    assert_eq!(s.router.get_amount_in(&987, &100_000, &100_000), 1_000);
    assert_eq!(
        s.router.try_get_amount_in(&100_000, &100_000, &100_000),
        Err(Ok(RouterError::InsufficientLiquidity))
    );
}

#[test]
fn test_get_amount_out_overflow() {
    let s = Setup::new();
    assert_eq!(
        s.router.try_get_amount_out(&u128::MAX, &1, &1),
        Err(Ok(RouterError::Overflow))
    );
}
