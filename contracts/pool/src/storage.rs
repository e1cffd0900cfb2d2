use soroban_sdk::{contracttype, Address, Env, U256};

use crate::errors::PoolError;

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers
const BALANCE_LIFETIME_THRESHOLD: u32 = 518400;
const BALANCE_BUMP_AMOUNT: u32 = 1036800;

#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolStorage {
    pub controller: Address,
    pub native: Address,
    pub token: Address,
    pub reserve_native: u64,
    pub reserve_paired: u128,
    pub k_last: U256,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ReentrancyGuard {
    pub locked: bool,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    PoolState,
    ReentrancyGuard,
    TotalSupply,
    Balance(Address),
    Allowance(Address, Address),
}

pub fn has_pool_state(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::PoolState)
}

pub fn get_pool_state(env: &Env) -> Option<PoolStorage> {
    env.storage().instance().get(&DataKey::PoolState)
}

/// Loads the pool state, failing with `NotInitialized` before `initialize`.
pub fn load_pool_state(env: &Env) -> Result<PoolStorage, PoolError> {
    get_pool_state(env).ok_or(PoolError::NotInitialized)
}

pub fn set_pool_state(env: &Env, state: &PoolStorage) {
    env.storage().instance().set(&DataKey::PoolState, state);
}

pub fn get_reentrancy_guard(env: &Env) -> ReentrancyGuard {
    env.storage()
        .instance()
        .get(&DataKey::ReentrancyGuard)
        .unwrap_or(ReentrancyGuard { locked: false })
}

pub fn set_reentrancy_guard(env: &Env, guard: &ReentrancyGuard) {
    env.storage().instance().set(&DataKey::ReentrancyGuard, guard);
}

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::TotalSupply).unwrap_or(0)
}

pub fn write_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub fn read_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    match env.storage().persistent().get::<DataKey, i128>(&key) {
        Some(balance) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
            balance
        }
        None => 0,
    }
}

pub fn write_balance(env: &Env, id: &Address, balance: i128) {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &balance);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

/// Reads an allowance; entries past their expiration ledger read as zero.
pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    match env.storage().temporary().get::<DataKey, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => allowance,
        Some(allowance) => AllowanceValue {
            amount: 0,
            expiration_ledger: allowance.expiration_ledger,
        },
        None => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

pub fn write_allowance(env: &Env, from: &Address, spender: &Address, allowance: &AllowanceValue) {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    env.storage().temporary().set(&key, allowance);

    if allowance.amount > 0 {
        let live_for = allowance
            .expiration_ledger
            .saturating_sub(env.ledger().sequence());
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
}

/// Extend instance storage TTL to keep contract alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
