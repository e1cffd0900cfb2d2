use soroban_sdk::{contracttype, Address, BytesN, Env};

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers
const POOL_LIFETIME_THRESHOLD: u32 = 518400;
const POOL_BUMP_AMOUNT: u32 = 1036800;

#[contracttype]
#[derive(Clone, Debug)]
pub struct ControllerStorage {
    pub admin: Address,
    pub native: Address,
    pub pool_wasm_hash: BytesN<32>,
    pub pool_count: u32,
    pub fee_to: Option<Address>,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Controller,
    Pool(Address),
}

pub fn get_controller_storage(env: &Env) -> Option<ControllerStorage> {
    env.storage().instance().get(&DataKey::Controller)
}

pub fn set_controller_storage(env: &Env, storage: &ControllerStorage) {
    env.storage().instance().set(&DataKey::Controller, storage);
}

pub fn has_controller_storage(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Controller)
}

pub fn get_pool(env: &Env, token: Address) -> Option<Address> {
    let key = DataKey::Pool(token);
    let pool = env.storage().persistent().get(&key);
    if pool.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, POOL_LIFETIME_THRESHOLD, POOL_BUMP_AMOUNT);
    }
    pool
}

pub fn set_pool(env: &Env, token: Address, pool: &Address) {
    let key = DataKey::Pool(token);
    env.storage().persistent().set(&key, pool);
    env.storage()
        .persistent()
        .extend_ttl(&key, POOL_LIFETIME_THRESHOLD, POOL_BUMP_AMOUNT);
}

/// Extend instance storage TTL to keep contract alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
