use soroban_sdk::{symbol_short, Address, Env};

pub struct ControllerEvents;

impl ControllerEvents {
    /// Topics: `("pool_new", token)`
    /// Data:   `(pool, pool_index)`
    pub fn pool_created(env: &Env, token: &Address, pool: &Address, pool_index: u32) {
        env.events()
            .publish((symbol_short!("pool_new"), token), (pool, pool_index));
    }

    pub fn fee_to_changed(env: &Env, fee_to: &Option<Address>) {
        env.events().publish((symbol_short!("fee_to"),), fee_to.clone());
    }

    pub fn admin_changed(env: &Env, previous: &Address, admin: &Address) {
        env.events()
            .publish((symbol_short!("admin"), previous), admin);
    }
}
