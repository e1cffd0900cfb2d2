use soroban_sdk::{symbol_short, Address, Env};

pub struct PoolEvents;

impl PoolEvents {
    /// Emits a `swap` event after a successful exchange.
    ///
    /// Topics: `("swap", sender)`
    /// Data:   `(amount_native_in, amount_paired_in, amount_native_out, amount_paired_out, to)`
    pub fn swap(
        env: &Env,
        sender: &Address,
        amount_native_in: u64,
        amount_paired_in: u128,
        amount_native_out: u64,
        amount_paired_out: u128,
        to: &Address,
    ) {
        env.events().publish(
            (symbol_short!("swap"), sender),
            (
                amount_native_in,
                amount_paired_in,
                amount_native_out,
                amount_paired_out,
                to,
            ),
        );
    }

    pub fn mint(env: &Env, sender: &Address, amount_native: u64, amount_paired: u128) {
        env.events()
            .publish((symbol_short!("mint"), sender), (amount_native, amount_paired));
    }

    pub fn burn(
        env: &Env,
        sender: &Address,
        amount_native: u64,
        amount_paired: u128,
        to: &Address,
    ) {
        env.events().publish(
            (symbol_short!("burn"), sender),
            (amount_native, amount_paired, to),
        );
    }

    pub fn sync(env: &Env, reserve_native: u64, reserve_paired: u128) {
        env.events()
            .publish((symbol_short!("sync"),), (reserve_native, reserve_paired));
    }

    /// Emits a `borrow` event once a flash borrow has been fully repaid.
    ///
    /// Topics: `("borrow", to)`
    /// Data:   `(amount_native, amount_paired)`
    pub fn borrow(env: &Env, to: &Address, amount_native: u64, amount_paired: u128) {
        env.events()
            .publish((symbol_short!("borrow"), to), (amount_native, amount_paired));
    }
}
