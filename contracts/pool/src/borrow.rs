use soroban_sdk::{Address, Bytes, Env, Symbol};

use crate::{
    errors::PoolError,
    events::PoolEvents,
    gateway, reentrancy, reserves,
    storage::{extend_instance_ttl, load_pool_state},
};

/// Lends both assets to `to` for the duration of one callback.
///
/// # Flow
/// 1. **Recipient check**: not the zero account, the pool, or either asset
///    contract.
/// 2. **Snapshot**: record both custodial balances.
/// 3. **Transfer**: send `amount_paired` and `amount_native` to `to`.
/// 4. **Callback**: invoke `to.<callback>(pool, native, token,
///    amount_native, amount_paired, data)`.
/// 5. **Repayment check**: both balances must equal the snapshot exactly.
///
/// Reserves and shares are never touched; the net balance change is zero.
///
/// # Errors
/// | Error                  | Condition                                      |
/// |------------------------|------------------------------------------------|
/// | `InvalidRecipient`     | `to` is the zero account, the pool, or an asset |
/// | `Locked`               | Another engine call is in progress             |
/// | `TransferFailed`       | The pool cannot send the requested amounts     |
/// | `CallbackFailed`       | The callback is missing or reverts             |
/// | `InsufficientDebtPaid` | Post-callback balances differ from the snapshot |
pub fn execute_borrow(
    env: &Env,
    amount_native: u64,
    amount_paired: u128,
    to: &Address,
    callback: &Symbol,
    data: &Bytes,
) -> Result<(), PoolError> {
    let state = load_pool_state(env)?;

    if *to == gateway::zero_address(env)
        || *to == env.current_contract_address()
        || *to == state.token
        || *to == state.native
    {
        return Err(PoolError::InvalidRecipient);
    }

    reentrancy::acquire(env)?;

    let (balance_native, balance_paired) = reserves::measure(env, &state)?;

    gateway::transfer_paired(env, &state.token, to, amount_paired)?;
    gateway::transfer_native(env, &state.native, to, amount_native)?;

    gateway::invoke_borrow_callback(
        env,
        to,
        callback,
        &state,
        amount_native,
        amount_paired,
        data,
    )?;

    let (repaid_native, repaid_paired) = reserves::measure(env, &state)?;
    if repaid_native != balance_native || repaid_paired != balance_paired {
        return Err(PoolError::InsufficientDebtPaid);
    }

    extend_instance_ttl(env);
    PoolEvents::borrow(env, to, amount_native, amount_paired);

    reentrancy::release(env);
    Ok(())
}
