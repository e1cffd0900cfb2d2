#![no_std]

use soroban_sdk::{contractclient, Address, Bytes, Env};

/// Flash-borrow receiver.
///
/// The pool sends the borrowed amounts to the receiver and then invokes the
/// callback the borrower named. `on_borrow` is the conventional name; any
/// method with this argument list can be used. The receiver MUST return
/// exactly the borrowed amounts to `pool` before the callback returns.
#[contractclient(name = "BorrowReceiverClient")]
pub trait BorrowReceiver {
    fn on_borrow(
        env: Env,
        pool: Address,
        native: Address,
        token: Address,
        amount_native: u64,
        amount_paired: u128,
        data: Bytes,
    );
}

/// Flash-swap callee.
///
/// Invoked by `swap` when the caller passes a non-empty payload, after the
/// requested outputs have been sent to the callee and before the pool checks
/// that enough input was supplied.
#[contractclient(name = "SwapCalleeClient")]
pub trait SwapCallee {
    fn on_swap(
        env: Env,
        pool: Address,
        sender: Address,
        native: Address,
        token: Address,
        amount_native_out: u64,
        amount_paired_out: u128,
        data: Bytes,
    );
}
