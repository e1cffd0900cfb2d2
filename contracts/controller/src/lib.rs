#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate std;

mod errors;
mod events;
mod storage;

#[cfg(test)]
mod test;

use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{contract, contractclient, contractimpl, Address, Bytes, BytesN, Env};

pub use errors::ControllerError;
use storage::ControllerStorage;

#[contractclient(name = "PoolClient")]
pub trait PoolInterface {
    fn initialize(env: Env, controller: Address, native: Address, token: Address);
}

#[contract]
pub struct Controller;

#[contractimpl]
impl Controller {
    pub fn initialize(
        env: Env,
        admin: Address,
        native: Address,
        pool_wasm_hash: BytesN<32>,
    ) -> Result<(), ControllerError> {
        if storage::has_controller_storage(&env) {
            return Err(ControllerError::AlreadyInitialized);
        }

        storage::set_controller_storage(
            &env,
            &ControllerStorage {
                admin,
                native,
                pool_wasm_hash,
                pool_count: 0,
                fee_to: None,
            },
        );
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Deploys and registers the pool pairing the native asset with `token`.
    pub fn create_pool(env: Env, token: Address) -> Result<Address, ControllerError> {
        let mut controller_storage =
            storage::get_controller_storage(&env).ok_or(ControllerError::NotInitialized)?;

        if token == controller_storage.native {
            return Err(ControllerError::IdenticalAssets);
        }
        if storage::get_pool(&env, token.clone()).is_some() {
            return Err(ControllerError::PoolExists);
        }

        // 1. Deploy pool
        let mut salt_data = Bytes::new(&env);
        salt_data.append(&token.clone().to_xdr(&env));
        let salt = env.crypto().sha256(&salt_data);

        let pool_address = env
            .deployer()
            .with_current_contract(salt)
            .deploy(controller_storage.pool_wasm_hash.clone());

        // 2. Initialize pool with this contract as its controller
        PoolClient::new(&env, &pool_address).initialize(
            &env.current_contract_address(),
            &controller_storage.native,
            &token,
        );

        // 3. Register
        storage::set_pool(&env, token.clone(), &pool_address);

        let pool_index = controller_storage.pool_count;
        controller_storage.pool_count += 1;
        storage::set_controller_storage(&env, &controller_storage);
        storage::extend_instance_ttl(&env);

        events::ControllerEvents::pool_created(&env, &token, &pool_address, pool_index);

        Ok(pool_address)
    }

    pub fn get_pool(env: Env, token: Address) -> Option<Address> {
        storage::get_pool(&env, token)
    }

    pub fn pool_count(env: Env) -> u32 {
        storage::get_controller_storage(&env)
            .map(|s| s.pool_count)
            .unwrap_or(0)
    }

    /// Protocol fee beneficiary. Pools query this when minting the protocol's
    /// share of fee growth.
    pub fn fee_to(env: Env) -> Option<Address> {
        storage::get_controller_storage(&env).and_then(|s| s.fee_to)
    }

    pub fn set_fee_to(env: Env, fee_to: Option<Address>) -> Result<(), ControllerError> {
        let mut controller_storage =
            storage::get_controller_storage(&env).ok_or(ControllerError::NotInitialized)?;
        controller_storage.admin.require_auth();

        controller_storage.fee_to = fee_to;
        storage::set_controller_storage(&env, &controller_storage);
        storage::extend_instance_ttl(&env);
        events::ControllerEvents::fee_to_changed(&env, &controller_storage.fee_to);
        Ok(())
    }

    pub fn admin(env: Env) -> Option<Address> {
        storage::get_controller_storage(&env).map(|s| s.admin)
    }

    pub fn set_admin(env: Env, admin: Address) -> Result<(), ControllerError> {
        let mut controller_storage =
            storage::get_controller_storage(&env).ok_or(ControllerError::NotInitialized)?;
        controller_storage.admin.require_auth();

        let previous = controller_storage.admin.clone();
        controller_storage.admin = admin;
        storage::set_controller_storage(&env, &controller_storage);
        events::ControllerEvents::admin_changed(&env, &previous, &controller_storage.admin);
        Ok(())
    }

    pub fn native(env: Env) -> Option<Address> {
        storage::get_controller_storage(&env).map(|s| s.native)
    }
}
