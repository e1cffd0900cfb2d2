#![cfg(test)]

use soroban_sdk::Env;

mod controller_tests {
    use super::*;
    use crate::{Controller, ControllerClient, ControllerError};
    use soroban_sdk::{
        testutils::{Address as _, Events as _},
        Address, BytesN,
    };

    fn setup_env<'a>() -> (Env, ControllerClient<'a>, Address, Address) {
        let env = Env::default();
        let controller_address = env.register_contract(None, Controller);
        let client = ControllerClient::new(&env, &controller_address);

        let admin = Address::generate(&env);
        let native = Address::generate(&env);
        let pool_wasm_hash = BytesN::from_array(&env, &[7u8; 32]);

        client.initialize(&admin, &native, &pool_wasm_hash);

        (env, client, admin, native)
    }

    // ---------- Happy path ----------

    #[test]
    fn test_initialize_happy_path() {
        let (_env, client, admin, native) = setup_env();

        assert_eq!(client.admin(), Some(admin));
        assert_eq!(client.native(), Some(native));
        assert!(client.fee_to().is_none());
        assert_eq!(client.pool_count(), 0);
    }

    // ---------- Double-init guard ----------

    #[test]
    fn test_initialize_double_init_fails() {
        let (env, client, _, _) = setup_env();

        let admin = Address::generate(&env);
        let native = Address::generate(&env);
        let pool_wasm_hash = BytesN::from_array(&env, &[1u8; 32]);

        let result = client.try_initialize(&admin, &native, &pool_wasm_hash);
        assert_eq!(result, Err(Ok(ControllerError::AlreadyInitialized)));
    }

    // ---------- Fee beneficiary ----------

    #[test]
    fn test_set_fee_to_by_admin() {
        let (env, client, _, _) = setup_env();
        env.mock_all_auths();

        let fee_to = Address::generate(&env);
        client.set_fee_to(&Some(fee_to.clone()));
        assert_eq!(client.fee_to(), Some(fee_to));

        client.set_fee_to(&None);
        assert!(client.fee_to().is_none());
    }

    #[test]
    fn test_set_fee_to_requires_admin_auth() {
        let (env, client, _, _) = setup_env();

        let fee_to = Address::generate(&env);
        let result = client.try_set_fee_to(&Some(fee_to));
        assert!(result.is_err(), "set_fee_to without admin auth must fail");
        assert!(client.fee_to().is_none());
    }

    #[test]
    fn test_set_fee_to_emits_event() {
        let (env, client, _, _) = setup_env();
        env.mock_all_auths();

        client.set_fee_to(&Some(Address::generate(&env)));
        assert_eq!(env.events().all().len(), 1);
    }

    #[test]
    fn test_set_fee_to_uninitialized_fails() {
        let env = Env::default();
        env.mock_all_auths();
        let client = ControllerClient::new(&env, &env.register_contract(None, Controller));

        let result = client.try_set_fee_to(&None);
        assert_eq!(result, Err(Ok(ControllerError::NotInitialized)));
    }

    #[test]
    fn test_fee_to_uninitialized_is_none() {
        let env = Env::default();
        let client = ControllerClient::new(&env, &env.register_contract(None, Controller));
        assert!(client.fee_to().is_none());
    }

    // ---------- Admin ----------

    #[test]
    fn test_set_admin_transfers_control() {
        let (env, client, _, _) = setup_env();
        env.mock_all_auths();

        let new_admin = Address::generate(&env);
        client.set_admin(&new_admin);
        assert_eq!(client.admin(), Some(new_admin));
    }

    // ---------- Pool registry ----------

    #[test]
    fn test_create_pool_uninitialized_fails() {
        let env = Env::default();
        let client = ControllerClient::new(&env, &env.register_contract(None, Controller));

        let token = Address::generate(&env);
        let result = client.try_create_pool(&token);
        assert_eq!(result, Err(Ok(ControllerError::NotInitialized)));
    }

    #[test]
    fn test_create_pool_with_native_asset_fails() {
        let (_env, client, _, native) = setup_env();

        let result = client.try_create_pool(&native);
        assert_eq!(result, Err(Ok(ControllerError::IdenticalAssets)));
        assert_eq!(client.pool_count(), 0);
    }

    #[test]
    fn test_get_pool_unknown_token_is_none() {
        let (env, client, _, _) = setup_env();
        assert!(client.get_pool(&Address::generate(&env)).is_none());
    }
}
