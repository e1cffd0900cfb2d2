use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ControllerError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    PoolExists = 3,
    IdenticalAssets = 4,
}
