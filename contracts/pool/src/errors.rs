use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    AlreadyInitialized = 100,
    NotInitialized = 101,
    InsufficientLiquidity = 102,
    InsufficientInputAmount = 103,
    InvalidOutputAmount = 104,
    InvalidK = 105,
    Locked = 106,
    InvalidRecipient = 107,
    Overflow = 108,
    InsufficientLiquidityMinted = 109,
    InsufficientLiquidityBurned = 110,
    InvalidFeeToAddress = 111,
    CallbackFailed = 112,
    InsufficientDebtPaid = 113,
    InvalidBalance = 114,
    TransferFailed = 115,
    IdenticalAssets = 116,
    NegativeAmount = 117,
    InsufficientBalance = 118,
    InsufficientAllowance = 119,
    InvalidExpiration = 120,
}
