use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RouterError {
    Expired = 300,
    InsufficientOutputAmount = 301,
    ExcessiveInputAmount = 302,
    ZeroAmount = 303,
    InsufficientLiquidity = 304,
    InsufficientNativeAmount = 305,
    InsufficientPairedAmount = 306,
    Overflow = 307,
}
