use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    AlreadyInitialized = 400,
    NotInitialized = 401,
    Unauthorized = 402,
    InsufficientBalance = 403,
    InsufficientAllowance = 404,
    InvalidAmount = 405,
    InvalidExpiration = 406,
    Overflow = 407,
    Paused = 408,
    NotPaused = 409,
    InvalidDistribution = 410,
    InvalidTaxRate = 411,
}
