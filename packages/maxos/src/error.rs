use soroban_sdk::contracterror;

pub type MaxosResult<T = ()> = Result<T, ErrorCode>;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    // Authorization
    NotAuthorized = 1,
    ManagerNotSet = 2,
    BankerNotSet = 3,
    TreasuryNotSet = 4,

    // State
    AlreadyInitialized = 10,
    NotInitialized = 11,
    CircuitBreakerAlreadyOn = 12,
    CircuitBreakerAlreadyOff = 13,
    BankerSuspended = 14,
    RedemptionNotFound = 15,
    RedemptionNotReleased = 16,
    RedemptionAlreadyFulfilled = 17,

    // Validation
    InvalidAmount = 20,
    InsufficientBalance = 21,
    InsufficientShares = 22,
    InvalidBps = 23,
    DuplicateStrategy = 24,
    StrategyNotFound = 25,
    MismatchedBatchLength = 26,
    InvalidAllocationTotal = 27,
    TreasuryNotListed = 28,
    InvalidTolerance = 29,
    TokenNotAllowed = 30,
    StrategyNotEmpty = 31,
    TokenAlreadyAllowed = 32,

    // External adapters
    DepositLimitExceeded = 40,
    VaultShareMismatch = 41,
    InvalidPricePerShare = 42,

    MathOverflow = 50,
}
