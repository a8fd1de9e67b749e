use soroban_sdk::{contracterror, log, Env, String};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum HtlcError {
    // validation
    AmountNotPositive = 1,
    TimelockNotInFuture = 2,
    ContractExists = 3,
    AllowanceTooLow = 4,
    TokenNotApproved = 5,
    NotTokenOwner = 6,
    // state
    ContractNotFound = 7,
    // authorization
    NotReceiver = 8,
    NotSender = 9,
    // proof
    HashlockMismatch = 10,
    // state
    AlreadyWithdrawn = 11,
    AlreadyRefunded = 12,
    TimelockExpired = 13,
    TimelockNotExpired = 14,
}

impl HtlcError {
    /// Human readable rejection reason, stable across releases.
    pub fn reason(&self) -> &'static str {
        match self {
            HtlcError::AmountNotPositive => "amount must be > 0",
            HtlcError::TimelockNotInFuture => "timelock time must be in the future",
            HtlcError::ContractExists => "contract already exists",
            HtlcError::AllowanceTooLow => "token allowance must be >= amount",
            HtlcError::TokenNotApproved => "escrow must be the approved spender for the token id",
            HtlcError::NotTokenOwner => "sender must own the token id",
            HtlcError::ContractNotFound => "contractId does not exist",
            HtlcError::NotReceiver => "withdrawable: not receiver",
            HtlcError::NotSender => "refundable: not sender",
            HtlcError::HashlockMismatch => "hashlock hash does not match",
            HtlcError::AlreadyWithdrawn => "already withdrawn",
            HtlcError::AlreadyRefunded => "already refunded",
            HtlcError::TimelockExpired => "withdrawable: timelock time must be in the future",
            HtlcError::TimelockNotExpired => "refundable: timelock not yet passed",
        }
    }
}

/// Logs the rejection reason and hands the error back for `Err(..)`.
pub fn reject(env: &Env, err: HtlcError) -> HtlcError {
    log!(env, "htlc rejected: {}", String::from_str(env, err.reason()));
    err
}
