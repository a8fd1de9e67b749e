#![no_std]

// Native asset HTLC
// Locks ledger currency (through its Stellar Asset Contract) under a hashlock and timelock

mod nativehtlc;

// Re-export the contract
pub use nativehtlc::{NativeHtlc, NativeHtlcClient};
