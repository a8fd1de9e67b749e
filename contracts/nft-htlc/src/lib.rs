#![no_std]

// Non-fungible token HTLC
// Holds one approved token id under a hashlock and timelock

mod nfthtlc;

// Re-export the contract
pub use nfthtlc::{NftHtlc, NftHtlcClient};
