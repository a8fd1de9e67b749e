#![no_std]

// Fungible token HTLC
// Pulls a pre-approved SEP-41 token amount into escrow under a hashlock and timelock

mod tokenhtlc;

// Re-export the contract
pub use tokenhtlc::{TokenHtlc, TokenHtlcClient};
