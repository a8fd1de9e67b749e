#![no_std]

// Reference non-fungible token
// Minimal collectible implementing the NFT interface the NFT escrow pulls from

mod collectible;

pub use collectible::{Collectible, CollectibleClient};
