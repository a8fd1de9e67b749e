// Swap coordination
// Off-chain drivers for two HTLC legs sharing one hashlock: the initiator
// locks first and claims by revealing the secret, the responder mirrors the
// lock with a shorter timelock and claims with the secret it learns.

pub mod client;
pub mod config;
pub mod error;
pub mod secret;
pub mod swap;

pub use client::{AssetVariant, Fungible, FungibleAsset, HtlcClient, Native, NftAsset, NonFungible};
pub use config::{ClientConfig, NetworkConfig};
pub use error::SwapError;
pub use secret::{contract_id_hex, SecretPair};
pub use swap::{Initiator, Responder, SwapTerms};
