#![no_std]

// Shared library for the hashed timelock contracts
// Contains the escrow record, hashlock, error taxonomy, storage and the common HTLC state machine

pub mod baseescrow;
pub mod error;
pub mod events;
pub mod hashlock;
pub mod nft;
pub mod record;
pub mod storage;

// Re-export commonly used types for easier imports
pub use baseescrow::{
    get_contract, load, only_active, only_after, only_before, only_future, only_positive,
    only_receiver, only_sender, open, prepare, settle_refund, settle_withdraw, HtlcEscrowClient,
    HtlcEscrowInterface,
};
pub use error::{reject, HtlcError};
pub use events::{NewContractEvent, RefundEvent, WithdrawEvent};
pub use hashlock::{hash_secret, is_valid_preimage, only_valid_secret, zero_preimage};
pub use nft::{NftError, NonFungibleTokenClient, NonFungibleTokenInterface};
pub use record::{contract_id, zero_address, AssetRef, EscrowRecord, ZERO_ADDRESS};
pub use storage::{bump_instance, read_withdraw_policy, write_withdraw_policy, WithdrawPolicy};

#[cfg(test)]
mod test;
