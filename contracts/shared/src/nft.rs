use soroban_sdk::{contractclient, contracterror, Address, Env};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum NftError {
    UnknownToken = 1,
    AlreadyMinted = 2,
    NotOwner = 3,
    NotApproved = 4,
}

/// Minimal non-fungible token surface the NFT escrow relies on.
/// Token ids are unique per token contract.
#[contractclient(name = "NonFungibleTokenClient")]
pub trait NonFungibleTokenInterface {
    fn owner_of(env: Env, token_id: u128) -> Option<Address>;

    fn get_approved(env: Env, token_id: u128) -> Option<Address>;

    /// `owner` designates `spender` (or nobody) as the single approved
    /// spender for `token_id`.
    fn approve(
        env: Env,
        owner: Address,
        spender: Option<Address>,
        token_id: u128,
    ) -> Result<(), NftError>;

    /// Moves `token_id` from `from` to `to`. `spender` must be the owner or
    /// the approved spender; the approval is cleared on transfer.
    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u128,
    ) -> Result<(), NftError>;

    fn balance(env: Env, owner: Address) -> u32;
}
