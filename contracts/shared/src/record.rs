use soroban_sdk::{contracttype, xdr::ToXdr, Address, BytesN, Env};

use crate::hashlock::zero_preimage;

/// Strkey of the contract address with a 32 zero byte hash, used as the "no identity" value.
pub const ZERO_ADDRESS: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

pub fn zero_address(env: &Env) -> Address {
    Address::from_str(env, ZERO_ADDRESS)
}

/// What an escrow holds.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AssetRef {
    /// Ledger currency, reached through the deployment's native asset contract.
    Native,
    /// SEP-41 token contract.
    Token(Address),
    /// Non-fungible token contract and token id.
    Nft(Address, u128),
}

/// One swap leg, keyed by its contract id.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowRecord {
    pub sender: Address,
    pub receiver: Address,
    pub asset: AssetRef,
    pub amount: i128,
    pub hashlock: BytesN<32>,
    pub timelock: u64,
    pub withdrawn: bool,
    pub refunded: bool,
    pub preimage: BytesN<32>,
}

impl EscrowRecord {
    pub fn new(
        env: &Env,
        sender: Address,
        receiver: Address,
        asset: AssetRef,
        amount: i128,
        hashlock: BytesN<32>,
        timelock: u64,
    ) -> Self {
        EscrowRecord {
            sender,
            receiver,
            asset,
            amount,
            hashlock,
            timelock,
            withdrawn: false,
            refunded: false,
            preimage: zero_preimage(env),
        }
    }

    /// Record returned for an unknown contract id. Its sender is the zero identity.
    pub fn empty(env: &Env) -> Self {
        EscrowRecord {
            sender: zero_address(env),
            receiver: zero_address(env),
            asset: AssetRef::Native,
            amount: 0,
            hashlock: BytesN::from_array(env, &[0u8; 32]),
            timelock: 0,
            withdrawn: false,
            refunded: false,
            preimage: zero_preimage(env),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.withdrawn && !self.refunded
    }

    /// sha256 over the XDR of every creation parameter.
    pub fn contract_id(&self, env: &Env) -> BytesN<32> {
        contract_id(
            env,
            &self.sender,
            &self.receiver,
            &self.asset,
            self.amount,
            &self.hashlock,
            self.timelock,
        )
    }
}

pub fn contract_id(
    env: &Env,
    sender: &Address,
    receiver: &Address,
    asset: &AssetRef,
    amount: i128,
    hashlock: &BytesN<32>,
    timelock: u64,
) -> BytesN<32> {
    let preimage = (
        sender.clone(),
        receiver.clone(),
        asset.clone(),
        amount,
        hashlock.clone(),
        timelock,
    )
        .to_xdr(env);
    env.crypto().sha256(&preimage).into()
}
