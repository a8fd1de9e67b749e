use core::fmt::Debug;
use core::marker::PhantomData;

use native_htlc::NativeHtlcClient;
use nft_htlc::NftHtlcClient;
use shared::{AssetRef, EscrowRecord, HtlcError, HtlcEscrowClient};
use soroban_sdk::{log, Address, BytesN, Env};
use token_htlc::TokenHtlcClient;

use crate::config::{ClientConfig, NetworkConfig};
use crate::error::SwapError;

/// One HTLC variant: what it locks and how its `new_contract` is called.
pub trait AssetVariant {
    type Asset: Clone + Debug;

    fn create(
        env: &Env,
        contract: &Address,
        sender: &Address,
        receiver: &Address,
        hashlock: &BytesN<32>,
        timelock: u64,
        asset: &Self::Asset,
    ) -> Result<BytesN<32>, SwapError>;

    /// The `(asset, amount)` pair a record of this variant stores.
    fn describe(asset: &Self::Asset) -> (AssetRef, i128);
}

/// Ledger currency, locked by amount.
pub struct Native;

pub struct Fungible;

pub struct NonFungible;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FungibleAsset {
    pub token: Address,
    pub amount: i128,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NftAsset {
    pub token: Address,
    pub token_id: u128,
}

impl AssetVariant for Native {
    type Asset = i128;

    fn create(
        env: &Env,
        contract: &Address,
        sender: &Address,
        receiver: &Address,
        hashlock: &BytesN<32>,
        timelock: u64,
        amount: &i128,
    ) -> Result<BytesN<32>, SwapError> {
        settle(NativeHtlcClient::new(env, contract).try_new_contract(
            sender, receiver, hashlock, &timelock, amount,
        ))
    }

    fn describe(amount: &i128) -> (AssetRef, i128) {
        (AssetRef::Native, *amount)
    }
}

impl AssetVariant for Fungible {
    type Asset = FungibleAsset;

    fn create(
        env: &Env,
        contract: &Address,
        sender: &Address,
        receiver: &Address,
        hashlock: &BytesN<32>,
        timelock: u64,
        asset: &FungibleAsset,
    ) -> Result<BytesN<32>, SwapError> {
        settle(TokenHtlcClient::new(env, contract).try_new_contract(
            sender,
            receiver,
            hashlock,
            &timelock,
            &asset.token,
            &asset.amount,
        ))
    }

    fn describe(asset: &FungibleAsset) -> (AssetRef, i128) {
        (AssetRef::Token(asset.token.clone()), asset.amount)
    }
}

impl AssetVariant for NonFungible {
    type Asset = NftAsset;

    fn create(
        env: &Env,
        contract: &Address,
        sender: &Address,
        receiver: &Address,
        hashlock: &BytesN<32>,
        timelock: u64,
        asset: &NftAsset,
    ) -> Result<BytesN<32>, SwapError> {
        settle(NftHtlcClient::new(env, contract).try_new_contract(
            sender,
            receiver,
            hashlock,
            &timelock,
            &asset.token,
            &asset.token_id,
        ))
    }

    fn describe(asset: &NftAsset) -> (AssetRef, i128) {
        (AssetRef::Nft(asset.token.clone(), asset.token_id), 1)
    }
}

/// Client for one escrow deployment of variant `V`, acting as the configured signer.
///
/// `withdraw`, `refund` and the reads go through the shared escrow interface,
/// so they are identical across variants; only `create` dispatches to `V`.
pub struct HtlcClient<'a, V: AssetVariant> {
    env: &'a Env,
    config: ClientConfig,
    escrow: HtlcEscrowClient<'a>,
    _variant: PhantomData<V>,
}

impl<'a, V: AssetVariant> HtlcClient<'a, V> {
    pub fn new(env: &'a Env, config: ClientConfig) -> Self {
        let escrow = HtlcEscrowClient::new(env, &config.contract);
        HtlcClient {
            env,
            config,
            escrow,
            _variant: PhantomData,
        }
    }

    pub fn signer(&self) -> &Address {
        &self.config.signer
    }

    pub fn contract(&self) -> &Address {
        &self.config.contract
    }

    pub fn network(&self) -> &NetworkConfig {
        &self.config.network
    }

    pub fn env(&self) -> &'a Env {
        self.env
    }

    /// Locks `asset` for `receiver` with the signer as sender.
    pub fn create(
        &self,
        receiver: &Address,
        hashlock: &BytesN<32>,
        timelock: u64,
        asset: &V::Asset,
    ) -> Result<BytesN<32>, SwapError> {
        let contract_id = V::create(
            self.env,
            &self.config.contract,
            &self.config.signer,
            receiver,
            hashlock,
            timelock,
            asset,
        )?;
        log!(self.env, "swap leg locked: {}", contract_id.clone());
        Ok(contract_id)
    }

    pub fn withdraw(
        &self,
        contract_id: &BytesN<32>,
        preimage: &BytesN<32>,
    ) -> Result<(), SwapError> {
        settle(
            self.escrow
                .try_withdraw(&self.config.signer, contract_id, preimage),
        )
    }

    pub fn refund(&self, contract_id: &BytesN<32>) -> Result<(), SwapError> {
        settle(self.escrow.try_refund(&self.config.signer, contract_id))
    }

    pub fn get_contract(&self, contract_id: &BytesN<32>) -> EscrowRecord {
        self.escrow.get_contract(contract_id)
    }

    pub fn has_contract(&self, contract_id: &BytesN<32>) -> bool {
        self.escrow.has_contract(contract_id)
    }
}

// Flattens a `try_*` invocation result: escrow errors keep their code,
// anything else (conversion, token contract traps) becomes `Invocation`.
fn settle<T, C, I>(result: Result<Result<T, C>, Result<HtlcError, I>>) -> Result<T, SwapError>
where
    C: Debug,
    I: Debug,
{
    match result {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(conversion)) => Err(SwapError::Invocation(format!("{:?}", conversion))),
        Err(Ok(err)) => Err(SwapError::Rejected(err)),
        Err(Err(invoke)) => Err(SwapError::Invocation(format!("{:?}", invoke))),
    }
}
