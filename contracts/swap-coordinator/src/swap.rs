use shared::EscrowRecord;
use soroban_sdk::{log, Address, BytesN, Env};

use crate::client::{AssetVariant, HtlcClient};
use crate::error::SwapError;
use crate::secret::SecretPair;

/// Terms both parties agree on before anything is locked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwapTerms {
    pub hashlock: BytesN<32>,
    /// Timelock of the initiator's escrow (leg one).
    pub initiator_timelock: u64,
    /// Timelock of the responder's escrow (leg two).
    pub responder_timelock: u64,
}

impl SwapTerms {
    /// The responder's leg must expire at least `safety_margin` seconds
    /// before the initiator's, so a responder that learns the secret late
    /// still has time to claim leg one.
    pub fn new(
        hashlock: BytesN<32>,
        initiator_timelock: u64,
        responder_timelock: u64,
        safety_margin: u64,
    ) -> Result<Self, SwapError> {
        let ordered = responder_timelock < initiator_timelock
            && responder_timelock.saturating_add(safety_margin) <= initiator_timelock;
        if !ordered {
            return Err(SwapError::TimelockOrdering {
                initiator: initiator_timelock,
                responder: responder_timelock,
                margin: safety_margin,
            });
        }
        Ok(SwapTerms {
            hashlock,
            initiator_timelock,
            responder_timelock,
        })
    }
}

// What a party expects to find in the counterparty's escrow.
struct Expected<'e> {
    sender: &'e Address,
    receiver: &'e Address,
    hashlock: &'e BytesN<32>,
    latest_timelock: u64,
}

fn check_leg<V: AssetVariant>(
    client: &HtlcClient<'_, V>,
    contract_id: &BytesN<32>,
    expected: &Expected<'_>,
    asset: &V::Asset,
) -> Result<EscrowRecord, SwapError> {
    if !client.has_contract(contract_id) {
        return Err(SwapError::NotLocked);
    }
    let record = client.get_contract(contract_id);
    if !record.is_active() {
        return Err(SwapError::LegMismatch("escrow already settled"));
    }
    if record.sender != *expected.sender {
        return Err(SwapError::LegMismatch("unexpected sender"));
    }
    if record.receiver != *expected.receiver {
        return Err(SwapError::LegMismatch("escrow does not pay this party"));
    }
    if record.hashlock != *expected.hashlock {
        return Err(SwapError::LegMismatch("hashlock differs"));
    }
    if record.timelock > expected.latest_timelock {
        return Err(SwapError::LegMismatch("timelock later than agreed"));
    }
    if (record.asset.clone(), record.amount) != V::describe(asset) {
        return Err(SwapError::LegMismatch("asset or amount differs"));
    }
    Ok(record)
}

/// Party that generates the secret, locks leg one (asset `A`) and claims leg
/// two (asset `B`).
pub struct Initiator<'a, A: AssetVariant, B: AssetVariant> {
    offered: HtlcClient<'a, A>,
    wanted: HtlcClient<'a, B>,
    counterparty: Address,
    secret: SecretPair,
    terms: SwapTerms,
    locked: Option<BytesN<32>>,
}

impl<'a, A: AssetVariant, B: AssetVariant> Initiator<'a, A, B> {
    pub fn new(
        offered: HtlcClient<'a, A>,
        wanted: HtlcClient<'a, B>,
        counterparty: Address,
        secret: SecretPair,
        terms: SwapTerms,
    ) -> Result<Self, SwapError> {
        if secret.hashlock != terms.hashlock {
            return Err(SwapError::LegMismatch("secret does not open the agreed hashlock"));
        }
        Ok(Initiator {
            offered,
            wanted,
            counterparty,
            secret,
            terms,
            locked: None,
        })
    }

    pub fn terms(&self) -> &SwapTerms {
        &self.terms
    }

    /// Contract id of leg one once locked.
    pub fn locked(&self) -> Option<&BytesN<32>> {
        self.locked.as_ref()
    }

    /// Locks `asset` for the counterparty under the shared hashlock and the
    /// longer timelock.
    pub fn lock(&mut self, asset: &A::Asset) -> Result<BytesN<32>, SwapError> {
        let contract_id = self.offered.create(
            &self.counterparty,
            &self.terms.hashlock,
            self.terms.initiator_timelock,
            asset,
        )?;
        self.locked = Some(contract_id.clone());
        Ok(contract_id)
    }

    /// Checks the responder's escrow against the terms and withdraws it,
    /// which publishes the secret.
    pub fn claim(&self, responder_leg: &BytesN<32>, expected: &B::Asset) -> Result<(), SwapError> {
        if self.locked.is_none() {
            return Err(SwapError::NotLocked);
        }
        let expected_leg = Expected {
            sender: &self.counterparty,
            receiver: self.wanted.signer(),
            hashlock: &self.terms.hashlock,
            latest_timelock: self.terms.responder_timelock,
        };
        check_leg(&self.wanted, responder_leg, &expected_leg, expected)?;
        self.wanted.withdraw(responder_leg, &self.secret.secret)?;
        log!(self.wanted.env(), "initiator claimed: {}", responder_leg.clone());
        Ok(())
    }

    /// Takes leg one back after its timelock.
    pub fn reclaim(&self) -> Result<(), SwapError> {
        let contract_id = self.locked.as_ref().ok_or(SwapError::NotLocked)?;
        self.offered.refund(contract_id)
    }
}

/// Party that mirrors leg one with its own escrow (asset `B`) and claims leg
/// one (asset `A`) with the secret the initiator reveals.
pub struct Responder<'a, A: AssetVariant, B: AssetVariant> {
    incoming: HtlcClient<'a, A>,
    outgoing: HtlcClient<'a, B>,
    counterparty: Address,
    terms: SwapTerms,
    incoming_leg: Option<BytesN<32>>,
    outgoing_leg: Option<BytesN<32>>,
    secret: Option<BytesN<32>>,
}

impl<'a, A: AssetVariant, B: AssetVariant> Responder<'a, A, B> {
    pub fn new(
        incoming: HtlcClient<'a, A>,
        outgoing: HtlcClient<'a, B>,
        counterparty: Address,
        terms: SwapTerms,
    ) -> Self {
        Responder {
            incoming,
            outgoing,
            counterparty,
            terms,
            incoming_leg: None,
            outgoing_leg: None,
            secret: None,
        }
    }

    pub fn outgoing_leg(&self) -> Option<&BytesN<32>> {
        self.outgoing_leg.as_ref()
    }

    /// Verifies the initiator's escrow pays this party `expected` under the
    /// agreed hashlock, then locks `offer` for the initiator with the shorter
    /// timelock.
    pub fn respond(
        &mut self,
        initiator_leg: &BytesN<32>,
        expected: &A::Asset,
        offer: &B::Asset,
    ) -> Result<BytesN<32>, SwapError> {
        let expected_leg = Expected {
            sender: &self.counterparty,
            receiver: self.incoming.signer(),
            hashlock: &self.terms.hashlock,
            latest_timelock: self.terms.initiator_timelock,
        };
        let record = check_leg(&self.incoming, initiator_leg, &expected_leg, expected)?;
        if record.timelock < self.terms.initiator_timelock {
            return Err(SwapError::LegMismatch("timelock earlier than agreed"));
        }

        let contract_id = self.outgoing.create(
            &self.counterparty,
            &self.terms.hashlock,
            self.terms.responder_timelock,
            offer,
        )?;
        self.incoming_leg = Some(initiator_leg.clone());
        self.outgoing_leg = Some(contract_id.clone());
        Ok(contract_id)
    }

    /// Reads the secret the initiator disclosed when withdrawing leg two.
    pub fn learn_secret(&mut self) -> Result<BytesN<32>, SwapError> {
        let contract_id = self.outgoing_leg.as_ref().ok_or(SwapError::NotLocked)?;
        let record = self.outgoing.get_contract(contract_id);
        if !record.withdrawn {
            return Err(SwapError::SecretNotRevealed);
        }
        self.secret = Some(record.preimage.clone());
        Ok(record.preimage)
    }

    /// Withdraws leg one with the learned secret.
    pub fn claim(&self) -> Result<(), SwapError> {
        let contract_id = self.incoming_leg.as_ref().ok_or(SwapError::NotLocked)?;
        let secret = self.secret.as_ref().ok_or(SwapError::SecretNotRevealed)?;
        self.incoming.withdraw(contract_id, secret)?;
        log!(self.incoming.env(), "responder claimed: {}", contract_id.clone());
        Ok(())
    }

    /// Takes leg two back after its timelock.
    pub fn reclaim(&self) -> Result<(), SwapError> {
        let contract_id = self.outgoing_leg.as_ref().ok_or(SwapError::NotLocked)?;
        self.outgoing.refund(contract_id)
    }
}
