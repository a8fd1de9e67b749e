use soroban_sdk::{contractclient, log, Address, BytesN, Env};

use crate::error::{reject, HtlcError};
use crate::events;
use crate::hashlock::only_valid_secret;
use crate::record::{AssetRef, EscrowRecord};
use crate::storage::{
    extend_record_past, has_record, read_record, read_withdraw_policy, write_record, WithdrawPolicy,
};

/// Operations every HTLC variant exposes next to its own `new_contract`.
#[contractclient(name = "HtlcEscrowClient")]
pub trait HtlcEscrowInterface {
    /// Receiver claims the asset by disclosing the secret.
    fn withdraw(
        env: Env,
        caller: Address,
        contract_id: BytesN<32>,
        preimage: BytesN<32>,
    ) -> Result<(), HtlcError>;

    /// Sender takes the asset back once the timelock has passed.
    fn refund(env: Env, caller: Address, contract_id: BytesN<32>) -> Result<(), HtlcError>;

    /// Full record, or [`EscrowRecord::empty`] for an unknown id.
    fn get_contract(env: Env, contract_id: BytesN<32>) -> EscrowRecord;

    fn has_contract(env: Env, contract_id: BytesN<32>) -> bool;
}

// Modifier helpers

pub fn only_positive(env: &Env, amount: i128) -> Result<(), HtlcError> {
    if amount <= 0 {
        return Err(reject(env, HtlcError::AmountNotPositive));
    }
    Ok(())
}

pub fn only_future(env: &Env, timelock: u64) -> Result<(), HtlcError> {
    if timelock <= env.ledger().timestamp() {
        return Err(reject(env, HtlcError::TimelockNotInFuture));
    }
    Ok(())
}

pub fn only_receiver(env: &Env, caller: &Address, record: &EscrowRecord) -> Result<(), HtlcError> {
    if *caller != record.receiver {
        return Err(reject(env, HtlcError::NotReceiver));
    }
    Ok(())
}

pub fn only_sender(env: &Env, caller: &Address, record: &EscrowRecord) -> Result<(), HtlcError> {
    if *caller != record.sender {
        return Err(reject(env, HtlcError::NotSender));
    }
    Ok(())
}

pub fn only_active(env: &Env, record: &EscrowRecord) -> Result<(), HtlcError> {
    if record.withdrawn {
        return Err(reject(env, HtlcError::AlreadyWithdrawn));
    }
    if record.refunded {
        return Err(reject(env, HtlcError::AlreadyRefunded));
    }
    Ok(())
}

pub fn only_before(env: &Env, stop: u64) -> Result<(), HtlcError> {
    if env.ledger().timestamp() >= stop {
        return Err(reject(env, HtlcError::TimelockExpired));
    }
    Ok(())
}

pub fn only_after(env: &Env, start: u64) -> Result<(), HtlcError> {
    if env.ledger().timestamp() < start {
        return Err(reject(env, HtlcError::TimelockNotExpired));
    }
    Ok(())
}

/// Validates a creation request and derives its contract id.
///
/// Nothing is written here; the variant pulls the asset and then calls
/// [`open`]. A failure anywhere after this point aborts the invocation, so
/// the host discards the pull together with the record.
pub fn prepare(
    env: &Env,
    sender: Address,
    receiver: Address,
    asset: AssetRef,
    amount: i128,
    hashlock: BytesN<32>,
    timelock: u64,
) -> Result<(BytesN<32>, EscrowRecord), HtlcError> {
    sender.require_auth();
    only_positive(env, amount)?;
    only_future(env, timelock)?;

    let record = EscrowRecord::new(env, sender, receiver, asset, amount, hashlock, timelock);
    let contract_id = record.contract_id(env);
    if has_record(env, &contract_id) {
        return Err(reject(env, HtlcError::ContractExists));
    }
    Ok((contract_id, record))
}

/// Persists a prepared record and announces it.
pub fn open(env: &Env, contract_id: &BytesN<32>, record: &EscrowRecord) {
    write_record(env, contract_id, record);
    extend_record_past(env, contract_id, record.timelock);
    events::new_contract(env, contract_id, record);
    log!(env, "htlc created: {}", contract_id.clone());
}

pub fn load(env: &Env, contract_id: &BytesN<32>) -> Result<EscrowRecord, HtlcError> {
    read_record(env, contract_id).ok_or_else(|| reject(env, HtlcError::ContractNotFound))
}

pub fn get_contract(env: &Env, contract_id: &BytesN<32>) -> EscrowRecord {
    read_record(env, contract_id).unwrap_or_else(|| EscrowRecord::empty(env))
}

/// Marks the record withdrawn and stores the preimage. Returns the settled
/// record so the variant can release the asset to `record.receiver`.
pub fn settle_withdraw(
    env: &Env,
    caller: &Address,
    contract_id: &BytesN<32>,
    preimage: &BytesN<32>,
) -> Result<EscrowRecord, HtlcError> {
    caller.require_auth();
    let mut record = load(env, contract_id)?;
    only_receiver(env, caller, &record)?;
    only_active(env, &record)?;
    only_valid_secret(env, preimage, &record.hashlock)?;
    if read_withdraw_policy(env) == WithdrawPolicy::BeforeTimelock {
        only_before(env, record.timelock)?;
    }

    record.withdrawn = true;
    record.preimage = preimage.clone();
    write_record(env, contract_id, &record);
    events::withdrawn(env, contract_id, preimage);
    log!(env, "htlc withdrawn: {}", contract_id.clone());
    Ok(record)
}

/// Marks the record refunded. Returns the settled record so the variant can
/// return the asset to `record.sender`.
pub fn settle_refund(
    env: &Env,
    caller: &Address,
    contract_id: &BytesN<32>,
) -> Result<EscrowRecord, HtlcError> {
    caller.require_auth();
    let mut record = load(env, contract_id)?;
    only_sender(env, caller, &record)?;
    only_active(env, &record)?;
    only_after(env, record.timelock)?;

    record.refunded = true;
    write_record(env, contract_id, &record);
    events::refunded(env, contract_id);
    log!(env, "htlc refunded: {}", contract_id.clone());
    Ok(record)
}
