use soroban_sdk::{contracttype, BytesN, Env};

use crate::record::EscrowRecord;

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const RECORD_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const RECORD_LIFETIME_THRESHOLD: u32 = RECORD_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const LEDGER_CLOSE_SECONDS: u64 = 5;

// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Record(BytesN<32>),
    WithdrawPolicy,
}

/// Whether `withdraw` is still allowed once ledger time reaches the timelock.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum WithdrawPolicy {
    /// Withdraw only while `ledger time < timelock`.
    BeforeTimelock = 0,
    /// Withdraw any time the record is still active, even past the timelock.
    UntilSettled = 1,
}

pub fn has_record(env: &Env, contract_id: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Record(contract_id.clone()))
}

pub fn read_record(env: &Env, contract_id: &BytesN<32>) -> Option<EscrowRecord> {
    let key = DataKey::Record(contract_id.clone());
    let record = env.storage().persistent().get(&key);
    if record.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
    }
    record
}

pub fn write_record(env: &Env, contract_id: &BytesN<32>, record: &EscrowRecord) {
    let key = DataKey::Record(contract_id.clone());
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

/// Keeps a new record live until its timelock has passed plus the regular
/// bump, so a refund never needs a restore first. Capped at the network's max TTL.
pub fn extend_record_past(env: &Env, contract_id: &BytesN<32>, timelock: u64) {
    let remaining = timelock.saturating_sub(env.ledger().timestamp()) / LEDGER_CLOSE_SECONDS;
    let ledgers = u32::try_from(remaining)
        .unwrap_or(u32::MAX)
        .saturating_add(RECORD_BUMP_AMOUNT)
        .min(env.storage().max_ttl());
    env.storage().persistent().extend_ttl(
        &DataKey::Record(contract_id.clone()),
        ledgers,
        ledgers,
    );
}

pub fn write_withdraw_policy(env: &Env, policy: WithdrawPolicy) {
    env.storage().instance().set(&DataKey::WithdrawPolicy, &policy);
}

pub fn read_withdraw_policy(env: &Env) -> WithdrawPolicy {
    env.storage()
        .instance()
        .get(&DataKey::WithdrawPolicy)
        .unwrap_or(WithdrawPolicy::BeforeTimelock)
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
