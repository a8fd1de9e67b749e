use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env};

use crate::record::{AssetRef, EscrowRecord};

// Payloads carry every creation field so an observer can rebuild the record
// without a follow-up read.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewContractEvent {
    pub contract_id: BytesN<32>,
    pub sender: Address,
    pub receiver: Address,
    pub asset: AssetRef,
    pub amount: i128,
    pub hashlock: BytesN<32>,
    pub timelock: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawEvent {
    pub contract_id: BytesN<32>,
    pub preimage: BytesN<32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundEvent {
    pub contract_id: BytesN<32>,
}

pub fn new_contract(env: &Env, contract_id: &BytesN<32>, record: &EscrowRecord) {
    let event = NewContractEvent {
        contract_id: contract_id.clone(),
        sender: record.sender.clone(),
        receiver: record.receiver.clone(),
        asset: record.asset.clone(),
        amount: record.amount,
        hashlock: record.hashlock.clone(),
        timelock: record.timelock,
    };
    env.events()
        .publish((symbol_short!("htlc_new"), contract_id.clone()), event);
}

pub fn withdrawn(env: &Env, contract_id: &BytesN<32>, preimage: &BytesN<32>) {
    let event = WithdrawEvent {
        contract_id: contract_id.clone(),
        preimage: preimage.clone(),
    };
    env.events()
        .publish((symbol_short!("withdrawn"), contract_id.clone()), event);
}

pub fn refunded(env: &Env, contract_id: &BytesN<32>) {
    let event = RefundEvent {
        contract_id: contract_id.clone(),
    };
    env.events()
        .publish((symbol_short!("refunded"), contract_id.clone()), event);
}
