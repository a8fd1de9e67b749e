#![cfg(test)]

use super::*;
use crate::storage::{DataKey, RECORD_BUMP_AMOUNT};
use soroban_sdk::testutils::storage::Persistent as _;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::xdr::{Hash, ScAddress};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};

extern crate std;

// Empty contract so the helpers can touch storage from inside a contract frame.
#[contract]
pub struct Harness;

#[contractimpl]
impl Harness {}

struct Setup {
    env: Env,
    harness: Address,
    sender: Address,
    receiver: Address,
    secret: BytesN<32>,
    hashlock: BytesN<32>,
}

fn setup() -> Setup {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(1_000);
    let harness = env.register(Harness, ());
    let sender = Address::generate(&env);
    let receiver = Address::generate(&env);
    let secret = BytesN::from_array(&env, &[0x42; 32]);
    let hashlock = hash_secret(&env, &secret);
    Setup {
        env,
        harness,
        sender,
        receiver,
        secret,
        hashlock,
    }
}

fn open_record(s: &Setup, timelock: u64) -> BytesN<32> {
    s.env.as_contract(&s.harness, || {
        let (contract_id, record) = prepare(
            &s.env,
            s.sender.clone(),
            s.receiver.clone(),
            AssetRef::Native,
            500,
            s.hashlock.clone(),
            timelock,
        )
        .unwrap();
        open(&s.env, &contract_id, &record);
        contract_id
    })
}

// ===== HASHLOCK TESTS =====

#[test]
fn test_hash_secret_is_sha256() {
    let env = Env::default();
    let secret = BytesN::from_array(&env, &[0u8; 32]);
    // sha256 of 32 zero bytes
    let expected: [u8; 32] = [
        0x66, 0x68, 0x7a, 0xad, 0xf8, 0x62, 0xbd, 0x77, 0x6c, 0x8f, 0xc1, 0x8b, 0x8e, 0x9f,
        0x8e, 0x20, 0x08, 0x97, 0x14, 0x85, 0x6e, 0xe2, 0x33, 0xb3, 0x90, 0x2a, 0x59, 0x1d,
        0x0d, 0x5f, 0x29, 0x25,
    ];
    assert_eq!(hash_secret(&env, &secret), BytesN::from_array(&env, &expected));
}

#[test]
fn test_preimage_verification() {
    let env = Env::default();
    let secret = BytesN::from_array(&env, &[0x11; 32]);
    let hashlock = hash_secret(&env, &secret);
    let wrong = BytesN::from_array(&env, &[0x12; 32]);

    assert!(is_valid_preimage(&env, &secret, &hashlock));
    assert!(!is_valid_preimage(&env, &wrong, &hashlock));
    assert_eq!(only_valid_secret(&env, &secret, &hashlock), Ok(()));
    assert_eq!(
        only_valid_secret(&env, &wrong, &hashlock),
        Err(HtlcError::HashlockMismatch)
    );
}

// ===== RECORD TESTS =====

#[test]
fn test_contract_id_is_deterministic_per_tuple() {
    let s = setup();
    let env = &s.env;
    let token = Address::generate(env);
    let asset = AssetRef::Token(token.clone());

    let id = contract_id(env, &s.sender, &s.receiver, &asset, 10, &s.hashlock, 2_000);
    let again = contract_id(env, &s.sender, &s.receiver, &asset, 10, &s.hashlock, 2_000);
    assert_eq!(id, again);

    // every field takes part in the id
    assert_ne!(id, contract_id(env, &s.receiver, &s.sender, &asset, 10, &s.hashlock, 2_000));
    assert_ne!(id, contract_id(env, &s.sender, &s.receiver, &AssetRef::Native, 10, &s.hashlock, 2_000));
    assert_ne!(id, contract_id(env, &s.sender, &s.receiver, &asset, 11, &s.hashlock, 2_000));
    assert_ne!(id, contract_id(env, &s.sender, &s.receiver, &asset, 10, &zero_preimage(env), 2_000));
    assert_ne!(id, contract_id(env, &s.sender, &s.receiver, &asset, 10, &s.hashlock, 2_001));
    assert_ne!(
        contract_id(env, &s.sender, &s.receiver, &AssetRef::Nft(token.clone(), 1), 1, &s.hashlock, 2_000),
        contract_id(env, &s.sender, &s.receiver, &AssetRef::Nft(token, 2), 1, &s.hashlock, 2_000)
    );
}

#[test]
fn test_new_record_is_active_with_zero_preimage() {
    let s = setup();
    let record = EscrowRecord::new(
        &s.env,
        s.sender.clone(),
        s.receiver.clone(),
        AssetRef::Native,
        7,
        s.hashlock.clone(),
        2_000,
    );
    assert!(record.is_active());
    assert!(!record.withdrawn);
    assert!(!record.refunded);
    assert_eq!(record.preimage, zero_preimage(&s.env));
}

#[test]
fn test_empty_record_has_zero_sender() {
    let env = Env::default();
    let record = EscrowRecord::empty(&env);
    assert_eq!(record.sender, zero_address(&env));
    assert_eq!(record.receiver, zero_address(&env));
    assert_eq!(record.amount, 0);
    assert_eq!(record.timelock, 0);
    assert_eq!(record.preimage, zero_preimage(&env));
}

#[test]
fn test_zero_address_has_all_zero_contract_hash() {
    let env = Env::default();
    let expected = ScAddress::Contract(Hash([0u8; 32]));
    assert_eq!(ScAddress::from(&zero_address(&env)), expected);
    assert_eq!(ScAddress::from(&EscrowRecord::empty(&env).sender), expected);
}

// ===== STATE MACHINE TESTS =====

#[test]
fn test_prepare_rejects_invalid_requests() {
    let s = setup();
    s.env.as_contract(&s.harness, || {
        let zero_amount = prepare(
            &s.env,
            s.sender.clone(),
            s.receiver.clone(),
            AssetRef::Native,
            0,
            s.hashlock.clone(),
            2_000,
        );
        assert_eq!(zero_amount.err(), Some(HtlcError::AmountNotPositive));

        let now = s.env.ledger().timestamp();
        let past = prepare(
            &s.env,
            s.sender.clone(),
            s.receiver.clone(),
            AssetRef::Native,
            5,
            s.hashlock.clone(),
            now,
        );
        assert_eq!(past.err(), Some(HtlcError::TimelockNotInFuture));
    });
}

#[test]
fn test_prepare_detects_duplicate() {
    let s = setup();
    open_record(&s, 2_000);
    s.env.as_contract(&s.harness, || {
        let duplicate = prepare(
            &s.env,
            s.sender.clone(),
            s.receiver.clone(),
            AssetRef::Native,
            500,
            s.hashlock.clone(),
            2_000,
        );
        assert_eq!(duplicate.err(), Some(HtlcError::ContractExists));
    });
}

#[test]
fn test_open_then_read_back() {
    let s = setup();
    let contract_id = open_record(&s, 2_000);
    s.env.as_contract(&s.harness, || {
        let record = get_contract(&s.env, &contract_id);
        assert_eq!(record.sender, s.sender);
        assert_eq!(record.receiver, s.receiver);
        assert_eq!(record.amount, 500);
        assert_eq!(record.hashlock, s.hashlock);
        assert_eq!(record.timelock, 2_000);
        assert_eq!(record.contract_id(&s.env), contract_id);

        let unknown = BytesN::from_array(&s.env, &[0xab; 32]);
        assert_eq!(get_contract(&s.env, &unknown), EscrowRecord::empty(&s.env));
        assert_eq!(load(&s.env, &unknown), Err(HtlcError::ContractNotFound));
    });
}

#[test]
fn test_open_keeps_record_live_past_distant_timelock() {
    let s = setup();
    // sixty days out, well beyond the regular bump
    let timelock = 1_000 + 60 * 24 * 3_600;
    let contract_id = open_record(&s, timelock);

    let ttl = s.env.as_contract(&s.harness, || {
        s.env
            .storage()
            .persistent()
            .get_ttl(&DataKey::Record(contract_id.clone()))
    });
    let ledgers_to_timelock = ((timelock - 1_000) / 5) as u32;
    assert!(ttl >= ledgers_to_timelock + RECORD_BUMP_AMOUNT);
}

#[test]
fn test_settle_withdraw_guards() {
    let s = setup();
    let contract_id = open_record(&s, 2_000);
    let stranger = Address::generate(&s.env);
    let wrong = BytesN::from_array(&s.env, &[0x43; 32]);

    s.env.as_contract(&s.harness, || {
        assert_eq!(
            settle_withdraw(&s.env, &stranger, &contract_id, &s.secret).err(),
            Some(HtlcError::NotReceiver)
        );
        assert_eq!(
            settle_withdraw(&s.env, &s.receiver, &contract_id, &wrong).err(),
            Some(HtlcError::HashlockMismatch)
        );

        let record = settle_withdraw(&s.env, &s.receiver, &contract_id, &s.secret).unwrap();
        assert!(record.withdrawn);
        assert_eq!(record.preimage, s.secret);

        assert_eq!(
            settle_withdraw(&s.env, &s.receiver, &contract_id, &s.secret).err(),
            Some(HtlcError::AlreadyWithdrawn)
        );
        assert_eq!(
            settle_refund(&s.env, &s.sender, &contract_id).err(),
            Some(HtlcError::AlreadyWithdrawn)
        );
    });
}

#[test]
fn test_withdraw_policy_controls_expiry() {
    let s = setup();
    let contract_id = open_record(&s, 2_000);
    s.env.ledger().set_timestamp(2_000);

    s.env.as_contract(&s.harness, || {
        // default policy is BeforeTimelock
        assert_eq!(read_withdraw_policy(&s.env), WithdrawPolicy::BeforeTimelock);
        assert_eq!(
            settle_withdraw(&s.env, &s.receiver, &contract_id, &s.secret).err(),
            Some(HtlcError::TimelockExpired)
        );

        write_withdraw_policy(&s.env, WithdrawPolicy::UntilSettled);
        let record = settle_withdraw(&s.env, &s.receiver, &contract_id, &s.secret).unwrap();
        assert!(record.withdrawn);
    });
}

#[test]
fn test_settle_refund_guards() {
    let s = setup();
    let contract_id = open_record(&s, 2_000);

    s.env.as_contract(&s.harness, || {
        assert_eq!(
            settle_refund(&s.env, &s.sender, &contract_id).err(),
            Some(HtlcError::TimelockNotExpired)
        );
    });

    s.env.ledger().set_timestamp(2_000);
    s.env.as_contract(&s.harness, || {
        assert_eq!(
            settle_refund(&s.env, &s.receiver, &contract_id).err(),
            Some(HtlcError::NotSender)
        );

        let record = settle_refund(&s.env, &s.sender, &contract_id).unwrap();
        assert!(record.refunded);
        assert!(!record.withdrawn);
        assert_eq!(record.preimage, zero_preimage(&s.env));

        assert_eq!(
            settle_refund(&s.env, &s.sender, &contract_id).err(),
            Some(HtlcError::AlreadyRefunded)
        );
        write_withdraw_policy(&s.env, WithdrawPolicy::UntilSettled);
        assert_eq!(
            settle_withdraw(&s.env, &s.receiver, &contract_id, &s.secret).err(),
            Some(HtlcError::AlreadyRefunded)
        );
    });
}

#[test]
fn test_error_reasons() {
    assert_eq!(HtlcError::NotReceiver.reason(), "withdrawable: not receiver");
    assert_eq!(HtlcError::HashlockMismatch.reason(), "hashlock hash does not match");
    assert_eq!(HtlcError::TimelockNotExpired.reason(), "refundable: timelock not yet passed");
    assert_eq!(HtlcError::AlreadyRefunded as u32, 12);
}
