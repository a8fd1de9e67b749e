use soroban_sdk::{Bytes, BytesN, Env};

use crate::error::{reject, HtlcError};

/// SHA-256 of a 32 byte secret. This is the hashlock committed to at creation.
pub fn hash_secret(env: &Env, secret: &BytesN<32>) -> BytesN<32> {
    let secret_bytes = Bytes::from_array(env, &secret.to_array());
    env.crypto().sha256(&secret_bytes).into()
}

pub fn is_valid_preimage(env: &Env, secret: &BytesN<32>, hashlock: &BytesN<32>) -> bool {
    hash_secret(env, secret) == *hashlock
}

pub fn only_valid_secret(
    env: &Env,
    secret: &BytesN<32>,
    hashlock: &BytesN<32>,
) -> Result<(), HtlcError> {
    if !is_valid_preimage(env, secret, hashlock) {
        return Err(reject(env, HtlcError::HashlockMismatch));
    }
    Ok(())
}

/// Preimage slot value held until a successful withdraw.
pub fn zero_preimage(env: &Env) -> BytesN<32> {
    BytesN::from_array(env, &[0u8; 32])
}
