use rand::RngCore;
use shared::hash_secret;
use soroban_sdk::{BytesN, Env};

use crate::error::SwapError;

/// A swap secret and its hashlock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecretPair {
    pub secret: BytesN<32>,
    pub hashlock: BytesN<32>,
}

impl SecretPair {
    /// Fresh 32 byte secret from the thread RNG.
    pub fn random(env: &Env) -> Self {
        let mut secret = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut secret);
        Self::from_secret(env, BytesN::from_array(env, &secret))
    }

    pub fn from_secret(env: &Env, secret: BytesN<32>) -> Self {
        let hashlock = hash_secret(env, &secret);
        SecretPair { secret, hashlock }
    }

    /// Parses a `0x`-prefixed (or bare) 64 digit hex secret.
    pub fn from_hex(env: &Env, secret: &str) -> Result<Self, SwapError> {
        let digits = secret.strip_prefix("0x").unwrap_or(secret);
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|err| SwapError::MalformedSecret(err.to_string()))?;
        Ok(Self::from_secret(env, BytesN::from_array(env, &bytes)))
    }

    pub fn secret_hex(&self) -> String {
        to_hex(&self.secret)
    }

    pub fn hashlock_hex(&self) -> String {
        to_hex(&self.hashlock)
    }
}

/// Renders a contract id the way explorers show it: `0x` and 64 lowercase hex digits.
pub fn contract_id_hex(contract_id: &BytesN<32>) -> String {
    to_hex(contract_id)
}

fn to_hex(bytes: &BytesN<32>) -> String {
    format!("0x{}", hex::encode(bytes.to_array()))
}
