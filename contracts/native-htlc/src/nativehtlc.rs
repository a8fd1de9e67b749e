use shared::{
    bump_instance, open, prepare, read_withdraw_policy, settle_refund, settle_withdraw,
    storage::has_record, write_withdraw_policy, AssetRef, EscrowRecord, HtlcError,
    HtlcEscrowInterface, WithdrawPolicy,
};
use soroban_sdk::{contract, contractimpl, symbol_short, token, Address, BytesN, Env, Symbol};

// Storage keys for contract configuration
const NATIVE_TOKEN: Symbol = symbol_short!("native");

#[contract]
pub struct NativeHtlc;

#[contractimpl]
impl NativeHtlc {
    /// Binds the escrow to the ledger currency's asset contract and picks the
    /// withdraw policy for this deployment.
    pub fn __constructor(env: Env, native_token: Address, withdraw_policy: WithdrawPolicy) {
        env.storage().instance().set(&NATIVE_TOKEN, &native_token);
        write_withdraw_policy(&env, withdraw_policy);
    }

    /// Locks `amount` of ledger currency from `sender` for `receiver`.
    ///
    /// The sender's authorization of this call covers the value transfer into
    /// escrow, so funding and record creation happen in the same invocation.
    /// Returns the contract id: sha256 over the creation parameters.
    pub fn new_contract(
        env: Env,
        sender: Address,
        receiver: Address,
        hashlock: BytesN<32>,
        timelock: u64,
        amount: i128,
    ) -> Result<BytesN<32>, HtlcError> {
        let (contract_id, record) = prepare(
            &env,
            sender.clone(),
            receiver,
            AssetRef::Native,
            amount,
            hashlock,
            timelock,
        )?;

        native_client(&env).transfer(&sender, &env.current_contract_address(), &amount);

        open(&env, &contract_id, &record);
        bump_instance(&env);
        Ok(contract_id)
    }

    pub fn native_token(env: Env) -> Address {
        read_native_token(&env)
    }

    pub fn withdraw_policy(env: Env) -> WithdrawPolicy {
        read_withdraw_policy(&env)
    }
}

#[contractimpl]
impl HtlcEscrowInterface for NativeHtlc {
    fn withdraw(
        env: Env,
        caller: Address,
        contract_id: BytesN<32>,
        preimage: BytesN<32>,
    ) -> Result<(), HtlcError> {
        let record = settle_withdraw(&env, &caller, &contract_id, &preimage)?;
        native_client(&env).transfer(
            &env.current_contract_address(),
            &record.receiver,
            &record.amount,
        );
        Ok(())
    }

    fn refund(env: Env, caller: Address, contract_id: BytesN<32>) -> Result<(), HtlcError> {
        let record = settle_refund(&env, &caller, &contract_id)?;
        native_client(&env).transfer(
            &env.current_contract_address(),
            &record.sender,
            &record.amount,
        );
        Ok(())
    }

    fn get_contract(env: Env, contract_id: BytesN<32>) -> EscrowRecord {
        shared::get_contract(&env, &contract_id)
    }

    fn has_contract(env: Env, contract_id: BytesN<32>) -> bool {
        has_record(&env, &contract_id)
    }
}

fn read_native_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&NATIVE_TOKEN)
        .unwrap_or_else(|| panic!("Native token not set"))
}

fn native_client(env: &Env) -> token::Client<'_> {
    token::Client::new(env, &read_native_token(env))
}
