use shared::{
    bump_instance, open, prepare, read_withdraw_policy, reject, settle_refund, settle_withdraw,
    storage::has_record, write_withdraw_policy, AssetRef, EscrowRecord, HtlcError,
    HtlcEscrowInterface, WithdrawPolicy,
};
use soroban_sdk::{contract, contractimpl, token, Address, BytesN, Env};

#[contract]
pub struct TokenHtlc;

#[contractimpl]
impl TokenHtlc {
    pub fn __constructor(env: Env, withdraw_policy: WithdrawPolicy) {
        write_withdraw_policy(&env, withdraw_policy);
    }

    /// Locks `amount` of `token` from `sender` for `receiver`.
    ///
    /// `sender` must first `approve` this contract for at least `amount`; the
    /// escrow then pulls the tokens with `transfer_from`.
    pub fn new_contract(
        env: Env,
        sender: Address,
        receiver: Address,
        hashlock: BytesN<32>,
        timelock: u64,
        token: Address,
        amount: i128,
    ) -> Result<BytesN<32>, HtlcError> {
        let (contract_id, record) = prepare(
            &env,
            sender.clone(),
            receiver,
            AssetRef::Token(token.clone()),
            amount,
            hashlock,
            timelock,
        )?;

        let escrow = env.current_contract_address();
        let client = token::Client::new(&env, &token);
        if client.allowance(&sender, &escrow) < amount {
            return Err(reject(&env, HtlcError::AllowanceTooLow));
        }
        client.transfer_from(&escrow, &sender, &escrow, &amount);

        open(&env, &contract_id, &record);
        bump_instance(&env);
        Ok(contract_id)
    }

    pub fn withdraw_policy(env: Env) -> WithdrawPolicy {
        read_withdraw_policy(&env)
    }
}

#[contractimpl]
impl HtlcEscrowInterface for TokenHtlc {
    fn withdraw(
        env: Env,
        caller: Address,
        contract_id: BytesN<32>,
        preimage: BytesN<32>,
    ) -> Result<(), HtlcError> {
        let record = settle_withdraw(&env, &caller, &contract_id, &preimage)?;
        release(&env, &record, &record.receiver);
        Ok(())
    }

    fn refund(env: Env, caller: Address, contract_id: BytesN<32>) -> Result<(), HtlcError> {
        let record = settle_refund(&env, &caller, &contract_id)?;
        release(&env, &record, &record.sender);
        Ok(())
    }

    fn get_contract(env: Env, contract_id: BytesN<32>) -> EscrowRecord {
        shared::get_contract(&env, &contract_id)
    }

    fn has_contract(env: Env, contract_id: BytesN<32>) -> bool {
        has_record(&env, &contract_id)
    }
}

// Records created here always hold AssetRef::Token
fn release(env: &Env, record: &EscrowRecord, to: &Address) {
    if let AssetRef::Token(token) = &record.asset {
        token::Client::new(env, token).transfer(
            &env.current_contract_address(),
            to,
            &record.amount,
        );
    }
}
