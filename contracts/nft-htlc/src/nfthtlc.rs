use shared::{
    bump_instance, open, prepare, read_withdraw_policy, reject, settle_refund, settle_withdraw,
    storage::has_record, write_withdraw_policy, AssetRef, EscrowRecord, HtlcError,
    HtlcEscrowInterface, NonFungibleTokenClient, WithdrawPolicy,
};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};

// A non-fungible escrow always holds exactly one unit
const NFT_AMOUNT: i128 = 1;

#[contract]
pub struct NftHtlc;

#[contractimpl]
impl NftHtlc {
    pub fn __constructor(env: Env, withdraw_policy: WithdrawPolicy) {
        write_withdraw_policy(&env, withdraw_policy);
    }

    /// Locks `token_id` of `token` from `sender` for `receiver`.
    ///
    /// `sender` must own the token and have approved this contract as its
    /// spender. The token moves into escrow before the record is stored.
    pub fn new_contract(
        env: Env,
        sender: Address,
        receiver: Address,
        hashlock: BytesN<32>,
        timelock: u64,
        token: Address,
        token_id: u128,
    ) -> Result<BytesN<32>, HtlcError> {
        let (contract_id, record) = prepare(
            &env,
            sender.clone(),
            receiver,
            AssetRef::Nft(token.clone(), token_id),
            NFT_AMOUNT,
            hashlock,
            timelock,
        )?;

        let escrow = env.current_contract_address();
        let client = NonFungibleTokenClient::new(&env, &token);
        if client.owner_of(&token_id) != Some(sender.clone()) {
            return Err(reject(&env, HtlcError::NotTokenOwner));
        }
        if client.get_approved(&token_id) != Some(escrow.clone()) {
            return Err(reject(&env, HtlcError::TokenNotApproved));
        }
        client.transfer_from(&escrow, &sender, &escrow, &token_id);

        open(&env, &contract_id, &record);
        bump_instance(&env);
        Ok(contract_id)
    }

    pub fn withdraw_policy(env: Env) -> WithdrawPolicy {
        read_withdraw_policy(&env)
    }
}

#[contractimpl]
impl HtlcEscrowInterface for NftHtlc {
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

// Records created here always hold AssetRef::Nft
fn release(env: &Env, record: &EscrowRecord, to: &Address) {
    if let AssetRef::Nft(token, token_id) = &record.asset {
        let escrow = env.current_contract_address();
        NonFungibleTokenClient::new(env, token).transfer_from(&escrow, &escrow, to, token_id);
    }
}
