use shared::{NftError, NonFungibleTokenInterface};
use soroban_sdk::{
    contract, contractimpl, contracttype, log, symbol_short, Address, Env, Symbol,
};

const ADMIN: Symbol = symbol_short!("ADMIN");

const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const TOKEN_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const TOKEN_LIFETIME_THRESHOLD: u32 = TOKEN_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub(crate) enum DataKey {
    Owner(u128),
    Approved(u128),
    Balance(Address),
}

#[contract]
pub struct Collectible;

#[contractimpl]
impl Collectible {
    pub fn __constructor(env: Env, admin: Address) {
        env.storage().instance().set(&ADMIN, &admin);
    }

    /// Admin creates `token_id` and assigns it to `to`.
    pub fn mint(env: Env, to: Address, token_id: u128) -> Result<(), NftError> {
        Self::get_admin(env.clone()).require_auth();
        if read_owner(&env, token_id).is_some() {
            return Err(NftError::AlreadyMinted);
        }
        write_owner(&env, token_id, &to);
        adjust_balance(&env, &to, 1);
        env.events()
            .publish((symbol_short!("mint"), to.clone()), token_id);
        log!(&env, "collectible minted: {}", token_id);
        Ok(())
    }

    pub fn get_admin(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&ADMIN)
            .unwrap_or_else(|| panic!("Admin not set"))
    }
}

#[contractimpl]
impl NonFungibleTokenInterface for Collectible {
    fn owner_of(env: Env, token_id: u128) -> Option<Address> {
        read_owner(&env, token_id)
    }

    fn get_approved(env: Env, token_id: u128) -> Option<Address> {
        env.storage()
            .persistent()
            .get(&DataKey::Approved(token_id))
    }

    fn approve(
        env: Env,
        owner: Address,
        spender: Option<Address>,
        token_id: u128,
    ) -> Result<(), NftError> {
        owner.require_auth();
        let current = read_owner(&env, token_id).ok_or(NftError::UnknownToken)?;
        if current != owner {
            return Err(NftError::NotOwner);
        }
        let key = DataKey::Approved(token_id);
        match &spender {
            Some(spender) => env.storage().persistent().set(&key, spender),
            None => env.storage().persistent().remove(&key),
        }
        env.events()
            .publish((symbol_short!("approve"), owner), (spender, token_id));
        Ok(())
    }

    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u128,
    ) -> Result<(), NftError> {
        spender.require_auth();
        let owner = read_owner(&env, token_id).ok_or(NftError::UnknownToken)?;
        if owner != from {
            return Err(NftError::NotOwner);
        }
        if spender != owner && Self::get_approved(env.clone(), token_id) != Some(spender) {
            return Err(NftError::NotApproved);
        }

        env.storage()
            .persistent()
            .remove(&DataKey::Approved(token_id));
        write_owner(&env, token_id, &to);
        adjust_balance(&env, &from, -1);
        adjust_balance(&env, &to, 1);
        env.events()
            .publish((symbol_short!("transfer"), from, to), token_id);
        Ok(())
    }

    fn balance(env: Env, owner: Address) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(owner))
            .unwrap_or(0)
    }
}

fn read_owner(env: &Env, token_id: u128) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Owner(token_id))
}

fn write_owner(env: &Env, token_id: u128, owner: &Address) {
    let key = DataKey::Owner(token_id);
    env.storage().persistent().set(&key, owner);
    env.storage()
        .persistent()
        .extend_ttl(&key, TOKEN_LIFETIME_THRESHOLD, TOKEN_BUMP_AMOUNT);
}

fn adjust_balance(env: &Env, owner: &Address, delta: i64) {
    let key = DataKey::Balance(owner.clone());
    let balance: u32 = env.storage().persistent().get(&key).unwrap_or(0);
    let updated = (balance as i64 + delta) as u32;
    env.storage().persistent().set(&key, &updated);
    env.storage()
        .persistent()
        .extend_ttl(&key, TOKEN_LIFETIME_THRESHOLD, TOKEN_BUMP_AMOUNT);
}
