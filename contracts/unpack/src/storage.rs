use soroban_sdk::{contracttype, Address, Env};

use crate::errors::TokenError;

const DAY_IN_LEDGERS: u32 = 17_280; // ~1 day in 5s ledgers

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Participant roles bound to accounts at initialization.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Owner,
    Pauser,
    Developer,
    Presaler,
    Airdroper,
}

/// Token-wide configuration written once by `initialize`.
#[contracttype]
#[derive(Clone, Debug)]
pub struct TokenConfig {
    pub owner: Address,
    pub pauser: Address,
    pub developer: Address,
    pub presaler: Address,
    pub airdroper: Address,
    pub tax_bps: u32,
    pub tax_recipient: Address,
    pub paused: bool,
}

impl TokenConfig {
    pub fn account_for(&self, role: Role) -> Address {
        match role {
            Role::Owner => self.owner.clone(),
            Role::Pauser => self.pauser.clone(),
            Role::Developer => self.developer.clone(),
            Role::Presaler => self.presaler.clone(),
            Role::Airdroper => self.airdroper.clone(),
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceEntry {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Config,
    TotalSupply,
    Balance(Address),
    Allowance(Address, Address),
}

// ---------------------------------------------------------------------------
// Instance storage
// ---------------------------------------------------------------------------

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Option<TokenConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &TokenConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

/// Loads the config or fails with `NotInitialized`.
pub fn require_config(env: &Env) -> Result<TokenConfig, TokenError> {
    get_config(env).ok_or(TokenError::NotInitialized)
}

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::TotalSupply).unwrap_or(0)
}

pub fn write_total_supply(env: &Env, total_supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &total_supply);
}

/// Extend instance storage TTL to keep contract alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ---------------------------------------------------------------------------
// Balances (persistent)
// ---------------------------------------------------------------------------

pub fn read_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    match env.storage().persistent().get::<DataKey, i128>(&key) {
        Some(balance) => {
            env.storage().persistent().extend_ttl(
                &key,
                BALANCE_LIFETIME_THRESHOLD,
                BALANCE_BUMP_AMOUNT,
            );
            balance
        }
        None => 0,
    }
}

fn write_balance(env: &Env, id: &Address, amount: i128) {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage().persistent().extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn credit(env: &Env, id: &Address, amount: i128) -> Result<(), TokenError> {
    let balance = read_balance(env, id);
    let updated = balance.checked_add(amount).ok_or(TokenError::Overflow)?;
    write_balance(env, id, updated);
    Ok(())
}

pub fn debit(env: &Env, id: &Address, amount: i128) -> Result<(), TokenError> {
    let balance = read_balance(env, id);
    if balance < amount {
        return Err(TokenError::InsufficientBalance);
    }
    write_balance(env, id, balance - amount);
    Ok(())
}

// ---------------------------------------------------------------------------
// Allowances (temporary)
// ---------------------------------------------------------------------------

/// Returns the live allowance; an expired entry reads as zero.
pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceEntry {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    match env.storage().temporary().get::<DataKey, AllowanceEntry>(&key) {
        Some(entry) if entry.expiration_ledger >= env.ledger().sequence() => entry,
        Some(entry) => AllowanceEntry { amount: 0, expiration_ledger: entry.expiration_ledger },
        None => AllowanceEntry { amount: 0, expiration_ledger: 0 },
    }
}

pub fn write_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), TokenError> {
    let current = env.ledger().sequence();
    if amount > 0 && expiration_ledger < current {
        return Err(TokenError::InvalidExpiration);
    }

    let key = DataKey::Allowance(from.clone(), spender.clone());
    env.storage().temporary().set(&key, &AllowanceEntry { amount, expiration_ledger });

    if amount > 0 {
        let live_for = expiration_ledger - current;
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
    Ok(())
}

pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    let entry = read_allowance(env, from, spender);
    if entry.amount < amount {
        return Err(TokenError::InsufficientAllowance);
    }
    if amount > 0 {
        write_allowance(env, from, spender, entry.amount - amount, entry.expiration_ledger)?;
    }
    Ok(())
}
