#![no_std]

mod allocation;
mod errors;
mod events;
mod pause;
mod storage;
mod tax;

#[cfg(test)]
extern crate std; // soroban-sdk testutils require std; the contract is no_std so we must opt-in explicitly.

#[cfg(test)]
mod test;

pub use errors::TokenError;
pub use storage::Role;

use allocation::DISTRIBUTION;
use events::TokenEvents;
use soroban_sdk::{contract, contractimpl, log, Address, Env, String};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};
use storage::TokenConfig;
use tax::TRANSFER_TAX_BPS;

pub const DECIMALS: u32 = 18;
/// One billion whole tokens, in wei.
pub const TOTAL_SUPPLY: i128 = 1_000_000_000 * 10_i128.pow(DECIMALS);
pub const NAME: &str = "UnPack";
pub const SYMBOL: &str = "UNPACK";

#[contract]
pub struct UnPack;

#[contractimpl]
impl UnPack {
    /// Binds the five roles, mints `TOTAL_SUPPLY` and splits it according to
    /// `allocation::DISTRIBUTION`. The airdroper becomes the tax recipient.
    pub fn initialize(
        env: Env,
        owner: Address,
        pauser: Address,
        developer: Address,
        presaler: Address,
        airdroper: Address,
    ) -> Result<(), TokenError> {
        if storage::has_config(&env) {
            return Err(TokenError::AlreadyInitialized);
        }
        owner.require_auth();

        let shares = allocation::distribute(TOTAL_SUPPLY, &DISTRIBUTION)?;

        let config = TokenConfig {
            owner: owner.clone(),
            pauser,
            developer,
            presaler,
            airdroper: airdroper.clone(),
            tax_bps: TRANSFER_TAX_BPS,
            tax_recipient: airdroper,
            paused: false,
        };
        storage::set_config(&env, &config);

        TokenUtils::new(&env).metadata().set_metadata(&default_metadata(&env));

        let minter = env.current_contract_address();
        for (role, amount) in shares.iter() {
            let to = config.account_for(*role);
            storage::credit(&env, &to, *amount)?;
            TokenUtils::new(&env).events().mint(minter.clone(), to, *amount);
        }
        storage::write_total_supply(&env, TOTAL_SUPPLY);
        storage::extend_instance_ttl(&env);

        TokenEvents::initialized(&env, &owner, TOTAL_SUPPLY, config.tax_bps, &config.tax_recipient);
        log!(&env, "unpack initialized", TOTAL_SUPPLY, config.tax_bps);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Ledger
    // -----------------------------------------------------------------------

    pub fn total_supply(env: Env) -> i128 {
        storage::read_total_supply(&env)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::read_balance(&env, &id)
    }

    /// Moves `amount` out of `from`; the receiver gets `amount - tax` and the
    /// tax recipient gets `tax`.
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        taxed_transfer(&env, &from, &to, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        check_nonnegative_amount(amount)?;
        pause::require_active(&env)?;
        storage::spend_allowance(&env, &from, &spender, amount)?;
        taxed_transfer(&env, &from, &to, amount)
    }

    // -----------------------------------------------------------------------
    // Allowances
    // -----------------------------------------------------------------------

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        storage::read_allowance(&env, &from, &spender).amount
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), TokenError> {
        from.require_auth();
        check_nonnegative_amount(amount)?;
        storage::require_config(&env)?;

        storage::write_allowance(&env, &from, &spender, amount, expiration_ledger)?;
        storage::extend_instance_ttl(&env);

        TokenUtils::new(&env).events().approve(from, spender, amount, expiration_ledger);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Burning
    // -----------------------------------------------------------------------

    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        check_nonnegative_amount(amount)?;
        pause::require_active(&env)?;
        burn_balance(&env, &from, amount)
    }

    pub fn burn_from(
        env: Env,
        spender: Address,
        from: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        check_nonnegative_amount(amount)?;
        pause::require_active(&env)?;
        storage::spend_allowance(&env, &from, &spender, amount)?;
        burn_balance(&env, &from, amount)
    }

    // -----------------------------------------------------------------------
    // Pause
    // -----------------------------------------------------------------------

    pub fn pause(env: Env, caller: Address) -> Result<(), TokenError> {
        pause::set_paused(&env, &caller, true)
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), TokenError> {
        pause::set_paused(&env, &caller, false)
    }

    pub fn is_paused(env: Env) -> bool {
        storage::get_config(&env).map(|c| c.paused).unwrap_or(false)
    }

    // -----------------------------------------------------------------------
    // Roles & tax configuration
    // -----------------------------------------------------------------------

    pub fn role(env: Env, role: Role) -> Option<Address> {
        storage::get_config(&env).map(|c| c.account_for(role))
    }

    pub fn tax_bps(env: Env) -> Result<u32, TokenError> {
        Ok(storage::require_config(&env)?.tax_bps)
    }

    pub fn tax_recipient(env: Env) -> Result<Address, TokenError> {
        Ok(storage::require_config(&env)?.tax_recipient)
    }

    /// Rebinds the owner role. Balances stay where they are.
    pub fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), TokenError> {
        let mut config = storage::require_config(&env)?;
        config.owner.require_auth();

        let previous = config.owner.clone();
        config.owner = new_owner.clone();
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);

        TokenEvents::owner_changed(&env, &previous, &new_owner);
        Ok(())
    }

    pub fn set_pauser(env: Env, new_pauser: Address) -> Result<(), TokenError> {
        let mut config = storage::require_config(&env)?;
        config.owner.require_auth();

        let previous = config.pauser.clone();
        config.pauser = new_pauser.clone();
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);

        TokenEvents::pauser_changed(&env, &previous, &new_pauser);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Metadata
    // -----------------------------------------------------------------------

    pub fn decimals(env: Env) -> u32 {
        read_metadata(&env).decimal
    }

    pub fn name(env: Env) -> String {
        read_metadata(&env).name
    }

    pub fn symbol(env: Env) -> String {
        read_metadata(&env).symbol
    }
}

fn check_nonnegative_amount(amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::InvalidAmount);
    }
    Ok(())
}

fn default_metadata(env: &Env) -> TokenMetadata {
    TokenMetadata {
        decimal: DECIMALS,
        name: String::from_str(env, NAME),
        symbol: String::from_str(env, SYMBOL),
    }
}

/// Stored metadata once initialized; the compiled-in values before that.
fn read_metadata(env: &Env) -> TokenMetadata {
    if storage::has_config(env) {
        TokenUtils::new(env).metadata().get_metadata()
    } else {
        default_metadata(env)
    }
}

/// Debits `amount` from `from`, credits the net amount to `to` and the tax
/// to the configured recipient. Any error leaves balances untouched because
/// the host rolls back the whole invocation.
fn taxed_transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), TokenError> {
    check_nonnegative_amount(amount)?;
    let config = pause::require_active(env)?;

    storage::debit(env, from, amount)?;
    let split = tax::compute_tax(amount, config.tax_bps, &config.tax_recipient)?;
    storage::credit(env, to, split.net)?;
    if split.tax > 0 {
        storage::credit(env, &split.recipient, split.tax)?;
    }
    storage::extend_instance_ttl(env);

    let events = TokenUtils::new(env).events();
    events.transfer(from.clone(), to.clone(), split.net);
    if split.tax > 0 {
        events.transfer(from.clone(), split.recipient.clone(), split.tax);
        TokenEvents::tax_collected(env, from, to, amount, split.tax, &split.recipient);
    }
    Ok(())
}

fn burn_balance(env: &Env, from: &Address, amount: i128) -> Result<(), TokenError> {
    storage::debit(env, from, amount)?;
    let supply = storage::read_total_supply(env);
    storage::write_total_supply(env, supply - amount);
    storage::extend_instance_ttl(env);

    TokenUtils::new(env).events().burn(from.clone(), amount);
    Ok(())
}
