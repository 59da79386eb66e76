#![cfg(test)]

// ---------------------------------------------------------------------------
// UnPack test suite
//
// Structure
// ─────────
// allocation — pure unit tests for the supply distribution table
// tax        — pure unit tests for compute_tax
// storage    — balance/allowance accessors exercised inside as_contract
// ledger     — initialize + transfer through the generated client
// allowance  — approve / transfer_from / burn / burn_from
// pause      — pauser role and halted movement
// roles      — role lookup, ownership and pauser handover
// events     — TokenEvents emission
// ---------------------------------------------------------------------------

mod allowance;

use soroban_sdk::{testutils::Address as _, Address, Env};

use crate::{UnPack, UnPackClient};

/// One whole token in wei.
pub(crate) const UNIT: i128 = 1_000_000_000_000_000_000;

pub(crate) struct Accounts {
    pub owner: Address,
    pub pauser: Address,
    pub developer: Address,
    pub presaler: Address,
    pub airdroper: Address,
}

/// Registers the contract and returns an uninitialized client.
pub(crate) fn register(env: &Env) -> UnPackClient<'static> {
    let contract_id = env.register_contract(None, UnPack);
    UnPackClient::new(env, &contract_id)
}

pub(crate) fn generate_accounts(env: &Env) -> Accounts {
    Accounts {
        owner: Address::generate(env),
        pauser: Address::generate(env),
        developer: Address::generate(env),
        presaler: Address::generate(env),
        airdroper: Address::generate(env),
    }
}

/// Fresh env with all auths mocked and an initialized token.
pub(crate) fn setup() -> (Env, UnPackClient<'static>, Accounts) {
    let env = Env::default();
    env.mock_all_auths();

    let client = register(&env);
    let accounts = generate_accounts(&env);
    client.initialize(
        &accounts.owner,
        &accounts.pauser,
        &accounts.developer,
        &accounts.presaler,
        &accounts.airdroper,
    );

    (env, client, accounts)
}

pub(crate) fn sum_of_balances(client: &UnPackClient, accounts: &Accounts, extra: &[&Address]) -> i128 {
    let mut total = client.balance(&accounts.owner)
        + client.balance(&accounts.pauser)
        + client.balance(&accounts.developer)
        + client.balance(&accounts.presaler)
        + client.balance(&accounts.airdroper);
    for id in extra {
        total += client.balance(id);
    }
    total
}
