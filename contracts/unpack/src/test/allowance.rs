use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address,
};

use super::{setup, sum_of_balances, UNIT};
use crate::{TokenError, TOTAL_SUPPLY};

#[test]
fn approve_sets_allowance() {
    let (env, client, accounts) = setup();
    let spender = Address::generate(&env);

    client.approve(&accounts.owner, &spender, &(500 * UNIT), &1_000);

    assert_eq!(client.allowance(&accounts.owner, &spender), 500 * UNIT);
    assert_eq!(client.allowance(&spender, &accounts.owner), 0);
}

#[test]
fn approve_overwrites_previous_allowance() {
    let (env, client, accounts) = setup();
    let spender = Address::generate(&env);

    client.approve(&accounts.owner, &spender, &(500 * UNIT), &1_000);
    client.approve(&accounts.owner, &spender, &(20 * UNIT), &1_000);

    assert_eq!(client.allowance(&accounts.owner, &spender), 20 * UNIT);
}

#[test]
fn approve_in_the_past_is_rejected() {
    let (env, client, accounts) = setup();
    env.ledger().set_sequence_number(500);
    let spender = Address::generate(&env);

    let result = client.try_approve(&accounts.owner, &spender, &UNIT, &499);
    assert_eq!(result, Err(Ok(TokenError::InvalidExpiration)));
}

#[test]
fn expired_allowance_reads_as_zero_and_cannot_be_spent() {
    let (env, client, accounts) = setup();
    let spender = Address::generate(&env);

    client.approve(&accounts.owner, &spender, &UNIT, &100);

    env.ledger().set_sequence_number(100);
    assert_eq!(client.allowance(&accounts.owner, &spender), UNIT);

    env.ledger().set_sequence_number(101);
    assert_eq!(client.allowance(&accounts.owner, &spender), 0);

    let result = client.try_transfer_from(&spender, &accounts.owner, &spender, &UNIT);
    assert_eq!(result, Err(Ok(TokenError::InsufficientAllowance)));
    assert_eq!(client.balance(&accounts.owner), TOTAL_SUPPLY / 2);
}

#[test]
fn approve_negative_is_rejected() {
    let (env, client, accounts) = setup();
    let spender = Address::generate(&env);

    let result = client.try_approve(&accounts.owner, &spender, &-5, &1_000);
    assert_eq!(result, Err(Ok(TokenError::InvalidAmount)));
}

#[test]
fn transfer_from_spends_allowance_and_is_taxed() {
    let (env, client, accounts) = setup();
    let spender = Address::generate(&env);
    let receiver = Address::generate(&env);

    let owner_before = client.balance(&accounts.owner);
    let airdroper_before = client.balance(&accounts.airdroper);

    client.approve(&accounts.owner, &spender, &(1_000 * UNIT), &1_000);
    client.transfer_from(&spender, &accounts.owner, &receiver, &(400 * UNIT));

    assert_eq!(client.allowance(&accounts.owner, &spender), 600 * UNIT);
    assert_eq!(client.balance(&accounts.owner), owner_before - 400 * UNIT);
    assert_eq!(client.balance(&receiver), 388 * UNIT);
    assert_eq!(client.balance(&accounts.airdroper), airdroper_before + 12 * UNIT);
    assert_eq!(client.balance(&spender), 0);
}

#[test]
fn transfer_from_requires_spender_auth() {
    let (env, client, accounts) = setup();
    let spender = Address::generate(&env);
    let receiver = Address::generate(&env);

    client.approve(&accounts.owner, &spender, &UNIT, &1_000);
    client.transfer_from(&spender, &accounts.owner, &receiver, &UNIT);

    let auths = env.auths();
    assert_eq!(auths.len(), 1);
    assert_eq!(auths[0].0, spender);
}

#[test]
fn transfer_from_beyond_allowance_fails() {
    let (env, client, accounts) = setup();
    let spender = Address::generate(&env);

    client.approve(&accounts.owner, &spender, &(10 * UNIT), &1_000);
    let result = client.try_transfer_from(&spender, &accounts.owner, &spender, &(10 * UNIT + 1));

    assert_eq!(result, Err(Ok(TokenError::InsufficientAllowance)));
    assert_eq!(client.allowance(&accounts.owner, &spender), 10 * UNIT);
}

#[test]
fn transfer_from_beyond_balance_keeps_allowance() {
    let (env, client, _accounts) = setup();
    let holder = Address::generate(&env);
    let spender = Address::generate(&env);

    client.approve(&holder, &spender, &UNIT, &1_000);
    let result = client.try_transfer_from(&spender, &holder, &spender, &UNIT);

    assert_eq!(result, Err(Ok(TokenError::InsufficientBalance)));
    assert_eq!(client.allowance(&holder, &spender), UNIT);
}

#[test]
fn burn_reduces_supply() {
    let (_env, client, accounts) = setup();

    client.burn(&accounts.presaler, &(1_000 * UNIT));

    assert_eq!(client.total_supply(), TOTAL_SUPPLY - 1_000 * UNIT);
    assert_eq!(client.balance(&accounts.presaler), TOTAL_SUPPLY / 10 - 1_000 * UNIT);
    assert_eq!(sum_of_balances(&client, &accounts, &[]), client.total_supply());
}

#[test]
fn burn_is_not_taxed() {
    let (_env, client, accounts) = setup();
    let airdroper_before = client.balance(&accounts.airdroper);

    client.burn(&accounts.developer, &(100 * UNIT));

    assert_eq!(client.balance(&accounts.airdroper), airdroper_before);
}

#[test]
fn burn_more_than_balance_fails() {
    let (env, client, _accounts) = setup();
    let holder = Address::generate(&env);

    let result = client.try_burn(&holder, &1);
    assert_eq!(result, Err(Ok(TokenError::InsufficientBalance)));
    assert_eq!(client.total_supply(), TOTAL_SUPPLY);
}

#[test]
fn burn_from_spends_allowance() {
    let (env, client, accounts) = setup();
    let spender = Address::generate(&env);

    client.approve(&accounts.owner, &spender, &(50 * UNIT), &1_000);
    client.burn_from(&spender, &accounts.owner, &(20 * UNIT));

    assert_eq!(client.allowance(&accounts.owner, &spender), 30 * UNIT);
    assert_eq!(client.balance(&accounts.owner), TOTAL_SUPPLY / 2 - 20 * UNIT);
    assert_eq!(client.total_supply(), TOTAL_SUPPLY - 20 * UNIT);
}

#[test]
fn burn_from_without_allowance_fails() {
    let (env, client, accounts) = setup();
    let spender = Address::generate(&env);

    let result = client.try_burn_from(&spender, &accounts.owner, &UNIT);
    assert_eq!(result, Err(Ok(TokenError::InsufficientAllowance)));
}
