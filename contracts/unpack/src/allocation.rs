//! Initial supply distribution.
//!
//! Shares are expressed in basis points of the total supply. Every role
//! except the owner receives `floor(supply * bps / 10_000)`; the owner takes
//! whatever is left so that integer-division dust is never lost and the
//! distributed amounts always sum to the supply.

use crate::{errors::TokenError, storage::Role};

/// Basis point denominator (100%).
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Role → share table applied by `initialize`. The pauser holds no tokens.
pub const DISTRIBUTION: [(Role, u32); 4] = [
    (Role::Developer, 1_000),
    (Role::Presaler, 1_000),
    (Role::Airdroper, 3_000),
    (Role::Owner, 5_000),
];

/// Computes `floor(total_supply * bps / 10_000)`.
pub fn share_of(total_supply: i128, bps: u32) -> Result<i128, TokenError> {
    total_supply
        .checked_mul(bps as i128)
        .map(|v| v / BPS_DENOMINATOR as i128)
        .ok_or(TokenError::Overflow)
}

/// Splits `total_supply` across `table`, returning one amount per row in the
/// same order.
///
/// # Errors
/// * `InvalidAmount`       – `total_supply` is negative.
/// * `InvalidDistribution` – shares do not add up to 10 000 bps, or the table
///   has no `Owner` row to absorb the rounding remainder.
/// * `Overflow`            – `total_supply * bps` does not fit in `i128`.
pub fn distribute<const N: usize>(
    total_supply: i128,
    table: &[(Role, u32); N],
) -> Result<[(Role, i128); N], TokenError> {
    if total_supply < 0 {
        return Err(TokenError::InvalidAmount);
    }

    let total_bps = table.iter().fold(0u32, |acc, (_, bps)| acc.saturating_add(*bps));
    if total_bps != BPS_DENOMINATOR {
        return Err(TokenError::InvalidDistribution);
    }

    let owner_row = table
        .iter()
        .position(|(role, _)| *role == Role::Owner)
        .ok_or(TokenError::InvalidDistribution)?;

    let mut out = [(Role::Owner, 0_i128); N];
    let mut allocated: i128 = 0;

    for (i, (role, bps)) in table.iter().enumerate() {
        out[i].0 = *role;
        if i == owner_row {
            continue;
        }
        let amount = share_of(total_supply, *bps)?;
        out[i].1 = amount;
        allocated = allocated.checked_add(amount).ok_or(TokenError::Overflow)?;
    }

    // Sum of floored shares never exceeds the supply, so this cannot go negative.
    out[owner_row].1 = total_supply - allocated;
    Ok(out)
}
