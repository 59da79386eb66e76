use soroban_sdk::Address;

use crate::{allocation::BPS_DENOMINATOR, errors::TokenError};

/// Transfer tax in basis points (3%).
pub const TRANSFER_TAX_BPS: u32 = 300;

/// How a single transfer amount is split between the receiver and the
/// tax recipient.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TaxSplit {
    pub net: i128,
    pub tax: i128,
    pub recipient: Address,
}

/// Computes the tax owed on `amount` and routes it to `recipient`.
///
/// `tax = floor(amount * tax_bps / 10_000)` and `net = amount - tax`, so
/// `net + tax == amount` for every input. The product is split as
/// `amount / 10_000 * bps + (amount % 10_000) * bps / 10_000`, which equals
/// the floored product exactly and cannot overflow while `bps <= 10_000`.
///
/// # Errors
/// * `InvalidAmount`  – `amount` is negative.
/// * `InvalidTaxRate` – `tax_bps` exceeds 10 000.
pub fn compute_tax(amount: i128, tax_bps: u32, recipient: &Address) -> Result<TaxSplit, TokenError> {
    if amount < 0 {
        return Err(TokenError::InvalidAmount);
    }
    if tax_bps > BPS_DENOMINATOR {
        return Err(TokenError::InvalidTaxRate);
    }

    let bps = tax_bps as i128;
    let denominator = BPS_DENOMINATOR as i128;
    let tax = amount / denominator * bps + (amount % denominator) * bps / denominator;

    Ok(TaxSplit { net: amount - tax, tax, recipient: recipient.clone() })
}
