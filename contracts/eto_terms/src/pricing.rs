use soroban_sdk::{Env, U256};

use crate::error::Error;
use crate::math::{
    checked_mul, decimal_fraction, floor_div, max, min, proportion, scale, u256, zero,
};
use crate::storage::{Contribution, EtoTermsConfig, WhitelistTicket, TOKEN_PARTICIPATION_FEE_FRAC};
use crate::token_terms::TokenTerms;

/// Token price after applying a price fraction, rounded half up
///
/// Formula: price × frac / SCALE
///
/// Example:
/// - token price: 0.12345 EUR, frac: 0.6
/// - price: 0.07407 EUR
pub fn calculate_price_fraction(env: &Env, terms: &TokenTerms, price_frac: &U256) -> U256 {
    decimal_fraction(env, &terms.token_price_eur_ulps, price_frac)
}

/// Tokens bought for `committed_eur_ulps` at full price, rounded down.
/// Price is flat so the amount raised so far does not change it.
///
/// Formula: eur × 10^decimals / price
///
/// # Errors
/// - `AmountTooLarge`: eur × 10^decimals does not fit in 256 bits
pub fn calculate_token_amount(
    env: &Env,
    terms: &TokenTerms,
    _total_eur_ulps: &U256,
    committed_eur_ulps: &U256,
) -> Result<U256, Error> {
    scaled_token_amount(env, terms, committed_eur_ulps, &terms.token_price_eur_ulps)
}

fn scaled_token_amount(
    env: &Env,
    terms: &TokenTerms,
    eur_ulps: &U256,
    price: &U256,
) -> Result<U256, Error> {
    let scaled =
        checked_mul(env, eur_ulps, &terms.token_power(env)).ok_or(Error::AmountTooLarge)?;
    Ok(floor_div(&scaled, price))
}

/// EUR value of `token_amount` at full price, rounded half up
///
/// Formula: tokens × price / 10^decimals
pub fn calculate_eur_ulps_amount(
    env: &Env,
    terms: &TokenTerms,
    _total_tokens: &U256,
    token_amount: &U256,
) -> U256 {
    proportion(
        env,
        token_amount,
        &terms.token_price_eur_ulps,
        &terms.token_power(env),
    )
}

/// Number of shares represented by `token_amount`, scaled by SCALE
///
/// Example:
/// - tokens per share: 10000, tokens: 15000
/// - shares: 1.5
pub fn equity_tokens_to_shares_frac(env: &Env, terms: &TokenTerms, token_amount: &U256) -> U256 {
    proportion(env, token_amount, &scale(env), &terms.equity_tokens_per_share)
}

/// Tokens left for investors once the platform fee is reserved, rounded down
///
/// Formula: amount_with_fee × SCALE / (SCALE + fee)
///
/// Example:
/// - max tokens: 10,000,000, fee: 2%
/// - available: 10,000,000 / 1.02 = 9,803,921
pub fn calculate_available_tokens(env: &Env, amount_with_fee: &U256) -> U256 {
    let divisor = scale(env).add(&u256(env, TOKEN_PARTICIPATION_FEE_FRAC));
    floor_div(&amount_with_fee.mul(&scale(env)), &divisor)
}

/// EUR raised if every available token is sold at the deepest tier discount
pub fn calculate_max_funds_eur_ulps(env: &Env, config: &EtoTermsConfig) -> U256 {
    let params = &config.params;
    let deepest_discount = max(&params.whitelist_discount_frac, &params.public_discount_frac);
    let full_price_funds = calculate_eur_ulps_amount(
        env,
        &config.token_terms,
        &zero(env),
        &config.max_available_tokens,
    );
    decimal_fraction(env, &full_price_funds, &scale(env).sub(&deepest_discount))
}

fn tokens_at_price(
    env: &Env,
    terms: &TokenTerms,
    eur_ulps: &U256,
    price: &U256,
) -> Result<U256, Error> {
    if *price == zero(env) {
        // discount rounded a dust price down to nothing
        return Err(Error::InvalidTokenPrice);
    }
    scaled_token_amount(env, terms, eur_ulps, price)
}

/// Price a single contribution of `new_investor_contribution_eur_ulps`.
///
/// In the whitelist phase an investor holding a ticket buys at the ticket
/// price until their contributions reach the ticket amount; whatever is left
/// is priced with the discount of the current phase. A contribution that
/// crosses the ticket amount is split at that boundary.
///
/// Calls for one investor must come in non-decreasing
/// `existing_investor_contribution_eur_ulps` order.
pub fn calculate_contribution(
    env: &Env,
    config: &EtoTermsConfig,
    ticket: Option<WhitelistTicket>,
    total_contributed_eur_ulps: &U256,
    existing_investor_contribution_eur_ulps: &U256,
    new_investor_contribution_eur_ulps: &U256,
    apply_whitelist_discounts: bool,
) -> Result<Contribution, Error> {
    let zero = zero(env);
    let terms = &config.token_terms;
    let params = &config.params;

    let mut min_ticket_eur_ulps = params.min_ticket_eur_ulps.clone();
    let mut max_ticket_eur_ulps = params.max_ticket_eur_ulps.clone();
    let mut discounted_amount = zero.clone();
    let mut fixed_slot_equity_token_int = zero.clone();
    let is_whitelisted = ticket.is_some();

    if let (true, Some(ticket)) = (apply_whitelist_discounts, &ticket) {
        let discount_amount = &ticket.discount_amount_eur_ulps;

        // ticket may lift max ticket, zero max ticket stays unlimited
        if max_ticket_eur_ulps != zero {
            max_ticket_eur_ulps = max(discount_amount, &max_ticket_eur_ulps);
        }
        if *discount_amount != zero {
            min_ticket_eur_ulps = min(discount_amount, &min_ticket_eur_ulps);
        }

        if existing_investor_contribution_eur_ulps < discount_amount {
            let slot_left = discount_amount.sub(existing_investor_contribution_eur_ulps);
            discounted_amount = min(new_investor_contribution_eur_ulps, &slot_left);
            if discounted_amount > zero {
                let price = calculate_price_fraction(env, terms, &ticket.full_token_price_frac);
                fixed_slot_equity_token_int =
                    tokens_at_price(env, terms, &discounted_amount, &price)?;
            }
        }
    }

    let remaining_amount = new_investor_contribution_eur_ulps.sub(&discounted_amount);
    let mut equity_token_int = zero.clone();
    if remaining_amount > zero {
        let phase_discount = if apply_whitelist_discounts {
            &params.whitelist_discount_frac
        } else {
            &params.public_discount_frac
        };
        equity_token_int = if *phase_discount > zero {
            let price = calculate_price_fraction(env, terms, &scale(env).sub(phase_discount));
            tokens_at_price(env, terms, &remaining_amount, &price)?
        } else {
            let total = total_contributed_eur_ulps.add(&discounted_amount);
            calculate_token_amount(env, terms, &total, &remaining_amount)?
        };
    }

    Ok(Contribution {
        is_whitelisted,
        is_locked_out: false,
        min_ticket_eur_ulps,
        max_ticket_eur_ulps,
        equity_token_int: equity_token_int.add(&fixed_slot_equity_token_int),
        fixed_slot_equity_token_int,
    })
}
