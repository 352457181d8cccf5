use soroban_sdk::{log, Env, U256};

use crate::collaborators::{
    Constraints, TermsConstraintsClient, UniverseClient, INTERFACE_TERMS_CONSTRAINTS,
};
use crate::error::Error;
use crate::math::{scale, u256, zero};
use crate::pricing::{calculate_eur_ulps_amount, calculate_max_funds_eur_ulps};
use crate::storage::{EtoTermsConfig, MAX_DISCOUNT_FRAC};

/// Check the terms against the product constraints they reference.
/// Fails with the first violated rule.
pub fn require_valid_terms(env: &Env, config: &EtoTermsConfig) -> Result<(), Error> {
    let result = check_terms(env, config);
    if let Err(error) = result {
        log!(env, "eto terms rejected: {}", error as u32);
    }
    result
}

fn check_terms(env: &Env, config: &EtoTermsConfig) -> Result<(), Error> {
    let universe = UniverseClient::new(env, &config.universe);
    if !universe.is_interface_instance(
        &INTERFACE_TERMS_CONSTRAINTS,
        &config.terms_constraints,
    ) {
        return Err(Error::TermsNotInUniverse);
    }
    let constraints = TermsConstraintsClient::new(env, &config.terms_constraints).constraints();

    check_tickets(env, config, &constraints)?;
    check_discounts(env, config)?;
    check_funds(env, config, &constraints)?;
    check_durations(config, &constraints)
}

fn check_tickets(env: &Env, config: &EtoTermsConfig, c: &Constraints) -> Result<(), Error> {
    let zero = zero(env);
    let params = &config.params;

    if params.min_ticket_eur_ulps < c.min_ticket_size_eur_ulps {
        return Err(Error::MinTicketBelowConstraints);
    }

    // zero max ticket is unlimited
    if params.max_ticket_eur_ulps != zero {
        if c.max_ticket_size_eur_ulps != zero
            && params.max_ticket_eur_ulps > c.max_ticket_size_eur_ulps
        {
            return Err(Error::MaxTicketAboveConstraints);
        }
        if params.max_ticket_eur_ulps < params.min_ticket_eur_ulps {
            return Err(Error::MaxTicketBelowMinTicket);
        }
    }

    if params.enable_transfers_on_success && !c.can_set_transferability {
        return Err(Error::TransferabilityNotAllowed);
    }

    if params.min_ticket_eur_ulps < config.token_terms.token_price_eur_ulps {
        return Err(Error::MinTicketBelowTokenPrice);
    }

    Ok(())
}

fn check_discounts(env: &Env, config: &EtoTermsConfig) -> Result<(), Error> {
    let max_discount = u256(env, MAX_DISCOUNT_FRAC);
    let params = &config.params;

    if params.whitelist_discount_frac > max_discount || params.public_discount_frac > max_discount
    {
        return Err(Error::DiscountRange);
    }

    Ok(())
}

fn check_funds(env: &Env, config: &EtoTermsConfig, c: &Constraints) -> Result<(), Error> {
    let zero = zero(env);
    let params = &config.params;
    let terms = &config.token_terms;

    if calculate_max_funds_eur_ulps(env, config) < params.min_ticket_eur_ulps {
        return Err(Error::MaxFundsBelowMinTicket);
    }

    if params.whitelist_discount_frac == zero
        && params.public_discount_frac == zero
        && c.max_investment_amount_eur_ulps != zero
    {
        let min_cap_eur_ulps =
            calculate_eur_ulps_amount(env, terms, &zero, &terms.min_number_of_tokens);
        if min_cap_eur_ulps > c.max_investment_amount_eur_ulps {
            return Err(Error::MinCapAboveMaxInvestment);
        }
    }

    if config.max_available_tokens < terms.min_number_of_tokens {
        return Err(Error::AvailableTokensBelowMinTokens);
    }

    Ok(())
}

fn check_durations(config: &EtoTermsConfig, c: &Constraints) -> Result<(), Error> {
    let d = &config.duration_terms;

    check_bounds(
        d.whitelist_duration,
        c.min_whitelist_duration,
        c.max_whitelist_duration,
        Error::WhitelistDurationTooShort,
        Error::WhitelistDurationTooLong,
    )?;
    check_bounds(
        d.public_duration,
        c.min_public_duration,
        c.max_public_duration,
        Error::PublicDurationTooShort,
        Error::PublicDurationTooLong,
    )?;
    check_bounds(
        d.offer_duration()?,
        c.min_offer_duration,
        c.max_offer_duration,
        Error::OfferDurationTooShort,
        Error::OfferDurationTooLong,
    )?;
    check_bounds(
        d.signing_duration,
        c.min_signing_duration,
        c.max_signing_duration,
        Error::SigningDurationTooShort,
        Error::SigningDurationTooLong,
    )?;
    check_bounds(
        d.claim_duration,
        c.min_claim_duration,
        c.max_claim_duration,
        Error::ClaimDurationTooShort,
        Error::ClaimDurationTooLong,
    )
}

fn check_bounds(
    value: u64,
    min: u64,
    max: u64,
    too_short: Error,
    too_long: Error,
) -> Result<(), Error> {
    if value < min {
        return Err(too_short);
    }
    if value > max {
        return Err(too_long);
    }
    Ok(())
}

/// A ticket either sets a price fraction in (0, SCALE] or deletes the
/// ticket with both values zero
pub fn validate_ticket(
    env: &Env,
    discount_amount_eur_ulps: &U256,
    price_frac: &U256,
) -> Result<(), Error> {
    let zero = zero(env);
    let is_delete = *discount_amount_eur_ulps == zero && *price_frac == zero;
    let in_range = *price_frac > zero && *price_frac <= scale(env);

    if !is_delete && !in_range {
        return Err(Error::DiscountRange);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SCALE;

    #[test]
    fn test_check_bounds() {
        let short = Error::ClaimDurationTooShort;
        let long = Error::ClaimDurationTooLong;

        assert_eq!(check_bounds(5, 5, 10, short, long), Ok(()));
        assert_eq!(check_bounds(10, 5, 10, short, long), Ok(()));
        assert_eq!(check_bounds(4, 5, 10, short, long), Err(short));
        assert_eq!(check_bounds(11, 5, 10, short, long), Err(long));
    }

    #[test]
    fn test_validate_ticket() {
        let env = Env::default();
        let amount = u256(&env, 1000 * SCALE);

        assert_eq!(validate_ticket(&env, &amount, &u256(&env, SCALE)), Ok(()));
        assert_eq!(validate_ticket(&env, &amount, &u256(&env, 1)), Ok(()));
        assert_eq!(
            validate_ticket(&env, &zero(&env), &u256(&env, SCALE / 2)),
            Ok(())
        );
        // delete
        assert_eq!(validate_ticket(&env, &zero(&env), &zero(&env)), Ok(()));

        assert_eq!(
            validate_ticket(&env, &amount, &zero(&env)),
            Err(Error::DiscountRange)
        );
        assert_eq!(
            validate_ticket(&env, &amount, &u256(&env, SCALE + 1)),
            Err(Error::DiscountRange)
        );
    }
}
