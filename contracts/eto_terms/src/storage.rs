use soroban_sdk::{contracttype, Address, String, U256};

use crate::duration_terms::DurationTerms;
use crate::token_terms::TokenTerms;

// Constants
pub const SCALE: u128 = 1_000_000_000_000_000_000; // 18 decimals, 1.0 == 100%
/// Platform share of issued tokens, 2%
pub const TOKEN_PARTICIPATION_FEE_FRAC: u128 = 2 * SCALE / 100;
/// Largest discount a tier may offer, 99%
pub const MAX_DISCOUNT_FRAC: u128 = 99 * SCALE / 100;
pub const MAX_TOKEN_DECIMALS: u32 = 18;
/// Max number of tokens must stay below 2^TOKENS_BITS
pub const TOKENS_BITS: u32 = 128;
/// Price times max number of tokens must stay below 2^FUNDS_BITS
pub const FUNDS_BITS: u32 = 112;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GeneralVotingRule {
    NoVotingRights = 0,
    Positive = 1,
    Negative = 2,
    Proportional = 3,
}

/// Rights attached to the equity token, recorded with the terms
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenholderRights {
    pub general_voting_rule: GeneralVotingRule,
    pub has_tag_along: bool,
    pub has_drag_along: bool,
    /// Liquidation preference multiplier, SCALE == 1x
    pub liquidation_preference_frac: U256,
    pub has_founders_vesting: bool,
}

/// Offering specific parameters passed at deployment
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EtoParams {
    pub min_ticket_eur_ulps: U256,
    /// 0 means no max ticket
    pub max_ticket_eur_ulps: U256,
    /// Discount applied to everyone during the whitelist phase
    pub whitelist_discount_frac: U256,
    /// Discount applied to everyone during the public phase
    pub public_discount_frac: U256,
    pub enable_transfers_on_success: bool,
    pub investor_offering_document_url: String,
    pub tokenholder_rights: TokenholderRights,
}

/// Everything fixed at deployment, including derived quantities
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EtoTermsConfig {
    pub universe: Address,
    pub terms_constraints: Address,
    pub token_terms: TokenTerms,
    pub duration_terms: DurationTerms,
    pub params: EtoParams,
    /// Max number of tokens less the platform fee
    pub max_available_tokens: U256,
    /// Whitelist tokens clamped to max available tokens
    pub max_available_whitelist_tokens: U256,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WhitelistTicket {
    /// EUR amount up to which the ticket price applies
    pub discount_amount_eur_ulps: U256,
    /// Fraction of the full token price paid by the investor, (0, SCALE]
    pub full_token_price_frac: U256,
}

/// Result of pricing a single contribution
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contribution {
    /// Investor holds a whitelist ticket
    pub is_whitelisted: bool,
    /// Identity gating is done by the offering, always false here
    pub is_locked_out: bool,
    pub min_ticket_eur_ulps: U256,
    /// 0 means no max ticket
    pub max_ticket_eur_ulps: U256,
    /// All tokens bought by the contribution
    pub equity_token_int: U256,
    /// Part of `equity_token_int` bought at the ticket price
    pub fixed_slot_equity_token_int: U256,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Deployer,
    Initialized,
    Whitelist(Address), // investor -> WhitelistTicket
}
