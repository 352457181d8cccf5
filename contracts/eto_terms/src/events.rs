use soroban_sdk::{contracttype, Address, U256};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EtoTermsSetEvent {
    pub terms_constraints: Address,
    pub max_available_tokens: U256,
    pub max_available_whitelist_tokens: U256,
}

/// Final state of a ticket after a whitelist write, zeros when deleted
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvestorWhitelistedEvent {
    pub investor: Address,
    pub discount_amount_eur_ulps: U256,
    pub full_token_price_frac: U256,
}
