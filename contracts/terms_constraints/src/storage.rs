use soroban_sdk::{contracttype, String, U256};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Constraints {
    /// Human readable product name
    pub name: String,
    /// Legal jurisdiction the product is offered in (e.g. "DE")
    pub jurisdiction: String,
    /// Prospectus type required by the jurisdiction
    pub offering_document_type: String,
    /// Asset class of the offered token
    pub asset_type: String,
    /// Offering may enable token transfers once it succeeds
    pub can_set_transferability: bool,
    /// Offering is run through a nominee
    pub has_nominee: bool,

    pub min_ticket_size_eur_ulps: U256,
    /// 0 means no upper limit
    pub max_ticket_size_eur_ulps: U256,
    pub min_investment_amount_eur_ulps: U256,
    /// 0 means no upper limit
    pub max_investment_amount_eur_ulps: U256,

    // durations in seconds
    pub min_whitelist_duration: u64,
    pub max_whitelist_duration: u64,
    pub min_public_duration: u64,
    pub max_public_duration: u64,
    pub min_offer_duration: u64,
    pub max_offer_duration: u64,
    pub min_signing_duration: u64,
    pub max_signing_duration: u64,
    pub min_claim_duration: u64,
    pub max_claim_duration: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Constraints,
    Initialized,
}
