//! Interfaces of the contracts the terms depend on. Types mirror the ones
//! published by the universe and terms constraints contracts.

use soroban_sdk::{
    contractclient, contracttype, symbol_short, Address, Env, String, Symbol, U256,
};

/// Interface id of terms constraints in the universe
pub const INTERFACE_TERMS_CONSTRAINTS: Symbol = symbol_short!("eto_tc");

/// Role required to edit the whitelist
pub const ROLE_WHITELIST_ADMIN: Symbol = symbol_short!("wl_admin");

#[contractclient(name = "UniverseClient")]
pub trait UniverseInterface {
    fn is_interface_instance(env: Env, interface: Symbol, instance: Address) -> bool;

    fn allowed(env: Env, subject: Address, role: Symbol, object: Address) -> bool;
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Constraints {
    pub name: String,
    pub jurisdiction: String,
    pub offering_document_type: String,
    pub asset_type: String,
    pub can_set_transferability: bool,
    pub has_nominee: bool,
    pub min_ticket_size_eur_ulps: U256,
    pub max_ticket_size_eur_ulps: U256,
    pub min_investment_amount_eur_ulps: U256,
    pub max_investment_amount_eur_ulps: U256,
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

#[contractclient(name = "TermsConstraintsClient")]
pub trait TermsConstraintsInterface {
    fn constraints(env: Env) -> Constraints;
}
