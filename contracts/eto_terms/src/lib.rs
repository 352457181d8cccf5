#![no_std]

mod collaborators;
mod duration_terms;
mod error;
mod events;
mod math;
mod pricing;
mod storage;
mod token_terms;
mod validation;


pub use collaborators::{Constraints, INTERFACE_TERMS_CONSTRAINTS, ROLE_WHITELIST_ADMIN};
pub use duration_terms::DurationTerms;
pub use error::Error;
pub use events::{EtoTermsSetEvent, InvestorWhitelistedEvent};
pub use storage::{
    Contribution, EtoParams, EtoTermsConfig, GeneralVotingRule, TokenholderRights,
    WhitelistTicket, MAX_DISCOUNT_FRAC, SCALE, TOKEN_PARTICIPATION_FEE_FRAC,
};
pub use token_terms::TokenTerms;

use collaborators::UniverseClient;
use math::{min, u256, zero};
use storage::DataKey;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Symbol, Vec, U256};

#[contract]
pub struct EtoTerms;

#[contractimpl]
impl EtoTerms {
    // ============================================
    // INITIALIZATION
    // ============================================

    /// Fix the terms of an offering, signed by `deployer`. Every rule is
    /// checked before anything is stored, a failing rule aborts the
    /// deployment.
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    /// - token terms errors (20-29): see `TokenTerms::validate`
    /// - `DurationOverflow`: Durations do not fit in u64
    /// - terms errors (40-69): see `require_valid_terms`
    pub fn initialize(
        env: Env,
        deployer: Address,
        universe: Address,
        terms_constraints: Address,
        token_terms: TokenTerms,
        duration_terms: DurationTerms,
        params: EtoParams,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::AlreadyInitialized);
        }

        deployer.require_auth();

        token_terms.validate(&env)?;
        duration_terms.validate()?;

        let max_available_tokens =
            pricing::calculate_available_tokens(&env, &token_terms.max_number_of_tokens);
        let max_available_whitelist_tokens =
            min(&token_terms.max_tokens_in_whitelist, &max_available_tokens);

        let config = EtoTermsConfig {
            universe,
            terms_constraints,
            token_terms,
            duration_terms,
            params,
            max_available_tokens,
            max_available_whitelist_tokens,
        };
        validation::require_valid_terms(&env, &config)?;

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Deployer, &deployer);
        env.storage().instance().set(&DataKey::Config, &config);

        env.events().publish(
            (Symbol::new(&env, "eto_terms_set"),),
            EtoTermsSetEvent {
                terms_constraints: config.terms_constraints.clone(),
                max_available_tokens: config.max_available_tokens.clone(),
                max_available_whitelist_tokens: config.max_available_whitelist_tokens.clone(),
            },
        );

        log!(
            &env,
            "eto terms set, available tokens {}",
            config.max_available_tokens
        );

        Ok(())
    }

    /// Re-run the cross validation against the current universe and
    /// constraints.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - the first violated rule otherwise
    pub fn require_valid_terms(env: Env) -> Result<(), Error> {
        let config = Self::config(env.clone())?;
        validation::require_valid_terms(&env, &config)
    }

    // ============================================
    // WHITELIST
    // ============================================

    /// Set, overwrite or delete whitelist tickets. A ticket with zero amount
    /// and zero price fraction is deleted.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not a whitelist admin of this instance
    /// - `LengthMismatch`: Input vectors have different lengths
    /// - `DiscountRange`: Price fraction outside (0, 1] for a non deleted ticket
    pub fn add_whitelisted(
        env: Env,
        caller: Address,
        investors: Vec<Address>,
        discount_amounts_eur_ulps: Vec<U256>,
        full_token_price_fracs: Vec<U256>,
    ) -> Result<Vec<InvestorWhitelistedEvent>, Error> {
        caller.require_auth();

        let config = Self::config(env.clone())?;
        let universe = UniverseClient::new(&env, &config.universe);
        if !universe.allowed(&caller, &ROLE_WHITELIST_ADMIN, &env.current_contract_address()) {
            return Err(Error::Unauthorized);
        }

        if investors.len() != discount_amounts_eur_ulps.len()
            || investors.len() != full_token_price_fracs.len()
        {
            return Err(Error::LengthMismatch);
        }

        // reject the whole batch before writing anything
        for (amount, frac) in discount_amounts_eur_ulps
            .iter()
            .zip(full_token_price_fracs.iter())
        {
            validation::validate_ticket(&env, &amount, &frac)?;
        }

        let zero = zero(&env);
        let mut events = Vec::new(&env);
        for ((investor, discount_amount_eur_ulps), full_token_price_frac) in investors
            .iter()
            .zip(discount_amounts_eur_ulps.iter())
            .zip(full_token_price_fracs.iter())
        {
            let key = DataKey::Whitelist(investor.clone());
            if discount_amount_eur_ulps == zero && full_token_price_frac == zero {
                env.storage().persistent().remove(&key);
            } else {
                env.storage().persistent().set(
                    &key,
                    &WhitelistTicket {
                        discount_amount_eur_ulps: discount_amount_eur_ulps.clone(),
                        full_token_price_frac: full_token_price_frac.clone(),
                    },
                );
            }

            let event = InvestorWhitelistedEvent {
                investor: investor.clone(),
                discount_amount_eur_ulps,
                full_token_price_frac,
            };
            env.events().publish(
                (Symbol::new(&env, "investor_whitelisted"), investor),
                event.clone(),
            );
            events.push_back(event);
        }

        log!(&env, "whitelist updated with {} tickets", events.len());

        Ok(events)
    }

    /// Returns (exists, discount amount, full token price fraction)
    pub fn whitelist_ticket(env: Env, investor: Address) -> (bool, U256, U256) {
        match Self::ticket(&env, &investor) {
            Some(ticket) => (
                true,
                ticket.discount_amount_eur_ulps,
                ticket.full_token_price_frac,
            ),
            None => (false, zero(&env), zero(&env)),
        }
    }

    // ============================================
    // PRICING
    // ============================================

    /// Price a contribution of `new_contribution_eur_ulps` made by
    /// `investor` who already contributed `investor_contributed_eur_ulps`.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidTokenPrice`: A discount rounds the token price to zero
    /// - `AmountTooLarge`: Contribution overflows token arithmetic
    pub fn calculate_contribution(
        env: Env,
        investor: Address,
        total_contributed_eur_ulps: U256,
        investor_contributed_eur_ulps: U256,
        new_contribution_eur_ulps: U256,
        apply_whitelist_discounts: bool,
    ) -> Result<Contribution, Error> {
        let config = Self::config(env.clone())?;
        let ticket = Self::ticket(&env, &investor);

        pricing::calculate_contribution(
            &env,
            &config,
            ticket,
            &total_contributed_eur_ulps,
            &investor_contributed_eur_ulps,
            &new_contribution_eur_ulps,
            apply_whitelist_discounts,
        )
    }

    pub fn calculate_price_fraction(env: Env, price_frac: U256) -> Result<U256, Error> {
        let config = Self::config(env.clone())?;
        Ok(pricing::calculate_price_fraction(
            &env,
            &config.token_terms,
            &price_frac,
        ))
    }

    pub fn calculate_token_amount(
        env: Env,
        total_eur_ulps: U256,
        committed_eur_ulps: U256,
    ) -> Result<U256, Error> {
        let config = Self::config(env.clone())?;
        pricing::calculate_token_amount(
            &env,
            &config.token_terms,
            &total_eur_ulps,
            &committed_eur_ulps,
        )
    }

    pub fn calculate_eur_ulps_amount(
        env: Env,
        total_tokens: U256,
        token_amount: U256,
    ) -> Result<U256, Error> {
        let config = Self::config(env.clone())?;
        Ok(pricing::calculate_eur_ulps_amount(
            &env,
            &config.token_terms,
            &total_tokens,
            &token_amount,
        ))
    }

    pub fn equity_tokens_to_shares_frac(env: Env, token_amount: U256) -> Result<U256, Error> {
        let config = Self::config(env.clone())?;
        Ok(pricing::equity_tokens_to_shares_frac(
            &env,
            &config.token_terms,
            &token_amount,
        ))
    }

    pub fn calculate_max_funds_eur_ulps(env: Env) -> Result<U256, Error> {
        let config = Self::config(env.clone())?;
        Ok(pricing::calculate_max_funds_eur_ulps(&env, &config))
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    pub fn config(env: Env) -> Result<EtoTermsConfig, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(Error::NotInitialized)
    }

    pub fn deployer(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Deployer)
            .ok_or(Error::NotInitialized)
    }

    pub fn universe(env: Env) -> Result<Address, Error> {
        Ok(Self::config(env)?.universe)
    }

    pub fn terms_constraints(env: Env) -> Result<Address, Error> {
        Ok(Self::config(env)?.terms_constraints)
    }

    pub fn token_terms(env: Env) -> Result<TokenTerms, Error> {
        Ok(Self::config(env)?.token_terms)
    }

    pub fn duration_terms(env: Env) -> Result<DurationTerms, Error> {
        Ok(Self::config(env)?.duration_terms)
    }

    pub fn min_ticket_eur_ulps(env: Env) -> Result<U256, Error> {
        Ok(Self::config(env)?.params.min_ticket_eur_ulps)
    }

    /// 0 means no max ticket
    pub fn max_ticket_eur_ulps(env: Env) -> Result<U256, Error> {
        Ok(Self::config(env)?.params.max_ticket_eur_ulps)
    }

    pub fn whitelist_discount_frac(env: Env) -> Result<U256, Error> {
        Ok(Self::config(env)?.params.whitelist_discount_frac)
    }

    pub fn public_discount_frac(env: Env) -> Result<U256, Error> {
        Ok(Self::config(env)?.params.public_discount_frac)
    }

    pub fn enable_transfers_on_success(env: Env) -> Result<bool, Error> {
        Ok(Self::config(env)?.params.enable_transfers_on_success)
    }

    pub fn investor_offering_document_url(env: Env) -> Result<String, Error> {
        Ok(Self::config(env)?.params.investor_offering_document_url)
    }

    pub fn tokenholder_rights(env: Env) -> Result<TokenholderRights, Error> {
        Ok(Self::config(env)?.params.tokenholder_rights)
    }

    pub fn max_available_tokens(env: Env) -> Result<U256, Error> {
        Ok(Self::config(env)?.max_available_tokens)
    }

    pub fn max_available_whitelist_tokens(env: Env) -> Result<U256, Error> {
        Ok(Self::config(env)?.max_available_whitelist_tokens)
    }

    pub fn token_participation_fee_frac(env: Env) -> U256 {
        u256(&env, TOKEN_PARTICIPATION_FEE_FRAC)
    }
}

impl EtoTerms {
    fn ticket(env: &Env, investor: &Address) -> Option<WhitelistTicket> {
        env.storage()
            .persistent()
            .get(&DataKey::Whitelist(investor.clone()))
    }
}
