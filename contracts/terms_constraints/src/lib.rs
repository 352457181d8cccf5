#![no_std]

mod error;
mod events;
mod storage;

pub use error::Error;
pub use events::ConstraintsSetEvent;
pub use storage::Constraints;

use storage::DataKey;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Symbol, U256};

/// Product level bounds every offering referencing this instance must obey.
/// Set once at initialization, immutable afterwards.
#[contract]
pub struct TermsConstraints;

#[contractimpl]
impl TermsConstraints {
    /// Initialize the constraints, signed by the platform `admin`
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    /// - `InvalidDurationBounds`: Some min duration exceeds its max
    /// - `InvalidTicketBounds`: Min ticket exceeds a non-zero max ticket
    /// - `InvalidInvestmentBounds`: Min investment exceeds a non-zero max investment
    pub fn initialize(env: Env, admin: Address, constraints: Constraints) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        validate_constraints(&env, &constraints)?;

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage()
            .instance()
            .set(&DataKey::Constraints, &constraints);

        env.events().publish(
            (Symbol::new(&env, "constraints_set"),),
            ConstraintsSetEvent {
                name: constraints.name.clone(),
                jurisdiction: constraints.jurisdiction.clone(),
                can_set_transferability: constraints.can_set_transferability,
            },
        );

        log!(&env, "terms constraints {} initialized", constraints.name);

        Ok(())
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    pub fn admin(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)
    }

    pub fn constraints(env: Env) -> Result<Constraints, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Constraints)
            .ok_or(Error::NotInitialized)
    }

    pub fn can_set_transferability(env: Env) -> Result<bool, Error> {
        Ok(Self::constraints(env)?.can_set_transferability)
    }

    pub fn name(env: Env) -> Result<String, Error> {
        Ok(Self::constraints(env)?.name)
    }

    pub fn max_investment_amount_eur_ulps(env: Env) -> Result<U256, Error> {
        Ok(Self::constraints(env)?.max_investment_amount_eur_ulps)
    }
}

fn validate_constraints(env: &Env, c: &Constraints) -> Result<(), Error> {
    let duration_pairs = [
        (c.min_whitelist_duration, c.max_whitelist_duration),
        (c.min_public_duration, c.max_public_duration),
        (c.min_offer_duration, c.max_offer_duration),
        (c.min_signing_duration, c.max_signing_duration),
        (c.min_claim_duration, c.max_claim_duration),
    ];
    if duration_pairs.iter().any(|(min, max)| min > max) {
        return Err(Error::InvalidDurationBounds);
    }

    // zero max is unlimited
    let zero = U256::from_u32(env, 0);
    if c.max_ticket_size_eur_ulps != zero && c.min_ticket_size_eur_ulps > c.max_ticket_size_eur_ulps
    {
        return Err(Error::InvalidTicketBounds);
    }
    if c.max_investment_amount_eur_ulps != zero
        && c.min_investment_amount_eur_ulps > c.max_investment_amount_eur_ulps
    {
        return Err(Error::InvalidInvestmentBounds);
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use soroban_sdk::{testutils::Address as _, Env};

    const SCALE: u128 = 1_000_000_000_000_000_000;
    const DAY: u64 = 24 * 3600;

    fn default_constraints(env: &Env) -> Constraints {
        Constraints {
            name: String::from_str(env, "Retail EU"),
            jurisdiction: String::from_str(env, "DE"),
            offering_document_type: String::from_str(env, "Prospectus"),
            asset_type: String::from_str(env, "Security"),
            can_set_transferability: true,
            has_nominee: true,
            min_ticket_size_eur_ulps: U256::from_u128(env, 100 * SCALE),
            max_ticket_size_eur_ulps: U256::from_u32(env, 0),
            min_investment_amount_eur_ulps: U256::from_u32(env, 0),
            max_investment_amount_eur_ulps: U256::from_u128(env, 5_000_000 * SCALE),
            min_whitelist_duration: 0,
            max_whitelist_duration: 30 * DAY,
            min_public_duration: 0,
            max_public_duration: 60 * DAY,
            min_offer_duration: DAY,
            max_offer_duration: 90 * DAY,
            min_signing_duration: 14 * DAY,
            max_signing_duration: 60 * DAY,
            min_claim_duration: 7 * DAY,
            max_claim_duration: 30 * DAY,
        }
    }

    #[test]
    fn test_initialize() {
        let env = Env::default();
        env.mock_all_auths();
        let contract_id = env.register_contract(None, TermsConstraints);
        let client = TermsConstraintsClient::new(&env, &contract_id);
        let admin = Address::generate(&env);

        let constraints = default_constraints(&env);
        client.initialize(&admin, &constraints);

        assert_eq!(client.constraints(), constraints);
        assert_eq!(client.admin(), admin);
        assert!(client.can_set_transferability());
        assert_eq!(client.name(), String::from_str(&env, "Retail EU"));
        assert_eq!(
            client.max_investment_amount_eur_ulps(),
            U256::from_u128(&env, 5_000_000 * SCALE)
        );

        let result = client.try_initialize(&admin, &constraints);
        assert_eq!(result, Err(Ok(Error::AlreadyInitialized)));
    }

    #[test]
    fn test_not_initialized() {
        let env = Env::default();
        env.mock_all_auths();
        let contract_id = env.register_contract(None, TermsConstraints);
        let client = TermsConstraintsClient::new(&env, &contract_id);

        assert_eq!(client.try_constraints(), Err(Ok(Error::NotInitialized)));
    }

    #[test]
    fn test_invalid_duration_bounds() {
        let env = Env::default();
        env.mock_all_auths();
        let contract_id = env.register_contract(None, TermsConstraints);
        let client = TermsConstraintsClient::new(&env, &contract_id);
        let admin = Address::generate(&env);

        let mut constraints = default_constraints(&env);
        constraints.min_claim_duration = constraints.max_claim_duration + 1;

        let result = client.try_initialize(&admin, &constraints);
        assert_eq!(result, Err(Ok(Error::InvalidDurationBounds)));
        // nothing was stored
        assert_eq!(client.try_constraints(), Err(Ok(Error::NotInitialized)));
    }

    #[test]
    fn test_ticket_bounds() {
        let env = Env::default();
        env.mock_all_auths();
        let contract_id = env.register_contract(None, TermsConstraints);
        let client = TermsConstraintsClient::new(&env, &contract_id);
        let admin = Address::generate(&env);

        let mut constraints = default_constraints(&env);
        constraints.max_ticket_size_eur_ulps = U256::from_u128(&env, 99 * SCALE);
        let result = client.try_initialize(&admin, &constraints);
        assert_eq!(result, Err(Ok(Error::InvalidTicketBounds)));

        // unlimited max ticket accepts any min ticket
        constraints.max_ticket_size_eur_ulps = U256::from_u32(&env, 0);
        constraints.min_ticket_size_eur_ulps = U256::from_u128(&env, 1_000_000 * SCALE);
        client.initialize(&admin, &constraints);
    }

    #[test]
    fn test_investment_bounds() {
        let env = Env::default();
        env.mock_all_auths();
        let contract_id = env.register_contract(None, TermsConstraints);
        let client = TermsConstraintsClient::new(&env, &contract_id);
        let admin = Address::generate(&env);

        let mut constraints = default_constraints(&env);
        constraints.min_investment_amount_eur_ulps = U256::from_u128(&env, 5_000_001 * SCALE);
        let result = client.try_initialize(&admin, &constraints);
        assert_eq!(result, Err(Ok(Error::InvalidInvestmentBounds)));
    }

    #[test]
    #[should_panic]
    fn test_initialize_requires_admin_auth() {
        let env = Env::default();
        let contract_id = env.register_contract(None, TermsConstraints);
        let client = TermsConstraintsClient::new(&env, &contract_id);
        let admin = Address::generate(&env);

        // no mocked auths, admin signature is missing
        client.initialize(&admin, &default_constraints(&env));
    }
}
