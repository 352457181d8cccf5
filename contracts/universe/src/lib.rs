#![no_std]

mod error;
mod events;
mod storage;

pub use error::Error;
pub use events::{InterfaceSetEvent, RoleSetEvent};
pub use storage::{INTERFACE_TERMS_CONSTRAINTS, ROLE_WHITELIST_ADMIN};

use storage::DataKey;

use soroban_sdk::{contract, contractimpl, log, Address, Env, Symbol};

/// Trusted registry of platform contracts and the role table that gates
/// administrative calls on them.
#[contract]
pub struct Universe;

#[contractimpl]
impl Universe {
    // ============================================
    // INITIALIZATION
    // ============================================

    /// Initialize the universe
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Admin, &admin);

        Ok(())
    }

    // ============================================
    // INTERFACE COLLECTIONS
    // ============================================

    /// Register or deregister `instance` as an implementation of `interface`
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    pub fn set_collection_interface(
        env: Env,
        interface: Symbol,
        instance: Address,
        set: bool,
    ) -> Result<(), Error> {
        let admin = Self::admin(env.clone())?;
        admin.require_auth();

        let key = DataKey::Interface(interface.clone(), instance.clone());
        if set {
            env.storage().persistent().set(&key, &true);
        } else {
            env.storage().persistent().remove(&key);
        }

        log!(&env, "interface {} instance {} set {}", interface, instance, set);

        env.events().publish(
            (Symbol::new(&env, "interface_set"), interface.clone()),
            InterfaceSetEvent {
                interface,
                instance,
                set,
            },
        );

        Ok(())
    }

    pub fn is_interface_instance(
        env: Env,
        interface: Symbol,
        instance: Address,
    ) -> bool {
        env.storage()
            .persistent()
            .get::<DataKey, bool>(&DataKey::Interface(interface, instance))
            .unwrap_or(false)
    }

    // ============================================
    // ACCESS POLICY
    // ============================================

    /// Grant or revoke `role` for `subject`. With `object` set the grant is
    /// scoped to that contract, otherwise it applies to every object.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    pub fn set_user_role(
        env: Env,
        subject: Address,
        role: Symbol,
        object: Option<Address>,
        allowed: bool,
    ) -> Result<(), Error> {
        let admin = Self::admin(env.clone())?;
        admin.require_auth();

        let key = match &object {
            Some(object) => DataKey::ScopedRole(role.clone(), subject.clone(), object.clone()),
            None => DataKey::GlobalRole(role.clone(), subject.clone()),
        };
        if allowed {
            env.storage().persistent().set(&key, &true);
        } else {
            env.storage().persistent().remove(&key);
        }

        env.events().publish(
            (Symbol::new(&env, "role_set"), role.clone(), subject.clone()),
            RoleSetEvent {
                subject,
                role,
                object,
                allowed,
            },
        );

        Ok(())
    }

    /// Check whether `subject` holds `role` on `object`, either directly or
    /// through a global grant
    pub fn allowed(env: Env, subject: Address, role: Symbol, object: Address) -> bool {
        let scoped = env
            .storage()
            .persistent()
            .get::<DataKey, bool>(&DataKey::ScopedRole(role.clone(), subject.clone(), object))
            .unwrap_or(false);
        if scoped {
            return true;
        }

        env.storage()
            .persistent()
            .get::<DataKey, bool>(&DataKey::GlobalRole(role, subject))
            .unwrap_or(false)
    }

    pub fn admin(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use soroban_sdk::{testutils::Address as _, Address, Env};

    fn setup(env: &Env) -> (UniverseClient<'_>, Address) {
        let contract_id = env.register_contract(None, Universe);
        let client = UniverseClient::new(env, &contract_id);
        let admin = Address::generate(env);
        client.initialize(&admin);
        (client, admin)
    }

    #[test]
    fn test_initialize() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, admin) = setup(&env);

        assert_eq!(client.admin(), admin);
        let result = client.try_initialize(&admin);
        assert_eq!(result, Err(Ok(Error::AlreadyInitialized)));
    }

    #[test]
    fn test_not_initialized() {
        let env = Env::default();
        env.mock_all_auths();
        let contract_id = env.register_contract(None, Universe);
        let client = UniverseClient::new(&env, &contract_id);

        let instance = Address::generate(&env);
        let result =
            client.try_set_collection_interface(&INTERFACE_TERMS_CONSTRAINTS, &instance, &true);
        assert_eq!(result, Err(Ok(Error::NotInitialized)));
    }

    #[test]
    fn test_collection_interface() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, _) = setup(&env);

        let instance = Address::generate(&env);
        assert!(!client.is_interface_instance(&INTERFACE_TERMS_CONSTRAINTS, &instance));

        client.set_collection_interface(&INTERFACE_TERMS_CONSTRAINTS, &instance, &true);
        assert!(client.is_interface_instance(&INTERFACE_TERMS_CONSTRAINTS, &instance));

        // other interfaces are not affected
        let other = Symbol::new(&env, "other");
        assert!(!client.is_interface_instance(&other, &instance));

        client.set_collection_interface(&INTERFACE_TERMS_CONSTRAINTS, &instance, &false);
        assert!(!client.is_interface_instance(&INTERFACE_TERMS_CONSTRAINTS, &instance));
    }

    #[test]
    fn test_scoped_role() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, _) = setup(&env);

        let subject = Address::generate(&env);
        let object = Address::generate(&env);
        let other_object = Address::generate(&env);

        client.set_user_role(&subject, &ROLE_WHITELIST_ADMIN, &Some(object.clone()), &true);
        assert!(client.allowed(&subject, &ROLE_WHITELIST_ADMIN, &object));
        assert!(!client.allowed(&subject, &ROLE_WHITELIST_ADMIN, &other_object));

        client.set_user_role(&subject, &ROLE_WHITELIST_ADMIN, &Some(object.clone()), &false);
        assert!(!client.allowed(&subject, &ROLE_WHITELIST_ADMIN, &object));
    }

    #[test]
    fn test_global_role() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, _) = setup(&env);

        let subject = Address::generate(&env);
        let object = Address::generate(&env);

        client.set_user_role(&subject, &ROLE_WHITELIST_ADMIN, &None, &true);
        assert!(client.allowed(&subject, &ROLE_WHITELIST_ADMIN, &object));
        assert!(client.allowed(&subject, &ROLE_WHITELIST_ADMIN, &Address::generate(&env)));
    }

    #[test]
    #[should_panic]
    fn test_set_role_requires_admin_auth() {
        let env = Env::default();
        let contract_id = env.register_contract(None, Universe);
        let client = UniverseClient::new(&env, &contract_id);
        let admin = Address::generate(&env);

        env.mock_all_auths();
        client.initialize(&admin);

        // drop mocked auths, admin signature is now missing
        env.set_auths(&[]);
        let subject = Address::generate(&env);
        client.set_user_role(&subject, &ROLE_WHITELIST_ADMIN, &None, &true);
    }
}
