use soroban_sdk::{contracttype, symbol_short, Address, Symbol};

/// Interface id under which terms constraints instances are registered
pub const INTERFACE_TERMS_CONSTRAINTS: Symbol = symbol_short!("eto_tc");

/// Role allowing an address to edit whitelists of a terms instance
pub const ROLE_WHITELIST_ADMIN: Symbol = symbol_short!("wl_admin");

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Initialized,
    Interface(Symbol, Address),           // (interface, instance) -> bool
    ScopedRole(Symbol, Address, Address), // (role, subject, object) -> bool
    GlobalRole(Symbol, Address),          // (role, subject) -> bool
}
