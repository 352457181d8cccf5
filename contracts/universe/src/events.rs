use soroban_sdk::{contracttype, Address, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InterfaceSetEvent {
    pub interface: Symbol,
    pub instance: Address,
    pub set: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleSetEvent {
    pub subject: Address,
    pub role: Symbol,
    pub object: Option<Address>,
    pub allowed: bool,
}
