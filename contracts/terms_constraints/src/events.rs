use soroban_sdk::{contracttype, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConstraintsSetEvent {
    pub name: String,
    pub jurisdiction: String,
    pub can_set_transferability: bool,
}
