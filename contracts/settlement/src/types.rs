use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SettlementConfig {
    pub owner: Address,
    pub registry: Address,
    pub calculator: Address,
    pub oracle: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Policy {
    pub id: u64,
    pub farmer_id: u64,
    pub holder: Address,
    pub location: String,
    pub crop_type: String,
    pub coverage_amount: i128,
    pub premium: i128,         // fixed-point, see premium_calculator
    pub start_time: u64,
    pub end_time: u64,
    pub created_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Eligibility {
    pub policy_id: u64,
    pub event_id: u64,
    pub eligible: bool,
    pub premium: i128,
    pub coverage_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    PolicyCount,
    Policy(u64),
}
