use crop_common::{ttl, InsuranceError};
use soroban_sdk::Env;

use crate::types::{DataKey, Policy, SettlementConfig};

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &SettlementConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> Result<SettlementConfig, InsuranceError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(InsuranceError::NotInitialized)
}

pub fn get_policy_count(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::PolicyCount).unwrap_or(0)
}

pub fn set_policy_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::PolicyCount, &count);
}

pub fn set_policy(env: &Env, policy: &Policy) {
    let key = DataKey::Policy(policy.id);
    env.storage().persistent().set(&key, policy);
    ttl::extend_record(env, &key);
}

pub fn get_policy(env: &Env, policy_id: u64) -> Option<Policy> {
    env.storage().persistent().get(&DataKey::Policy(policy_id))
}
