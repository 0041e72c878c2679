use crop_common::{ttl, Authority, InsuranceError};
use soroban_sdk::{contracttype, Env, String};

use crate::premium::DEFAULT_BASE_PREMIUM_RATE;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    BasePremiumRate,
    LocationRisk(String),
    CropRisk(String),
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn set_config(env: &Env, authority: &Authority) {
    env.storage().instance().set(&DataKey::Config, authority);
}

pub fn get_config(env: &Env) -> Result<Authority, InsuranceError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(InsuranceError::NotInitialized)
}

pub fn get_base_premium_rate(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::BasePremiumRate)
        .unwrap_or(DEFAULT_BASE_PREMIUM_RATE)
}

pub fn set_base_premium_rate(env: &Env, rate: u32) {
    env.storage()
        .instance()
        .set(&DataKey::BasePremiumRate, &rate);
}

/// An explicit zero is a configured factor, only a missing entry falls back.
pub fn lookup_or_default(env: &Env, key: &DataKey, default: u32) -> u32 {
    match env.storage().persistent().get::<DataKey, u32>(key) {
        Some(factor) => factor,
        None => default,
    }
}

pub fn set_risk_factor(env: &Env, key: &DataKey, factor: u32) {
    env.storage().persistent().set(key, &factor);
    ttl::extend_record(env, key);
}
