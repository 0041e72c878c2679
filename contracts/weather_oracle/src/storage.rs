use crate::types::{DataKey, WeatherObservation};
use crop_common::{ttl, Authority, InsuranceError, WeatherEvent};
use soroban_sdk::{Env, String};

pub struct Storage;

impl Storage {
    pub fn has_config(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Config)
    }

    pub fn set_config(env: &Env, authority: &Authority) {
        env.storage().instance().set(&DataKey::Config, authority);
        ttl::extend_instance(env);
    }

    pub fn get_config(env: &Env) -> Result<Authority, InsuranceError> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(InsuranceError::NotInitialized)
    }

    pub fn get_observation_count(env: &Env, location: &String) -> u64 {
        env.storage()
            .persistent()
            .get(&DataKey::ObservationCount(location.clone()))
            .unwrap_or(0)
    }

    /// Stores the observation under its sequence and bumps the location counter.
    pub fn append_observation(env: &Env, observation: &WeatherObservation) {
        let key = DataKey::Observation(observation.location.clone(), observation.sequence);
        env.storage().persistent().set(&key, observation);
        ttl::extend_record(env, &key);

        let count_key = DataKey::ObservationCount(observation.location.clone());
        env.storage()
            .persistent()
            .set(&count_key, &observation.sequence);
        ttl::extend_record(env, &count_key);
    }

    pub fn get_observation(env: &Env, location: &String, sequence: u64) -> Option<WeatherObservation> {
        env.storage()
            .persistent()
            .get(&DataKey::Observation(location.clone(), sequence))
    }

    pub fn get_event_count(env: &Env, location: &String) -> u64 {
        env.storage()
            .persistent()
            .get(&DataKey::EventCount(location.clone()))
            .unwrap_or(0)
    }

    pub fn set_event_count(env: &Env, location: &String, count: u64) {
        let key = DataKey::EventCount(location.clone());
        env.storage().persistent().set(&key, &count);
        ttl::extend_record(env, &key);
    }

    pub fn set_event(env: &Env, event: &WeatherEvent) {
        let key = DataKey::Event(event.location.clone(), event.id);
        env.storage().persistent().set(&key, event);
        ttl::extend_record(env, &key);
    }

    pub fn get_event(env: &Env, location: &String, event_id: u64) -> Option<WeatherEvent> {
        env.storage()
            .persistent()
            .get(&DataKey::Event(location.clone(), event_id))
    }
}
