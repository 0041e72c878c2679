#![no_std]
use crop_common::{
    require_authorized_provider, require_owner, ttl, Authority, InsuranceError, WeatherEvent,
    WeatherEventType,
};
use soroban_sdk::{contract, contractimpl, contractmeta, symbol_short, Address, Env, String, Vec};

mod storage;
mod types;

use storage::Storage;
pub use types::{WeatherObservation, MAX_HUMIDITY, MAX_SEVERITY, MIN_SEVERITY};

contractmeta!(
    key = "Description",
    val = "Provider-attested weather observations and events for crop insurance"
);

#[contract]
pub struct WeatherOracleContract;

#[contractimpl]
impl WeatherOracleContract {
    pub fn initialize(env: Env, owner: Address, providers: Vec<Address>) -> Result<(), InsuranceError> {
        if Storage::has_config(&env) {
            return Err(InsuranceError::AlreadyInitialized);
        }
        owner.require_auth();

        let authority = Authority::with_providers(&env, owner, &providers);
        Storage::set_config(&env, &authority);
        Ok(())
    }

    pub fn authorize_provider(env: Env, caller: Address, provider: Address) -> Result<(), InsuranceError> {
        let mut authority = Storage::get_config(&env)?;
        require_owner(&env, &authority, &caller)?;

        authority.authorize_provider(provider.clone());
        Storage::set_config(&env, &authority);

        env.events()
            .publish((symbol_short!("provider"), symbol_short!("auth")), provider);
        Ok(())
    }

    /// Stop `provider` from submitting or confirming anything new.
    ///
    /// Observations and events it already recorded stay as they are.
    pub fn revoke_provider(env: Env, caller: Address, provider: Address) -> Result<(), InsuranceError> {
        let mut authority = Storage::get_config(&env)?;
        require_owner(&env, &authority, &caller)?;

        authority.revoke_provider(provider.clone());
        Storage::set_config(&env, &authority);

        env.events()
            .publish((symbol_short!("provider"), symbol_short!("revoke")), provider);
        Ok(())
    }

    pub fn is_authorized_provider(env: Env, provider: Address) -> bool {
        Storage::get_config(&env)
            .map(|authority| authority.is_authorized_provider(&provider))
            .unwrap_or(false)
    }

    pub fn get_owner(env: Env) -> Result<Address, InsuranceError> {
        Ok(Storage::get_config(&env)?.owner)
    }

    /// Append a raw observation for `location`.
    ///
    /// Observations are keyed by a per-location sequence, so several
    /// submissions in the same ledger never overwrite each other.
    pub fn submit_weather_data(
        env: Env,
        caller: Address,
        location: String,
        temperature: i32,
        rainfall: u32,
        humidity: u32,
        wind_speed: u32,
    ) -> Result<u64, InsuranceError> {
        let authority = Storage::get_config(&env)?;
        require_authorized_provider(&env, &authority, &caller)?;

        if humidity > MAX_HUMIDITY {
            return Err(InsuranceError::InvalidInput);
        }

        let sequence = Storage::get_observation_count(&env, &location)
            .checked_add(1)
            .ok_or(InsuranceError::Overflow)?;

        let observation = WeatherObservation {
            sequence,
            location: location.clone(),
            temperature,
            rainfall,
            humidity,
            wind_speed,
            reported_by: caller.clone(),
            timestamp: env.ledger().timestamp(),
        };
        Storage::append_observation(&env, &observation);
        ttl::extend_instance(&env);

        env.events().publish(
            (symbol_short!("weather"), symbol_short!("data"), location),
            (sequence, caller),
        );
        Ok(sequence)
    }

    pub fn get_weather_data(
        env: Env,
        location: String,
        sequence: u64,
    ) -> Result<WeatherObservation, InsuranceError> {
        Storage::get_observation(&env, &location, sequence).ok_or(InsuranceError::NotFound)
    }

    pub fn get_latest_weather_data(env: Env, location: String) -> Result<WeatherObservation, InsuranceError> {
        let sequence = Storage::get_observation_count(&env, &location);
        Storage::get_observation(&env, &location, sequence).ok_or(InsuranceError::NotFound)
    }

    pub fn get_observation_count(env: Env, location: String) -> u64 {
        Storage::get_observation_count(&env, &location)
    }

    /// Report a weather event in the unconfirmed state.
    ///
    /// # Arguments
    /// * `severity` - 1 (mild) to 5 (catastrophic)
    /// * `start_time` / `end_time` - Inclusive window, start must not follow end
    ///
    /// # Returns
    /// The event id, scoped to `location`
    pub fn report_weather_event(
        env: Env,
        caller: Address,
        location: String,
        event_type: WeatherEventType,
        severity: u32,
        start_time: u64,
        end_time: u64,
    ) -> Result<u64, InsuranceError> {
        let authority = Storage::get_config(&env)?;
        require_authorized_provider(&env, &authority, &caller)?;

        if !(MIN_SEVERITY..=MAX_SEVERITY).contains(&severity) || start_time > end_time {
            return Err(InsuranceError::InvalidInput);
        }

        let event_id = Storage::get_event_count(&env, &location)
            .checked_add(1)
            .ok_or(InsuranceError::Overflow)?;

        let event = WeatherEvent {
            id: event_id,
            location: location.clone(),
            event_type,
            severity,
            start_time,
            end_time,
            reported_by: caller.clone(),
            reported_at: env.ledger().timestamp(),
            confirmed: false,
            confirmed_by: None,
            confirmed_at: None,
        };
        Storage::set_event(&env, &event);
        Storage::set_event_count(&env, &location, event_id);
        ttl::extend_instance(&env);

        env.events().publish(
            (symbol_short!("event"), symbol_short!("report"), location),
            (event_id, event_type, severity, caller),
        );
        Ok(event_id)
    }

    /// Attest a reported event. Any authorized provider may confirm,
    /// including the reporter; an event is confirmed exactly once.
    pub fn confirm_weather_event(
        env: Env,
        caller: Address,
        location: String,
        event_id: u64,
    ) -> Result<(), InsuranceError> {
        let authority = Storage::get_config(&env)?;
        require_authorized_provider(&env, &authority, &caller)?;

        let mut event =
            Storage::get_event(&env, &location, event_id).ok_or(InsuranceError::NotFound)?;
        if event.confirmed {
            return Err(InsuranceError::AlreadyConfirmed);
        }

        event.confirmed = true;
        event.confirmed_by = Some(caller.clone());
        event.confirmed_at = Some(env.ledger().timestamp());
        Storage::set_event(&env, &event);
        ttl::extend_instance(&env);

        env.events().publish(
            (symbol_short!("event"), symbol_short!("confirm"), location),
            (event_id, caller),
        );
        Ok(())
    }

    pub fn get_weather_event(
        env: Env,
        location: String,
        event_id: u64,
    ) -> Result<WeatherEvent, InsuranceError> {
        Storage::get_event(&env, &location, event_id).ok_or(InsuranceError::NotFound)
    }

    pub fn get_event_count(env: Env, location: String) -> u64 {
        Storage::get_event_count(&env, &location)
    }
}
