#![no_std]

//! Prices coverage against the premium calculator and decides payout
//! eligibility from oracle-confirmed weather events. No tokens move here;
//! a payout component consumes [`Eligibility`].

use crop_common::{ttl, InsuranceError};
use soroban_sdk::{contract, contractimpl, contractmeta, symbol_short, Address, Env};

mod interfaces;
mod storage;
mod types;

use interfaces::{forward, FarmerRegistryClient, PremiumCalculatorClient, WeatherOracleClient};
pub use types::{Eligibility, Policy, SettlementConfig};

contractmeta!(
    key = "Description",
    val = "Crop insurance policy pricing and weather-event payout eligibility"
);

#[contract]
pub struct SettlementContract;

#[contractimpl]
impl SettlementContract {
    /// Wire the registry, calculator and oracle contracts. One-time, and
    /// the owner must sign so nobody else can choose which oracle
    /// eligibility trusts.
    pub fn initialize(
        env: Env,
        owner: Address,
        registry: Address,
        calculator: Address,
        oracle: Address,
    ) -> Result<(), InsuranceError> {
        if storage::has_config(&env) {
            return Err(InsuranceError::AlreadyInitialized);
        }
        owner.require_auth();

        storage::set_config(
            &env,
            &SettlementConfig {
                owner,
                registry,
                calculator,
                oracle,
            },
        );
        ttl::extend_instance(&env);
        Ok(())
    }

    /// Buy coverage for a registered farm.
    ///
    /// The premium is priced now, from the farm's location and crop type,
    /// and stored with the policy; later risk-factor changes do not reprice
    /// it.
    ///
    /// # Arguments
    /// * `holder` - Must be the wallet the farm was registered with
    /// * `coverage_amount` - Amount covered, must be positive
    /// * `start_time` / `end_time` - Inclusive coverage window
    pub fn purchase_coverage(
        env: Env,
        holder: Address,
        farmer_id: u64,
        coverage_amount: i128,
        start_time: u64,
        end_time: u64,
    ) -> Result<u64, InsuranceError> {
        holder.require_auth();

        if coverage_amount <= 0 || start_time > end_time {
            return Err(InsuranceError::InvalidInput);
        }

        let config = storage::get_config(&env)?;

        let registry = FarmerRegistryClient::new(&env, &config.registry);
        let farmer = forward(registry.try_get_farmer(&farmer_id), InsuranceError::NotFound)?;
        if farmer.wallet != holder {
            return Err(InsuranceError::Unauthorized);
        }

        let calculator = PremiumCalculatorClient::new(&env, &config.calculator);
        let premium = forward(
            calculator.try_calculate_premium(&farmer.location, &farmer.crop_type, &coverage_amount),
            InsuranceError::NotInitialized,
        )?;

        let policy_id = storage::get_policy_count(&env)
            .checked_add(1)
            .ok_or(InsuranceError::Overflow)?;

        let policy = Policy {
            id: policy_id,
            farmer_id,
            holder: holder.clone(),
            location: farmer.location,
            crop_type: farmer.crop_type,
            coverage_amount,
            premium,
            start_time,
            end_time,
            created_at: env.ledger().timestamp(),
        };
        storage::set_policy(&env, &policy);
        storage::set_policy_count(&env, policy_id);
        ttl::extend_instance(&env);

        env.events().publish(
            (symbol_short!("policy"), symbol_short!("buy")),
            (policy_id, farmer_id, holder, premium),
        );
        Ok(policy_id)
    }

    pub fn get_owner(env: Env) -> Result<Address, InsuranceError> {
        Ok(storage::get_config(&env)?.owner)
    }

    pub fn get_policy(env: Env, policy_id: u64) -> Result<Policy, InsuranceError> {
        storage::get_policy(&env, policy_id).ok_or(InsuranceError::NotFound)
    }

    pub fn get_policy_count(env: Env) -> u64 {
        storage::get_policy_count(&env)
    }

    /// Evaluate a policy against the oracle event `event_id` at the policy's
    /// location.
    ///
    /// Eligible when the event is confirmed, its window overlaps the
    /// coverage window and the policy carries a non-zero premium. Read-only.
    pub fn check_eligibility(
        env: Env,
        policy_id: u64,
        event_id: u64,
    ) -> Result<Eligibility, InsuranceError> {
        let config = storage::get_config(&env)?;
        let policy = storage::get_policy(&env, policy_id).ok_or(InsuranceError::NotFound)?;

        let oracle = WeatherOracleClient::new(&env, &config.oracle);
        let event = forward(
            oracle.try_get_weather_event(&policy.location, &event_id),
            InsuranceError::NotFound,
        )?;

        let eligible = event.confirmed
            && event.overlaps(policy.start_time, policy.end_time)
            && policy.premium > 0;

        Ok(Eligibility {
            policy_id,
            event_id,
            eligible,
            premium: policy.premium,
            coverage_amount: policy.coverage_amount,
        })
    }
}
