#![no_std]

use crop_common::{require_owner, ttl, Authority, InsuranceError};
use soroban_sdk::{contract, contractimpl, contractmeta, symbol_short, Address, Env, String};

mod premium;
mod storage;

pub use premium::{
    compute_premium, DEFAULT_BASE_PREMIUM_RATE, NEUTRAL_RISK_FACTOR, PREMIUM_DECIMALS,
    PREMIUM_SCALE, RISK_SCALE,
};
use storage::DataKey;

contractmeta!(
    key = "Description",
    val = "Owner-configured risk factors and fixed-point crop premium pricing"
);

#[contract]
pub struct PremiumCalculatorContract;

#[contractimpl]
impl PremiumCalculatorContract {
    /// Initialize with the owner allowed to tune risk factors.
    ///
    /// The base premium rate starts at 500 basis points.
    pub fn initialize(env: Env, owner: Address) -> Result<(), InsuranceError> {
        if storage::has_config(&env) {
            return Err(InsuranceError::AlreadyInitialized);
        }
        owner.require_auth();

        storage::set_config(&env, &Authority::new(&env, owner));
        storage::set_base_premium_rate(&env, DEFAULT_BASE_PREMIUM_RATE);
        ttl::extend_instance(&env);
        Ok(())
    }

    pub fn set_location_risk_factor(
        env: Env,
        caller: Address,
        location: String,
        factor: u32,
    ) -> Result<(), InsuranceError> {
        let authority = storage::get_config(&env)?;
        require_owner(&env, &authority, &caller)?;

        storage::set_risk_factor(&env, &DataKey::LocationRisk(location.clone()), factor);
        ttl::extend_instance(&env);

        env.events()
            .publish((symbol_short!("risk"), symbol_short!("location"), location), factor);
        Ok(())
    }

    pub fn set_crop_risk_factor(
        env: Env,
        caller: Address,
        crop_type: String,
        factor: u32,
    ) -> Result<(), InsuranceError> {
        let authority = storage::get_config(&env)?;
        require_owner(&env, &authority, &caller)?;

        storage::set_risk_factor(&env, &DataKey::CropRisk(crop_type.clone()), factor);
        ttl::extend_instance(&env);

        env.events()
            .publish((symbol_short!("risk"), symbol_short!("crop"), crop_type), factor);
        Ok(())
    }

    /// Rate in basis points (100 = 1%).
    pub fn set_base_premium_rate(env: Env, caller: Address, rate: u32) -> Result<(), InsuranceError> {
        let authority = storage::get_config(&env)?;
        require_owner(&env, &authority, &caller)?;

        storage::set_base_premium_rate(&env, rate);
        ttl::extend_instance(&env);

        env.events()
            .publish((symbol_short!("risk"), symbol_short!("base")), rate);
        Ok(())
    }

    /// Price `coverage_amount` for a location and crop.
    ///
    /// Read-only. The result is fixed-point with `PREMIUM_DECIMALS`
    /// decimals, truncated: 10_000 coverage at the default factors prices
    /// to `50_000` (50.000).
    pub fn calculate_premium(
        env: Env,
        location: String,
        crop_type: String,
        coverage_amount: i128,
    ) -> Result<i128, InsuranceError> {
        let location_factor = storage::lookup_or_default(
            &env,
            &DataKey::LocationRisk(location),
            NEUTRAL_RISK_FACTOR,
        );
        let crop_factor =
            storage::lookup_or_default(&env, &DataKey::CropRisk(crop_type), NEUTRAL_RISK_FACTOR);

        compute_premium(
            storage::get_base_premium_rate(&env),
            location_factor,
            crop_factor,
            coverage_amount,
        )
    }

    pub fn get_location_risk_factor(env: Env, location: String) -> u32 {
        storage::lookup_or_default(&env, &DataKey::LocationRisk(location), NEUTRAL_RISK_FACTOR)
    }

    pub fn get_crop_risk_factor(env: Env, crop_type: String) -> u32 {
        storage::lookup_or_default(&env, &DataKey::CropRisk(crop_type), NEUTRAL_RISK_FACTOR)
    }

    pub fn get_base_premium_rate(env: Env) -> u32 {
        storage::get_base_premium_rate(&env)
    }

    pub fn get_premium_decimals(_env: Env) -> u32 {
        PREMIUM_DECIMALS
    }

    pub fn get_owner(env: Env) -> Result<Address, InsuranceError> {
        Ok(storage::get_config(&env)?.owner)
    }
}

mod test;
