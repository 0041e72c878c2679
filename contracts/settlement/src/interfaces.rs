use crop_common::{FarmerRecord, InsuranceError, WeatherEvent};
use soroban_sdk::{contractclient, Env, String};

#[allow(dead_code)]
#[contractclient(name = "FarmerRegistryClient")]
pub trait FarmerRegistryInterface {
    fn get_farmer(env: Env, farmer_id: u64) -> Result<FarmerRecord, InsuranceError>;
}

#[allow(dead_code)]
#[contractclient(name = "PremiumCalculatorClient")]
pub trait PremiumCalculatorInterface {
    fn calculate_premium(
        env: Env,
        location: String,
        crop_type: String,
        coverage_amount: i128,
    ) -> Result<i128, InsuranceError>;
}

#[allow(dead_code)]
#[contractclient(name = "WeatherOracleClient")]
pub trait WeatherOracleInterface {
    fn get_weather_event(env: Env, location: String, event_id: u64) -> Result<WeatherEvent, InsuranceError>;
}

/// Collapse a `try_*` cross-contract result. Contract errors pass through
/// unchanged; host or conversion failures become `fallback`.
pub fn forward<T, C, I>(
    result: Result<Result<T, C>, Result<InsuranceError, I>>,
    fallback: InsuranceError,
) -> Result<T, InsuranceError> {
    match result {
        Ok(Ok(value)) => Ok(value),
        Err(Ok(err)) => Err(err),
        _ => Err(fallback),
    }
}
