use soroban_sdk::{contracttype, Address, String};

pub const MIN_SEVERITY: u32 = 1;
pub const MAX_SEVERITY: u32 = 5;
pub const MAX_HUMIDITY: u32 = 100;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WeatherObservation {
    pub sequence: u64,         // per-location, starts at 1
    pub location: String,
    pub temperature: i32,      // degrees Celsius
    pub rainfall: u32,         // millimetres
    pub humidity: u32,         // percent
    pub wind_speed: u32,       // km/h
    pub reported_by: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    ObservationCount(String),
    Observation(String, u64),
    EventCount(String),
    Event(String, u64),
}
