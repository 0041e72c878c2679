use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WeatherEventType {
    Drought = 1,
    Flood = 2,
    Frost = 3,
    Hail = 4,
    Heatwave = 5,
    Windstorm = 6,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FarmerRecord {
    pub id: u64,
    pub wallet: Address,
    pub name: String,
    pub location: String,
    pub crop_type: String,
    pub farm_size: u32,        // acres
    pub registered_at: u32,    // ledger sequence
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WeatherEvent {
    pub id: u64,               // scoped to `location`
    pub location: String,
    pub event_type: WeatherEventType,
    pub severity: u32,         // 1-5 scale
    pub start_time: u64,
    pub end_time: u64,
    pub reported_by: Address,
    pub reported_at: u64,
    pub confirmed: bool,
    pub confirmed_by: Option<Address>,
    pub confirmed_at: Option<u64>,
}

impl WeatherEvent {
    /// Inclusive on both ends.
    pub fn overlaps(&self, start_time: u64, end_time: u64) -> bool {
        self.start_time <= end_time && start_time <= self.end_time
    }
}
