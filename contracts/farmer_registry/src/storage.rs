use crop_common::{ttl, FarmerRecord};
use soroban_sdk::{contracttype, Address, Env, Vec};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    LastFarmerId,
    Farmer(u64),
    WalletFarmers(Address),
}

pub fn get_last_farmer_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::LastFarmerId)
        .unwrap_or(0)
}

pub fn set_last_farmer_id(env: &Env, farmer_id: u64) {
    env.storage()
        .instance()
        .set(&DataKey::LastFarmerId, &farmer_id);
}

pub fn get_farmer(env: &Env, farmer_id: u64) -> Option<FarmerRecord> {
    env.storage().persistent().get(&DataKey::Farmer(farmer_id))
}

pub fn set_farmer(env: &Env, record: &FarmerRecord) {
    let key = DataKey::Farmer(record.id);
    env.storage().persistent().set(&key, record);
    ttl::extend_record(env, &key);
}

pub fn get_wallet_farmers(env: &Env, wallet: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::WalletFarmers(wallet.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn add_wallet_farmer(env: &Env, wallet: &Address, farmer_id: u64) {
    let key = DataKey::WalletFarmers(wallet.clone());
    let mut ids = get_wallet_farmers(env, wallet);
    ids.push_back(farmer_id);
    env.storage().persistent().set(&key, &ids);
    ttl::extend_record(env, &key);
}
