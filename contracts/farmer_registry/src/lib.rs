#![no_std]

use crop_common::{ttl, FarmerRecord, InsuranceError};
use soroban_sdk::{contract, contractimpl, contractmeta, symbol_short, Address, Env, String, Vec};

mod storage;

contractmeta!(
    key = "Description",
    val = "Farmer registry allocating sequential farmer ids for crop insurance"
);

#[contract]
pub struct FarmerRegistryContract;

#[contractimpl]
impl FarmerRegistryContract {
    /// Register a farm profile for the calling wallet.
    ///
    /// Registration is permissionless; the wallet only has to sign. The
    /// returned id is `last id + 1` and is never reused.
    ///
    /// # Arguments
    /// * `farmer` - Wallet the record is bound to
    /// * `farm_size` - Farm size in acres, must be positive
    pub fn register_farmer(
        env: Env,
        farmer: Address,
        name: String,
        location: String,
        crop_type: String,
        farm_size: u32,
    ) -> Result<u64, InsuranceError> {
        farmer.require_auth();

        if farm_size == 0 {
            return Err(InsuranceError::InvalidInput);
        }

        let farmer_id = storage::get_last_farmer_id(&env)
            .checked_add(1)
            .ok_or(InsuranceError::Overflow)?;

        let record = FarmerRecord {
            id: farmer_id,
            wallet: farmer.clone(),
            name,
            location,
            crop_type,
            farm_size,
            registered_at: env.ledger().sequence(),
        };

        storage::set_farmer(&env, &record);
        storage::add_wallet_farmer(&env, &farmer, farmer_id);
        storage::set_last_farmer_id(&env, farmer_id);
        ttl::extend_instance(&env);

        env.events().publish(
            (symbol_short!("farmer"), symbol_short!("register")),
            (farmer_id, farmer),
        );

        Ok(farmer_id)
    }

    pub fn get_farmer(env: Env, farmer_id: u64) -> Result<FarmerRecord, InsuranceError> {
        storage::get_farmer(&env, farmer_id).ok_or(InsuranceError::NotFound)
    }

    pub fn get_farmer_count(env: Env) -> u64 {
        storage::get_last_farmer_id(&env)
    }

    /// Ids registered by `wallet`, oldest first.
    pub fn get_farmers_by_wallet(env: Env, wallet: Address) -> Vec<u64> {
        storage::get_wallet_farmers(&env, &wallet)
    }
}
