use soroban_sdk::{Env, IntoVal, Val};

/// Number of ledgers in a day (assuming ~5 second close time)
pub const DAY_IN_LEDGERS: u32 = 17_280;

pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

pub const RECORD_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub const RECORD_TTL_THRESHOLD: u32 = RECORD_TTL_AMOUNT - 7 * DAY_IN_LEDGERS;

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

/// The key must already hold a value.
pub fn extend_record<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, RECORD_TTL_THRESHOLD, RECORD_TTL_AMOUNT);
}
