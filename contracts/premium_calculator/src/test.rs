#![cfg(test)]

use super::*;
use soroban_sdk::{testutils::Address as _, Address, Env, String};

fn setup(env: &Env) -> (PremiumCalculatorContractClient, Address) {
    let owner = Address::generate(env);
    let contract_id = env.register_contract(None, PremiumCalculatorContract);
    let client = PremiumCalculatorContractClient::new(env, &contract_id);

    client.initialize(&owner);

    (client, owner)
}

fn s(env: &Env, value: &str) -> String {
    String::from_str(env, value)
}

// ───────────── PURE PRICING ─────────────

#[test]
fn test_compute_premium_default_factors() {
    // 50.000
    assert_eq!(compute_premium(500, 100, 100, 10_000), Ok(50_000));
}

#[test]
fn test_compute_premium_keeps_fraction() {
    // 97.500
    assert_eq!(compute_premium(500, 150, 130, 10_000), Ok(97_500));
}

#[test]
fn test_compute_premium_truncates_sub_cent() {
    // 9_999 / 1_000_000
    assert_eq!(compute_premium(1, 101, 99, 1), Ok(0));
    // 1_125_000 / 1_000_000
    assert_eq!(compute_premium(1, 150, 150, 50), Ok(1));
    assert_eq!(compute_premium(500, 100, 100, 3), Ok(15));
}

#[test]
fn test_compute_premium_coverage_domain() {
    assert_eq!(compute_premium(500, 150, 130, 0), Ok(0));
    assert_eq!(compute_premium(500, 100, 100, -10), Err(InsuranceError::InvalidInput));
    assert_eq!(compute_premium(500, 100, 100, -1), Err(InsuranceError::InvalidInput));
}

#[test]
fn test_compute_premium_overflow() {
    assert_eq!(
        compute_premium(u32::MAX, u32::MAX, u32::MAX, i128::MAX / 2),
        Err(InsuranceError::Overflow)
    );
}

// ───────────── CONFIGURATION ─────────────

#[test]
fn test_initialize_defaults() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, owner) = setup(&env);

    assert_eq!(client.get_owner(), owner);
    assert_eq!(client.get_base_premium_rate(), DEFAULT_BASE_PREMIUM_RATE);
    assert_eq!(client.get_location_risk_factor(&s(&env, "Kenya, Nairobi")), NEUTRAL_RISK_FACTOR);
    assert_eq!(client.get_crop_risk_factor(&s(&env, "Maize")), NEUTRAL_RISK_FACTOR);
    assert_eq!(client.get_premium_decimals(), 3);
}

#[test]
fn test_double_initialization() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, owner) = setup(&env);

    assert_eq!(client.try_initialize(&owner), Err(Ok(InsuranceError::AlreadyInitialized)));
}

#[test]
fn test_set_location_risk_factor() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, owner) = setup(&env);

    client.set_location_risk_factor(&owner, &s(&env, "Kenya, Nairobi"), &120);

    assert_eq!(client.get_location_risk_factor(&s(&env, "Kenya, Nairobi")), 120);
    assert_eq!(client.get_location_risk_factor(&s(&env, "Uganda, Kampala")), 100);
}

#[test]
fn test_set_crop_risk_factor() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, owner) = setup(&env);

    client.set_crop_risk_factor(&owner, &s(&env, "Maize"), &80);

    assert_eq!(client.get_crop_risk_factor(&s(&env, "Maize")), 80);
}

#[test]
fn test_set_base_premium_rate() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, owner) = setup(&env);

    client.set_base_premium_rate(&owner, &250);

    assert_eq!(client.get_base_premium_rate(), 250);
    assert_eq!(client.calculate_premium(&s(&env, "Kenya, Nairobi"), &s(&env, "Maize"), &10_000), 25_000);
}

#[test]
fn test_unauthorized_changes_leave_state_unchanged() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, owner) = setup(&env);
    let stranger = Address::generate(&env);

    client.set_location_risk_factor(&owner, &s(&env, "Kenya, Nairobi"), &120);

    assert_eq!(
        client.try_set_location_risk_factor(&stranger, &s(&env, "Kenya, Nairobi"), &300),
        Err(Ok(InsuranceError::Unauthorized))
    );
    assert_eq!(
        client.try_set_location_risk_factor(&stranger, &s(&env, "Tanzania, Arusha"), &300),
        Err(Ok(InsuranceError::Unauthorized))
    );
    assert_eq!(
        client.try_set_crop_risk_factor(&stranger, &s(&env, "Maize"), &300),
        Err(Ok(InsuranceError::Unauthorized))
    );
    assert_eq!(
        client.try_set_base_premium_rate(&stranger, &9_999),
        Err(Ok(InsuranceError::Unauthorized))
    );

    assert_eq!(client.get_location_risk_factor(&s(&env, "Kenya, Nairobi")), 120);
    assert_eq!(client.get_location_risk_factor(&s(&env, "Tanzania, Arusha")), 100);
    assert_eq!(client.get_crop_risk_factor(&s(&env, "Maize")), 100);
    assert_eq!(client.get_base_premium_rate(), 500);
}

#[test]
fn test_setters_require_initialization() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register_contract(None, PremiumCalculatorContract);
    let client = PremiumCalculatorContractClient::new(&env, &contract_id);
    let caller = Address::generate(&env);

    assert_eq!(
        client.try_set_base_premium_rate(&caller, &100),
        Err(Ok(InsuranceError::NotInitialized))
    );
    assert_eq!(client.try_get_owner(), Err(Ok(InsuranceError::NotInitialized)));
}

// ───────────── PREMIUMS ─────────────

#[test]
fn test_calculate_premium_default_factors() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _) = setup(&env);

    let premium = client.calculate_premium(&s(&env, "Kenya, Nairobi"), &s(&env, "Maize"), &10_000);

    // 50.000 for 10_000 coverage
    assert_eq!(premium, 50_000);
}

#[test]
fn test_calculate_premium_custom_factors() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, owner) = setup(&env);

    client.set_location_risk_factor(&owner, &s(&env, "Tanzania, Arusha"), &150);
    client.set_crop_risk_factor(&owner, &s(&env, "Rice"), &130);

    let premium = client.calculate_premium(&s(&env, "Tanzania, Arusha"), &s(&env, "Rice"), &10_000);

    // 97.500 for 10_000 coverage
    assert_eq!(premium, 97_500);
}

#[test]
fn test_calculate_premium_is_deterministic() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, owner) = setup(&env);

    client.set_location_risk_factor(&owner, &s(&env, "Kenya, Nairobi"), &135);

    let first = client.calculate_premium(&s(&env, "Kenya, Nairobi"), &s(&env, "Maize"), &7_777);
    let second = client.calculate_premium(&s(&env, "Kenya, Nairobi"), &s(&env, "Maize"), &7_777);

    assert_eq!(first, second);
    assert_eq!(client.get_location_risk_factor(&s(&env, "Kenya, Nairobi")), 135);
}

#[test]
fn test_zero_factor_is_not_unset() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, owner) = setup(&env);

    client.set_crop_risk_factor(&owner, &s(&env, "Cassava"), &0);

    assert_eq!(client.get_crop_risk_factor(&s(&env, "Cassava")), 0);
    assert_eq!(client.calculate_premium(&s(&env, "Kenya, Nairobi"), &s(&env, "Cassava"), &10_000), 0);
}

#[test]
fn test_calculate_premium_coverage_domain() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _) = setup(&env);

    assert_eq!(client.calculate_premium(&s(&env, "Kenya, Nairobi"), &s(&env, "Maize"), &0), 0);
    assert_eq!(
        client.try_calculate_premium(&s(&env, "Kenya, Nairobi"), &s(&env, "Maize"), &-1),
        Err(Ok(InsuranceError::InvalidInput))
    );
}
