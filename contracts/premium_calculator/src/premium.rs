use crop_common::InsuranceError;

/// Risk factor that leaves a premium unchanged.
pub const NEUTRAL_RISK_FACTOR: u32 = 100;

/// 5% in basis points.
pub const DEFAULT_BASE_PREMIUM_RATE: u32 = 500;

/// Rate, location factor and crop factor each carry a factor-100 scale.
pub const RISK_SCALE: i128 = 1_000_000;

/// Premiums are fixed-point with three decimals: `97_500` reads as `97.500`.
pub const PREMIUM_DECIMALS: u32 = 3;
pub const PREMIUM_SCALE: i128 = 1_000;

/// `rate * location_factor * crop_factor * coverage / 1_000_000`.
///
/// The integer quotient is the premium in units of `1 / PREMIUM_SCALE`;
/// any remainder below that unit is truncated toward zero. Zero coverage
/// prices to zero; negative coverage is rejected.
pub fn compute_premium(
    base_premium_rate: u32,
    location_factor: u32,
    crop_factor: u32,
    coverage_amount: i128,
) -> Result<i128, InsuranceError> {
    if coverage_amount < 0 {
        return Err(InsuranceError::InvalidInput);
    }

    let scaled = (base_premium_rate as i128)
        .checked_mul(location_factor as i128)
        .and_then(|v| v.checked_mul(crop_factor as i128))
        .and_then(|v| v.checked_mul(coverage_amount))
        .ok_or(InsuranceError::Overflow)?;

    Ok(scaled / RISK_SCALE)
}
