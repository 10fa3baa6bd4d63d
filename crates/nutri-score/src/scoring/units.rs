//! Conversions for measurements commonly printed on labels.

const KJ_PER_KCAL: f64 = 4.184;
const SALT_TO_SODIUM_DIVISOR: f64 = 2.5;

pub fn energy_from_kcal(kcal: f64) -> f64 {
    kcal * KJ_PER_KCAL
}

/// Sodium (mg) contained in the given amount of salt (mg).
pub fn sodium_from_salt(salt_mg: f64) -> f64 {
    salt_mg / SALT_TO_SODIUM_DIVISOR
}
