//! Descending breakpoint tables and the shared point lookup.

pub static ENERGY_LEVELS: [f64; 10] = [
    3350.0, 3015.0, 2680.0, 2345.0, 2010.0, 1675.0, 1340.0, 1005.0, 670.0, 335.0,
];
pub static ENERGY_LEVELS_BEVERAGE: [f64; 10] =
    [270.0, 240.0, 210.0, 180.0, 150.0, 120.0, 90.0, 60.0, 30.0, 0.0];
pub static SUGARS_LEVELS: [f64; 10] = [45.0, 40.0, 36.0, 31.0, 27.0, 22.5, 18.0, 13.5, 9.0, 4.5];
pub static SUGARS_LEVELS_BEVERAGE: [f64; 10] =
    [13.5, 12.0, 10.5, 9.0, 7.5, 6.0, 4.5, 3.0, 1.5, 0.0];
pub static SATURATED_FATTY_ACIDS_LEVELS: [f64; 10] =
    [10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
pub static SODIUM_LEVELS: [f64; 10] = [
    900.0, 810.0, 720.0, 630.0, 540.0, 450.0, 360.0, 270.0, 180.0, 90.0,
];
pub static FIBRE_LEVELS: [f64; 5] = [4.7, 3.7, 2.8, 1.9, 0.9];
pub static PROTEIN_LEVELS: [f64; 5] = [8.0, 6.4, 4.8, 3.2, 1.6];

/// Points for `value` against a descending table: `len - i` for the first
/// breakpoint strictly exceeded, or zero when none is.
pub fn points_from_thresholds(value: f64, thresholds: &[f64]) -> u8 {
    let len = thresholds.len();
    thresholds
        .iter()
        .position(|&level| value > level)
        .map_or(0, |index| u8::try_from(len - index).unwrap_or(u8::MAX))
}
