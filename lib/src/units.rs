//! Units and calibration constants.
//!
//! The body model treats these as an external contract: plain values and
//! one pure estimator function, no state.

use std::f64::consts;

/// Astronomical unit (`km`).
pub const AU_KM: f64 = 149_597_870.7;

/// Degrees to radians.
pub const TO_RAD: f64 = consts::PI / 180.0;

/// Modified Julian Date of the J2000.0 epoch.
pub const J2000_MJD: f64 = 51_544.5;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Scale factor applied to body radii so they stay visible at
/// interplanetary camera distances.
pub const RENDER_EXAG_SCALE: f64 = 10_000.0;

/// Geometric albedo assumed when sizing a body from its absolute
/// magnitude.
pub const ASSUMED_ALBEDO: f64 = 0.15;

/// Calibration constant mapping `radius^3` (`km^3`) to mass (`kg`) at an
/// assumed mean density of 2.5 g/cm^3.
pub const DENSITY_MASS_COEFF: f64 = 8.7523e9;

/// Scale from the catalog's compact mass unit to `kg`.
pub const MASS_UNIT_KG: f64 = 1e18;

/// Estimate a body's radius (`km`) from its absolute magnitude `h`.
///
/// Standard asteroid diameter relation `D = 1329 / sqrt(albedo) *
/// 10^(-H/5)`, halved, at [`ASSUMED_ALBEDO`]. Brighter (smaller `h`)
/// means larger.
pub fn estimate_radius(h: f64) -> f64 {
    664.5 / libm::sqrt(ASSUMED_ALBEDO) * libm::pow(10.0, -h / 5.0)
}

#[test]
fn brighter_is_larger() {
    assert!(estimate_radius(3.34) > estimate_radius(10.0));
    assert!(estimate_radius(10.0) > estimate_radius(20.9));
}

#[test]
fn default_magnitude_sizes_in_kilometers() {
    let r = estimate_radius(10.0);
    assert!(r > 15.0 && r < 20.0, "{r}");
}
