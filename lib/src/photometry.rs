//! Reflected-light photometry.

use std::f64::consts;

/// Phase integral of a Lambert sphere at phase angle `alpha` (radians),
/// used to scale reflected-light brightness by the Sun-body-observer
/// geometry.
///
/// Evaluates `(2/3) * ((1 - alpha/pi) * cos(alpha) + (1/pi) * sin(alpha))`,
/// which is `2/3` at full phase and falls to `0` at `alpha = pi`. Total
/// over all inputs; values outside `[0, pi]` are mathematically defined
/// but photometrically meaningless, so callers clamp.
pub fn phase_integral(alpha: f64) -> f64 {
    2.0 / 3.0
        * ((1.0 - alpha / consts::PI) * libm::cos(alpha)
            + 1.0 / consts::PI * libm::sin(alpha))
}

#[test]
fn full_phase_value() {
    assert!((phase_integral(0.0) - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn quadrature_and_new_phase() {
    assert!((phase_integral(consts::FRAC_PI_2) - 2.0 / (3.0 * consts::PI)).abs() < 1e-12);
    assert!(phase_integral(consts::PI).abs() < 1e-12);
}

#[test]
fn nonincreasing_toward_new_phase() {
    let mut last = phase_integral(0.0);
    for deg in 1..=180 {
        let next = phase_integral(f64::from(deg) * consts::PI / 180.0);
        assert!(next <= last + 1e-15, "rose at {deg} deg");
        last = next;
    }
}
