//! Baseline physical constants and frequency helpers.
//!
//! Constants follow CODATA recommended values (2019 SI redefinition):
//! <https://physics.nist.gov/cuu/Constants/>

use std::f64::consts::PI;

/// Speed of light in vacuum _c_ in meters per second (m/s).
/// Exact value by SI definition (2019): 299,792,458 m/s.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;
/// Characteristic impedance of free space Z₀ in ohms (Ω).
/// Derived from Z₀ = √(μ₀/ε₀) ≈ 376.730313668 Ω.
pub const FREE_SPACE_IMPEDANCE: f64 = 376.730_313_668;

/// Returns the angular frequency corresponding to a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: f64) -> f64 {
    2.0 * PI * hz
}

/// Returns the free-space wavelength in meters for a given frequency in hertz.
#[inline]
#[must_use]
pub fn wavelength_from_frequency(hz: f64) -> f64 {
    SPEED_OF_LIGHT / hz
}

/// Guided wavelength in meters for a phase constant `beta` (rad/m).
#[inline]
#[must_use]
pub fn wavelength_from_beta(beta: f64) -> f64 {
    2.0 * PI / beta
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn wavelength_matches_reference() {
        let freq = 1.0e9;
        let lambda = wavelength_from_frequency(freq);
        assert_relative_eq!(lambda, 0.299_792_458, max_relative = 1.0e-9);
    }

    #[test]
    fn guided_wavelength_inverts_beta() {
        let beta = 2.0 * PI / 0.3;
        assert_relative_eq!(wavelength_from_beta(beta), 0.3, epsilon = 1.0e-12);
    }
}
