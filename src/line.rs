//! Per-unit-length line parameters and the propagation solver.

use crate::constants::angular_frequency;
use crate::math::{principal_sqrt, CScalar, Scalar};

/// Distributed RLGC parameters per unit length of a uniform line.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineParameters {
    /// Series resistance per meter (Ω/m).
    pub r_per_m: Scalar,
    /// Series inductance per meter (H/m).
    pub l_per_m: Scalar,
    /// Shunt conductance per meter (S/m).
    pub g_per_m: Scalar,
    /// Shunt capacitance per meter (F/m).
    pub c_per_m: Scalar,
}

impl LineParameters {
    /// Line with the given per-unit RLGC parameters.
    #[must_use]
    pub fn new(r_per_m: Scalar, l_per_m: Scalar, g_per_m: Scalar, c_per_m: Scalar) -> Self {
        Self {
            r_per_m,
            l_per_m,
            g_per_m,
            c_per_m,
        }
    }

    /// Lossless line parameters (R=G=0).
    #[must_use]
    pub fn lossless(l_per_m: Scalar, c_per_m: Scalar) -> Self {
        Self::new(0.0, l_per_m, 0.0, c_per_m)
    }

    /// Same line with its loss terms zeroed (R=G=0), keeping L and C.
    #[must_use]
    pub fn without_loss(&self) -> Self {
        Self::lossless(self.l_per_m, self.c_per_m)
    }
}

/// Propagation constant and characteristic impedance of a uniform line.
///
/// Immutable once produced; computed fresh per call.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropagationCharacteristics {
    /// Complex propagation constant γ (1/m): Re = attenuation, Im = phase constant β.
    pub gamma: CScalar,
    /// Complex characteristic impedance Z0 (Ω).
    pub z0: CScalar,
}

impl PropagationCharacteristics {
    /// Phase constant β (rad/m).
    #[must_use]
    pub fn beta(&self) -> Scalar {
        self.gamma.im
    }

    /// Attenuation constant α (Np/m).
    #[must_use]
    pub fn alpha(&self) -> Scalar {
        self.gamma.re
    }
}

/// Computes γ = √(ZY) and Z0 = √(Z/Y) at `freq_hz` for a uniform line.
///
/// Z = R + jωL and Y = G + jωC; both roots take the principal branch with
/// non-negative real part, so Re(γ) ≥ 0 and Re(Z0) ≥ 0 for any quadrant of
/// Z and Y. When Y is exactly zero (G = 0 at zero frequency) Z0 is
/// undefined; the function returns γ = 0 and an infinite-Z0 sentinel rather
/// than dividing by zero.
#[must_use]
pub fn propagation_characteristics(
    params: &LineParameters,
    freq_hz: Scalar,
) -> PropagationCharacteristics {
    let omega = angular_frequency(freq_hz);
    let series = CScalar::new(params.r_per_m, omega * params.l_per_m);
    let shunt = CScalar::new(params.g_per_m, omega * params.c_per_m);

    if shunt.norm() == 0.0 {
        return PropagationCharacteristics {
            gamma: CScalar::new(0.0, 0.0),
            z0: CScalar::new(Scalar::INFINITY, 0.0),
        };
    }

    PropagationCharacteristics {
        gamma: principal_sqrt(series * shunt),
        z0: principal_sqrt(series / shunt),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn lossless_line_matches_closed_form() {
        let params = LineParameters::lossless(2.0e-7, 1.0e-10);
        let pc = propagation_characteristics(&params, 1.0e9);
        let expected_beta = 2.0 * std::f64::consts::PI * 1.0e9 * (2.0e-7_f64 * 1.0e-10).sqrt();
        assert_relative_eq!(pc.beta(), expected_beta, max_relative = 1.0e-3);
        assert_relative_eq!(pc.alpha(), 0.0, epsilon = 1.0e-9);
        assert_relative_eq!(pc.z0.re, (2.0e-7_f64 / 1.0e-10).sqrt(), max_relative = 1.0e-3);
        assert_relative_eq!(pc.z0.im, 0.0, epsilon = 1.0e-9);
    }

    #[test]
    fn zero_frequency_stays_finite() {
        let params = LineParameters::new(0.1, 2.0e-7, 0.01, 1.0e-10);
        let pc = propagation_characteristics(&params, 0.0);
        assert!(pc.gamma.re.is_finite() && pc.gamma.im.is_finite());
        assert!(pc.z0.re.is_finite() && pc.z0.im.is_finite());
        // DC: γ = sqrt(R*G), Z0 = sqrt(R/G), both purely real.
        assert_relative_eq!(pc.gamma.re, (0.1_f64 * 0.01).sqrt(), epsilon = 1.0e-12);
        assert_relative_eq!(pc.z0.re, (0.1_f64 / 0.01).sqrt(), epsilon = 1.0e-12);
    }

    #[test]
    fn degenerate_shunt_returns_sentinel() {
        let params = LineParameters::new(0.1, 2.0e-7, 0.0, 1.0e-10);
        let pc = propagation_characteristics(&params, 0.0);
        assert_eq!(pc.gamma, CScalar::new(0.0, 0.0));
        assert!(pc.z0.re.is_infinite());
    }

    #[test]
    fn lossy_line_has_positive_attenuation_and_phase() {
        let params = LineParameters::new(0.05, 2.0e-7, 1.0e-8, 1.0e-10);
        let pc = propagation_characteristics(&params, 1.0e9);
        assert!(pc.alpha() > 0.0);
        assert!(pc.beta() > 0.0);
        assert!(pc.z0.re > 0.0);
    }
}
