//! Reflection, VSWR, return-loss, and mismatch-loss metrics.
//!
//! Pure scalar functions with a shared sentinel policy: degenerate but
//! physically meaningful inputs saturate (Γ = 1, infinite VSWR, 100 dB
//! return-loss ceiling) instead of raising, so batch pipelines survive
//! open/short extremes.

use crate::math::{CScalar, Scalar};

/// Tolerance for the short-like denominator guard in [`reflection_coefficient`].
const DENOM_EPS: Scalar = 1.0e-12;
/// Return-loss ceiling reported for an essentially perfect match (dB).
const RETURN_LOSS_CEILING_DB: Scalar = 100.0;

/// Reflection coefficient Γ = (ZL − Z0)/(ZL + Z0) at a boundary.
///
/// When the load cancels the reference impedance (|ZL + Z0| below 1e-12),
/// returns Γ = 1 exactly instead of dividing by near-zero. An infinite
/// `z_load` (open-circuit sentinel from the two-port algebra) also maps to
/// Γ = 1.
#[must_use]
pub fn reflection_coefficient(z_load: CScalar, z0: CScalar) -> CScalar {
    if z_load.re.is_infinite() || z_load.im.is_infinite() {
        return CScalar::new(1.0, 0.0);
    }
    let denom = z_load + z0;
    if denom.norm() < DENOM_EPS {
        return CScalar::new(1.0, 0.0);
    }
    (z_load - z0) / denom
}

/// Voltage standing-wave ratio (1 + |Γ|)/(1 − |Γ|).
///
/// |Γ| ≥ 1 (total or active reflection) yields positive infinity.
#[must_use]
pub fn vswr(gamma: CScalar) -> Scalar {
    let mag = gamma.norm();
    if mag >= 1.0 {
        return Scalar::INFINITY;
    }
    (1.0 + mag) / (1.0 - mag)
}

/// Return loss −20·log10|Γ| in dB, capped at 100 dB for |Γ| < 1e-12.
#[must_use]
pub fn return_loss_db(gamma: CScalar) -> Scalar {
    let mag = gamma.norm();
    if mag < DENOM_EPS {
        return RETURN_LOSS_CEILING_DB;
    }
    -20.0 * mag.log10()
}

/// Mismatch loss −10·log10(1 − |Γ|²) in dB; infinite for |Γ| ≥ 1.
#[must_use]
pub fn mismatch_loss_db(gamma: CScalar) -> Scalar {
    let mag2 = gamma.norm_sqr();
    if mag2 >= 1.0 {
        return Scalar::INFINITY;
    }
    -10.0 * (1.0 - mag2).log10()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn matched_load_is_fully_consistent() {
        let z0 = CScalar::new(50.0, 0.0);
        let gamma = reflection_coefficient(z0, z0);
        assert_relative_eq!(gamma.norm(), 0.0, epsilon = 1.0e-15);
        assert_relative_eq!(vswr(gamma), 1.0, epsilon = 1.0e-12);
        assert_relative_eq!(return_loss_db(gamma), 100.0, epsilon = 1.0e-12);
        assert_relative_eq!(mismatch_loss_db(gamma), 0.0, epsilon = 1.0e-12);
    }

    #[test]
    fn open_and_short_circuits_saturate_vswr() {
        let z0 = CScalar::new(50.0, 0.0);
        let open = reflection_coefficient(CScalar::new(1.0e12, 0.0), z0);
        assert!(vswr(open) > 100.0);
        let short = reflection_coefficient(CScalar::new(0.0, 0.0), z0);
        assert!(vswr(short) > 100.0);
    }

    #[test]
    fn load_cancelling_reference_hits_unity_guard() {
        let gamma = reflection_coefficient(CScalar::new(-50.0, 0.0), CScalar::new(50.0, 0.0));
        assert_eq!(gamma, CScalar::new(1.0, 0.0));
    }

    #[test]
    fn infinite_load_sentinel_gives_total_reflection() {
        let gamma =
            reflection_coefficient(CScalar::new(f64::INFINITY, 0.0), CScalar::new(50.0, 0.0));
        assert_eq!(gamma, CScalar::new(1.0, 0.0));
        assert!(vswr(gamma).is_infinite());
    }

    #[test]
    fn losses_match_closed_forms_at_half_reflection() {
        let gamma = CScalar::new(0.5, 0.0);
        assert_relative_eq!(return_loss_db(gamma), -20.0 * 0.5_f64.log10(), epsilon = 1.0e-12);
        assert_relative_eq!(
            mismatch_loss_db(gamma),
            -10.0 * 0.75_f64.log10(),
            epsilon = 1.0e-12
        );
    }

    #[test]
    fn total_reflection_blows_up_mismatch_loss() {
        assert!(mismatch_loss_db(CScalar::new(1.0, 0.0)).is_infinite());
        assert!(vswr(CScalar::new(0.0, 1.0)).is_infinite());
    }
}
