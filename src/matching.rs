//! Quarter-wave transformer and single-stub shunt matching solvers.
//!
//! Both solvers characterize the line via the propagation solver, assemble
//! candidate networks with the two-port algebra, and score the outcome with
//! the standing-wave metrics. Structurally undefined designs (no wavelength,
//! tap past the line end) fail hard; numerically degenerate extremes flow
//! through as sentinels.

use std::f64::consts::PI;

use thiserror::Error;

use crate::line::{propagation_characteristics, LineParameters};
use crate::math::{principal_sqrt, CScalar, Scalar};
use crate::metrics::{reflection_coefficient, vswr};
use crate::twoport::TwoPort;

/// Phase constants below this magnitude count as "no wavelength".
const BETA_EPS: Scalar = 1.0e-8;
/// Sample count of the uniform tap-position scan.
const STUB_GRID_POINTS: usize = 1000;

/// Errors from the matching solvers.
#[derive(Debug, Error)]
pub enum MatchingError {
    /// The phase constant β is numerically zero, so no quarter-wave or stub
    /// length can be computed.
    #[error("no wavelength defined at {freq_hz} Hz: phase constant is zero")]
    NoWavelength {
        /// Frequency at which the line was characterized.
        freq_hz: Scalar,
    },
    /// The solved stub tap position falls beyond the physical line end.
    #[error("stub tap at {tap_m} m falls beyond the {line_m} m line")]
    TapBeyondLine {
        /// Solved tap position (m).
        tap_m: Scalar,
        /// Physical line length (m).
        line_m: Scalar,
    },
}

/// Stub termination preference for the single-stub tuner.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubTermination {
    /// Short-circuited stub: Y = −j·cot(βl)/Z0.
    Short,
    /// Open-circuited stub: Y = +j·cot(βl)/Z0.
    Open,
}

/// Quarter-wave transformer design at a single frequency.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuarterWaveMatch {
    /// Source-side VSWR after insertion (1 by construction of `transformer_z`).
    pub vswr_src: Scalar,
    /// Physical quarter-wave length (m).
    pub length_m: Scalar,
    /// Chosen transformer characteristic impedance (Ω).
    pub transformer_z: CScalar,
}

/// Single-stub shunt tuner design at a single frequency.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct StubMatch {
    /// Source-side VSWR after insertion, bounded by the grid resolution.
    pub vswr_src: Scalar,
    /// Tap position along the line, measured from the load (m).
    pub tap_m: Scalar,
    /// Physical stub length (m).
    pub stub_m: Scalar,
    /// Human-readable summary of the solved operating point.
    pub summary: String,
}

/// Designs an ideal quarter-wave transformer for `z_load` on the host line.
///
/// The transformer impedance is the complex geometric mean Zt = √(Z0·ZL), a
/// deliberate simplification that makes the transform exact at `freq_hz`:
/// since Zin = Zt²/ZL = Z0, the reported VSWR is algebraically 1 for any
/// load. Whether Zt is physically realizable (real, positive) is left to
/// the caller.
///
/// # Errors
///
/// [`MatchingError::NoWavelength`] when the host line's phase constant is
/// numerically zero (purely resistive line).
pub fn quarter_wave_transform(
    params: &LineParameters,
    freq_hz: Scalar,
    z_load: CScalar,
) -> Result<QuarterWaveMatch, MatchingError> {
    let pc = propagation_characteristics(params, freq_hz);
    let beta = pc.beta();
    if beta.abs() < BETA_EPS {
        return Err(MatchingError::NoWavelength { freq_hz });
    }

    let transformer_z = principal_sqrt(pc.z0 * z_load);
    let length_m = PI / (2.0 * beta);

    // Verify through the metrics chain rather than asserting the algebra.
    let zin = transformer_z * transformer_z / z_load;
    let gamma_in = reflection_coefficient(zin, pc.z0);
    let vswr_src = vswr(gamma_in);

    Ok(QuarterWaveMatch {
        vswr_src,
        length_m,
        transformer_z,
    })
}

/// Designs a single shunt-stub tuner for `z_load` at `freq_hz`.
///
/// The matching section is always characterized lossless (R = G = 0
/// regardless of the host parameters). The tap position is found by a
/// 1000-point uniform scan of d over [0, λ/2], minimizing
/// |Re Yin(d) − Re(1/Z0)|; the grid resolution bounds the residual VSWR.
/// The stub length is solved from the cotangent relation and the realized
/// stub admittance is recomputed from that length before the final cascade
/// is scored against the true load.
///
/// # Errors
///
/// [`MatchingError::NoWavelength`] when the phase constant of the lossless
/// section is numerically zero, and [`MatchingError::TapBeyondLine`] when
/// the best tap position falls past `line_m`.
pub fn single_stub_shunt(
    params: &LineParameters,
    freq_hz: Scalar,
    line_m: Scalar,
    z_load: CScalar,
    termination: StubTermination,
) -> Result<StubMatch, MatchingError> {
    // Forced-lossless matching section.
    let pc = propagation_characteristics(&params.without_loss(), freq_hz);
    let beta = pc.beta();
    if beta.abs() < BETA_EPS {
        return Err(MatchingError::NoWavelength { freq_hz });
    }
    let lambda = 2.0 * PI / beta;
    let z0 = pc.z0;
    let y0 = CScalar::new(1.0, 0.0) / z0;
    let j = CScalar::new(0.0, 1.0);

    // Scan the tap position for Re(Yin) = Re(y0). Strict `<` keeps the
    // first (lowest-d) sample on exact ties, so results stay reproducible.
    let step = (lambda / 2.0) / (STUB_GRID_POINTS as Scalar - 1.0);
    let mut tap_m = 0.0;
    let mut yin_best = CScalar::new(0.0, 0.0);
    let mut min_err = Scalar::INFINITY;
    for i in 0..STUB_GRID_POINTS {
        let d = step * i as Scalar;
        let t = (beta * d).tan();
        let zin = z0 * (z_load + j * z0 * t) / (z0 + j * z_load * t);
        let yin = CScalar::new(1.0, 0.0) / zin;
        let err = (yin.re - y0.re).abs();
        if err < min_err {
            min_err = err;
            tap_m = d;
            yin_best = yin;
        }
    }

    // Shunt susceptance cancelling the line's reactive admittance at the tap.
    let b_needed = -(yin_best - y0).im;

    // Stub length from the cotangent relation; the raw arctangent is mapped
    // into [0, π) so lengths stay in [0, λ/2).
    let target = match termination {
        StubTermination::Short => -b_needed * z0.re,
        StubTermination::Open => b_needed * z0.re,
    };
    let mut theta = (1.0 / target).atan();
    if theta < 0.0 {
        theta += PI;
    }
    let stub_m = theta / beta;

    // Recompute the realized admittance from the solved length to catch any
    // drift introduced by the angle wrapping.
    let cot = 1.0 / (beta * stub_m).tan();
    let y_stub = match termination {
        StubTermination::Short => -j * cot / z0,
        StubTermination::Open => j * cot / z0,
    };

    if line_m - tap_m < 0.0 {
        return Err(MatchingError::TapBeyondLine { tap_m, line_m });
    }

    // Full cascade, source to load. The tap position is measured from the
    // load, so the source sees line(l − d), then the stub, then line(d).
    let chain = [
        TwoPort::line_section(pc.gamma, z0, line_m - tap_m),
        TwoPort::shunt_admittance(y_stub),
        TwoPort::line_section(pc.gamma, z0, tap_m),
    ];
    let total = TwoPort::cascade_all(&chain);
    let zin = total.input_impedance(z_load);
    let gamma_in = reflection_coefficient(zin, z0);
    let vswr_src = vswr(gamma_in);

    let summary = format!(
        "placed at d={tap_m:.4} m, Yin={:.5}{:+.5}j S, B_needed={b_needed:+.5} S, l_stub={stub_m:.4} m",
        yin_best.re, yin_best.im
    );

    Ok(StubMatch {
        vswr_src,
        tap_m,
        stub_m,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn host_line() -> LineParameters {
        LineParameters::new(0.05, 2.0e-7, 1.0e-8, 1.0e-10)
    }

    #[test]
    fn quarter_wave_reports_perfect_match_for_real_load() {
        let result = quarter_wave_transform(&host_line(), 1.0e9, CScalar::new(100.0, 0.0))
            .expect("wavelength defined");
        assert_relative_eq!(result.vswr_src, 1.0, epsilon = 1.0e-6);
        assert!(result.length_m > 0.0);
    }

    #[test]
    fn quarter_wave_reports_perfect_match_for_complex_load() {
        let result = quarter_wave_transform(&host_line(), 1.0e9, CScalar::new(30.0, -80.0))
            .expect("wavelength defined");
        // VSWR_src = 1 for any load by construction of Zt = sqrt(Z0*ZL).
        assert_relative_eq!(result.vswr_src, 1.0, epsilon = 1.0e-6);
    }

    #[test]
    fn quarter_wave_fails_without_wavelength() {
        let result = quarter_wave_transform(&host_line(), 0.0, CScalar::new(100.0, 0.0));
        assert!(matches!(result, Err(MatchingError::NoWavelength { .. })));
    }

    #[test]
    fn single_stub_matches_canonical_scenario() {
        let result = single_stub_shunt(
            &host_line(),
            1.0e9,
            0.1,
            CScalar::new(100.0, 50.0),
            StubTermination::Short,
        )
        .expect("solvable");
        assert!(result.tap_m >= 0.0 && result.tap_m <= 0.1);
        assert!(result.stub_m >= 0.0);
        assert!(result.vswr_src < 1.05, "vswr_src = {}", result.vswr_src);
    }

    #[test]
    fn single_stub_open_termination_also_converges() {
        let result = single_stub_shunt(
            &host_line(),
            1.0e9,
            0.1,
            CScalar::new(100.0, 50.0),
            StubTermination::Open,
        )
        .expect("solvable");
        assert!(result.stub_m >= 0.0);
        assert!(result.vswr_src < 1.05, "vswr_src = {}", result.vswr_src);
    }

    #[test]
    fn single_stub_summary_names_the_operating_point() {
        let result = single_stub_shunt(
            &host_line(),
            1.0e9,
            0.1,
            CScalar::new(100.0, 50.0),
            StubTermination::Short,
        )
        .expect("solvable");
        assert!(result.summary.contains("B_needed"));
        assert!(result.summary.contains("l_stub"));
    }

    #[test]
    fn single_stub_fails_without_wavelength() {
        let result = single_stub_shunt(
            &host_line(),
            0.0,
            0.1,
            CScalar::new(100.0, 50.0),
            StubTermination::Short,
        );
        assert!(matches!(result, Err(MatchingError::NoWavelength { .. })));
    }

    #[test]
    fn single_stub_flags_tap_beyond_short_lines() {
        // λ/2 ≈ 0.112 m here, so a 1 mm line cannot host most tap positions.
        let result = single_stub_shunt(
            &host_line(),
            1.0e9,
            0.001,
            CScalar::new(10.0, -80.0),
            StubTermination::Short,
        );
        assert!(matches!(result, Err(MatchingError::TapBeyondLine { .. })));
    }

    #[test]
    fn stub_lengths_stay_below_half_wavelength() {
        let pc = propagation_characteristics(&host_line().without_loss(), 1.0e9);
        let lambda = 2.0 * PI / pc.beta();
        for (re, im) in [(100.0, 50.0), (20.0, -40.0), (75.0, 0.0)] {
            let result = single_stub_shunt(
                &host_line(),
                1.0e9,
                0.5,
                CScalar::new(re, im),
                StubTermination::Short,
            )
            .expect("solvable");
            assert!(result.stub_m < lambda / 2.0);
            assert!(result.tap_m <= lambda / 2.0 + 1.0e-12);
        }
    }
}
