//! Frequency sweep utilities and post-processing helpers.

use crate::line::{propagation_characteristics, LineParameters};
use crate::math::{CScalar, Scalar};
use crate::metrics::{reflection_coefficient, vswr};
use crate::twoport::TwoPort;

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Generates `n` logarithmically spaced samples between `start` and `stop` (Hz).
/// Requires start > 0 and stop > 0.
#[must_use]
pub fn logspace_hz(start_hz: Scalar, stop_hz: Scalar, n: usize) -> Vec<Scalar> {
    assert!(start_hz > 0.0 && stop_hz > 0.0);
    match n {
        0 => Vec::new(),
        1 => vec![start_hz],
        _ => {
            let log_start = start_hz.log10();
            let log_stop = stop_hz.log10();
            let step = (log_stop - log_start) / (n as Scalar - 1.0);
            (0..n)
                .map(|i| 10f64.powf(log_start + step * i as Scalar))
                .collect()
        }
    }
}

/// Source-side VSWR of a line of length `length_m` terminated in `z_load`,
/// evaluated at each frequency in `freqs_hz`.
#[must_use]
pub fn sweep_vswr(
    params: &LineParameters,
    length_m: Scalar,
    z_load: CScalar,
    freqs_hz: &[Scalar],
) -> Vec<Scalar> {
    freqs_hz
        .iter()
        .map(|&f| {
            let pc = propagation_characteristics(params, f);
            let section = TwoPort::line_section(pc.gamma, pc.z0, length_m);
            let zin = section.input_impedance(z_load);
            vswr(reflection_coefficient(zin, pc.z0))
        })
        .collect()
}

/// Magnitude of a complex sequence.
#[must_use]
pub fn mag(values: impl IntoIterator<Item = CScalar>) -> Vec<Scalar> {
    values.into_iter().map(|v| v.norm()).collect()
}

/// Magnitude in dB (20·log10|x|), clamping very small values.
#[must_use]
pub fn mag_db(values: impl IntoIterator<Item = CScalar>) -> Vec<Scalar> {
    const MIN: Scalar = 1e-300;
    values
        .into_iter()
        .map(|v| 20.0 * (v.norm().max(MIN)).log10())
        .collect()
}

/// Phase in radians of a complex sequence.
#[must_use]
pub fn phase_rad(values: impl IntoIterator<Item = CScalar>) -> Vec<Scalar> {
    values.into_iter().map(|v| v.arg()).collect()
}

/// Phase in degrees of a complex sequence.
#[must_use]
pub fn phase_deg(values: impl IntoIterator<Item = CScalar>) -> Vec<Scalar> {
    phase_rad(values).into_iter().map(|r| r.to_degrees()).collect()
}
