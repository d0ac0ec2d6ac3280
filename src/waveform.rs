//! Voltage/current standing-wave envelopes along a terminated line.

use crate::math::{CScalar, Scalar};
use crate::metrics::reflection_coefficient;

/// Complex voltage and current envelopes V(z), I(z) at each position in
/// `positions`, for a forward amplitude `v0_plus` on a line of physical
/// length `length_m` terminated in `z_load`.
///
/// V(z) = V⁺e^(−γz) + V⁺·Γ_L·e^(γ(z−L)) and I(z) = (V⁺e^(−γz) −
/// V⁺·Γ_L·e^(γ(z−L)))/Z0, with Γ_L from [`reflection_coefficient`].
#[must_use]
pub fn voltage_current_envelopes(
    v0_plus: CScalar,
    gamma: CScalar,
    z0: CScalar,
    positions: &[Scalar],
    z_load: CScalar,
    length_m: Scalar,
) -> (Vec<CScalar>, Vec<CScalar>) {
    let gamma_l = reflection_coefficient(z_load, z0);
    let mut vz = Vec::with_capacity(positions.len());
    let mut iz = Vec::with_capacity(positions.len());
    for &z in positions {
        let forward = v0_plus * (-gamma * z).exp();
        let backward = v0_plus * gamma_l * (gamma * (z - length_m)).exp();
        vz.push(forward + backward);
        iz.push((forward - backward) / z0);
    }
    (vz, iz)
}

/// Magnitudes of the voltage and current standing waves.
#[must_use]
pub fn standing_wave(vz: &[CScalar], iz: &[CScalar]) -> (Vec<Scalar>, Vec<Scalar>) {
    (
        vz.iter().map(|v| v.norm()).collect(),
        iz.iter().map(|i| i.norm()).collect(),
    )
}
