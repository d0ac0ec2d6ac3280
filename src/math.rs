//! Shared numerical primitives for phasor computations.

use num_complex::Complex;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for phasors.
pub type CScalar = Complex<Scalar>;

/// Returns the complex exponential `e^(j * theta)` using `Scalar` precision.
#[must_use]
pub fn phasor(theta: Scalar) -> CScalar {
    Complex::from_polar(1.0, theta)
}

/// Principal-branch complex square root with a non-negative real part.
///
/// Passive-line physics requires Re(γ) ≥ 0 (attenuation) and Re(Z0) ≥ 0
/// (resistive component). The library branch cut already satisfies this, but
/// the post-condition is enforced explicitly rather than assumed.
#[must_use]
pub fn principal_sqrt(z: CScalar) -> CScalar {
    let root = z.sqrt();
    if root.re < 0.0 {
        -root
    } else {
        root
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn phasor_at_quarter_turn_is_j() {
        let p = phasor(std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(p.re, 0.0, epsilon = 1.0e-12);
        assert_relative_eq!(p.im, 1.0, epsilon = 1.0e-12);
    }

    #[test]
    fn principal_sqrt_keeps_real_part_non_negative() {
        let samples = [
            CScalar::new(1.0, 1.0),
            CScalar::new(-1.0, 1.0),
            CScalar::new(-1.0, -1.0),
            CScalar::new(1.0, -1.0),
            CScalar::new(-4.0, 0.0),
        ];
        for z in samples {
            let r = principal_sqrt(z);
            assert!(r.re >= 0.0, "negative real part for sqrt({z})");
            let back = r * r;
            assert_relative_eq!(back.re, z.re, epsilon = 1.0e-12);
            assert_relative_eq!(back.im.abs(), z.im.abs(), epsilon = 1.0e-12);
        }
    }
}
