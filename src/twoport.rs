//! ABCD two-port matrices for line sections and shunt elements.

use crate::math::{CScalar, Scalar};

/// Tolerance below which the input-impedance denominator counts as zero.
const DENOM_EPS: Scalar = 1.0e-12;

/// ABCD-based two-port network.
///
/// Cascading follows signal-flow order: the source-side matrix
/// left-multiplies the load-side matrix.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoPort {
    /// A element of the ABCD matrix.
    pub a: CScalar,
    /// B element of the ABCD matrix.
    pub b: CScalar,
    /// C element of the ABCD matrix.
    pub c: CScalar,
    /// D element of the ABCD matrix.
    pub d: CScalar,
}

impl TwoPort {
    /// Identity two-port (through connection): [[1, 0], [0, 1]].
    #[must_use]
    pub fn identity() -> Self {
        Self {
            a: CScalar::new(1.0, 0.0),
            b: CScalar::new(0.0, 0.0),
            c: CScalar::new(0.0, 0.0),
            d: CScalar::new(1.0, 0.0),
        }
    }

    /// Constructs a two-port from explicit ABCD elements.
    #[must_use]
    pub fn from_abcd(a: CScalar, b: CScalar, c: CScalar, d: CScalar) -> Self {
        Self { a, b, c, d }
    }

    /// Uniform line section of physical `length` with propagation constant
    /// `gamma` and characteristic impedance `z0`:
    /// A = D = cosh(γl), B = Z0·sinh(γl), C = sinh(γl)/Z0.
    #[must_use]
    pub fn line_section(gamma: CScalar, z0: CScalar, length: Scalar) -> Self {
        let gl = gamma * length;
        let ch = gl.cosh();
        let sh = gl.sinh();
        Self::from_abcd(ch, z0 * sh, sh / z0, ch)
    }

    /// Shunt admittance `Y` represented as a two-port: [[1, 0], [Y, 1]].
    #[must_use]
    pub fn shunt_admittance(y: CScalar) -> Self {
        Self::from_abcd(
            CScalar::new(1.0, 0.0),
            CScalar::new(0.0, 0.0),
            y,
            CScalar::new(1.0, 0.0),
        )
    }

    /// ABCD determinant `ad - bc` (1 for reciprocal networks).
    #[must_use]
    pub fn determinant(&self) -> CScalar {
        self.a * self.d - self.b * self.c
    }

    /// Cascades this two-port with `rhs` (i.e., self followed by rhs).
    #[must_use]
    pub fn cascade(&self, rhs: &TwoPort) -> TwoPort {
        // Matrix multiplication [[a b],[c d]] * [[a' b'],[c' d']]
        TwoPort {
            a: self.a * rhs.a + self.b * rhs.c,
            b: self.a * rhs.b + self.b * rhs.d,
            c: self.c * rhs.a + self.d * rhs.c,
            d: self.c * rhs.b + self.d * rhs.d,
        }
    }

    /// Cascades a sequence of two-ports from source to load.
    /// Returns identity for an empty sequence.
    #[must_use]
    pub fn cascade_all<'a>(list: impl IntoIterator<Item = &'a TwoPort>) -> TwoPort {
        let mut acc = TwoPort::identity();
        for t in list {
            acc = acc.cascade(t);
        }
        acc
    }

    /// Input impedance at port 1 when port 2 is terminated by `z_load`:
    /// Zin = (A·ZL + B) / (C·ZL + D).
    ///
    /// A denominator magnitude below 1e-12 models an open-circuit input and
    /// yields a positive-infinity sentinel instead of a division blow-up, so
    /// batch pipelines keep running across degenerate samples.
    #[must_use]
    pub fn input_impedance(&self, z_load: CScalar) -> CScalar {
        let denom = self.c * z_load + self.d;
        if denom.norm() < DENOM_EPS {
            return CScalar::new(Scalar::INFINITY, 0.0);
        }
        (self.a * z_load + self.b) / denom
    }
}
