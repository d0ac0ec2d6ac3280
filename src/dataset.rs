//! Seeded batch synthesis of feature/target matrices for line metrics.
//!
//! Downstream regression/classification experiments consume these matrices;
//! the models themselves are external to this crate. Every sample runs the
//! full propagation → two-port → metrics chain independently, so degenerate
//! draws surface as sentinel values instead of aborting the batch.

use std::io::{self, Write};

use nalgebra::DMatrix;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};

use crate::line::{propagation_characteristics, LineParameters};
use crate::math::{CScalar, Scalar};
use crate::metrics::{reflection_coefficient, vswr};
use crate::twoport::TwoPort;

/// Number of feature columns: [R, L, G, C, f, l, Re ZL, Im ZL].
pub const FEATURE_COLS: usize = 8;
/// Number of target columns: [Re Zin, Im Zin, |Γ|, VSWR].
pub const TARGET_COLS: usize = 4;

/// Configuration for dataset synthesis. The seed is explicit state, not a
/// global, so identical configs always produce identical matrices.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetConfig {
    /// Number of samples to draw.
    pub samples: usize,
    /// RNG seed.
    pub seed: u64,
    /// VSWR threshold separating "good match" labels.
    pub vswr_threshold: Scalar,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            samples: 200,
            seed: 42,
            vswr_threshold: 2.0,
        }
    }
}

/// Feature/target matrices for regression on line metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionData {
    /// One row per sample, columns per [`FEATURE_COLS`].
    pub features: DMatrix<Scalar>,
    /// One row per sample, columns per [`TARGET_COLS`].
    pub targets: DMatrix<Scalar>,
}

/// Features plus binary good-match labels (VSWR ≤ threshold).
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationData {
    /// One row per sample, columns per [`FEATURE_COLS`].
    pub features: DMatrix<Scalar>,
    /// 1 for VSWR ≤ threshold, else 0.
    pub labels: Vec<u8>,
}

/// Synthesizes a regression dataset over uniformly drawn line scenarios.
#[must_use]
pub fn make_regression_data(config: &DatasetConfig) -> RegressionData {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let r_dist = Uniform::new(0.0, 0.5);
    let l_dist = Uniform::new(1.0e-7, 5.0e-7);
    let g_dist = Uniform::new(0.0, 5.0e-8);
    let c_dist = Uniform::new(5.0e-11, 2.0e-10);
    let f_dist = Uniform::new(5.0e8, 3.0e9);
    let len_dist = Uniform::new(0.02, 0.5);
    let zl_re_dist = Uniform::new(10.0, 150.0);
    let zl_im_dist = Uniform::new(-200.0, 200.0);

    let n = config.samples;
    let mut features = DMatrix::zeros(n, FEATURE_COLS);
    let mut targets = DMatrix::zeros(n, TARGET_COLS);

    for i in 0..n {
        let params = LineParameters::new(
            r_dist.sample(&mut rng),
            l_dist.sample(&mut rng),
            g_dist.sample(&mut rng),
            c_dist.sample(&mut rng),
        );
        let freq = f_dist.sample(&mut rng);
        let length = len_dist.sample(&mut rng);
        let z_load = CScalar::new(zl_re_dist.sample(&mut rng), zl_im_dist.sample(&mut rng));

        features[(i, 0)] = params.r_per_m;
        features[(i, 1)] = params.l_per_m;
        features[(i, 2)] = params.g_per_m;
        features[(i, 3)] = params.c_per_m;
        features[(i, 4)] = freq;
        features[(i, 5)] = length;
        features[(i, 6)] = z_load.re;
        features[(i, 7)] = z_load.im;

        let pc = propagation_characteristics(&params, freq);
        let section = TwoPort::line_section(pc.gamma, pc.z0, length);
        let zin = section.input_impedance(z_load);
        let gamma_l = reflection_coefficient(z_load, pc.z0);

        targets[(i, 0)] = zin.re;
        targets[(i, 1)] = zin.im;
        targets[(i, 2)] = gamma_l.norm();
        targets[(i, 3)] = vswr(gamma_l);
    }

    RegressionData { features, targets }
}

/// Synthesizes a classification dataset: label 1 when VSWR ≤ threshold.
#[must_use]
pub fn make_classification_data(config: &DatasetConfig) -> ClassificationData {
    let regression = make_regression_data(config);
    let labels = regression
        .targets
        .row_iter()
        .map(|row| u8::from(row[3] <= config.vswr_threshold))
        .collect();
    ClassificationData {
        features: regression.features,
        labels,
    }
}

/// Writes a regression dataset as CSV: feature columns then target columns.
///
/// # Errors
///
/// Propagates I/O failures from the underlying writer.
pub fn write_regression_csv<W: Write>(mut w: W, data: &RegressionData) -> io::Result<()> {
    writeln!(
        w,
        "r_per_m,l_per_m,g_per_m,c_per_m,freq_hz,length_m,zl_re,zl_im,zin_re,zin_im,gamma_mag,vswr"
    )?;
    for i in 0..data.features.nrows() {
        for j in 0..FEATURE_COLS {
            write!(w, "{:.16e},", data.features[(i, j)])?;
        }
        for j in 0..TARGET_COLS {
            if j + 1 == TARGET_COLS {
                writeln!(w, "{:.16e}", data.targets[(i, j)])?;
            } else {
                write!(w, "{:.16e},", data.targets[(i, j)])?;
            }
        }
    }
    Ok(())
}
