#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Physical constants and frequency helpers.
pub mod constants;
/// Shared numerical primitives (scalar aliases, principal-branch square root).
pub mod math;
/// Per-unit-length line parameters and the propagation solver.
pub mod line;
/// ABCD two-port matrices for line sections and shunt elements.
pub mod twoport;
/// Reflection, VSWR, return-loss, and mismatch-loss metrics.
pub mod metrics;
/// Quarter-wave transformer and single-stub shunt matching solvers.
pub mod matching;
/// Voltage/current standing-wave envelopes along a line.
pub mod waveform;
/// Frequency sweep builders and post-processing helpers.
pub mod sweep;
/// Seeded batch synthesis of feature/target matrices for line metrics.
pub mod dataset;
/// Error types shared across modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
