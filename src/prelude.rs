//! Convenience re-exports for transmission-line analysis and matching.

pub use crate::constants::{
    angular_frequency, wavelength_from_beta, wavelength_from_frequency, FREE_SPACE_IMPEDANCE,
    SPEED_OF_LIGHT,
};
pub use crate::dataset::{
    make_classification_data, make_regression_data, write_regression_csv, ClassificationData,
    DatasetConfig, RegressionData,
};
pub use crate::errors::TlPhysicsError;
pub use crate::line::{propagation_characteristics, LineParameters, PropagationCharacteristics};
pub use crate::matching::{
    quarter_wave_transform, single_stub_shunt, MatchingError, QuarterWaveMatch, StubMatch,
    StubTermination,
};
pub use crate::math::{phasor, principal_sqrt, CScalar, Scalar};
pub use crate::metrics::{mismatch_loss_db, reflection_coefficient, return_loss_db, vswr};
pub use crate::sweep::{linspace, logspace_hz, mag, mag_db, phase_deg, phase_rad, sweep_vswr};
pub use crate::twoport::TwoPort;
pub use crate::waveform::{standing_wave, voltage_current_envelopes};
