//! Error types for antenna pattern evaluation

use thiserror::Error;

/// Errors raised while building or evaluating an antenna pattern
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AntennaError {
    /// The antenna parameters cannot produce a pattern
    #[error("Invalid antenna configuration: {reason}")]
    InvalidConfiguration {
        /// Why the configuration was rejected
        reason: String,
    },

    /// Off-axis angle outside the region covered by the envelope
    #[error("Off-axis angle {phi_deg} deg at index {index} is outside the pattern domain [0, 180)")]
    Domain {
        /// Position of the offending angle in the input
        index: usize,
        /// The angle as supplied by the caller
        phi_deg: f64,
    },

    /// The near-boresight quadratic has no real root for this angle
    #[error("No real attenuation for off-axis angle {phi_deg} deg at index {index} (radicand {radicand})")]
    Numeric {
        /// Position of the offending angle in the input
        index: usize,
        /// The angle as supplied by the caller
        phi_deg: f64,
        /// Negative discriminant of the quadratic
        radicand: f64,
    },
}

impl From<coexsim_common::Error> for AntennaError {
    fn from(err: coexsim_common::Error) -> Self {
        AntennaError::InvalidConfiguration {
            reason: err.to_string(),
        }
    }
}
