//! ITU-R RS.1861 Figure 9c antenna envelope
//!
//! EESS passive sensor antenna for 23.6-24 GHz (sensor type F4). The envelope
//! is piecewise in the off-axis angle phi:
//!
//! ```text
//!   0 <= phi <  10   a*att^2 + b*att + phi = 0    (quadratic roll-off)
//!  10 <= phi <= 140  att = m*phi + c              (linear sidelobe envelope)
//! 140 <  phi <  180  att = -66 dB                 (far sidelobe floor)
//! ```
//!
//! where `att` is the gain relative to G_m.

use coexsim_common::AntennaConfig;
use tracing::{debug, trace};

use crate::error::AntennaError;
use crate::pattern::AntennaPattern;

// ============================================================================
// Envelope constants
// ============================================================================

/// End of the quadratic region (deg)
pub const PHI_1_DEG: f64 = 10.0;
/// End of the linear region (deg)
pub const PHI_2_DEG: f64 = 140.0;
/// Upper bound of the pattern domain, exclusive (deg)
pub const PHI_MAX_DEG: f64 = 180.0;

/// Quadratic coefficient of the near-boresight fit
const QUAD_A: f64 = 0.010521886;
/// Linear coefficient of the near-boresight fit
const QUAD_B: f64 = 0.650252525;
/// Slope of the sidelobe line (dB/deg)
const LINE_M: f64 = -0.25384615;
/// Intercept of the sidelobe line (dB)
const LINE_C: f64 = -30.4615385;
/// Far sidelobe floor relative to G_m (dB)
const FLOOR_DB: f64 = -66.0;

const PATTERN_NAME: &str = "ITU-R RS.1861 Figure 9c";

/// Region of the Figure 9c envelope an off-axis angle falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fig9cRegion {
    /// `0 <= phi < phi_1`, quadratic roll-off around boresight
    NearBoresight,
    /// `phi_1 <= phi <= phi_2`, linear sidelobe envelope
    Sidelobe,
    /// `phi_2 < phi < 180`, constant floor
    FarSidelobe,
}

impl Fig9cRegion {
    /// Classifies an off-axis angle using the standard breakpoints.
    ///
    /// Returns `None` for magnitudes of 180 deg or more and for NaN.
    pub fn classify(phi_deg: f64) -> Option<Self> {
        classify_between(phi_deg.abs(), PHI_1_DEG, PHI_2_DEG)
    }
}

fn classify_between(phi: f64, phi_1: f64, phi_2: f64) -> Option<Fig9cRegion> {
    if (0.0..phi_1).contains(&phi) {
        Some(Fig9cRegion::NearBoresight)
    } else if (phi_1..=phi_2).contains(&phi) {
        Some(Fig9cRegion::Sidelobe)
    } else if phi > phi_2 && phi < PHI_MAX_DEG {
        Some(Fig9cRegion::FarSidelobe)
    } else {
        None
    }
}

/// Gain relative to G_m on the quadratic part of the envelope.
///
/// Root of `a*att^2 + b*att + phi = 0` nearer zero (`+sqrt` branch), so
/// `att <= 0`. Returns the radicand as the error when the root is not real,
/// which happens past `b^2 / 4a` (~10.05 deg).
fn near_boresight_attenuation(phi: f64) -> Result<f64, f64> {
    let radicand = QUAD_B.powi(2) - 4.0 * QUAD_A * phi;
    if radicand < 0.0 {
        return Err(radicand);
    }
    Ok((-QUAD_B + radicand.sqrt()) / (2.0 * QUAD_A))
}

/// ITU-R RS.1861 Figure 9c sensor antenna.
#[derive(Debug, Clone, PartialEq)]
pub struct AntennaRs1861Fig9c {
    peak_gain: f64,
    phi_1: f64,
    phi_2: f64,
}

impl AntennaRs1861Fig9c {
    /// Builds the pattern from the antenna parameters.
    ///
    /// Only `peak_gain` is read. Fails when it is not a finite number.
    pub fn new(config: &AntennaConfig) -> Result<Self, AntennaError> {
        Self::with_peak_gain(config.peak_gain)
    }

    /// Builds the pattern for a given boresight gain in dBi.
    pub fn with_peak_gain(peak_gain: f64) -> Result<Self, AntennaError> {
        if !peak_gain.is_finite() {
            return Err(AntennaError::InvalidConfiguration {
                reason: format!("peak gain must be a finite number, got {peak_gain}"),
            });
        }
        debug!("Created {} antenna with peak gain {} dBi", PATTERN_NAME, peak_gain);
        Ok(Self {
            peak_gain,
            phi_1: PHI_1_DEG,
            phi_2: PHI_2_DEG,
        })
    }

    /// First breakpoint, end of the quadratic region (deg)
    pub fn phi_1(&self) -> f64 {
        self.phi_1
    }

    /// Second breakpoint, end of the linear region (deg)
    pub fn phi_2(&self) -> f64 {
        self.phi_2
    }

    /// Envelope region for an off-axis angle, or `None` outside [0, 180).
    pub fn region(&self, phi_deg: f64) -> Option<Fig9cRegion> {
        classify_between(phi_deg.abs(), self.phi_1, self.phi_2)
    }

    fn gain_at(&self, index: usize, phi_deg: f64) -> Result<f64, AntennaError> {
        let phi = phi_deg.abs();
        match self.region(phi) {
            Some(Fig9cRegion::NearBoresight) => near_boresight_attenuation(phi)
                .map(|att| self.peak_gain + att)
                .map_err(|radicand| AntennaError::Numeric {
                    index,
                    phi_deg,
                    radicand,
                }),
            Some(Fig9cRegion::Sidelobe) => Ok(self.peak_gain + LINE_M * phi + LINE_C),
            Some(Fig9cRegion::FarSidelobe) => Ok(self.peak_gain + FLOOR_DB),
            None => Err(AntennaError::Domain { index, phi_deg }),
        }
    }
}

impl AntennaPattern for AntennaRs1861Fig9c {
    fn name(&self) -> &'static str {
        PATTERN_NAME
    }

    fn peak_gain(&self) -> f64 {
        self.peak_gain
    }

    fn calculate_gain(&self, phi_deg: &[f64]) -> Result<Vec<f64>, AntennaError> {
        trace!("Evaluating {} gain at {} angles", PATTERN_NAME, phi_deg.len());
        phi_deg
            .iter()
            .enumerate()
            .map(|(index, &phi)| self.gain_at(index, phi))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                debug!("Rejected {} evaluation: {}", PATTERN_NAME, e);
                e
            })
    }
}
