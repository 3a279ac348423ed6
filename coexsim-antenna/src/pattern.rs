//! Common interface of antenna radiation patterns

use crate::error::AntennaError;

/// An antenna radiation pattern evaluated against off-axis angles.
///
/// Implementations are immutable once built, so one instance can serve any
/// number of concurrent callers.
pub trait AntennaPattern: Send + Sync {
    /// Human readable pattern name
    fn name(&self) -> &'static str;

    /// Peak (boresight) gain G_m in dBi
    fn peak_gain(&self) -> f64;

    /// Computes the absolute gain in dBi for each off-axis angle in degrees.
    ///
    /// The result has one entry per input angle, in the same order. Angle
    /// sign is ignored.
    fn calculate_gain(&self, phi_deg: &[f64]) -> Result<Vec<f64>, AntennaError>;

    /// Computes the gain relative to the peak gain, in dB.
    fn calculate_relative_gain(&self, phi_deg: &[f64]) -> Result<Vec<f64>, AntennaError> {
        let peak_gain = self.peak_gain();
        let mut gain = self.calculate_gain(phi_deg)?;
        gain.iter_mut().for_each(|g| *g -= peak_gain);
        Ok(gain)
    }
}
