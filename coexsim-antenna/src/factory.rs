//! Pattern construction from antenna parameters

use coexsim_common::{AntennaConfig, AntennaPatternKind};
use tracing::info;

use crate::error::AntennaError;
use crate::pattern::AntennaPattern;
use crate::rs1861_fig9c::AntennaRs1861Fig9c;

/// Builds the antenna pattern selected by `config.pattern`.
///
/// Only the fields the selected pattern reads are checked.
///
/// # Example
/// ```
/// use coexsim_antenna::create_antenna;
/// use coexsim_common::AntennaConfig;
///
/// let antenna = create_antenna(&AntennaConfig::rs1861_fig9c(50.0)).unwrap();
/// let gain = antenna.calculate_gain(&[150.0]).unwrap();
/// assert_eq!(gain, vec![-16.0]);
/// ```
pub fn create_antenna(config: &AntennaConfig) -> Result<Box<dyn AntennaPattern>, AntennaError> {
    let antenna: Box<dyn AntennaPattern> = match config.pattern {
        AntennaPatternKind::Rs1861Fig9c => Box::new(AntennaRs1861Fig9c::new(config)?),
    };
    info!(
        "Antenna pattern '{}' at {} MHz, G_m = {} dBi",
        antenna.name(),
        config.frequency_mhz,
        antenna.peak_gain()
    );
    Ok(antenna)
}
