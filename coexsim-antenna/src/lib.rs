//! Antenna radiation patterns for coexsim
//!
//! Antenna gain envelopes used by sharing and compatibility studies to
//! weigh the power exchanged between a victim and an interferer along a
//! given off-axis direction.
//!
//! # Example Usage
//!
//! ```
//! use coexsim_antenna::{AntennaPattern, AntennaRs1861Fig9c};
//! use coexsim_common::AntennaConfig;
//!
//! let config = AntennaConfig::rs1861_fig9c(50.0);
//! let antenna = AntennaRs1861Fig9c::new(&config).unwrap();
//!
//! let gain = antenna.calculate_gain(&[0.0, -150.0]).unwrap();
//! assert_eq!(gain, vec![50.0, -16.0]);
//! ```
//!
//! # References
//!
//! - ITU-R RS.1861: Typical technical and operational characteristics of
//!   Earth exploration-satellite service (passive) systems, Figure 9c

pub mod error;
pub mod factory;
pub mod pattern;
pub mod rs1861_fig9c;

pub use error::AntennaError;
pub use factory::create_antenna;
pub use pattern::AntennaPattern;
pub use rs1861_fig9c::{AntennaRs1861Fig9c, Fig9cRegion};
