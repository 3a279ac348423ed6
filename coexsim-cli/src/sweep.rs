//! Angle sweeps and CSV rendering of pattern samples

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use coexsim_antenna::AntennaPattern;

/// `num` evenly spaced values over `[start, stop]`, endpoints included.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut values: Vec<f64> = (0..num).map(|i| start + i as f64 * step).collect();
            values[num - 1] = stop;
            values
        }
    }
}

/// Off-axis angle sweep definition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    /// First angle (deg)
    pub start_deg: f64,
    /// Last angle (deg)
    pub stop_deg: f64,
    /// Number of samples
    pub num: usize,
}

impl Sweep {
    /// Rejects sweeps that cannot be sampled.
    pub fn validate(&self) -> Result<()> {
        if !(self.start_deg.is_finite() && self.stop_deg.is_finite()) {
            bail!("Sweep bounds must be finite");
        }
        if self.start_deg > self.stop_deg {
            bail!(
                "Sweep start {} deg is after stop {} deg",
                self.start_deg,
                self.stop_deg
            );
        }
        if self.num == 0 {
            bail!("Sweep needs at least one sample");
        }
        Ok(())
    }

    /// Sampled angles
    pub fn angles(&self) -> Vec<f64> {
        linspace(self.start_deg, self.stop_deg, self.num)
    }
}

/// Evaluates `antenna` over the sweep and writes `phi_deg,gain_db` rows.
///
/// Gains are relative to G_m unless `absolute` is set. Returns the number of
/// rows written.
pub fn write_pattern_csv<W: Write>(
    out: &mut W,
    antenna: &dyn AntennaPattern,
    sweep: &Sweep,
    absolute: bool,
) -> Result<usize> {
    sweep.validate()?;
    let phi = sweep.angles();
    let gain = if absolute {
        antenna.calculate_gain(&phi)
    } else {
        antenna.calculate_relative_gain(&phi)
    }
    .context("Failed to evaluate antenna pattern")?;

    write_rows(out, &phi, &gain).context("Failed to write CSV output")?;
    Ok(gain.len())
}

fn write_rows<W: Write>(out: &mut W, phi: &[f64], gain: &[f64]) -> io::Result<()> {
    writeln!(out, "phi_deg,gain_db")?;
    for (p, g) in phi.iter().zip(gain) {
        writeln!(out, "{p},{g}")?;
    }
    out.flush()
}

/// Writes the sweep to stdout.
pub fn print_pattern_csv(
    antenna: &dyn AntennaPattern,
    sweep: &Sweep,
    absolute: bool,
) -> Result<usize> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    write_pattern_csv(&mut out, antenna, sweep, absolute)
}
