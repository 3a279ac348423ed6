//! RS.1861 Figure 9c envelope integration tests
//!
//! Exercises the pattern through the configuration object and factory, the
//! way a simulation driver builds it.

use approx::assert_abs_diff_eq;
use coexsim_antenna::{
    create_antenna, AntennaError, AntennaPattern, AntennaRs1861Fig9c, Fig9cRegion,
};
use coexsim_common::AntennaConfig;
use coexsim_tests::{
    assert_all_close, init_test_logging, reference_config, reference_sweep, TestResult,
    GAIN_TOLERANCE_DB, REFERENCE_PEAK_GAIN_DBI,
};

// ============================================================================
// Reference scenario
// ============================================================================

#[test]
fn test_reference_scenario_values() -> TestResult {
    init_test_logging();
    let antenna = create_antenna(&reference_config())?;

    let gain = antenna.calculate_gain(&[0.0, 5.0, 10.0, 140.0, 150.0, 179.9])?;

    assert_eq!(gain[0], 50.0);
    assert_abs_diff_eq!(gain[1], 41.0, epsilon = 1e-6);
    assert_abs_diff_eq!(gain[2], 17.0, epsilon = 1e-9);
    assert_abs_diff_eq!(gain[3], -15.9999995, epsilon = 1e-9);
    assert_eq!(gain[4], -16.0);
    assert_eq!(gain[5], -16.0);
    Ok(())
}

#[test]
fn test_config_from_yaml_drives_pattern() -> TestResult {
    let config = AntennaConfig::from_yaml(
        "pattern: ITU-R RS.1861 Figure 9c\nfrequency_mhz: 23800\nantenna_gain: 50\n",
    )?;
    let antenna = create_antenna(&config)?;
    assert_eq!(antenna.peak_gain(), REFERENCE_PEAK_GAIN_DBI);
    assert_eq!(antenna.calculate_gain(&[160.0])?, vec![-16.0]);
    Ok(())
}

// ============================================================================
// Envelope properties
// ============================================================================

#[test]
fn test_shape_preserved() -> TestResult {
    let antenna = create_antenna(&reference_config())?;
    for num in [0usize, 1, 7, 1000] {
        let phi = reference_sweep(num);
        assert_eq!(phi.len(), num);
        assert_eq!(antenna.calculate_gain(&phi)?.len(), num);
    }
    Ok(())
}

#[test]
fn test_symmetry_over_sweep() -> TestResult {
    let antenna = create_antenna(&reference_config())?;
    let phi = reference_sweep(5000);
    let mirrored: Vec<f64> = phi.iter().map(|p| -p).collect();
    assert_eq!(antenna.calculate_gain(&phi)?, antenna.calculate_gain(&mirrored)?);
    Ok(())
}

#[test]
fn test_floor_is_exact() -> TestResult {
    let antenna = create_antenna(&reference_config())?;
    let phi: Vec<f64> = reference_sweep(10_000)
        .into_iter()
        .filter(|p| *p > 140.0)
        .collect();
    assert!(!phi.is_empty());
    for gain in antenna.calculate_gain(&phi)? {
        assert_eq!(gain, REFERENCE_PEAK_GAIN_DBI - 66.0);
    }
    Ok(())
}

#[test]
fn test_peak_gain_offset_invariance() -> TestResult {
    let a = AntennaRs1861Fig9c::with_peak_gain(50.0)?;
    let b = AntennaRs1861Fig9c::with_peak_gain(38.5)?;
    let phi = reference_sweep(2000);

    let gain_a = a.calculate_gain(&phi)?;
    let gain_b = b.calculate_gain(&phi)?;
    let diff: Vec<f64> = gain_a.iter().zip(&gain_b).map(|(x, y)| x - y).collect();
    assert_all_close(&diff, &vec![11.5; phi.len()], GAIN_TOLERANCE_DB);
    Ok(())
}

#[test]
fn test_relative_gain_independent_of_peak() -> TestResult {
    let a = AntennaRs1861Fig9c::with_peak_gain(50.0)?;
    let b = AntennaRs1861Fig9c::with_peak_gain(0.0)?;
    let phi = reference_sweep(500);
    assert_all_close(
        &a.calculate_relative_gain(&phi)?,
        &b.calculate_gain(&phi)?,
        GAIN_TOLERANCE_DB,
    );
    Ok(())
}

#[test]
fn test_breakpoint_continuity() -> TestResult {
    let antenna = AntennaRs1861Fig9c::with_peak_gain(0.0)?;

    // phi_2: line meets the floor
    let around_phi_2 = antenna.calculate_gain(&[140.0, 140.0 + 1e-9])?;
    assert_abs_diff_eq!(around_phi_2[0], around_phi_2[1], epsilon = GAIN_TOLERANCE_DB);

    // phi_1: the fitted parabola ends ~4.2 dB above the start of the line
    let around_phi_1 = antenna.calculate_gain(&[10.0 - 1e-9, 10.0])?;
    assert_abs_diff_eq!(around_phi_1[0] - around_phi_1[1], 4.19999, epsilon = 1e-4);
    Ok(())
}

#[test]
fn test_envelope_never_exceeds_peak() -> TestResult {
    let antenna = create_antenna(&reference_config())?;
    let gain = antenna.calculate_gain(&reference_sweep(10_000))?;
    assert!(gain.iter().all(|g| *g <= REFERENCE_PEAK_GAIN_DBI));
    assert!(gain.iter().all(|g| *g >= REFERENCE_PEAK_GAIN_DBI - 66.0 - GAIN_TOLERANCE_DB));
    Ok(())
}

#[test]
fn test_regions_partition_sweep() {
    let antenna = AntennaRs1861Fig9c::with_peak_gain(50.0).unwrap();
    for phi in reference_sweep(1000) {
        assert_eq!(antenna.region(phi), Fig9cRegion::classify(phi));
        assert!(antenna.region(phi).is_some(), "{} deg unclassified", phi);
    }
}

// ============================================================================
// Error paths
// ============================================================================

#[test]
fn test_out_of_domain_angles_fail() {
    let antenna = create_antenna(&reference_config()).unwrap();
    for phi in [180.0, -180.0, 181.0, 360.0, f64::NAN, f64::NEG_INFINITY] {
        let result = antenna.calculate_gain(&[10.0, phi]);
        assert!(
            matches!(result, Err(AntennaError::Domain { index: 1, .. })),
            "{} deg accepted",
            phi
        );
    }
}

#[test]
fn test_invalid_peak_gain_rejected() {
    let config = AntennaConfig::rs1861_fig9c(f64::INFINITY);
    assert!(matches!(
        AntennaRs1861Fig9c::new(&config),
        Err(AntennaError::InvalidConfiguration { .. })
    ));
    assert!(create_antenna(&config).is_err());
}
