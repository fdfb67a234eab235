// ─────────────────────────────────────────────────────────────────────
// SCPN Gasdynamics Core — Intersection Scenario Tests
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! End-to-end scenarios across the convenience API: configuration
//! loading, intersection solves at several regimes, record flattening.

use gasdyn_core::IntersectionSolver;
use gasdyn_types::config::AnalysisConfig;
use gasdyn_types::record::RunRecord;
use gasdyn_types::state::SlipLineTopology;
use std::path::PathBuf;

/// Build path relative to the workspace root.
/// CARGO_MANIFEST_DIR points to crates/gasdyn-core/ at compile time,
/// so we go up 2 levels.
fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

#[test]
fn test_solver_from_default_config() {
    let path = workspace_root().join("default_config.json");
    let config = AnalysisConfig::from_file(&path.to_string_lossy()).unwrap();
    let solver = IntersectionSolver::from_config(&config);

    let result = solver.solve(2.5, 10.0, 12.0).unwrap();
    assert!(result.converged);
    assert_eq!(result.iterations, 50);
}

#[test]
fn test_convenience_api_matches_solver() {
    let via_fn = gasdyn_core::solve_intersection(2.5, 10.0, 12.0, 1000).unwrap();
    let via_solver = IntersectionSolver::default().solve(2.5, 10.0, 12.0).unwrap();
    assert_eq!(via_fn.converged_angle, via_solver.converged_angle);
    assert_eq!(via_fn.iterations, via_solver.iterations);

    let shock = gasdyn_core::solve_oblique_shock(2.0, 15.0).unwrap();
    assert!((shock.beta - 45.343617).abs() < 1e-4);

    assert!((gasdyn_core::prandtl_meyer_angle(2.0).unwrap() - 26.379761).abs() < 1e-5);
    assert!((gasdyn_core::expand(2.0, 10.0).unwrap() - 2.384887).abs() < 1e-5);
    assert!((gasdyn_core::max_deflection(2.0).unwrap().theta_max - 22.973526).abs() < 1e-4);
}

#[test]
fn test_expansion_regimes() {
    // Twice-shocked pressure above the direct shock: fan at the slip line.
    for (m1, theta1, theta2, delta, iters) in [
        (3.0, 8.0, 10.0, 0.109, 109usize),
        (3.5, 15.0, 10.0, 0.348, 348),
        (4.0, 5.0, 5.0, 0.038, 38),
    ] {
        let result = gasdyn_core::solve_intersection(m1, theta1, theta2, 1000).unwrap();
        assert!(result.converged, "M1 = {m1} should converge");
        assert_eq!(result.topology, Some(SlipLineTopology::ExpansionAtSlipLine));
        assert_eq!(result.iterations, iters);
        assert!((result.converged_angle.unwrap() - delta).abs() < 1e-9);

        let p4 = result.region4.unwrap().state.pressure_ratio;
        let p5 = result.region5.unwrap().state.pressure_ratio;
        assert!((p4 - p5).abs() < 1e-3, "slip-line pressures must match");
    }
}

#[test]
fn test_shock_regime() {
    // Direct shock out-compresses the ramp pair: shock at the slip line.
    let result = gasdyn_core::solve_intersection(2.2, 14.0, 6.0, 1000).unwrap();
    assert!(result.converged);
    assert_eq!(result.topology, Some(SlipLineTopology::ShockAtSlipLine));
    assert_eq!(result.iterations, 49);
    assert!((result.converged_angle.unwrap() + 0.049).abs() < 1e-9);

    let region4 = result.region4.unwrap();
    let region5 = result.region5.unwrap();
    assert!((region4.state.mach - 1.458579).abs() < 1e-4);
    assert!((region5.state.mach - 1.405897).abs() < 1e-4);
}

#[test]
fn test_record_from_expansion_run() {
    let result = gasdyn_core::solve_intersection(2.5, 10.0, 12.0, 1000).unwrap();
    let record = RunRecord::from_result(2.5, 10.0, 12.0, &result);

    assert_eq!(record.case, "Expansion Wave");
    assert_eq!(record.iteration_count, 50);
    assert!((record.mach_2 - 2.085929).abs() < 1e-4);
    assert!((record.mach_3 - 1.643699).abs() < 1e-4);
    assert!((record.beta_1 - 31.850592).abs() < 1e-3);
    assert!((record.beta_2 - 39.853573).abs() < 1e-3);
    assert!((record.beta_3.unwrap() - 45.673111).abs() < 1e-3);
    // Expansion topology: Beta4 column carries the fan turning angle
    assert!((record.beta_4.unwrap() - 0.050).abs() < 1e-9);
    assert!((record.p4_over_p1.unwrap() - record.p5_over_p1.unwrap()).abs() < 1e-3);

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["Case"], "Expansion Wave");
    assert!(json["Execution Time (s)"].as_f64().unwrap() >= 0.0);
}

#[test]
fn test_record_from_capped_run() {
    let result = gasdyn_core::solve_intersection(2.5, 10.0, 12.0, 1).unwrap();
    assert!(!result.converged);
    let record = RunRecord::from_result(2.5, 10.0, 12.0, &result);
    assert_eq!(record.case, "No Solution");
    assert_eq!(record.iteration_count, 1);
    assert!(record.mach_4.is_none());

    let json = serde_json::to_value(&record).unwrap();
    assert!(json.get("Mach 4").is_none());
}
