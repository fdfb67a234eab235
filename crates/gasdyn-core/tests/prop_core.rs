// ─────────────────────────────────────────────────────────────────────
// SCPN Gasdynamics Core — Property-Based Tests (proptest) for gasdyn-core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for gasdyn-core using proptest.
//!
//! Covers: theta–beta–Mach roundtrips, detachment-boundary monotonicity,
//! branch ordering, Prandtl-Meyer inversion, ratio bounds, solver purity.

use gasdyn_core::oblique::{ObliqueShock, ShockBranch};
use gasdyn_core::prandtl_meyer::PrandtlMeyer;
use proptest::prelude::*;

// ── Oblique-Shock Properties ─────────────────────────────────────────

proptest! {
    /// Weak-branch solve inverts theta_from_beta to within 1e-3°.
    #[test]
    fn weak_branch_roundtrip(
        m in 1.1f64..5.0,
        frac in 0.05f64..0.95,
    ) {
        let shock = ObliqueShock::default();
        let theta = frac * shock.max_deflection(m).unwrap().theta_max;
        let beta = shock.solve_beta(m, theta, ShockBranch::Weak).unwrap();
        let recovered = shock.theta_from_beta(m, beta);
        prop_assert!((recovered - theta).abs() < 1e-3,
            "M = {}: theta {} -> beta {} -> theta {}", m, theta, beta, recovered);
    }

    /// Strong-branch solve inverts the relation too.
    #[test]
    fn strong_branch_roundtrip(
        m in 1.1f64..5.0,
        frac in 0.05f64..0.95,
    ) {
        let shock = ObliqueShock::default();
        let theta = frac * shock.max_deflection(m).unwrap().theta_max;
        let beta = shock.solve_beta(m, theta, ShockBranch::Strong).unwrap();
        let recovered = shock.theta_from_beta(m, beta);
        prop_assert!((recovered - theta).abs() < 1e-3);
    }

    /// beta_weak < beta_at_theta_max <= beta_strong for every admissible
    /// deflection.
    #[test]
    fn wave_solution_ordered(
        m in 1.1f64..5.0,
        frac in 0.05f64..0.9,
    ) {
        let shock = ObliqueShock::default();
        let theta = frac * shock.max_deflection(m).unwrap().theta_max;
        let ws = shock.wave_solution(m, theta).unwrap();
        prop_assert!(ws.beta_weak < ws.beta_at_theta_max,
            "weak {} not below boundary {}", ws.beta_weak, ws.beta_at_theta_max);
        prop_assert!(ws.beta_at_theta_max <= ws.beta_strong,
            "boundary {} not below strong {}", ws.beta_at_theta_max, ws.beta_strong);
    }

    /// theta_max is non-decreasing in Mach number.
    #[test]
    fn max_deflection_monotone(
        m_lo in 1.1f64..4.0,
        gap in 0.1f64..2.0,
    ) {
        let shock = ObliqueShock::default();
        let lo = shock.max_deflection(m_lo).unwrap().theta_max;
        let hi = shock.max_deflection(m_lo + gap).unwrap().theta_max;
        prop_assert!(hi >= lo,
            "theta_max({}) = {} exceeds theta_max({}) = {}", m_lo, lo, m_lo + gap, hi);
    }

    /// Deflections beyond the boundary always fail as detached.
    #[test]
    fn beyond_boundary_detaches(
        m in 1.1f64..5.0,
        excess in 0.001f64..10.0,
    ) {
        let shock = ObliqueShock::default();
        let theta = shock.max_deflection(m).unwrap().theta_max + excess;
        prop_assert!(shock.solve_beta(m, theta, ShockBranch::Weak).is_err());
    }

    /// Compression: p2/p1 >= 1 and pt2/pt1 <= 1 across any weak shock.
    #[test]
    fn weak_shock_ratio_bounds(
        m in 1.1f64..5.0,
        frac in 0.05f64..0.95,
    ) {
        let shock = ObliqueShock::default();
        let theta = frac * shock.max_deflection(m).unwrap().theta_max;
        prop_assert!(shock.pressure_ratio(m, theta).unwrap() >= 1.0);
        let pt = shock.total_pressure_ratio(m, theta).unwrap();
        prop_assert!(pt <= 1.0 && pt > 0.0);
    }

    /// Identical inputs give bit-identical outputs.
    #[test]
    fn oblique_solve_pure(
        m in 1.1f64..5.0,
        frac in 0.05f64..0.95,
    ) {
        let theta = frac * gasdyn_core::max_deflection(m).unwrap().theta_max;
        let a = gasdyn_core::solve_oblique_shock(m, theta).unwrap();
        let b = gasdyn_core::solve_oblique_shock(m, theta).unwrap();
        prop_assert_eq!(a, b);
    }
}

// ── Prandtl-Meyer Properties ─────────────────────────────────────────

proptest! {
    /// nu is strictly increasing for M > 1.
    #[test]
    fn nu_strictly_increasing(
        m in 1.01f64..8.0,
        gap in 0.01f64..2.0,
    ) {
        let pm = PrandtlMeyer::default();
        prop_assert!(pm.nu(m + gap).unwrap() > pm.nu(m).unwrap());
    }

    /// mach_from_expansion inverts nu: nu(M2) − nu(M1) recovers theta.
    #[test]
    fn expansion_inverts_nu(
        m in 1.05f64..5.0,
        theta in 0.1f64..40.0,
    ) {
        let pm = PrandtlMeyer::default();
        let m2 = pm.mach_from_expansion(m, theta).unwrap();
        let recovered = pm.nu(m2).unwrap() - pm.nu(m).unwrap();
        prop_assert!((recovered - theta).abs() < 1e-6,
            "M = {}: theta {} recovered as {}", m, theta, recovered);
        prop_assert!(m2 > m, "expansion must accelerate the flow");
    }

    /// Expansion: p2/p1 <= 1, T2/T1 <= 1, rho2/rho1 <= 1 for theta > 0.
    #[test]
    fn expansion_ratio_bounds(
        m in 1.05f64..5.0,
        theta in 0.1f64..40.0,
    ) {
        let pm = PrandtlMeyer::default();
        prop_assert!(pm.pressure_ratio(m, theta).unwrap() <= 1.0);
        prop_assert!(pm.temperature_ratio(m, theta).unwrap() <= 1.0);
        prop_assert!(pm.density_ratio(m, theta).unwrap() <= 1.0);
    }

    /// Isentropic consistency: rho = p / T across any fan.
    #[test]
    fn expansion_state_equation(
        m in 1.05f64..5.0,
        theta in 0.1f64..30.0,
    ) {
        let pm = PrandtlMeyer::default();
        let fan = pm.solve(m, theta).unwrap();
        prop_assert!(
            (fan.density_ratio - fan.pressure_ratio / fan.temperature_ratio).abs() < 1e-10);
    }
}
