//! The solver triad: oblique-shock relations, Prandtl-Meyer expansion
//! relations, and the same-family intersection matching algorithm.
//!
//! The crate-level functions below are the convenience surface for
//! standard air (gamma = 1.4) with default solver settings; construct
//! [`ObliqueShock`], [`PrandtlMeyer`] or [`IntersectionSolver`] directly
//! for other gases or tunings.

pub mod intersection;
pub mod oblique;
pub mod prandtl_meyer;

pub use intersection::IntersectionSolver;
pub use oblique::{ObliqueShock, ShockBranch};
pub use prandtl_meyer::PrandtlMeyer;

use gasdyn_types::error::GasdynResult;
use gasdyn_types::state::{MatchResult, MaxDeflection, ObliqueShockSolution};

/// Complete weak-shock analysis at `m1`, `theta` [deg] in standard air.
pub fn solve_oblique_shock(m1: f64, theta: f64) -> GasdynResult<ObliqueShockSolution> {
    ObliqueShock::default().solve(m1, theta)
}

/// Detachment boundary for `m1` in standard air.
pub fn max_deflection(m1: f64) -> GasdynResult<MaxDeflection> {
    ObliqueShock::default().max_deflection(m1)
}

/// Prandtl-Meyer expansion angle nu(M) [deg] in standard air.
pub fn prandtl_meyer_angle(m: f64) -> GasdynResult<f64> {
    PrandtlMeyer::default().nu(m)
}

/// Downstream Mach number after expanding `m1` through `theta` [deg]
/// in standard air.
pub fn expand(m1: f64, theta: f64) -> GasdynResult<f64> {
    PrandtlMeyer::default().mach_from_expansion(m1, theta)
}

/// Same-family intersection solve with the given per-hypothesis
/// iteration cap, in standard air.
pub fn solve_intersection(
    m1: f64,
    theta1: f64,
    theta2: f64,
    iteration_cap: usize,
) -> GasdynResult<MatchResult> {
    IntersectionSolver::default()
        .with_iteration_cap(iteration_cap)
        .solve(m1, theta1, theta2)
}
