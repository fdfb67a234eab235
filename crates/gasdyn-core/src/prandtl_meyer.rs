// ─────────────────────────────────────────────────────────────────────
// SCPN Gasdynamics Core — Prandtl-Meyer
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Prandtl-Meyer expansion relations: the expansion function nu(M), its
//! inverse, and the isentropic ratio chain across a fan.
//!
//! nu is strictly increasing for M > 1, so the inverse is a monotone
//! bracketed search: expand the upper bound upward, then bisect.

use gasdyn_math::roots::{bisect, bracket_upward};
use gasdyn_types::constants::{EXPANSION_BRACKET_STEP, EXPANSION_MACH_CEILING, GAMMA_AIR};
use gasdyn_types::error::{GasdynError, GasdynResult};
use gasdyn_types::state::ExpansionSolution;

/// Interval-width tolerance for the Mach bisection.
const MACH_TOL: f64 = 1e-10;

/// Bisection iteration budget.
const BISECT_MAX_ITER: usize = 200;

/// Immutable Prandtl-Meyer analyzer for one working gas.
#[derive(Debug, Clone, Copy)]
pub struct PrandtlMeyer {
    gamma: f64,
}

impl Default for PrandtlMeyer {
    fn default() -> Self {
        PrandtlMeyer::new(GAMMA_AIR)
    }
}

impl PrandtlMeyer {
    pub fn new(gamma: f64) -> Self {
        PrandtlMeyer { gamma }
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Expansion function nu(M) [deg]:
    /// nu = sqrt((γ+1)/(γ−1))·atan(sqrt((γ−1)/(γ+1)·(M²−1))) − atan(sqrt(M²−1)).
    ///
    /// Defined for M > 1 only.
    pub fn nu(&self, mach: f64) -> GasdynResult<f64> {
        if mach <= 1.0 {
            return Err(GasdynError::InvalidMach(mach));
        }
        Ok(self.nu_unchecked(mach))
    }

    /// nu without the domain gate, for bracketing closures that only ever
    /// evaluate at M >= the (supersonic) start point.
    fn nu_unchecked(&self, mach: f64) -> f64 {
        let g = self.gamma;
        let lambda = ((g + 1.0) / (g - 1.0)).sqrt();
        let root = (mach * mach - 1.0).max(0.0).sqrt();
        (lambda * (root / lambda).atan() - root.atan()).to_degrees()
    }

    /// The M → ∞ asymptote of nu [deg]; no finite Mach reaches it.
    pub fn nu_limit(&self) -> f64 {
        let g = self.gamma;
        90.0 * (((g + 1.0) / (g - 1.0)).sqrt() - 1.0)
    }

    /// Downstream Mach number after turning `theta` degrees:
    /// the unique root of nu(M2) = nu(M1) + theta.
    pub fn mach_from_expansion(&self, mach: f64, theta: f64) -> GasdynResult<f64> {
        let nu_target = self.nu(mach)? + theta;
        if nu_target >= self.nu_limit() {
            return Err(GasdynError::SolverDiverged {
                iteration: 0,
                message: format!(
                    "expansion to nu = {nu_target:.3}° exceeds the {:.3}° asymptote",
                    self.nu_limit()
                ),
            });
        }
        let f = |m: f64| self.nu_unchecked(m) - nu_target;
        let (lo, hi) = bracket_upward(f, mach, EXPANSION_BRACKET_STEP, EXPANSION_MACH_CEILING)
            .ok_or_else(|| GasdynError::SolverDiverged {
                iteration: 0,
                message: format!(
                    "no bracket for nu = {nu_target:.3}° below M = {EXPANSION_MACH_CEILING}"
                ),
            })?;
        bisect(f, lo, hi, MACH_TOL, BISECT_MAX_ITER).ok_or_else(|| GasdynError::SolverDiverged {
            iteration: BISECT_MAX_ITER,
            message: format!("Mach bisection failed for nu = {nu_target:.3}°"),
        })
    }

    /// Static pressure ratio p2/p1 across the fan (< 1 for theta > 0).
    pub fn pressure_ratio(&self, mach: f64, theta: f64) -> GasdynResult<f64> {
        let g = self.gamma;
        let m2 = self.mach_from_expansion(mach, theta)?;
        Ok(self.stagnation_temperature_ratio(mach, m2).powf(g / (g - 1.0)))
    }

    /// Static temperature ratio T2/T1 across the fan.
    pub fn temperature_ratio(&self, mach: f64, theta: f64) -> GasdynResult<f64> {
        let m2 = self.mach_from_expansion(mach, theta)?;
        Ok(self.stagnation_temperature_ratio(mach, m2))
    }

    /// Density ratio rho2/rho1 across the fan.
    pub fn density_ratio(&self, mach: f64, theta: f64) -> GasdynResult<f64> {
        let g = self.gamma;
        let m2 = self.mach_from_expansion(mach, theta)?;
        let t = self.stagnation_temperature_ratio(mach, m2);
        Ok(t.powf(g / (g - 1.0)) / t)
    }

    /// Complete fan analysis with the inverse solved once.
    pub fn solve(&self, mach: f64, theta: f64) -> GasdynResult<ExpansionSolution> {
        let g = self.gamma;
        let nu_upstream = self.nu(mach)?;
        let m2 = self.mach_from_expansion(mach, theta)?;
        let temperature_ratio = self.stagnation_temperature_ratio(mach, m2);
        let pressure_ratio = temperature_ratio.powf(g / (g - 1.0));
        Ok(ExpansionSolution {
            mach: m2,
            pressure_ratio,
            temperature_ratio,
            density_ratio: pressure_ratio / temperature_ratio,
            nu_upstream,
            nu_downstream: self.nu_unchecked(m2),
        })
    }

    /// (1 + (γ−1)/2·M1²) / (1 + (γ−1)/2·M2²) — T2/T1 at constant T0.
    fn stagnation_temperature_ratio(&self, m1: f64, m2: f64) -> f64 {
        let g = self.gamma;
        (1.0 + 0.5 * (g - 1.0) * m1 * m1) / (1.0 + 0.5 * (g - 1.0) * m2 * m2)
    }
}
