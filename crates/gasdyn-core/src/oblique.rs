// ─────────────────────────────────────────────────────────────────────
// SCPN Gasdynamics Core — Oblique
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Oblique-shock relations: the theta–beta–Mach relation, its weak and
//! strong roots, the detachment boundary, and the post-shock ratio chain.
//!
//! The detachment boundary comes from a deterministic grid scan of the
//! relation, not a calculus optimization; every downstream admissibility
//! check is pinned to that sampled boundary.

use gasdyn_math::roots::bisect;
use gasdyn_types::constants::{BETA_SCAN_MARGIN_DEG, DEFAULT_BETA_SAMPLES, GAMMA_AIR};
use gasdyn_types::error::{GasdynError, GasdynResult};
use gasdyn_types::state::{MaxDeflection, ObliqueShockSolution, WaveSolution};
use ndarray::Array1;

/// Interval-width tolerance for the beta bisection [deg].
const BETA_TOL_DEG: f64 = 1e-10;

/// Bisection iteration budget; 2^-200 of the interval is far below tolerance.
const BISECT_MAX_ITER: usize = 200;

/// Which of the two admissible shock angles to solve for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShockBranch {
    /// The commonly attached branch, beta < beta_at_theta_max.
    Weak,
    /// The near-normal branch, beta >= beta_at_theta_max.
    Strong,
}

/// Immutable oblique-shock analyzer for one working gas.
#[derive(Debug, Clone, Copy)]
pub struct ObliqueShock {
    gamma: f64,
    beta_samples: usize,
}

impl Default for ObliqueShock {
    fn default() -> Self {
        ObliqueShock::new(GAMMA_AIR)
    }
}

impl ObliqueShock {
    pub fn new(gamma: f64) -> Self {
        ObliqueShock {
            gamma,
            beta_samples: DEFAULT_BETA_SAMPLES,
        }
    }

    /// Override the detachment-scan resolution. Values below the default
    /// shift the sampled boundary and break compatibility with published
    /// results; only raise it.
    pub fn with_beta_samples(mut self, beta_samples: usize) -> Self {
        self.beta_samples = beta_samples;
        self
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Mach angle arcsin(1/M) [deg]; the lower bound of admissible beta.
    pub fn mach_angle(&self, mach: f64) -> GasdynResult<f64> {
        if mach <= 1.0 {
            return Err(GasdynError::SubsonicInput { mach });
        }
        Ok((1.0 / mach).asin().to_degrees())
    }

    /// Flow deflection produced by a wave at `beta_deg` [deg]:
    /// tan(theta) = 2·cot(beta)·(M²sin²β − 1) / (M²(γ + cos2β) + 2).
    ///
    /// Domain: beta ∈ (arcsin(1/M), 90°].
    pub fn theta_from_beta(&self, mach: f64, beta_deg: f64) -> f64 {
        debug_assert!(
            beta_deg > 0.0 && beta_deg <= 90.0,
            "beta out of range: {beta_deg}"
        );
        let beta = beta_deg.to_radians();
        let num = mach * mach * beta.sin().powi(2) - 1.0;
        let den = mach * mach * (self.gamma + (2.0 * beta).cos()) + 2.0;
        (2.0 / beta.tan() * num / den).atan().to_degrees()
    }

    /// Detachment boundary: argmax of `theta_from_beta` over a fixed-
    /// resolution scan of [arcsin(1/M)+margin, 90°].
    pub fn max_deflection(&self, mach: f64) -> GasdynResult<MaxDeflection> {
        let beta_min = self.mach_angle(mach)? + BETA_SCAN_MARGIN_DEG;
        let betas = Array1::linspace(beta_min, 90.0, self.beta_samples);

        let mut theta_max = f64::NEG_INFINITY;
        let mut beta_at_theta_max = beta_min;
        for &beta in betas.iter() {
            let theta = self.theta_from_beta(mach, beta);
            if theta > theta_max {
                theta_max = theta;
                beta_at_theta_max = beta;
            }
        }
        Ok(MaxDeflection {
            theta_max,
            beta_at_theta_max,
        })
    }

    /// Shock angle for a given deflection, on the requested branch [deg].
    ///
    /// The relation is two-valued below detachment; the branch is selected
    /// by bracketing the bisection on either side of beta_at_theta_max.
    pub fn solve_beta(&self, mach: f64, theta: f64, branch: ShockBranch) -> GasdynResult<f64> {
        let limit = self.max_deflection(mach)?;
        self.branch_root(mach, theta, branch, &limit)
    }

    /// Both branches plus the detachment boundary in one solution.
    pub fn wave_solution(&self, mach: f64, theta: f64) -> GasdynResult<WaveSolution> {
        let limit = self.max_deflection(mach)?;
        let beta_weak = self.branch_root(mach, theta, ShockBranch::Weak, &limit)?;
        let beta_strong = self.branch_root(mach, theta, ShockBranch::Strong, &limit)?;
        Ok(WaveSolution {
            beta_weak,
            beta_strong,
            theta_max: limit.theta_max,
            beta_at_theta_max: limit.beta_at_theta_max,
        })
    }

    fn branch_root(
        &self,
        mach: f64,
        theta: f64,
        branch: ShockBranch,
        limit: &MaxDeflection,
    ) -> GasdynResult<f64> {
        if theta <= 0.0 || theta > limit.theta_max {
            return Err(GasdynError::DetachedShock {
                theta,
                theta_max: limit.theta_max,
            });
        }
        let (lo, hi) = match branch {
            ShockBranch::Weak => (
                self.mach_angle(mach)? + BETA_SCAN_MARGIN_DEG,
                limit.beta_at_theta_max,
            ),
            ShockBranch::Strong => (limit.beta_at_theta_max, 90.0),
        };
        let f = |beta: f64| self.theta_from_beta(mach, beta) - theta;
        bisect(f, lo, hi, BETA_TOL_DEG, BISECT_MAX_ITER).ok_or_else(|| {
            GasdynError::SolverDiverged {
                iteration: BISECT_MAX_ITER,
                message: format!("no {branch:?}-branch shock angle for M = {mach}, theta = {theta}°"),
            }
        })
    }

    /// Downstream Mach number behind the weak shock.
    pub fn mach_after(&self, mach: f64, theta: f64) -> GasdynResult<f64> {
        let g = self.gamma;
        let beta = self.solve_beta(mach, theta, ShockBranch::Weak)?.to_radians();
        let m1n = mach * beta.sin();
        let m2n =
            ((1.0 + 0.5 * (g - 1.0) * m1n * m1n) / (g * m1n * m1n - 0.5 * (g - 1.0))).sqrt();
        Ok(m2n / (beta - theta.to_radians()).sin())
    }

    /// Static pressure ratio p2/p1 across the weak shock.
    pub fn pressure_ratio(&self, mach: f64, theta: f64) -> GasdynResult<f64> {
        let beta = self.solve_beta(mach, theta, ShockBranch::Weak)?.to_radians();
        Ok(self.normal_pressure_ratio(mach * beta.sin()))
    }

    /// Static pressure ratio p2/p1 across the strong shock.
    pub fn pressure_ratio_strong(&self, mach: f64, theta: f64) -> GasdynResult<f64> {
        let beta = self
            .solve_beta(mach, theta, ShockBranch::Strong)?
            .to_radians();
        Ok(self.normal_pressure_ratio(mach * beta.sin()))
    }

    /// Static temperature ratio T2/T1 across the weak shock.
    pub fn temperature_ratio(&self, mach: f64, theta: f64) -> GasdynResult<f64> {
        let beta = self.solve_beta(mach, theta, ShockBranch::Weak)?.to_radians();
        let m1n = mach * beta.sin();
        Ok(self.normal_pressure_ratio(m1n) / self.normal_density_ratio(m1n))
    }

    /// Density ratio rho2/rho1 across the weak shock.
    pub fn density_ratio(&self, mach: f64, theta: f64) -> GasdynResult<f64> {
        let beta = self.solve_beta(mach, theta, ShockBranch::Weak)?.to_radians();
        Ok(self.normal_density_ratio(mach * beta.sin()))
    }

    /// Total (stagnation) pressure ratio pt2/pt1 across the weak shock.
    pub fn total_pressure_ratio(&self, mach: f64, theta: f64) -> GasdynResult<f64> {
        let beta = self.solve_beta(mach, theta, ShockBranch::Weak)?.to_radians();
        Ok(self.normal_total_pressure_ratio(mach * beta.sin()))
    }

    /// Complete weak-shock analysis with beta solved once.
    pub fn solve(&self, mach: f64, theta: f64) -> GasdynResult<ObliqueShockSolution> {
        let g = self.gamma;
        let beta_deg = self.solve_beta(mach, theta, ShockBranch::Weak)?;
        let beta = beta_deg.to_radians();
        let m1n = mach * beta.sin();

        let m2n =
            ((1.0 + 0.5 * (g - 1.0) * m1n * m1n) / (g * m1n * m1n - 0.5 * (g - 1.0))).sqrt();
        let pressure_ratio = self.normal_pressure_ratio(m1n);
        let density_ratio = self.normal_density_ratio(m1n);

        Ok(ObliqueShockSolution {
            beta: beta_deg,
            mach: m2n / (beta - theta.to_radians()).sin(),
            pressure_ratio,
            temperature_ratio: pressure_ratio / density_ratio,
            density_ratio,
            total_pressure_ratio: self.normal_total_pressure_ratio(m1n),
        })
    }

    // Normal-shock relations applied to the normal Mach component M·sin(beta).

    fn normal_pressure_ratio(&self, m1n: f64) -> f64 {
        let g = self.gamma;
        1.0 + 2.0 * g / (g + 1.0) * (m1n * m1n - 1.0)
    }

    fn normal_density_ratio(&self, m1n: f64) -> f64 {
        let g = self.gamma;
        (g + 1.0) * m1n * m1n / ((g - 1.0) * m1n * m1n + 2.0)
    }

    fn normal_total_pressure_ratio(&self, m1n: f64) -> f64 {
        let g = self.gamma;
        let term1 = self.normal_density_ratio(m1n).powf(g / (g - 1.0));
        let term2 =
            ((g + 1.0) / (2.0 * g * m1n * m1n - (g - 1.0))).powf(1.0 / (g - 1.0));
        term1 * term2
    }
}
