// ─────────────────────────────────────────────────────────────────────
// SCPN Gasdynamics Core — Intersection
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Same-family shock intersection: two ramp shocks, then a slip-line
//! pressure match between the twice-shocked stream and the stream turned
//! directly from the freestream.
//!
//! The match is a shooting search over a correction angle delta. Two
//! topologies are tried in fixed priority order — expansion fan at the
//! slip line first, then shock at the slip line. The priority encodes
//! which physical regime is assumed first for ambiguous inputs and must
//! not be reordered. Linear stepping guarantees bracketing over [0°, 90°)
//! at O(1/step) nested solves per hypothesis.

use std::time::Instant;

use tracing::debug;

use gasdyn_types::config::{AnalysisConfig, SolverSettings};
use gasdyn_types::error::GasdynResult;
use gasdyn_types::state::{
    FlowState, GeneratingWave, MatchResult, Region, SlipLineTopology,
};

use crate::oblique::ObliqueShock;
use crate::prandtl_meyer::PrandtlMeyer;

/// Outcome of one slip-line hypothesis.
enum HypothesisOutcome {
    Converged { delta: f64, iterations: usize },
    Exhausted { iterations: usize },
}

/// Immutable same-family intersection solver.
#[derive(Debug, Clone, Copy)]
pub struct IntersectionSolver {
    oblique: ObliqueShock,
    expansion: PrandtlMeyer,
    settings: SolverSettings,
}

impl Default for IntersectionSolver {
    fn default() -> Self {
        IntersectionSolver::new(gasdyn_types::constants::GAMMA_AIR, SolverSettings::default())
    }
}

impl IntersectionSolver {
    pub fn new(gamma: f64, settings: SolverSettings) -> Self {
        IntersectionSolver {
            oblique: ObliqueShock::new(gamma).with_beta_samples(settings.beta_samples),
            expansion: PrandtlMeyer::new(gamma),
            settings,
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        IntersectionSolver::new(config.gas.gamma, config.solver)
    }

    /// Replace the per-hypothesis iteration cap.
    pub fn with_iteration_cap(mut self, cap: usize) -> Self {
        self.settings.max_iterations = cap;
        self
    }

    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    /// Solve the two-ramp intersection for inlet Mach `m1` and successive
    /// same-sense deflections `theta1`, `theta2` [deg].
    ///
    /// Errors from the ramp shocks (regions 2/3) are fatal input-validation
    /// failures. Slip-line non-convergence is an ordinary result with
    /// `converged = false`.
    pub fn solve(&self, m1: f64, theta1: f64, theta2: f64) -> GasdynResult<MatchResult> {
        self.solve_with_deadline(m1, theta1, theta2, None)
    }

    /// `solve`, giving up (as non-convergence) once `deadline` passes.
    /// The deadline is checked once per outer step; leaf solves are not
    /// interrupted.
    pub fn solve_with_deadline(
        &self,
        m1: f64,
        theta1: f64,
        theta2: f64,
        deadline: Option<Instant>,
    ) -> GasdynResult<MatchResult> {
        let start = Instant::now();

        // Regions 2 and 3: the two ramp shocks, ratios chained to region 1.
        let first = self.oblique.solve(m1, theta1)?;
        let region2 = Region {
            id: 2,
            theta: theta1,
            wave: Some(GeneratingWave::ObliqueShock { beta: first.beta }),
            state: FlowState {
                mach: first.mach,
                pressure_ratio: first.pressure_ratio,
                temperature_ratio: first.temperature_ratio,
                density_ratio: first.density_ratio,
                total_pressure_ratio: first.total_pressure_ratio,
            },
        };

        let second = self.oblique.solve(first.mach, theta2)?;
        let theta_total = theta1 + theta2;
        let region3 = Region {
            id: 3,
            theta: theta_total,
            wave: Some(GeneratingWave::ObliqueShock { beta: second.beta }),
            state: FlowState {
                mach: second.mach,
                pressure_ratio: second.pressure_ratio * region2.state.pressure_ratio,
                temperature_ratio: second.temperature_ratio * region2.state.temperature_ratio,
                density_ratio: second.density_ratio * region2.state.density_ratio,
                total_pressure_ratio: second.total_pressure_ratio
                    * region2.state.total_pressure_ratio,
            },
        };

        for topology in [
            SlipLineTopology::ExpansionAtSlipLine,
            SlipLineTopology::ShockAtSlipLine,
        ] {
            debug!(?topology, m1, theta_total, "slip-line hypothesis started");
            match self.run_hypothesis(topology, m1, &region3, theta_total, deadline) {
                HypothesisOutcome::Converged { delta, iterations } => {
                    debug!(?topology, delta, iterations, "slip-line hypothesis converged");
                    let (region4, region5) = match topology {
                        SlipLineTopology::ExpansionAtSlipLine => {
                            self.expansion_regions(m1, &region3, theta_total, delta)?
                        }
                        SlipLineTopology::ShockAtSlipLine => {
                            self.shock_regions(m1, &region3, theta_total, delta)?
                        }
                    };
                    let converged_angle = match topology {
                        SlipLineTopology::ExpansionAtSlipLine => delta,
                        // Negated: the correction subtracts from the
                        // nominal total turning.
                        SlipLineTopology::ShockAtSlipLine => -delta,
                    };
                    return Ok(MatchResult {
                        topology: Some(topology),
                        converged_angle: Some(converged_angle),
                        converged: true,
                        iterations,
                        region2,
                        region3,
                        region4: Some(region4),
                        region5: Some(region5),
                        solve_time_ms: start.elapsed().as_secs_f64() * 1000.0,
                    });
                }
                HypothesisOutcome::Exhausted { iterations } => {
                    debug!(?topology, iterations, "slip-line hypothesis exhausted");
                }
            }
        }

        Ok(MatchResult {
            topology: None,
            converged_angle: None,
            converged: false,
            iterations: self.settings.max_iterations,
            region2,
            region3,
            region4: None,
            region5: None,
            solve_time_ms: start.elapsed().as_secs_f64() * 1000.0,
        })
    }

    /// Step delta upward until P4/P1 meets P5/P1 within tolerance.
    ///
    /// A leaf error inside a probe (the trial deflection detaching, or an
    /// unreachable expansion) exhausts the hypothesis rather than failing
    /// the solve: the search has simply left the admissible range.
    fn run_hypothesis(
        &self,
        topology: SlipLineTopology,
        m1: f64,
        region3: &Region,
        theta_total: f64,
        deadline: Option<Instant>,
    ) -> HypothesisOutcome {
        let m3 = region3.state.mach;
        let p3_over_p1 = region3.state.pressure_ratio;
        let step = self.settings.step_deg;
        let tolerance = self.settings.tolerance;
        let cap = self.settings.max_iterations;

        let mut delta = step;
        let mut iterations = 0;
        while iterations < cap {
            if let Some(deadline) = deadline {
                if Instant::now() >= deadline {
                    debug!(?topology, iterations, "deadline reached");
                    return HypothesisOutcome::Exhausted { iterations };
                }
            }

            let probe = match topology {
                SlipLineTopology::ExpansionAtSlipLine => self
                    .expansion
                    .pressure_ratio(m3, delta)
                    .and_then(|across_fan| {
                        self.oblique
                            .pressure_ratio(m1, theta_total + delta)
                            .map(|p5| (across_fan * p3_over_p1, p5))
                    }),
                SlipLineTopology::ShockAtSlipLine => self
                    .oblique
                    .pressure_ratio(m3, delta)
                    .and_then(|across_shock| {
                        self.oblique
                            .pressure_ratio(m1, theta_total - delta)
                            .map(|p5| (across_shock * p3_over_p1, p5))
                    }),
            };
            let (p4_over_p1, p5_over_p1) = match probe {
                Ok(pair) => pair,
                Err(err) => {
                    debug!(?topology, delta, %err, "hypothesis left admissible range");
                    return HypothesisOutcome::Exhausted { iterations };
                }
            };

            iterations += 1;
            if (p4_over_p1 - p5_over_p1).abs() < tolerance {
                return HypothesisOutcome::Converged { delta, iterations };
            }
            delta += step;
        }
        HypothesisOutcome::Exhausted { iterations: cap }
    }

    /// Regions 4/5 for the expansion topology: isentropic fan off region 3
    /// against a single weak shock from the freestream at theta_total + delta.
    fn expansion_regions(
        &self,
        m1: f64,
        region3: &Region,
        theta_total: f64,
        delta: f64,
    ) -> GasdynResult<(Region, Region)> {
        let fan = self.expansion.solve(region3.state.mach, delta)?;
        let region4 = Region {
            id: 4,
            theta: theta_total + delta,
            wave: Some(GeneratingWave::ExpansionFan { turning: delta }),
            state: FlowState {
                mach: fan.mach,
                pressure_ratio: fan.pressure_ratio * region3.state.pressure_ratio,
                temperature_ratio: fan.temperature_ratio * region3.state.temperature_ratio,
                density_ratio: fan.density_ratio * region3.state.density_ratio,
                // The fan is isentropic; total pressure carries through.
                total_pressure_ratio: region3.state.total_pressure_ratio,
            },
        };

        let direct = self.oblique.solve(m1, theta_total + delta)?;
        let region5 = Region {
            id: 5,
            theta: theta_total + delta,
            wave: Some(GeneratingWave::ObliqueShock { beta: direct.beta }),
            state: FlowState {
                mach: direct.mach,
                pressure_ratio: direct.pressure_ratio,
                temperature_ratio: direct.temperature_ratio,
                density_ratio: direct.density_ratio,
                total_pressure_ratio: direct.total_pressure_ratio,
            },
        };
        Ok((region4, region5))
    }

    /// Regions 4/5 for the shock topology: a weak shock off region 3 at
    /// delta against a single weak shock from the freestream at
    /// theta_total − delta.
    fn shock_regions(
        &self,
        m1: f64,
        region3: &Region,
        theta_total: f64,
        delta: f64,
    ) -> GasdynResult<(Region, Region)> {
        let reflected = self.oblique.solve(region3.state.mach, delta)?;
        let region4 = Region {
            id: 4,
            theta: theta_total - delta,
            wave: Some(GeneratingWave::ObliqueShock {
                beta: reflected.beta,
            }),
            state: FlowState {
                mach: reflected.mach,
                pressure_ratio: reflected.pressure_ratio * region3.state.pressure_ratio,
                temperature_ratio: reflected.temperature_ratio * region3.state.temperature_ratio,
                density_ratio: reflected.density_ratio * region3.state.density_ratio,
                total_pressure_ratio: reflected.total_pressure_ratio
                    * region3.state.total_pressure_ratio,
            },
        };

        let direct = self.oblique.solve(m1, theta_total - delta)?;
        let region5 = Region {
            id: 5,
            theta: theta_total - delta,
            wave: Some(GeneratingWave::ObliqueShock { beta: direct.beta }),
            state: FlowState {
                mach: direct.mach,
                pressure_ratio: direct.pressure_ratio,
                temperature_ratio: direct.temperature_ratio,
                density_ratio: direct.density_ratio,
                total_pressure_ratio: direct.total_pressure_ratio,
            },
        };
        Ok((region4, region5))
    }
}
