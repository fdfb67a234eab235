// ─────────────────────────────────────────────────────────────────────
// SCPN Gasdynamics Core — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Flow-state value types shared by the solver triad.
//!
//! Every type here is created once per call and never mutated afterwards.

/// Thermodynamic state of one flow region.
///
/// Ratios are cumulative, relative to the freestream (region 1), so chained
/// regions multiply their across-wave ratios into the upstream state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowState {
    pub mach: f64,
    pub pressure_ratio: f64,
    pub temperature_ratio: f64,
    pub density_ratio: f64,
    pub total_pressure_ratio: f64,
}

impl FlowState {
    /// Undisturbed freestream: all ratios unity.
    pub fn freestream(mach: f64) -> Self {
        FlowState {
            mach,
            pressure_ratio: 1.0,
            temperature_ratio: 1.0,
            density_ratio: 1.0,
            total_pressure_ratio: 1.0,
        }
    }
}

/// The wave that generated a region's downstream state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeneratingWave {
    /// Oblique compression wave at angle beta [deg].
    ObliqueShock { beta: f64 },
    /// Prandtl-Meyer fan turning the flow by the given angle [deg].
    ExpansionFan { turning: f64 },
}

impl GeneratingWave {
    /// The wave's characteristic angle, whichever kind it is [deg].
    pub fn angle(&self) -> f64 {
        match *self {
            GeneratingWave::ObliqueShock { beta } => beta,
            GeneratingWave::ExpansionFan { turning } => turning,
        }
    }
}

/// A numbered flow zone (1..5) bounded by waves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// Zone number: 1 freestream, 2/3 behind the ramp shocks,
    /// 4/5 on either side of the slip line.
    pub id: u8,
    /// Cumulative deflection from the freestream direction [deg].
    pub theta: f64,
    /// Generating wave; `None` for the freestream.
    pub wave: Option<GeneratingWave>,
    pub state: FlowState,
}

impl Region {
    pub fn freestream(mach: f64) -> Self {
        Region {
            id: 1,
            theta: 0.0,
            wave: None,
            state: FlowState::freestream(mach),
        }
    }
}

/// Both admissible shock angles for a (M, theta) pair, with the
/// detachment boundary that separates them.
///
/// Invariant: `beta_weak < beta_at_theta_max <= beta_strong`. Only
/// constructed for theta <= theta_max(M).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSolution {
    pub beta_weak: f64,
    pub beta_strong: f64,
    pub theta_max: f64,
    pub beta_at_theta_max: f64,
}

/// Detachment boundary for a given Mach number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxDeflection {
    /// Largest deflection with an attached solution [deg].
    pub theta_max: f64,
    /// Shock angle at which that maximum occurs [deg].
    pub beta_at_theta_max: f64,
}

/// Complete single-shock analysis. Ratios are across this one wave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObliqueShockSolution {
    pub beta: f64,
    pub mach: f64,
    pub pressure_ratio: f64,
    pub temperature_ratio: f64,
    pub density_ratio: f64,
    pub total_pressure_ratio: f64,
}

/// Complete expansion-fan analysis. Ratios are across the fan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpansionSolution {
    pub mach: f64,
    pub pressure_ratio: f64,
    pub temperature_ratio: f64,
    pub density_ratio: f64,
    /// Prandtl-Meyer angle upstream of the fan [deg].
    pub nu_upstream: f64,
    /// Prandtl-Meyer angle downstream of the fan [deg].
    pub nu_downstream: f64,
}

/// Which wave forms at the slip line between regions 4 and 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlipLineTopology {
    ExpansionAtSlipLine,
    ShockAtSlipLine,
}

/// Terminal artifact of the same-family intersection solve.
///
/// Non-convergence is an ordinary outcome, not an error: `converged` is
/// false, the slip-line fields are `None`, and `iterations` equals the cap.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub topology: Option<SlipLineTopology>,
    /// Converged correction angle delta [deg]; negative for the shock
    /// topology, where it subtracts from the nominal total turning.
    pub converged_angle: Option<f64>,
    pub converged: bool,
    pub iterations: usize,
    pub region2: Region,
    pub region3: Region,
    pub region4: Option<Region>,
    pub region5: Option<Region>,
    pub solve_time_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freestream_ratios_unity() {
        let state = FlowState::freestream(2.5);
        assert_eq!(state.mach, 2.5);
        assert_eq!(state.pressure_ratio, 1.0);
        assert_eq!(state.temperature_ratio, 1.0);
        assert_eq!(state.density_ratio, 1.0);
        assert_eq!(state.total_pressure_ratio, 1.0);
    }

    #[test]
    fn test_freestream_region() {
        let region = Region::freestream(3.0);
        assert_eq!(region.id, 1);
        assert_eq!(region.theta, 0.0);
        assert!(region.wave.is_none());
    }

    #[test]
    fn test_generating_wave_angle() {
        let shock = GeneratingWave::ObliqueShock { beta: 41.2 };
        let fan = GeneratingWave::ExpansionFan { turning: 0.05 };
        assert_eq!(shock.angle(), 41.2);
        assert_eq!(fan.angle(), 0.05);
    }
}
