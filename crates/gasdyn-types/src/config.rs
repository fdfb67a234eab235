// ─────────────────────────────────────────────────────────────────────
// SCPN Gasdynamics Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BETA_SAMPLES, DEFAULT_MAX_ITERATIONS, DEFAULT_STEP_DEG, DEFAULT_TOLERANCE, GAMMA_AIR,
};
use crate::error::{GasdynError, GasdynResult};

/// Top-level analysis configuration, loaded from a JSON case file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub case_name: String,
    #[serde(default)]
    pub gas: GasModel,
    #[serde(default)]
    pub solver: SolverSettings,
}

/// Working-gas model. Gamma is an explicit parameter everywhere;
/// there is no implicit shared gas state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GasModel {
    /// Ratio of specific heats (default: 1.4, standard air)
    #[serde(default = "default_gamma")]
    pub gamma: f64,
}

/// Slip-line search and detachment-scan settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SolverSettings {
    /// Pressure-match tolerance on |P4/P1 − P5/P1| (default: 0.001)
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Correction-angle increment in degrees (default: 0.001)
    #[serde(default = "default_step_deg")]
    pub step_deg: f64,
    /// Iteration cap per hypothesis (default: 1000)
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Detachment-boundary scan resolution (default: 1000)
    #[serde(default = "default_beta_samples")]
    pub beta_samples: usize,
}

fn default_gamma() -> f64 {
    GAMMA_AIR
}
fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}
fn default_step_deg() -> f64 {
    DEFAULT_STEP_DEG
}
fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}
fn default_beta_samples() -> usize {
    DEFAULT_BETA_SAMPLES
}

impl Default for GasModel {
    fn default() -> Self {
        GasModel {
            gamma: default_gamma(),
        }
    }
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings {
            tolerance: default_tolerance(),
            step_deg: default_step_deg(),
            max_iterations: default_max_iterations(),
            beta_samples: default_beta_samples(),
        }
    }
}

impl AnalysisConfig {
    /// Load and validate a case file.
    pub fn from_file(path: &str) -> GasdynResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the solver cannot run with.
    pub fn validate(&self) -> GasdynResult<()> {
        if self.gas.gamma <= 1.0 {
            return Err(GasdynError::Config(format!(
                "gamma must exceed 1, got {}",
                self.gas.gamma
            )));
        }
        if self.solver.tolerance <= 0.0 {
            return Err(GasdynError::Config(format!(
                "tolerance must be positive, got {}",
                self.solver.tolerance
            )));
        }
        if self.solver.step_deg <= 0.0 {
            return Err(GasdynError::Config(format!(
                "step_deg must be positive, got {}",
                self.solver.step_deg
            )));
        }
        if self.solver.max_iterations == 0 {
            return Err(GasdynError::Config(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if self.solver.beta_samples < 2 {
            return Err(GasdynError::Config(format!(
                "beta_samples must be at least 2, got {}",
                self.solver.beta_samples
            )));
        }
        Ok(())
    }
}
