// ─────────────────────────────────────────────────────────────────────
// SCPN Gasdynamics Core — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GasdynError {
    #[error("inlet Mach {mach:.3} is subsonic; an attached shock requires M > 1")]
    SubsonicInput { mach: f64 },

    #[error("deflection {theta:.3}° is outside the attached-shock range (0°, {theta_max:.3}°]")]
    DetachedShock { theta: f64, theta_max: f64 },

    #[error("Prandtl-Meyer function is undefined for M = {0:.3}; requires M > 1")]
    InvalidMach(f64),

    #[error("solver diverged at iteration {iteration}: {message}")]
    SolverDiverged { iteration: usize, message: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type GasdynResult<T> = Result<T, GasdynError>;
