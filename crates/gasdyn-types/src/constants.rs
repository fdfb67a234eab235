// ─────────────────────────────────────────────────────────────────────
// SCPN Gasdynamics Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Ratio of specific heats for standard air (calorically perfect).
pub const GAMMA_AIR: f64 = 1.4;

/// Slip-line pressure-match tolerance on |P4/P1 − P5/P1|.
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// Correction-angle increment for the slip-line search [deg].
pub const DEFAULT_STEP_DEG: f64 = 0.001;

/// Outer iteration cap for one slip-line hypothesis.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Sample count for the detachment-boundary grid scan.
/// The scan fixes theta_max; coarser sampling shifts the boundary.
pub const DEFAULT_BETA_SAMPLES: usize = 1000;

/// Offset above the Mach angle where the beta scan starts [deg].
/// Keeps cot(beta) and the denominator of the relation regular.
pub const BETA_SCAN_MARGIN_DEG: f64 = 0.001;

/// Upper Mach bound for the Prandtl-Meyer inverse bracket.
pub const EXPANSION_MACH_CEILING: f64 = 1000.0;

/// Bracket-expansion stride for the Prandtl-Meyer inverse.
pub const EXPANSION_BRACKET_STEP: f64 = 0.5;
