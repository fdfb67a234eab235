// ─────────────────────────────────────────────────────────────────────
// SCPN Gasdynamics Core — Record
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! One flat record per intersection run, the schema persistence and
//! presentation collaborators consume. Column names follow the historical
//! result tables; slip-line columns are absent for unconverged runs.

use serde::Serialize;

use crate::error::GasdynResult;
use crate::state::{MatchResult, Region, SlipLineTopology};

#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    #[serde(rename = "Case")]
    pub case: String,
    #[serde(rename = "Inlet Mach")]
    pub inlet_mach: f64,
    #[serde(rename = "First Ramp Angle")]
    pub first_ramp_angle: f64,
    #[serde(rename = "Ramp Increase Angle")]
    pub ramp_increase_angle: f64,
    #[serde(rename = "Mach 2")]
    pub mach_2: f64,
    #[serde(rename = "Mach 3")]
    pub mach_3: f64,
    #[serde(rename = "Beta1")]
    pub beta_1: f64,
    #[serde(rename = "Beta2")]
    pub beta_2: f64,
    /// Freestream-side slip-line wave angle (region 5 shock beta).
    #[serde(rename = "Beta3", skip_serializing_if = "Option::is_none")]
    pub beta_3: Option<f64>,
    /// Region-4 generating wave angle: shock beta for the shock topology,
    /// fan turning angle for the expansion topology.
    #[serde(rename = "Beta4", skip_serializing_if = "Option::is_none")]
    pub beta_4: Option<f64>,
    #[serde(rename = "P2/P1")]
    pub p2_over_p1: f64,
    #[serde(rename = "T2/T1")]
    pub t2_over_t1: f64,
    #[serde(rename = "rho2/rho1")]
    pub rho2_over_rho1: f64,
    #[serde(rename = "Pt2/Pt1")]
    pub pt2_over_pt1: f64,
    #[serde(rename = "P3/P1")]
    pub p3_over_p1: f64,
    #[serde(rename = "T3/T1")]
    pub t3_over_t1: f64,
    #[serde(rename = "rho3/rho1")]
    pub rho3_over_rho1: f64,
    #[serde(rename = "Pt3/Pt1")]
    pub pt3_over_pt1: f64,
    #[serde(rename = "Theta", skip_serializing_if = "Option::is_none")]
    pub converged_angle: Option<f64>,
    #[serde(rename = "Mach 4", skip_serializing_if = "Option::is_none")]
    pub mach_4: Option<f64>,
    #[serde(rename = "Mach 5", skip_serializing_if = "Option::is_none")]
    pub mach_5: Option<f64>,
    #[serde(rename = "P4/P1", skip_serializing_if = "Option::is_none")]
    pub p4_over_p1: Option<f64>,
    #[serde(rename = "P5/P1", skip_serializing_if = "Option::is_none")]
    pub p5_over_p1: Option<f64>,
    #[serde(rename = "T4/T1", skip_serializing_if = "Option::is_none")]
    pub t4_over_t1: Option<f64>,
    #[serde(rename = "T5/T1", skip_serializing_if = "Option::is_none")]
    pub t5_over_t1: Option<f64>,
    #[serde(rename = "rho4/rho1", skip_serializing_if = "Option::is_none")]
    pub rho4_over_rho1: Option<f64>,
    #[serde(rename = "rho5/rho1", skip_serializing_if = "Option::is_none")]
    pub rho5_over_rho1: Option<f64>,
    #[serde(rename = "Pt4/Pt1", skip_serializing_if = "Option::is_none")]
    pub pt4_over_pt1: Option<f64>,
    #[serde(rename = "Pt5/Pt1", skip_serializing_if = "Option::is_none")]
    pub pt5_over_pt1: Option<f64>,
    #[serde(rename = "Iteration Count")]
    pub iteration_count: usize,
    #[serde(rename = "Execution Time (s)")]
    pub execution_time_s: f64,
}

impl RunRecord {
    /// Flatten one solve into a record.
    pub fn from_result(
        inlet_mach: f64,
        first_ramp_angle: f64,
        ramp_increase_angle: f64,
        result: &MatchResult,
    ) -> Self {
        let case = match result.topology {
            Some(SlipLineTopology::ExpansionAtSlipLine) => "Expansion Wave",
            Some(SlipLineTopology::ShockAtSlipLine) => "Shock Wave",
            None => "No Solution",
        };
        let wave_angle = |region: &Option<Region>| {
            region
                .as_ref()
                .and_then(|r| r.wave.as_ref().map(|w| w.angle()))
        };

        RunRecord {
            case: case.to_string(),
            inlet_mach,
            first_ramp_angle,
            ramp_increase_angle,
            mach_2: result.region2.state.mach,
            mach_3: result.region3.state.mach,
            beta_1: result
                .region2
                .wave
                .map(|w| w.angle())
                .unwrap_or(f64::NAN),
            beta_2: result
                .region3
                .wave
                .map(|w| w.angle())
                .unwrap_or(f64::NAN),
            beta_3: wave_angle(&result.region5),
            beta_4: wave_angle(&result.region4),
            p2_over_p1: result.region2.state.pressure_ratio,
            t2_over_t1: result.region2.state.temperature_ratio,
            rho2_over_rho1: result.region2.state.density_ratio,
            pt2_over_pt1: result.region2.state.total_pressure_ratio,
            p3_over_p1: result.region3.state.pressure_ratio,
            t3_over_t1: result.region3.state.temperature_ratio,
            rho3_over_rho1: result.region3.state.density_ratio,
            pt3_over_pt1: result.region3.state.total_pressure_ratio,
            converged_angle: result.converged_angle,
            mach_4: result.region4.map(|r| r.state.mach),
            mach_5: result.region5.map(|r| r.state.mach),
            p4_over_p1: result.region4.map(|r| r.state.pressure_ratio),
            p5_over_p1: result.region5.map(|r| r.state.pressure_ratio),
            t4_over_t1: result.region4.map(|r| r.state.temperature_ratio),
            t5_over_t1: result.region5.map(|r| r.state.temperature_ratio),
            rho4_over_rho1: result.region4.map(|r| r.state.density_ratio),
            rho5_over_rho1: result.region5.map(|r| r.state.density_ratio),
            pt4_over_pt1: result.region4.map(|r| r.state.total_pressure_ratio),
            pt5_over_pt1: result.region5.map(|r| r.state.total_pressure_ratio),
            iteration_count: result.iterations,
            execution_time_s: result.solve_time_ms / 1000.0,
        }
    }

    /// Serialize to pretty JSON at `path`.
    pub fn save_json(&self, path: &str) -> GasdynResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
