// ─────────────────────────────────────────────────────────────────────
// SCPN Gasdynamics Core — Roots
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Bracketed scalar root finding.
//!
//! Both shock-angle branches and the Prandtl-Meyer inverse are solved as
//! bracketed bisections on monotone intervals, never as seeded generic
//! searches, so convergence is deterministic and branch selection is an
//! interval choice rather than a seed choice.

/// Bisection on `[lo, hi]`. Returns the midpoint of the final interval
/// once its width drops below `tol`, or `None` when `f(lo)` and `f(hi)`
/// do not straddle zero.
pub fn bisect<F>(f: F, lo: f64, hi: f64, tol: f64, max_iter: usize) -> Option<f64>
where
    F: Fn(f64) -> f64,
{
    debug_assert!(lo < hi, "bisect requires lo < hi, got [{lo}, {hi}]");
    debug_assert!(tol > 0.0, "bisect requires tol > 0, got {tol}");

    let mut lo = lo;
    let mut hi = hi;
    let f_lo = f(lo);
    let f_hi = f(hi);

    if f_lo == 0.0 {
        return Some(lo);
    }
    if f_hi == 0.0 {
        return Some(hi);
    }
    if f_lo * f_hi > 0.0 {
        return None;
    }

    let mut f_lo = f_lo;
    for _ in 0..max_iter {
        let mid = 0.5 * (lo + hi);
        if hi - lo < tol {
            return Some(mid);
        }
        let f_mid = f(mid);
        if f_mid == 0.0 {
            return Some(mid);
        }
        if f_lo * f_mid < 0.0 {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
    }
    Some(0.5 * (lo + hi))
}

/// Walk upward from `start` in `step` increments until `f` changes sign,
/// returning the bracketing interval. `f(start)` must be <= 0 (the
/// function is assumed increasing through its root). Returns `None` when
/// the walk passes `ceiling` without a sign change, or when `f(start)`
/// is already positive.
pub fn bracket_upward<F>(f: F, start: f64, step: f64, ceiling: f64) -> Option<(f64, f64)>
where
    F: Fn(f64) -> f64,
{
    debug_assert!(step > 0.0, "bracket_upward requires step > 0, got {step}");

    if f(start) > 0.0 {
        return None;
    }

    let mut lo = start;
    let mut hi = start + step;
    while f(hi) < 0.0 {
        lo = hi;
        hi += step;
        if hi > ceiling {
            return None;
        }
    }
    Some((lo, hi))
}
