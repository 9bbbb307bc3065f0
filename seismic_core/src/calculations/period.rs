//! Empirical fundamental period.
//!
//! T1 = Ct · hn^α, with (Ct, α) from the structural system and hn the total
//! building height in meters.

use serde::{Deserialize, Serialize};

use crate::structure::StructuralSystem;

/// Multiplier on T1 for the analytical period upper limit
pub const PERIOD_LIMIT_FACTOR: f64 = 1.3;

/// Fundamental period estimate and the coefficients behind it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodEstimate {
    /// Structural system coefficient Ct
    pub ct: f64,
    /// Structural system exponent α
    pub alpha: f64,
    /// Total building height hn (m)
    pub height_m: f64,
    /// Fundamental period T1 (s)
    pub t1_s: f64,
    /// Upper limit for an analytically computed period, 1.3·T1 (s)
    pub t1_limit_s: f64,
}

/// Fundamental period T1 (s) for a building of total height `height_m`.
pub fn fundamental_period(height_m: f64, system: StructuralSystem) -> f64 {
    let (ct, alpha) = system.period_coefficients();
    ct * height_m.powf(alpha)
}

/// Estimate the fundamental period with its supporting values.
pub fn estimate(height_m: f64, system: StructuralSystem) -> PeriodEstimate {
    let (ct, alpha) = system.period_coefficients();
    let t1_s = fundamental_period(height_m, system);
    PeriodEstimate {
        ct,
        alpha,
        height_m,
        t1_s,
        t1_limit_s: PERIOD_LIMIT_FACTOR * t1_s,
    }
}
