//! # Seismic Coefficient and Base Shear
//!
//! Reduces the elastic ordinate at the fundamental period to a design
//! coefficient, enforces the minimum coefficient and computes the base shear.
//!
//! ```text
//! f     = I / (R · φP · φE)
//! C_raw = Sa(T1) · f
//! C_min = 0.16 · Z · I
//! C     = C_raw   if C_raw ≥ C_min
//!         C_min   otherwise
//! V     = C · W
//! ```

use serde::{Deserialize, Serialize};

use crate::structure::DesignFactors;

/// Minimum coefficient multiplier on Z·I
pub const MIN_COEFFICIENT_FACTOR: f64 = 0.16;

/// Outcome of the minimum coefficient check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimumShearCheck {
    /// True when C_raw ≥ C_min
    pub passes: bool,
    /// Human-readable status
    pub message: String,
}

impl MinimumShearCheck {
    fn evaluate(c_raw: f64, c_min: f64) -> Self {
        let passes = c_raw >= c_min;
        let message = if passes {
            format!("C = {:.4} >= C_min = {:.4} [OK]", c_raw, c_min)
        } else {
            format!("C = {:.4} < C_min = {:.4}, using C_min", c_raw, c_min)
        };
        MinimumShearCheck { passes, message }
    }
}

/// Seismic coefficient and base shear.
///
/// ## JSON Example
///
/// ```json
/// {
///   "sa_t1": 0.992,
///   "reduction_factor": 0.1875,
///   "c_raw": 0.186,
///   "c_min": 0.096,
///   "c": 0.186,
///   "minimum_check": { "passes": true, "message": "C = 0.1860 >= C_min = 0.0960 [OK]" },
///   "total_weight_t": 288.0,
///   "base_shear_t": 53.568,
///   "shear_weight_percent": 18.6
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseShearResult {
    /// Elastic spectral acceleration at T1 (g)
    pub sa_t1: f64,
    /// Reduction factor f = I / (R·φP·φE)
    pub reduction_factor: f64,
    /// Coefficient before the minimum check
    pub c_raw: f64,
    /// Minimum coefficient 0.16·Z·I
    pub c_min: f64,
    /// Design coefficient after the minimum check
    pub c: f64,
    /// Minimum coefficient check
    pub minimum_check: MinimumShearCheck,
    /// Total seismic weight W (t)
    pub total_weight_t: f64,
    /// Base shear V = C·W (t)
    pub base_shear_t: f64,
    /// V/W in percent
    pub shear_weight_percent: f64,
}

impl BaseShearResult {
    /// True when the raw coefficient satisfies the minimum
    pub fn passes_minimum(&self) -> bool {
        self.minimum_check.passes
    }
}

/// Minimum seismic coefficient C_min = 0.16·Z·I
pub fn minimum_coefficient(z: f64, importance_factor: f64) -> f64 {
    MIN_COEFFICIENT_FACTOR * z * importance_factor
}

/// Compute the design coefficient and base shear.
///
/// # Arguments
///
/// * `sa_t1` - Elastic spectral acceleration at the fundamental period (g)
/// * `z` - Zone factor
/// * `factors` - Design factors R, I, φP, φE
/// * `total_weight_t` - Total seismic weight W (t)
pub fn calculate(sa_t1: f64, z: f64, factors: &DesignFactors, total_weight_t: f64) -> BaseShearResult {
    let reduction_factor = factors.reduction_factor();
    let c_raw = sa_t1 * reduction_factor;
    let c_min = minimum_coefficient(z, factors.importance_factor);
    let minimum_check = MinimumShearCheck::evaluate(c_raw, c_min);
    let c = if minimum_check.passes { c_raw } else { c_min };
    let base_shear_t = c * total_weight_t;

    BaseShearResult {
        sa_t1,
        reduction_factor,
        c_raw,
        c_min,
        c,
        minimum_check,
        total_weight_t,
        base_shear_t,
        shear_weight_percent: base_shear_t / total_weight_t * 100.0,
    }
}
