//! # Seismic Base Shear Analysis
//!
//! Equivalent static lateral force analysis of a building:
//!
//! 1. Elastic response spectrum for the site
//! 2. Empirical fundamental period T1
//! 3. Sa(T1) → seismic coefficient → minimum check → base shear V
//! 4. Vertical distribution of V over the levels
//!
//! The analysis is a pure function of its input. It performs no I/O and
//! holds no state between calls, so independent inputs can be evaluated
//! from any number of threads.
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use seismic_core::calculations::seismic::{calculate, SeismicInput};
//! use seismic_core::site::{Region, SeismicZone, SiteParameters, SoilClass};
//! use seismic_core::structure::{BuildingGeometry, DesignFactors, StructuralSystem};
//!
//! let input = SeismicInput {
//!     label: "Quito 3-story".to_string(),
//!     site: SiteParameters::new(SeismicZone::V, SoilClass::B, Region::Sierra),
//!     system: StructuralSystem::ConcreteMomentFrame,
//!     geometry: BuildingGeometry::from_lists(&[3.0, 3.0, 3.0], &[96.0, 96.0, 96.0]),
//!     factors: DesignFactors::new(8.0, 1.5, 1.0, 1.0),
//! };
//!
//! let result = calculate(&input).unwrap();
//!
//! println!("T1 = {:.4} s", result.period.t1_s);
//! println!("C  = {:.4}", result.base_shear.c);
//! println!("V  = {:.2} t", result.base_shear.base_shear_t);
//! assert!(result.passes_minimum());
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{base_shear, force_distribution, period, spectrum};
use crate::calculations::base_shear::BaseShearResult;
use crate::calculations::force_distribution::ForceDistribution;
use crate::calculations::period::PeriodEstimate;
use crate::calculations::spectrum::{SpectrumParameters, SpectrumPoint};
use crate::errors::{CalcError, CalcResult};
use crate::site::{CodeFallback, SiteParameters};
use crate::structure::{BuildingGeometry, DesignFactors, StructuralSystem};

/// Input parameters for a seismic base shear analysis.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Quito 3-story",
///   "site": { "zone": "V", "soil": "B", "region": "Sierra" },
///   "system": "porticos_ha",
///   "geometry": {
///     "floors": [
///       { "height_m": 3.0, "weight_t": 96.0 },
///       { "height_m": 3.0, "weight_t": 96.0 },
///       { "height_m": 3.0, "weight_t": 96.0 }
///     ]
///   },
///   "factors": { "r_factor": 8.0, "importance_factor": 1.5, "phi_p": 1.0, "phi_e": 1.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeismicInput {
    /// User label for this analysis (e.g., "Building A", "Tower 2")
    pub label: String,

    /// Seismic zone, soil class and region
    pub site: SiteParameters,

    /// Lateral force-resisting system
    pub system: StructuralSystem,

    /// Floors from the base upward
    pub geometry: BuildingGeometry,

    /// R, I, φP, φE
    pub factors: DesignFactors,
}

impl SeismicInput {
    /// Validate input parameters.
    ///
    /// Only the geometry is checked here; code ranges and factor bounds are
    /// handled by form intake.
    pub fn validate(&self) -> CalcResult<()> {
        self.geometry.validate()
    }
}

/// Echo of the analyzed input with derived geometry totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSummary {
    pub site: SiteParameters,
    pub system: StructuralSystem,
    pub factors: DesignFactors,
    /// Number of floors n
    pub floor_count: usize,
    /// Total height hn (m)
    pub total_height_m: f64,
    /// Total seismic weight W (t)
    pub total_weight_t: f64,
}

/// Plot-ready spectrum series.
///
/// The three vectors are parallel: `elastic_sa[i]` and `inelastic_sa[i]`
/// are the ordinates at `periods_s[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumSeries {
    /// Sampled periods, 0 to 4 s at 0.01 s
    pub periods_s: Vec<f64>,
    /// Elastic ordinates Sa (g)
    pub elastic_sa: Vec<f64>,
    /// Design ordinates Sa·f (g)
    pub inelastic_sa: Vec<f64>,
    /// Marker at (T1, Sa(T1)) on the elastic curve
    pub design_point: SpectrumPoint,
}

/// Results from a seismic base shear analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeismicResult {
    /// Label of the analyzed input
    pub label: String,

    /// Echoed input and geometry totals
    pub input: InputSummary,

    /// Z, Fa, Fd, Fs, η, r, Sa0, T0, Tc
    pub spectrum_parameters: SpectrumParameters,

    /// Elastic and inelastic spectrum series
    pub spectrum: SpectrumSeries,

    /// Fundamental period estimate
    pub period: PeriodEstimate,

    /// Seismic coefficient, minimum check and base shear
    pub base_shear: BaseShearResult,

    /// Lateral forces per level
    pub distribution: ForceDistribution,

    /// Code substitutions made while reading the input (lenient mode)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code_fallbacks: Vec<CodeFallback>,
}

impl SeismicResult {
    /// True when the raw coefficient satisfies the minimum coefficient
    pub fn passes_minimum(&self) -> bool {
        self.base_shear.passes_minimum()
    }

    /// Status message of the minimum coefficient check
    pub fn minimum_check_message(&self) -> &str {
        &self.base_shear.minimum_check.message
    }
}

/// Run the analysis.
///
/// # Arguments
///
/// * `input` - Site, system, geometry and design factors
///
/// # Returns
///
/// * `Ok(SeismicResult)` - Calculation results
/// * `Err(CalcError::InvalidInput)` - If the geometry is empty or has a
///   non-positive height or weight
pub fn calculate(input: &SeismicInput) -> CalcResult<SeismicResult> {
    input.validate()?;

    let elastic = spectrum::generate(&input.site);
    let params = elastic.parameters;

    let total_height_m = input.geometry.total_height_m();
    let total_weight_t = input.geometry.total_weight_t();
    let period = period::estimate(total_height_m, input.system);

    let sa_t1 = elastic.sa_at(period.t1_s).ok_or_else(|| CalcError::Internal {
        message: "generated spectrum has no samples".to_string(),
    })?;
    let shear = base_shear::calculate(sa_t1, params.z, &input.factors, total_weight_t);

    let distribution = force_distribution::distribute(&input.geometry, shear.base_shear_t, period.t1_s);

    let series = SpectrumSeries {
        periods_s: elastic.periods(),
        elastic_sa: elastic.ordinates(),
        inelastic_sa: elastic.scaled_ordinates(shear.reduction_factor),
        design_point: SpectrumPoint {
            period_s: period.t1_s,
            sa: sa_t1,
        },
    };

    Ok(SeismicResult {
        label: input.label.clone(),
        input: InputSummary {
            site: input.site,
            system: input.system,
            factors: input.factors,
            floor_count: input.geometry.floor_count(),
            total_height_m,
            total_weight_t,
        },
        spectrum_parameters: params,
        spectrum: series,
        period,
        base_shear: shear,
        distribution,
        code_fallbacks: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::{Region, SeismicZone, SoilClass};

    fn quito_input() -> SeismicInput {
        SeismicInput {
            label: "Quito".to_string(),
            site: SiteParameters::new(SeismicZone::V, SoilClass::B, Region::Sierra),
            system: StructuralSystem::ConcreteMomentFrame,
            geometry: BuildingGeometry::from_lists(&[3.0, 3.0, 3.0], &[96.0, 96.0, 96.0]),
            factors: DesignFactors::new(8.0, 1.5, 1.0, 1.0),
        }
    }

    #[test]
    fn test_quito_example() {
        let result = calculate(&quito_input()).unwrap();

        assert_eq!(result.input.floor_count, 3);
        assert_eq!(result.input.total_height_m, 9.0);
        assert_eq!(result.input.total_weight_t, 288.0);

        // T1 = 0.055 * 9^0.9 ≈ 0.3974 s, nearest sample 0.40 s (plateau)
        assert!((result.period.t1_s - 0.397357).abs() < 1e-5);
        assert!((result.base_shear.sa_t1 - 0.992).abs() < 1e-12);
        assert_eq!(result.base_shear.reduction_factor, 0.1875);
        assert!((result.base_shear.c_min - 0.096).abs() < 1e-12);
        assert!((result.base_shear.c - 0.186).abs() < 1e-12);
        assert!(result.passes_minimum());
        assert!((result.base_shear.base_shear_t - 53.568).abs() < 1e-9);

        assert_eq!(result.distribution.k, 1.0);
        let forces = result.distribution.forces_t();
        assert!((forces[0] - 8.928).abs() < 1e-9);
        assert!((forces[1] - 17.856).abs() < 1e-9);
        assert!((forces[2] - 26.784).abs() < 1e-9);
        assert!(forces[2] > forces[1] && forces[1] > forces[0]);
        assert!((result.distribution.total_force_t() - result.base_shear.base_shear_t).abs() < 1e-9);
    }

    #[test]
    fn test_spectrum_series() {
        let result = calculate(&quito_input()).unwrap();
        let series = &result.spectrum;
        assert_eq!(series.periods_s.len(), 401);
        assert_eq!(series.elastic_sa.len(), 401);
        assert_eq!(series.inelastic_sa.len(), 401);
        assert_eq!(series.elastic_sa[0], 0.40);
        for (e, i) in series.elastic_sa.iter().zip(&series.inelastic_sa) {
            assert_eq!(*i, e * 0.1875);
        }
        assert_eq!(series.design_point.period_s, result.period.t1_s);
        assert_eq!(series.design_point.sa, result.base_shear.sa_t1);
    }

    #[test]
    fn test_minimum_enforced_for_tall_flexible_building() {
        // 20 stories of steel moment frame on rock: long period, low ordinate
        let input = SeismicInput {
            label: "Tower".to_string(),
            site: SiteParameters::new(SeismicZone::V, SoilClass::A, Region::Costa),
            system: StructuralSystem::SteelMomentFrame,
            geometry: BuildingGeometry::from_lists(&[3.5; 20], &[400.0; 20]),
            factors: DesignFactors::new(8.0, 1.0, 1.0, 1.0),
        };
        let result = calculate(&input).unwrap();

        assert!(result.period.t1_s > 2.0);
        assert!(!result.passes_minimum());
        assert_eq!(result.base_shear.c, result.base_shear.c_min);
        assert!(result.minimum_check_message().contains("C_min"));
        let v = result.base_shear.base_shear_t;
        assert!((v - 0.064 * 8000.0).abs() < 1e-9);
        assert!((result.distribution.total_force_t() - v).abs() <= 1e-9 * v);
    }

    #[test]
    fn test_invalid_geometry_fails_fast() {
        let mut input = quito_input();
        input.geometry.floors.clear();
        assert!(matches!(calculate(&input), Err(CalcError::InvalidInput { .. })));

        let mut input = quito_input();
        input.geometry.floors[1].weight_t = 0.0;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err, CalcError::invalid_input("floors[1].weight_t", "0", "Seismic weight must be positive"));
    }

    #[test]
    fn test_deterministic() {
        let input = quito_input();
        assert_eq!(calculate(&input).unwrap(), calculate(&input).unwrap());
    }

    #[test]
    fn test_parallel_callers() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SeismicInput>();
        assert_send_sync::<SeismicResult>();

        let input = quito_input();
        let expected = calculate(&input).unwrap();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| calculate(&input).unwrap())).collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&quito_input()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("\"spectrum_parameters\""));
        assert!(json.contains("\"inelastic_sa\""));
        assert!(json.contains("\"porticos_ha\""));
        // No fallbacks were made, so the field is omitted
        assert!(!json.contains("code_fallbacks"));

        let roundtrip: SeismicResult = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.label, "Quito");
        assert_eq!(roundtrip.distribution.levels.len(), 3);
    }
}
