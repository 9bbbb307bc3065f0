//! # Form Intake
//!
//! [`SeismicForm`] holds an analysis request exactly as a form, CLI or JSON
//! API submits it: code strings, a floor count, and parallel lists of story
//! heights and weights. Intake validates the request, resolves the codes
//! against the tables and hands a typed [`SeismicInput`] to the engine.
//!
//! ## Validation
//!
//! - zone, soil, region and system codes must be non-empty
//! - floor count between 1 and 50, matching both lists
//! - every height and weight strictly positive
//! - R, I, φP and φE strictly positive
//!
//! ## Example
//!
//! ```rust
//! use seismic_core::form::{calculate_form, SeismicForm};
//! use seismic_core::site::CodeParsing;
//!
//! let mut form = SeismicForm::quito_example();
//! form.region = "Amazonia".to_string();
//!
//! let result = calculate_form(&form, CodeParsing::Lenient).unwrap();
//! assert_eq!(result.code_fallbacks.len(), 1);
//! assert_eq!(result.code_fallbacks[0].resolved, "Sierra");
//!
//! assert!(calculate_form(&form, CodeParsing::Strict).is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::seismic::{calculate, SeismicInput, SeismicResult};
use crate::errors::{CalcError, CalcResult};
use crate::site::{CodeFallback, CodeParsing, CodeTable, SiteParameters};
use crate::structure::{BuildingGeometry, DesignFactors, StructuralSystem, MAX_FLOORS};

/// Raw analysis request.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Quito 3-story",
///   "zone": "V",
///   "soil": "B",
///   "region": "Sierra",
///   "floor_count": 3,
///   "heights_m": [3.0, 3.0, 3.0],
///   "weights_t": [96.0, 96.0, 96.0],
///   "system": "porticos_ha",
///   "r_factor": 8.0,
///   "importance_factor": 1.5,
///   "phi_p": 1.0,
///   "phi_e": 1.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeismicForm {
    /// User label for this analysis
    #[serde(default)]
    pub label: String,

    /// Seismic zone code ("I" through "VI")
    pub zone: String,

    /// Soil class code ("A" through "E")
    pub soil: String,

    /// Region name ("Sierra", "Costa", ...)
    pub region: String,

    /// Number of floors
    pub floor_count: usize,

    /// Story heights from the base upward (m)
    pub heights_m: Vec<f64>,

    /// Floor seismic weights from the base upward (t)
    pub weights_t: Vec<f64>,

    /// Structural system code ("porticos_ha", "muros_ha", ...)
    pub system: String,

    /// Response modification factor R
    pub r_factor: f64,

    /// Importance factor I
    pub importance_factor: f64,

    /// Plan irregularity factor φP
    pub phi_p: f64,

    /// Elevation irregularity factor φE
    pub phi_e: f64,
}

impl SeismicForm {
    /// Reference example: 3-story RC frame building in Quito.
    pub fn quito_example() -> Self {
        SeismicForm {
            label: "Quito 3-story".to_string(),
            zone: "V".to_string(),
            soil: "B".to_string(),
            region: "Sierra".to_string(),
            floor_count: 3,
            heights_m: vec![3.0; 3],
            weights_t: vec![96.0; 3],
            system: "porticos_ha".to_string(),
            r_factor: 8.0,
            importance_factor: 1.5,
            phi_p: 1.0,
            phi_e: 1.0,
        }
    }

    /// Validate the request before any code lookup.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, code) in [
            ("zone", &self.zone),
            ("soil", &self.soil),
            ("region", &self.region),
            ("system", &self.system),
        ] {
            if code.trim().is_empty() {
                return Err(CalcError::missing_field(field));
            }
        }

        validate_floor_count(self.floor_count)?;
        for (field, len) in [("heights_m", self.heights_m.len()), ("weights_t", self.weights_t.len())] {
            if len != self.floor_count {
                return Err(CalcError::invalid_input(
                    field,
                    len.to_string(),
                    format!("Expected {} entries, one per floor", self.floor_count),
                ));
            }
        }

        if let Some((i, h)) = self.heights_m.iter().enumerate().find(|(_, h)| !h.is_finite() || **h <= 0.0) {
            return Err(CalcError::invalid_input(
                format!("heights_m[{}]", i),
                h.to_string(),
                "All heights must be greater than 0",
            ));
        }
        if let Some((i, w)) = self.weights_t.iter().enumerate().find(|(_, w)| !w.is_finite() || **w <= 0.0) {
            return Err(CalcError::invalid_input(
                format!("weights_t[{}]", i),
                w.to_string(),
                "All weights must be greater than 0",
            ));
        }

        self.design_factors().validate()
    }

    fn design_factors(&self) -> DesignFactors {
        DesignFactors::new(self.r_factor, self.importance_factor, self.phi_p, self.phi_e)
    }

    /// Validate and resolve the request into an engine input.
    ///
    /// Returns the input together with every fallback substitution made in
    /// lenient mode.
    pub fn resolve(&self, mode: CodeParsing) -> CalcResult<(SeismicInput, Vec<CodeFallback>)> {
        self.validate()?;

        let mut fallbacks = Vec::new();
        let site = SiteParameters::from_codes(&self.zone, &self.soil, &self.region, mode, &mut fallbacks)?;
        let system = StructuralSystem::resolve(&self.system, mode, &mut fallbacks)?;

        let input = SeismicInput {
            label: self.label.clone(),
            site,
            system,
            geometry: BuildingGeometry::from_lists(&self.heights_m, &self.weights_t),
            factors: self.design_factors(),
        };
        Ok((input, fallbacks))
    }
}

/// Check a floor count against the supported range (1 to 50).
pub fn validate_floor_count(floor_count: usize) -> CalcResult<()> {
    if (1..=MAX_FLOORS).contains(&floor_count) {
        Ok(())
    } else {
        Err(CalcError::invalid_input(
            "floor_count",
            floor_count.to_string(),
            format!("Number of floors must be between 1 and {}", MAX_FLOORS),
        ))
    }
}

/// Validate, resolve and analyze a raw request.
///
/// Fallback substitutions are reported on the result's `code_fallbacks`.
pub fn calculate_form(form: &SeismicForm, mode: CodeParsing) -> CalcResult<SeismicResult> {
    let (input, fallbacks) = form.resolve(mode)?;
    let mut result = calculate(&input)?;
    result.code_fallbacks = fallbacks;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::{CodeKind, Region, SeismicZone, SoilClass};

    #[test]
    fn test_example_resolves_without_fallbacks() {
        let (input, fallbacks) = SeismicForm::quito_example().resolve(CodeParsing::Strict).unwrap();
        assert!(fallbacks.is_empty());
        assert_eq!(input.site, SiteParameters::new(SeismicZone::V, SoilClass::B, Region::Sierra));
        assert_eq!(input.system, StructuralSystem::ConcreteMomentFrame);
        assert_eq!(input.geometry.total_weight_t(), 288.0);
        assert_eq!(input.factors.reduction_factor(), 0.1875);
    }

    #[test]
    fn test_example_result() {
        let result = calculate_form(&SeismicForm::quito_example(), CodeParsing::Lenient).unwrap();
        assert!((result.base_shear.base_shear_t - 53.568).abs() < 1e-9);
        assert!(result.code_fallbacks.is_empty());
    }

    #[test]
    fn test_empty_code_is_missing_field() {
        let mut form = SeismicForm::quito_example();
        form.soil = "  ".to_string();
        assert_eq!(form.validate().unwrap_err(), CalcError::missing_field("soil"));
    }

    #[test]
    fn test_floor_count_bounds() {
        let mut form = SeismicForm::quito_example();
        form.floor_count = 0;
        form.heights_m.clear();
        form.weights_t.clear();
        assert_eq!(form.validate().unwrap_err().error_code(), "INVALID_INPUT");

        let mut tall = SeismicForm::quito_example();
        tall.floor_count = 51;
        tall.heights_m = vec![3.0; 51];
        tall.weights_t = vec![90.0; 51];
        assert!(tall.validate().is_err());

        tall.floor_count = 50;
        tall.heights_m.truncate(50);
        tall.weights_t.truncate(50);
        assert!(tall.validate().is_ok());
    }

    #[test]
    fn test_validate_floor_count() {
        assert!(validate_floor_count(1).is_ok());
        assert!(validate_floor_count(MAX_FLOORS).is_ok());
        assert_eq!(
            validate_floor_count(0).unwrap_err(),
            CalcError::invalid_input("floor_count", "0", "Number of floors must be between 1 and 50")
        );
        match validate_floor_count(MAX_FLOORS + 1).unwrap_err() {
            CalcError::InvalidInput { field, value, .. } => {
                assert_eq!(field, "floor_count");
                assert_eq!(value, "51");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_list_length_mismatch() {
        let mut form = SeismicForm::quito_example();
        form.weights_t.pop();
        match form.validate().unwrap_err() {
            CalcError::InvalidInput { field, .. } => assert_eq!(field, "weights_t"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_positive_values() {
        let mut form = SeismicForm::quito_example();
        form.heights_m[2] = 0.0;
        match form.validate().unwrap_err() {
            CalcError::InvalidInput { field, .. } => assert_eq!(field, "heights_m[2]"),
            other => panic!("unexpected error: {other:?}"),
        }

        let mut form = SeismicForm::quito_example();
        form.weights_t[0] = f64::NAN;
        match form.validate().unwrap_err() {
            CalcError::InvalidInput { field, .. } => assert_eq!(field, "weights_t[0]"),
            other => panic!("unexpected error: {other:?}"),
        }

        let mut form = SeismicForm::quito_example();
        form.r_factor = -8.0;
        match form.validate().unwrap_err() {
            CalcError::InvalidInput { field, .. } => assert_eq!(field, "r_factor"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_lenient_fallbacks_all_codes() {
        let mut form = SeismicForm::quito_example();
        form.zone = "VIII".to_string();
        form.soil = "F".to_string();
        form.region = "Antartida".to_string();
        form.system = "madera".to_string();

        let result = calculate_form(&form, CodeParsing::Lenient).unwrap();
        let kinds: Vec<CodeKind> = result.code_fallbacks.iter().map(|f| f.kind).collect();
        assert_eq!(kinds, vec![CodeKind::Zone, CodeKind::Soil, CodeKind::Region, CodeKind::System]);

        assert_eq!(result.input.site, SiteParameters::new(SeismicZone::V, SoilClass::D, Region::Sierra));
        assert_eq!(result.input.system, StructuralSystem::ConcreteMomentFrame);
        assert_eq!(result.spectrum_parameters.z, 0.40);
        assert_eq!(result.spectrum_parameters.eta, 2.48);

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"code_fallbacks\""));
    }

    #[test]
    fn test_strict_mode_rejects_unknown_system() {
        let mut form = SeismicForm::quito_example();
        form.system = "madera".to_string();
        let err = calculate_form(&form, CodeParsing::Strict).unwrap_err();
        assert_eq!(err, CalcError::unknown_code("system", "madera"));
    }

    #[test]
    fn test_form_json() {
        let json = r#"{
            "zone": "iv", "soil": "D", "region": "Costa",
            "floor_count": 2, "heights_m": [3.5, 3.0], "weights_t": [80.0, 60.0],
            "system": "muros_ha",
            "r_factor": 5.0, "importance_factor": 1.0, "phi_p": 0.9, "phi_e": 1.0
        }"#;
        let form: SeismicForm = serde_json::from_str(json).unwrap();
        assert_eq!(form.label, "");
        let (input, fallbacks) = form.resolve(CodeParsing::Strict).unwrap();
        assert!(fallbacks.is_empty());
        assert_eq!(input.site.zone, SeismicZone::IV);
        assert_eq!(input.system, StructuralSystem::ConcreteShearWall);
    }
}
