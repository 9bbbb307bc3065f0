//! # Structure Description
//!
//! Structural system, floor-by-floor geometry and design factors of the
//! building being analyzed.
//!
//! Floors are listed from the base upward. Story heights are in meters and
//! seismic weights in tonnes.
//!
//! ## Example
//!
//! ```rust
//! use seismic_core::structure::{BuildingGeometry, Floor};
//!
//! let geometry = BuildingGeometry::new(vec![
//!     Floor::new(3.0, 96.0),
//!     Floor::new(3.0, 96.0),
//!     Floor::new(3.0, 96.0),
//! ]);
//! geometry.validate().unwrap();
//!
//! assert_eq!(geometry.total_height_m(), 9.0);
//! assert_eq!(geometry.total_weight_t(), 288.0);
//! assert_eq!(geometry.cumulative_heights_m(), vec![3.0, 6.0, 9.0]);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::site::{normalize_code, CodeKind, CodeTable};

/// Maximum number of floors accepted by form intake
pub const MAX_FLOORS: usize = 50;

// ============================================================================
// Structural System
// ============================================================================

/// Lateral force-resisting system, used for the empirical period estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructuralSystem {
    /// Reinforced concrete moment frames without walls or bracing
    #[serde(rename = "porticos_ha")]
    ConcreteMomentFrame,
    /// Reinforced concrete shear walls
    #[serde(rename = "muros_ha")]
    ConcreteShearWall,
    /// Steel moment frames without bracing
    #[serde(rename = "porticos_acero")]
    SteelMomentFrame,
    /// Braced steel frames
    #[serde(rename = "arriostrado_acero")]
    SteelBracedFrame,
    /// Mixed frame and wall systems
    #[serde(rename = "mixto")]
    Mixed,
}

impl StructuralSystem {
    /// All systems for UI selection
    pub const ALL: [StructuralSystem; 5] = [
        StructuralSystem::ConcreteMomentFrame,
        StructuralSystem::ConcreteShearWall,
        StructuralSystem::SteelMomentFrame,
        StructuralSystem::SteelBracedFrame,
        StructuralSystem::Mixed,
    ];

    /// Empirical period coefficients (Ct, α) for T = Ct · hn^α
    pub fn period_coefficients(&self) -> (f64, f64) {
        match self {
            StructuralSystem::ConcreteMomentFrame => (0.055, 0.90),
            StructuralSystem::ConcreteShearWall => (0.048, 0.90),
            StructuralSystem::SteelMomentFrame => (0.072, 0.80),
            StructuralSystem::SteelBracedFrame => (0.060, 0.80),
            StructuralSystem::Mixed => (0.050, 0.90),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            StructuralSystem::ConcreteMomentFrame => "RC moment frames",
            StructuralSystem::ConcreteShearWall => "RC shear walls",
            StructuralSystem::SteelMomentFrame => "Steel moment frames",
            StructuralSystem::SteelBracedFrame => "Braced steel frames",
            StructuralSystem::Mixed => "Mixed system",
        }
    }
}

impl CodeTable for StructuralSystem {
    const KIND: CodeKind = CodeKind::System;
    const FALLBACK: Self = StructuralSystem::ConcreteMomentFrame;

    fn from_code(code: &str) -> Option<Self> {
        match normalize_code(code).as_str() {
            "porticos_ha" => Some(StructuralSystem::ConcreteMomentFrame),
            "muros_ha" => Some(StructuralSystem::ConcreteShearWall),
            "porticos_acero" => Some(StructuralSystem::SteelMomentFrame),
            "arriostrado_acero" => Some(StructuralSystem::SteelBracedFrame),
            "mixto" => Some(StructuralSystem::Mixed),
            _ => None,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            StructuralSystem::ConcreteMomentFrame => "porticos_ha",
            StructuralSystem::ConcreteShearWall => "muros_ha",
            StructuralSystem::SteelMomentFrame => "porticos_acero",
            StructuralSystem::SteelBracedFrame => "arriostrado_acero",
            StructuralSystem::Mixed => "mixto",
        }
    }
}

impl std::fmt::Display for StructuralSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// One story of the building.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    /// Story height in meters
    pub height_m: f64,
    /// Seismic weight in tonnes
    pub weight_t: f64,
}

impl Floor {
    pub fn new(height_m: f64, weight_t: f64) -> Self {
        Floor { height_m, weight_t }
    }
}

/// Ordered floors of the building, base first.
///
/// ## JSON Example
///
/// ```json
/// {
///   "floors": [
///     { "height_m": 3.0, "weight_t": 96.0 },
///     { "height_m": 3.0, "weight_t": 96.0 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BuildingGeometry {
    pub floors: Vec<Floor>,
}

impl BuildingGeometry {
    pub fn new(floors: Vec<Floor>) -> Self {
        BuildingGeometry { floors }
    }

    /// Build geometry from parallel height and weight lists.
    ///
    /// Extra entries in the longer list are ignored; form intake checks
    /// the lengths before calling this.
    pub fn from_lists(heights_m: &[f64], weights_t: &[f64]) -> Self {
        BuildingGeometry {
            floors: heights_m
                .iter()
                .zip(weights_t)
                .map(|(&h, &w)| Floor::new(h, w))
                .collect(),
        }
    }

    /// Validate the geometry.
    ///
    /// Requires at least one floor, and strictly positive, finite heights
    /// and weights. The floor count upper bound is a form-intake concern.
    pub fn validate(&self) -> CalcResult<()> {
        if self.floors.is_empty() {
            return Err(CalcError::invalid_input(
                "floors",
                "0",
                "At least one floor is required",
            ));
        }
        for (i, floor) in self.floors.iter().enumerate() {
            if !floor.height_m.is_finite() || floor.height_m <= 0.0 {
                return Err(CalcError::invalid_input(
                    format!("floors[{}].height_m", i),
                    floor.height_m.to_string(),
                    "Story height must be positive",
                ));
            }
            if !floor.weight_t.is_finite() || floor.weight_t <= 0.0 {
                return Err(CalcError::invalid_input(
                    format!("floors[{}].weight_t", i),
                    floor.weight_t.to_string(),
                    "Seismic weight must be positive",
                ));
            }
        }
        Ok(())
    }

    /// Number of floors
    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// Total height hn (m)
    pub fn total_height_m(&self) -> f64 {
        self.floors.iter().map(|f| f.height_m).sum()
    }

    /// Total seismic weight W (t)
    pub fn total_weight_t(&self) -> f64 {
        self.floors.iter().map(|f| f.weight_t).sum()
    }

    /// Height of each floor level above the base (prefix sums)
    pub fn cumulative_heights_m(&self) -> Vec<f64> {
        self.floors
            .iter()
            .scan(0.0, |acc, f| {
                *acc += f.height_m;
                Some(*acc)
            })
            .collect()
    }
}

// ============================================================================
// Design Factors
// ============================================================================

/// Design factors applied to the elastic spectrum.
///
/// ## JSON Example
///
/// ```json
/// { "r_factor": 8.0, "importance_factor": 1.5, "phi_p": 1.0, "phi_e": 1.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignFactors {
    /// Response modification factor R
    pub r_factor: f64,
    /// Importance factor I
    pub importance_factor: f64,
    /// Plan irregularity factor φP
    pub phi_p: f64,
    /// Elevation irregularity factor φE
    pub phi_e: f64,
}

impl DesignFactors {
    pub fn new(r_factor: f64, importance_factor: f64, phi_p: f64, phi_e: f64) -> Self {
        DesignFactors {
            r_factor,
            importance_factor,
            phi_p,
            phi_e,
        }
    }

    /// Reduction factor f = I / (R · φP · φE) applied to the elastic spectrum
    pub fn reduction_factor(&self) -> f64 {
        self.importance_factor / (self.r_factor * self.phi_p * self.phi_e)
    }

    /// Validate that every factor is strictly positive and finite.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("r_factor", self.r_factor),
            ("importance_factor", self.importance_factor),
            ("phi_p", self.phi_p),
            ("phi_e", self.phi_e),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Design factor must be positive",
                ));
            }
        }
        Ok(())
    }
}

impl Default for DesignFactors {
    fn default() -> Self {
        DesignFactors::new(8.0, 1.0, 1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_story() -> BuildingGeometry {
        BuildingGeometry::from_lists(&[3.0, 3.0, 3.0], &[96.0, 96.0, 96.0])
    }

    #[test]
    fn test_geometry_totals() {
        let geometry = three_story();
        assert_eq!(geometry.floor_count(), 3);
        assert_eq!(geometry.total_height_m(), 9.0);
        assert_eq!(geometry.total_weight_t(), 288.0);
    }

    #[test]
    fn test_cumulative_heights_uneven() {
        let geometry = BuildingGeometry::from_lists(&[4.5, 3.2, 3.2], &[120.0, 100.0, 80.0]);
        let hi = geometry.cumulative_heights_m();
        assert_eq!(hi.len(), 3);
        assert!((hi[0] - 4.5).abs() < 1e-12);
        assert!((hi[1] - 7.7).abs() < 1e-12);
        assert!((hi[2] - 10.9).abs() < 1e-12);
        assert!((hi[2] - geometry.total_height_m()).abs() < 1e-12);
    }

    #[test]
    fn test_empty_geometry_rejected() {
        let err = BuildingGeometry::default().validate().unwrap_err();
        match err {
            CalcError::InvalidInput { field, .. } => assert_eq!(field, "floors"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_positive_height_rejected() {
        let geometry = BuildingGeometry::from_lists(&[3.0, 0.0], &[96.0, 96.0]);
        let err = geometry.validate().unwrap_err();
        match err {
            CalcError::InvalidInput { field, .. } => assert_eq!(field, "floors[1].height_m"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_positive_weight_rejected() {
        let geometry = BuildingGeometry::from_lists(&[3.0], &[-1.0]);
        let err = geometry.validate().unwrap_err();
        match err {
            CalcError::InvalidInput { field, .. } => assert_eq!(field, "floors[0].weight_t"),
            other => panic!("unexpected error: {other:?}"),
        }
        let nan = BuildingGeometry::from_lists(&[3.0], &[f64::NAN]);
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_system_coefficients() {
        assert_eq!(StructuralSystem::ConcreteMomentFrame.period_coefficients(), (0.055, 0.90));
        assert_eq!(StructuralSystem::ConcreteShearWall.period_coefficients(), (0.048, 0.90));
        assert_eq!(StructuralSystem::SteelMomentFrame.period_coefficients(), (0.072, 0.80));
        assert_eq!(StructuralSystem::SteelBracedFrame.period_coefficients(), (0.060, 0.80));
        assert_eq!(StructuralSystem::Mixed.period_coefficients(), (0.050, 0.90));
    }

    #[test]
    fn test_system_codes() {
        for system in StructuralSystem::ALL {
            assert_eq!(StructuralSystem::from_code(system.code()), Some(system));
            let json = serde_json::to_string(&system).unwrap();
            assert_eq!(json, format!("\"{}\"", system.code()));
        }
        assert_eq!(StructuralSystem::from_code("madera"), None);
        assert_eq!(StructuralSystem::FALLBACK, StructuralSystem::ConcreteMomentFrame);
    }

    #[test]
    fn test_reduction_factor() {
        let factors = DesignFactors::new(8.0, 1.5, 1.0, 1.0);
        assert_eq!(factors.reduction_factor(), 0.1875);

        let irregular = DesignFactors::new(6.0, 1.0, 0.9, 0.9);
        assert!((irregular.reduction_factor() - 1.0 / 4.86).abs() < 1e-12);
    }

    #[test]
    fn test_design_factor_validation() {
        assert!(DesignFactors::default().validate().is_ok());
        let err = DesignFactors::new(8.0, 1.0, 0.0, 1.0).validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }
}
