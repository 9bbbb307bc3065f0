//! # Unit Types
//!
//! Type-safe wrappers for the force units used in seismic reports. These
//! provide compile-time safety against unit confusion while remaining
//! lightweight (just f64 wrappers).
//!
//! ## SI / Metric Units
//!
//! The engine works in the units of the code tables:
//! - Length: meters (m)
//! - Seismic weight and lateral force: tonnes-force (t)
//! - Period: seconds (s)
//! - Spectral acceleration: fraction of g
//!
//! Reports may show forces in kilonewtons instead (1 t = 9.80665 kN).
//!
//! ## Example
//!
//! ```rust
//! use seismic_core::units::{Kilonewtons, Tonnes};
//!
//! let shear = Tonnes(10.0);
//! let shear_kn: Kilonewtons = shear.into();
//! assert!((shear_kn.0 - 98.0665).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

/// Standard gravity, kN per tonne-force
pub const KN_PER_TONNE: f64 = 9.80665;

// ============================================================================
// Force Units
// ============================================================================

/// Force (or seismic weight) in tonnes-force
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tonnes(pub f64);

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

impl From<Tonnes> for Kilonewtons {
    fn from(t: Tonnes) -> Self {
        Kilonewtons(t.0 * KN_PER_TONNE)
    }
}

impl From<Kilonewtons> for Tonnes {
    fn from(kn: Kilonewtons) -> Self {
        Tonnes(kn.0 / KN_PER_TONNE)
    }
}

/// Display unit for forces in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ForceUnit {
    /// Tonnes-force (t), the unit of the input weights
    #[default]
    #[serde(rename = "t")]
    Tonnes,
    /// Kilonewtons (kN)
    #[serde(rename = "kN")]
    Kilonewtons,
}

impl ForceUnit {
    /// Unit symbol for table headers
    pub fn symbol(&self) -> &'static str {
        match self {
            ForceUnit::Tonnes => "t",
            ForceUnit::Kilonewtons => "kN",
        }
    }

    /// Convert a force given in tonnes to this unit
    pub fn from_tonnes(&self, force: Tonnes) -> f64 {
        match self {
            ForceUnit::Tonnes => force.0,
            ForceUnit::Kilonewtons => Kilonewtons::from(force).0,
        }
    }
}
