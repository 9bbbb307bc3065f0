//! Soil profile classes and site amplification factors.
//!
//! Fa, Fd and Fs are tabulated per soil class (rows) and seismic zone
//! (columns I through VI).

use serde::{Deserialize, Serialize};

use super::zone::{SeismicZone, ZONE_COLUMNS};
use super::{normalize_code, CodeKind, CodeTable};

/// Short-period amplification Fa, rows A..E
const FA: [[f64; ZONE_COLUMNS]; 5] = [
    [0.90, 0.90, 0.90, 0.90, 0.90, 0.90],
    [1.00, 1.00, 1.00, 1.00, 1.00, 1.00],
    [1.40, 1.30, 1.25, 1.23, 1.20, 1.18],
    [1.60, 1.40, 1.30, 1.25, 1.20, 1.12],
    [1.80, 1.40, 1.25, 1.10, 1.00, 0.85],
];

/// Displacement amplification Fd, rows A..E
const FD: [[f64; ZONE_COLUMNS]; 5] = [
    [0.90, 0.90, 0.90, 0.90, 0.90, 0.90],
    [1.00, 1.00, 1.00, 1.00, 1.00, 1.00],
    [1.36, 1.28, 1.19, 1.15, 1.11, 1.06],
    [1.62, 1.45, 1.36, 1.28, 1.19, 1.11],
    [2.10, 1.75, 1.70, 1.65, 1.60, 1.50],
];

/// Nonlinear soil behavior Fs, rows A..E
const FS: [[f64; ZONE_COLUMNS]; 5] = [
    [0.75, 0.75, 0.75, 0.75, 0.75, 0.75],
    [0.75, 0.75, 0.75, 0.75, 0.75, 0.75],
    [0.85, 0.94, 1.02, 1.06, 1.11, 1.23],
    [1.02, 1.06, 1.11, 1.19, 1.28, 1.40],
    [1.50, 1.60, 1.70, 1.80, 1.90, 2.00],
];

/// Soil profile class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilClass {
    /// Competent rock
    A,
    /// Rock of medium stiffness
    B,
    /// Very dense soil or soft rock
    C,
    /// Stiff soil
    D,
    /// Soft clay
    E,
}

/// The three amplification factors for one soil class and zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilAmplification {
    pub fa: f64,
    pub fd: f64,
    pub fs: f64,
}

impl SoilClass {
    /// All soil classes for UI selection
    pub const ALL: [SoilClass; 5] = [
        SoilClass::A,
        SoilClass::B,
        SoilClass::C,
        SoilClass::D,
        SoilClass::E,
    ];

    fn row(&self) -> usize {
        match self {
            SoilClass::A => 0,
            SoilClass::B => 1,
            SoilClass::C => 2,
            SoilClass::D => 3,
            SoilClass::E => 4,
        }
    }

    /// Amplification factors for this soil in the given zone
    ///
    /// Zone I reads its own first table column (Z = 0.15), never the zone V
    /// column, so soils C, D and E in zone I use the zone I factors.
    pub fn amplification(&self, zone: SeismicZone) -> SoilAmplification {
        let (row, col) = (self.row(), zone.column());
        SoilAmplification {
            fa: FA[row][col],
            fd: FD[row][col],
            fs: FS[row][col],
        }
    }

    /// Exponent r of the descending branch (1.5 for soft clay, else 1.0)
    pub fn spectrum_exponent(&self) -> f64 {
        match self {
            SoilClass::E => 1.5,
            _ => 1.0,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SoilClass::A => "Competent rock",
            SoilClass::B => "Medium-stiffness rock",
            SoilClass::C => "Very dense soil / soft rock",
            SoilClass::D => "Stiff soil",
            SoilClass::E => "Soft clay",
        }
    }
}

impl CodeTable for SoilClass {
    const KIND: CodeKind = CodeKind::Soil;
    const FALLBACK: Self = SoilClass::D;

    fn from_code(code: &str) -> Option<Self> {
        match normalize_code(code).as_str() {
            "a" => Some(SoilClass::A),
            "b" => Some(SoilClass::B),
            "c" => Some(SoilClass::C),
            "d" => Some(SoilClass::D),
            "e" => Some(SoilClass::E),
            _ => None,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            SoilClass::A => "A",
            SoilClass::B => "B",
            SoilClass::C => "C",
            SoilClass::D => "D",
            SoilClass::E => "E",
        }
    }
}

impl std::fmt::Display for SoilClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Soil {} ({})", self.code(), self.display_name())
    }
}
