//! Seismic zones and zone factor Z.
//!
//! The zone also selects the column of the soil amplification tables.

use serde::{Deserialize, Serialize};

use super::{normalize_code, CodeKind, CodeTable};

/// Number of zone columns in the soil amplification tables
pub const ZONE_COLUMNS: usize = 6;

/// Seismic zone per the national hazard map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeismicZone {
    I,
    II,
    III,
    IV,
    V,
    VI,
}

impl SeismicZone {
    /// All zones for UI selection, lowest hazard first
    pub const ALL: [SeismicZone; ZONE_COLUMNS] = [
        SeismicZone::I,
        SeismicZone::II,
        SeismicZone::III,
        SeismicZone::IV,
        SeismicZone::V,
        SeismicZone::VI,
    ];

    /// Zone factor Z (fraction of g)
    pub fn z_factor(&self) -> f64 {
        match self {
            SeismicZone::I => 0.15,
            SeismicZone::II => 0.25,
            SeismicZone::III => 0.30,
            SeismicZone::IV => 0.35,
            SeismicZone::V => 0.40,
            SeismicZone::VI => 0.50,
        }
    }

    /// Column index into the soil amplification tables
    pub fn column(&self) -> usize {
        match self {
            SeismicZone::I => 0,
            SeismicZone::II => 1,
            SeismicZone::III => 2,
            SeismicZone::IV => 3,
            SeismicZone::V => 4,
            SeismicZone::VI => 5,
        }
    }

    /// Hazard characterization for reports
    pub fn hazard(&self) -> &'static str {
        match self {
            SeismicZone::I => "Intermediate",
            SeismicZone::VI => "Very high",
            _ => "High",
        }
    }
}

impl CodeTable for SeismicZone {
    const KIND: CodeKind = CodeKind::Zone;
    const FALLBACK: Self = SeismicZone::V;

    fn from_code(code: &str) -> Option<Self> {
        match normalize_code(code).as_str() {
            "i" | "1" => Some(SeismicZone::I),
            "ii" | "2" => Some(SeismicZone::II),
            "iii" | "3" => Some(SeismicZone::III),
            "iv" | "4" => Some(SeismicZone::IV),
            "v" | "5" => Some(SeismicZone::V),
            "vi" | "6" => Some(SeismicZone::VI),
            _ => None,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            SeismicZone::I => "I",
            SeismicZone::II => "II",
            SeismicZone::III => "III",
            SeismicZone::IV => "IV",
            SeismicZone::V => "V",
            SeismicZone::VI => "VI",
        }
    }
}

impl std::fmt::Display for SeismicZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Zone {}", self.code())
    }
}
