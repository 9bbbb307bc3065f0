//! Geographic regions and the spectral plateau ratio η.

use serde::{Deserialize, Serialize};

use super::{normalize_code, CodeKind, CodeTable};

/// Geographic region of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// Andean highlands
    Sierra,
    /// Esmeraldas province
    Esmeraldas,
    /// Galapagos islands
    Galapagos,
    /// Coastal provinces (except Esmeraldas)
    Costa,
    /// Amazon provinces
    Oriente,
}

impl Region {
    /// All regions for UI selection
    pub const ALL: [Region; 5] = [
        Region::Sierra,
        Region::Esmeraldas,
        Region::Galapagos,
        Region::Costa,
        Region::Oriente,
    ];

    /// Ratio η between the spectral plateau and Z·Fa
    pub fn eta(&self) -> f64 {
        match self {
            Region::Sierra | Region::Esmeraldas | Region::Galapagos => 2.48,
            Region::Costa => 1.80,
            Region::Oriente => 2.60,
        }
    }
}

impl CodeTable for Region {
    const KIND: CodeKind = CodeKind::Region;
    const FALLBACK: Self = Region::Sierra;

    fn from_code(code: &str) -> Option<Self> {
        match normalize_code(code).as_str() {
            "sierra" => Some(Region::Sierra),
            "esmeraldas" => Some(Region::Esmeraldas),
            "galapagos" | "galápagos" => Some(Region::Galapagos),
            "costa" => Some(Region::Costa),
            "oriente" => Some(Region::Oriente),
            _ => None,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Region::Sierra => "Sierra",
            Region::Esmeraldas => "Esmeraldas",
            Region::Galapagos => "Galapagos",
            Region::Costa => "Costa",
            Region::Oriente => "Oriente",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
