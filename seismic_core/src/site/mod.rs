//! # Site Parameters and Code Tables
//!
//! Lookup tables that turn the site description (seismic zone, soil class,
//! region) into the numeric coefficients of the response spectrum.
//!
//! ## Code Resolution
//!
//! Codes arrive as strings from forms and JSON requests. Every table has a
//! documented fallback entry, and resolution runs in one of two modes:
//!
//! - [`CodeParsing::Lenient`] (default): an unrecognized code resolves to the
//!   table's fallback entry and the substitution is recorded as a
//!   [`CodeFallback`].
//! - [`CodeParsing::Strict`]: an unrecognized code is a
//!   [`CalcError::UnknownCode`](crate::errors::CalcError::UnknownCode).
//!
//! | Table  | Fallback |
//! |--------|----------|
//! | zone   | V (Z = 0.40) |
//! | soil   | D |
//! | region | Sierra (η = 2.48) |
//! | system | RC moment frames |
//!
//! ## Example
//!
//! ```rust
//! use seismic_core::site::{CodeParsing, SiteParameters, SeismicZone, SoilClass, Region};
//!
//! let mut fallbacks = Vec::new();
//! let site = SiteParameters::from_codes("V", "B", "Sierra", CodeParsing::Lenient, &mut fallbacks).unwrap();
//! assert_eq!(site.zone, SeismicZone::V);
//! assert!(fallbacks.is_empty());
//!
//! let coeffs = site.coefficients();
//! assert_eq!(coeffs.z, 0.40);
//! assert_eq!(coeffs.eta, 2.48);
//! ```

pub mod region;
pub mod soil;
pub mod zone;

pub use region::Region;
pub use soil::{SoilAmplification, SoilClass};
pub use zone::SeismicZone;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// How unrecognized site/system codes are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CodeParsing {
    /// Substitute the table's fallback entry and record it
    #[default]
    Lenient,
    /// Reject the code with `CalcError::UnknownCode`
    Strict,
}

/// Which code table a code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeKind {
    Zone,
    Soil,
    Region,
    System,
}

impl CodeKind {
    /// Field name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            CodeKind::Zone => "zone",
            CodeKind::Soil => "soil",
            CodeKind::Region => "region",
            CodeKind::System => "system",
        }
    }
}

impl std::fmt::Display for CodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A fallback substitution made while resolving codes in lenient mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeFallback {
    /// Table the code was looked up in
    pub kind: CodeKind,
    /// Code as submitted
    pub given: String,
    /// Code of the fallback entry that was used instead
    pub resolved: String,
}

impl std::fmt::Display for CodeFallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown {} code '{}', using default '{}'",
            self.kind, self.given, self.resolved
        )
    }
}

/// A closed table of code entries with a fallback entry.
///
/// Implemented by the site enums and by
/// [`StructuralSystem`](crate::structure::StructuralSystem).
pub trait CodeTable: Sized + Copy {
    /// Table this type resolves codes for
    const KIND: CodeKind;

    /// Entry used when a code is not recognized (lenient mode)
    const FALLBACK: Self;

    /// Parse a recognized code, `None` otherwise
    fn from_code(code: &str) -> Option<Self>;

    /// Canonical code string (e.g., "V", "B", "Sierra", "porticos_ha")
    fn code(&self) -> &'static str;

    /// Resolve a code according to `mode`, recording lenient substitutions.
    fn resolve(code: &str, mode: CodeParsing, fallbacks: &mut Vec<CodeFallback>) -> CalcResult<Self> {
        if let Some(entry) = Self::from_code(code) {
            return Ok(entry);
        }
        match mode {
            CodeParsing::Strict => Err(CalcError::unknown_code(Self::KIND.name(), code)),
            CodeParsing::Lenient => {
                fallbacks.push(CodeFallback {
                    kind: Self::KIND,
                    given: code.to_string(),
                    resolved: Self::FALLBACK.code().to_string(),
                });
                Ok(Self::FALLBACK)
            }
        }
    }
}

/// Normalize a submitted code for table matching
pub(crate) fn normalize_code(code: &str) -> String {
    code.trim().to_lowercase().replace([' ', '-'], "_")
}

/// Site description: seismic zone, soil class and region.
///
/// ## JSON Example
///
/// ```json
/// { "zone": "V", "soil": "B", "region": "Sierra" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteParameters {
    /// Seismic zone (I through VI)
    pub zone: SeismicZone,
    /// Soil profile class (A through E)
    pub soil: SoilClass,
    /// Geographic region
    pub region: Region,
}

impl SiteParameters {
    /// Create site parameters from resolved codes
    pub fn new(zone: SeismicZone, soil: SoilClass, region: Region) -> Self {
        SiteParameters { zone, soil, region }
    }

    /// Resolve site parameters from raw code strings.
    pub fn from_codes(
        zone: &str,
        soil: &str,
        region: &str,
        mode: CodeParsing,
        fallbacks: &mut Vec<CodeFallback>,
    ) -> CalcResult<Self> {
        Ok(SiteParameters {
            zone: SeismicZone::resolve(zone, mode, fallbacks)?,
            soil: SoilClass::resolve(soil, mode, fallbacks)?,
            region: Region::resolve(region, mode, fallbacks)?,
        })
    }

    /// Look up every table coefficient for this site
    pub fn coefficients(&self) -> SiteCoefficients {
        let amp = self.soil.amplification(self.zone);
        SiteCoefficients {
            z: self.zone.z_factor(),
            fa: amp.fa,
            fd: amp.fd,
            fs: amp.fs,
            eta: self.region.eta(),
            r: self.soil.spectrum_exponent(),
        }
    }
}

/// Numeric coefficients resolved from the site tables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiteCoefficients {
    /// Zone factor Z (peak ground acceleration ratio)
    pub z: f64,
    /// Short-period amplification Fa
    pub fa: f64,
    /// Displacement amplification Fd
    pub fd: f64,
    /// Nonlinear soil behavior factor Fs
    pub fs: f64,
    /// Regional plateau ratio η
    pub eta: f64,
    /// Decay exponent r
    pub r: f64,
}
