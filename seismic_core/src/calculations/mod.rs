//! # Seismic Calculations
//!
//! The analysis is a pipeline of pure stages. Each stage follows the
//! pattern of a plain function over its inputs returning a JSON-serializable
//! result:
//!
//! - [`spectrum`] - Elastic response spectrum from the site tables
//! - [`period`] - Empirical fundamental period
//! - [`base_shear`] - Seismic coefficient, minimum check and base shear
//! - [`force_distribution`] - Vertical distribution of the base shear
//! - [`seismic`] - The full analysis: `calculate(input) -> Result<SeismicResult, CalcError>`
//!
//! ## LLM Integration
//!
//! All types are designed for LLM consumption:
//! - Comprehensive rustdoc with examples
//! - Clean JSON serialization
//! - Structured error responses

pub mod base_shear;
pub mod force_distribution;
pub mod period;
pub mod seismic;
pub mod spectrum;

// Re-export commonly used types
pub use base_shear::{BaseShearResult, MinimumShearCheck};
pub use force_distribution::{ForceDistribution, LevelForce};
pub use period::PeriodEstimate;
pub use seismic::{calculate, InputSummary, SeismicInput, SeismicResult, SpectrumSeries};
pub use spectrum::{ResponseSpectrum, SpectrumParameters, SpectrumPoint};
