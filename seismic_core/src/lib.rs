//! # seismic_core - Seismic Design Parameter Engine
//!
//! `seismic_core` computes NEC-15 (NEC-SE-DS) equivalent static seismic design
//! parameters for regular buildings: the elastic design response spectrum,
//! the approximate fundamental period, the design base shear with its
//! minimum-coefficient check, and the vertical distribution of lateral
//! forces. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Reported Fallbacks**: Unknown codes resolve to documented defaults and
//!   every substitution is listed on the result
//!
//! ## Quick Start
//!
//! ```rust
//! use seismic_core::{calculate_form, SeismicForm};
//! use seismic_core::site::CodeParsing;
//!
//! let form = SeismicForm::quito_example();
//! let result = calculate_form(&form, CodeParsing::Lenient).unwrap();
//!
//! assert!(result.passes_minimum());
//! assert!((result.base_shear.base_shear_t - 53.568).abs() < 1e-9);
//!
//! // Serialize to JSON for storage or transmission
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`site`] - Zone, soil and region tables with code resolution
//! - [`structure`] - Structural systems, floors and design factors
//! - [`calculations`] - Spectrum, period, base shear and force distribution
//! - [`form`] - Raw request intake and validation
//! - [`project`] - Project container, metadata, and settings
//! - [`units`] - Force unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - File operations with atomic saves and locking

pub mod calculations;
pub mod errors;
pub mod file_io;
pub mod form;
pub mod project;
pub mod site;
pub mod structure;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, SeismicInput, SeismicResult};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_form, load_project, save_project, FileLock};
pub use form::{calculate_form, SeismicForm};
pub use project::{GlobalSettings, Project, ProjectMetadata};
