//! Core model for estimating the CO2-equivalent emissions of a hydraulic fracturing job
//!
//! # Module Organisation
//!
//! - `constants`: Emission factor table, heating values and fixed fleet counts
//! - `job`: Validated job configuration and derived hydraulic quantities
//! - `parameters`: Category-specific inputs for each emission source
//! - `sources`: One calculator per emission category
//! - `inventory`: Evaluation of a set of sources into a per-category report
//! - `scenario`: TOML documents describing a job and its sources
//!
//! All masses are kilograms of CO2-equivalent.

pub mod constants;
pub mod errors;
pub mod inventory;
pub mod job;
pub mod parameters;
pub mod scenario;
pub mod source;
pub mod sources;
mod validation;

/// Floating point type used throughout the model
pub type FloatValue = f64;
