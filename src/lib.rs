//! Hydraulic fracturing job emissions
//!
//! Re-exports the core model and provides the Python extension module.

pub use fracem_core::*;

pub mod python;
