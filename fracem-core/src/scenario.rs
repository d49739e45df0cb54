//! Scenario documents
//!
//! A scenario pairs the job parameters with the sources to evaluate. It is
//! usually written as TOML:
//!
//! ```toml
//! [job]
//! frac_type = "conv"
//! stage_time = 60.0
//! num_stage = 10
//! bottomhole_pressure = 8000.0
//! pump_rate = 80.0
//! truck_tanks = 5
//! truck_pumps = 5
//!
//! [[sources]]
//! type = "PrimeMover"
//! parameters = { operating_minutes = 60.0, fuel_mix = { diesel = 1.0 } }
//!
//! [[sources]]
//! type = "LandDisturbance"
//! ```

use crate::errors::{FracError, FracResult};
use crate::inventory::{EmissionsInventory, EmissionsReport};
use crate::job::{JobConfiguration, JobParameters};
use serde::{Deserialize, Serialize};

/// A job and the emission sources that apply to it
#[derive(Debug, Serialize, Deserialize)]
pub struct Scenario {
    pub job: JobParameters,
    #[serde(default)]
    pub sources: EmissionsInventory,
}

impl Scenario {
    pub fn from_toml_str(document: &str) -> FracResult<Self> {
        toml::from_str(document).map_err(|e| FracError::Config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> FracResult<String> {
        toml::to_string(self).map_err(|e| FracError::Config(e.to_string()))
    }

    /// Build the job configuration and evaluate every source against it
    pub fn evaluate(&self) -> FracResult<EmissionsReport> {
        let job = JobConfiguration::new(self.job.clone())?;
        self.sources.evaluate(&job)
    }
}
