//! Sand mining parameters

use crate::errors::FracResult;
use crate::validation::ensure_non_negative;
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for scope 3 emissions of the sand supplier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SandMiningParameters {
    /// Proppant pumped in each stage
    /// unit: ton
    pub prop_per_stage: FloatValue,
    /// Emission intensity of mined and delivered sand.
    /// Contractor specific, there is no default.
    /// unit: ton CO2 / ton proppant
    pub sand_footprint: FloatValue,
}

impl SandMiningParameters {
    pub(crate) fn validate(&self) -> FracResult<()> {
        ensure_non_negative("prop_per_stage", self.prop_per_stage)?;
        ensure_non_negative("sand_footprint", self.sand_footprint)?;
        Ok(())
    }
}
