//! Sand Mining Component
//!
//! Scope 3 emissions of the sand supplier, from a contractor supplied
//! footprint per ton of proppant.

use crate::constants::KG_PER_TON;
use crate::errors::FracResult;
use crate::job::JobConfiguration;
use crate::parameters::SandMiningParameters;
use crate::source::{EmissionCategory, EmissionSource};
use crate::validation::ensure_finite_result;
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Sand mining and delivery emissions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SandMining {
    parameters: SandMiningParameters,
}

impl SandMining {
    pub fn from_parameters(parameters: SandMiningParameters) -> Self {
        Self { parameters }
    }

    pub fn calculate(&self, num_stage: u32) -> FloatValue {
        self.parameters.prop_per_stage
            * num_stage as FloatValue
            * self.parameters.sand_footprint
            * KG_PER_TON
    }
}

#[typetag::serde]
impl EmissionSource for SandMining {
    fn category(&self) -> EmissionCategory {
        EmissionCategory::SandMining
    }

    fn emissions(&self, job: &JobConfiguration) -> FracResult<FloatValue> {
        self.parameters.validate()?;
        ensure_finite_result("sand_mining", self.calculate(job.num_stage()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    fn component(prop_per_stage: FloatValue, sand_footprint: FloatValue) -> SandMining {
        SandMining::from_parameters(SandMiningParameters {
            prop_per_stage,
            sand_footprint,
        })
    }

    #[test]
    fn test_tons_to_kg() {
        assert!(is_close!(component(100.0, 0.05).calculate(10), 50_000.0));
    }

    #[test]
    fn test_overflow_rejected() {
        let job = crate::job::JobConfiguration::new(crate::job::JobParameters {
            frac_type: crate::job::FracType::Conventional,
            stage_time: 60.0,
            num_stage: 10,
            bottomhole_pressure: 8000.0,
            pump_rate: 80.0,
            truck_tanks: 5,
            truck_pumps: 5,
            pump_efficiency: 0.9,
        })
        .unwrap();
        assert!(component(1e308, 1.0).emissions(&job).is_err());
        assert!(component(100.0, 0.05).emissions(&job).is_ok());
    }

    #[test]
    fn test_linear_in_inputs() {
        let base = component(100.0, 0.05).calculate(10);
        assert!(is_close!(component(300.0, 0.05).calculate(10), 3.0 * base));
        assert!(is_close!(component(100.0, 0.15).calculate(10), 3.0 * base));
        assert!(is_close!(component(100.0, 0.05).calculate(20), 2.0 * base));
    }
}
