//! Land Disturbance Component
//!
//! CO2 from land disturbance using the OPGEE coefficient for fields that are
//! not intensively drilled. The cumulative production of one well is converted
//! to energy and multiplied by the coefficient, so the result is an amortised
//! allocation that does not depend on the job.

use crate::constants::{LAND_CO2_G_PER_MJ, OIL_PRODUCED_TONS, TONS_TO_MJ_DIVISOR};
use crate::errors::FracResult;
use crate::job::JobConfiguration;
use crate::source::{EmissionCategory, EmissionSource};
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Land disturbance emissions allocated to one well
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LandDisturbance {}

impl LandDisturbance {
    pub fn new() -> Self {
        Self {}
    }

    pub fn calculate(&self) -> FloatValue {
        let mj_produced = OIL_PRODUCED_TONS / TONS_TO_MJ_DIVISOR;
        // g -> kg
        mj_produced * LAND_CO2_G_PER_MJ / 1000.0
    }
}

#[typetag::serde]
impl EmissionSource for LandDisturbance {
    fn category(&self) -> EmissionCategory {
        EmissionCategory::Land
    }

    fn emissions(&self, _job: &JobConfiguration) -> FracResult<FloatValue> {
        Ok(self.calculate())
    }
}
