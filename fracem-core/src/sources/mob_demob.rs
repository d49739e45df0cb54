//! Mobilisation / Demobilisation Component
//!
//! Fuel burned moving the fleet between base and location. Every unit in the
//! fleet is assumed to be a diesel truck travelling `mob_distance`.

use crate::errors::FracResult;
use crate::job::{FleetComposition, JobConfiguration};
use crate::parameters::MobDemobParameters;
use crate::source::{EmissionCategory, EmissionSource};
use crate::sources::transport::trucking_co2e;
use crate::validation::ensure_finite_result;
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Fleet mobilisation and demobilisation emissions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MobDemob {
    parameters: MobDemobParameters,
}

impl MobDemob {
    pub fn from_parameters(parameters: MobDemobParameters) -> Self {
        Self { parameters }
    }

    /// Core physics calculation, extracted for testability
    pub fn calculate(&self, fleet: &FleetComposition) -> FloatValue {
        let heavy = trucking_co2e(
            fleet.heavy_units(),
            self.parameters.mob_distance,
            self.parameters.truck_consumption,
        );
        let light = trucking_co2e(
            fleet.light_units(),
            self.parameters.mob_distance,
            self.parameters.truck_consumption,
        );
        heavy + light
    }
}

#[typetag::serde]
impl EmissionSource for MobDemob {
    fn category(&self) -> EmissionCategory {
        EmissionCategory::MobDemob
    }

    fn emissions(&self, job: &JobConfiguration) -> FracResult<FloatValue> {
        self.parameters.validate()?;
        ensure_finite_result("mob_demob", self.calculate(job.fleet()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    fn component(mob_distance: FloatValue) -> MobDemob {
        MobDemob::from_parameters(MobDemobParameters {
            mob_distance,
            truck_consumption: 6.0,
        })
    }

    #[test]
    fn test_default_fleet() {
        let fleet = FleetComposition::with_trucks(5, 5);
        let value = component(150.0).calculate(&fleet);
        assert!(is_close!(value, 14497.084), "Got {}", value);
    }

    #[test]
    fn test_extra_pumps_add_emissions() {
        let small = component(150.0).calculate(&FleetComposition::with_trucks(5, 5));
        let large = component(150.0).calculate(&FleetComposition::with_trucks(10, 5));
        let per_truck = 150.0 / 6.0 * 10.35506;
        assert!(is_close!(large - small, 5.0 * per_truck));
    }

    #[test]
    fn test_no_trucks_still_moves_fixed_fleet() {
        let value = component(150.0).calculate(&FleetComposition::with_trucks(0, 0));
        assert!(value > 0.0);
    }

    #[test]
    fn test_zero_distance() {
        let value = component(0.0).calculate(&FleetComposition::with_trucks(5, 5));
        assert_eq!(value, 0.0);
    }
}
