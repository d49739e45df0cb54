//! Prime Mover Component
//!
//! Combustion emissions of the engines driving the pumps and blenders.
//!
//! # Algorithm
//!
//! For each fuel $f$ the hourly emission rate is
//!
//! $$R_f = \frac{BTU/hr}{HV_f} \cdot x_f \cdot (CO2_f + CH4e_f + N2Oe_f)$$
//!
//! where $HV_f$ is the heating value and $x_f$ the fuel fraction. The job
//! total is
//!
//! $$E = \sum_f R_f \cdot \frac{t_{stage}}{60} \cdot n_{stage}$$

use crate::constants::{FuelType, FUEL_TABLE};
use crate::errors::FracResult;
use crate::job::JobConfiguration;
use crate::parameters::{FuelMix, PrimeMoverParameters};
use crate::source::{EmissionCategory, EmissionSource};
use crate::validation::ensure_finite_result;
use crate::FloatValue;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Tolerance on the fuel mix summing to one before a warning is logged
const FUEL_MIX_TOLERANCE: FloatValue = 1e-6;

/// Prime mover combustion emissions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimeMover {
    parameters: PrimeMoverParameters,
}

impl PrimeMover {
    /// Diesel-only prime movers
    pub fn new(operating_minutes: FloatValue) -> Self {
        Self::from_parameters(PrimeMoverParameters {
            operating_minutes,
            fuel_mix: FuelMix::diesel_only(),
        })
    }

    pub fn from_parameters(parameters: PrimeMoverParameters) -> Self {
        Self { parameters }
    }

    /// Hourly CO2e rate of one fuel in the mix
    /// unit: kg/hr
    pub fn hourly_rate(&self, btu_per_hour: FloatValue, fuel: FuelType) -> FloatValue {
        let factors = FUEL_TABLE.factors(fuel);
        factors.gallons_per_hour(btu_per_hour)
            * self.parameters.fuel_mix.fraction(fuel)
            * factors.co2e_per_gallon()
    }

    /// Core physics calculation, extracted for testability
    pub fn calculate(&self, btu_per_hour: FloatValue, operating_hours: FloatValue) -> FloatValue {
        let hourly: FloatValue = FuelType::ALL
            .iter()
            .map(|fuel| self.hourly_rate(btu_per_hour, *fuel))
            .sum();
        hourly * operating_hours
    }
}

#[typetag::serde]
impl EmissionSource for PrimeMover {
    fn category(&self) -> EmissionCategory {
        EmissionCategory::PrimeMover
    }

    fn emissions(&self, job: &JobConfiguration) -> FracResult<FloatValue> {
        self.parameters.validate()?;

        let total_fraction = self.parameters.fuel_mix.total();
        if (total_fraction - 1.0).abs() > FUEL_MIX_TOLERANCE {
            warn!(
                "Prime mover fuel fractions sum to {:.4} rather than 1",
                total_fraction
            );
        }
        debug!(
            "Prime movers run {} min between stages",
            self.parameters.operating_minutes
        );

        ensure_finite_result(
            "prime_mover",
            self.calculate(job.btu_per_hour(), job.total_operating_hours()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::{FracType, JobParameters};
    use is_close::is_close;

    fn job(num_stage: u32) -> JobConfiguration {
        JobConfiguration::new(JobParameters {
            frac_type: FracType::Conventional,
            stage_time: 60.0,
            num_stage,
            bottomhole_pressure: 8000.0,
            pump_rate: 80.0,
            truck_tanks: 5,
            truck_pumps: 5,
            pump_efficiency: 0.9,
        })
        .unwrap()
    }

    fn with_mix(fuel_mix: FuelMix) -> PrimeMover {
        PrimeMover::from_parameters(PrimeMoverParameters {
            operating_minutes: 60.0,
            fuel_mix,
        })
    }

    #[test]
    fn test_diesel_only() {
        let value = PrimeMover::new(60.0).emissions(&job(10)).unwrap();
        assert!(is_close!(value, 35514.17670852681), "Got {}", value);
    }

    #[test]
    fn test_matches_hand_calculation() {
        let job = job(10);
        let expected = job.btu_per_hour() / 129306.0 * 10.35506 * 60.0 / 60.0 * 10.0;
        let value = PrimeMover::new(30.0).emissions(&job).unwrap();
        assert!(is_close!(value, expected));
    }

    #[test]
    fn test_zero_fraction_removes_fuel() {
        let job = job(10);
        let half_diesel = with_mix(FuelMix {
            diesel: 0.5,
            ..FuelMix::default()
        });
        let full_diesel = PrimeMover::new(60.0);

        let half = half_diesel.emissions(&job).unwrap();
        let full = full_diesel.emissions(&job).unwrap();
        assert!(is_close!(half * 2.0, full));
        assert_eq!(half_diesel.hourly_rate(job.btu_per_hour(), FuelType::Lng), 0.0);
    }

    #[test]
    fn test_mixed_fuels_sum() {
        let job = job(10);
        let mixed = with_mix(FuelMix {
            diesel: 0.25,
            cng: 0.25,
            lng: 0.25,
            electricity: 0.25,
        });

        let expected: FloatValue = FuelType::ALL
            .iter()
            .map(|fuel| {
                let factors = FUEL_TABLE.factors(*fuel);
                job.btu_per_hour() / factors.heating_value * 0.25 * factors.co2e_per_gallon()
            })
            .sum::<FloatValue>()
            * job.total_operating_hours();

        assert!(is_close!(mixed.emissions(&job).unwrap(), expected));
    }

    #[test]
    fn test_lng_emits_less_than_diesel() {
        let job = job(10);
        let lng = with_mix(FuelMix {
            diesel: 0.0,
            lng: 1.0,
            ..FuelMix::default()
        });
        assert!(lng.emissions(&job).unwrap() < PrimeMover::new(60.0).emissions(&job).unwrap());
    }

    #[test]
    fn test_scales_with_stages() {
        let single = PrimeMover::new(60.0).emissions(&job(5)).unwrap();
        let double = PrimeMover::new(60.0).emissions(&job(10)).unwrap();
        assert!(is_close!(double, 2.0 * single));
    }

    #[test]
    fn test_unbalanced_mix_still_evaluates() {
        let over = with_mix(FuelMix {
            diesel: 1.0,
            cng: 1.0,
            ..FuelMix::default()
        });
        assert!(over.emissions(&job(10)).unwrap() > 0.0);
    }

    #[test]
    fn test_invalid_fraction() {
        let invalid = with_mix(FuelMix {
            diesel: -0.5,
            ..FuelMix::default()
        });
        assert!(invalid.emissions(&job(10)).is_err());
    }
}
