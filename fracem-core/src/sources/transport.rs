//! Material transport components
//!
//! Sand, water and the prime movers' fuel are trucked to location by diesel
//! trucks. Every calculator reduces to a number of loads, which is turned into
//! truck fuel and then into CO2e:
//!
//! $$E = \frac{loads \cdot d}{c} \cdot (CO2 + CH4e + N2Oe)_{diesel}$$
//!
//! where $d$ is the one-way distance (mile) and $c$ the truck consumption
//! (mile/gal).

use crate::constants::{diesel, CUBIC_METRES_PER_GALLON};
use crate::errors::FracResult;
use crate::job::JobConfiguration;
use crate::parameters::{FuelTransportParameters, SandTransportParameters, WaterTransportParameters};
use crate::source::{EmissionCategory, EmissionSource};
use crate::validation::ensure_finite_result;
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// CO2e of diesel trucks driving `trips` times over `distance`.
pub(crate) fn trucking_co2e(
    trips: FloatValue,
    distance: FloatValue,
    truck_consumption: FloatValue,
) -> FloatValue {
    let fuel = trips * distance / truck_consumption;
    fuel * diesel().co2e_per_gallon()
}

/// Sand (proppant) transport emissions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SandTransport {
    parameters: SandTransportParameters,
}

impl SandTransport {
    pub fn from_parameters(parameters: SandTransportParameters) -> Self {
        Self { parameters }
    }

    /// Truckloads of sand for the whole job, fractional loads included
    pub fn number_of_loads(&self, num_stage: u32) -> FloatValue {
        self.parameters.prop_per_stage * num_stage as FloatValue / self.parameters.sand_load
    }
}

#[typetag::serde]
impl EmissionSource for SandTransport {
    fn category(&self) -> EmissionCategory {
        EmissionCategory::SandTransport
    }

    fn emissions(&self, job: &JobConfiguration) -> FracResult<FloatValue> {
        self.parameters.validate()?;
        let value = trucking_co2e(
            self.number_of_loads(job.num_stage()),
            self.parameters.dist_to_sand,
            self.parameters.truck_consumption,
        );
        ensure_finite_result("sand_transport", value)
    }
}

/// Water transport emissions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterTransport {
    parameters: WaterTransportParameters,
}

impl WaterTransport {
    pub fn from_parameters(parameters: WaterTransportParameters) -> Self {
        Self { parameters }
    }

    /// Truckloads of water for the whole job
    pub fn number_of_loads(&self, num_stage: u32) -> FloatValue {
        self.parameters.water_per_stage * CUBIC_METRES_PER_GALLON * num_stage as FloatValue
            / self.parameters.water_load
    }
}

#[typetag::serde]
impl EmissionSource for WaterTransport {
    fn category(&self) -> EmissionCategory {
        EmissionCategory::WaterTransport
    }

    fn emissions(&self, job: &JobConfiguration) -> FracResult<FloatValue> {
        self.parameters.validate()?;
        let value = trucking_co2e(
            self.number_of_loads(job.num_stage()),
            self.parameters.dist_to_water,
            self.parameters.truck_consumption,
        );
        ensure_finite_result("water_transport", value)
    }
}

/// Emissions from delivering the diesel burned by the prime movers
///
/// The fuel volume is derived from the job's own energy throughput rather than
/// supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelTransport {
    parameters: FuelTransportParameters,
}

impl FuelTransport {
    pub fn from_parameters(parameters: FuelTransportParameters) -> Self {
        Self { parameters }
    }

    /// Truckloads of diesel for the whole job
    pub fn number_of_loads(
        &self,
        btu_per_hour: FloatValue,
        operating_hours: FloatValue,
    ) -> FloatValue {
        let gallons_per_hour = diesel().gallons_per_hour(btu_per_hour);
        gallons_per_hour * CUBIC_METRES_PER_GALLON * operating_hours / self.parameters.fuel_load
    }
}

#[typetag::serde]
impl EmissionSource for FuelTransport {
    fn category(&self) -> EmissionCategory {
        EmissionCategory::FuelTransport
    }

    fn emissions(&self, job: &JobConfiguration) -> FracResult<FloatValue> {
        self.parameters.validate()?;
        let loads = self.number_of_loads(job.btu_per_hour(), job.total_operating_hours());
        let value = trucking_co2e(
            loads,
            self.parameters.dist_to_fuel,
            self.parameters.truck_consumption,
        );
        ensure_finite_result("fuel_transport", value)
    }
}
