//! Material transport parameters
//!
//! Sand, water and fuel are all delivered by diesel trucks. Loads are billed
//! fractionally, so a partly filled truck counts as part of a trip.

use crate::errors::FracResult;
use crate::validation::{ensure_non_negative, ensure_positive};
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for sand (proppant) transport
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SandTransportParameters {
    /// Proppant pumped in each stage
    /// unit: ton
    pub prop_per_stage: FloatValue,
    /// Sand carried by one truck
    /// unit: ton
    pub sand_load: FloatValue,
    /// One-way distance to the sand source
    /// unit: mile
    pub dist_to_sand: FloatValue,
    /// unit: mile/gal
    pub truck_consumption: FloatValue,
}

impl SandTransportParameters {
    pub(crate) fn validate(&self) -> FracResult<()> {
        ensure_non_negative("prop_per_stage", self.prop_per_stage)?;
        ensure_positive("sand_load", self.sand_load)?;
        ensure_non_negative("dist_to_sand", self.dist_to_sand)?;
        ensure_positive("truck_consumption", self.truck_consumption)?;
        Ok(())
    }
}

/// Parameters for water transport
///
/// Only meaningful when water is trucked to location. Pit-sourced water has
/// no transport emissions and this source should not be evaluated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterTransportParameters {
    /// Water pumped in each stage
    /// unit: gal
    pub water_per_stage: FloatValue,
    /// Water carried by one truck
    /// unit: m^3
    pub water_load: FloatValue,
    /// One-way distance to the water source
    /// unit: mile
    pub dist_to_water: FloatValue,
    /// unit: mile/gal
    pub truck_consumption: FloatValue,
}

impl WaterTransportParameters {
    pub(crate) fn validate(&self) -> FracResult<()> {
        ensure_non_negative("water_per_stage", self.water_per_stage)?;
        ensure_positive("water_load", self.water_load)?;
        ensure_non_negative("dist_to_water", self.dist_to_water)?;
        ensure_positive("truck_consumption", self.truck_consumption)?;
        Ok(())
    }
}

/// Parameters for transport of the diesel burned by the prime movers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelTransportParameters {
    /// Fuel carried by one truck
    /// unit: m^3
    pub fuel_load: FloatValue,
    /// One-way distance to the fuel source
    /// unit: mile
    pub dist_to_fuel: FloatValue,
    /// unit: mile/gal
    pub truck_consumption: FloatValue,
}

impl FuelTransportParameters {
    pub(crate) fn validate(&self) -> FracResult<()> {
        ensure_positive("fuel_load", self.fuel_load)?;
        ensure_non_negative("dist_to_fuel", self.dist_to_fuel)?;
        ensure_positive("truck_consumption", self.truck_consumption)?;
        Ok(())
    }
}
