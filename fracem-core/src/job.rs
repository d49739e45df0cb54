//! Job configuration
//!
//! A [`JobConfiguration`] is built once from [`JobParameters`] and is immutable
//! afterwards. The hydraulic horsepower and the energy throughput of the prime
//! movers are derived at construction:
//!
//! $$HHP = \frac{p \cdot q}{40.8 \cdot \eta}$$
//!
//! $$BTU/hr = HHP \cdot 2544.43$$
//!
//! where $p$ is the bottomhole pressure (psi), $q$ the pump rate (bbl/min) and
//! $\eta$ the pump efficiency.

use crate::constants::{
    AUXILIARY_TRUCK_UNITS, BLENDER_UNITS, BTU_PER_HP_HOUR, COMMAND_UNITS, CRANE_UNITS,
    DEFAULT_PUMP_EFFICIENCY, HP_PER_PUMP, HYDRAULIC_HP_DIVISOR, IRON_UNITS, LAS_UNITS,
    MISSILE_UNITS, PCM_UNITS, PICKUP_UNITS, SILO_UNITS, WIRELINE_UNITS,
};
use crate::errors::{FracError, FracResult};
use crate::parameters::{
    FuelMix, FuelTransportParameters, MobDemobParameters, PrimeMoverParameters,
    SandMiningParameters, SandTransportParameters, WaterTransportParameters,
};
use crate::source::EmissionSource;
use crate::sources::{
    Auxiliary, FuelTransport, LandDisturbance, MobDemob, People, PrimeMover, SandMining,
    SandTransport, WaterTransport,
};
use crate::validation::{ensure_efficiency, ensure_finite_result, ensure_positive};
use crate::FloatValue;
use log::debug;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Fracturing operation type.
///
/// Only conventional jobs have a dedicated calculation path; zipper and
/// simultaneous jobs are accepted and evaluated identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum FracType {
    Conventional,
    Zipper,
    Simultaneous,
}

impl FracType {
    /// Short code used in configuration files
    pub fn code(&self) -> &'static str {
        match self {
            FracType::Conventional => "conv",
            FracType::Zipper => "zip",
            FracType::Simultaneous => "sim",
        }
    }
}

impl FromStr for FracType {
    type Err = FracError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "conv" | "conventional" => Ok(FracType::Conventional),
            "zip" | "zipper" => Ok(FracType::Zipper),
            "sim" | "simultaneous" => Ok(FracType::Simultaneous),
            other => Err(FracError::InvalidFracType(other.to_string())),
        }
    }
}

impl TryFrom<String> for FracType {
    type Error = FracError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for FracType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl fmt::Display for FracType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

fn default_pump_efficiency() -> FloatValue {
    DEFAULT_PUMP_EFFICIENCY
}

/// Inputs describing a single frac job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobParameters {
    pub frac_type: FracType,
    /// Duration of one stage
    /// unit: min
    pub stage_time: FloatValue,
    /// Number of stages in the job
    pub num_stage: u32,
    /// unit: psi
    pub bottomhole_pressure: FloatValue,
    /// unit: bbl/min
    pub pump_rate: FloatValue,
    /// Number of tank trucks travelling to location
    pub truck_tanks: u32,
    /// Number of pump trucks travelling to location
    pub truck_pumps: u32,
    /// Pump efficiency, fraction in (0, 1]
    /// default: 0.9
    #[serde(default = "default_pump_efficiency")]
    pub pump_efficiency: FloatValue,
}

/// Units mobilised to and from the job site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetComposition {
    pub pumps: u32,
    pub tanks: u32,
    pub blender: u32,
    pub pcm: u32,
    pub silos: u32,
    pub iron: u32,
    pub missile: u32,
    pub las: u32,
    pub crane: u32,
    pub wireline: u32,
    pub command_unit: u32,
    pub pickup: u32,
    pub auxiliary_trucks: u32,
}

impl FleetComposition {
    /// Fleet for a job with the given pump and tank truck counts.
    pub fn with_trucks(truck_pumps: u32, truck_tanks: u32) -> Self {
        Self {
            pumps: truck_pumps,
            tanks: truck_tanks,
            blender: BLENDER_UNITS,
            pcm: PCM_UNITS,
            silos: SILO_UNITS,
            iron: IRON_UNITS,
            missile: MISSILE_UNITS,
            las: LAS_UNITS,
            crane: CRANE_UNITS,
            wireline: WIRELINE_UNITS,
            command_unit: COMMAND_UNITS,
            pickup: PICKUP_UNITS,
            auxiliary_trucks: AUXILIARY_TRUCK_UNITS,
        }
    }

    /// Pumping, storage and control equipment.
    ///
    /// Summed as floating point so large truck counts cannot overflow.
    pub fn heavy_units(&self) -> FloatValue {
        [
            self.pumps,
            self.tanks,
            self.blender,
            self.pcm,
            self.silos,
            self.iron,
            self.missile,
            self.las,
            self.crane,
            self.wireline,
            self.command_unit,
        ]
        .iter()
        .map(|units| *units as FloatValue)
        .sum()
    }

    /// Pickups and auxiliary trucks.
    pub fn light_units(&self) -> FloatValue {
        self.pickup as FloatValue + self.auxiliary_trucks as FloatValue
    }
}

/// Validated, immutable configuration of one frac job
#[derive(Debug, Clone, PartialEq)]
pub struct JobConfiguration {
    parameters: JobParameters,
    fleet: FleetComposition,
    horsepower_hr: FloatValue,
    num_pumps_required: FloatValue,
    btu_per_hour: FloatValue,
}

impl JobConfiguration {
    /// Validate the parameters and derive the hydraulic quantities.
    pub fn new(parameters: JobParameters) -> FracResult<Self> {
        ensure_positive("stage_time", parameters.stage_time)?;
        ensure_positive("bottomhole_pressure", parameters.bottomhole_pressure)?;
        ensure_positive("pump_rate", parameters.pump_rate)?;
        ensure_efficiency("pump_efficiency", parameters.pump_efficiency)?;
        if parameters.num_stage == 0 {
            return Err(FracError::InvalidArgument {
                name: "num_stage".to_string(),
                value: 0.0,
                reason: "a job needs at least one stage",
            });
        }

        let horsepower_hr = (parameters.bottomhole_pressure * parameters.pump_rate)
            / (HYDRAULIC_HP_DIVISOR * parameters.pump_efficiency);
        let num_pumps_required = horsepower_hr / HP_PER_PUMP;
        let btu_per_hour = ensure_finite_result("btu_per_hour", horsepower_hr * BTU_PER_HP_HOUR)?;

        debug!(
            "{} job: {} stages of {} min, {:.2} hp ({:.2} pumps), {:.0} BTU/hr",
            parameters.frac_type,
            parameters.num_stage,
            parameters.stage_time,
            horsepower_hr,
            num_pumps_required,
            btu_per_hour
        );

        let fleet = FleetComposition::with_trucks(parameters.truck_pumps, parameters.truck_tanks);

        Ok(Self {
            parameters,
            fleet,
            horsepower_hr,
            num_pumps_required,
            btu_per_hour,
        })
    }

    pub fn parameters(&self) -> &JobParameters {
        &self.parameters
    }

    pub fn frac_type(&self) -> FracType {
        self.parameters.frac_type
    }

    /// unit: min
    pub fn stage_time(&self) -> FloatValue {
        self.parameters.stage_time
    }

    pub fn num_stage(&self) -> u32 {
        self.parameters.num_stage
    }

    pub fn fleet(&self) -> &FleetComposition {
        &self.fleet
    }

    /// Hydraulic horsepower
    pub fn horsepower_hr(&self) -> FloatValue {
        self.horsepower_hr
    }

    /// Informational only, not used by any calculator
    pub fn num_pumps_required(&self) -> FloatValue {
        self.num_pumps_required
    }

    /// Prime mover energy throughput
    /// unit: BTU/hr
    pub fn btu_per_hour(&self) -> FloatValue {
        self.btu_per_hour
    }

    /// Pumping hours summed over all stages
    pub fn total_operating_hours(&self) -> FloatValue {
        self.parameters.stage_time / 60.0 * self.parameters.num_stage as FloatValue
    }

    /// Prime mover combustion emissions (kg CO2e)
    pub fn prime_mover(
        &self,
        operating_minutes: FloatValue,
        fuel_mix: FuelMix,
    ) -> FracResult<FloatValue> {
        PrimeMover::from_parameters(PrimeMoverParameters {
            operating_minutes,
            fuel_mix,
        })
        .emissions(self)
    }

    /// Sand trucking emissions (kg CO2e)
    pub fn sand_transport(
        &self,
        prop_per_stage: FloatValue,
        sand_load: FloatValue,
        dist_to_sand: FloatValue,
        truck_consumption: FloatValue,
    ) -> FracResult<FloatValue> {
        SandTransport::from_parameters(SandTransportParameters {
            prop_per_stage,
            sand_load,
            dist_to_sand,
            truck_consumption,
        })
        .emissions(self)
    }

    /// Water trucking emissions (kg CO2e)
    ///
    /// Only applies when water is trucked in rather than sourced from a pit.
    pub fn water_transport(
        &self,
        water_per_stage: FloatValue,
        water_load: FloatValue,
        dist_to_water: FloatValue,
        truck_consumption: FloatValue,
    ) -> FracResult<FloatValue> {
        WaterTransport::from_parameters(WaterTransportParameters {
            water_per_stage,
            water_load,
            dist_to_water,
            truck_consumption,
        })
        .emissions(self)
    }

    /// Emissions from trucking the prime movers' diesel (kg CO2e)
    pub fn fuel_transport(
        &self,
        fuel_load: FloatValue,
        dist_to_fuel: FloatValue,
        truck_consumption: FloatValue,
    ) -> FracResult<FloatValue> {
        FuelTransport::from_parameters(FuelTransportParameters {
            fuel_load,
            dist_to_fuel,
            truck_consumption,
        })
        .emissions(self)
    }

    /// Mobilisation and demobilisation emissions (kg CO2e)
    pub fn mob_demob(
        &self,
        mob_distance: FloatValue,
        truck_consumption: FloatValue,
    ) -> FracResult<FloatValue> {
        MobDemob::from_parameters(MobDemobParameters {
            mob_distance,
            truck_consumption,
        })
        .emissions(self)
    }

    /// Land disturbance emissions allocated to one well (kg CO2e)
    pub fn land(&self) -> FloatValue {
        LandDisturbance::new().calculate()
    }

    /// Scope 3 emissions of sand mining and delivery (kg CO2e)
    pub fn sand_mining(
        &self,
        prop_per_stage: FloatValue,
        sand_footprint: FloatValue,
    ) -> FracResult<FloatValue> {
        SandMining::from_parameters(SandMiningParameters {
            prop_per_stage,
            sand_footprint,
        })
        .emissions(self)
    }

    pub fn people(&self) -> FloatValue {
        People::new().calculate()
    }

    pub fn auxiliary(&self) -> FloatValue {
        Auxiliary::new().calculate()
    }
}
