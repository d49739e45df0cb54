//! Fixed physical constants and emission factors
//!
//! Values here apply to every estimate. Changing them changes all future
//! results, so the fuel table carries a version string that callers can record
//! alongside an estimate.

use crate::FloatValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Global warming potential of CH4 relative to CO2 (100 year horizon).
pub const GWP_CH4: FloatValue = 25.0;

/// Global warming potential of N2O relative to CO2 (100 year horizon).
pub const GWP_N2O: FloatValue = 298.0;

/// Divisor converting pressure (psi) times rate (bbl/min) into hydraulic horsepower.
pub const HYDRAULIC_HP_DIVISOR: FloatValue = 40.8;

/// Horsepower delivered by a single frac pump.
pub const HP_PER_PUMP: FloatValue = 2250.0;

/// BTU/hr per horsepower.
pub const BTU_PER_HP_HOUR: FloatValue = 2544.43;

/// Cubic metres per US gallon.
pub const CUBIC_METRES_PER_GALLON: FloatValue = 0.00378541;

/// Higher heating value of diesel (BTU/gal).
///
/// Kept for reference; prime movers burn diesel at its lower heating value.
pub const DIESEL_HHV: FloatValue = 137381.0;

/// Default pump efficiency when none is supplied.
pub const DEFAULT_PUMP_EFFICIENCY: FloatValue = 0.9;

// Fleet units that travel to every job regardless of its size.
pub const BLENDER_UNITS: u32 = 1;
pub const PCM_UNITS: u32 = 1;
pub const SILO_UNITS: u32 = 4;
pub const IRON_UNITS: u32 = 3;
pub const MISSILE_UNITS: u32 = 2;
pub const LAS_UNITS: u32 = 2;
pub const CRANE_UNITS: u32 = 1;
pub const WIRELINE_UNITS: u32 = 1;
pub const COMMAND_UNITS: u32 = 1;
pub const PICKUP_UNITS: u32 = 10;
pub const AUXILIARY_TRUCK_UNITS: u32 = 20;

/// Cumulative oil production assumed for one well (tons, Eagle Ford average).
pub const OIL_PRODUCED_TONS: FloatValue = 95_000.0;

/// Land disturbance intensity for a non-intensively drilled field (g CO2/MJ).
///
/// The lowest tier of the OPGEE methodology is always used, even for high
/// carbon environments such as forest.
pub const LAND_CO2_G_PER_MJ: FloatValue = 0.03;

/// Divisor converting tons of oil into megajoules.
pub const TONS_TO_MJ_DIVISOR: FloatValue = 0.000024;

/// Kilograms per metric ton.
pub const KG_PER_TON: FloatValue = 1000.0;

/// Placeholder emissions attributed to onsite personnel (kg CO2e).
pub const PEOPLE_CO2E_KG: FloatValue = 6000.0;

/// Placeholder emissions attributed to auxiliary equipment (kg CO2e).
pub const AUXILIARY_CO2E_KG: FloatValue = 25000.0;

/// Fuels that can power the prime movers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    Diesel,
    Lng,
    Cng,
    /// Grid electricity expressed as a fuel-gallon equivalent
    Electricity,
}

impl FuelType {
    pub const ALL: [FuelType; 4] = [
        FuelType::Diesel,
        FuelType::Lng,
        FuelType::Cng,
        FuelType::Electricity,
    ];
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FuelType::Diesel => "diesel",
            FuelType::Lng => "lng",
            FuelType::Cng => "cng",
            FuelType::Electricity => "electricity",
        };
        write!(f, "{}", name)
    }
}

/// Emission factors and energy content for one fuel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelFactors {
    /// unit: kg CO2/gal
    pub co2: FloatValue,
    /// unit: kg CO2e/gal
    pub ch4_co2e: FloatValue,
    /// unit: kg CO2e/gal
    pub n2o_co2e: FloatValue,
    /// Heating value used to convert BTU throughput into fuel volume
    /// unit: BTU/gal
    pub heating_value: FloatValue,
}

impl FuelFactors {
    /// Combined CO2e per gallon burned.
    pub fn co2e_per_gallon(&self) -> FloatValue {
        self.co2 + self.ch4_co2e + self.n2o_co2e
    }

    /// Gallons per hour needed to deliver `btu_per_hour`.
    pub fn gallons_per_hour(&self, btu_per_hour: FloatValue) -> FloatValue {
        btu_per_hour / self.heating_value
    }
}

const DIESEL: FuelFactors = FuelFactors {
    co2: 10.21,
    ch4_co2e: 0.2 / 1000.0 * GWP_CH4,
    n2o_co2e: 0.47 / 1000.0 * GWP_N2O,
    heating_value: 129306.0,
};

// N2O factor is taken from LPG and may be slightly high for LNG.
const LNG: FuelFactors = FuelFactors {
    co2: 4.5,
    ch4_co2e: 1.05 / 1000.0 * GWP_CH4,
    n2o_co2e: 0.2 / 1000.0 * GWP_N2O,
    heating_value: 84810.0,
};

const CNG: FuelFactors = FuelFactors {
    co2: 10.21,
    ch4_co2e: 0.2 / 1000.0 * GWP_CH4,
    n2o_co2e: 0.47 / 1000.0 * GWP_N2O,
    heating_value: 84810.0,
};

const ELECTRICITY: FuelFactors = FuelFactors {
    co2: 4.5,
    ch4_co2e: 1.05 / 1000.0 * GWP_CH4,
    n2o_co2e: 0.2 / 1000.0 * GWP_N2O,
    heating_value: 84810.0,
};

/// Versioned lookup from fuel type to its factors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelTable {
    pub version: &'static str,
    diesel: FuelFactors,
    lng: FuelFactors,
    cng: FuelFactors,
    electricity: FuelFactors,
}

/// The factor table used by every calculator.
pub static FUEL_TABLE: FuelTable = FuelTable {
    version: "2021.1",
    diesel: DIESEL,
    lng: LNG,
    cng: CNG,
    electricity: ELECTRICITY,
};

impl FuelTable {
    pub fn factors(&self, fuel: FuelType) -> &FuelFactors {
        match fuel {
            FuelType::Diesel => &self.diesel,
            FuelType::Lng => &self.lng,
            FuelType::Cng => &self.cng,
            FuelType::Electricity => &self.electricity,
        }
    }
}

/// Factors for the diesel trucks used for all road transport.
pub fn diesel() -> &'static FuelFactors {
    FUEL_TABLE.factors(FuelType::Diesel)
}
