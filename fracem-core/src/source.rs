//! The emission source trait and the categories it reports under

use crate::errors::FracResult;
use crate::job::JobConfiguration;
use crate::FloatValue;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Emission categories of a frac job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmissionCategory {
    PrimeMover,
    SandTransport,
    WaterTransport,
    FuelTransport,
    MobDemob,
    Land,
    SandMining,
    People,
    Auxiliary,
}

impl EmissionCategory {
    pub fn name(&self) -> &'static str {
        match self {
            EmissionCategory::PrimeMover => "prime_mover",
            EmissionCategory::SandTransport => "sand_transport",
            EmissionCategory::WaterTransport => "water_transport",
            EmissionCategory::FuelTransport => "fuel_transport",
            EmissionCategory::MobDemob => "mob_demob",
            EmissionCategory::Land => "land",
            EmissionCategory::SandMining => "sand_mining",
            EmissionCategory::People => "people",
            EmissionCategory::Auxiliary => "auxiliary",
        }
    }
}

impl fmt::Display for EmissionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A source of CO2e for a frac job.
///
/// Implementations hold only their category-specific parameters. Evaluation
/// never mutates the source or the job, so sources can be evaluated in any
/// order or in parallel.
#[typetag::serde(tag = "type")]
pub trait EmissionSource: Debug + Send + Sync {
    fn category(&self) -> EmissionCategory;

    /// CO2e emitted by this source over the whole job
    /// unit: kg
    fn emissions(&self, job: &JobConfiguration) -> FracResult<FloatValue>;
}
