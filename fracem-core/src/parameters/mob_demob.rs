//! Mobilisation / demobilisation parameters

use crate::errors::FracResult;
use crate::validation::{ensure_non_negative, ensure_positive};
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for moving the fleet between base and location
///
/// The fleet itself is fixed apart from the pump and tank trucks given in the
/// job configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MobDemobParameters {
    /// Distance from base to location
    /// unit: mile
    pub mob_distance: FloatValue,
    /// unit: mile/gal
    pub truck_consumption: FloatValue,
}

impl MobDemobParameters {
    pub(crate) fn validate(&self) -> FracResult<()> {
        ensure_non_negative("mob_distance", self.mob_distance)?;
        ensure_positive("truck_consumption", self.truck_consumption)?;
        Ok(())
    }
}
