//! Placeholder categories
//!
//! People and auxiliary equipment have no model yet and report fixed values.

use crate::constants::{AUXILIARY_CO2E_KG, PEOPLE_CO2E_KG};
use crate::errors::FracResult;
use crate::job::JobConfiguration;
use crate::source::{EmissionCategory, EmissionSource};
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Emissions attributed to onsite workers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct People {}

impl People {
    pub fn new() -> Self {
        Self {}
    }

    pub fn calculate(&self) -> FloatValue {
        PEOPLE_CO2E_KG
    }
}

#[typetag::serde]
impl EmissionSource for People {
    fn category(&self) -> EmissionCategory {
        EmissionCategory::People
    }

    fn emissions(&self, _job: &JobConfiguration) -> FracResult<FloatValue> {
        Ok(self.calculate())
    }
}

/// Emissions attributed to auxiliary equipment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Auxiliary {}

impl Auxiliary {
    pub fn new() -> Self {
        Self {}
    }

    pub fn calculate(&self) -> FloatValue {
        AUXILIARY_CO2E_KG
    }
}

#[typetag::serde]
impl EmissionSource for Auxiliary {
    fn category(&self) -> EmissionCategory {
        EmissionCategory::Auxiliary
    }

    fn emissions(&self, _job: &JobConfiguration) -> FracResult<FloatValue> {
        Ok(self.calculate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_values() {
        assert_eq!(People::new().calculate(), 6000.0);
        assert_eq!(Auxiliary::new().calculate(), 25000.0);
    }
}
