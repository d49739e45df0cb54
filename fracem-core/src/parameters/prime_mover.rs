//! Prime mover parameters
//!
//! Fuel mix of the engines driving the pumps and blenders.

use crate::constants::FuelType;
use crate::errors::FracResult;
use crate::validation::{ensure_fraction, ensure_non_negative};
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Share of the prime movers' energy supplied by each fuel
///
/// Fractions are not required to sum to one. A fuel with a zero fraction
/// contributes nothing to the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelMix {
    pub diesel: FloatValue,
    #[serde(default)]
    pub cng: FloatValue,
    #[serde(default)]
    pub lng: FloatValue,
    #[serde(default)]
    pub electricity: FloatValue,
}

impl FuelMix {
    /// All energy from diesel
    pub fn diesel_only() -> Self {
        Self {
            diesel: 1.0,
            cng: 0.0,
            lng: 0.0,
            electricity: 0.0,
        }
    }

    pub fn fraction(&self, fuel: FuelType) -> FloatValue {
        match fuel {
            FuelType::Diesel => self.diesel,
            FuelType::Lng => self.lng,
            FuelType::Cng => self.cng,
            FuelType::Electricity => self.electricity,
        }
    }

    /// Sum of all fractions
    pub fn total(&self) -> FloatValue {
        FuelType::ALL.iter().map(|fuel| self.fraction(*fuel)).sum()
    }

    pub(crate) fn validate(&self) -> FracResult<()> {
        ensure_fraction("diesel_fraction", self.diesel)?;
        ensure_fraction("cng_fraction", self.cng)?;
        ensure_fraction("lng_fraction", self.lng)?;
        ensure_fraction("electricity_fraction", self.electricity)?;
        Ok(())
    }
}

impl Default for FuelMix {
    fn default() -> Self {
        Self::diesel_only()
    }
}

/// Parameters for prime mover combustion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimeMoverParameters {
    /// Time the machinery runs between stages.
    /// Validated but not part of the estimate, which scales by total stage time.
    /// unit: min
    pub operating_minutes: FloatValue,

    /// default: diesel only
    #[serde(default)]
    pub fuel_mix: FuelMix,
}

impl PrimeMoverParameters {
    pub(crate) fn validate(&self) -> FracResult<()> {
        ensure_non_negative("operating_minutes", self.operating_minutes)?;
        self.fuel_mix.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    #[test]
    fn test_default_mix_is_diesel() {
        let mix = FuelMix::default();
        assert!(is_close!(mix.fraction(FuelType::Diesel), 1.0));
        assert!(is_close!(mix.total(), 1.0));
    }

    #[test]
    fn test_missing_fractions_default_to_zero() {
        let mix: FuelMix = serde_json::from_str(r#"{"diesel": 0.4, "lng": 0.6}"#).unwrap();
        assert!(is_close!(mix.cng, 0.0));
        assert!(is_close!(mix.electricity, 0.0));
        assert!(is_close!(mix.total(), 1.0));
    }

    #[test]
    fn test_fraction_out_of_range() {
        let mix = FuelMix {
            diesel: 1.5,
            ..FuelMix::default()
        };
        assert!(mix.validate().is_err());

        let mix = FuelMix {
            cng: -0.1,
            ..FuelMix::default()
        };
        assert!(mix.validate().is_err());
    }
}
