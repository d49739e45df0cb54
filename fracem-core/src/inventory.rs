//! Evaluation of several emission sources for one job
//!
//! The calculators stay independent; an inventory is only a convenience for
//! evaluating a list of them and keeping the per-category breakdown.

use crate::errors::FracResult;
use crate::job::JobConfiguration;
use crate::source::{EmissionCategory, EmissionSource};
use crate::FloatValue;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An ordered list of emission sources
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmissionsInventory {
    sources: Vec<Box<dyn EmissionSource>>,
}

impl EmissionsInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: impl EmissionSource + 'static) -> Self {
        self.push(source);
        self
    }

    pub fn push(&mut self, source: impl EmissionSource + 'static) {
        self.sources.push(Box::new(source));
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn sources(&self) -> &[Box<dyn EmissionSource>] {
        &self.sources
    }

    /// Evaluate every source in order against `job`.
    ///
    /// Stops at the first source that rejects its parameters.
    pub fn evaluate(&self, job: &JobConfiguration) -> FracResult<EmissionsReport> {
        let mut entries = Vec::with_capacity(self.sources.len());
        for source in &self.sources {
            let category = source.category();
            let value = source.emissions(job)?;
            debug!("{}: {:.2} kg CO2e", category, value);
            entries.push((category, value));
        }
        Ok(EmissionsReport { entries })
    }
}

/// CO2e per evaluated source, in evaluation order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionsReport {
    entries: Vec<(EmissionCategory, FloatValue)>,
}

impl EmissionsReport {
    pub fn entries(&self) -> &[(EmissionCategory, FloatValue)] {
        &self.entries
    }

    /// Emissions for one category, summing repeated sources.
    ///
    /// Returns `None` if no source of that category was evaluated.
    pub fn get(&self, category: EmissionCategory) -> Option<FloatValue> {
        self.entries
            .iter()
            .filter(|(c, _)| *c == category)
            .map(|(_, value)| *value)
            .reduce(|a, b| a + b)
    }

    /// Per-category totals
    pub fn by_category(&self) -> BTreeMap<EmissionCategory, FloatValue> {
        let mut totals = BTreeMap::new();
        for (category, value) in &self.entries {
            *totals.entry(*category).or_insert(0.0) += value;
        }
        totals
    }

    /// Job total
    /// unit: kg CO2e
    pub fn total(&self) -> FloatValue {
        self.entries.iter().map(|(_, value)| value).sum()
    }
}
