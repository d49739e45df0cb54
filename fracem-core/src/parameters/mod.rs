//! Emission source parameters
//!
//! Category-specific inputs for each emission source. Parameters that depend on
//! the contractor or the site have no defaults and must be supplied.

mod mob_demob;
mod prime_mover;
mod sand_mining;
mod transport;

pub use mob_demob::MobDemobParameters;
pub use prime_mover::{FuelMix, PrimeMoverParameters};
pub use sand_mining::SandMiningParameters;
pub use transport::{FuelTransportParameters, SandTransportParameters, WaterTransportParameters};
