//! Emission category calculators
//!
//! One component per category. Each holds its category-specific parameters and
//! is evaluated against a [`JobConfiguration`](crate::job::JobConfiguration)
//! through the [`EmissionSource`](crate::source::EmissionSource) trait.

mod land;
mod mob_demob;
mod placeholders;
mod prime_mover;
mod sand_mining;
mod transport;

pub use land::LandDisturbance;
pub use mob_demob::MobDemob;
pub use placeholders::{Auxiliary, People};
pub use prime_mover::PrimeMover;
pub use sand_mining::SandMining;
pub use transport::{FuelTransport, SandTransport, WaterTransport};
