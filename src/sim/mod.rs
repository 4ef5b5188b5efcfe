//! The simulation engine: actors, the visit event, and the day-stepping driver

pub mod bee;
pub mod driver;
pub mod output;
pub mod plant;
pub mod visit;

pub use bee::Bee;
pub use driver::{DayReport, Meadow, Phase};
pub use output::SimulationOutput;
pub use plant::Plant;
pub use visit::visit;
