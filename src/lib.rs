//! Meadow Sim - turn-based bee and plant visitation simulation

pub mod core;
pub mod registry;
pub mod sim;
