// Grid module - spot state and value snapshots for the parking surface

pub mod spot;

pub use spot::{SpotState, SpotView};

// Re-export common types used alongside the grid
pub use crate::config::GarageConfig;
