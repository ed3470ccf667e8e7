// Configuration module
pub mod garage_config;

pub use garage_config::GarageConfig;
