//! Config and descriptor file loading

pub mod builder;
pub mod config;
pub mod descriptors;
pub mod error;

#[cfg(test)]
pub mod tests;

pub use builder::{build_index, LoadSummary};
pub use config::{Config, CONFIG_FILE};
pub use descriptors::{read_descriptors, write_descriptors};
pub use error::LoadError;
