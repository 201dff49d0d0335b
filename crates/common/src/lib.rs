//! Shared command line configuration for the callback generator tools.

pub mod config;

pub use config::Config;
