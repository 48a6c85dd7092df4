//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - Backing file path resolution
//! - Runtime settings for the interactive session

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
