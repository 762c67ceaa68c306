//! Configuration module
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - Optional user settings file
//! - Logging setup

pub mod logging;
pub mod paths;
pub mod settings;

pub use paths::ConfigPaths;
pub use settings::Settings;
