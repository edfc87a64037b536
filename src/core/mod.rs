// src/core/mod.rs
//! Service configuration

pub mod config_manager;

pub use config_manager::{ConfigManager, DelayConfig};
