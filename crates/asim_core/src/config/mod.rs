//! Configuration management for the attack simulation demo.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Defaults filled in for missing keys on load
//!
//! Only ambient concerns are configurable (diagnostic log level, panel
//! presentation). The attack script itself is fixed.
//!
//! # Example
//!
//! ```no_run
//! use asim_core::config::ConfigManager;
//!
//! let mut config = ConfigManager::new(".config/attack_sim.toml");
//! config.load_or_create().unwrap();
//!
//! println!("Panel title: {}", config.settings().panel.title);
//! ```

mod manager;
mod settings;

pub use manager::{default_config_path, ConfigError, ConfigManager, ConfigResult};
pub use settings::{ConfigSection, LoggingSettings, PanelSettings, Settings};
