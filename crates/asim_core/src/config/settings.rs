//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Diagnostic logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,

    /// Terminal panel presentation.
    #[serde(default)]
    pub panel: PanelSettings,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default level when RUST_LOG is not set.
    #[serde(default)]
    pub level: LogLevel,
}

/// Presentation of the control and log panels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSettings {
    /// Page heading.
    #[serde(default = "default_title")]
    pub title: String,

    /// Clear the terminal before each redraw.
    #[serde(default = "default_true")]
    pub clear_screen: bool,

    /// Show the "no real systems are harmed" notice.
    #[serde(default = "default_true")]
    pub show_banner: bool,
}

fn default_title() -> String {
    "Cyber Attack Simulation UI".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            clear_screen: true,
            show_banner: true,
        }
    }
}

/// Names of config sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigSection {
    Logging,
    Panel,
}

impl ConfigSection {
    /// All sections, in file order.
    pub const ALL: [ConfigSection; 2] = [ConfigSection::Logging, ConfigSection::Panel];

    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Logging => "logging",
            ConfigSection::Panel => "panel",
        }
    }

    /// Comment written above the section.
    pub fn description(&self) -> &'static str {
        match self {
            ConfigSection::Logging => "Diagnostic logging (RUST_LOG overrides the level)",
            ConfigSection::Panel => "Terminal panel presentation",
        }
    }
}
