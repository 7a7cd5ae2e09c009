//! Configuration
//!
//! Deserializable defaults for the announcer and the widgets' navigators.
//! Every field is optional in the source document.

use serde::{Deserialize, Deserializer};

use crate::{ActivationMode, AnnouncerConfig, Orientation, RovingConfig, WrapPolicy};

/// Engine-wide accessibility settings
///
/// A navigator section only overrides the fields it names; the rest keep
/// that navigator's own defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct A11yConfig {
    pub announcer: AnnouncerConfig,
    #[serde(deserialize_with = "tab_list")]
    pub tabs: RovingConfig,
    #[serde(deserialize_with = "table_rows")]
    pub table_rows: RovingConfig,
    #[serde(deserialize_with = "table_columns")]
    pub table_columns: RovingConfig,
}

/// Navigator section as written in the source document
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RovingOverrides {
    orientation: Option<Orientation>,
    wrap: Option<WrapPolicy>,
    activation: Option<ActivationMode>,
}

impl RovingOverrides {
    fn apply(self, base: RovingConfig) -> RovingConfig {
        RovingConfig {
            orientation: self.orientation.unwrap_or(base.orientation),
            wrap: self.wrap.unwrap_or(base.wrap),
            activation: self.activation.unwrap_or(base.activation),
        }
    }
}

fn tab_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<RovingConfig, D::Error> {
    RovingOverrides::deserialize(deserializer).map(|o| o.apply(RovingConfig::tab_list()))
}

fn table_rows<'de, D: Deserializer<'de>>(deserializer: D) -> Result<RovingConfig, D::Error> {
    RovingOverrides::deserialize(deserializer).map(|o| o.apply(RovingConfig::table_rows()))
}

fn table_columns<'de, D: Deserializer<'de>>(deserializer: D) -> Result<RovingConfig, D::Error> {
    RovingOverrides::deserialize(deserializer).map(|o| o.apply(RovingConfig::table_columns()))
}

impl Default for A11yConfig {
    fn default() -> Self {
        Self {
            announcer: AnnouncerConfig::default(),
            tabs: RovingConfig::tab_list(),
            table_rows: RovingConfig::table_rows(),
            table_columns: RovingConfig::table_columns(),
        }
    }
}
