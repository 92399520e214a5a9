// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Interfaces for parsing configuration files and working with a
//! simulated BMC configuration

use camino::Utf8Path;
use camino::Utf8PathBuf;
use dropshot::ConfigDropshot;
use dropshot::ConfigLogging;
use redfish_types::power::PowerState;
use serde::Deserialize;
use serde::Serialize;
use slog_error_chain::SlogInlineError;
use thiserror::Error;
use uuid::Uuid;

/// Configuration for a bmc-sim server
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Config {
    /// Attributes served in the service root document.
    pub service: ServiceConfig,
    /// Chassis to simulate.
    pub chassis: Vec<ChassisConfig>,
    /// Configuration for the dropshot server.
    #[serde(default)]
    pub dropshot: ConfigDropshot,
    /// Server-wide logging configuration.
    pub log: ConfigLogging,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ServiceConfig {
    pub name: String,
    pub uuid: Uuid,
    pub redfish_version: String,
}

/// Configuration of one simulated chassis.
///
/// `chassis_type`, `indicator_led`, and the `status` members are plain
/// strings rather than enumerations so a config can serve values outside
/// the schema, the way misbehaving BMCs do.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ChassisConfig {
    pub identity: String,
    pub name: String,
    pub chassis_type: String,
    #[serde(default)]
    pub asset_tag: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    /// Power state at startup; resets move it from here.
    pub power_state: PowerState,
    #[serde(default)]
    pub indicator_led: Option<String>,
    #[serde(default)]
    pub status: Option<StatusConfig>,
    /// Serve the chassis document without an `Actions` object.
    #[serde(default)]
    pub omit_actions: bool,
    /// Reset types to advertise in the allowable-values annotation.
    /// `None` omits the annotation; an empty list advertises nothing.
    /// Only advertised values are accepted when this is set.
    #[serde(default)]
    pub allowed_reset_values: Option<Vec<String>>,
    /// Top-level keys stripped from the document before serving, for
    /// simulating BMCs that violate the schema.
    #[serde(default)]
    pub omit: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct StatusConfig {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub health: Option<String>,
    #[serde(default)]
    pub health_rollup: Option<String>,
}

impl Config {
    /// Load a `Config` from the given TOML file
    pub fn from_file(path: &Utf8Path) -> Result<Self, LoadError> {
        let file_contents = std::fs::read_to_string(path)
            .map_err(|err| LoadError::Io { path: path.into(), err })?;
        let config_parsed: Config = toml::from_str(&file_contents)
            .map_err(|err| LoadError::Parse { path: path.into(), err })?;
        Ok(config_parsed)
    }
}

#[derive(Debug, Error, SlogInlineError)]
pub enum LoadError {
    #[error("error reading \"{path}\": {err}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        err: std::io::Error,
    },
    #[error("error parsing \"{path}\": {err}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        err: toml::de::Error,
    },
}
