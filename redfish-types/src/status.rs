// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Enumerations for the common Redfish `Status` object carried by most
//! resources.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::wire::ValueMap;

/// Health of a resource, as reported in `Status.Health` and
/// `Status.HealthRollup`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
)]
pub enum Health {
    /// The resource is operating normally.
    #[serde(rename = "OK")]
    Ok,
    /// The resource is operating, but needs attention.
    Warning,
    /// The resource is not operating correctly.
    Critical,
    /// Sentinel for wire values this crate does not recognize.
    Unknown,
}

impl Health {
    /// Interpreter handle for this enumeration's wire table.
    pub const MAP: ValueMap =
        ValueMap { name: "Health", canonicalize: Self::canonical };

    /// Every health value the schema defines. Does not include the `Unknown`
    /// sentinel, which has no wire form.
    pub const ALL: &'static [Self] =
        &[Self::Ok, Self::Warning, Self::Critical];

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "OK" => Some(Self::Ok),
            "Warning" => Some(Self::Warning),
            "Critical" => Some(Self::Critical),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> Option<&'static str> {
        match self {
            Self::Ok => Some("OK"),
            Self::Warning => Some("Warning"),
            Self::Critical => Some("Critical"),
            Self::Unknown => None,
        }
    }

    fn canonical(value: &str) -> Option<&'static str> {
        Self::from_wire(value).and_then(|v| v.as_wire())
    }
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire().unwrap_or("Unknown"))
    }
}

/// Provisioning state of a resource, as reported in `Status.State`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
)]
pub enum State {
    /// The resource is available.
    Enabled,
    /// The resource has been made unavailable intentionally.
    Disabled,
    /// The resource is physically absent.
    Absent,
    /// Sentinel for wire values this crate does not recognize.
    Unknown,
}

impl State {
    /// Interpreter handle for this enumeration's wire table.
    pub const MAP: ValueMap =
        ValueMap { name: "State", canonicalize: Self::canonical };

    /// Every state value the schema defines. Does not include the `Unknown`
    /// sentinel, which has no wire form.
    pub const ALL: &'static [Self] =
        &[Self::Enabled, Self::Disabled, Self::Absent];

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "Enabled" => Some(Self::Enabled),
            "Disabled" => Some(Self::Disabled),
            "Absent" => Some(Self::Absent),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> Option<&'static str> {
        match self {
            Self::Enabled => Some("Enabled"),
            Self::Disabled => Some("Disabled"),
            Self::Absent => Some("Absent"),
            Self::Unknown => None,
        }
    }

    fn canonical(value: &str) -> Option<&'static str> {
        Self::from_wire(value).and_then(|v| v.as_wire())
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire().unwrap_or("Unknown"))
    }
}
