// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power-related Redfish enumerations.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::wire::ValueMap;

/// Reset operations a chassis may support via its `#Chassis.Reset` action.
///
/// Unlike the read-side enumerations, this one has no `Unknown` sentinel:
/// callers pick a value to send, so every variant has a wire form.
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
pub enum ResetType {
    /// Turn the unit on.
    On,
    /// Turn the unit off immediately (non-graceful).
    ForceOff,
    /// Shut down gracefully and power off.
    GracefulShutdown,
    /// Shut down gracefully and restart.
    GracefulRestart,
    /// Restart immediately (non-graceful).
    ForceRestart,
    /// Generate a diagnostic (non-maskable) interrupt.
    Nmi,
    /// Turn the unit on immediately.
    ForceOn,
    /// Simulate pressing the physical power button.
    PushPowerButton,
}

impl ResetType {
    /// Interpreter handle for this enumeration's wire table.
    pub const MAP: ValueMap =
        ValueMap { name: "ResetType", canonicalize: Self::canonical };

    /// Every reset type the schema defines, in schema order.
    pub const ALL: &'static [Self] = &[
        Self::On,
        Self::ForceOff,
        Self::GracefulShutdown,
        Self::GracefulRestart,
        Self::ForceRestart,
        Self::Nmi,
        Self::ForceOn,
        Self::PushPowerButton,
    ];

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "On" => Some(Self::On),
            "ForceOff" => Some(Self::ForceOff),
            "GracefulShutdown" => Some(Self::GracefulShutdown),
            "GracefulRestart" => Some(Self::GracefulRestart),
            "ForceRestart" => Some(Self::ForceRestart),
            "Nmi" => Some(Self::Nmi),
            "ForceOn" => Some(Self::ForceOn),
            "PushPowerButton" => Some(Self::PushPowerButton),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::On => "On",
            Self::ForceOff => "ForceOff",
            Self::GracefulShutdown => "GracefulShutdown",
            Self::GracefulRestart => "GracefulRestart",
            Self::ForceRestart => "ForceRestart",
            Self::Nmi => "Nmi",
            Self::ForceOn => "ForceOn",
            Self::PushPowerButton => "PushPowerButton",
        }
    }

    fn canonical(value: &str) -> Option<&'static str> {
        Self::from_wire(value).map(|v| v.as_wire())
    }
}

impl fmt::Display for ResetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// Observed power state of a chassis.
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
pub enum PowerState {
    /// The unit is powered on.
    On,
    /// The unit is powered off.
    Off,
    /// A transition to on is in progress.
    PoweringOn,
    /// A transition to off is in progress.
    PoweringOff,
    /// Sentinel for wire values this crate does not recognize.
    Unknown,
}

impl PowerState {
    /// Interpreter handle for this enumeration's wire table.
    pub const MAP: ValueMap =
        ValueMap { name: "PowerState", canonicalize: Self::canonical };

    /// Every power state the schema defines. Does not include the `Unknown`
    /// sentinel, which has no wire form.
    pub const ALL: &'static [Self] =
        &[Self::On, Self::Off, Self::PoweringOn, Self::PoweringOff];

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "On" => Some(Self::On),
            "Off" => Some(Self::Off),
            "PoweringOn" => Some(Self::PoweringOn),
            "PoweringOff" => Some(Self::PoweringOff),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> Option<&'static str> {
        match self {
            Self::On => Some("On"),
            Self::Off => Some("Off"),
            Self::PoweringOn => Some("PoweringOn"),
            Self::PoweringOff => Some("PoweringOff"),
            Self::Unknown => None,
        }
    }

    fn canonical(value: &str) -> Option<&'static str> {
        Self::from_wire(value).and_then(|v| v.as_wire())
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire().unwrap_or("Unknown"))
    }
}
