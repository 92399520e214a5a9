// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Chassis-specific Redfish enumerations.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::wire::ValueMap;

/// Physical form factor of a chassis.
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
pub enum ChassisType {
    Rack,
    Blade,
    Enclosure,
    StandAlone,
    RackMount,
    Card,
    Cartridge,
    Row,
    Pod,
    Expansion,
    Sidecar,
    Zone,
    Sled,
    Shelf,
    Drawer,
    Module,
    Component,
    #[serde(rename = "IPBasedDrive")]
    IpBasedDrive,
    RackGroup,
    StorageEnclosure,
    Other,
    /// Sentinel for wire values this crate does not recognize.
    Unknown,
}

impl ChassisType {
    /// Interpreter handle for this enumeration's wire table.
    pub const MAP: ValueMap =
        ValueMap { name: "ChassisType", canonicalize: Self::canonical };

    /// Every chassis type the schema defines. Does not include the `Unknown`
    /// sentinel, which has no wire form.
    pub const ALL: &'static [Self] = &[
        Self::Rack,
        Self::Blade,
        Self::Enclosure,
        Self::StandAlone,
        Self::RackMount,
        Self::Card,
        Self::Cartridge,
        Self::Row,
        Self::Pod,
        Self::Expansion,
        Self::Sidecar,
        Self::Zone,
        Self::Sled,
        Self::Shelf,
        Self::Drawer,
        Self::Module,
        Self::Component,
        Self::IpBasedDrive,
        Self::RackGroup,
        Self::StorageEnclosure,
        Self::Other,
    ];

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "Rack" => Some(Self::Rack),
            "Blade" => Some(Self::Blade),
            "Enclosure" => Some(Self::Enclosure),
            "StandAlone" => Some(Self::StandAlone),
            "RackMount" => Some(Self::RackMount),
            "Card" => Some(Self::Card),
            "Cartridge" => Some(Self::Cartridge),
            "Row" => Some(Self::Row),
            "Pod" => Some(Self::Pod),
            "Expansion" => Some(Self::Expansion),
            "Sidecar" => Some(Self::Sidecar),
            "Zone" => Some(Self::Zone),
            "Sled" => Some(Self::Sled),
            "Shelf" => Some(Self::Shelf),
            "Drawer" => Some(Self::Drawer),
            "Module" => Some(Self::Module),
            "Component" => Some(Self::Component),
            "IPBasedDrive" => Some(Self::IpBasedDrive),
            "RackGroup" => Some(Self::RackGroup),
            "StorageEnclosure" => Some(Self::StorageEnclosure),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> Option<&'static str> {
        match self {
            Self::Rack => Some("Rack"),
            Self::Blade => Some("Blade"),
            Self::Enclosure => Some("Enclosure"),
            Self::StandAlone => Some("StandAlone"),
            Self::RackMount => Some("RackMount"),
            Self::Card => Some("Card"),
            Self::Cartridge => Some("Cartridge"),
            Self::Row => Some("Row"),
            Self::Pod => Some("Pod"),
            Self::Expansion => Some("Expansion"),
            Self::Sidecar => Some("Sidecar"),
            Self::Zone => Some("Zone"),
            Self::Sled => Some("Sled"),
            Self::Shelf => Some("Shelf"),
            Self::Drawer => Some("Drawer"),
            Self::Module => Some("Module"),
            Self::Component => Some("Component"),
            Self::IpBasedDrive => Some("IPBasedDrive"),
            Self::RackGroup => Some("RackGroup"),
            Self::StorageEnclosure => Some("StorageEnclosure"),
            Self::Other => Some("Other"),
            Self::Unknown => None,
        }
    }

    fn canonical(value: &str) -> Option<&'static str> {
        Self::from_wire(value).and_then(|v| v.as_wire())
    }
}

impl fmt::Display for ChassisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire().unwrap_or("Unknown"))
    }
}

/// State of a chassis indicator LED.
///
/// `Unknown` is a genuine (if deprecated) wire value in the chassis schema,
/// so unlike the other enumerations here it round-trips; it doubles as the
/// sentinel for unrecognized values.
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
pub enum IndicatorLed {
    /// The LED is lit.
    Lit,
    /// The LED is blinking.
    Blinking,
    /// The LED is off.
    Off,
    /// The LED state cannot be determined.
    Unknown,
}

impl IndicatorLed {
    /// Interpreter handle for this enumeration's wire table.
    pub const MAP: ValueMap =
        ValueMap { name: "IndicatorLED", canonicalize: Self::canonical };

    /// Every LED state the schema defines, `Unknown` included.
    pub const ALL: &'static [Self] =
        &[Self::Lit, Self::Blinking, Self::Off, Self::Unknown];

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "Lit" => Some(Self::Lit),
            "Blinking" => Some(Self::Blinking),
            "Off" => Some(Self::Off),
            "Unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Lit => "Lit",
            Self::Blinking => "Blinking",
            Self::Off => "Off",
            Self::Unknown => "Unknown",
        }
    }

    fn canonical(value: &str) -> Option<&'static str> {
        Self::from_wire(value).map(|v| v.as_wire())
    }
}

impl fmt::Display for IndicatorLed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// Reading of a chassis physical intrusion sensor.
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
pub enum IntrusionSensor {
    /// No intrusion detected.
    Normal,
    /// The enclosure was opened while powered, or a drive was removed.
    HardwareIntrusion,
    /// Tampering detected by the sensor re-arm logic.
    TamperingDetected,
    /// Sentinel for wire values this crate does not recognize.
    Unknown,
}

impl IntrusionSensor {
    /// Interpreter handle for this enumeration's wire table.
    pub const MAP: ValueMap =
        ValueMap { name: "IntrusionSensor", canonicalize: Self::canonical };

    /// Every sensor reading the schema defines. Does not include the
    /// `Unknown` sentinel, which has no wire form.
    pub const ALL: &'static [Self] =
        &[Self::Normal, Self::HardwareIntrusion, Self::TamperingDetected];

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "Normal" => Some(Self::Normal),
            "HardwareIntrusion" => Some(Self::HardwareIntrusion),
            "TamperingDetected" => Some(Self::TamperingDetected),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> Option<&'static str> {
        match self {
            Self::Normal => Some("Normal"),
            Self::HardwareIntrusion => Some("HardwareIntrusion"),
            Self::TamperingDetected => Some("TamperingDetected"),
            Self::Unknown => None,
        }
    }

    fn canonical(value: &str) -> Option<&'static str> {
        Self::from_wire(value).and_then(|v| v.as_wire())
    }
}

impl fmt::Display for IntrusionSensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire().unwrap_or("Unknown"))
    }
}

/// How a chassis intrusion sensor re-arms itself after triggering.
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
pub enum IntrusionSensorReArm {
    /// A manual re-arm is required to restore the normal state.
    Manual,
    /// The sensor restores the normal state automatically.
    Automatic,
    /// Sentinel for wire values this crate does not recognize.
    Unknown,
}

impl IntrusionSensorReArm {
    /// Interpreter handle for this enumeration's wire table.
    pub const MAP: ValueMap = ValueMap {
        name: "IntrusionSensorReArm",
        canonicalize: Self::canonical,
    };

    /// Every re-arm mode the schema defines. Does not include the `Unknown`
    /// sentinel, which has no wire form.
    pub const ALL: &'static [Self] = &[Self::Manual, Self::Automatic];

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "Manual" => Some(Self::Manual),
            "Automatic" => Some(Self::Automatic),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> Option<&'static str> {
        match self {
            Self::Manual => Some("Manual"),
            Self::Automatic => Some("Automatic"),
            Self::Unknown => None,
        }
    }

    fn canonical(value: &str) -> Option<&'static str> {
        Self::from_wire(value).and_then(|v| v.as_wire())
    }
}

impl fmt::Display for IntrusionSensorReArm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire().unwrap_or("Unknown"))
    }
}
