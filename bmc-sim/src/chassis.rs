// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State and document rendering for one simulated chassis.

use redfish_types::power::PowerState;
use redfish_types::power::ResetType;
use serde_json::json;
use serde_json::Map;
use serde_json::Value;

use crate::config::ChassisConfig;

pub(crate) struct SimChassis {
    config: ChassisConfig,
    power_state: PowerState,
}

impl SimChassis {
    pub(crate) fn new(config: ChassisConfig) -> Self {
        let power_state = config.power_state;
        Self { config, power_state }
    }

    pub(crate) fn identity(&self) -> &str {
        &self.config.identity
    }

    pub(crate) fn power_state(&self) -> PowerState {
        self.power_state
    }

    /// Whether this chassis accepts `reset_type`, per its configured
    /// advertisement. With no advertisement configured, all types are
    /// accepted.
    pub(crate) fn accepts(&self, reset_type: ResetType) -> bool {
        match &self.config.allowed_reset_values {
            None => true,
            Some(values) => {
                values.iter().any(|v| v == reset_type.as_wire())
            }
        }
    }

    pub(crate) fn apply_reset(&mut self, reset_type: ResetType) {
        self.power_state = match reset_type {
            ResetType::On
            | ResetType::ForceOn
            | ResetType::GracefulRestart
            | ResetType::ForceRestart => PowerState::On,
            ResetType::ForceOff | ResetType::GracefulShutdown => {
                PowerState::Off
            }
            ResetType::PushPowerButton => match self.power_state {
                PowerState::On => PowerState::Off,
                _ => PowerState::On,
            },
            // An NMI does not change the power state.
            ResetType::Nmi => self.power_state,
        };
    }

    /// Render the chassis document as served over HTTP.
    pub(crate) fn document(&self, collection_path: &str) -> Value {
        let path = format!("{collection_path}/{}", self.config.identity);
        let mut doc = json!({
            "@odata.id": path,
            "@odata.type": "#Chassis.v1_10_0.Chassis",
            "Id": self.config.identity,
            "Name": self.config.name,
            "ChassisType": self.config.chassis_type,
            "PowerState": self.power_state,
        });
        let obj = doc.as_object_mut().expect("chassis document is an object");

        let optional = [
            ("AssetTag", &self.config.asset_tag),
            ("Manufacturer", &self.config.manufacturer),
            ("Model", &self.config.model),
            ("SerialNumber", &self.config.serial_number),
            ("IndicatorLED", &self.config.indicator_led),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                obj.insert(key.to_string(), json!(value));
            }
        }

        if let Some(status) = &self.config.status {
            let members = [
                ("State", &status.state),
                ("Health", &status.health),
                ("HealthRollup", &status.health_rollup),
            ];
            let mut rendered = Map::new();
            for (key, value) in members {
                if let Some(value) = value {
                    rendered.insert(key.to_string(), json!(value));
                }
            }
            obj.insert("Status".to_string(), Value::Object(rendered));
        }

        if !self.config.omit_actions {
            let mut action = Map::new();
            action.insert(
                "target".to_string(),
                json!(format!("{path}/Actions/Chassis.Reset")),
            );
            if let Some(allowed) = &self.config.allowed_reset_values {
                action.insert(
                    "ResetType@Redfish.AllowableValues".to_string(),
                    json!(allowed),
                );
            }
            obj.insert(
                "Actions".to_string(),
                json!({ "#Chassis.Reset": action }),
            );
        }

        for key in &self.config.omit {
            obj.remove(key);
        }
        doc
    }
}
