// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The chassis resource: physical enclosure inventory and power control.
//!
//! A [`Chassis`] is a snapshot of one chassis document with its
//! attributes projected into typed accessors, plus the reset action
//! discovered from the document's `Actions` object. [`ChassisCollection`]
//! is the container resource listing chassis by path.

use std::collections::BTreeSet;
use std::sync::Arc;

use redfish_types::chassis::ChassisType;
use redfish_types::chassis::IndicatorLed;
use redfish_types::chassis::IntrusionSensor;
use redfish_types::chassis::IntrusionSensorReArm;
use redfish_types::power::PowerState;
use redfish_types::power::ResetType;
use serde_json::json;
use serde_json::Value;
use slog::info;
use slog::warn;
use slog::Logger;

use crate::common::action_fields;
use crate::common::Status;
use crate::common::STATUS_FIELDS;
use crate::connector::Connector;
use crate::resource::ResourceBase;
use crate::schema::FieldDef;
use crate::schema::FieldKind;
use crate::schema::Resolved;
use crate::Error;

/// Key of the chassis reset action within a document's `Actions` object.
pub const RESET_ACTION: &str = "#Chassis.Reset";

/// Annotation advertising which reset types an action accepts.
const ALLOWED_RESET_VALUES: &str = "ResetType@Redfish.AllowableValues";

const RESET_ACTION_FIELDS: [FieldDef; 2] =
    action_fields(&[ALLOWED_RESET_VALUES]);

const ACTIONS_FIELDS: &[FieldDef] = &[FieldDef {
    name: "reset",
    path: &[RESET_ACTION],
    required: false,
    kind: FieldKind::Composite(&RESET_ACTION_FIELDS),
}];

const PHYSICAL_SECURITY_FIELDS: &[FieldDef] = &[
    FieldDef {
        name: "intrusion_sensor_number",
        path: &["IntrusionSensorNumber"],
        required: false,
        kind: FieldKind::Scalar,
    },
    FieldDef {
        name: "intrusion_sensor",
        path: &["IntrusionSensor"],
        required: false,
        kind: FieldKind::Mapped(&IntrusionSensor::MAP),
    },
    FieldDef {
        name: "intrusion_sensor_re_arm",
        path: &["IntrusionSensorReArm"],
        required: false,
        kind: FieldKind::Mapped(&IntrusionSensorReArm::MAP),
    },
];

const CHASSIS_FIELDS: &[FieldDef] = &[
    FieldDef {
        name: "identity",
        path: &["Id"],
        required: true,
        kind: FieldKind::Scalar,
    },
    FieldDef {
        name: "name",
        path: &["Name"],
        required: true,
        kind: FieldKind::Scalar,
    },
    FieldDef {
        name: "chassis_type",
        path: &["ChassisType"],
        required: true,
        kind: FieldKind::Mapped(&ChassisType::MAP),
    },
    FieldDef {
        name: "description",
        path: &["Description"],
        required: false,
        kind: FieldKind::Scalar,
    },
    FieldDef {
        name: "asset_tag",
        path: &["AssetTag"],
        required: false,
        kind: FieldKind::Scalar,
    },
    FieldDef {
        name: "manufacturer",
        path: &["Manufacturer"],
        required: false,
        kind: FieldKind::Scalar,
    },
    FieldDef {
        name: "model",
        path: &["Model"],
        required: false,
        kind: FieldKind::Scalar,
    },
    FieldDef {
        name: "part_number",
        path: &["PartNumber"],
        required: false,
        kind: FieldKind::Scalar,
    },
    FieldDef {
        name: "serial_number",
        path: &["SerialNumber"],
        required: false,
        kind: FieldKind::Scalar,
    },
    FieldDef {
        name: "sku",
        path: &["SKU"],
        required: false,
        kind: FieldKind::Scalar,
    },
    FieldDef {
        name: "uuid",
        path: &["UUID"],
        required: false,
        kind: FieldKind::Scalar,
    },
    FieldDef {
        name: "depth_mm",
        path: &["DepthMm"],
        required: false,
        kind: FieldKind::Scalar,
    },
    FieldDef {
        name: "height_mm",
        path: &["HeightMm"],
        required: false,
        kind: FieldKind::Scalar,
    },
    FieldDef {
        name: "width_mm",
        path: &["WidthMm"],
        required: false,
        kind: FieldKind::Scalar,
    },
    FieldDef {
        name: "weight_kg",
        path: &["WeightKg"],
        required: false,
        kind: FieldKind::Scalar,
    },
    FieldDef {
        name: "indicator_led",
        path: &["IndicatorLED"],
        required: false,
        kind: FieldKind::Mapped(&IndicatorLed::MAP),
    },
    FieldDef {
        name: "power_state",
        path: &["PowerState"],
        required: false,
        kind: FieldKind::Mapped(&PowerState::MAP),
    },
    FieldDef {
        name: "status",
        path: &["Status"],
        required: false,
        kind: FieldKind::Composite(STATUS_FIELDS),
    },
    FieldDef {
        name: "physical_security",
        path: &["PhysicalSecurity"],
        required: false,
        kind: FieldKind::Composite(PHYSICAL_SECURITY_FIELDS),
    },
    FieldDef {
        name: "actions",
        path: &["Actions"],
        required: false,
        kind: FieldKind::Composite(ACTIONS_FIELDS),
    },
];

/// The chassis `PhysicalSecurity` object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhysicalSecurity {
    pub intrusion_sensor_number: Option<u64>,
    pub intrusion_sensor: Option<IntrusionSensor>,
    pub intrusion_sensor_re_arm: Option<IntrusionSensorReArm>,
}

impl PhysicalSecurity {
    fn from_resolved(resolved: &Resolved) -> Self {
        Self {
            intrusion_sensor_number: resolved.u64("intrusion_sensor_number"),
            intrusion_sensor: resolved.mapped_as(
                "intrusion_sensor",
                IntrusionSensor::from_wire,
                IntrusionSensor::Unknown,
            ),
            intrusion_sensor_re_arm: resolved.mapped_as(
                "intrusion_sensor_re_arm",
                IntrusionSensorReArm::from_wire,
                IntrusionSensorReArm::Unknown,
            ),
        }
    }
}

/// The reset action as discovered in a chassis document.
#[derive(Clone, Debug, PartialEq)]
struct ResetAction {
    target: String,
    /// Wire strings from the allowable-values annotation. `None` means
    /// the annotation was absent; `Some` but empty means it was present
    /// and unusable (empty, not an array, or no string entries).
    allowed_values: Option<Vec<String>>,
}

impl ResetAction {
    fn from_resolved(resolved: &Resolved) -> Self {
        let allowed_values = resolved.scalar("allowed_values").map(|raw| {
            raw.as_array()
                .map(|values| {
                    values
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default()
        });
        Self {
            target: resolved
                .text("target")
                .expect("required attribute target"),
            allowed_values,
        }
    }
}

#[derive(Clone, Debug)]
struct ChassisAttrs {
    identity: String,
    name: String,
    chassis_type: ChassisType,
    description: Option<String>,
    asset_tag: Option<String>,
    manufacturer: Option<String>,
    model: Option<String>,
    part_number: Option<String>,
    serial_number: Option<String>,
    sku: Option<String>,
    uuid: Option<String>,
    depth_mm: Option<f64>,
    height_mm: Option<f64>,
    width_mm: Option<f64>,
    weight_kg: Option<f64>,
    indicator_led: Option<IndicatorLed>,
    power_state: Option<PowerState>,
    status: Option<Status>,
    physical_security: Option<PhysicalSecurity>,
    reset_action: Option<ResetAction>,
}

impl ChassisAttrs {
    fn from_resolved(resolved: &Resolved) -> Self {
        Self {
            identity: resolved
                .text("identity")
                .expect("required attribute Id"),
            name: resolved.text("name").expect("required attribute Name"),
            chassis_type: resolved
                .mapped_as(
                    "chassis_type",
                    ChassisType::from_wire,
                    ChassisType::Unknown,
                )
                .expect("required attribute ChassisType"),
            description: resolved.text("description"),
            asset_tag: resolved.text("asset_tag"),
            manufacturer: resolved.text("manufacturer"),
            model: resolved.text("model"),
            part_number: resolved.text("part_number"),
            serial_number: resolved.text("serial_number"),
            sku: resolved.text("sku"),
            uuid: resolved.text("uuid"),
            depth_mm: resolved.f64("depth_mm"),
            height_mm: resolved.f64("height_mm"),
            width_mm: resolved.f64("width_mm"),
            weight_kg: resolved.f64("weight_kg"),
            indicator_led: resolved.mapped_as(
                "indicator_led",
                IndicatorLed::from_wire,
                IndicatorLed::Unknown,
            ),
            power_state: resolved.mapped_as(
                "power_state",
                PowerState::from_wire,
                PowerState::Unknown,
            ),
            status: resolved.composite("status").map(Status::from_resolved),
            physical_security: resolved
                .composite("physical_security")
                .map(PhysicalSecurity::from_resolved),
            reset_action: resolved
                .composite("actions")
                .and_then(|actions| actions.composite("reset"))
                .map(ResetAction::from_resolved),
        }
    }
}

/// A chassis resource.
pub struct Chassis {
    base: ResourceBase,
    attrs: ChassisAttrs,
}

impl Chassis {
    /// Fetch the chassis document at `path` and bind its attributes.
    pub async fn load(
        connector: Arc<dyn Connector>,
        path: String,
        log: &Logger,
    ) -> Result<Self, Error> {
        Self::load_with_version(connector, path, None, log).await
    }

    /// Like [`Chassis::load`], recording the protocol version of the
    /// service root the caller reached this chassis through.
    pub(crate) async fn load_with_version(
        connector: Arc<dyn Connector>,
        path: String,
        redfish_version: Option<String>,
        log: &Logger,
    ) -> Result<Self, Error> {
        let base =
            ResourceBase::load(connector, path, redfish_version, log).await?;
        let resolved = base.resolve(CHASSIS_FIELDS)?;
        let attrs = ChassisAttrs::from_resolved(&resolved);
        Ok(Self { base, attrs })
    }

    /// Refetch the document and replace every attribute from the new
    /// copy. If the fetch or resolution fails, the previously loaded
    /// state is untouched.
    pub async fn refresh(&mut self) -> Result<(), Error> {
        let doc = self.base.fetch().await?;
        let resolved = self.base.resolve_doc(CHASSIS_FIELDS, &doc)?;
        let attrs = ChassisAttrs::from_resolved(&resolved);
        self.base.commit(doc);
        self.attrs = attrs;
        Ok(())
    }

    pub fn identity(&self) -> &str {
        &self.attrs.identity
    }

    pub fn name(&self) -> &str {
        &self.attrs.name
    }

    pub fn chassis_type(&self) -> ChassisType {
        self.attrs.chassis_type
    }

    pub fn description(&self) -> Option<&str> {
        self.attrs.description.as_deref()
    }

    pub fn asset_tag(&self) -> Option<&str> {
        self.attrs.asset_tag.as_deref()
    }

    pub fn manufacturer(&self) -> Option<&str> {
        self.attrs.manufacturer.as_deref()
    }

    pub fn model(&self) -> Option<&str> {
        self.attrs.model.as_deref()
    }

    pub fn part_number(&self) -> Option<&str> {
        self.attrs.part_number.as_deref()
    }

    pub fn serial_number(&self) -> Option<&str> {
        self.attrs.serial_number.as_deref()
    }

    pub fn sku(&self) -> Option<&str> {
        self.attrs.sku.as_deref()
    }

    pub fn uuid(&self) -> Option<&str> {
        self.attrs.uuid.as_deref()
    }

    pub fn depth_mm(&self) -> Option<f64> {
        self.attrs.depth_mm
    }

    pub fn height_mm(&self) -> Option<f64> {
        self.attrs.height_mm
    }

    pub fn width_mm(&self) -> Option<f64> {
        self.attrs.width_mm
    }

    pub fn weight_kg(&self) -> Option<f64> {
        self.attrs.weight_kg
    }

    pub fn indicator_led(&self) -> Option<IndicatorLed> {
        self.attrs.indicator_led
    }

    pub fn power_state(&self) -> Option<PowerState> {
        self.attrs.power_state
    }

    pub fn status(&self) -> Option<Status> {
        self.attrs.status
    }

    pub fn physical_security(&self) -> Option<PhysicalSecurity> {
        self.attrs.physical_security
    }

    /// The path this chassis was loaded from.
    pub fn path(&self) -> &str {
        self.base.path()
    }

    /// Protocol version of the service root this chassis was reached
    /// through. `None` for a chassis loaded directly by path.
    pub fn redfish_version(&self) -> Option<&str> {
        self.base.redfish_version()
    }

    /// The last fetched chassis document, verbatim.
    pub fn document(&self) -> &Value {
        self.base.document()
    }

    fn reset_action(&self) -> Result<&ResetAction, Error> {
        self.attrs.reset_action.as_ref().ok_or_else(|| {
            Error::MissingAction {
                action: RESET_ACTION,
                resource: self.base.path().to_string(),
            }
        })
    }

    /// The reset types this chassis accepts.
    ///
    /// If the action advertises no usable allowable values we assume the
    /// full set, logging a warning; some BMCs simply omit the
    /// annotation. Advertised values outside the standard set are
    /// dropped.
    pub fn allowed_reset_values(&self) -> Result<BTreeSet<ResetType>, Error> {
        let action = self.reset_action()?;
        let advertised = match &action.allowed_values {
            Some(values) if !values.is_empty() => values,
            _ => {
                warn!(
                    self.base.log(),
                    "could not determine the allowed reset values, \
                     assuming all are supported";
                    "action" => RESET_ACTION,
                );
                return Ok(ResetType::ALL.iter().copied().collect());
            }
        };
        Ok(advertised
            .iter()
            .filter_map(|value| ResetType::from_wire(value))
            .collect())
    }

    /// Reset the chassis.
    ///
    /// `reset_type` is validated against [`Chassis::allowed_reset_values`]
    /// before anything is sent; a disallowed value fails with
    /// [`Error::InvalidParameterValue`] without touching the BMC.
    pub async fn reset(&self, reset_type: ResetType) -> Result<(), Error> {
        let allowed = self.allowed_reset_values()?;
        if !allowed.contains(&reset_type) {
            return Err(Error::InvalidParameterValue {
                parameter: "ResetType",
                value: reset_type,
                allowed,
            });
        }
        let action = self.reset_action()?;
        info!(
            self.base.log(), "resetting chassis";
            "reset_type" => %reset_type,
            "target" => action.target.as_str(),
        );
        let body = json!({ "ResetType": reset_type.as_wire() });
        self.base.connector().post(&action.target, &body).await?;
        Ok(())
    }
}

const COLLECTION_FIELDS: &[FieldDef] = &[
    FieldDef {
        name: "name",
        path: &["Name"],
        required: false,
        kind: FieldKind::Scalar,
    },
    FieldDef {
        name: "members",
        path: &["Members"],
        required: false,
        kind: FieldKind::Scalar,
    },
];

fn member_paths(resolved: &Resolved) -> Vec<String> {
    resolved
        .scalar("members")
        .and_then(Value::as_array)
        .map(|members| {
            members
                .iter()
                .filter_map(|m| m.get("@odata.id").and_then(Value::as_str))
                .filter(|path| !path.is_empty())
                .map(|path| path.trim_end_matches('/').to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// The chassis collection resource.
///
/// Holds member paths, not member documents; chassis are fetched on
/// demand via [`ChassisCollection::get_member`].
pub struct ChassisCollection {
    base: ResourceBase,
    name: Option<String>,
    members: Vec<String>,
}

impl ChassisCollection {
    pub async fn load(
        connector: Arc<dyn Connector>,
        path: String,
        log: &Logger,
    ) -> Result<Self, Error> {
        Self::load_with_version(connector, path, None, log).await
    }

    pub(crate) async fn load_with_version(
        connector: Arc<dyn Connector>,
        path: String,
        redfish_version: Option<String>,
        log: &Logger,
    ) -> Result<Self, Error> {
        let base =
            ResourceBase::load(connector, path, redfish_version, log).await?;
        let resolved = base.resolve(COLLECTION_FIELDS)?;
        let name = resolved.text("name");
        let members = member_paths(&resolved);
        Ok(Self { base, name, members })
    }

    pub async fn refresh(&mut self) -> Result<(), Error> {
        let doc = self.base.fetch().await?;
        let resolved = self.base.resolve_doc(COLLECTION_FIELDS, &doc)?;
        self.name = resolved.text("name");
        self.members = member_paths(&resolved);
        self.base.commit(doc);
        Ok(())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Member paths in document order, trailing slashes trimmed. Members
    /// without an `@odata.id` are skipped.
    pub fn members_identities(&self) -> &[String] {
        &self.members
    }

    /// Fetch one member. `path` is an entry of
    /// [`ChassisCollection::members_identities`]. The member inherits
    /// this collection's Redfish protocol version.
    pub async fn get_member(&self, path: &str) -> Result<Chassis, Error> {
        Chassis::load_with_version(
            self.base.connector().clone(),
            path.to_string(),
            self.base.redfish_version().map(str::to_string),
            self.base.log(),
        )
        .await
    }

    /// Fetch every member, in order.
    pub async fn get_members(&self) -> Result<Vec<Chassis>, Error> {
        let mut members = Vec::with_capacity(self.members.len());
        for path in &self.members {
            members.push(self.get_member(path).await?);
        }
        Ok(members)
    }

    pub fn path(&self) -> &str {
        self.base.path()
    }

    /// Protocol version of the service root this collection was reached
    /// through. `None` for a collection loaded directly by path.
    pub fn redfish_version(&self) -> Option<&str> {
        self.base.redfish_version()
    }

    pub fn document(&self) -> &Value {
        self.base.document()
    }
}
