// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The Redfish service root, the entry point to everything else.

use std::sync::Arc;

use serde_json::Value;
use slog::Logger;

use crate::chassis::ChassisCollection;
use crate::connector::Connector;
use crate::resource::ResourceBase;
use crate::schema::FieldDef;
use crate::schema::FieldKind;
use crate::schema::Resolved;
use crate::Error;

/// Where every Redfish service mounts its root document.
pub const DEFAULT_ROOT_PATH: &str = "/redfish/v1";

const SERVICE_ROOT_FIELDS: &[FieldDef] = &[
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
        name: "redfish_version",
        path: &["RedfishVersion"],
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
        name: "chassis_path",
        path: &["Chassis", "@odata.id"],
        required: false,
        kind: FieldKind::Scalar,
    },
];

#[derive(Clone, Debug)]
struct ServiceRootAttrs {
    identity: String,
    name: String,
    redfish_version: Option<String>,
    uuid: Option<String>,
    chassis_path: Option<String>,
}

impl ServiceRootAttrs {
    fn from_resolved(resolved: &Resolved) -> Self {
        Self {
            identity: resolved
                .text("identity")
                .expect("required attribute Id"),
            name: resolved.text("name").expect("required attribute Name"),
            redfish_version: resolved.text("redfish_version"),
            uuid: resolved.text("uuid"),
            chassis_path: resolved.text("chassis_path"),
        }
    }
}

/// The service root resource.
pub struct ServiceRoot {
    base: ResourceBase,
    attrs: ServiceRootAttrs,
}

impl ServiceRoot {
    /// Fetch [`DEFAULT_ROOT_PATH`] and bind its attributes.
    pub async fn load(
        connector: Arc<dyn Connector>,
        log: &Logger,
    ) -> Result<Self, Error> {
        let base = ResourceBase::load(
            connector,
            DEFAULT_ROOT_PATH.to_string(),
            None,
            log,
        )
        .await?;
        let resolved = base.resolve(SERVICE_ROOT_FIELDS)?;
        let attrs = ServiceRootAttrs::from_resolved(&resolved);
        Ok(Self { base, attrs })
    }

    /// Refetch the root document, replacing all attributes. On error the
    /// previously loaded state is untouched.
    pub async fn refresh(&mut self) -> Result<(), Error> {
        let doc = self.base.fetch().await?;
        let resolved = self.base.resolve_doc(SERVICE_ROOT_FIELDS, &doc)?;
        let attrs = ServiceRootAttrs::from_resolved(&resolved);
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

    pub fn redfish_version(&self) -> Option<&str> {
        self.attrs.redfish_version.as_deref()
    }

    pub fn uuid(&self) -> Option<&str> {
        self.attrs.uuid.as_deref()
    }

    /// Load the chassis collection this root links to. The collection
    /// and its members inherit this root's `RedfishVersion`.
    pub async fn chassis_collection(
        &self,
    ) -> Result<ChassisCollection, Error> {
        let path = self.attrs.chassis_path.clone().ok_or_else(|| {
            Error::MissingAttribute {
                attribute: "Chassis/@odata.id".to_string(),
                resource: self.base.path().to_string(),
            }
        })?;
        ChassisCollection::load_with_version(
            self.base.connector().clone(),
            path,
            self.attrs.redfish_version.clone(),
            self.base.log(),
        )
        .await
    }

    /// The last fetched root document, verbatim.
    pub fn document(&self) -> &Value {
        self.base.document()
    }
}
