// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared state for the simulated BMC's dropshot server.

use std::sync::Mutex;

use http::Method;
use redfish_types::power::PowerState;
use redfish_types::power::ResetType;
use serde_json::json;
use serde_json::Value;
use slog::debug;
use slog::info;
use slog::Logger;

use crate::chassis::SimChassis;
use crate::config::ChassisConfig;
use crate::config::ServiceConfig;

pub(crate) const ROOT_PATH: &str = "/redfish/v1";
pub(crate) const COLLECTION_PATH: &str = "/redfish/v1/Chassis";

/// One request the server handled, as seen by tests.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    /// Request body for POSTs, `None` for GETs.
    pub body: Option<Value>,
}

/// Why a reset request was refused.
pub(crate) enum ResetError {
    UnknownChassis,
    Rejected(String),
}

pub(crate) struct ServerContext {
    service: ServiceConfig,
    chassis: Mutex<Vec<SimChassis>>,
    requests: Mutex<Vec<RecordedRequest>>,
    log: Logger,
}

impl ServerContext {
    pub(crate) fn new(
        service: ServiceConfig,
        chassis: Vec<ChassisConfig>,
        log: Logger,
    ) -> Self {
        let chassis = chassis.into_iter().map(SimChassis::new).collect();
        Self {
            service,
            chassis: Mutex::new(chassis),
            requests: Mutex::new(Vec::new()),
            log,
        }
    }

    /// Append to the request log. Handlers record before acting so that
    /// refused requests show up too.
    pub(crate) fn record(
        &self,
        method: Method,
        path: String,
        body: Option<Value>,
    ) {
        debug!(
            self.log, "received request";
            "method" => %method,
            "path" => path.as_str(),
        );
        self.requests
            .lock()
            .unwrap()
            .push(RecordedRequest { method, path, body });
    }

    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn root_document(&self) -> Value {
        json!({
            "@odata.id": ROOT_PATH,
            "@odata.type": "#ServiceRoot.v1_5_0.ServiceRoot",
            "Id": "RootService",
            "Name": self.service.name,
            "RedfishVersion": self.service.redfish_version,
            "UUID": self.service.uuid,
            "Chassis": { "@odata.id": COLLECTION_PATH },
        })
    }

    pub(crate) fn collection_document(&self) -> Value {
        let chassis = self.chassis.lock().unwrap();
        let members: Vec<Value> = chassis
            .iter()
            .map(|c| {
                json!({
                    "@odata.id": format!("{COLLECTION_PATH}/{}", c.identity()),
                })
            })
            .collect();
        json!({
            "@odata.id": COLLECTION_PATH,
            "@odata.type": "#ChassisCollection.ChassisCollection",
            "Name": "Chassis Collection",
            "Members@odata.count": members.len(),
            "Members": members,
        })
    }

    pub(crate) fn chassis_document(&self, identity: &str) -> Option<Value> {
        self.chassis
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.identity() == identity)
            .map(|c| c.document(COLLECTION_PATH))
    }

    pub(crate) fn chassis_reset(
        &self,
        identity: &str,
        body: &Value,
    ) -> Result<(), ResetError> {
        let mut chassis = self.chassis.lock().unwrap();
        let Some(chassis) =
            chassis.iter_mut().find(|c| c.identity() == identity)
        else {
            return Err(ResetError::UnknownChassis);
        };
        let Some(value) = body.get("ResetType").and_then(Value::as_str)
        else {
            return Err(ResetError::Rejected(
                "request body has no ResetType".to_string(),
            ));
        };
        let Some(reset_type) = ResetType::from_wire(value) else {
            return Err(ResetError::Rejected(format!(
                "unsupported ResetType {value:?}"
            )));
        };
        if !chassis.accepts(reset_type) {
            return Err(ResetError::Rejected(format!(
                "ResetType {value} is not allowed for chassis {identity}"
            )));
        }
        info!(
            self.log, "resetting simulated chassis";
            "identity" => identity,
            "reset_type" => %reset_type,
        );
        chassis.apply_reset(reset_type);
        Ok(())
    }

    pub(crate) fn power_state(&self, identity: &str) -> Option<PowerState> {
        self.chassis
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.identity() == identity)
            .map(|c| c.power_state())
    }
}
