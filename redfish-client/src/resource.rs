// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plumbing shared by every resource type: fetch a document, resolve it
//! against the resource's field table, and atomically swap state on
//! refresh.

use std::sync::Arc;

use serde_json::Value;
use slog::debug;
use slog::o;
use slog::Logger;

use crate::connector::Connector;
use crate::schema;
use crate::schema::FieldDef;
use crate::schema::Resolved;
use crate::Error;

/// State common to all resources: the connector it was loaded through,
/// the path it lives at, and the last document fetched from that path.
///
/// Resource types (`Chassis`, `ServiceRoot`, ...) embed one of these and
/// layer their projected attributes on top. Refresh goes through
/// [`ResourceBase::fetch`] and [`ResourceBase::commit`] so that a failed
/// fetch or resolve leaves the previous document and attributes in
/// place.
#[derive(Clone)]
pub(crate) struct ResourceBase {
    connector: Arc<dyn Connector>,
    path: String,
    /// Protocol version reported by the service root, when this
    /// resource was reached through one. Stored for callers that gate
    /// on it; nothing here interprets it.
    redfish_version: Option<String>,
    log: Logger,
    doc: Value,
}

impl ResourceBase {
    pub(crate) async fn load(
        connector: Arc<dyn Connector>,
        path: String,
        redfish_version: Option<String>,
        log: &Logger,
    ) -> Result<Self, Error> {
        if path.is_empty() {
            return Err(Error::EmptyResourcePath);
        }
        let log = log.new(o!("path" => path.clone()));
        let doc = connector.get(&path).await?;
        debug!(log, "loaded resource document");
        Ok(Self { connector, path, redfish_version, log, doc })
    }

    /// Fetch a fresh document without touching the stored one.
    pub(crate) async fn fetch(&self) -> Result<Value, Error> {
        let doc = self.connector.get(&self.path).await?;
        debug!(self.log, "loaded resource document");
        Ok(doc)
    }

    /// Install a document previously returned by [`ResourceBase::fetch`].
    /// Callers resolve and project from the fetched document first, so
    /// nothing is committed if resolution fails.
    pub(crate) fn commit(&mut self, doc: Value) {
        self.doc = doc;
    }

    pub(crate) fn resolve(
        &self,
        table: &[FieldDef],
    ) -> Result<Resolved, Error> {
        self.resolve_doc(table, &self.doc)
    }

    pub(crate) fn resolve_doc(
        &self,
        table: &[FieldDef],
        doc: &Value,
    ) -> Result<Resolved, Error> {
        schema::resolve(table, doc, &self.path, &self.log)
    }

    pub(crate) fn connector(&self) -> &Arc<dyn Connector> {
        &self.connector
    }

    pub(crate) fn path(&self) -> &str {
        &self.path
    }

    pub(crate) fn redfish_version(&self) -> Option<&str> {
        self.redfish_version.as_deref()
    }

    pub(crate) fn log(&self) -> &Logger {
        &self.log
    }

    pub(crate) fn document(&self) -> &Value {
        &self.doc
    }
}
