// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Client for the DMTF Redfish management API.
//!
//! Everything starts from a [`Connector`] (usually [`HttpConnector`])
//! pointed at a BMC, and a [`ServiceRoot`] loaded through it. From the
//! root you reach the chassis collection and its members; each resource
//! is a snapshot of one fetched document with attributes projected into
//! typed accessors, refreshed explicitly via its `refresh` method.
//!
//! The projection is deliberately tolerant of the wire: BMC firmware
//! regularly omits attributes or extends enumerations, so unrecognized
//! values surface as `Unknown` variants and optional attributes as
//! `None` instead of failing the load. Only a handful of attributes the
//! schema marks required, and the shape of an advertised action, are
//! enforced.

pub mod chassis;
pub mod common;
pub mod connector;
mod error;
mod resource;
pub mod schema;
pub mod service_root;
#[cfg(test)]
mod test_util;

pub use chassis::Chassis;
pub use chassis::ChassisCollection;
pub use connector::Connector;
pub use connector::ConnectorError;
pub use connector::HttpConnector;
pub use connector::HttpConnectorConfig;
pub use error::Error;
pub use service_root::ServiceRoot;
pub use service_root::DEFAULT_ROOT_PATH;
