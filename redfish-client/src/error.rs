// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error taxonomy for client operations.

use std::collections::BTreeSet;

use redfish_types::power::ResetType;
use slog_error_chain::SlogInlineError;
use thiserror::Error;

use crate::connector::ConnectorError;

/// Errors surfaced by resource loads, refreshes, and action invocations.
///
/// Nothing here is retried; every failure surfaces to the caller on the
/// operation that hit it.
#[derive(Debug, Error, SlogInlineError)]
pub enum Error {
    /// A `required` attribute was absent from a resource document.
    #[error("attribute {attribute} is missing from resource {resource}")]
    MissingAttribute { attribute: String, resource: String },

    /// The resource document does not advertise the requested action.
    #[error("action {action} is not available on resource {resource}")]
    MissingAction { action: &'static str, resource: String },

    /// The caller passed a value the target resource does not accept. The
    /// request was rejected locally; nothing was sent.
    #[error(
        "invalid value {value} for parameter {parameter} \
         (allowed values: {})",
        fmt_reset_types(.allowed)
    )]
    InvalidParameterValue {
        parameter: &'static str,
        value: ResetType,
        allowed: BTreeSet<ResetType>,
    },

    /// A resource was constructed with an empty path.
    #[error("resource path must not be empty")]
    EmptyResourcePath,

    #[error(transparent)]
    Connector(#[from] ConnectorError),
}

fn fmt_reset_types(values: &BTreeSet<ResetType>) -> String {
    values.iter().map(|v| v.as_wire()).collect::<Vec<_>>().join(", ")
}
