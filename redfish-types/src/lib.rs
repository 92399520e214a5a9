// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire-format types for the Redfish management API.
//!
//! Redfish transports most interesting hardware state as JSON strings drawn
//! from fixed schema enumerations ("PowerState": "On", "ChassisType":
//! "RackMount", ...). Each enumeration here carries its exact wire strings
//! via `from_wire`/`as_wire` plus the list of values the schema defines
//! (`ALL`). BMCs in the field ship values from newer schema revisions than
//! ours, so the read-side enumerations also carry an `Unknown` sentinel;
//! `from_wire` itself is strict and unrecognized-value tolerance is applied
//! by `redfish-client` when it projects a document into typed attributes.

pub mod chassis;
pub mod power;
pub mod status;
pub mod wire;
