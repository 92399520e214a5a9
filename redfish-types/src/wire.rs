// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hooks connecting the enumerations in this crate to the declarative field
//! mapper in `redfish-client`.

/// Handle to one enumeration's wire-string table.
///
/// Every mapped enumeration exposes a `MAP` constant of this type; the field
/// mapping interpreter uses it to canonicalize raw document strings without
/// knowing the concrete enum.
#[derive(Clone, Copy, Debug)]
pub struct ValueMap {
    /// Name of the enumeration, for log messages about unrecognized values.
    pub name: &'static str,
    /// Maps a raw wire string to its canonical `'static` form, or `None` if
    /// the value is not part of the enumeration.
    pub canonicalize: fn(&str) -> Option<&'static str>,
}
