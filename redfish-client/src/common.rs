// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Attribute structures and table fragments shared by multiple
//! resource types.

use redfish_types::status::Health;
use redfish_types::status::State;

use crate::schema::FieldDef;
use crate::schema::FieldKind;
use crate::schema::Resolved;

/// The `Status` object most resources carry.
///
/// Every member is optional on the wire, and an unrecognized value
/// projects to the type's `Unknown` variant rather than dropping the
/// field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Status {
    pub state: Option<State>,
    pub health: Option<Health>,
    pub health_rollup: Option<Health>,
}

pub(crate) const STATUS_FIELDS: &[FieldDef] = &[
    FieldDef {
        name: "state",
        path: &["State"],
        required: false,
        kind: FieldKind::Mapped(&State::MAP),
    },
    FieldDef {
        name: "health",
        path: &["Health"],
        required: false,
        kind: FieldKind::Mapped(&Health::MAP),
    },
    FieldDef {
        name: "health_rollup",
        path: &["HealthRollup"],
        required: false,
        kind: FieldKind::Mapped(&Health::MAP),
    },
];

impl Status {
    pub(crate) fn from_resolved(resolved: &Resolved) -> Self {
        Self {
            state: resolved.mapped_as(
                "state",
                State::from_wire,
                State::Unknown,
            ),
            health: resolved.mapped_as(
                "health",
                Health::from_wire,
                Health::Unknown,
            ),
            health_rollup: resolved.mapped_as(
                "health_rollup",
                Health::from_wire,
                Health::Unknown,
            ),
        }
    }
}

/// Rows for one entry of a resource's `Actions` object: the `target`
/// URI plus the allowable-values annotation at `allowed_values_path`.
/// The table is meant to sit behind an optional composite row, so
/// `target` is only enforced once the action itself is present.
pub(crate) const fn action_fields(
    allowed_values_path: &'static [&'static str],
) -> [FieldDef; 2] {
    [
        FieldDef {
            name: "target",
            path: &["target"],
            required: true,
            kind: FieldKind::Scalar,
        },
        FieldDef {
            name: "allowed_values",
            path: allowed_values_path,
            required: false,
            kind: FieldKind::Scalar,
        },
    ]
}
