// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Declarative field mapping from Redfish JSON documents.
//!
//! Resource modules describe their attributes as tables of [`FieldDef`]
//! rows rather than as hand-written extraction code; [`resolve`] is the
//! one interpreter that walks a table against a fetched document and
//! produces a [`Resolved`] view. Adding an attribute to a resource means
//! adding a row to its table, not writing new parsing logic.
//!
//! Three field kinds cover the Redfish data model we consume:
//!
//! * [`FieldKind::Scalar`] binds whatever JSON value sits at the path.
//! * [`FieldKind::Mapped`] binds a string against a [`ValueMap`];
//!   unrecognized values become [`MappedValue::Unknown`] instead of
//!   errors, since BMCs routinely ship vendor extensions and typos.
//! * [`FieldKind::Composite`] binds a nested object against a sub-table.
//!
//! JSON `null` and a missing key are indistinguishable here: both leave
//! the field [`FieldValue::Absent`]. A field marked `required` fails
//! resolution with [`Error::MissingAttribute`] when absent; required
//! fields inside a composite are only enforced once the composite itself
//! is present.

use redfish_types::wire::ValueMap;
use serde_json::Map;
use serde_json::Value;
use slog::debug;
use slog::Logger;

use crate::Error;

/// One row of a resource's attribute table.
#[derive(Clone, Copy, Debug)]
pub struct FieldDef {
    /// Name the attribute is looked up by in the [`Resolved`] view.
    pub name: &'static str,
    /// Path of JSON object keys from the document (or composite) root.
    pub path: &'static [&'static str],
    /// Fail resolution if the document does not carry this field.
    pub required: bool,
    pub kind: FieldKind,
}

#[derive(Clone, Copy, Debug)]
pub enum FieldKind {
    Scalar,
    Mapped(&'static ValueMap),
    Composite(&'static [FieldDef]),
}

/// A mapped field's value after canonicalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MappedValue {
    /// The wire string matched the map; this is its canonical form.
    Known(&'static str),
    /// The wire value was a string outside the map, or not a string at
    /// all. The original text is kept for logging and display.
    Unknown(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Absent,
    Scalar(Value),
    Mapped(MappedValue),
    Composite(Resolved),
}

/// The output of [`resolve`]: field names bound to values.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolved {
    fields: Vec<(&'static str, FieldValue)>,
}

impl Resolved {
    /// Look up a field by table name. Names not in the table resolve to
    /// [`FieldValue::Absent`].
    pub fn get(&self, name: &str) -> &FieldValue {
        static ABSENT: FieldValue = FieldValue::Absent;
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
            .unwrap_or(&ABSENT)
    }

    pub fn scalar(&self, name: &str) -> Option<&Value> {
        match self.get(name) {
            FieldValue::Scalar(value) => Some(value),
            _ => None,
        }
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        self.scalar(name).and_then(Value::as_str)
    }

    /// Field as owned text: strings verbatim, any other scalar via its
    /// JSON rendering. Text attributes project through this so that a
    /// BMC sending (say) a bare number where a string belongs degrades
    /// to that number's text instead of dropping the field.
    pub fn text(&self, name: &str) -> Option<String> {
        match self.scalar(name) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
            None => None,
        }
    }

    /// Numeric attribute, if present and actually a number.
    pub fn f64(&self, name: &str) -> Option<f64> {
        self.scalar(name).and_then(Value::as_f64)
    }

    pub fn u64(&self, name: &str) -> Option<u64> {
        self.scalar(name).and_then(Value::as_u64)
    }

    pub fn mapped(&self, name: &str) -> Option<&MappedValue> {
        match self.get(name) {
            FieldValue::Mapped(value) => Some(value),
            _ => None,
        }
    }

    pub fn composite(&self, name: &str) -> Option<&Resolved> {
        match self.get(name) {
            FieldValue::Composite(resolved) => Some(resolved),
            _ => None,
        }
    }

    /// Project a mapped field into an enum: absent stays `None`, a
    /// recognized wire value parses via `parse`, and anything else
    /// becomes `unknown`.
    pub fn mapped_as<T>(
        &self,
        name: &str,
        parse: fn(&str) -> Option<T>,
        unknown: T,
    ) -> Option<T> {
        match self.get(name) {
            FieldValue::Mapped(MappedValue::Known(wire)) => {
                Some(parse(wire).unwrap_or(unknown))
            }
            FieldValue::Mapped(MappedValue::Unknown(_)) => Some(unknown),
            _ => None,
        }
    }
}

/// Resolve `table` against `doc`.
///
/// `resource` names the document in errors and log lines; it is the
/// resource path the document was fetched from.
pub fn resolve(
    table: &[FieldDef],
    doc: &Value,
    resource: &str,
    log: &Logger,
) -> Result<Resolved, Error> {
    let empty = Map::new();
    // A non-object document has no fields; required rows fail below.
    let obj = doc.as_object().unwrap_or(&empty);
    resolve_object(table, obj, resource, "", log)
}

fn resolve_object(
    table: &[FieldDef],
    obj: &Map<String, Value>,
    resource: &str,
    prefix: &str,
    log: &Logger,
) -> Result<Resolved, Error> {
    let mut fields = Vec::with_capacity(table.len());
    for def in table {
        let value = resolve_field(def, obj, resource, prefix, log)?;
        fields.push((def.name, value));
    }
    Ok(Resolved { fields })
}

fn resolve_field(
    def: &FieldDef,
    obj: &Map<String, Value>,
    resource: &str,
    prefix: &str,
    log: &Logger,
) -> Result<FieldValue, Error> {
    let attribute = || format!("{prefix}{}", def.path.join("/"));
    let raw = lookup(obj, def.path).filter(|v| !v.is_null());
    let value = match (raw, def.kind) {
        (None, _) => FieldValue::Absent,
        (Some(raw), FieldKind::Scalar) => FieldValue::Scalar(raw.clone()),
        (Some(raw), FieldKind::Mapped(map)) => {
            FieldValue::Mapped(canonicalize(map, raw, &attribute(), log))
        }
        (Some(raw), FieldKind::Composite(sub)) => match raw.as_object() {
            Some(sub_obj) => {
                let sub_prefix = format!("{}/", attribute());
                FieldValue::Composite(resolve_object(
                    sub, sub_obj, resource, &sub_prefix, log,
                )?)
            }
            None => {
                debug!(
                    log, "composite attribute is not an object";
                    "attribute" => attribute(),
                    "resource" => resource,
                );
                FieldValue::Absent
            }
        },
    };
    if def.required && value == FieldValue::Absent {
        return Err(Error::MissingAttribute {
            attribute: attribute(),
            resource: resource.to_string(),
        });
    }
    Ok(value)
}

fn lookup<'a>(
    obj: &'a Map<String, Value>,
    path: &[&str],
) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    let mut value = obj.get(*first)?;
    for key in rest {
        value = value.as_object()?.get(*key)?;
    }
    Some(value)
}

fn canonicalize(
    map: &ValueMap,
    raw: &Value,
    attribute: &str,
    log: &Logger,
) -> MappedValue {
    let Some(text) = raw.as_str() else {
        debug!(
            log, "mapped attribute is not a string";
            "attribute" => attribute,
            "map" => map.name,
            "value" => %raw,
        );
        return MappedValue::Unknown(raw.to_string());
    };
    match (map.canonicalize)(text) {
        Some(wire) => MappedValue::Known(wire),
        None => {
            debug!(
                log, "unrecognized value for mapped attribute";
                "attribute" => attribute,
                "map" => map.name,
                "value" => text,
            );
            MappedValue::Unknown(text.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::test_logger;
    use redfish_types::power::PowerState;
    use serde_json::json;

    const INNER_FIELDS: &[FieldDef] = &[
        FieldDef {
            name: "target",
            path: &["target"],
            required: true,
            kind: FieldKind::Scalar,
        },
        FieldDef {
            name: "mode",
            path: &["Mode"],
            required: false,
            kind: FieldKind::Mapped(&PowerState::MAP),
        },
    ];

    const TEST_FIELDS: &[FieldDef] = &[
        FieldDef {
            name: "identity",
            path: &["Id"],
            required: true,
            kind: FieldKind::Scalar,
        },
        FieldDef {
            name: "power_state",
            path: &["PowerState"],
            required: false,
            kind: FieldKind::Mapped(&PowerState::MAP),
        },
        FieldDef {
            name: "depth",
            path: &["Oem", "Depth"],
            required: false,
            kind: FieldKind::Scalar,
        },
        FieldDef {
            name: "inner",
            path: &["Links", "Inner"],
            required: false,
            kind: FieldKind::Composite(INNER_FIELDS),
        },
    ];

    fn resolve_test(doc: &Value) -> Result<Resolved, Error> {
        resolve(TEST_FIELDS, doc, "/redfish/v1/Thing", &test_logger())
    }

    #[test]
    fn resolves_scalars_and_nested_paths() {
        let doc = json!({
            "Id": "t0",
            "PowerState": "On",
            "Oem": { "Depth": 10.5 },
        });
        let resolved = resolve_test(&doc).unwrap();
        assert_eq!(resolved.string("identity"), Some("t0"));
        assert_eq!(resolved.f64("depth"), Some(10.5));
        assert_eq!(
            resolved.mapped("power_state"),
            Some(&MappedValue::Known("On"))
        );
        assert_eq!(
            resolved.mapped_as(
                "power_state",
                PowerState::from_wire,
                PowerState::Unknown
            ),
            Some(PowerState::On)
        );
        assert_eq!(resolved.get("inner"), &FieldValue::Absent);
    }

    #[test]
    fn missing_required_attribute_is_an_error() {
        let err = resolve_test(&json!({ "PowerState": "On" })).unwrap_err();
        match err {
            Error::MissingAttribute { attribute, resource } => {
                assert_eq!(attribute, "Id");
                assert_eq!(resource, "/redfish/v1/Thing");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn text_renders_non_string_scalars() {
        // Required checks presence, not type; projection falls back to
        // the JSON rendering.
        let resolved = resolve_test(&json!({ "Id": 42 })).unwrap();
        assert_eq!(resolved.string("identity"), None);
        assert_eq!(resolved.text("identity"), Some("42".to_string()));
    }

    #[test]
    fn null_reads_as_absent() {
        let doc = json!({ "Id": "t0", "PowerState": null });
        let resolved = resolve_test(&doc).unwrap();
        assert_eq!(resolved.get("power_state"), &FieldValue::Absent);
        assert_eq!(
            resolved.mapped_as(
                "power_state",
                PowerState::from_wire,
                PowerState::Unknown
            ),
            None
        );
    }

    #[test]
    fn unrecognized_mapped_value_is_kept_not_rejected() {
        let doc = json!({ "Id": "t0", "PowerState": "Hibernating" });
        let resolved = resolve_test(&doc).unwrap();
        assert_eq!(
            resolved.mapped("power_state"),
            Some(&MappedValue::Unknown("Hibernating".to_string()))
        );
        assert_eq!(
            resolved.mapped_as(
                "power_state",
                PowerState::from_wire,
                PowerState::Unknown
            ),
            Some(PowerState::Unknown)
        );
    }

    #[test]
    fn non_string_mapped_value_is_unknown() {
        let doc = json!({ "Id": "t0", "PowerState": 7 });
        let resolved = resolve_test(&doc).unwrap();
        assert_eq!(
            resolved.mapped("power_state"),
            Some(&MappedValue::Unknown("7".to_string()))
        );
    }

    #[test]
    fn composite_requirements_bind_only_when_parent_present() {
        // No composite at all: its required sub-field does not fire.
        let resolved = resolve_test(&json!({ "Id": "t0" })).unwrap();
        assert_eq!(resolved.composite("inner"), None);

        // Present but missing the required sub-field: now it fires, and
        // the error names the full path.
        let doc = json!({ "Id": "t0", "Links": { "Inner": {} } });
        match resolve_test(&doc).unwrap_err() {
            Error::MissingAttribute { attribute, .. } => {
                assert_eq!(attribute, "Links/Inner/target");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn composite_resolves_sub_table() {
        let doc = json!({
            "Id": "t0",
            "Links": { "Inner": { "target": "/some/uri", "Mode": "Off" } },
        });
        let resolved = resolve_test(&doc).unwrap();
        let inner = resolved.composite("inner").unwrap();
        assert_eq!(inner.string("target"), Some("/some/uri"));
        assert_eq!(inner.mapped("mode"), Some(&MappedValue::Known("Off")));
    }

    #[test]
    fn non_object_composite_reads_as_absent() {
        let doc = json!({ "Id": "t0", "Links": { "Inner": "nope" } });
        let resolved = resolve_test(&doc).unwrap();
        assert_eq!(resolved.get("inner"), &FieldValue::Absent);
    }

    #[test]
    fn non_object_document_fails_required_fields() {
        match resolve_test(&json!([1, 2, 3])).unwrap_err() {
            Error::MissingAttribute { attribute, .. } => {
                assert_eq!(attribute, "Id");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
