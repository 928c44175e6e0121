//! Recursive construction of field override entries.
//!
//! A transformer rebuilds a value as `{ ...value, <overrides> }`, where the
//! overrides replace only the fields that hold JSON text somewhere below them.
//! Everything else travels through the spread untouched.
//!
//! Every generated access is null-safe: each rebuilt value is guarded with
//! `value == null ? value : ...`, and once below the first object level the
//! member accesses switch to `?.`.

use super::detect::has_json_fields;
use crate::shape::{FieldShape, ShapeField};
use crate::ts::utils::element_var_name;
use crate::ts::{Emit, ObjectEntry, TsExpr, TsParam};

/// Which way a transformer converts JSON fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Wire text to structured value (`JSON.parse`)
    Decode,
    /// Structured value to wire text (`JSON.stringify`)
    Encode,
}

impl Direction {
    fn json_method(self) -> &'static str {
        match self {
            Direction::Decode => "parse",
            Direction::Encode => "stringify",
        }
    }

    /// `JSON.parse(value)` or `JSON.stringify(value)`
    fn convert(self, value: TsExpr) -> TsExpr {
        TsExpr::call(
            TsExpr::member(TsExpr::ident("JSON"), self.json_method(), false),
            vec![value],
        )
    }
}

/// Expression the fields of an object are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPath {
    base: TsExpr,
    safe: bool,
}

impl AccessPath {
    /// Fields are read with plain `.` access.
    pub fn new(base: TsExpr) -> Self {
        Self { base, safe: false }
    }

    /// Fields are read with `?.` access.
    pub fn safe(base: TsExpr) -> Self {
        Self { base, safe: true }
    }

    /// `base.name` or `base?.name`
    pub fn field(&self, name: &str) -> TsExpr {
        TsExpr::member(self.base.clone(), name, self.safe)
    }
}

/// Build the override entries for `children` read from `path`, in child order.
///
/// Children without a JSON leaf produce no entry.
pub fn transform_entries(
    children: &[ShapeField],
    path: &AccessPath,
    direction: Direction,
    marker: &str,
) -> Vec<ObjectEntry> {
    children
        .iter()
        .filter_map(|field| {
            transform_field(field, path.field(&field.name), direction, marker, true)
                .map(|expr| ObjectEntry::Prop(field.name.clone(), expr))
        })
        .collect()
}

/// Build the override entries for `children` as emitted `key: value` fragments.
///
/// Fragments are rendered for a line at indentation level 0; nested objects
/// are inlined into the fragment of the field that owns them.
pub fn build_transform(
    children: &[ShapeField],
    path: &AccessPath,
    direction: Direction,
    marker: &str,
) -> Vec<String> {
    transform_entries(children, path, direction, marker)
        .iter()
        .map(|entry| entry.emit())
        .collect()
}

/// Rebuilt value of `field`, read from `value`, or `None` when nothing below
/// it is JSON.
///
/// `safe_children` selects `?.` for the members of a rebuilt object.
pub(crate) fn transform_field(
    field: &ShapeField,
    value: TsExpr,
    direction: Direction,
    marker: &str,
    safe_children: bool,
) -> Option<TsExpr> {
    if !has_json_fields(Some(&field.shape), marker) {
        return None;
    }

    if !field.is_array {
        return Some(transform_value(
            &field.shape,
            value,
            direction,
            marker,
            safe_children,
        ));
    }

    // Lists are rebuilt per element, JSON scalar lists included.
    let element = element_var_name(&field.name);
    let element_body = transform_value(
        &field.shape,
        TsExpr::ident(element.as_str()),
        direction,
        marker,
        true,
    );
    let map = TsExpr::call(
        TsExpr::member(value.clone(), "map", false),
        vec![TsExpr::Arrow {
            params: vec![TsParam {
                name: element,
                ty: None,
                optional: false,
            }],
            body: Box::new(element_body),
        }],
    );
    Some(TsExpr::unless_nullish(value, map))
}

/// Rebuild a single (non-list) value whose shape contains JSON.
fn transform_value(
    shape: &FieldShape,
    value: TsExpr,
    direction: Direction,
    marker: &str,
    safe_children: bool,
) -> TsExpr {
    match shape {
        FieldShape::Scalar(_) => {
            let converted = direction.convert(value.clone());
            TsExpr::unless_nullish(value, converted)
        }
        FieldShape::Object(children) => {
            let path = if safe_children {
                AccessPath::safe(value.clone())
            } else {
                AccessPath::new(value.clone())
            };
            let mut entries = vec![ObjectEntry::Spread(value.clone())];
            entries.extend(transform_entries(children, &path, direction, marker));
            TsExpr::unless_nullish(value, TsExpr::Object(entries))
        }
    }
}
