//! Field shape trees.
//!
//! A shape tree describes the declared type of a selected field, as resolved
//! from the schema. Only two things matter to the transformers: which leaves
//! carry the JSON scalar, and which fields are lists.
//!
//! Object keys arrive annotated: a trailing `!` marks the field non-null and,
//! once that is stripped, a trailing `[]` marks it as a list (`tags[]!`).
//! Keys are decoded into [`ShapeField`] once, when the tree is built.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::error::Error;

/// Recursive description of a field's declared type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawShape")]
pub enum FieldShape {
    /// Leaf carrying a scalar type designation ("String", "JSON", ...)
    Scalar(String),
    /// Selection of child fields, in selection order
    Object(Vec<ShapeField>),
}

/// A child field with its annotated key decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeField {
    /// Base field name, markers stripped
    pub name: String,
    /// Key carried the trailing `!`
    pub mandatory: bool,
    /// Key carried the trailing `[]`
    pub is_array: bool,
    /// Shape of the field (of its elements, for lists)
    pub shape: FieldShape,
}

/// Decoded annotated key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotatedName<'a> {
    /// Base field name
    pub name: &'a str,
    /// Trailing `!` was present
    pub mandatory: bool,
    /// Trailing `[]` was present
    pub is_array: bool,
}

impl<'a> AnnotatedName<'a> {
    /// Strip the mandatory marker, then the array marker.
    pub fn parse(key: &'a str) -> Self {
        let (rest, mandatory) = match key.strip_suffix('!') {
            Some(rest) => (rest, true),
            None => (key, false),
        };
        let (name, is_array) = match rest.strip_suffix("[]") {
            Some(name) => (name, true),
            None => (rest, false),
        };
        Self {
            name,
            mandatory,
            is_array,
        }
    }
}

impl ShapeField {
    /// Build a field from an annotated key. The key is expected to have a
    /// non-empty base name; see [`ShapeField::try_new`] for the checked form.
    pub fn new(key: &str, shape: FieldShape) -> Self {
        let annotated = AnnotatedName::parse(key);
        Self {
            name: annotated.name.to_string(),
            mandatory: annotated.mandatory,
            is_array: annotated.is_array,
            shape,
        }
    }

    /// Build a field from an annotated key, rejecting keys with an empty base name.
    pub fn try_new(key: &str, shape: FieldShape) -> Result<Self, Error> {
        let field = Self::new(key, shape);
        if field.name.is_empty() {
            return Err(Error::EmptyFieldName {
                key: key.to_string(),
            });
        }
        Ok(field)
    }
}

impl FieldShape {
    /// Scalar leaf.
    pub fn scalar(marker: impl Into<String>) -> Self {
        FieldShape::Scalar(marker.into())
    }

    /// Object node from `(annotated key, shape)` pairs, preserving their order.
    pub fn object<'k>(children: impl IntoIterator<Item = (&'k str, FieldShape)>) -> Self {
        FieldShape::Object(
            children
                .into_iter()
                .map(|(key, shape)| ShapeField::new(key, shape))
                .collect(),
        )
    }

    /// Children of an object node; empty for scalars.
    pub fn children(&self) -> &[ShapeField] {
        match self {
            FieldShape::Scalar(_) => &[],
            FieldShape::Object(children) => children,
        }
    }
}

/// Untagged wire form: a string is a scalar, a map is an object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawShape {
    Scalar(String),
    Object(IndexMap<String, RawShape>),
}

impl TryFrom<RawShape> for FieldShape {
    type Error = Error;

    fn try_from(raw: RawShape) -> Result<Self, Self::Error> {
        match raw {
            RawShape::Scalar(marker) => Ok(FieldShape::Scalar(marker)),
            RawShape::Object(children) => fields_from_raw(children).map(FieldShape::Object),
        }
    }
}

fn fields_from_raw(children: IndexMap<String, RawShape>) -> Result<Vec<ShapeField>, Error> {
    children
        .into_iter()
        .map(|(key, raw)| ShapeField::try_new(&key, FieldShape::try_from(raw)?))
        .collect()
}

/// Deserialize an annotated-key map (`{"ids[]!": "ID", ...}`) into decoded fields.
pub fn deserialize_fields<'de, D>(deserializer: D) -> Result<Vec<ShapeField>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;

    let raw = IndexMap::<String, RawShape>::deserialize(deserializer)?;
    fields_from_raw(raw).map_err(D::Error::custom)
}
