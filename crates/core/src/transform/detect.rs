//! JSON field detection.

use crate::shape::{FieldShape, ShapeField};

/// Whether any leaf reachable from `shape` carries the JSON scalar `marker`.
///
/// An absent shape has no JSON fields.
pub fn has_json_fields(shape: Option<&FieldShape>, marker: &str) -> bool {
    match shape {
        None => false,
        Some(FieldShape::Scalar(scalar)) => scalar == marker,
        Some(FieldShape::Object(children)) => any_json_fields(children, marker),
    }
}

/// Whether any of `fields` transitively carries the JSON scalar `marker`.
pub fn any_json_fields(fields: &[ShapeField], marker: &str) -> bool {
    fields
        .iter()
        .any(|field| has_json_fields(Some(&field.shape), marker))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const JSON: &str = "JSON";

    #[test]
    fn test_absent_shape() {
        assert!(!has_json_fields(None, JSON));
    }

    #[test]
    fn test_scalar_leaves() {
        assert!(has_json_fields(Some(&FieldShape::scalar("JSON")), JSON));
        assert!(!has_json_fields(Some(&FieldShape::scalar("String")), JSON));
        // Marker comparison is exact.
        assert!(!has_json_fields(Some(&FieldShape::scalar("json")), JSON));
    }

    #[test]
    fn test_flat_object_without_json() {
        let shape = FieldShape::object([("status", FieldShape::scalar("String"))]);
        assert!(!has_json_fields(Some(&shape), JSON));
    }

    #[test]
    fn test_deeply_nested_json_leaf() {
        let shape = FieldShape::object([
            ("id!", FieldShape::scalar("ID")),
            (
                "orders[]",
                FieldShape::object([(
                    "lines[]!",
                    FieldShape::object([("attributes", FieldShape::scalar("JSON"))]),
                )]),
            ),
        ]);
        assert!(has_json_fields(Some(&shape), JSON));
    }

    #[test]
    fn test_empty_object() {
        assert!(!has_json_fields(Some(&FieldShape::Object(vec![])), JSON));
        assert!(!any_json_fields(&[], JSON));
    }

    #[test]
    fn test_custom_marker() {
        let shape = FieldShape::object([("payload", FieldShape::scalar("JSONString"))]);
        assert!(!has_json_fields(Some(&shape), JSON));
        assert!(has_json_fields(Some(&shape), "JSONString"));
    }
}
