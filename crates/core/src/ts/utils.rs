//! Identifier and property-access helpers for TypeScript emission.

use std::collections::HashSet;
use std::sync::LazyLock;

/// TypeScript reserved words that cannot be used as identifiers.
pub static TS_RESERVED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
        "let",
        "static",
        "implements",
        "interface",
        "package",
        "private",
        "protected",
        "public",
        "await",
        "async",
    ]
    .into_iter()
    .collect()
});

/// Check if an identifier needs bracket notation (or quoting) for property/key access.
///
/// Returns true if the name:
/// - Is empty
/// - Doesn't start with a letter, underscore, or dollar sign
/// - Contains characters other than alphanumeric, underscore, or dollar sign
pub fn needs_bracket_notation(name: &str) -> bool {
    name.is_empty()
        || !name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Escape a string for use in JavaScript/TypeScript string literals.
/// Escapes backslashes and double quotes.
pub fn escape_js_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Quote a string if needed for use as an object literal key.
pub fn quote_if_needed(name: &str) -> String {
    if needs_bracket_notation(name) {
        format!("\"{}\"", escape_js_string(name))
    } else {
        name.to_string()
    }
}

/// Format a member access (e.g., `user.meta`, `user?.meta` or `user?.["first-name"]`).
pub fn format_member_access(obj: &str, prop: &str, optional: bool) -> String {
    if needs_bracket_notation(prop) {
        if optional {
            format!("{}?.[\"{}\"]", obj, escape_js_string(prop))
        } else {
            format!("{}[\"{}\"]", obj, escape_js_string(prop))
        }
    } else if optional {
        format!("{obj}?.{prop}")
    } else {
        format!("{obj}.{prop}")
    }
}

/// Sanitize an identifier to be a valid TypeScript identifier.
/// - Replaces `-`, `.`, ` ` with separators and converts to camelCase
/// - Prepends `_` if starts with digit
/// - Escapes reserved words with `_` prefix
pub fn sanitize_ts_identifier(name: &str) -> String {
    let mut result = String::new();
    for (i, part) in name.split(['-', '.', ' ']).enumerate() {
        if part.is_empty() {
            continue;
        }
        if i == 0 {
            result.push_str(part);
        } else {
            result.push_str(&capitalize_first(part));
        }
    }

    if result.is_empty() {
        return "_empty".to_string();
    }

    if result.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        result = format!("_{result}");
    }

    if TS_RESERVED_WORDS.contains(result.as_str()) {
        result = format!("_{result}");
    }

    result
}

/// Capitalize the first letter of a string.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Globals the generated arrow bodies call into; an element variable must not shadow them.
const SHADOWED_GLOBALS: [&str; 1] = ["JSON"];

/// Name the loop variable for the elements of an array field.
///
/// Drops the final character of the field name (`items` -> `item`). This is
/// not real singularization; the name only has to be unique in its arrow
/// scope. Results that are not usable identifiers are patched up: an empty
/// result becomes `<field>Item`, a reserved word or a global the body calls
/// (`JSON`) gets a trailing `_`.
pub fn element_var_name(field_name: &str) -> String {
    let mut chars = field_name.chars();
    chars.next_back();
    let stem = chars.as_str();

    if stem.is_empty() || needs_bracket_notation(stem) {
        return format!("{}Item", sanitize_ts_identifier(field_name));
    }
    if TS_RESERVED_WORDS.contains(stem) || SHADOWED_GLOBALS.contains(&stem) {
        return format!("{stem}_");
    }
    stem.to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_bracket_notation() {
        assert!(!needs_bracket_notation("foo"));
        assert!(!needs_bracket_notation("_foo"));
        assert!(!needs_bracket_notation("$foo"));
        assert!(!needs_bracket_notation("foo123"));

        assert!(needs_bracket_notation(""));
        assert!(needs_bracket_notation("123foo"));
        assert!(needs_bracket_notation("foo-bar"));
        assert!(needs_bracket_notation("foo bar"));
    }

    #[test]
    fn test_quote_if_needed() {
        assert_eq!(quote_if_needed("foo"), "foo");
        assert_eq!(quote_if_needed("foo-bar"), "\"foo-bar\"");
        assert_eq!(quote_if_needed("say\"hi"), "\"say\\\"hi\"");
    }

    #[test]
    fn test_format_member_access() {
        assert_eq!(format_member_access("user", "meta", false), "user.meta");
        assert_eq!(format_member_access("user", "meta", true), "user?.meta");
        assert_eq!(
            format_member_access("user", "first-name", false),
            "user[\"first-name\"]"
        );
        assert_eq!(
            format_member_access("user", "first-name", true),
            "user?.[\"first-name\"]"
        );
    }

    #[test]
    fn test_sanitize_ts_identifier() {
        assert_eq!(sanitize_ts_identifier("GetUser"), "GetUser");
        assert_eq!(sanitize_ts_identifier("get-user"), "getUser");
        assert_eq!(sanitize_ts_identifier("123op"), "_123op");
        assert_eq!(sanitize_ts_identifier("delete"), "_delete");
        assert_eq!(sanitize_ts_identifier(""), "_empty");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("getUser"), "GetUser");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("a"), "A");
    }

    #[test]
    fn test_element_var_name_drops_last_char() {
        assert_eq!(element_var_name("items"), "item");
        assert_eq!(element_var_name("tags"), "tag");
        // Not grammatical, only unique.
        assert_eq!(element_var_name("children"), "childre");
    }

    #[test]
    fn test_element_var_name_fallbacks() {
        assert_eq!(element_var_name("x"), "xItem");
        assert_eq!(element_var_name("cases"), "case_");
        assert_eq!(element_var_name("news"), "new_");
        assert_eq!(element_var_name("JSONs"), "JSON_");
    }
}
