//! Per-operation entry point.
//!
//! An [`OperationShape`] is what the document visitor knows about one
//! operation once its selection has been resolved against the schema. The
//! same structure is read from JSON by the CLI:
//!
//! ```json
//! {
//!   "name": "GetUser",
//!   "kind": "query",
//!   "rootField": "user",
//!   "output": { "id!": "ID", "payload": "JSON" },
//!   "variables": { "id": "ID" },
//!   "hasRequiredVariables": true
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::shape::{FieldShape, ShapeField, deserialize_fields};
use crate::transform::{any_json_fields, emit_input, emit_output, has_json_fields};
use crate::ts::utils::capitalize_first;

/// GraphQL operation type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// `query`
    Query,
    /// `mutation`
    Mutation,
    /// `subscription`, no transformers are generated
    Subscription,
}

impl OperationKind {
    /// Suffix used in generated type names ("Query", "Mutation", ...).
    pub fn type_suffix(self) -> &'static str {
        match self {
            OperationKind::Query => "Query",
            OperationKind::Mutation => "Mutation",
            OperationKind::Subscription => "Subscription",
        }
    }
}

/// Resolved description of one operation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OperationShape {
    /// Operation name as written in the document
    pub name: String,
    /// Operation type
    pub kind: OperationKind,
    /// Root field selected by the operation
    pub root_field: String,
    /// Result type name; derived from the name and kind when absent
    #[serde(default)]
    pub result_type: Option<String>,
    /// Variables type name; derived from the name and kind when absent
    #[serde(default)]
    pub variables_type: Option<String>,
    /// At least one variable is non-null without a default
    #[serde(default)]
    pub has_required_variables: bool,
    /// Shape of the root field
    #[serde(default)]
    pub output: Option<FieldShape>,
    /// Shapes of the variables, in declaration order
    #[serde(default, deserialize_with = "deserialize_fields")]
    pub variables: Vec<ShapeField>,
}

/// Generated transformer source for one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformers {
    /// Output transformer function
    pub output: String,
    /// Input transformer function
    pub input: String,
}

impl Transformers {
    /// Both functions, output first, separated by a blank line.
    pub fn render(&self) -> String {
        format!("{}\n{}", self.output, self.input)
    }
}

/// Which sides of an operation carry JSON fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonUsage {
    /// The result holds JSON fields
    pub output: bool,
    /// The variables hold JSON fields
    pub input: bool,
}

impl OperationShape {
    /// Parse a document holding either one operation or an array of them.
    pub fn from_json(content: &str) -> Result<Vec<Self>> {
        let document: serde_json::Value = serde_json::from_str(content)?;
        let operations = if document.is_array() {
            serde_json::from_value(document)?
        } else {
            vec![serde_json::from_value(document)?]
        };
        Ok(operations)
    }

    /// Read an operation document from disk.
    pub fn load(path: &Path) -> Result<Vec<Self>> {
        let content = fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
        let operations = Self::from_json(&content)?;
        debug!(
            path = %path.display(),
            operations = operations.len(),
            "Loaded operation document."
        );
        Ok(operations)
    }

    /// `<Name><Kind>`, e.g. `GetUserQuery`, unless given explicitly.
    pub fn result_type_name(&self) -> String {
        self.result_type.clone().unwrap_or_else(|| {
            format!("{}{}", capitalize_first(&self.name), self.kind.type_suffix())
        })
    }

    /// `<Name><Kind>Variables`, e.g. `GetUserQueryVariables`, unless given explicitly.
    pub fn variables_type_name(&self) -> String {
        self.variables_type.clone().unwrap_or_else(|| {
            format!(
                "{}{}Variables",
                capitalize_first(&self.name),
                self.kind.type_suffix()
            )
        })
    }

    /// Which sides of the operation hold JSON fields.
    pub fn json_usage(&self, config: &GeneratorConfig) -> JsonUsage {
        JsonUsage {
            output: has_json_fields(self.output.as_ref(), &config.json_scalar),
            input: any_json_fields(&self.variables, &config.json_scalar),
        }
    }
}

/// Generate both transformers for an operation.
///
/// Subscriptions are not handled and yield `None`.
pub fn generate_transformers(
    operation: &OperationShape,
    config: &GeneratorConfig,
) -> Option<Transformers> {
    if operation.kind == OperationKind::Subscription {
        info!(
            operation = %operation.name,
            "Skipping subscription operation, no transformers generated."
        );
        return None;
    }

    let output = emit_output(
        &operation.name,
        &operation.root_field,
        &operation.result_type_name(),
        operation.output.as_ref(),
        config,
    );
    let input = emit_input(
        &operation.name,
        &operation.variables_type_name(),
        operation.has_required_variables,
        &operation.variables,
        config,
    );
    Some(Transformers { output, input })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const GET_USER: &str = r#"{
  "name": "GetUser",
  "kind": "query",
  "rootField": "user",
  "output": { "id!": "ID", "payload": "JSON", "posts[]": { "body": "JSON", "title": "String" } },
  "variables": { "id!": "ID", "filter": { "where": "JSON" } },
  "hasRequiredVariables": true
}"#;

    #[test]
    fn test_from_json_single() {
        let ops = OperationShape::from_json(GET_USER).unwrap();
        assert_eq!(ops.len(), 1);
        let op = &ops[0];
        assert_eq!(op.name, "GetUser");
        assert_eq!(op.kind, OperationKind::Query);
        assert!(op.has_required_variables);
        assert_eq!(op.variables.len(), 2);
        assert_eq!(op.variables[0].name, "id");
        assert!(op.variables[0].mandatory);
    }

    #[test]
    fn test_from_json_many() {
        let doc = format!(
            "[{GET_USER}, {{ \"name\": \"OnEvent\", \"kind\": \"subscription\", \"rootField\": \"event\" }}]"
        );
        let ops = OperationShape::from_json(&doc).unwrap();
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[1].kind, OperationKind::Subscription);
        assert!(ops[1].output.is_none());
        assert!(ops[1].variables.is_empty());
    }

    #[test]
    fn test_from_json_rejects_unknown_kind() {
        let err = OperationShape::from_json(
            r#"{ "name": "X", "kind": "fragment", "rootField": "x" }"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_from_json_reports_empty_field_name() {
        let err = OperationShape::from_json(
            r#"{ "name": "X", "kind": "query", "rootField": "x", "output": { "[]!": "JSON" } }"#,
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("`[]!`"), "{message}");
        assert!(message.contains("empty name"), "{message}");
    }

    #[test]
    fn test_from_json_reports_unknown_field() {
        let single = OperationShape::from_json(
            r#"{ "name": "X", "kind": "query", "rootfield": "x" }"#,
        )
        .unwrap_err();
        assert!(single.to_string().contains("rootfield"), "{single}");

        let many = OperationShape::from_json(
            r#"[{ "name": "X", "kind": "query", "rootfield": "x" }]"#,
        )
        .unwrap_err();
        assert!(many.to_string().contains("rootfield"), "{many}");
    }

    #[test]
    fn test_derived_type_names() {
        let ops = OperationShape::from_json(GET_USER).unwrap();
        assert_eq!(ops[0].result_type_name(), "GetUserQuery");
        assert_eq!(ops[0].variables_type_name(), "GetUserQueryVariables");

        let explicit = OperationShape::from_json(
            r#"{ "name": "save", "kind": "mutation", "rootField": "save",
                 "resultType": "SaveResult", "variablesType": "SaveArgs" }"#,
        )
        .unwrap();
        assert_eq!(explicit[0].result_type_name(), "SaveResult");
        assert_eq!(explicit[0].variables_type_name(), "SaveArgs");
    }

    #[test]
    fn test_json_usage() {
        let config = GeneratorConfig::default();
        let ops = OperationShape::from_json(GET_USER).unwrap();
        assert_eq!(
            ops[0].json_usage(&config),
            JsonUsage {
                output: true,
                input: true
            }
        );
    }

    #[test]
    fn test_generate_query() {
        let config = GeneratorConfig::default();
        let ops = OperationShape::from_json(GET_USER).unwrap();
        let generated = generate_transformers(&ops[0], &config).unwrap();

        assert!(generated
            .output
            .contains("export const transformGetUserOutput = (data: any): GetUserQuery => {"));
        assert!(generated.output.contains(
            "payload: user.payload == null ? user.payload : JSON.parse(user.payload),"
        ));
        assert!(generated
            .output
            .contains("posts: user.posts == null ? user.posts : user.posts.map((post) => "));
        assert!(generated.output.contains(
            "body: post?.body == null ? post?.body : JSON.parse(post?.body),"
        ));

        assert!(generated.input.contains(
            "export const transformGetUserInput = (variables: GetUserQueryVariables): GetUserQueryVariables => {"
        ));
        assert!(generated.input.contains("JSON.stringify(variables.filter?.where)"));

        let rendered = generated.render();
        assert!(rendered.find("transformGetUserOutput") < rendered.find("transformGetUserInput"));
    }

    #[test]
    fn test_generate_skips_subscriptions() {
        let ops = OperationShape::from_json(
            r#"{ "name": "OnEvent", "kind": "subscription", "rootField": "event",
                 "output": { "payload": "JSON" } }"#,
        )
        .unwrap();
        assert!(generate_transformers(&ops[0], &GeneratorConfig::default()).is_none());
    }

    #[test]
    fn test_generate_mutation_without_variables() {
        let ops = OperationShape::from_json(
            r#"{ "name": "Reset", "kind": "mutation", "rootField": "reset",
                 "output": { "ok": "Boolean" }, "hasRequiredVariables": true }"#,
        )
        .unwrap();
        let generated = generate_transformers(&ops[0], &GeneratorConfig::default()).unwrap();
        assert!(generated.output.contains("return reset as ResetMutation;"));
        assert!(generated
            .input
            .contains("export const transformResetInput = (): undefined => {"));
    }
}
