//! Output and input transformer functions.
//!
//! For an operation `GetUser` the generated module carries:
//!
//! ```ts
//! export const transformGetUserOutput = (data: any): GetUserQuery => { ... };
//! export const transformGetUserInput = (variables: GetUserQueryVariables): GetUserQueryVariables => { ... };
//! ```
//!
//! Output transformers decode JSON text coming off the wire, input
//! transformers encode JSON values in the variables before they are sent.

use tracing::debug;

use super::builder::{AccessPath, Direction, transform_entries, transform_field};
use super::detect::{any_json_fields, has_json_fields};
use crate::config::GeneratorConfig;
use crate::shape::{FieldShape, ShapeField};
use crate::ts::utils::{capitalize_first, sanitize_ts_identifier};
use crate::ts::{
    Emit, ObjectEntry, TsExpr, TsFunction, TsLiteral, TsParam, TsPrimitive, TsStmt, TsType,
};

/// Parameter name of input transformers.
pub const VARIABLES_PARAM: &str = "variables";

/// `transform<Operation><suffix>`
fn transformer_name(operation_name: &str, suffix: &str) -> String {
    let ident = sanitize_ts_identifier(operation_name);
    format!(
        "transform{}{}",
        capitalize_first(ident.trim_start_matches('_')),
        suffix
    )
}

/// Name of the output transformer of an operation.
pub fn output_transformer_name(operation_name: &str) -> String {
    transformer_name(operation_name, "Output")
}

/// Name of the input transformer of an operation.
pub fn input_transformer_name(operation_name: &str) -> String {
    transformer_name(operation_name, "Input")
}

fn variables_param(has_required_variables: bool, variables_type_name: &str) -> TsParam {
    TsParam {
        name: VARIABLES_PARAM.into(),
        ty: Some(TsType::Ref(variables_type_name.into())),
        optional: !has_required_variables,
    }
}

/// Parameter declaration for an operation's variables:
/// `variables: T` when some variable is required, `variables?: T` otherwise.
pub fn signature(has_required_variables: bool, variables_type_name: &str) -> String {
    variables_param(has_required_variables, variables_type_name).emit()
}

/// Emit the output transformer of an operation.
///
/// The transformer pulls `root_field_name` out of the raw result and, when
/// `output_shape` contains JSON fields, rebuilds it with those fields decoded.
/// Otherwise the root field is returned as is.
pub fn emit_output(
    operation_name: &str,
    root_field_name: &str,
    result_type_name: &str,
    output_shape: Option<&FieldShape>,
    config: &GeneratorConfig,
) -> String {
    let root = ShapeField::new(
        root_field_name,
        output_shape
            .cloned()
            .unwrap_or_else(|| FieldShape::Object(Vec::new())),
    );
    let has_json = has_json_fields(output_shape, &config.json_scalar);
    let root_ident = TsExpr::ident(root.name.as_str());

    debug!(
        operation = operation_name,
        root_field = %root.name,
        has_json,
        "Emitting output transformer."
    );

    let value = transform_field(
        &root,
        root_ident.clone(),
        Direction::Decode,
        &config.json_scalar,
        false,
    )
    .unwrap_or(root_ident);

    let docs = if config.docs {
        let summary = if has_json {
            format!("Decodes the JSON-encoded fields of the `{operation_name}` result.")
        } else {
            format!("Extracts the `{}` field from the `{operation_name}` result.", root.name)
        };
        vec![
            summary,
            String::new(),
            format!(
                "@param {} - Raw `{operation_name}` response data",
                config.result_param
            ),
            format!("@returns The `{}` field as `{result_type_name}`", root.name),
        ]
    } else {
        Vec::new()
    };

    TsFunction {
        name: output_transformer_name(operation_name),
        docs,
        params: vec![TsParam {
            name: config.result_param.clone(),
            ty: Some(TsType::Primitive(TsPrimitive::Any)),
            optional: false,
        }],
        return_type: Some(TsType::Ref(result_type_name.into())),
        body: vec![
            TsStmt::Destructure {
                fields: vec![root.name.clone()],
                init: TsExpr::ident(config.result_param.as_str()),
            },
            TsStmt::Return(TsExpr::cast(
                value,
                TsType::Ref(result_type_name.into()),
            )),
        ],
    }
    .emit()
}

/// Emit the input transformer of an operation.
///
/// Without variables the transformer takes nothing and returns `undefined`.
/// Otherwise it returns the variables with every JSON field encoded; variables
/// without JSON fields are carried by the spread.
pub fn emit_input(
    operation_name: &str,
    variables_type_name: &str,
    has_required_variables: bool,
    variables_shape: &[ShapeField],
    config: &GeneratorConfig,
) -> String {
    let name = input_transformer_name(operation_name);

    if variables_shape.is_empty() {
        debug!(operation = operation_name, "Emitting empty input transformer.");
        let docs = if config.docs {
            vec![
                format!("`{operation_name}` takes no variables."),
                String::new(),
                "@returns undefined".to_string(),
            ]
        } else {
            Vec::new()
        };
        return TsFunction {
            name,
            docs,
            params: Vec::new(),
            return_type: Some(TsType::Primitive(TsPrimitive::Undefined)),
            body: vec![TsStmt::Return(TsExpr::Literal(TsLiteral::Undefined))],
        }
        .emit();
    }

    let has_json = any_json_fields(variables_shape, &config.json_scalar);
    debug!(
        operation = operation_name,
        variables = variables_shape.len(),
        has_json,
        "Emitting input transformer."
    );

    let param = TsExpr::ident(VARIABLES_PARAM);
    let value = if has_json {
        let path = if has_required_variables {
            AccessPath::new(param.clone())
        } else {
            AccessPath::safe(param.clone())
        };
        let mut entries = vec![ObjectEntry::Spread(param)];
        entries.extend(transform_entries(
            variables_shape,
            &path,
            Direction::Encode,
            &config.json_scalar,
        ));
        TsExpr::Object(entries)
    } else {
        param
    };

    let docs = if config.docs {
        let summary = if has_json {
            format!("Encodes the JSON fields of the `{operation_name}` variables for the wire.")
        } else {
            format!("Passes the `{operation_name}` variables through unchanged.")
        };
        let requirement = if has_required_variables {
            "required"
        } else {
            "optional"
        };
        vec![
            summary,
            String::new(),
            format!("@param {VARIABLES_PARAM} - `{variables_type_name}` ({requirement})"),
            format!("@returns `{variables_type_name}`"),
        ]
    } else {
        Vec::new()
    };

    TsFunction {
        name,
        docs,
        params: vec![variables_param(has_required_variables, variables_type_name)],
        return_type: Some(TsType::Ref(variables_type_name.into())),
        body: vec![TsStmt::Return(TsExpr::cast(
            value,
            TsType::Ref(variables_type_name.into()),
        ))],
    }
    .emit()
}
