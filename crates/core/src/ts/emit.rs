//! TypeScript code emission via the Emit trait.
//!
//! Each AST type implements `Emit`. Object literals are the only nodes that
//! break across lines, so expressions carry an indentation level down to them
//! through `emit_indented`.

use super::types::{
    BinOp, ObjectEntry, TsExpr, TsFunction, TsLiteral, TsParam, TsPrimitive, TsStmt, TsType,
};
use super::utils::{format_member_access, quote_if_needed};

/// Trait for emitting TypeScript code from AST nodes.
pub trait Emit {
    /// Convert the AST node to its TypeScript string representation.
    fn emit(&self) -> String;
}

fn indent_prefix(indent: usize) -> String {
    "  ".repeat(indent)
}

// =============================================================================
// Types
// =============================================================================

impl Emit for TsPrimitive {
    fn emit(&self) -> String {
        match self {
            TsPrimitive::Any => "any".to_string(),
            TsPrimitive::Undefined => "undefined".to_string(),
        }
    }
}

impl Emit for TsType {
    fn emit(&self) -> String {
        match self {
            TsType::Primitive(p) => p.emit(),
            TsType::Ref(name) => name.clone(),
        }
    }
}

impl Emit for TsLiteral {
    fn emit(&self) -> String {
        match self {
            TsLiteral::Null => "null".to_string(),
            TsLiteral::Undefined => "undefined".to_string(),
        }
    }
}

// =============================================================================
// Expressions
// =============================================================================

impl Emit for BinOp {
    fn emit(&self) -> String {
        match self {
            BinOp::LooseEqual => "==".to_string(),
        }
    }
}

impl Emit for TsExpr {
    fn emit(&self) -> String {
        self.emit_indented(0)
    }
}

impl TsExpr {
    /// Emit with the indentation level of the line the expression starts on
    /// (2 spaces per level). Only object literals span multiple lines.
    pub fn emit_indented(&self, indent: usize) -> String {
        match self {
            TsExpr::Ident(name) => name.clone(),
            TsExpr::Literal(lit) => lit.emit(),
            TsExpr::Call { callee, args } => {
                let args_str = args
                    .iter()
                    .map(|a| a.emit_indented(indent))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}({})", callee.emit_indented(indent), args_str)
            }
            TsExpr::Arrow { params, body } => {
                let params_str = params.iter().map(|p| p.emit()).collect::<Vec<_>>().join(", ");
                let body_str = body.emit_indented(indent);
                // An object literal body must be parenthesized or it parses as a block
                if matches!(**body, TsExpr::Object(_)) {
                    format!("({params_str}) => ({body_str})")
                } else {
                    format!("({params_str}) => {body_str}")
                }
            }
            TsExpr::Object(entries) => {
                if entries.is_empty() {
                    return "{}".to_string();
                }
                let inner = indent_prefix(indent + 1);
                let mut output = String::from("{\n");
                for entry in entries {
                    output.push_str(&inner);
                    output.push_str(&entry.emit_indented(indent + 1));
                    output.push_str(",\n");
                }
                output.push_str(&indent_prefix(indent));
                output.push('}');
                output
            }
            TsExpr::Member { object, prop } => {
                format_member_access(&object.emit_indented(indent), prop, false)
            }
            TsExpr::OptionalMember { object, prop } => {
                format_member_access(&object.emit_indented(indent), prop, true)
            }
            TsExpr::BinOp { left, op, right } => {
                format!(
                    "{} {} {}",
                    left.emit_indented(indent),
                    op.emit(),
                    right.emit_indented(indent)
                )
            }
            TsExpr::Ternary {
                cond,
                then_expr,
                else_expr,
            } => {
                format!(
                    "{} ? {} : {}",
                    cond.emit_indented(indent),
                    then_expr.emit_indented(indent),
                    else_expr.emit_indented(indent)
                )
            }
            TsExpr::Cast { expr, ty } => {
                let expr_str = expr.emit_indented(indent);
                if matches!(
                    **expr,
                    TsExpr::Ternary { .. } | TsExpr::BinOp { .. } | TsExpr::Arrow { .. }
                ) {
                    format!("({}) as {}", expr_str, ty.emit())
                } else {
                    format!("{} as {}", expr_str, ty.emit())
                }
            }
        }
    }
}

impl Emit for ObjectEntry {
    fn emit(&self) -> String {
        self.emit_indented(0)
    }
}

impl ObjectEntry {
    /// Emit as an entry sitting on a line with the given indentation level.
    pub fn emit_indented(&self, indent: usize) -> String {
        match self {
            ObjectEntry::Spread(expr) => format!("...{}", expr.emit_indented(indent)),
            ObjectEntry::Prop(key, value) => {
                format!("{}: {}", quote_if_needed(key), value.emit_indented(indent))
            }
        }
    }
}

impl Emit for TsParam {
    fn emit(&self) -> String {
        let opt = if self.optional { "?" } else { "" };
        match &self.ty {
            Some(ty) => format!("{}{}: {}", self.name, opt, ty.emit()),
            None => format!("{}{}", self.name, opt),
        }
    }
}

// =============================================================================
// Statements
// =============================================================================

impl Emit for TsStmt {
    fn emit(&self) -> String {
        self.emit_indented(1)
    }
}

impl TsStmt {
    /// Emit with specified indentation level (2 spaces per level)
    pub fn emit_indented(&self, indent: usize) -> String {
        let prefix = indent_prefix(indent);
        match self {
            TsStmt::Destructure { fields, init } => {
                format!(
                    "{}const {{ {} }} = {};\n",
                    prefix,
                    fields.join(", "),
                    init.emit_indented(indent)
                )
            }
            TsStmt::Return(expr) => {
                format!("{}return {};\n", prefix, expr.emit_indented(indent))
            }
        }
    }
}

// =============================================================================
// Functions
// =============================================================================

impl Emit for TsFunction {
    fn emit(&self) -> String {
        let mut output = String::new();

        if !self.docs.is_empty() {
            output.push_str("/**\n");
            for line in &self.docs {
                if line.is_empty() {
                    output.push_str(" *\n");
                } else {
                    output.push_str(&format!(" * {line}\n"));
                }
            }
            output.push_str(" */\n");
        }

        let params_str = self.params.iter().map(|p| p.emit()).collect::<Vec<_>>().join(", ");
        let return_type_str = self
            .return_type
            .as_ref()
            .map(|t| format!(": {}", t.emit()))
            .unwrap_or_default();

        output.push_str(&format!(
            "export const {} = ({}){}",
            self.name, params_str, return_type_str
        ));
        if self.body.is_empty() {
            output.push_str(" => {};\n");
        } else {
            output.push_str(" => {\n");
            for stmt in &self.body {
                output.push_str(&stmt.emit_indented(1));
            }
            output.push_str("};\n");
        }

        output
    }
}

// =============================================================================
// Tests
// =============================================================================
