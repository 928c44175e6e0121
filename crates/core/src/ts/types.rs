//! TypeScript IR types for transformer generation.
//!
//! This module defines the subset of TypeScript the generator needs:
//! - TsType: Types in parameter and return position
//! - TsExpr: Expressions (member access, calls, arrows, object literals, etc.)
//! - TsStmt / TsFunction: Function bodies and exported arrow functions

/// TypeScript type representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    /// Primitive types: any, undefined
    Primitive(TsPrimitive),
    /// Named type reference: "GetUserQuery"
    Ref(String),
}

/// TypeScript primitive types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsPrimitive {
    /// `any`
    Any,
    /// `undefined`
    Undefined,
}

/// TypeScript literal values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsLiteral {
    /// `null`
    Null,
    /// `undefined`
    Undefined,
}

/// TypeScript expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsExpr {
    /// Identifier: foo
    Ident(String),
    /// Literal value: null, undefined
    Literal(TsLiteral),
    /// Function call: foo(a, b)
    Call {
        /// Called expression
        callee: Box<TsExpr>,
        /// Call arguments
        args: Vec<TsExpr>,
    },
    /// Arrow function: (x) => x.foo
    Arrow {
        /// Arrow parameters
        params: Vec<TsParam>,
        /// Expression body
        body: Box<TsExpr>,
    },
    /// Object literal: { ...base, a: 1 }
    Object(Vec<ObjectEntry>),
    /// Member access: foo.bar
    Member {
        /// Accessed object
        object: Box<TsExpr>,
        /// Property name
        prop: String,
    },
    /// Optional chaining member access: foo?.bar
    OptionalMember {
        /// Accessed object
        object: Box<TsExpr>,
        /// Property name
        prop: String,
    },
    /// Binary comparison: a == null
    BinOp {
        /// Left operand
        left: Box<TsExpr>,
        /// Operator
        op: BinOp,
        /// Right operand
        right: Box<TsExpr>,
    },
    /// Ternary/conditional: cond ? a : b
    Ternary {
        /// Condition
        cond: Box<TsExpr>,
        /// Value when the condition holds
        then_expr: Box<TsExpr>,
        /// Value otherwise
        else_expr: Box<TsExpr>,
    },
    /// Type cast: expr as Type
    Cast {
        /// Cast expression
        expr: Box<TsExpr>,
        /// Target type
        ty: TsType,
    },
}

/// Entry of an object literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectEntry {
    /// Spread: ...options
    Spread(TsExpr),
    /// Property: key: value
    Prop(String, TsExpr),
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// `==`, matches both null and undefined when compared against null
    LooseEqual,
}

/// Function parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsParam {
    /// Parameter name
    pub name: String,
    /// Declared type, if any
    pub ty: Option<TsType>,
    /// Whether the parameter is declared with `?`
    pub optional: bool,
}

/// Statement in a function body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsStmt {
    /// Object destructuring: const { a, b } = init;
    Destructure {
        /// Destructured property names
        fields: Vec<String>,
        /// Destructured value
        init: TsExpr,
    },
    /// Return statement
    Return(TsExpr),
}

/// Exported arrow function with an optional JSDoc header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsFunction {
    /// Binding name
    pub name: String,
    /// JSDoc lines, emitted without the leading ` * `
    pub docs: Vec<String>,
    /// Parameters
    pub params: Vec<TsParam>,
    /// Declared return type
    pub return_type: Option<TsType>,
    /// Body statements
    pub body: Vec<TsStmt>,
}

impl TsExpr {
    /// Shorthand for an identifier expression.
    pub fn ident(name: impl Into<String>) -> Self {
        TsExpr::Ident(name.into())
    }

    /// `object.prop`, or `object?.prop` when `optional` is set.
    pub fn member(object: TsExpr, prop: impl Into<String>, optional: bool) -> Self {
        let object = Box::new(object);
        let prop = prop.into();
        if optional {
            TsExpr::OptionalMember { object, prop }
        } else {
            TsExpr::Member { object, prop }
        }
    }

    /// `callee(args...)`
    pub fn call(callee: TsExpr, args: Vec<TsExpr>) -> Self {
        TsExpr::Call {
            callee: Box::new(callee),
            args,
        }
    }

    /// `value == null ? value : then_expr`
    ///
    /// Propagates both `null` and `undefined` unchanged.
    pub fn unless_nullish(value: TsExpr, then_expr: TsExpr) -> Self {
        TsExpr::Ternary {
            cond: Box::new(TsExpr::BinOp {
                left: Box::new(value.clone()),
                op: BinOp::LooseEqual,
                right: Box::new(TsExpr::Literal(TsLiteral::Null)),
            }),
            then_expr: Box::new(value),
            else_expr: Box::new(then_expr),
        }
    }

    /// `expr as ty`
    pub fn cast(expr: TsExpr, ty: TsType) -> Self {
        TsExpr::Cast {
            expr: Box::new(expr),
            ty,
        }
    }
}
