//! TypeScript AST and emission.
//!
//! Transformer generation builds these nodes; emission is purely mechanical
//! string building through the `Emit` trait.
//!
//! - `types`: TypeScript AST (TsType, TsExpr, TsStmt, TsFunction)
//! - `emit`: AST -> code strings
//! - `utils`: identifier and member-access helpers

mod emit;
mod types;
pub mod utils;

pub use emit::Emit;
pub use types::{
    BinOp, ObjectEntry, TsExpr, TsFunction, TsLiteral, TsParam, TsPrimitive, TsStmt, TsType,
};
