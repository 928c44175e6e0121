//! JSON field transformer generation for react-query client bindings.
//!
//! Some schema scalars travel as JSON-encoded text. For every operation the
//! generator emits two TypeScript functions next to the generated hooks:
//! - an output transformer that decodes those fields in the result
//! - an input transformer that encodes them in the variables
//!
//! The pipeline is:
//! 1. Resolve: the document visitor supplies an [`OperationShape`]
//! 2. Detect: [`transform::has_json_fields`] decides whether anything needs rewriting
//! 3. Build: [`transform::transform_entries`] walks the shape tree into a TypeScript AST
//! 4. Emit: the AST is rendered through the [`ts::Emit`] trait

pub mod config;
pub mod error;
pub mod operation;
pub mod shape;
pub mod transform;
pub mod ts;

pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use operation::{JsonUsage, OperationKind, OperationShape, Transformers, generate_transformers};
pub use shape::{AnnotatedName, FieldShape, ShapeField};
