//! JSON field transformers.
//!
//! - `detect`: does a shape tree hold a JSON leaf anywhere
//! - `builder`: recursive override entries for a shape tree
//! - `emitter`: complete output/input transformer functions

mod builder;
mod detect;
mod emitter;

pub use builder::{AccessPath, Direction, build_transform, transform_entries};
pub use detect::{any_json_fields, has_json_fields};
pub use emitter::{
    VARIABLES_PARAM, emit_input, emit_output, input_transformer_name, output_transformer_name,
    signature,
};
