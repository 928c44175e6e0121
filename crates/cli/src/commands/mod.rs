//! `hookgen` subcommands.

pub mod check;
pub mod common;
pub mod generate;
