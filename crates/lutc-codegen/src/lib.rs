//! LUTC code generator: compiles a dataset to a C++ header/implementation
//! pair.
//!
//! # Architecture
//!
//! The generator takes an ordered [`lutc_types::Dataset`] and produces two
//! text documents:
//!
//! - the **header** declares one aggregating struct with a member per dataset
//!   entry — scalars fully initialized inline, aggregates declared only;
//! - the **implementation** defines every aggregate out of line, qualified by
//!   the struct name, in dataset order.
//!
//! Both documents are buffered fully in memory; [`CompiledData::write_to`] is
//! the only I/O and stages through temporary files, so a failed run never
//! leaves partial output. Identical dataset and options always produce
//! byte-identical documents.

mod compiler;
mod emit;

pub use compiler::{compile, CompileOptions, CompiledData};
pub use emit::encode;
