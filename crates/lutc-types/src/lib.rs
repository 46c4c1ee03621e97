//! Shared types for the LUTC table compiler.
//!
//! This crate defines the value model (the runtime shapes a dataset entry can
//! take), the type descriptors derived from those shapes, the ordered dataset
//! container, and the error taxonomy used across all compiler stages.

mod dataset;
mod error;
mod value;

pub use dataset::Dataset;
pub use error::CompileError;
pub use value::{classify, ScalarKind, TypeDesc, Value};

/// Result type used throughout the LUTC compiler.
pub type Result<T> = std::result::Result<T, CompileError>;
