//! Compiler error types.
//!
//! Every error is fatal for the run: the compiler either produces both output
//! documents or none. Each variant names the offending dataset entry so a
//! failure is actionable without re-running with added instrumentation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while compiling a dataset.
#[derive(Debug, Error)]
pub enum CompileError {
    /// A value's runtime shape has no classification rule.
    #[error("unsupported type for `{name}`: {reason}")]
    Unsupported {
        /// Dataset entry name.
        name: String,
        /// What was wrong, including the element path for nested aggregates.
        reason: String,
    },

    /// A classified type has no literal-rendering rule, or an aggregate's
    /// declared element type is internally inconsistent.
    #[error("cannot encode `{name}`: {reason}")]
    Encoding {
        /// Dataset entry name.
        name: String,
        /// What was wrong, including the element path for nested aggregates.
        reason: String,
    },

    /// Two dataset entries share a name. Declaration order is significant, so
    /// a silent overwrite would corrupt the emitted documents.
    #[error("duplicate dataset entry `{name}`")]
    DuplicateName { name: String },

    /// An output path was not writable.
    #[error("failed to write `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
