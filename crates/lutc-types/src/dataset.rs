//! The ordered name → value mapping fed to the compiler.

use crate::error::CompileError;
use crate::value::Value;
use crate::Result;

/// An insertion-ordered collection of named values.
///
/// Declaration order in both output documents follows insertion order, so the
/// container is a plain vector rather than a hash map. Names must be unique;
/// inserting a duplicate fails instead of silently overwriting.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    entries: Vec<(String, Value)>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named value, rejecting duplicate names.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Result<()> {
        let name = name.into();
        if self.entries.iter().any(|(n, _)| *n == name) {
            return Err(CompileError::DuplicateName { name });
        }
        self.entries.push((name, value));
        Ok(())
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
