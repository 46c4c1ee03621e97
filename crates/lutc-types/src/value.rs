//! The dataset value model and its type descriptors.
//!
//! A dataset entry is a [`Value`]: a scalar (integer of explicit width and
//! signedness, boolean, float, string), a fixed heterogeneous [`Value::Tuple`]
//! or a fixed-length homogeneous [`Value::Seq`]. [`classify`] derives a
//! [`TypeDesc`] from a value's shape; descriptors render directly as the
//! firmware's type names (`s16`, `f`, `Buffer<f, 1024>`, …).
//!
//! The closed enum makes the supported shapes exhaustive: adding a new shape
//! is a compile-time change to every `match` over values, never a runtime
//! lookup failure.

use std::fmt;

use crate::error::CompileError;
use crate::Result;

// ══════════════════════════════════════════════════════════════════════════════
// Value
// ══════════════════════════════════════════════════════════════════════════════

/// A value destined for declaration emission.
///
/// Integer widths are preserved exactly: a value generated as a 16-bit integer
/// is never silently widened. All floating point collapses to the single
/// default-precision [`Value::Float`] kind; table synthesizers that need a
/// narrower representation quantize by construction before building values.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Signed 16-bit integer (`s16`).
    I16(i16),
    /// Signed 32-bit integer (`s32`).
    I32(i32),
    /// Unsigned 32-bit integer (`u32`), used for fixed-point tables.
    U32(u32),
    /// Boolean (`bool`).
    Bool(bool),
    /// Default-precision float (`f`).
    Float(f64),
    /// String literal. Must not contain quote characters.
    Str(String),
    /// Ordered, heterogeneous, fixed-arity tuple.
    Tuple(Vec<Value>),
    /// Ordered, homogeneous, fixed-length sequence. Must be non-empty.
    Seq(Vec<Value>),
}

impl Value {
    /// Whether this value is a bare scalar (emitted inline in the header)
    /// rather than an aggregate (declared in the header, defined out of line).
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Value::Tuple(_) | Value::Seq(_))
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Type descriptors
// ══════════════════════════════════════════════════════════════════════════════

/// The scalar kinds the target dialect distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    I16,
    I32,
    U32,
    Bool,
    Float,
    Str,
}

impl ScalarKind {
    /// The target-dialect type name.
    pub fn type_name(self) -> &'static str {
        match self {
            ScalarKind::I16 => "s16",
            ScalarKind::I32 => "s32",
            ScalarKind::U32 => "u32",
            ScalarKind::Bool => "bool",
            ScalarKind::Float => "f",
            ScalarKind::Str => "string",
        }
    }
}

/// A value's derived type: never stored, always a function of shape.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDesc {
    /// A non-aggregate value.
    Scalar(ScalarKind),
    /// Ordered element descriptors; tuples may be heterogeneous.
    Tuple(Vec<TypeDesc>),
    /// Homogeneous element descriptor and length (≥ 1).
    Seq(Box<TypeDesc>, usize),
}

impl TypeDesc {
    /// Whether this descriptor is a bare scalar.
    pub fn is_scalar(&self) -> bool {
        matches!(self, TypeDesc::Scalar(_))
    }
}

impl fmt::Display for TypeDesc {
    /// Renders the target-dialect type name (`s16`, `tuple<s32, f>`,
    /// `Buffer<f, 1024>`, …).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDesc::Scalar(kind) => f.write_str(kind.type_name()),
            TypeDesc::Tuple(elems) => {
                f.write_str("tuple<")?;
                for (i, elem) in elems.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{elem}")?;
                }
                f.write_str(">")
            }
            TypeDesc::Seq(elem, len) => write!(f, "Buffer<{elem}, {len}>"),
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Classification
// ══════════════════════════════════════════════════════════════════════════════

/// Derive the [`TypeDesc`] for a dataset entry.
///
/// Total over the supported shapes. Fails with [`CompileError::Unsupported`]
/// for an empty sequence or a sequence whose elements do not all share the
/// first element's type; the error names the entry and the offending element
/// path.
pub fn classify(name: &str, value: &Value) -> Result<TypeDesc> {
    classify_at(name, value, name)
}

fn classify_at(name: &str, value: &Value, path: &str) -> Result<TypeDesc> {
    let desc = match value {
        Value::I16(_) => TypeDesc::Scalar(ScalarKind::I16),
        Value::I32(_) => TypeDesc::Scalar(ScalarKind::I32),
        Value::U32(_) => TypeDesc::Scalar(ScalarKind::U32),
        Value::Bool(_) => TypeDesc::Scalar(ScalarKind::Bool),
        Value::Float(_) => TypeDesc::Scalar(ScalarKind::Float),
        Value::Str(_) => TypeDesc::Scalar(ScalarKind::Str),
        Value::Tuple(elems) => {
            let mut descs = Vec::with_capacity(elems.len());
            for (i, elem) in elems.iter().enumerate() {
                descs.push(classify_at(name, elem, &format!("{path}[{i}]"))?);
            }
            TypeDesc::Tuple(descs)
        }
        Value::Seq(elems) => {
            let Some(first) = elems.first() else {
                return Err(CompileError::Unsupported {
                    name: name.to_string(),
                    reason: format!("empty sequence at `{path}`"),
                });
            };
            let elem_desc = classify_at(name, first, &format!("{path}[0]"))?;
            // The first element declares the element type; every other
            // element must match it exactly.
            for (i, elem) in elems.iter().enumerate().skip(1) {
                let desc = classify_at(name, elem, &format!("{path}[{i}]"))?;
                if desc != elem_desc {
                    return Err(CompileError::Unsupported {
                        name: name.to_string(),
                        reason: format!(
                            "mixed sequence at `{path}`: element 0 is {elem_desc}, \
                             element {i} is {desc}"
                        ),
                    });
                }
            }
            TypeDesc::Seq(Box::new(elem_desc), elems.len())
        }
    };
    Ok(desc)
}

// ══════════════════════════════════════════════════════════════════════════════
// Tests
// ══════════════════════════════════════════════════════════════════════════════
