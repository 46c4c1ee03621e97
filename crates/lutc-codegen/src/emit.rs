//! Literal encoding: renders a value as the exact textual literal for its
//! declared type.
//!
//! Scalar literals carry the dialect's width/signedness suffix (`5_s16`,
//! `0.500000_f`); aggregates render recursively. Sequence literals are
//! double-braced with one element per line and two spaces per indent level —
//! the shape hand-formatted consumers expect.

use std::fmt::Write as _;

use lutc_types::{CompileError, Result, ScalarKind, TypeDesc, Value};

/// Encode `value` against its declared descriptor.
///
/// Side-effect-free and deterministic. `indent` is the nesting level the
/// literal is emitted at (scalars in the header use `0`, out-of-line
/// definitions use `1`). A value/descriptor mismatch is a
/// [`CompileError::Encoding`] naming the entry and the offending element path.
pub fn encode(name: &str, value: &Value, desc: &TypeDesc, indent: usize) -> Result<String> {
    let mut out = String::new();
    encode_into(&mut out, name, value, desc, indent, name)?;
    Ok(out)
}

fn encode_into(
    out: &mut String,
    name: &str,
    value: &Value,
    desc: &TypeDesc,
    indent: usize,
    path: &str,
) -> Result<()> {
    match (value, desc) {
        (Value::I16(v), TypeDesc::Scalar(ScalarKind::I16)) => {
            let _ = write!(out, "{v}_s16");
        }
        (Value::I32(v), TypeDesc::Scalar(ScalarKind::I32)) => {
            let _ = write!(out, "{v}_s32");
        }
        (Value::U32(v), TypeDesc::Scalar(ScalarKind::U32)) => {
            let _ = write!(out, "{v}_u32");
        }
        (Value::Bool(v), TypeDesc::Scalar(ScalarKind::Bool)) => {
            out.push_str(if *v { "true" } else { "false" });
        }
        (Value::Float(v), TypeDesc::Scalar(ScalarKind::Float)) => {
            // Six fractional digits round-trip table data within the
            // consumer's error budget.
            let _ = write!(out, "{v:.6}_f");
        }
        (Value::Str(s), TypeDesc::Scalar(ScalarKind::Str)) => {
            let _ = write!(out, "\"{s}\"");
        }
        (Value::Tuple(elems), TypeDesc::Tuple(descs)) => {
            if elems.len() != descs.len() {
                return Err(mismatch(name, path, desc, value));
            }
            out.push('{');
            for (i, (elem, elem_desc)) in elems.iter().zip(descs).enumerate() {
                encode_into(out, name, elem, elem_desc, indent + 1, &format!("{path}[{i}]"))?;
                out.push(',');
            }
            out.push('}');
        }
        (Value::Seq(elems), TypeDesc::Seq(elem_desc, len)) => {
            if elems.len() != *len {
                return Err(mismatch(name, path, desc, value));
            }
            out.push_str("{{\n");
            for (i, elem) in elems.iter().enumerate() {
                for _ in 0..indent {
                    out.push_str("  ");
                }
                encode_into(out, name, elem, elem_desc, indent + 1, &format!("{path}[{i}]"))?;
                out.push_str(",\n");
            }
            for _ in 0..indent.saturating_sub(1) {
                out.push_str("  ");
            }
            out.push_str("}}");
        }
        _ => return Err(mismatch(name, path, desc, value)),
    }
    Ok(())
}

fn mismatch(name: &str, path: &str, desc: &TypeDesc, value: &Value) -> CompileError {
    CompileError::Encoding {
        name: name.to_string(),
        reason: format!(
            "expected {desc} at `{path}`, found {}",
            shape_name(value)
        ),
    }
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::I16(_) => "s16",
        Value::I32(_) => "s32",
        Value::U32(_) => "u32",
        Value::Bool(_) => "bool",
        Value::Float(_) => "f",
        Value::Str(_) => "string",
        Value::Tuple(_) => "tuple",
        Value::Seq(_) => "sequence",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lutc_types::classify;

    fn encode_classified(name: &str, value: &Value, indent: usize) -> String {
        let desc = classify(name, value).unwrap();
        encode(name, value, &desc, indent).unwrap()
    }

    #[test]
    fn boolean_literals_use_the_dialect_tokens() {
        assert_eq!(encode_classified("b", &Value::Bool(true), 0), "true");
        assert_eq!(encode_classified("b", &Value::Bool(false), 0), "false");
    }

    #[test]
    fn integer_literals_carry_width_suffixes() {
        assert_eq!(encode_classified("i", &Value::I16(5), 0), "5_s16");
        assert_eq!(encode_classified("i", &Value::I16(-5), 0), "-5_s16");
        assert_eq!(encode_classified("i", &Value::I32(70000), 0), "70000_s32");
        assert_eq!(encode_classified("i", &Value::U32(8388608), 0), "8388608_u32");
    }

    #[test]
    fn float_literals_are_fixed_six_digit() {
        assert_eq!(encode_classified("x", &Value::Float(0.5), 0), "0.500000_f");
        assert_eq!(encode_classified("x", &Value::Float(-1.0), 0), "-1.000000_f");
        assert_eq!(
            encode_classified("x", &Value::Float(2f64.powf(1.0 / 12.0)), 0),
            "1.059463_f"
        );
    }

    #[test]
    fn float_literals_round_trip_to_declared_precision() {
        for v in [0.0, 0.5, -1.5, 0.123456, 123.654321] {
            let text = encode_classified("x", &Value::Float(v), 0);
            let parsed: f64 = text.trim_end_matches("_f").parse().unwrap();
            assert!((parsed - v).abs() < 5e-7);
        }
    }

    #[test]
    fn string_literals_are_quoted_verbatim() {
        assert_eq!(
            encode_classified("s", &Value::Str("hello".to_string()), 0),
            "\"hello\""
        );
    }

    #[test]
    fn tuple_literal_is_single_line() {
        let value = Value::Tuple(vec![Value::I32(1), Value::Float(2.0)]);
        assert_eq!(encode_classified("pair", &value, 0), "{1_s32,2.000000_f,}");
    }

    #[test]
    fn sequence_literal_nests_with_two_space_indents() {
        let value = Value::Seq(vec![Value::Float(0.0), Value::Float(-1.5)]);
        assert_eq!(
            encode_classified("t", &value, 1),
            "{{\n  0.000000_f,\n  -1.500000_f,\n}}"
        );
    }

    #[test]
    fn nested_sequence_literal_indents_each_level() {
        let value = Value::Seq(vec![
            Value::Seq(vec![Value::Float(1.0)]),
            Value::Seq(vec![Value::Float(-1.0)]),
        ]);
        assert_eq!(
            encode_classified("grid", &value, 1),
            "{{\n  {{\n    1.000000_f,\n  }},\n  {{\n    -1.000000_f,\n  }},\n}}"
        );
    }

    #[test]
    fn descriptor_mismatch_is_an_encoding_error_with_path() {
        let desc = classify("t", &Value::Seq(vec![Value::Float(0.0); 2])).unwrap();
        let crooked = Value::Seq(vec![Value::Float(0.0), Value::I32(1)]);
        let err = encode("t", &crooked, &desc, 1).unwrap_err();
        match err {
            CompileError::Encoding { name, reason } => {
                assert_eq!(name, "t");
                assert!(reason.contains("t[1]"), "reason: {reason}");
                assert!(reason.contains("expected f"), "reason: {reason}");
            }
            other => panic!("expected Encoding, got {other:?}"),
        }
    }

    #[test]
    fn length_mismatch_is_an_encoding_error() {
        let desc = classify("t", &Value::Seq(vec![Value::Float(0.0); 3])).unwrap();
        let short = Value::Seq(vec![Value::Float(0.0); 2]);
        let err = encode("t", &short, &desc, 1).unwrap_err();
        assert!(matches!(err, CompileError::Encoding { .. }));
    }
}
