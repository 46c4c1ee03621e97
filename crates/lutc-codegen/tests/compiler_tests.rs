//! Integration tests for the dataset compiler.
//!
//! Tests validate:
//! - Golden header/implementation text for a small mixed dataset
//! - Scalar/aggregate partitioning and declaration order
//! - Deterministic output (same dataset → same bytes)
//! - Fail-fast behavior: a bad entry aborts with no output on disk
//! - Configuration threading (struct name, file stem)

use lutc_codegen::{compile, CompileOptions, CompiledData};
use lutc_tables::Manifest;
use lutc_types::{CompileError, Dataset, Value};

// ══════════════════════════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════════════════════════

/// A small dataset covering every scalar kind plus both aggregate shapes.
fn mixed_dataset() -> Dataset {
    let mut data = Dataset::new();
    data.insert("version", Value::Str("1.0".to_string())).unwrap();
    data.insert("enabled", Value::Bool(true)).unwrap();
    data.insert("offset", Value::I16(5)).unwrap();
    data.insert("count", Value::I32(-3)).unwrap();
    data.insert("scale", Value::Float(0.5)).unwrap();
    data.insert(
        "window",
        Value::Seq(vec![Value::Float(0.0), Value::Float(-1.5)]),
    )
    .unwrap();
    data.insert(
        "pair",
        Value::Tuple(vec![Value::I32(1), Value::Float(2.0)]),
    )
    .unwrap();
    data
}

fn compile_mixed() -> CompiledData {
    compile(&mixed_dataset(), &CompileOptions::default())
        .unwrap_or_else(|e| panic!("compile failed: {e}"))
}

// ══════════════════════════════════════════════════════════════════════════════
// Golden documents
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn header_matches_golden_text() {
    let expected = "\
#include \"numtypes.hh\"
#include \"buffer.hh\"

#pragma once

using namespace std;

struct Data {
  static constexpr string version = \"1.0\";
  static constexpr bool enabled = true;
  static constexpr s16 offset = 5_s16;
  static constexpr s32 count = -3_s32;
  static constexpr f scale = 0.500000_f;
  static const Buffer<f, 2> window;
  static const tuple<s32, f> pair;
};
";
    assert_eq!(compile_mixed().header, expected);
}

#[test]
fn implementation_matches_golden_text() {
    let expected = "\
#include \"data.hh\"

using namespace std;

/* window */
const Buffer<f, 2> Data::window = {{
  0.000000_f,
  -1.500000_f,
}};

/* pair */
const tuple<s32, f> Data::pair = {1_s32,2.000000_f,};

";
    assert_eq!(compile_mixed().implementation, expected);
}

// ══════════════════════════════════════════════════════════════════════════════
// Partitioning & ordering
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn scalars_are_defined_only_in_the_header() {
    let compiled = compile_mixed();
    assert!(compiled.header.contains("static constexpr f scale = 0.500000_f;"));
    assert!(!compiled.implementation.contains("scale"));
}

#[test]
fn aggregates_are_declared_in_header_and_defined_once() {
    let compiled = compile_mixed();
    assert!(compiled.header.contains("static const Buffer<f, 2> window;"));
    assert!(!compiled.header.contains("window = "));
    assert_eq!(compiled.implementation.matches("Data::window").count(), 1);
}

#[test]
fn documents_follow_insertion_order() {
    let compiled = compile_mixed();
    let version = compiled.header.find("version").unwrap();
    let window = compiled.header.find("window").unwrap();
    let pair = compiled.header.find(" pair").unwrap();
    assert!(version < window && window < pair);

    let window_def = compiled.implementation.find("Data::window").unwrap();
    let pair_def = compiled.implementation.find("Data::pair").unwrap();
    assert!(window_def < pair_def);
}

// ══════════════════════════════════════════════════════════════════════════════
// Determinism
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn repeated_runs_are_byte_identical() {
    let first = compile_mixed();
    for _ in 0..10 {
        let again = compile_mixed();
        assert_eq!(again.header, first.header);
        assert_eq!(again.implementation, first.implementation);
    }
}

#[test]
fn full_catalogue_is_deterministic() {
    let options = CompileOptions::default();
    let first = compile(&Manifest::default_catalogue().synthesize().unwrap(), &options).unwrap();
    let again = compile(&Manifest::default_catalogue().synthesize().unwrap(), &options).unwrap();
    assert_eq!(first.header, again.header);
    assert_eq!(first.implementation, again.implementation);
}

// ══════════════════════════════════════════════════════════════════════════════
// Failure policy
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn empty_sequence_aborts_the_run() {
    let mut data = Dataset::new();
    data.insert("good", Value::Float(1.0)).unwrap();
    data.insert("bad", Value::Seq(vec![])).unwrap();
    let err = compile(&data, &CompileOptions::default()).unwrap_err();
    assert!(matches!(err, CompileError::Unsupported { name, .. } if name == "bad"));
}

#[test]
fn failed_compile_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut data = Dataset::new();
    data.insert("bad", Value::Seq(vec![Value::Float(0.0), Value::Bool(true)]))
        .unwrap();
    assert!(compile(&data, &CompileOptions::default()).is_err());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn unwritable_directory_is_an_io_error() {
    let compiled = compile_mixed();
    let missing = std::path::Path::new("/nonexistent-lutc-output");
    let err = compiled.write_to(missing).unwrap_err();
    assert!(matches!(err, CompileError::Io { .. }));
}

// ══════════════════════════════════════════════════════════════════════════════
// Output files & configuration
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn write_to_emits_the_named_pair() {
    let dir = tempfile::tempdir().unwrap();
    let compiled = compile_mixed();
    let (header_path, impl_path) = compiled.write_to(dir.path()).unwrap();
    assert_eq!(header_path.file_name().unwrap(), "data.hh");
    assert_eq!(impl_path.file_name().unwrap(), "data.cc");
    assert_eq!(std::fs::read_to_string(&header_path).unwrap(), compiled.header);
    assert_eq!(
        std::fs::read_to_string(&impl_path).unwrap(),
        compiled.implementation
    );
    // No temporary siblings left behind.
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
}

#[test]
fn options_rename_struct_and_files() {
    let options = CompileOptions::new("WavetableBank", "wavetables");
    let compiled = compile(&mixed_dataset(), &options).unwrap();
    assert!(compiled.header.contains("struct WavetableBank {"));
    assert!(compiled.implementation.starts_with("#include \"wavetables.hh\"\n"));
    assert!(compiled.implementation.contains("WavetableBank::window"));
    assert_eq!(compiled.header_file_name(), "wavetables.hh");
    assert_eq!(compiled.implementation_file_name(), "wavetables.cc");

    // Two differently-configured runs coexist without shared state.
    let default_run = compile_mixed();
    assert!(default_run.header.contains("struct Data {"));
}
