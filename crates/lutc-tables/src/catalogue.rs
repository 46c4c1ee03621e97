//! Manifest layer: selects which synthesis procedures run, with which
//! parameters, under which dataset names.
//!
//! The generation functions themselves are pure and independently
//! parameterized; a [`Manifest`] is the external configuration that assembles
//! a concrete [`Dataset`] from them. Manifests round-trip through JSON so a
//! firmware build can keep its table set in a checked-in file.

use serde::{Deserialize, Serialize};

use lutc_types::{CompileError, Dataset, Result, Value};

use crate::noise::{normalization_factors, normalization_offsets};
use crate::pitch::{harmonic_pitches, pitch_ratios_coarse, pitch_ratios_fine};
use crate::poly::chebyshev_tables;
use crate::wave::{exp2_u0_23, sine, sine_i16, triangle_shapes, wavefolder};

// ══════════════════════════════════════════════════════════════════════════════
// Table specifications
// ══════════════════════════════════════════════════════════════════════════════

/// One catalogue entry: a synthesis procedure plus its parameters and the
/// dataset name the result is emitted under.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "table", rename_all = "snake_case")]
pub enum TableSpec {
    /// Equal-tempered ratios over a symmetric coarse semitone range.
    PitchRatiosCoarse { name: String, size: usize },
    /// Sub-semitone interpolation ratios over `[0, 1/12]`.
    PitchRatiosFine { name: String, size: usize },
    /// One sine period at `size + 1` points.
    Sine { name: String, size: usize },
    /// The sine period quantized to 16-bit fixed point.
    SineI16 { name: String, size: usize },
    /// Base-2 exponential in u0.23 fixed point.
    Exp2U023 { name: String, size: usize },
    /// Amplitude-normalization factors for summed noise sources.
    NormalizationFactors {
        name: String,
        max_sources: usize,
        resolution: usize,
        threshold: f64,
    },
    /// Normalization factors rescaled by the source count, minus one, with
    /// the single-source entry pinned to its manual constant.
    NormalizationOffsets {
        name: String,
        max_sources: usize,
        resolution: usize,
        threshold: f64,
    },
    /// Bank of Chebyshev polynomials of the first kind.
    Chebyshev { name: String, tables: usize, size: usize },
    /// Wavefolder transfer curve spanning a number of fold cycles.
    Wavefolder { name: String, size: usize, folds: usize },
    /// The fixed catalogue of triangle waveshaper breakpoint tables.
    TriangleShapes { name: String },
    /// Harmonic-series semitone offsets.
    HarmonicPitches { name: String, count: usize },
}

impl TableSpec {
    /// The dataset name this entry is emitted under.
    pub fn name(&self) -> &str {
        match self {
            TableSpec::PitchRatiosCoarse { name, .. }
            | TableSpec::PitchRatiosFine { name, .. }
            | TableSpec::Sine { name, .. }
            | TableSpec::SineI16 { name, .. }
            | TableSpec::Exp2U023 { name, .. }
            | TableSpec::NormalizationFactors { name, .. }
            | TableSpec::NormalizationOffsets { name, .. }
            | TableSpec::Chebyshev { name, .. }
            | TableSpec::Wavefolder { name, .. }
            | TableSpec::TriangleShapes { name }
            | TableSpec::HarmonicPitches { name, .. } => name,
        }
    }

    /// Run the synthesis procedure and wrap the result as a dataset value.
    pub fn synthesize(&self) -> Result<Value> {
        let value = match self {
            TableSpec::PitchRatiosCoarse { size, .. } => float_seq(pitch_ratios_coarse(*size)),
            TableSpec::PitchRatiosFine { size, .. } => float_seq(pitch_ratios_fine(*size)),
            TableSpec::Sine { size, .. } => float_seq(sine(*size)),
            TableSpec::SineI16 { size, .. } => {
                Value::Seq(sine_i16(*size).into_iter().map(Value::I16).collect())
            }
            TableSpec::Exp2U023 { size, .. } => {
                Value::Seq(exp2_u0_23(*size).into_iter().map(Value::U32).collect())
            }
            TableSpec::NormalizationFactors {
                max_sources,
                resolution,
                threshold,
                ..
            } => {
                self.check_distribution_params(*max_sources, *resolution)?;
                float_seq(normalization_factors(*max_sources, *resolution, *threshold))
            }
            TableSpec::NormalizationOffsets {
                max_sources,
                resolution,
                threshold,
                ..
            } => {
                self.check_distribution_params(*max_sources, *resolution)?;
                float_seq(normalization_offsets(*max_sources, *resolution, *threshold))
            }
            TableSpec::Chebyshev { tables, size, .. } => {
                nested_float_seq(chebyshev_tables(*tables, *size))
            }
            TableSpec::Wavefolder { size, folds, .. } => float_seq(wavefolder(*size, *folds)),
            TableSpec::TriangleShapes { .. } => nested_float_seq(triangle_shapes()),
            TableSpec::HarmonicPitches { count, .. } => float_seq(harmonic_pitches(*count)),
        };
        Ok(value)
    }

    fn check_distribution_params(&self, max_sources: usize, resolution: usize) -> Result<()> {
        if max_sources < 1 || resolution < 2 {
            return Err(CompileError::Unsupported {
                name: self.name().to_string(),
                reason: format!(
                    "degenerate distribution parameters: max_sources={max_sources}, \
                     resolution={resolution}"
                ),
            });
        }
        Ok(())
    }
}

fn float_seq(values: Vec<f64>) -> Value {
    Value::Seq(values.into_iter().map(Value::Float).collect())
}

fn nested_float_seq(rows: Vec<Vec<f64>>) -> Value {
    Value::Seq(rows.into_iter().map(float_seq).collect())
}

// ══════════════════════════════════════════════════════════════════════════════
// Manifest
// ══════════════════════════════════════════════════════════════════════════════

/// A full compiler-run configuration: output identity plus the table set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Name of the aggregating struct in the emitted header.
    #[serde(default = "default_struct_name")]
    pub struct_name: String,
    /// Base name of the emitted header/implementation pair.
    #[serde(default = "default_file_stem")]
    pub file_stem: String,
    /// Tables to synthesize, in emission order.
    pub tables: Vec<TableSpec>,
}

fn default_struct_name() -> String {
    "Data".to_string()
}

fn default_file_stem() -> String {
    "data".to_string()
}

impl Manifest {
    /// The firmware's standard table set.
    pub fn default_catalogue() -> Self {
        Self {
            struct_name: default_struct_name(),
            file_stem: default_file_stem(),
            tables: vec![
                TableSpec::PitchRatiosCoarse {
                    name: "pitch_ratios_high".to_string(),
                    size: 256,
                },
                TableSpec::PitchRatiosFine {
                    name: "pitch_ratios_low".to_string(),
                    size: 256,
                },
                TableSpec::Sine {
                    name: "sine".to_string(),
                    size: 1024,
                },
                TableSpec::SineI16 {
                    name: "short_sine".to_string(),
                    size: 1024,
                },
                TableSpec::Exp2U023 {
                    name: "exp2_u0_23".to_string(),
                    size: 1024,
                },
                TableSpec::NormalizationFactors {
                    name: "normalization_factors".to_string(),
                    max_sources: 16,
                    resolution: 101,
                    threshold: 0.001,
                },
                TableSpec::NormalizationOffsets {
                    name: "normalization_offsets".to_string(),
                    max_sources: 16,
                    resolution: 101,
                    threshold: 0.001,
                },
                TableSpec::Chebyshev {
                    name: "cheby".to_string(),
                    tables: 12,
                    size: 513,
                },
                TableSpec::Wavefolder {
                    name: "fold".to_string(),
                    size: 1025,
                    folds: 6,
                },
                TableSpec::TriangleShapes {
                    name: "triangles".to_string(),
                },
                TableSpec::HarmonicPitches {
                    name: "harmonic_pitches".to_string(),
                    count: 16,
                },
            ],
        }
    }

    /// Synthesize every table into an ordered dataset.
    pub fn synthesize(&self) -> Result<Dataset> {
        let mut dataset = Dataset::new();
        for spec in &self.tables {
            dataset.insert(spec.name(), spec.synthesize()?)?;
        }
        Ok(dataset)
    }
}
