//! LUTC table synthesizer: the catalogue of numeric-generation procedures.
//!
//! Every table is produced by a pure, independently parameterized function —
//! the same procedure serves every variant configuration, so the generation
//! math lives here exactly once. The [`catalogue`] module layers a serde-based
//! manifest on top that selects which procedures run, with which arguments and
//! under which dataset names.

mod catalogue;
mod noise;
mod pitch;
mod poly;
mod wave;

pub use catalogue::{Manifest, TableSpec};
pub use noise::{
    normalization_factors, normalization_offsets, threshold_deviation, OFFSET_UNITY,
};
pub use pitch::{harmonic_pitches, pitch_ratios_coarse, pitch_ratios_fine};
pub use poly::chebyshev_tables;
pub use wave::{exp2_u0_23, sine, sine_i16, triangle_shapes, wavefolder};
