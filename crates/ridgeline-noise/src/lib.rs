//! Deterministic 3-D gradient noise and the terrain displacement profile.
//!
//! The terrain shader evaluates simplex noise per vertex on the GPU. This crate
//! is the CPU mirror of that kernel: the same lattice construction with the
//! same constants, so displacement bounds and continuity can be verified
//! without a GPU device.

pub mod octaves;
pub mod simplex;

pub use octaves::{
    OCTAVE_GAIN_SUM, amplitude_for_depth, displacement, frequency_for_depth,
};
pub use simplex::snoise;
