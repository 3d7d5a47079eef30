//! Procedural landscape heightfield generation for Tarnfell run maps.
//!
//! The generator is a pure, seed-reproducible pipeline: multi-octave value
//! noise synthesis, large-hill spacing enforcement, smoothing, slope-limit
//! relaxation, hill-top flattening, flat-zone and boundary blending, and a
//! final quantization step into the engine's 16-bit landscape height format.
//! Identical inputs always produce identical output grids.

mod error;
mod generator;
mod grid;
mod math;
mod noise;
mod params;
mod quantize;
mod report;
mod slope;
mod smooth;
mod zones;

pub mod debug_viz;

pub use error::GenerateError;
pub use generator::generate;
pub use grid::ElevationGrid;
pub use noise::{lattice_hash, signed_noise, value_noise};
pub use params::{LandscapeParams, SizePreset, dimensions_for_preset};
pub use quantize::quantize;
pub use report::GenerationReport;
pub use zones::{BOUNDARY_BLEND_MARGIN, WORLD_HALF_EXTENT};
