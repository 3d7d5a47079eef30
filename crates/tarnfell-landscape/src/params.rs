//! Generation parameters and landscape size presets.

use serde::{Deserialize, Serialize};

/// Preset for the generated landscape's vertex dimensions.
///
/// All presets satisfy `(size - 1) % 63 == 0`, the tiling constraint of the
/// engine-side landscape importer (section size 63, one section per
/// component).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizePreset {
    /// ~1 km x 1 km: 505x505 vertices (8x8 components).
    Small,
    /// ~2-4 km: 1009x1009 vertices (16x16 components).
    Large,
    /// The main run map. Same dimensions as [`SizePreset::Large`].
    MainMap,
}

impl SizePreset {
    /// Parse a preset from a case-insensitive CLI-style name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "small" => Some(Self::Small),
            "large" => Some(Self::Large),
            "mainmap" | "main-map" | "main_map" => Some(Self::MainMap),
            _ => None,
        }
    }
}

/// Vertex dimensions `(size_x, size_y)` for a size preset.
pub fn dimensions_for_preset(preset: SizePreset) -> (usize, usize) {
    match preset {
        SizePreset::Small => (8 * 63 + 1, 8 * 63 + 1),
        SizePreset::Large | SizePreset::MainMap => (16 * 63 + 1, 16 * 63 + 1),
    }
}

/// Parameters for procedural rolling-hills landscape generation.
///
/// Immutable per generation call; the same parameter set with the same grid
/// dimensions and cell size always produces the same terrain. Distances are
/// in world units (100 units = 1 meter) unless the field name says meters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandscapeParams {
    /// Drives all pseudo-random sampling.
    pub seed: i32,
    /// Max hill height in world units. The slope limiter keeps the result
    /// climbable regardless of amplitude.
    pub hill_amplitude: f32,
    /// Very large hills: noise wavelength in meters. ~220 gives roughly
    /// three very wide hills inside the playable area.
    pub very_large_scale_m: f32,
    /// Large hills: wavelength in meters. ~72 gives a handful of wide,
    /// climbable hills.
    pub large_scale_m: f32,
    /// Medium detail wavelength in meters. Validated but currently unmixed;
    /// kept so tuned configs round-trip.
    pub medium_scale_m: f32,
    /// Fine-detail octave wavelength in meters. Below 1 the octave is
    /// disabled.
    pub small_scale_m: f32,
    /// Bypass synthesis entirely and return an all-zero grid.
    pub flat_terrain: bool,
    /// Restrict synthesis to the single sparse very-large octave.
    pub only_very_large_hills: bool,
    /// Carve a linear trench along X, centered on the grid's Y midline.
    pub carve_river_valley: bool,
    /// River width in meters (trench half-width is `width * 50` units).
    pub river_width_m: f32,
    /// River depth in world units at the trench center.
    pub river_depth: f32,
    /// Box-blur passes after synthesis. Clamped to `[1, 10]`.
    pub smooth_passes: i32,
    /// Blend factor of each blur pass. Clamped to `[0.1, 1.0]`.
    pub smooth_strength: f32,
    /// Hard ceiling on local slope in degrees. Values outside `(0, 90)`
    /// disable enforcement.
    pub max_slope_degrees: f32,
    /// Minimum planar distance between large-hill peaks in world units;
    /// closer lower-ranked peaks are dampened to shoulders. Zero or
    /// negative disables the pass.
    pub large_hill_min_spacing: f32,
    /// World X of landscape vertex (0, 0). With the 1009-vertex main map at
    /// 100 units per quad, -50400 centers the map on the world origin.
    pub origin_x: f32,
    /// World Y of landscape vertex (0, 0).
    pub origin_y: f32,
    /// Output grid dimensions.
    pub size_preset: SizePreset,
}

impl Default for LandscapeParams {
    fn default() -> Self {
        Self {
            seed: 0,
            hill_amplitude: 3465.0,
            very_large_scale_m: 220.0,
            large_scale_m: 72.0,
            medium_scale_m: 22.0,
            small_scale_m: 18.0,
            flat_terrain: false,
            only_very_large_hills: false,
            carve_river_valley: false,
            river_width_m: 80.0,
            river_depth: 80.0,
            smooth_passes: 1,
            smooth_strength: 0.2,
            max_slope_degrees: 34.0,
            large_hill_min_spacing: 2800.0,
            origin_x: -50400.0,
            origin_y: -50400.0,
            size_preset: SizePreset::MainMap,
        }
    }
}

impl LandscapeParams {
    /// Whether the fine-detail octave participates in synthesis.
    pub fn small_octave_enabled(&self) -> bool {
        self.small_scale_m >= 1.0
    }

    /// Whether slope-limit relaxation runs at all.
    pub fn slope_enforcement_enabled(&self) -> bool {
        self.max_slope_degrees > 0.0 && self.max_slope_degrees < 90.0
    }
}
