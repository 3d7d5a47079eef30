//! The heightfield generation pipeline.
//!
//! Stages run in a fixed order: noise synthesis, large-hill spacing
//! enforcement, smoothing, a first slope pass, hill-top flattening,
//! flat-zone blending, boundary shaping, ground clamp, and a final slope
//! pass. The final slope pass is the authoritative guarantee; earlier
//! stages may reintroduce violations.

use tracing::debug;

use crate::error::GenerateError;
use crate::grid::ElevationGrid;
use crate::math::smoothstep01;
use crate::noise::signed_noise;
use crate::params::LandscapeParams;
use crate::report::GenerationReport;
use crate::slope::relax_slopes;
use crate::smooth::smooth;
use crate::zones::{apply_boundary_mask, blend_flat_zones, dampen_boundary_peaks};

/// 100 world units to the meter.
const UNITS_PER_METER: f32 = 100.0;

/// Octave mix weights. They sum to 1 so the mixed field stays in [-1, 1].
const WEIGHT_VERY_LARGE: f32 = 0.52;
const WEIGHT_LARGE: f32 = 0.40;
const WEIGHT_SMALL: f32 = 0.08;

/// Plateau remap band: values above the start are eased onto flat hill caps.
const PLATEAU_START: f32 = 0.42;
const PLATEAU_SHOULDER: f32 = 0.78;

/// Factor applied to a large-hill peak crowded by a higher-ranked one:
/// dampened to a shoulder, not erased.
const CROWDED_PEAK_DAMPEN: f32 = 0.58;

/// Iteration bounds for the two slope passes. The first pass is cheap
/// cleanup after smoothing; the final pass must reach convergence.
const FIRST_SLOPE_PASS_BOUND: u32 = 4;
const FINAL_SLOPE_PASS_BOUND: u32 = 16;

/// Generate a landscape heightfield.
///
/// Deterministic: identical arguments produce a bit-identical grid. The
/// returned grid is `size_x * size_y` vertices with `cell_size` world units
/// between neighbors; after a successful call every height is >= 0 and,
/// when slope enforcement is enabled, every adjacent pair satisfies the
/// slope bound.
pub fn generate(
    params: &LandscapeParams,
    size_x: usize,
    size_y: usize,
    cell_size: f32,
) -> Result<ElevationGrid, GenerateError> {
    if size_x < 2 || size_y < 2 {
        return Err(GenerateError::InvalidDimensions { size_x, size_y });
    }
    if !params.flat_terrain {
        if params.hill_amplitude <= 0.0 {
            return Err(GenerateError::InvalidParameters(
                "hill_amplitude must be positive",
            ));
        }
        if params.very_large_scale_m < 10.0
            || params.large_scale_m < 10.0
            || params.medium_scale_m < 10.0
        {
            return Err(GenerateError::InvalidParameters(
                "octave wavelengths must be at least 10 meters",
            ));
        }
    }

    let mut grid = ElevationGrid::zeroed(size_x, size_y);
    if params.flat_terrain {
        debug!("flat terrain requested, skipping synthesis");
        return Ok(grid);
    }

    synthesize(&mut grid, params, cell_size);

    if !params.only_very_large_hills && params.large_hill_min_spacing > 0.0 {
        let dampened = enforce_hill_spacing(&mut grid, params, cell_size);
        debug!(dampened, "large-hill spacing enforced");
    }

    smooth(&mut grid, params.smooth_passes, params.smooth_strength);

    if params.slope_enforcement_enabled() {
        let sweeps = relax_slopes(
            &mut grid,
            params.max_slope_degrees,
            cell_size,
            FIRST_SLOPE_PASS_BOUND,
        );
        debug!(sweeps, "first slope-limit pass");
    }

    flatten_hill_tops(&mut grid);
    blend_flat_zones(&mut grid, params.origin_x, params.origin_y, cell_size);
    dampen_boundary_peaks(&mut grid, params.origin_x, params.origin_y, cell_size);
    apply_boundary_mask(&mut grid, params.origin_x, params.origin_y, cell_size);

    // The ground plane is the lowest point of the world.
    for h in &mut grid.data {
        *h = h.max(0.0);
    }

    if params.slope_enforcement_enabled() {
        let sweeps = relax_slopes(
            &mut grid,
            params.max_slope_degrees,
            cell_size,
            FINAL_SLOPE_PASS_BOUND,
        );
        debug!(sweeps, "final slope-limit pass");
    }

    if tracing::enabled!(tracing::Level::DEBUG) {
        let report = GenerationReport::measure(&grid, cell_size);
        debug!(
            seed = params.seed,
            min = report.min_height,
            max = report.max_height,
            mean = report.mean_height,
            max_slope_deg = report.max_slope_degrees,
            peaks = report.peak_count,
            "generated {size_x}x{size_y} heightfield"
        );
    }

    Ok(grid)
}

/// Synthesis pass: multi-octave value noise, plateau remap, amplitude, and
/// the optional river trench.
fn synthesize(grid: &mut ElevationGrid, params: &LandscapeParams, cell_size: f32) {
    let seed = params.seed;
    let use_small = params.small_octave_enabled();
    let river_half_width = params.river_width_m * 50.0;
    let river_mid_y = params.origin_y + (grid.size_y - 1) as f32 * cell_size * 0.5;

    for y in 0..grid.size_y {
        let wy = params.origin_y + y as f32 * cell_size;
        let ym = wy / UNITS_PER_METER;
        for x in 0..grid.size_x {
            let wx = params.origin_x + x as f32 * cell_size;
            let xm = wx / UNITS_PER_METER;

            let mut h = if params.only_very_large_hills {
                signed_noise(seed, xm, ym, params.very_large_scale_m)
            } else {
                // Distinct seed offsets keep the octaves uncorrelated.
                let mut v = WEIGHT_VERY_LARGE
                    * signed_noise(seed, xm, ym, params.very_large_scale_m)
                    + WEIGHT_LARGE
                        * signed_noise(seed.wrapping_add(1), xm, ym, params.large_scale_m);
                if use_small {
                    v += WEIGHT_SMALL
                        * signed_noise(seed.wrapping_add(3), xm, ym, params.small_scale_m);
                }
                v
            };

            h = plateau_remap(h);
            h *= params.hill_amplitude;

            if params.carve_river_valley && river_half_width > 0.0 {
                let t = ((wy - river_mid_y).abs() / river_half_width).clamp(0.0, 1.0);
                h -= params.river_depth * (1.0 - smoothstep01(t));
            }

            grid.set(x, y, h);
        }
    }
}

/// Remap the upper range onto flat hill caps: values above the start of the
/// band ease up to 1 via smoothstep over the shoulder, so tops are broad
/// and traversable instead of sharp.
fn plateau_remap(v: f32) -> f32 {
    if v <= PLATEAU_START {
        return v;
    }
    let t = ((v - PLATEAU_START) / (PLATEAU_SHOULDER - PLATEAU_START)).clamp(0.0, 1.0);
    PLATEAU_START + smoothstep01(t) * (1.0 - PLATEAU_START)
}

/// Spacing pass: dampen large-hill peaks that crowd a higher-ranked peak.
///
/// Peaks are ranked by descending very-large-octave noise value; the sort is
/// stable, so equal values keep raster-scan order. Greedy and
/// order-sensitive: each peak is compared against every previously ranked
/// peak, dampened or not. Returns the number of dampened peaks.
fn enforce_hill_spacing(
    grid: &mut ElevationGrid,
    params: &LandscapeParams,
    cell_size: f32,
) -> usize {
    let mut vl = ElevationGrid::zeroed(grid.size_x, grid.size_y);
    for y in 0..vl.size_y {
        let ym = (params.origin_y + y as f32 * cell_size) / UNITS_PER_METER;
        for x in 0..vl.size_x {
            let xm = (params.origin_x + x as f32 * cell_size) / UNITS_PER_METER;
            vl.set(x, y, signed_noise(params.seed, xm, ym, params.very_large_scale_m));
        }
    }

    struct Peak {
        idx: usize,
        val: f32,
        wx: f32,
        wy: f32,
    }

    let mut peaks: Vec<Peak> = vl
        .interior_local_maxima()
        .into_iter()
        .map(|(x, y)| Peak {
            idx: vl.idx(x, y),
            val: vl.get(x, y),
            wx: params.origin_x + x as f32 * cell_size,
            wy: params.origin_y + y as f32 * cell_size,
        })
        .collect();
    peaks.sort_by(|a, b| b.val.total_cmp(&a.val));

    let min_spacing_sq = params.large_hill_min_spacing * params.large_hill_min_spacing;
    let mut dampened = 0;
    for i in 0..peaks.len() {
        let p = &peaks[i];
        let too_close = peaks[..i].iter().any(|q| {
            let dx = p.wx - q.wx;
            let dy = p.wy - q.wy;
            dx * dx + dy * dy < min_spacing_sq
        });
        if too_close {
            grid.data[p.idx] *= CROWDED_PEAK_DAMPEN;
            dampened += 1;
        }
    }
    dampened
}

/// Flattening pass: turn each hill top into a small plateau.
///
/// From a snapshot, every interior strict local maximum spreads its height
/// over its 3x3 neighborhood via element-wise max, so overlapping
/// neighborhoods never lower an already-raised vertex.
fn flatten_hill_tops(grid: &mut ElevationGrid) {
    let snapshot = grid.clone();
    for (x, y) in snapshot.interior_local_maxima() {
        let peak = snapshot.get(x, y);
        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                let nx = (x as i32 + dx) as usize;
                let ny = (y as i32 + dy) as usize;
                if peak > grid.get(nx, ny) {
                    grid.set(nx, ny, peak);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slope::slope_bound_holds;

    /// Small centered grid well inside the boundary margin and away from
    /// the flat zones on X.
    fn centered_params(seed: i32) -> (LandscapeParams, usize, usize, f32) {
        let size = 96;
        let cell = 100.0;
        let extent = (size - 1) as f32 * cell;
        let params = LandscapeParams {
            seed,
            origin_x: -extent / 2.0,
            origin_y: -extent / 2.0,
            ..LandscapeParams::default()
        };
        (params, size, size, cell)
    }

    #[test]
    fn test_generation_is_deterministic() {
        let (params, sx, sy, cell) = centered_params(1234);
        let a = generate(&params, sx, sy, cell).unwrap();
        let b = generate(&params, sx, sy, cell).unwrap();
        assert_eq!(a.data.len(), b.data.len());
        for (i, (ha, hb)) in a.as_slice().iter().zip(b.as_slice()).enumerate() {
            assert_eq!(ha.to_bits(), hb.to_bits(), "vertex {i} differs");
        }
    }

    #[test]
    fn test_flat_terrain_short_circuits_validation_and_stages() {
        // Amplitude would be invalid, but flat terrain bypasses everything.
        let params = LandscapeParams {
            flat_terrain: true,
            hill_amplitude: 0.0,
            very_large_scale_m: 1.0,
            ..LandscapeParams::default()
        };
        let grid = generate(&params, 33, 17, 100.0).unwrap();
        assert_eq!(grid.size_x, 33);
        assert_eq!(grid.size_y, 17);
        assert!(grid.as_slice().iter().all(|&h| h == 0.0));
    }

    #[test]
    fn test_heights_never_negative() {
        let (params, sx, sy, cell) = centered_params(99);
        let grid = generate(&params, sx, sy, cell).unwrap();
        assert!(grid.as_slice().iter().all(|&h| h >= 0.0));
        let max = grid.as_slice().iter().cloned().fold(0.0f32, f32::max);
        assert!(max > 0.0, "terrain should not be uniformly flat");
    }

    #[test]
    fn test_slope_bound_enforced() {
        let (params, sx, sy, cell) = centered_params(7);
        let grid = generate(&params, sx, sy, cell).unwrap();
        assert!(
            slope_bound_holds(&grid, params.max_slope_degrees, cell, 1e-3),
            "adjacent deltas must respect tan(max_slope) * cell_size"
        );
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        let params = LandscapeParams::default();
        for (sx, sy) in [(1, 5), (5, 1), (0, 0)] {
            let err = generate(&params, sx, sy, 100.0).unwrap_err();
            assert_eq!(
                err,
                GenerateError::InvalidDimensions { size_x: sx, size_y: sy }
            );
        }
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let zero_amplitude = LandscapeParams {
            hill_amplitude: 0.0,
            ..LandscapeParams::default()
        };
        assert!(matches!(
            generate(&zero_amplitude, 16, 16, 100.0),
            Err(GenerateError::InvalidParameters(_))
        ));

        let tiny_wavelength = LandscapeParams {
            very_large_scale_m: 5.0,
            ..LandscapeParams::default()
        };
        assert!(matches!(
            generate(&tiny_wavelength, 16, 16, 100.0),
            Err(GenerateError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_boundary_flush() {
        // Grid straddling the +X boundary; Y range fully interior.
        let params = LandscapeParams {
            seed: 5,
            origin_x: 48_000.0,
            origin_y: -3_200.0,
            ..LandscapeParams::default()
        };
        let grid = generate(&params, 64, 64, 100.0).unwrap();
        for y in 0..grid.size_y {
            for x in 0..grid.size_x {
                let wx = params.origin_x + x as f32 * 100.0;
                if wx >= crate::zones::WORLD_HALF_EXTENT {
                    assert!(
                        grid.get(x, y).abs() < 1e-3,
                        "vertex at wx={wx} must be flush with the ground plane"
                    );
                }
            }
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let (params_a, sx, sy, cell) = centered_params(1);
        let (params_b, ..) = centered_params(2);
        let a = generate(&params_a, sx, sy, cell).unwrap();
        let b = generate(&params_b, sx, sy, cell).unwrap();
        let differing = a
            .as_slice()
            .iter()
            .zip(b.as_slice())
            .filter(|(x, y)| (**x - **y).abs() > 1e-3)
            .count();
        assert!(
            differing > a.data.len() / 4,
            "seeds 1 and 2 should disagree broadly, only {differing} vertices differ"
        );
    }

    #[test]
    fn test_river_lowers_the_midline() {
        let (base, sx, sy, cell) = centered_params(21);
        let with_river = LandscapeParams {
            carve_river_valley: true,
            ..base.clone()
        };
        let dry = generate(&base, sx, sy, cell).unwrap();
        let wet = generate(&with_river, sx, sy, cell).unwrap();
        let mid = sy / 2;
        let row_sum = |g: &ElevationGrid| -> f32 { (0..sx).map(|x| g.get(x, mid)).sum() };
        assert!(
            row_sum(&wet) < row_sum(&dry),
            "carving a river must lower the midline row overall"
        );
    }

    #[test]
    fn test_spacing_enforcement_dampens_crowded_peaks() {
        // Short very-large wavelength so the small grid holds several peaks;
        // an oversized spacing radius forces all but the top peak down.
        let (mut base, sx, sy, cell) = centered_params(11);
        base.very_large_scale_m = 30.0;
        let crowded = LandscapeParams {
            large_hill_min_spacing: 1.0e6,
            ..base.clone()
        };
        let spaced_off = LandscapeParams {
            large_hill_min_spacing: 0.0,
            ..base.clone()
        };
        let on = generate(&crowded, sx, sy, cell).unwrap();
        let off = generate(&spaced_off, sx, sy, cell).unwrap();
        assert_ne!(on, off, "oversized spacing radius must dampen some peak");
    }

    #[test]
    fn test_only_very_large_hills_ignores_spacing() {
        let (mut base, sx, sy, cell) = centered_params(3);
        base.only_very_large_hills = true;
        let far = LandscapeParams {
            large_hill_min_spacing: 1.0e6,
            ..base.clone()
        };
        let a = generate(&base, sx, sy, cell).unwrap();
        let b = generate(&far, sx, sy, cell).unwrap();
        assert_eq!(a, b, "spacing must be irrelevant in single-octave mode");
    }

    #[test]
    fn test_plateau_remap_shape() {
        assert_eq!(plateau_remap(-0.5), -0.5);
        assert_eq!(plateau_remap(0.42), 0.42);
        assert!((plateau_remap(1.0) - 1.0).abs() < 1e-6);
        // Monotonic over the shoulder band.
        let mut prev = plateau_remap(0.42);
        for i in 1..=40 {
            let v = 0.42 + i as f32 * 0.0145;
            let r = plateau_remap(v);
            assert!(r >= prev, "remap must be monotonic at v={v}");
            prev = r;
        }
    }

    #[test]
    fn test_flatten_hill_tops_builds_plateaus() {
        let mut grid = ElevationGrid::zeroed(7, 7);
        grid.set(3, 3, 50.0);
        grid.set(2, 3, 40.0);
        flatten_hill_tops(&mut grid);
        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                let x = (3 + dx) as usize;
                let y = (3 + dy) as usize;
                assert_eq!(grid.get(x, y), 50.0, "3x3 neighborhood raised to the peak");
            }
        }
        assert_eq!(grid.get(1, 3), 0.0, "outside the neighborhood untouched");
    }
}
