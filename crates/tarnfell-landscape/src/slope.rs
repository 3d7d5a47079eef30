//! Slope-limit relaxation.
//!
//! Gauss-Seidel style sweeps rather than a single-pass filter: a forward
//! raster pass clamps each vertex against its already-visited neighbors,
//! a backward pass covers the remaining directions, and the pair repeats
//! until nothing changes or the iteration bound is hit. A converged grid
//! satisfies the slope bound for every cardinal and diagonal vertex pair.

use crate::grid::ElevationGrid;

const SQRT_2: f32 = std::f32::consts::SQRT_2;

/// Maximum height delta per cell for a slope ceiling in degrees.
///
/// Uses libm so the trig is identical across platforms.
pub(crate) fn max_delta_per_cell(max_slope_degrees: f32, cell_size: f32) -> f32 {
    libm::tanf(max_slope_degrees.to_radians()) * cell_size
}

#[inline]
fn clamp_toward(h: &mut f32, neighbor: f32, delta: f32, changed: &mut bool) {
    let lo = neighbor - delta;
    let hi = neighbor + delta;
    if *h > hi {
        *h = hi;
        *changed = true;
    } else if *h < lo {
        *h = lo;
        *changed = true;
    }
}

/// Relax the grid until every adjacent pair satisfies the slope bound, or
/// `max_iterations` forward+backward sweeps have run. Returns the number of
/// sweeps performed.
pub(crate) fn relax_slopes(
    grid: &mut ElevationGrid,
    max_slope_degrees: f32,
    cell_size: f32,
    max_iterations: u32,
) -> u32 {
    let d_card = max_delta_per_cell(max_slope_degrees, cell_size);
    let d_diag = d_card * SQRT_2;
    let (sx, sy) = (grid.size_x, grid.size_y);

    for iteration in 0..max_iterations {
        let mut changed = false;

        // Forward: each vertex against left, top, top-left, top-right.
        for y in 0..sy {
            for x in 0..sx {
                let mut h = grid.get(x, y);
                if x > 0 {
                    clamp_toward(&mut h, grid.get(x - 1, y), d_card, &mut changed);
                }
                if y > 0 {
                    clamp_toward(&mut h, grid.get(x, y - 1), d_card, &mut changed);
                    if x > 0 {
                        clamp_toward(&mut h, grid.get(x - 1, y - 1), d_diag, &mut changed);
                    }
                    if x + 1 < sx {
                        clamp_toward(&mut h, grid.get(x + 1, y - 1), d_diag, &mut changed);
                    }
                }
                grid.set(x, y, h);
            }
        }

        // Backward: each vertex against right, bottom, bottom-right, bottom-left.
        for y in (0..sy).rev() {
            for x in (0..sx).rev() {
                let mut h = grid.get(x, y);
                if x + 1 < sx {
                    clamp_toward(&mut h, grid.get(x + 1, y), d_card, &mut changed);
                }
                if y + 1 < sy {
                    clamp_toward(&mut h, grid.get(x, y + 1), d_card, &mut changed);
                    if x + 1 < sx {
                        clamp_toward(&mut h, grid.get(x + 1, y + 1), d_diag, &mut changed);
                    }
                    if x > 0 {
                        clamp_toward(&mut h, grid.get(x - 1, y + 1), d_diag, &mut changed);
                    }
                }
                grid.set(x, y, h);
            }
        }

        if !changed {
            return iteration + 1;
        }
    }
    max_iterations
}

/// True when no adjacent pair (cardinal or diagonal) exceeds the slope
/// bound, within `tolerance`.
#[cfg(test)]
pub(crate) fn slope_bound_holds(
    grid: &ElevationGrid,
    max_slope_degrees: f32,
    cell_size: f32,
    tolerance: f32,
) -> bool {
    let d_card = max_delta_per_cell(max_slope_degrees, cell_size) + tolerance;
    let d_diag = max_delta_per_cell(max_slope_degrees, cell_size) * SQRT_2 + tolerance;
    for y in 0..grid.size_y {
        for x in 0..grid.size_x {
            let h = grid.get(x, y);
            if x + 1 < grid.size_x && (h - grid.get(x + 1, y)).abs() > d_card {
                return false;
            }
            if y + 1 < grid.size_y {
                if (h - grid.get(x, y + 1)).abs() > d_card {
                    return false;
                }
                if x + 1 < grid.size_x && (h - grid.get(x + 1, y + 1)).abs() > d_diag {
                    return false;
                }
                if x > 0 && (h - grid.get(x - 1, y + 1)).abs() > d_diag {
                    return false;
                }
            }
        }
    }
    true
}
