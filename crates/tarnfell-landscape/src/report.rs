//! Diagnostic summary of a generated heightfield.
//!
//! Observability only: nothing here feeds back into generation.

use crate::grid::ElevationGrid;

/// Summary statistics for a generated grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationReport {
    /// Lowest vertex height in world units.
    pub min_height: f32,
    /// Highest vertex height in world units.
    pub max_height: f32,
    /// Mean vertex height in world units.
    pub mean_height: f32,
    /// Steepest slope between any adjacent vertex pair, in degrees.
    pub max_slope_degrees: f32,
    /// Number of interior strict local maxima (distinct hill tops).
    pub peak_count: usize,
}

impl GenerationReport {
    /// Measure a grid. `cell_size` is the world distance between adjacent
    /// vertices along an axis.
    pub fn measure(grid: &ElevationGrid, cell_size: f32) -> Self {
        let mut min_height = f32::INFINITY;
        let mut max_height = f32::NEG_INFINITY;
        let mut sum = 0.0f64;
        for &h in grid.as_slice() {
            min_height = min_height.min(h);
            max_height = max_height.max(h);
            sum += h as f64;
        }
        let count = grid.as_slice().len().max(1);

        let diag = cell_size * std::f32::consts::SQRT_2;
        let mut steepest = 0.0f32;
        for y in 0..grid.size_y {
            for x in 0..grid.size_x {
                let h = grid.get(x, y);
                if x + 1 < grid.size_x {
                    steepest = steepest.max((h - grid.get(x + 1, y)).abs() / cell_size);
                }
                if y + 1 < grid.size_y {
                    steepest = steepest.max((h - grid.get(x, y + 1)).abs() / cell_size);
                    if x + 1 < grid.size_x {
                        steepest = steepest.max((h - grid.get(x + 1, y + 1)).abs() / diag);
                    }
                    if x > 0 {
                        steepest = steepest.max((h - grid.get(x - 1, y + 1)).abs() / diag);
                    }
                }
            }
        }

        Self {
            min_height,
            max_height,
            mean_height: (sum / count as f64) as f32,
            max_slope_degrees: libm::atanf(steepest).to_degrees(),
            peak_count: grid.interior_local_maxima().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_grid_report() {
        let grid = ElevationGrid::zeroed(8, 8);
        let report = GenerationReport::measure(&grid, 100.0);
        assert_eq!(report.min_height, 0.0);
        assert_eq!(report.max_height, 0.0);
        assert_eq!(report.mean_height, 0.0);
        assert_eq!(report.max_slope_degrees, 0.0);
        assert_eq!(report.peak_count, 0);
    }

    #[test]
    fn test_single_step_slope() {
        let mut grid = ElevationGrid::zeroed(4, 4);
        grid.set(1, 1, 100.0);
        let report = GenerationReport::measure(&grid, 100.0);
        // 100 units over a 100-unit run is a 45-degree cardinal slope.
        assert!((report.max_slope_degrees - 45.0).abs() < 1e-3);
        assert_eq!(report.max_height, 100.0);
        assert_eq!(report.peak_count, 1);
    }
}
