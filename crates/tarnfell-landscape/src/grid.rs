//! Row-major elevation grid storage and neighborhood queries.

/// A row-major 2D grid of world-height values.
///
/// Vertex `(x, y)` lives at flat index `y * size_x + x`. Both axes are
/// vertex counts, so a grid covering `n` quads per side has `n + 1` vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct ElevationGrid {
    /// Vertex count along X.
    pub size_x: usize,
    /// Vertex count along Y.
    pub size_y: usize,
    /// Height values, row-major, length `size_x * size_y`.
    pub data: Vec<f32>,
}

impl ElevationGrid {
    /// Create an all-zero grid with the given vertex dimensions.
    pub fn zeroed(size_x: usize, size_y: usize) -> Self {
        Self {
            size_x,
            size_y,
            data: vec![0.0; size_x * size_y],
        }
    }

    /// Flat index of vertex `(x, y)`.
    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.size_x + x
    }

    /// Height at vertex `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= size_x` or `y >= size_y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.size_x + x]
    }

    /// Set the height at vertex `(x, y)`.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, h: f32) {
        self.data[y * self.size_x + x] = h;
    }

    /// The raw height values, row-major.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Interior vertices that are strictly greater than all eight neighbors.
    ///
    /// Border vertices are never reported. Results come back in raster-scan
    /// order (increasing y, then x), which callers rely on for stable
    /// tie-breaking when they sort by value afterwards.
    pub fn interior_local_maxima(&self) -> Vec<(usize, usize)> {
        let mut peaks = Vec::new();
        for y in 1..self.size_y.saturating_sub(1) {
            for x in 1..self.size_x.saturating_sub(1) {
                let v = self.get(x, y);
                let mut is_peak = true;
                'scan: for dy in -1i32..=1 {
                    for dx in -1i32..=1 {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        let nx = (x as i32 + dx) as usize;
                        let ny = (y as i32 + dy) as usize;
                        if v <= self.get(nx, ny) {
                            is_peak = false;
                            break 'scan;
                        }
                    }
                }
                if is_peak {
                    peaks.push((x, y));
                }
            }
        }
        peaks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_dimensions_and_values() {
        let grid = ElevationGrid::zeroed(7, 4);
        assert_eq!(grid.data.len(), 28);
        assert!(grid.as_slice().iter().all(|&h| h == 0.0));
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut grid = ElevationGrid::zeroed(5, 5);
        grid.set(3, 2, 123.5);
        assert_eq!(grid.get(3, 2), 123.5);
        assert_eq!(grid.data[grid.idx(3, 2)], 123.5);
    }

    #[test]
    fn test_local_maxima_single_peak() {
        let mut grid = ElevationGrid::zeroed(5, 5);
        grid.set(2, 2, 10.0);
        assert_eq!(grid.interior_local_maxima(), vec![(2, 2)]);
    }

    #[test]
    fn test_plateau_is_not_a_strict_maximum() {
        let mut grid = ElevationGrid::zeroed(5, 5);
        grid.set(2, 2, 10.0);
        grid.set(3, 2, 10.0);
        assert!(
            grid.interior_local_maxima().is_empty(),
            "equal neighbors must disqualify a strict peak"
        );
    }

    #[test]
    fn test_border_vertices_never_peaks() {
        let mut grid = ElevationGrid::zeroed(4, 4);
        grid.set(0, 0, 100.0);
        grid.set(3, 3, 100.0);
        assert!(grid.interior_local_maxima().is_empty());
    }

    #[test]
    fn test_maxima_reported_in_raster_order() {
        let mut grid = ElevationGrid::zeroed(9, 9);
        grid.set(6, 2, 5.0);
        grid.set(2, 6, 5.0);
        assert_eq!(grid.interior_local_maxima(), vec![(6, 2), (2, 6)]);
    }
}
