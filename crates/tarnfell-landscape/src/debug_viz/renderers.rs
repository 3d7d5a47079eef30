//! Heightfield preview renderer.

use super::image::HeightfieldImage;
use crate::grid::ElevationGrid;

/// Render a generated grid to an RGBA preview, one pixel per vertex.
///
/// Heights are normalized against the grid's own maximum; a fully flat grid
/// renders as uniform ground color.
pub fn render_heightfield(grid: &ElevationGrid) -> HeightfieldImage {
    let mut image = HeightfieldImage::new(grid.size_x as u32, grid.size_y as u32);
    let max = grid.as_slice().iter().cloned().fold(0.0f32, f32::max);

    for y in 0..grid.size_y {
        for x in 0..grid.size_x {
            let normalized = if max > 0.0 { grid.get(x, y) / max } else { 0.0 };
            let (r, g, b) = height_to_color(normalized);
            image.set_pixel(x as u32, y as u32, r, g, b, 255);
        }
    }

    image
}

/// Map a normalized height `[0, 1]` to an RGB color.
///
/// Bands: valley floor -> grass -> upland scrub -> bare rock -> snow cap.
pub fn height_to_color(normalized: f32) -> (u8, u8, u8) {
    let n = normalized.clamp(0.0, 1.0);
    if n < 0.02 {
        // Ground plane and flat zones.
        (58, 92, 48)
    } else if n < 0.45 {
        let t = (n - 0.02) / 0.43;
        (
            (58.0 + t * 60.0) as u8,
            (92.0 + t * 40.0) as u8,
            (48.0 - t * 10.0) as u8,
        )
    } else if n < 0.75 {
        let t = (n - 0.45) / 0.3;
        (
            (118.0 + t * 20.0) as u8,
            (132.0 - t * 40.0) as u8,
            (38.0 + t * 30.0) as u8,
        )
    } else {
        let t = ((n - 0.75) / 0.25).min(1.0);
        let base = 160.0 + t * 95.0;
        (base as u8, base as u8, base as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_dimensions_match_grid() {
        let grid = ElevationGrid::zeroed(20, 10);
        let image = render_heightfield(&grid);
        assert_eq!((image.width, image.height), (20, 10));
    }

    #[test]
    fn test_flat_grid_renders_uniform_ground() {
        let grid = ElevationGrid::zeroed(4, 4);
        let image = render_heightfield(&grid);
        let first = image.get_pixel(0, 0);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(image.get_pixel(x, y), first);
            }
        }
        assert_eq!((first.0, first.1, first.2), height_to_color(0.0));
    }

    #[test]
    fn test_peak_renders_as_snow() {
        let mut grid = ElevationGrid::zeroed(3, 3);
        grid.set(1, 1, 1000.0);
        let image = render_heightfield(&grid);
        let (r, g, b, _) = image.get_pixel(1, 1);
        assert_eq!((r, g, b), height_to_color(1.0));
        assert!(r > 200 && r == g && g == b, "peak should be near-white");
    }

    #[test]
    fn test_color_bands_cover_range() {
        let low = height_to_color(0.1);
        let mid = height_to_color(0.6);
        let high = height_to_color(0.9);
        assert!(low.1 > low.0, "lowlands lean green");
        assert_ne!(low, mid);
        assert_ne!(mid, high);
    }
}
