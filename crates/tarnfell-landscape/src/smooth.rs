//! Post-synthesis smoothing: 3x3 box blur blended with the original.

use crate::grid::ElevationGrid;
use crate::math::lerp;

/// Run `passes` iterations of an edge-clamped 3x3 box blur, each blended
/// with the pre-pass heights at `strength`.
///
/// Passes are clamped to `[1, 10]` and strength to `[0.1, 1.0]`. The blur
/// double-buffers so every pass reads a consistent snapshot.
pub(crate) fn smooth(grid: &mut ElevationGrid, passes: i32, strength: f32) {
    let passes = passes.clamp(1, 10);
    let strength = strength.clamp(0.1, 1.0);
    let (sx, sy) = (grid.size_x, grid.size_y);
    let mut back = vec![0.0f32; sx * sy];

    for _ in 0..passes {
        for y in 0..sy {
            for x in 0..sx {
                let mut sum = 0.0;
                for dy in -1i32..=1 {
                    for dx in -1i32..=1 {
                        let nx = (x as i32 + dx).clamp(0, sx as i32 - 1) as usize;
                        let ny = (y as i32 + dy).clamp(0, sy as i32 - 1) as usize;
                        sum += grid.get(nx, ny);
                    }
                }
                let avg = sum / 9.0;
                back[y * sx + x] = lerp(grid.get(x, y), avg, strength);
            }
        }
        std::mem::swap(&mut grid.data, &mut back);
    }
}
