//! World-space shaping passes: flat gameplay zones, boundary peak
//! dampening, and the boundary mask that pins terrain to zero at the
//! playable-area edge.

use crate::grid::ElevationGrid;
use crate::math::{lerp, smoothstep01};

/// Half-extent of the playable world in units. Terrain height reaches zero
/// at this distance from the origin on either axis.
pub const WORLD_HALF_EXTENT: f32 = 50_000.0;

/// Width of the band inside the boundary over which terrain blends down to
/// meet it.
pub const BOUNDARY_BLEND_MARGIN: f32 = 11_364.0;

/// Distance over which a flat zone blends out into the surrounding hills.
const FLAT_ZONE_BLEND_RADIUS: f32 = 2_500.0;

/// Factor applied to a peak sitting directly on the boundary.
const BOUNDARY_PEAK_FLOOR: f32 = 0.35;

/// Axis-aligned rectangle blended down to height zero.
pub(crate) struct FlatZone {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

/// The run's spawn clearing and boss arena, both 4000x4000 units, placed
/// opposite each other inside the fully-unmasked part of the map.
pub(crate) const FLAT_ZONES: [FlatZone; 2] = [
    FlatZone {
        min_x: -36_000.0,
        max_x: -32_000.0,
        min_y: -2_000.0,
        max_y: 2_000.0,
    },
    FlatZone {
        min_x: 32_000.0,
        max_x: 36_000.0,
        min_y: -2_000.0,
        max_y: 2_000.0,
    },
];

/// Membership of a coordinate in `[zone_min, zone_max]` with a smoothstep
/// falloff over the blend radius outside it. 1 inside, 0 beyond the radius.
fn axis_membership(v: f32, zone_min: f32, zone_max: f32) -> f32 {
    let dist_out = (zone_min - v).max((v - zone_max).max(0.0));
    let t = (1.0 - dist_out / FLAT_ZONE_BLEND_RADIUS).clamp(0.0, 1.0);
    smoothstep01(t)
}

/// Blend vertex heights toward zero inside the flat zones. The per-zone
/// factor is the product of the X and Y memberships; across zones the
/// strongest factor wins.
pub(crate) fn blend_flat_zones(
    grid: &mut ElevationGrid,
    origin_x: f32,
    origin_y: f32,
    cell_size: f32,
) {
    for y in 0..grid.size_y {
        let wy = origin_y + y as f32 * cell_size;
        for x in 0..grid.size_x {
            let wx = origin_x + x as f32 * cell_size;
            let mut blend = 0.0f32;
            for zone in &FLAT_ZONES {
                let bx = axis_membership(wx, zone.min_x, zone.max_x);
                let by = axis_membership(wy, zone.min_y, zone.max_y);
                blend = blend.max(bx * by);
            }
            if blend > 0.0 {
                let h = grid.get(x, y);
                grid.set(x, y, lerp(h, 0.0, blend));
            }
        }
    }
}

/// Dampen hill peaks close to the world boundary so they can slope down to
/// meet it. Peaks at the boundary keep 35% of their height; the effect
/// fades quadratically to nothing at the inner edge of the blend margin.
pub(crate) fn dampen_boundary_peaks(
    grid: &mut ElevationGrid,
    origin_x: f32,
    origin_y: f32,
    cell_size: f32,
) {
    for (x, y) in grid.interior_local_maxima() {
        let wx = origin_x + x as f32 * cell_size;
        let wy = origin_y + y as f32 * cell_size;
        let dist = (WORLD_HALF_EXTENT - wx.abs()).min(WORLD_HALF_EXTENT - wy.abs());
        if dist < BOUNDARY_BLEND_MARGIN {
            let t = (dist / BOUNDARY_BLEND_MARGIN).clamp(0.0, 1.0);
            let h = grid.get(x, y);
            grid.set(x, y, lerp(h * BOUNDARY_PEAK_FLOOR, h, t * t));
        }
    }
}

/// Multiply every vertex by a smoothstep mask that is 0 at the boundary and
/// 1 a full margin inside it. Guarantees terrain is flush with the ground
/// plane at the world edge.
pub(crate) fn apply_boundary_mask(
    grid: &mut ElevationGrid,
    origin_x: f32,
    origin_y: f32,
    cell_size: f32,
) {
    for y in 0..grid.size_y {
        let wy = origin_y + y as f32 * cell_size;
        let ty = ((WORLD_HALF_EXTENT - wy.abs()) / BOUNDARY_BLEND_MARGIN).clamp(0.0, 1.0);
        for x in 0..grid.size_x {
            let wx = origin_x + x as f32 * cell_size;
            let tx = ((WORLD_HALF_EXTENT - wx.abs()) / BOUNDARY_BLEND_MARGIN).clamp(0.0, 1.0);
            let mask = smoothstep01(tx.min(ty));
            let h = grid.get(x, y);
            grid.set(x, y, h * mask);
        }
    }
}
