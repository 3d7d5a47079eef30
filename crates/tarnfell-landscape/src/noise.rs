//! Deterministic 2D value noise.
//!
//! Hash-based lattice noise with smoothstep-eased bilinear interpolation.
//! The hash constants are a compatibility contract: saved seeds must keep
//! producing the same terrain across builds, so the exact multiply/xor-shift
//! sequence below must not change.

use crate::math::lerp;

/// Hash a `(seed, lattice_x, lattice_y)` triple to a well-distributed u32.
///
/// Wrapping 31-multiply accumulation followed by a murmur-style finalizer.
#[inline]
pub fn lattice_hash(seed: i32, x: i32, y: i32) -> u32 {
    let mut h = seed as u32;
    h = h.wrapping_mul(31).wrapping_add(x as u32);
    h = h.wrapping_mul(31).wrapping_add(y as u32);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

/// Pseudo-random value in `[0, 1]` for a lattice corner.
#[inline]
fn lattice_value(seed: i32, x: i32, y: i32) -> f32 {
    (lattice_hash(seed, x, y) % 65536) as f32 / 65535.0
}

/// Sample 2D value noise at `(x_m, y_m)` meters with wavelength `scale_m`.
///
/// Returns a continuous value in `[0, 1]`. Scales below 1 meter are clamped
/// so the lattice never degenerates.
pub fn value_noise(seed: i32, x_m: f32, y_m: f32, scale_m: f32) -> f32 {
    let s = scale_m.max(1.0);
    let nx = x_m / s;
    let ny = y_m / s;
    let i0 = nx.floor() as i32;
    let j0 = ny.floor() as i32;
    let fx = nx - i0 as f32;
    let fy = ny - j0 as f32;
    let fx_s = fx * fx * (3.0 - 2.0 * fx);
    let fy_s = fy * fy * (3.0 - 2.0 * fy);

    let v00 = lattice_value(seed, i0, j0);
    let v10 = lattice_value(seed, i0 + 1, j0);
    let v01 = lattice_value(seed, i0, j0 + 1);
    let v11 = lattice_value(seed, i0 + 1, j0 + 1);

    let vx0 = lerp(v00, v10, fx_s);
    let vx1 = lerp(v01, v11, fx_s);
    lerp(vx0, vx1, fy_s)
}

/// Value noise remapped to `[-1, 1]` for symmetric hills and valleys.
#[inline]
pub fn signed_noise(seed: i32, x_m: f32, y_m: f32, scale_m: f32) -> f32 {
    2.0 * value_noise(seed, x_m, y_m, scale_m) - 1.0
}
