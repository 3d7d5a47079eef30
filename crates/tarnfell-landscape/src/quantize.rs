//! Conversion to the engine's 16-bit landscape height encoding.

/// Quantize world heights to the fixed-point format the landscape importer
/// expects: `32768 + round(h * 128 / z_scale)`, clamped to `[0, 65535]`.
///
/// The midpoint 32768 encodes world height zero. A `z_scale` below 1 falls
/// back to the engine default of 100. The conversion runs in f64 so heights
/// far outside the representable range still saturate at the clamp bounds.
pub fn quantize(heights: &[f32], z_scale: f32) -> Vec<u16> {
    let z_scale = if z_scale < 1.0 { 100.0 } else { z_scale };
    let steps_per_unit = 128.0 / f64::from(z_scale);
    heights
        .iter()
        .map(|&h| {
            let q = 32768.0 + (f64::from(h) * steps_per_unit).round();
            q.clamp(0.0, 65535.0) as u16
        })
        .collect()
}
