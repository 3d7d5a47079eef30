//! Small scalar helpers shared across pipeline stages.

/// Linear interpolation between `a` and `b`.
#[inline]
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Hermite smoothstep of a value already clamped to `[0, 1]`.
#[inline]
pub(crate) fn smoothstep01(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(2.0, 10.0, 0.5), 6.0);
    }

    #[test]
    fn test_smoothstep_flat_at_ends() {
        assert_eq!(smoothstep01(0.0), 0.0);
        assert_eq!(smoothstep01(1.0), 1.0);
        assert_eq!(smoothstep01(0.5), 0.5);
        // Eased: below linear in the lower half, above in the upper half.
        assert!(smoothstep01(0.25) < 0.25);
        assert!(smoothstep01(0.75) > 0.75);
    }
}
