use crate::hex::Rgb;

/// Linear interpolation between two colors.
///
/// Each channel is `round(weight * a + (1 - weight) * b)`, so `weight == 1.0`
/// yields `a` and `weight == 0.0` yields `b`. Rounding is half away from zero,
/// applied to the IEEE `f64` result rather than the exact decimal one: `0.7 * 45`
/// evaluates to `31.499999999999996`, so `shade(Rgb::new(45, 0, 0), 0.7)` is 31.
/// This matches JavaScript's `Math.round` over the same expression.
/// The weight is clamped to `0.0..=1.0`; NaN counts as `0.0`.
pub fn mix(a: Rgb, b: Rgb, weight: f64) -> Rgb {
    let weight = if weight.is_nan() {
        0.0
    } else {
        weight.clamp(0.0, 1.0)
    };

    let channel = |x: u8, y: u8| -> u8 {
        let value = weight * f64::from(x) + (1.0 - weight) * f64::from(y);
        // Both operands lie in 0..=255 and the weights sum to one.
        value.round() as u8
    };

    Rgb::new(channel(a.r, b.r), channel(a.g, b.g), channel(a.b, b.b))
}

/// Lightens `base` by mixing it toward white, keeping `weight` of the base.
#[inline]
pub fn tint(base: Rgb, weight: f64) -> Rgb {
    mix(base, Rgb::WHITE, weight)
}

/// Darkens `base` by mixing it toward black, keeping `weight` of the base.
#[inline]
pub fn shade(base: Rgb, weight: f64) -> Rgb {
    mix(base, Rgb::BLACK, weight)
}
