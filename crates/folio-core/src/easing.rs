#![forbid(unsafe_code)]

//! Easing curves for time-based animation.
//!
//! Each function maps normalized progress `t` in `[0.0, 1.0]` to an eased
//! value in the same range. Inputs outside the range are clamped, so a
//! sampler can feed raw elapsed/duration ratios without guarding.

/// An easing function over normalized progress.
pub type EasingFn = fn(f32) -> f32;

/// Identity easing.
#[must_use]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Cubic ease-in: slow start, fast finish.
#[must_use]
pub fn ease_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * t
}

/// Cubic ease-out: fast start, slow finish.
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Cubic ease-in-out: slow at both ends.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let inv = -2.0 * t + 2.0;
        1.0 - inv * inv * inv / 2.0
    }
}
