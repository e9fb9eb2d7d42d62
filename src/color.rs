/*
 * Color Module
 *
 * Hue cycling and the color tweaks applied at draw time. Hues are in
 * degrees, [0, 360). Everything here is a pure function of its inputs, so
 * the color of any particle at any frame can be recomputed without history.
 */

use nannou::color::{hsv, Hsv, Srgb};

// Degrees per frame per unit of hue speed
pub const HUE_RATE: f64 = 0.1;

pub const PARTICLE_SATURATION: f32 = 1.0;
pub const PARTICLE_BRIGHTNESS: f32 = 1.0;

/// Hue of a particle at `frame`. Periodic with a period of `3600 / hue_speed` frames.
pub fn hue(base_hue: f32, hue_speed: f32, frame: u64) -> f32 {
    // f64 keeps long runs from drifting
    let degrees = base_hue as f64 + frame as f64 * hue_speed as f64 * HUE_RATE;
    // Narrowing can round a value just below 360 up to 360
    let h = (degrees % 360.0) as f32;
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

// Fully saturated, full brightness
pub fn particle_color(hue_degrees: f32) -> Hsv {
    hsv(hue_degrees / 360.0, PARTICLE_SATURATION, PARTICLE_BRIGHTNESS)
}

/// Snaps a [0, 1] channel onto `levels` evenly spaced values, like an 8-bit
/// posterize filter does. Fewer than two levels is treated as two.
pub fn posterize_channel(value: f32, levels: u8) -> f32 {
    let levels = levels.max(2) as f32;
    let step = (value.clamp(0.0, 1.0) * levels).floor().min(levels - 1.0);
    step / (levels - 1.0)
}

pub fn posterize(color: Srgb, levels: u8) -> Srgb {
    Srgb::new(
        posterize_channel(color.red, levels),
        posterize_channel(color.green, levels),
        posterize_channel(color.blue, levels),
    )
}
