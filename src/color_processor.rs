use crate::types::Rgb8;
use image::{Rgb, RgbImage};

/// Hue offsets, in degrees, of the suggested colors: complementary, then the two triadic ones.
pub const SUGGESTION_HUE_OFFSETS: [f32; 3] = [180.0, 120.0, 240.0];

pub struct ColorProcessor;

impl ColorProcessor {
    /// Returns a copy of `image` with every pixel exactly equal to `from` set to `to`.
    pub fn replace_exact(image: &RgbImage, from: Rgb8, to: Rgb8) -> RgbImage {
        let from: Rgb<u8> = from.into();
        let to: Rgb<u8> = to.into();
        let mut output = image.clone();
        for pixel in output.pixels_mut() {
            if *pixel == from {
                *pixel = to;
            }
        }
        output
    }

    pub fn count_matches(image: &RgbImage, color: Rgb8) -> usize {
        let color: Rgb<u8> = color.into();
        image.pixels().filter(|pixel| **pixel == color).count()
    }

    /// Complementary and triadic colors of `color`, with saturation and value held.
    pub fn suggest(color: Rgb8) -> [Rgb8; 3] {
        let (h, s, v) = Self::rgb8_to_hsv(color);
        SUGGESTION_HUE_OFFSETS.map(|offset| Self::hsv_to_rgb8(Self::rotate_hue(h, offset), s, v))
    }

    pub fn rotate_hue(h: f32, degrees: f32) -> f32 {
        (h + degrees).rem_euclid(360.0)
    }

    pub fn rgb8_to_hsv(color: Rgb8) -> (f32, f32, f32) {
        Self::rgb_to_hsv(
            color.r as f32 / 255.0,
            color.g as f32 / 255.0,
            color.b as f32 / 255.0,
        )
    }

    pub fn hsv_to_rgb8(h: f32, s: f32, v: f32) -> Rgb8 {
        let (r, g, b) = Self::hsv_to_rgb(h, s, v);
        Rgb8::new(to_channel(r), to_channel(g), to_channel(b))
    }

    /// `r`, `g`, `b` in 0.0-1.0. Returns hue in degrees [0, 360), saturation and value in 0.0-1.0.
    pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
        let max_val = r.max(g).max(b);
        let min_val = r.min(g).min(b);
        let delta = max_val - min_val;

        let v = max_val;
        let s = if max_val == 0.0 { 0.0 } else { delta / max_val };

        let h = if delta == 0.0 {
            0.0
        } else if max_val == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max_val == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        let h = if h < 0.0 { h + 360.0 } else { h };

        (h, s, v)
    }

    pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
        let c = v * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = v - c;

        let (r_prime, g_prime, b_prime) = match h {
            h if h < 60.0 => (c, x, 0.0),
            h if h < 120.0 => (x, c, 0.0),
            h if h < 180.0 => (0.0, c, x),
            h if h < 240.0 => (0.0, x, c),
            h if h < 300.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        (r_prime + m, g_prime + m, b_prime + m)
    }
}

fn to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
