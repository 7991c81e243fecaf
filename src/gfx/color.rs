// This file is part of Stardrift
// Copyright (C) 2025 Calle Laakkonen
//
// Stardrift is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Stardrift is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Stardrift.  If not, see <https://www.gnu.org/licenses/>.

#[derive(Clone, Copy, Debug)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(&self, a: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Convert from HSL color space.
    ///
    /// Hue is in degrees, saturation, lightness and alpha in [0, 1].
    pub fn from_hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());

        let (r, g, b) = match h as i32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let m = lightness - c / 2.0;
        Self {
            r: r + m,
            g: g + m,
            b: b + m,
            a: alpha,
        }
    }

    /// Linear interpolation between two colors, alpha included
    pub fn lerp(&self, other: &Color, t: f32) -> Color {
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Pack into an ARGB8888 pixel for procedural surfaces
    pub fn to_argb8888(&self) -> u32 {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (quantize(self.a) << 24) | (quantize(self.r) << 16) | (quantize(self.g) << 8) | quantize(self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(color: Color, r: f32, g: f32, b: f32) {
        assert!((color.r - r).abs() < 0.005, "r: {} != {}", color.r, r);
        assert!((color.g - g).abs() < 0.005, "g: {} != {}", color.g, g);
        assert!((color.b - b).abs() < 0.005, "b: {} != {}", color.b, b);
    }

    #[test]
    fn test_hsla_primaries() {
        assert_close(Color::from_hsla(0.0, 1.0, 0.5, 1.0), 1.0, 0.0, 0.0);
        assert_close(Color::from_hsla(120.0, 1.0, 0.5, 1.0), 0.0, 1.0, 0.0);
        assert_close(Color::from_hsla(240.0, 1.0, 0.5, 1.0), 0.0, 0.0, 1.0);
        assert_close(Color::from_hsla(360.0, 1.0, 0.5, 1.0), 1.0, 0.0, 0.0);
    }

    #[test]
    fn test_hsla_grays() {
        // Zero saturation ignores hue
        assert_close(Color::from_hsla(42.0, 0.0, 0.5, 1.0), 0.5, 0.5, 0.5);
        assert_close(Color::from_hsla(217.0, 1.0, 1.0, 1.0), 1.0, 1.0, 1.0);
        assert_close(Color::from_hsla(217.0, 1.0, 0.0, 1.0), 0.0, 0.0, 0.0);
    }

    #[test]
    fn test_hsla_cyan_violet_band() {
        // hsl(190, 90%, 80%) — pale cyan
        assert_close(Color::from_hsla(190.0, 0.9, 0.8, 1.0), 0.62, 0.92, 0.98);
        // hsl(270, 90%, 80%) — pale violet
        assert_close(Color::from_hsla(270.0, 0.9, 0.8, 1.0), 0.8, 0.62, 0.98);
    }

    #[test]
    fn test_lerp() {
        let from = Color::new(1.0, 0.0, 0.5);
        let to = Color::new(0.0, 1.0, 0.5).with_alpha(0.0);

        assert_close(from.lerp(&to, 0.0), 1.0, 0.0, 0.5);
        assert_close(from.lerp(&to, 1.0), 0.0, 1.0, 0.5);
        let mid = from.lerp(&to, 0.5);
        assert_close(mid, 0.5, 0.5, 0.5);
        assert!((mid.a - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_argb8888_packing() {
        assert_eq!(Color::WHITE.to_argb8888(), 0xffffffff);
        assert_eq!(Color::new(0.0, 0.0, 0.0).with_alpha(0.0).to_argb8888(), 0x00000000);
        assert_eq!(Color::new(1.0, 0.0, 0.0).to_argb8888(), 0xffff0000);
        assert_eq!(Color::new(0.0, 1.0, 0.0).with_alpha(1.0).to_argb8888(), 0xff00ff00);
    }
}
