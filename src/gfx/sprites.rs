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

//! Procedurally generated sprite textures.
//!
//! SDL's 2D renderer has no gradient primitive, so the radial gradients
//! used by the nebula and star sprites are baked into small textures once
//! at world creation time and drawn scaled with per-draw color and alpha
//! modulation.

use super::{Color, Image, Renderer, SdlResult, Texture};

const GLOW_SPRITE_SIZE: i32 = 64;
const CORE_SPRITE_SIZE: i32 = 32;
const NEBULA_SPRITE_SIZE: i32 = 256;

/// The halo around a star. Baked per hue bucket; brightness is applied
/// at draw time through alpha modulation.
pub fn glow_sprite(renderer: &Renderer, hue: f32) -> SdlResult<Texture> {
    let stops = [
        (0.0, Color::from_hsla(hue, 0.9, 0.8, 1.0)),
        (0.3, Color::from_hsla(hue, 0.8, 0.6, 0.5)),
        (1.0, Color::from_hsla(hue, 0.8, 0.6, 0.0)),
    ];

    Texture::from_image(renderer, &radial_gradient(GLOW_SPRITE_SIZE, &stops)?)
}

/// The solid center dot of a star. White, tinted per star at draw time.
pub fn core_sprite(renderer: &Renderer) -> SdlResult<Texture> {
    let stops = [
        (0.0, Color::WHITE),
        (0.7, Color::WHITE),
        (1.0, Color::WHITE.with_alpha(0.0)),
    ];

    Texture::from_image(renderer, &radial_gradient(CORE_SPRITE_SIZE, &stops)?)
}

/// A soft background glow blob, baked with its exact sampled hue.
pub fn nebula_sprite(renderer: &Renderer, hue: f32) -> SdlResult<Texture> {
    let stops = [
        (0.0, Color::from_hsla(hue, 0.8, 0.5, 1.0)),
        (0.5, Color::from_hsla(hue, 0.6, 0.3, 0.5)),
        (1.0, Color::from_hsla(hue, 0.6, 0.3, 0.0)),
    ];

    Texture::from_image(renderer, &radial_gradient(NEBULA_SPRITE_SIZE, &stops)?)
}

/// Fill a square image with a radial gradient. Stops are (position, color)
/// pairs with positions ascending in [0, 1]; 0 is the center, 1 the edge.
fn radial_gradient(size: i32, stops: &[(f32, Color)]) -> SdlResult<Image> {
    let mut image = Image::new(size, size)?;

    let center = (size - 1) as f32 / 2.0;
    let radius = size as f32 / 2.0;

    let pixels = image.argb8888_pixels_mut();
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            let dist = ((dx * dx + dy * dy).sqrt() / radius).min(1.0);

            pixels[(y * size + x) as usize] = gradient_color(stops, dist).to_argb8888();
        }
    }

    Ok(image)
}

fn gradient_color(stops: &[(f32, Color)], position: f32) -> Color {
    let mut prev = &stops[0];
    if position <= prev.0 {
        return prev.1;
    }

    for stop in &stops[1..] {
        if position <= stop.0 {
            let t = (position - prev.0) / (stop.0 - prev.0);
            return prev.1.lerp(&stop.1, t);
        }
        prev = stop;
    }

    prev.1
}

#[cfg(test)]
mod tests {
    use super::*;

    const STOPS: [(f32, Color); 3] = [
        (0.0, Color::new(1.0, 1.0, 1.0)),
        (0.5, Color::new(0.5, 0.5, 0.5)),
        (1.0, Color::new(0.0, 0.0, 0.0)),
    ];

    #[test]
    fn test_gradient_stops() {
        assert!((gradient_color(&STOPS, 0.0).r - 1.0).abs() < 0.001);
        assert!((gradient_color(&STOPS, 0.5).r - 0.5).abs() < 0.001);
        assert!((gradient_color(&STOPS, 1.0).r - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_gradient_between_stops() {
        assert!((gradient_color(&STOPS, 0.25).r - 0.75).abs() < 0.001);
        assert!((gradient_color(&STOPS, 0.75).r - 0.25).abs() < 0.001);
    }

    #[test]
    fn test_gradient_clamps_outside_range() {
        assert!((gradient_color(&STOPS, -1.0).r - 1.0).abs() < 0.001);
        assert!((gradient_color(&STOPS, 2.0).r - 0.0).abs() < 0.001);
    }
}
