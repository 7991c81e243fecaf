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

use std::f32::consts::TAU;

use crate::math::Vec2;

/// Star population at density 1.0
pub const BASE_STAR_COUNT: usize = 800;

pub const NEBULA_COUNT: usize = 5;

/// Depth range of the star volume. A star that crosses the near plane
/// is recycled back to the far plane rather than destroyed, so a fixed
/// population produces an endless flythrough.
pub const FAR_PLANE: f32 = 1000.0;
pub const NEAR_PLANE: f32 = 1.0;

/// Star and nebula hues are sampled from the cyan to violet band
pub const HUE_MIN: f32 = 190.0;
pub const HUE_MAX: f32 = 270.0;

/**
 * One point light.
 *
 * Local x/y are fixed in an origin centered frame so the whole field can
 * be rotated around the screen center; only the depth changes after
 * generation.
 */
pub struct Star {
    pub local: Vec2,
    pub z: f32,
    pub base_size: f32,
    pub hue: f32,
    pub alpha: f32,
    pub twinkle_speed: f32,
    pub twinkle_offset: f32,
}

/// A soft background glow blob, in screen coordinates. Static after
/// generation.
pub struct Nebula {
    pub pos: Vec2,
    pub radius: f32,
    pub hue: f32,
    pub alpha: f32,
}

pub struct World {
    pub stars: Vec<Star>,
    pub nebulae: Vec<Nebula>,
}

impl Star {
    fn random(width: f32, height: f32) -> Self {
        Self {
            local: Vec2(
                fastrand::f32() * width - width / 2.0,
                fastrand::f32() * height - height / 2.0,
            ),
            z: fastrand::f32() * FAR_PLANE,
            base_size: 0.5 + fastrand::f32() * 2.0,
            hue: random_hue(),
            alpha: 0.2 + fastrand::f32() * 0.8,
            twinkle_speed: 0.005 + fastrand::f32() * 0.02,
            twinkle_offset: fastrand::f32() * TAU,
        }
    }
}

impl Nebula {
    fn random(width: f32, height: f32) -> Self {
        Self {
            pos: Vec2(fastrand::f32() * width, fastrand::f32() * height),
            radius: 150.0 + fastrand::f32() * 300.0,
            hue: random_hue(),
            alpha: 0.02 + fastrand::f32() * 0.04,
        }
    }
}

fn random_hue() -> f32 {
    HUE_MIN + fastrand::f32() * (HUE_MAX - HUE_MIN)
}

impl World {
    /// Generate a full population for a surface of the given size.
    ///
    /// Density scales the star count only; the nebula count is fixed.
    pub fn generate(density: f32, width: f32, height: f32) -> Self {
        let star_count = (BASE_STAR_COUNT as f32 * density).floor() as usize;

        let mut stars = Vec::with_capacity(star_count);
        for _ in 0..star_count {
            stars.push(Star::random(width, height));
        }

        let mut nebulae = Vec::with_capacity(NEBULA_COUNT);
        for _ in 0..NEBULA_COUNT {
            nebulae.push(Nebula::random(width, height));
        }

        Self { stars, nebulae }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_count_scales_with_density() {
        assert_eq!(World::generate(1.0, 800.0, 600.0).stars.len(), 800);
        assert_eq!(World::generate(0.5, 800.0, 600.0).stars.len(), 400);
        assert_eq!(World::generate(1.5, 800.0, 600.0).stars.len(), 1200);
        assert_eq!(World::generate(0.001, 800.0, 600.0).stars.len(), 0);
    }

    #[test]
    fn test_nebula_count_is_fixed() {
        assert_eq!(World::generate(0.5, 800.0, 600.0).nebulae.len(), NEBULA_COUNT);
        assert_eq!(World::generate(3.0, 800.0, 600.0).nebulae.len(), NEBULA_COUNT);
    }

    #[test]
    fn test_star_attribute_ranges() {
        let world = World::generate(1.0, 1024.0, 768.0);

        for star in &world.stars {
            assert!(star.local.0 >= -512.0 && star.local.0 < 512.0);
            assert!(star.local.1 >= -384.0 && star.local.1 < 384.0);
            assert!(star.z >= 0.0 && star.z < FAR_PLANE);
            assert!(star.base_size >= 0.5 && star.base_size < 2.5);
            assert!(star.hue >= HUE_MIN && star.hue < HUE_MAX);
            assert!(star.alpha >= 0.2 && star.alpha < 1.0);
            assert!(star.twinkle_speed >= 0.005 && star.twinkle_speed < 0.025);
            assert!(star.twinkle_offset >= 0.0 && star.twinkle_offset < TAU);
        }
    }

    #[test]
    fn test_nebula_attribute_ranges() {
        let world = World::generate(1.0, 1024.0, 768.0);

        for neb in &world.nebulae {
            assert!(neb.pos.0 >= 0.0 && neb.pos.0 < 1024.0);
            assert!(neb.pos.1 >= 0.0 && neb.pos.1 < 768.0);
            assert!(neb.radius >= 150.0 && neb.radius < 450.0);
            assert!(neb.hue >= HUE_MIN && neb.hue < HUE_MAX);
            assert!(neb.alpha >= 0.02 && neb.alpha < 0.06);
        }
    }
}
