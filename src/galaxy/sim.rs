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

use super::world::{FAR_PLANE, NEAR_PLANE, Star, World};
use super::GalaxyParams;
use crate::math::Vec2;

/// Clock advance per frame at speed 1.0
const TIME_STEP: f32 = 0.01;

/// Depth advance per frame at speed 1.0
const DEPTH_STEP: f32 = 0.2;

/// Rotation angle per unit of simulation time
const ROTATION_RATE: f32 = 0.05;

/// Distance of the virtual camera from the screen plane. The perspective
/// denominator 600 + z never reaches zero anywhere in the depth range.
const FOCAL_LENGTH: f32 = 600.0;

/// Pointer parallax amplitude in pixels, before perspective scaling
const PARALLAX_RANGE: f32 = 30.0;

/**
 * The galaxy simulation state.
 *
 * Owned by exactly one view instance. The render loop is the only writer
 * of the clock and star depths; the event handlers are the only writers
 * of the pointer offset and surface size.
 */
pub struct Galaxy {
    world: World,
    params: GalaxyParams,
    time: f32,
    pointer: Vec2,
    width: f32,
    height: f32,
}

impl Galaxy {
    pub fn new(params: GalaxyParams, width: f32, height: f32) -> Self {
        Self {
            world: World::generate(params.density, width, height),
            params,
            time: 0.0,
            pointer: Vec2::ZERO,
            width,
            height,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// The window size changed. Star coordinates are origin relative, so
    /// the population stays valid; only the projection center moves.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Update the normalized pointer offset from a window position.
    ///
    /// Does nothing when mouse interaction is disabled, so stray motion
    /// events can never influence the projection.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if !self.params.mouse_interaction || self.width <= 0.0 || self.height <= 0.0 {
            return;
        }

        self.pointer = Vec2(
            (x / self.width - 0.5) * 2.0,
            (y / self.height - 0.5) * 2.0,
        );
    }

    /// Advance the simulation by one frame: the clock moves forward and
    /// every star flies one step toward the viewer.
    pub fn step(&mut self) {
        self.time += TIME_STEP * self.params.speed;

        for star in self.world.stars.iter_mut() {
            star.z -= DEPTH_STEP * self.params.speed;
            if star.z < NEAR_PLANE {
                star.z = FAR_PLANE;
            }
        }
    }

    /// Snapshot the per-frame projection constants
    pub fn frame_transform(&self) -> FrameTransform {
        let angle = self.time * ROTATION_RATE;

        FrameTransform {
            cos: angle.cos(),
            sin: angle.sin(),
            center: Vec2(self.width / 2.0, self.height / 2.0),
            pointer: self.pointer,
            time: self.time,
        }
    }
}

/// Projection constants for one frame: the field rotation, the surface
/// center and the pointer parallax offset.
pub struct FrameTransform {
    cos: f32,
    sin: f32,
    center: Vec2,
    pointer: Vec2,
    time: f32,
}

pub struct ProjectedStar {
    pub pos: Vec2,
    pub size: f32,
    pub alpha: f32,
}

impl FrameTransform {
    /// Map a star to its screen position, size and opacity.
    ///
    /// The local position is rotated around the origin, perspective
    /// scaled, then offset by the screen center and the pointer parallax.
    /// The parallax term shares the star's perspective factor, so near
    /// stars react more to pointer movement than distant ones.
    pub fn project(&self, star: &Star) -> ProjectedStar {
        let rotated = Vec2(
            star.local.0 * self.cos - star.local.1 * self.sin,
            star.local.0 * self.sin + star.local.1 * self.cos,
        );

        let p = perspective(star.z);
        let pos = rotated * p + self.center + self.pointer * (PARALLAX_RANGE * p);

        let tw = twinkle(self.time, star.twinkle_speed, star.twinkle_offset);

        ProjectedStar {
            pos,
            size: star.base_size * p * tw,
            alpha: star.alpha * p * tw,
        }
    }
}

/// Perspective scale factor for a depth; in (0, 1] over the whole depth
/// range, shrinking toward the vanishing point as z grows.
pub fn perspective(z: f32) -> f32 {
    FOCAL_LENGTH / (FOCAL_LENGTH + z)
}

/// Periodic brightness factor, always within [0.2, 1.0]
pub fn twinkle(time: f32, speed: f32, offset: f32) -> f32 {
    (time * speed * 100.0 + offset).sin() * 0.4 + 0.6
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn test_params() -> GalaxyParams {
        GalaxyParams {
            density: 0.1,
            speed: 1.0,
            mouse_interaction: true,
        }
    }

    #[test]
    fn test_depth_invariant_holds_over_time() {
        for speed in [0.5, 1.0, 3.7] {
            let mut galaxy = Galaxy::new(
                GalaxyParams {
                    speed,
                    ..test_params()
                },
                1024.0,
                768.0,
            );

            for _ in 0..10_000 {
                galaxy.step();
                for star in &galaxy.world().stars {
                    assert!(star.z > 0.0 && star.z <= FAR_PLANE, "z out of range: {}", star.z);
                }
            }
        }
    }

    #[test]
    fn test_zero_speed_freezes_depths() {
        let mut galaxy = Galaxy::new(
            GalaxyParams {
                speed: 0.0,
                ..test_params()
            },
            1024.0,
            768.0,
        );

        let depths: Vec<f32> = galaxy.world().stars.iter().map(|s| s.z).collect();
        for _ in 0..100 {
            galaxy.step();
        }

        for (star, depth) in galaxy.world().stars.iter().zip(depths) {
            assert_eq!(star.z, depth);
        }
    }

    #[test]
    fn test_twinkle_stays_in_range() {
        for i in 0..10_000 {
            let time = i as f32 * 0.013;
            let tw = twinkle(time, 0.025, 1.234);
            assert!((0.2..=1.0).contains(&tw), "twinkle out of range: {}", tw);
        }
    }

    #[test]
    fn test_perspective_decreases_with_depth() {
        let factors = (0..=1000).map(|z| perspective(z as f32));

        for (near, far) in factors.tuple_windows() {
            assert!(near > far);
            assert!(far > 0.0 && near <= 1.0);
        }
    }

    #[test]
    fn test_origin_star_projects_to_center_plus_parallax() {
        let mut galaxy = Galaxy::new(test_params(), 1000.0, 500.0);
        galaxy.pointer_moved(750.0, 125.0); // normalizes to (0.5, -0.5)

        let star = Star {
            local: Vec2::ZERO,
            z: 400.0,
            base_size: 1.0,
            hue: 200.0,
            alpha: 1.0,
            twinkle_speed: 0.01,
            twinkle_offset: 0.0,
        };

        // Rotation leaves the origin fixed for any amount of elapsed time
        for _ in 0..500 {
            galaxy.step();
        }

        let p = perspective(star.z);
        let projected = galaxy.frame_transform().project(&star);
        assert_eq!(projected.pos, Vec2(500.0 + 0.5 * 30.0 * p, 250.0 - 0.5 * 30.0 * p));
    }

    #[test]
    fn test_pointer_normalization_corners() {
        let mut galaxy = Galaxy::new(test_params(), 800.0, 600.0);

        let star = Star {
            local: Vec2::ZERO,
            z: 0.0,
            base_size: 1.0,
            hue: 200.0,
            alpha: 1.0,
            twinkle_speed: 0.01,
            twinkle_offset: 0.0,
        };

        // Top left corner maps to (-1, -1), bottom right to (1, 1);
        // at z = 0 the parallax amplitude is the full 30 pixels.
        galaxy.pointer_moved(0.0, 0.0);
        let projected = galaxy.frame_transform().project(&star);
        assert_eq!(projected.pos, Vec2(400.0 - 30.0, 300.0 - 30.0));

        galaxy.pointer_moved(800.0, 600.0);
        let projected = galaxy.frame_transform().project(&star);
        assert_eq!(projected.pos, Vec2(400.0 + 30.0, 300.0 + 30.0));
    }

    #[test]
    fn test_disabled_mouse_interaction_pins_pointer() {
        let mut galaxy = Galaxy::new(
            GalaxyParams {
                mouse_interaction: false,
                ..test_params()
            },
            800.0,
            600.0,
        );

        let star = Star {
            local: Vec2::ZERO,
            z: 100.0,
            base_size: 1.0,
            hue: 200.0,
            alpha: 1.0,
            twinkle_speed: 0.01,
            twinkle_offset: 0.0,
        };

        galaxy.pointer_moved(0.0, 0.0);
        galaxy.pointer_moved(800.0, 600.0);

        // Delivered motion events never influence the projection
        let projected = galaxy.frame_transform().project(&star);
        assert_eq!(projected.pos, Vec2(400.0, 300.0));
    }

    #[test]
    fn test_pointer_ignored_on_degenerate_surface() {
        let mut galaxy = Galaxy::new(test_params(), 0.0, 0.0);
        galaxy.pointer_moved(123.0, 45.0);

        let star = Star {
            local: Vec2::ZERO,
            z: 100.0,
            base_size: 1.0,
            hue: 200.0,
            alpha: 1.0,
            twinkle_speed: 0.01,
            twinkle_offset: 0.0,
        };

        let projected = galaxy.frame_transform().project(&star);
        assert_eq!(projected.pos, Vec2::ZERO);
    }

    #[test]
    fn test_resize_keeps_population() {
        let mut galaxy = Galaxy::new(test_params(), 800.0, 600.0);
        let locals: Vec<Vec2> = galaxy.world().stars.iter().map(|s| s.local).collect();

        galaxy.resize(1920.0, 1080.0);

        assert_eq!(galaxy.world().stars.len(), locals.len());
        for (star, local) in galaxy.world().stars.iter().zip(locals) {
            assert_eq!(star.local, local);
        }

        // The projection center follows the new size
        let star = Star {
            local: Vec2::ZERO,
            z: 100.0,
            base_size: 1.0,
            hue: 200.0,
            alpha: 1.0,
            twinkle_speed: 0.01,
            twinkle_offset: 0.0,
        };
        assert_eq!(galaxy.frame_transform().project(&star).pos, Vec2(960.0, 540.0));
    }

    #[test]
    fn test_projected_size_and_alpha_shrink_with_depth() {
        let galaxy = Galaxy::new(test_params(), 800.0, 600.0);
        let transform = galaxy.frame_transform();

        let star_at = |z| Star {
            local: Vec2(10.0, -20.0),
            z,
            base_size: 2.0,
            hue: 200.0,
            alpha: 0.8,
            twinkle_speed: 0.01,
            twinkle_offset: 0.5,
        };

        let near = transform.project(&star_at(10.0));
        let far = transform.project(&star_at(900.0));

        assert!(near.size > far.size);
        assert!(near.alpha > far.alpha);
        assert!(far.size > 0.0 && far.alpha > 0.0);
    }
}
