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

use anyhow::Result;
use log::info;

use super::world::{HUE_MAX, HUE_MIN};
use super::{Galaxy, GalaxyParams};
use crate::gfx::{Color, Renderer, Texture, core_sprite, glow_sprite, nebula_sprite};
use crate::math::RectF;

/// Number of pre-baked glow textures across the star hue band. A star
/// draws the bucket nearest its sampled hue.
const GLOW_BUCKETS: usize = 16;

/// Glow halo radius in units of effective star size
const GLOW_SCALE: f32 = 3.0;

/// Core dot radius in units of effective star size
const CORE_SCALE: f32 = 0.5;

/**
 * A mounted galaxy backdrop: the simulation plus its baked sprites.
 *
 * Dropping the view is the teardown; it releases every texture along
 * with the world. Parameter changes are handled by replacing the whole
 * view with a freshly constructed one.
 */
pub struct GalaxyView {
    galaxy: Galaxy,
    glow: Vec<Texture>,
    core: Texture,
    nebulae: Vec<Texture>,
}

impl GalaxyView {
    pub fn new(renderer: &Renderer, params: GalaxyParams) -> Result<Self> {
        let (width, height) = renderer.size();
        let galaxy = Galaxy::new(params, width as f32, height as f32);

        let mut glow = Vec::with_capacity(GLOW_BUCKETS);
        for bucket in 0..GLOW_BUCKETS {
            glow.push(glow_sprite(renderer, bucket_hue(bucket))?);
        }

        let mut nebulae = Vec::with_capacity(galaxy.world().nebulae.len());
        for neb in &galaxy.world().nebulae {
            nebulae.push(nebula_sprite(renderer, neb.hue)?);
        }

        info!(
            "Generated {} stars and {} nebulae for a {}x{} surface",
            galaxy.world().stars.len(),
            galaxy.world().nebulae.len(),
            width,
            height
        );

        Ok(Self {
            galaxy,
            glow,
            core: core_sprite(renderer)?,
            nebulae,
        })
    }

    pub fn step(&mut self) {
        self.galaxy.step();
    }

    pub fn resize(&mut self, size: (i32, i32)) {
        self.galaxy.resize(size.0 as f32, size.1 as f32);
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.galaxy.pointer_moved(x, y);
    }

    /// Paint one full frame: nebulae first, then every star in
    /// population order as a glow halo plus a core dot.
    pub fn render(&self, renderer: &Renderer) {
        renderer.clear();

        for (neb, sprite) in self.galaxy.world().nebulae.iter().zip(&self.nebulae) {
            sprite.render(
                renderer,
                RectF::centered(neb.pos, neb.radius * 2.0, neb.radius * 2.0),
                &Color::WHITE.with_alpha(neb.alpha),
            );
        }

        let transform = self.galaxy.frame_transform();
        for star in &self.galaxy.world().stars {
            let projected = transform.project(star);

            let halo = projected.size * GLOW_SCALE;
            self.glow[glow_bucket(star.hue)].render(
                renderer,
                RectF::centered(projected.pos, halo * 2.0, halo * 2.0),
                &Color::WHITE.with_alpha(projected.alpha),
            );

            let dot = projected.size * CORE_SCALE;
            self.core.render(
                renderer,
                RectF::centered(projected.pos, dot * 2.0, dot * 2.0),
                &Color::from_hsla(star.hue, 1.0, 0.95, projected.alpha),
            );
        }

        renderer.present();
    }
}

fn bucket_hue(bucket: usize) -> f32 {
    HUE_MIN + (bucket as f32 + 0.5) * (HUE_MAX - HUE_MIN) / GLOW_BUCKETS as f32
}

fn glow_bucket(hue: f32) -> usize {
    let t = (hue - HUE_MIN) / (HUE_MAX - HUE_MIN);
    ((t * GLOW_BUCKETS as f32) as usize).min(GLOW_BUCKETS - 1)
}
