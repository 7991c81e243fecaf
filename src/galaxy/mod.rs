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

mod sim;
mod view;
mod world;

pub use sim::Galaxy;
pub use view::GalaxyView;

use serde::{Deserialize, Serialize};

fn default_scale() -> f32 {
    1.0
}

fn default_true() -> bool {
    true
}

/// Construction parameters of the galaxy backdrop.
///
/// Changing any of these tears the whole world down and regenerates it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct GalaxyParams {
    /// Star population multiplier
    #[serde(default = "default_scale")]
    pub density: f32,

    /// Clock advance and depth recycling rate multiplier
    #[serde(default = "default_scale")]
    pub speed: f32,

    /// Pointer parallax on or off
    #[serde(default = "default_true")]
    pub mouse_interaction: bool,
}

impl Default for GalaxyParams {
    fn default() -> Self {
        Self {
            density: 1.0,
            speed: 1.0,
            mouse_interaction: true,
        }
    }
}

impl GalaxyParams {
    pub const DENSITY_STEP: f32 = 0.25;
    pub const SPEED_STEP: f32 = 0.25;

    pub fn adjust_density(&mut self, delta: f32) {
        self.density = (self.density + delta).clamp(0.25, 4.0);
    }

    pub fn adjust_speed(&mut self, delta: f32) {
        self.speed = (self.speed + delta).clamp(-4.0, 4.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjustments_clamp() {
        let mut params = GalaxyParams::default();

        for _ in 0..100 {
            params.adjust_density(-GalaxyParams::DENSITY_STEP);
        }
        assert_eq!(params.density, 0.25);

        for _ in 0..100 {
            params.adjust_density(GalaxyParams::DENSITY_STEP);
        }
        assert_eq!(params.density, 4.0);

        for _ in 0..100 {
            params.adjust_speed(-GalaxyParams::SPEED_STEP);
        }
        assert_eq!(params.speed, -4.0);
    }
}
