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

use sdl3_sys::rect::SDL_FRect;

use crate::math::Vec2;

#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct RectF(pub SDL_FRect);

impl RectF {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self(SDL_FRect { x, y, w, h })
    }

    /// A w×h rectangle centered on the given point
    pub fn centered(center: Vec2, w: f32, h: f32) -> Self {
        Self::new(center.0 - w / 2.0, center.1 - h / 2.0, w, h)
    }

    pub fn x(&self) -> f32 {
        self.0.x
    }

    pub fn y(&self) -> f32 {
        self.0.y
    }

    pub fn w(&self) -> f32 {
        self.0.w
    }

    pub fn h(&self) -> f32 {
        self.0.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let rect = RectF::centered(Vec2(100.0, 50.0), 20.0, 10.0);
        assert_eq!(rect.x(), 90.0);
        assert_eq!(rect.y(), 45.0);
        assert_eq!(rect.w(), 20.0);
        assert_eq!(rect.h(), 10.0);
    }
}
