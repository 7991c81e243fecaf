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

use core::slice;
use sdl3_sys::{
    pixels::SDL_PIXELFORMAT_ARGB8888,
    surface::{SDL_CreateSurface, SDL_DestroySurface, SDL_Surface},
};

use super::{SdlError, SdlResult};

/// A CPU side pixel buffer. All sprites in this program are drawn
/// procedurally into one of these and then uploaded as a texture.
pub struct Image(pub(super) *mut SDL_Surface);

impl Drop for Image {
    fn drop(&mut self) {
        unsafe {
            SDL_DestroySurface(self.0);
        }
    }
}

impl Image {
    pub fn new(width: i32, height: i32) -> SdlResult<Image> {
        let surface = unsafe { SDL_CreateSurface(width, height, SDL_PIXELFORMAT_ARGB8888) };
        if surface.is_null() {
            return Err(SdlError::get_error("Couldn't create surface"));
        }

        Ok(Image(surface))
    }

    pub fn argb8888_pixels_mut(&mut self) -> &mut [u32] {
        let surface = unsafe { &*self.0 };

        unsafe {
            slice::from_raw_parts_mut(surface.pixels as *mut u32, (surface.w * surface.h) as usize)
        }
    }
}
