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

use std::ptr::null;

use sdl3_sys::{
    blendmode::SDL_BLENDMODE_BLEND,
    render::{
        SDL_CreateTextureFromSurface, SDL_DestroyTexture, SDL_RenderTexture,
        SDL_SetTextureAlphaModFloat, SDL_SetTextureBlendMode, SDL_SetTextureColorModFloat,
        SDL_SetTextureScaleMode, SDL_Texture,
    },
    surface::SDL_SCALEMODE_LINEAR,
};

use super::{Color, Image, Renderer, SdlError, SdlResult};
use crate::math::RectF;

pub struct Texture {
    tex: *mut SDL_Texture,
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe { SDL_DestroyTexture(self.tex) };
    }
}

impl Texture {
    /// Upload a procedurally drawn image.
    ///
    /// The texture is set up for alpha blending with smooth scaling,
    /// since sprites are always drawn scaled to their world size.
    pub fn from_image(renderer: &Renderer, image: &Image) -> SdlResult<Texture> {
        let tex = unsafe { SDL_CreateTextureFromSurface(renderer.renderer, image.0) };
        if tex.is_null() {
            return Err(SdlError::get_error("Couldn't convert image into texture"));
        }

        unsafe {
            SDL_SetTextureBlendMode(tex, SDL_BLENDMODE_BLEND);
            SDL_SetTextureScaleMode(tex, SDL_SCALEMODE_LINEAR);
        }

        Ok(Texture { tex })
    }

    /// Draw the whole texture scaled into the destination rectangle,
    /// tinted and faded by the given color.
    pub fn render(&self, renderer: &Renderer, dest: RectF, color: &Color) {
        unsafe {
            SDL_SetTextureColorModFloat(self.tex, color.r, color.g, color.b);
            SDL_SetTextureAlphaModFloat(self.tex, color.a);

            if !SDL_RenderTexture(renderer.renderer, self.tex, null(), &dest.0) {
                SdlError::log("Texture render");
            }
        }
    }
}
