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

use sdl3_sys::blendmode::SDL_BLENDMODE_BLEND;
use sdl3_sys::video::{SDL_SetWindowFullscreen, SDL_WINDOW_FULLSCREEN, SDL_WINDOW_RESIZABLE};
use std::ptr::{null, null_mut};

use super::{SdlError, SdlResult};
use sdl3_sys::{
    pixels::SDL_ALPHA_OPAQUE,
    rect::SDL_Rect,
    render::{
        SDL_CreateWindowAndRenderer, SDL_DestroyRenderer, SDL_GetRenderViewport, SDL_RenderClear,
        SDL_RenderPresent, SDL_Renderer, SDL_SetRenderDrawBlendMode, SDL_SetRenderDrawColor,
        SDL_SetRenderVSync, SDL_SetRenderViewport,
    },
    video::SDL_Window,
};

pub struct Renderer {
    window: *mut SDL_Window,
    pub(super) renderer: *mut SDL_Renderer,
    width: i32,
    height: i32,
    fullscreen: bool,
}

impl Drop for Renderer {
    fn drop(&mut self) {
        unsafe {
            SDL_DestroyRenderer(self.renderer);
        }
    }
}

impl Renderer {
    pub fn create(fullscreen: bool) -> SdlResult<Self> {
        let mut window: *mut SDL_Window = null_mut();
        let mut renderer: *mut SDL_Renderer = null_mut();

        let mut flags = SDL_WINDOW_RESIZABLE;
        if fullscreen {
            flags |= SDL_WINDOW_FULLSCREEN;
        }

        SdlError::check(
            unsafe {
                SDL_CreateWindowAndRenderer(
                    c"Stardrift".as_ptr(),
                    1024,
                    768,
                    flags,
                    &mut window,
                    &mut renderer,
                )
            },
            "Couldn't create renderer",
        )?;

        SdlError::check(
            unsafe { SDL_SetRenderVSync(renderer, 1) },
            "Couldn't enable V-Sync",
        )?;

        unsafe {
            SDL_SetRenderDrawBlendMode(renderer, SDL_BLENDMODE_BLEND);
        }

        Ok(Self {
            window,
            renderer,
            width: 1024,
            height: 768,
            fullscreen,
        })
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        unsafe {
            SDL_SetWindowFullscreen(self.window, self.fullscreen);
        }
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn reset_viewport(&mut self) -> SdlResult<()> {
        SdlError::check(
            unsafe { SDL_SetRenderViewport(self.renderer, null()) },
            "couldn't set viewport",
        )?;

        let mut rect = SDL_Rect {
            x: 0,
            y: 0,
            w: 0,
            h: 0,
        };

        SdlError::check(
            unsafe { SDL_GetRenderViewport(self.renderer, &mut rect) },
            "couldn't get viewport",
        )?;

        self.width = rect.w;
        self.height = rect.h;

        Ok(())
    }

    pub fn clear(&self) {
        unsafe {
            SDL_SetRenderDrawColor(self.renderer, 0, 0, 0, SDL_ALPHA_OPAQUE);
            SDL_RenderClear(self.renderer);
        }
    }

    pub fn present(&self) {
        unsafe {
            SDL_RenderPresent(self.renderer);
        }
    }
}
