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

use sdl3_sys::filesystem::SDL_GetPrefPath;
use sdl3_sys::stdinc::SDL_free;
use std::ffi::{CStr, c_void};
use std::path::{Path, PathBuf};

/**
 * Get the full path to a saveable file (such as a configuration file.)
 */
pub fn get_savefile_path(path: impl AsRef<Path>) -> PathBuf {
    let bp = unsafe { SDL_GetPrefPath(c"io.github.callaa.stardrift".as_ptr(), c"stardrift".as_ptr()) };
    if bp.is_null() {
        // shouldn't happen
        panic!("Couldn't find preferences base path!");
    }

    let prefpath = unsafe { CStr::from_ptr(bp) };
    let prefpath = prefpath
        .to_str()
        .expect("preferences path not utf-8 encoded!");
    let prefpath = PathBuf::from(prefpath);

    unsafe {
        SDL_free(bp as *mut c_void);
    }

    prefpath.join(path)
}
