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

use std::sync::LazyLock;

use sdl3_sys::events::{SDL_Event, SDL_PushEvent, SDL_RegisterEvents};

#[derive(Debug)]
pub struct CustomEvents {
    pub settings_changed: u32,
}

pub static CUSTOM_EVENTS: LazyLock<CustomEvents> = LazyLock::new(|| {
    let id = unsafe { SDL_RegisterEvents(1) };

    CustomEvents {
        settings_changed: id,
    }
});

/// Posted after the user configuration has been written; the application
/// reacts by rebuilding the galaxy from the new parameters.
pub fn push_settings_changed_event() {
    let mut ev = SDL_Event {
        r#type: CUSTOM_EVENTS.settings_changed,
    };
    unsafe {
        SDL_PushEvent(&mut ev);
    }
}
