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

use argh::FromArgs;
use log::error;
use sdl3_main::{AppResult, AppResultWithState, app_impl};
use sdl3_sys::events::{
    SDL_EVENT_KEY_DOWN, SDL_EVENT_KEY_UP, SDL_EVENT_MOUSE_MOTION, SDL_EVENT_QUIT, SDL_EVENT_USER,
    SDL_EVENT_WINDOW_RESIZED, SDL_Event, SDL_EventType,
};
use sdl3_sys::init::{SDL_INIT_VIDEO, SDL_Init, SDL_SetAppMetadata};
use sdl3_sys::keycode::{
    SDL_KMOD_ALT, SDLK_COMMA, SDLK_EQUALS, SDLK_ESCAPE, SDLK_M, SDLK_MINUS, SDLK_PERIOD, SDLK_PLUS,
    SDLK_Q, SDLK_RETURN,
};
use sdl3_sys::timer::{SDL_DelayNS, SDL_GetTicksNS};

use std::cell::RefCell;
use std::ffi::CString;
use std::rc::Rc;
use std::sync::Mutex;

use crate::configfile::{APP_CONFIG, load_user_config, save_user_config};
use crate::events::CUSTOM_EVENTS;
use crate::galaxy::{GalaxyParams, GalaxyView};
use crate::gfx::{Renderer, SdlError};

mod configfile;
pub mod events;
mod fs;
mod galaxy;
mod gfx;
mod math;

struct AppState {
    renderer: Rc<RefCell<Renderer>>,
    view: GalaxyView,
    params: GalaxyParams,
}

#[derive(FromArgs)]
#[argh(description = "Animated Galaxy Backdrop")]
struct Arguments {
    #[argh(option, description = "star population multiplier")]
    density: Option<f32>,

    #[argh(option, description = "animation speed multiplier")]
    speed: Option<f32>,

    #[argh(switch, description = "disable mouse parallax")]
    no_mouse: bool,

    #[argh(switch, short = 'f', description = "start in fullscreen mode")]
    fullscreen: bool,

    #[argh(switch, short = 'w', description = "start in windowed mode")]
    window: bool,
}

unsafe impl Send for AppState {}

#[app_impl]
impl AppState {
    fn app_init() -> AppResultWithState<Box<Mutex<Self>>> {
        let args: Arguments = argh::from_env();

        env_logger::builder()
            .filter_level(log::LevelFilter::Info)
            .init();

        unsafe {
            if !SDL_SetAppMetadata(
                c"Stardrift".as_ptr(),
                CString::new(env!("CARGO_PKG_VERSION")).unwrap().as_ptr(),
                c"io.github.callaa.stardrift".as_ptr(),
            ) {
                return AppResultWithState::Failure(None);
            }

            if !SDL_Init(SDL_INIT_VIDEO) {
                SdlError::log("Couldn't init SDL");
                return AppResultWithState::Failure(None);
            }
        }

        load_user_config();
        let config = APP_CONFIG.read().unwrap();

        let mut params = config.galaxy;
        if let Some(density) = args.density {
            params.density = density;
        }
        if let Some(speed) = args.speed {
            params.speed = speed;
        }
        if args.no_mouse {
            params.mouse_interaction = false;
        }

        let renderer =
            match Renderer::create(!args.window && (args.fullscreen || config.video.fullscreen)) {
                Ok(r) => Rc::new(RefCell::new(r)),
                Err(err) => {
                    error!("Couldn't create renderer: {}", err);
                    return AppResultWithState::Failure(None);
                }
            };

        let view = match GalaxyView::new(&renderer.borrow(), params) {
            Ok(v) => v,
            Err(err) => {
                error!("Couldn't create galaxy: {}", err);
                return AppResultWithState::Failure(None);
            }
        };

        drop(config);

        AppResultWithState::Continue(Box::new(Mutex::new(AppState {
            renderer,
            view,
            params,
        })))
    }

    fn app_iterate(&mut self) -> AppResult {
        let ticks = unsafe { SDL_GetTicksNS() };
        self.view.step();
        self.view.render(&self.renderer.borrow());
        let ticks2 = unsafe { SDL_GetTicksNS() };

        // Limit framerate
        let dticks = ticks2 - ticks;
        if dticks < NANOSECONDS_PER_FRAME {
            unsafe {
                SDL_DelayNS(NANOSECONDS_PER_FRAME - dticks);
            }
        }

        AppResult::Continue
    }

    fn app_event(&mut self, event: &SDL_Event) -> AppResult {
        let event_type = SDL_EventType(unsafe { event.r#type });
        match event_type {
            SDL_EVENT_QUIT => return AppResult::Success,
            SDL_EVENT_WINDOW_RESIZED => {
                if let Err(e) = self.renderer.borrow_mut().reset_viewport() {
                    error!("Failed to handle window resize: {}", e);
                } else {
                    self.view.resize(self.renderer.borrow().size());
                }
            }
            SDL_EVENT_MOUSE_MOTION => {
                let motion = unsafe { &event.motion };
                self.view.pointer_moved(motion.x, motion.y);
            }
            SDL_EVENT_KEY_DOWN | SDL_EVENT_KEY_UP => {
                let key = unsafe { &event.key };
                if key.key == SDLK_RETURN && (key.r#mod & SDL_KMOD_ALT) > 0 && !key.down {
                    self.renderer.borrow_mut().toggle_fullscreen();
                } else if key.down {
                    if key.key == SDLK_ESCAPE || key.key == SDLK_Q {
                        return AppResult::Success;
                    }

                    let mut params = self.params;
                    if key.key == SDLK_PERIOD {
                        params.adjust_density(GalaxyParams::DENSITY_STEP);
                    } else if key.key == SDLK_COMMA {
                        params.adjust_density(-GalaxyParams::DENSITY_STEP);
                    } else if key.key == SDLK_EQUALS || key.key == SDLK_PLUS {
                        params.adjust_speed(GalaxyParams::SPEED_STEP);
                    } else if key.key == SDLK_MINUS {
                        params.adjust_speed(-GalaxyParams::SPEED_STEP);
                    } else if key.key == SDLK_M {
                        params.mouse_interaction = !params.mouse_interaction;
                    }
                    self.apply_params(params);
                }
            }
            t if t >= SDL_EVENT_USER => {
                if t.0 == CUSTOM_EVENTS.settings_changed {
                    self.rebuild_galaxy();
                }
            }
            _ => {}
        }

        AppResult::Continue
    }
}

impl AppState {
    /// Persist changed parameters. The save posts a settings changed
    /// event and the galaxy is rebuilt when it arrives.
    fn apply_params(&mut self, params: GalaxyParams) {
        if params == self.params {
            return;
        }
        self.params = params;

        let mut config = APP_CONFIG.read().unwrap().clone();
        config.galaxy = params;
        save_user_config(config);
    }

    /// A parameter change regenerates the whole world; dropping the old
    /// view releases its textures.
    fn rebuild_galaxy(&mut self) {
        match GalaxyView::new(&self.renderer.borrow(), self.params) {
            Ok(view) => self.view = view,
            Err(err) => error!("Couldn't rebuild galaxy: {}", err),
        }
    }
}

static NANOSECONDS_PER_FRAME: u64 = 1_000_000_000 / 60;
