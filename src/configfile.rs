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

use std::{
    fs::{read_to_string, write},
    sync::RwLock,
};

use log::{error, info, warn};
use serde::{Deserialize, Serialize};

use crate::{events::push_settings_changed_event, fs::get_savefile_path, galaxy::GalaxyParams};

#[derive(Serialize, Deserialize, Default, Clone)]
pub struct VideoConfig {
    #[serde(default)]
    pub fullscreen: bool,
}

#[derive(Serialize, Deserialize, Default, Clone)]
pub struct UserConfig {
    #[serde(default)]
    pub video: VideoConfig,
    #[serde(default)]
    pub galaxy: GalaxyParams,
}

pub static APP_CONFIG: RwLock<UserConfig> = RwLock::new(UserConfig {
    video: VideoConfig { fullscreen: false },
    galaxy: GalaxyParams {
        density: 1.0,
        speed: 1.0,
        mouse_interaction: true,
    },
});

pub fn load_user_config() {
    let filename = get_savefile_path("settings.toml");
    let content = match read_to_string(&filename) {
        Ok(c) => c,
        Err(e) => {
            warn!("Couldn't read user config file ({:?}): {}", filename, e);
            "".to_owned()
        }
    };

    let config = match toml::from_str(&content) {
        Ok(c) => c,
        Err(e) => {
            error!("Couldn't parse user config file ({:?}: {}", filename, e);
            Default::default()
        }
    };

    let mut w = APP_CONFIG.write().unwrap();
    *w = config;
}

pub fn save_user_config(config: UserConfig) {
    let filename = get_savefile_path("settings.toml");
    let content = match toml::to_string(&config) {
        Ok(c) => c,
        Err(err) => {
            error!("Failed to serialize user config! {err}");
            return;
        }
    };

    if let Err(e) = write(&filename, content) {
        error!("Failed to write config file {:?}: {e}", filename);
        return;
    }

    let mut w = APP_CONFIG.write().unwrap();
    *w = config;
    drop(w);

    info!("Saved user preferences {:?}", filename);
    push_settings_changed_event();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: UserConfig = toml::from_str("").unwrap();

        assert!(!config.video.fullscreen);
        assert_eq!(config.galaxy.density, 1.0);
        assert_eq!(config.galaxy.speed, 1.0);
        assert!(config.galaxy.mouse_interaction);
    }

    #[test]
    fn test_partial_config() {
        let config: UserConfig = toml::from_str(
            r#"
            [galaxy]
            density = 2.5
            mouse_interaction = false
        "#,
        )
        .unwrap();

        assert_eq!(config.galaxy.density, 2.5);
        assert_eq!(config.galaxy.speed, 1.0);
        assert!(!config.galaxy.mouse_interaction);
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = UserConfig::default();
        config.video.fullscreen = true;
        config.galaxy.speed = -0.5;

        let serialized = toml::to_string(&config).unwrap();
        let parsed: UserConfig = toml::from_str(&serialized).unwrap();

        assert!(parsed.video.fullscreen);
        assert_eq!(parsed.galaxy.speed, -0.5);
        assert_eq!(parsed.galaxy.density, 1.0);
    }
}
