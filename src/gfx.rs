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

mod color;
mod errors;
mod image;
mod renderer;
mod sprites;
mod texture;

pub use color::Color;
pub use errors::{SdlError, SdlResult};
pub use image::Image;
pub use renderer::Renderer;
pub use sprites::{core_sprite, glow_sprite, nebula_sprite};
pub use texture::Texture;
