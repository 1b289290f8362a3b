// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines data structures related to the display texture.

use std::borrow::Cow;

/// Defines how texture coordinates are handled when sampling outside the `[0, 1]` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressMode {
    /// Coordinates wrap around. `1.1` becomes `0.1`.
    Repeat,
    /// Coordinates are clamped to the edge. `1.1` becomes `1.0`.
    ClampToEdge,
}

/// Defines the filtering mode for texture sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterMode {
    /// Point sampling. Returns the value of the nearest texel.
    Nearest,
    /// Linear interpolation. Returns a weighted average of the four nearest texels.
    Linear,
}

/// A descriptor used to create a [`TextureId`].
///
/// Display textures are always two-dimensional, single-mip RGBA8 textures
/// that can be written from the CPU and sampled by the quad shader.
#[derive(Debug, Clone)]
pub struct TextureDescriptor<'a> {
    /// An optional debug label.
    pub label: Option<Cow<'a, str>>,
    /// The width in texels.
    pub width: u32,
    /// The height in texels.
    pub height: u32,
    /// The address mode for both texture coordinates.
    pub address_mode: AddressMode,
    /// The filter used for both magnification and minification.
    pub filter: FilterMode,
}

impl<'a> TextureDescriptor<'a> {
    /// A clamped, linearly filtered texture, the settings used for surface presentation.
    pub fn display(label: impl Into<Cow<'a, str>>, width: u32, height: u32) -> Self {
        Self {
            label: Some(label.into()),
            width,
            height,
            address_mode: AddressMode::ClampToEdge,
            filter: FilterMode::Linear,
        }
    }

    /// Gets the row size in bytes of a tightly packed RGBA8 upload.
    pub fn row_size(&self) -> u32 {
        self.width * BYTES_PER_TEXEL
    }
}

/// Display textures store four bytes per texel.
pub const BYTES_PER_TEXEL: u32 = 4;

/// An opaque handle to a GPU texture resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub usize);
