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

//! The contract with the rendering framework.
//!
//! Radium only needs to get a raster image on screen: a texture, a quad, one
//! shader and a present call. [`DisplayDevice`] captures exactly that, so
//! canvases and image layers never touch a concrete graphics backend.

pub mod device;
pub mod mesh;
pub mod texture;

pub use device::{check_texture_size, check_texture_write, DisplayDevice};
pub use mesh::{MeshDescriptor, MeshId, QuadVertex, FULLSCREEN_QUAD};
pub use texture::{AddressMode, FilterMode, TextureDescriptor, TextureId, BYTES_PER_TEXEL};
