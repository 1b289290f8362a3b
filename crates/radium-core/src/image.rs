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

//! Raw pixel buffers shown without a canvas.

use crate::error::RaResult;
use crate::pixel::{to_rgba8, PixelFormat};
use crate::renderer::{
    DisplayDevice, MeshDescriptor, MeshId, TextureDescriptor, TextureId, BYTES_PER_TEXEL,
};
use std::sync::Arc;

/// Displays raw pixel buffers without going through a canvas.
///
/// The display texture is created on the first upload and re-created whenever
/// an upload has different dimensions.
#[derive(Debug)]
pub struct ImageLayer {
    device: Arc<dyn DisplayDevice>,
    mesh: MeshId,
    texture: Option<(TextureId, (u32, u32))>,
}

impl ImageLayer {
    /// Creates an empty layer and its quad on `device`.
    pub fn new(device: Arc<dyn DisplayDevice>) -> RaResult<Self> {
        let mesh = device.create_mesh(&MeshDescriptor::fullscreen_quad("Radium Image Quad"))?;
        Ok(Self {
            device,
            mesh,
            texture: None,
        })
    }

    /// Uploads an image, converting it to RGBA8 first.
    pub fn set_image(
        &mut self,
        width: u32,
        height: u32,
        format: PixelFormat,
        pixels: &[u8],
    ) -> RaResult<()> {
        let rgba = to_rgba8(format, width, height, pixels)?;

        let texture = match self.texture {
            Some((id, size)) if size == (width, height) => id,
            previous => {
                if let Some((old, _)) = previous {
                    self.texture = None;
                    self.device.destroy_texture(old)?;
                }
                let id = self.device.create_texture(&TextureDescriptor::display(
                    "Radium Image Texture",
                    width,
                    height,
                ))?;
                self.texture = Some((id, (width, height)));
                id
            }
        };

        log::debug!("Uploading {width}x{height} {format:?} image into {texture:?}");
        self.device
            .write_texture(texture, &rgba, width * BYTES_PER_TEXEL, [0, 0], [width, height])
    }

    /// Whether an image has been uploaded.
    pub fn has_image(&self) -> bool {
        self.texture.is_some()
    }

    /// Returns the current display texture and its size.
    pub fn texture(&self) -> Option<(TextureId, (u32, u32))> {
        self.texture
    }

    /// Queues the image for drawing. Does nothing before the first upload.
    pub fn draw(&self) -> RaResult<()> {
        match self.texture {
            Some((texture, _)) => self.device.draw_textured(texture, self.mesh),
            None => Ok(()),
        }
    }
}

impl Drop for ImageLayer {
    fn drop(&mut self) {
        if let Some((texture, _)) = self.texture.take() {
            if let Err(e) = self.device.destroy_texture(texture) {
                log::error!("Failed to release image texture {texture:?}: {e}");
            }
        }
        if let Err(e) = self.device.destroy_mesh(self.mesh) {
            log::error!("Failed to release image mesh {:?}: {e}", self.mesh);
        }
    }
}
