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

//! The canvas: a persistent 2D drawing surface displayed as a texture.
//!
//! A [`Canvas`] is a `tiny-skia` [`Pixmap`] that any of the library's drawing
//! calls can target, paired with a GPU texture of the same size and a quad to
//! present it. Each presented frame runs the same cycle: draw into the
//! surface, [`Canvas::flush`], [`Canvas::draw`], then swap buffers on the window.

use crate::error::{RaError, RaResult};
use crate::renderer::{
    DisplayDevice, MeshDescriptor, MeshId, TextureDescriptor, TextureId, BYTES_PER_TEXEL,
};
use crate::window::RaWindow;
use std::fmt;
use std::sync::Arc;
use tiny_skia::{Pixmap, PixmapMut};

/// A drawing surface paired with the texture and quad that present it.
///
/// The texture is created with the surface's dimensions and never resized.
/// Dropping the canvas releases the texture and the mesh.
pub struct Canvas {
    surface: Pixmap,
    texture: TextureId,
    mesh: MeshId,
    device: Arc<dyn DisplayDevice>,
}

impl Canvas {
    /// Creates a canvas sized to the window's framebuffer and attaches it to
    /// the window, replacing (and releasing) any canvas it already had.
    pub fn create_for_window(window: &mut RaWindow) -> RaResult<&mut Canvas> {
        let (width, height) = window.get_framebuffer_size()?;
        let canvas = Canvas::new(Arc::clone(window.device()), width, height)?;
        Ok(window.attach_canvas(canvas))
    }

    /// Creates a detached canvas of the given size on `device`.
    pub fn new(device: Arc<dyn DisplayDevice>, width: u32, height: u32) -> RaResult<Self> {
        let surface = Pixmap::new(width, height).ok_or_else(|| {
            RaError::invalid_argument(format!(
                "cannot create a {width}x{height} drawing surface"
            ))
        })?;

        let texture =
            device.create_texture(&TextureDescriptor::display("Radium Canvas Texture", width, height))?;
        let mesh = match device.create_mesh(&MeshDescriptor::fullscreen_quad("Radium Canvas Quad")) {
            Ok(mesh) => mesh,
            Err(e) => {
                if let Err(release) = device.destroy_texture(texture) {
                    log::error!("Failed to release canvas texture {texture:?}: {release}");
                }
                return Err(e);
            }
        };

        log::info!("Canvas created: {width}x{height} (texture {texture:?}, mesh {mesh:?})");
        Ok(Self {
            surface,
            texture,
            mesh,
            device,
        })
    }

    /// Returns the drawing surface.
    pub fn surface(&self) -> &Pixmap {
        &self.surface
    }

    /// Returns the drawing surface for direct mutation.
    pub fn surface_mut(&mut self) -> &mut Pixmap {
        &mut self.surface
    }

    /// Returns a drawing handle for issuing `tiny-skia` drawing calls.
    pub fn context(&mut self) -> PixmapMut<'_> {
        self.surface.as_mut()
    }

    /// Returns the surface (and texture) dimensions.
    pub fn size(&self) -> (u32, u32) {
        (self.surface.width(), self.surface.height())
    }

    /// Returns the texture the surface is uploaded into.
    pub fn texture(&self) -> TextureId {
        self.texture
    }

    /// Returns the quad the texture is drawn with.
    pub fn mesh(&self) -> MeshId {
        self.mesh
    }

    /// Copies the whole surface into the texture.
    ///
    /// The surface is read top-down, four bytes per pixel in premultiplied
    /// RGBA order, and written as one sub-image at the texture origin. This
    /// is the only point where CPU-side drawing reaches the GPU.
    pub fn flush(&mut self) -> RaResult<()> {
        let (width, height) = self.size();
        self.device.write_texture(
            self.texture,
            self.surface.data(),
            width * BYTES_PER_TEXEL,
            [0, 0],
            [width, height],
        )
    }

    /// Draws the canvas to the current frame. Does not swap buffers.
    pub fn draw(&self) -> RaResult<()> {
        self.device.draw_textured(self.texture, self.mesh)
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("size", &self.size())
            .field("texture", &self.texture)
            .field("mesh", &self.mesh)
            .finish()
    }
}

impl Drop for Canvas {
    fn drop(&mut self) {
        if let Err(e) = self.device.destroy_mesh(self.mesh) {
            log::error!("Failed to release canvas mesh {:?}: {e}", self.mesh);
        }
        if let Err(e) = self.device.destroy_texture(self.texture) {
            log::error!("Failed to release canvas texture {:?}: {e}", self.texture);
        }
        log::debug!("Canvas released (texture {:?}, mesh {:?})", self.texture, self.mesh);
    }
}
