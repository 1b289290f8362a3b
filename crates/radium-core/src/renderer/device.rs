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

use crate::error::{RaError, RaResult};
use crate::renderer::mesh::{MeshDescriptor, MeshId};
use crate::renderer::texture::{TextureDescriptor, TextureId, BYTES_PER_TEXEL};
use std::fmt::Debug;

/// The slice of the rendering framework Radium relies on: one texture and one
/// quad mesh per presented surface, drawn with a single textured-quad shader.
pub trait DisplayDevice: Send + Sync + Debug + 'static {
    /// Creates a new RGBA8 texture.
    /// ## Arguments
    /// * `descriptor` - The texture size, sampling and label.
    /// ## Returns
    /// The ID of the created texture.
    fn create_texture(&self, descriptor: &TextureDescriptor) -> RaResult<TextureId>;

    /// Destroys a texture.
    /// ## Errors
    /// `InvalidArgument` if the ID does not name a live texture.
    fn destroy_texture(&self, id: TextureId) -> RaResult<()>;

    /// Writes RGBA8 data into a region of a texture.
    /// ## Arguments
    /// * `texture_id` - The texture to write to.
    /// * `data` - The texel data, top row first.
    /// * `bytes_per_row` - The stride of `data` in bytes.
    /// * `origin` - The top-left texel of the region.
    /// * `size` - The width and height of the region.
    /// ## Errors
    /// `InvalidArgument` if the region falls outside the texture or `data` is too short.
    fn write_texture(
        &self,
        texture_id: TextureId,
        data: &[u8],
        bytes_per_row: u32,
        origin: [u32; 2],
        size: [u32; 2],
    ) -> RaResult<()>;

    /// Returns the width and height a texture was created with.
    fn texture_size(&self, id: TextureId) -> RaResult<(u32, u32)>;

    /// Creates a vertex buffer holding the given mesh.
    fn create_mesh(&self, descriptor: &MeshDescriptor) -> RaResult<MeshId>;

    /// Destroys a mesh.
    fn destroy_mesh(&self, id: MeshId) -> RaResult<()>;

    /// Queues a draw of `mesh` sampling `texture` with the display shader.
    ///
    /// Nothing reaches the screen until [`DisplayDevice::present`].
    fn draw_textured(&self, texture: TextureId, mesh: MeshId) -> RaResult<()>;

    /// Clears the framebuffer, renders every queued draw in order and presents
    /// the frame. This is the swap-buffers operation.
    fn present(&self) -> RaResult<()>;

    /// Reconfigures the framebuffer after the window was resized.
    fn resize(&self, width: u32, height: u32) -> RaResult<()>;

    /// Returns the current framebuffer size in pixels.
    fn framebuffer_size(&self) -> (u32, u32);
}

/// Checks that a `width` x `height` texture is non-empty and fits within the
/// backend's `max_dimension` texels per side.
pub fn check_texture_size(width: u32, height: u32, max_dimension: u32) -> RaResult<()> {
    if width == 0 || height == 0 {
        return Err(RaError::invalid_argument(format!(
            "texture dimensions must be non-zero, got {width}x{height}"
        )));
    }
    if width > max_dimension || height > max_dimension {
        return Err(RaError::invalid_argument(format!(
            "texture of {width}x{height} exceeds the device limit of {max_dimension} texels per side"
        )));
    }
    Ok(())
}

/// Checks that a texture write of `size` texels at `origin`, read from `data`
/// with the given stride, stays inside a texture of `texture_size`.
///
/// Backends call this before handing the data to the native library so that
/// out-of-range uploads fail with `InvalidArgument` instead of a backend panic.
pub fn check_texture_write(
    texture_size: (u32, u32),
    data_len: usize,
    bytes_per_row: u32,
    origin: [u32; 2],
    size: [u32; 2],
) -> RaResult<()> {
    let [x, y] = origin;
    let [width, height] = size;
    let end_x = x.checked_add(width);
    let end_y = y.checked_add(height);
    let fits = matches!((end_x, end_y), (Some(ex), Some(ey)) if ex <= texture_size.0 && ey <= texture_size.1);
    if !fits {
        return Err(RaError::invalid_argument(format!(
            "write of {width}x{height} at ({x}, {y}) exceeds texture of {}x{}",
            texture_size.0, texture_size.1
        )));
    }
    if bytes_per_row < width * BYTES_PER_TEXEL {
        return Err(RaError::invalid_argument(format!(
            "row stride {bytes_per_row} is shorter than {width} texels"
        )));
    }
    let required = match height {
        0 => 0,
        h => bytes_per_row as usize * (h as usize - 1) + (width * BYTES_PER_TEXEL) as usize,
    };
    if data_len < required {
        return Err(RaError::invalid_argument(format!(
            "texture write needs {required} bytes, got {data_len}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_full_texture_write_is_accepted() {
        assert!(check_texture_write((4, 2), 32, 16, [0, 0], [4, 2]).is_ok());
    }

    #[test]
    fn test_sub_region_with_padded_stride_is_accepted() {
        // Two rows of two texels inside a 4-wide source: 16 + 8 bytes.
        assert!(check_texture_write((4, 4), 24, 16, [2, 2], [2, 2]).is_ok());
    }

    #[test]
    fn test_region_past_the_edge_is_rejected() {
        let err = check_texture_write((4, 4), 64, 16, [1, 0], [4, 4]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
    }

    #[test]
    fn test_overflowing_origin_is_rejected() {
        let err = check_texture_write((4, 4), 64, 16, [u32::MAX, 0], [2, 1]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
    }

    #[test]
    fn test_short_buffer_is_rejected() {
        let err = check_texture_write((4, 2), 31, 16, [0, 0], [4, 2]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
    }

    #[test]
    fn test_short_stride_is_rejected() {
        let err = check_texture_write((4, 2), 32, 12, [0, 0], [4, 2]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
    }

    #[test]
    fn test_texture_size_within_the_limit_is_accepted() {
        assert!(check_texture_size(8192, 1, 8192).is_ok());
        assert!(check_texture_size(1, 1, 8192).is_ok());
    }

    #[test]
    fn test_texture_size_over_the_limit_is_rejected() {
        let err = check_texture_size(8193, 16, 8192).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
        assert!(err.message().contains("8193x16"));
        let err = check_texture_size(16, 8193, 8192).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
    }

    #[test]
    fn test_empty_texture_size_is_rejected() {
        for (w, h) in [(0, 4), (4, 0), (0, 0)] {
            let err = check_texture_size(w, h, 8192).unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidArgument);
        }
    }
}
