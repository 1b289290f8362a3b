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

//! Raw pixel buffer layouts accepted by the image upload path.

use crate::error::{RaError, RaResult};
use std::borrow::Cow;

/// The layout of a tightly packed, top-down pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelFormat {
    /// Four bytes per pixel: red, green, blue, alpha.
    Rgba8 = 0,
    /// Four bytes per pixel: blue, green, red, alpha.
    Bgra8 = 1,
    /// Three bytes per pixel: red, green, blue. Alpha is opaque.
    Rgb8 = 2,
    /// Three bytes per pixel: blue, green, red. Alpha is opaque.
    Bgr8 = 3,
    /// One byte per pixel, replicated into the color channels. Alpha is opaque.
    Gray8 = 4,
}

impl PixelFormat {
    /// Returns the number of bytes one pixel occupies.
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgba8 | PixelFormat::Bgra8 => 4,
            PixelFormat::Rgb8 | PixelFormat::Bgr8 => 3,
            PixelFormat::Gray8 => 1,
        }
    }

    /// Returns the buffer length a `width` x `height` image must have.
    pub fn buffer_len(self, width: u32, height: u32) -> usize {
        width as usize * height as usize * self.bytes_per_pixel()
    }

    /// Maps the raw value used by the C surface back to a format.
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(PixelFormat::Rgba8),
            1 => Some(PixelFormat::Bgra8),
            2 => Some(PixelFormat::Rgb8),
            3 => Some(PixelFormat::Bgr8),
            4 => Some(PixelFormat::Gray8),
            _ => None,
        }
    }
}

/// Converts a buffer of the given format to tightly packed RGBA8.
///
/// RGBA8 input is borrowed as-is. The buffer length must match the
/// dimensions exactly.
pub fn to_rgba8(
    format: PixelFormat,
    width: u32,
    height: u32,
    pixels: &[u8],
) -> RaResult<Cow<'_, [u8]>> {
    if width == 0 || height == 0 {
        return Err(RaError::invalid_argument(format!(
            "image dimensions must be non-zero, got {width}x{height}"
        )));
    }
    let expected = format.buffer_len(width, height);
    if pixels.len() != expected {
        return Err(RaError::invalid_argument(format!(
            "{format:?} image of {width}x{height} needs {expected} bytes, got {}",
            pixels.len()
        )));
    }

    let converted = match format {
        PixelFormat::Rgba8 => return Ok(Cow::Borrowed(pixels)),
        PixelFormat::Bgra8 => pixels
            .chunks_exact(4)
            .flat_map(|p| [p[2], p[1], p[0], p[3]])
            .collect(),
        PixelFormat::Rgb8 => pixels
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], u8::MAX])
            .collect(),
        PixelFormat::Bgr8 => pixels
            .chunks_exact(3)
            .flat_map(|p| [p[2], p[1], p[0], u8::MAX])
            .collect(),
        PixelFormat::Gray8 => pixels
            .iter()
            .flat_map(|&v| [v, v, v, u8::MAX])
            .collect(),
    };
    Ok(Cow::Owned(converted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_rgba_input_is_borrowed() {
        let pixels = [1, 2, 3, 4, 5, 6, 7, 8];
        let out = to_rgba8(PixelFormat::Rgba8, 2, 1, &pixels).unwrap();
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(&*out, &pixels);
    }

    #[test]
    fn test_bgra_swaps_red_and_blue() {
        let out = to_rgba8(PixelFormat::Bgra8, 1, 1, &[10, 20, 30, 40]).unwrap();
        assert_eq!(&*out, &[30, 20, 10, 40]);
    }

    #[test]
    fn test_three_channel_formats_become_opaque() {
        let rgb = to_rgba8(PixelFormat::Rgb8, 2, 1, &[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(&*rgb, &[1, 2, 3, 255, 4, 5, 6, 255]);

        let bgr = to_rgba8(PixelFormat::Bgr8, 1, 1, &[1, 2, 3]).unwrap();
        assert_eq!(&*bgr, &[3, 2, 1, 255]);
    }

    #[test]
    fn test_gray_is_replicated() {
        let out = to_rgba8(PixelFormat::Gray8, 2, 1, &[7, 200]).unwrap();
        assert_eq!(&*out, &[7, 7, 7, 255, 200, 200, 200, 255]);
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        let err = to_rgba8(PixelFormat::Rgba8, 2, 2, &[0; 15]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let err = to_rgba8(PixelFormat::Gray8, 0, 4, &[]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
    }

    #[test]
    fn test_unknown_raw_format_is_none() {
        assert_eq!(PixelFormat::from_raw(1), Some(PixelFormat::Bgra8));
        assert_eq!(PixelFormat::from_raw(99), None);
    }
}
