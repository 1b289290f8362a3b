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

//! Vertex layout and the fixed quad used to present a raster surface.

use std::borrow::Cow;

/// A vertex of a textured quad: clip-space position and texture coordinates.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    /// Position in normalized device coordinates.
    pub position: [f32; 2],
    /// Texture coordinates, origin at the top-left of the texture.
    pub tex_coords: [f32; 2],
}

/// A full-viewport quad drawn as a four-vertex triangle strip.
///
/// The V coordinate is flipped so that the top-left origin of the drawing
/// surface lands in the top-left corner of the window.
pub const FULLSCREEN_QUAD: [QuadVertex; 4] = [
    // bottom left
    QuadVertex {
        position: [-1.0, -1.0],
        tex_coords: [0.0, 1.0],
    },
    // bottom right
    QuadVertex {
        position: [1.0, -1.0],
        tex_coords: [1.0, 1.0],
    },
    // top left
    QuadVertex {
        position: [-1.0, 1.0],
        tex_coords: [0.0, 0.0],
    },
    // top right
    QuadVertex {
        position: [1.0, 1.0],
        tex_coords: [1.0, 0.0],
    },
];

/// A descriptor used to create a [`MeshId`].
///
/// Meshes are drawn as triangle strips: each vertex after the second forms a
/// triangle with the previous two.
#[derive(Debug, Clone)]
pub struct MeshDescriptor<'a> {
    /// An optional debug label.
    pub label: Option<Cow<'a, str>>,
    /// The vertex data.
    pub vertices: Cow<'a, [QuadVertex]>,
}

impl MeshDescriptor<'static> {
    /// The descriptor of the static presentation quad.
    pub fn fullscreen_quad(label: &'static str) -> Self {
        Self {
            label: Some(Cow::Borrowed(label)),
            vertices: Cow::Borrowed(&FULLSCREEN_QUAD),
        }
    }
}

/// An opaque handle to a GPU mesh (vertex buffer plus draw parameters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(pub usize);
