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

//! Headless window and display used to drive the C surface without a GPU.

#![allow(dead_code)]

use radium_core::error::{RaError, RaResult};
use radium_core::platform::NativeWindow;
use radium_core::renderer::{
    check_texture_write, DisplayDevice, MeshDescriptor, MeshId, TextureDescriptor, TextureId,
};
use radium_core::RaWindow;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// A display that keeps texture contents in memory and counts frames.
#[derive(Debug, Default)]
pub struct HeadlessDisplay {
    next_id: AtomicUsize,
    textures: Mutex<HashMap<TextureId, ((u32, u32), Vec<u8>)>>,
    meshes: Mutex<HashMap<MeshId, usize>>,
    pub draws: AtomicUsize,
    pub presents: AtomicUsize,
    framebuffer: (u32, u32),
}

impl HeadlessDisplay {
    pub fn new(width: u32, height: u32) -> Arc<Self> {
        Arc::new(Self {
            framebuffer: (width, height),
            ..Default::default()
        })
    }

    pub fn live_textures(&self) -> usize {
        self.textures.lock().unwrap().len()
    }

    pub fn only_texture_data(&self) -> Vec<u8> {
        let textures = self.textures.lock().unwrap();
        assert_eq!(textures.len(), 1, "expected exactly one texture");
        textures.values().next().unwrap().1.clone()
    }
}

impl DisplayDevice for HeadlessDisplay {
    fn create_texture(&self, descriptor: &TextureDescriptor) -> RaResult<TextureId> {
        let id = TextureId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let len = descriptor.width as usize * descriptor.height as usize * 4;
        self.textures
            .lock()
            .unwrap()
            .insert(id, ((descriptor.width, descriptor.height), vec![0; len]));
        Ok(id)
    }

    fn destroy_texture(&self, id: TextureId) -> RaResult<()> {
        self.textures
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RaError::invalid_argument("unknown texture"))
    }

    fn write_texture(
        &self,
        id: TextureId,
        data: &[u8],
        bytes_per_row: u32,
        origin: [u32; 2],
        size: [u32; 2],
    ) -> RaResult<()> {
        let mut textures = self.textures.lock().unwrap();
        let (dims, stored) = textures
            .get_mut(&id)
            .ok_or_else(|| RaError::invalid_argument("unknown texture"))?;
        check_texture_write(*dims, data.len(), bytes_per_row, origin, size)?;
        *stored = data.to_vec();
        Ok(())
    }

    fn texture_size(&self, id: TextureId) -> RaResult<(u32, u32)> {
        self.textures
            .lock()
            .unwrap()
            .get(&id)
            .map(|(dims, _)| *dims)
            .ok_or_else(|| RaError::invalid_argument("unknown texture"))
    }

    fn create_mesh(&self, descriptor: &MeshDescriptor) -> RaResult<MeshId> {
        let id = MeshId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.meshes
            .lock()
            .unwrap()
            .insert(id, descriptor.vertices.len());
        Ok(id)
    }

    fn destroy_mesh(&self, id: MeshId) -> RaResult<()> {
        self.meshes
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RaError::invalid_argument("unknown mesh"))
    }

    fn draw_textured(&self, _texture: TextureId, _mesh: MeshId) -> RaResult<()> {
        self.draws.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn present(&self) -> RaResult<()> {
        self.presents.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn resize(&self, _width: u32, _height: u32) -> RaResult<()> {
        Ok(())
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        self.framebuffer
    }
}

/// A window that only remembers its title, size and visibility.
#[derive(Debug)]
pub struct HeadlessWindow {
    pub title: Mutex<String>,
    pub size: Mutex<(u32, u32)>,
    pub visible: Mutex<bool>,
    framebuffer: (u32, u32),
}

impl NativeWindow for HeadlessWindow {
    fn id(&self) -> u64 {
        1
    }
    fn framebuffer_size(&self) -> (u32, u32) {
        self.framebuffer
    }
    fn window_size(&self) -> (u32, u32) {
        *self.size.lock().unwrap()
    }
    fn set_window_size(&self, width: u32, height: u32) {
        *self.size.lock().unwrap() = (width, height);
    }
    fn set_size_limits(&self, _min: Option<(u32, u32)>, _max: Option<(u32, u32)>) {}
    fn position(&self) -> Option<(i32, i32)> {
        None
    }
    fn set_position(&self, _x: i32, _y: i32) {}
    fn scale_factor(&self) -> f64 {
        2.0
    }
    fn set_title(&self, title: &str) {
        *self.title.lock().unwrap() = title.to_owned();
    }
    fn set_minimized(&self, _minimized: bool) {}
    fn set_maximized(&self, _maximized: bool) {}
    fn set_visible(&self, visible: bool) {
        *self.visible.lock().unwrap() = visible;
    }
    fn focus(&self) {}
    fn request_attention(&self) {}
    fn is_focused(&self) -> bool {
        true
    }
    fn is_minimized(&self) -> Option<bool> {
        None
    }
    fn is_maximized(&self) -> bool {
        false
    }
    fn is_visible(&self) -> Option<bool> {
        Some(*self.visible.lock().unwrap())
    }
    fn is_resizable(&self) -> bool {
        true
    }
    fn is_decorated(&self) -> bool {
        true
    }
    fn set_resizable(&self, _resizable: bool) {}
    fn set_decorated(&self, _decorated: bool) {}
    fn set_always_on_top(&self, _always_on_top: bool) {}
    fn set_cursor_position(&self, _x: f64, _y: f64) -> RaResult<()> {
        Ok(())
    }
    fn request_redraw(&self) {}
}

/// Builds a boxed window so tests can hand out a stable raw handle.
pub fn headless_window(
    width: u32,
    height: u32,
) -> (Box<RaWindow>, Arc<HeadlessWindow>, Arc<HeadlessDisplay>) {
    let native = Arc::new(HeadlessWindow {
        title: Mutex::new("Radium".to_owned()),
        size: Mutex::new((width, height)),
        visible: Mutex::new(true),
        framebuffer: (width, height),
    });
    let display = HeadlessDisplay::new(width, height);
    let window = Box::new(RaWindow::new(native.clone(), display.clone()));
    (window, native, display)
}
