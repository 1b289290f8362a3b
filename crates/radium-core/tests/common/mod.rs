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

//! Recording mocks of the window and display-device contracts.

#![allow(dead_code)]

use radium_core::error::{RaError, RaResult};
use radium_core::platform::NativeWindow;
use radium_core::renderer::{
    check_texture_size, check_texture_write, DisplayDevice, MeshDescriptor, MeshId,
    TextureDescriptor, TextureId,
};
use radium_core::RaWindow;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// One call recorded by [`MockDevice`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceCall {
    CreateTexture(TextureId, u32, u32),
    DestroyTexture(TextureId),
    WriteTexture(TextureId, [u32; 2], [u32; 2]),
    CreateMesh(MeshId, usize),
    DestroyMesh(MeshId),
    Draw(TextureId, MeshId),
    Present,
    Resize(u32, u32),
}

/// Largest texture side accepted by [`MockDevice`].
pub const MOCK_MAX_TEXTURE_DIMENSION: u32 = 1024;

#[derive(Debug, Default)]
pub struct MockDevice {
    next_id: AtomicUsize,
    textures: Mutex<HashMap<TextureId, ((u32, u32), Vec<u8>)>>,
    meshes: Mutex<HashMap<MeshId, usize>>,
    calls: Mutex<Vec<DeviceCall>>,
    framebuffer: Mutex<(u32, u32)>,
}

impl MockDevice {
    pub fn new(width: u32, height: u32) -> Arc<Self> {
        Arc::new(Self {
            framebuffer: Mutex::new((width, height)),
            ..Default::default()
        })
    }

    fn record(&self, call: DeviceCall) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<DeviceCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn live_textures(&self) -> usize {
        self.textures.lock().unwrap().len()
    }

    pub fn live_meshes(&self) -> usize {
        self.meshes.lock().unwrap().len()
    }

    pub fn has_texture(&self, id: TextureId) -> bool {
        self.textures.lock().unwrap().contains_key(&id)
    }

    pub fn texture_size_of(&self, id: TextureId) -> Option<(u32, u32)> {
        self.textures.lock().unwrap().get(&id).map(|(dims, _)| *dims)
    }

    pub fn texture_data(&self, id: TextureId) -> Option<Vec<u8>> {
        self.textures
            .lock()
            .unwrap()
            .get(&id)
            .map(|(_, data)| data.clone())
    }
}

impl DisplayDevice for MockDevice {
    fn create_texture(&self, descriptor: &TextureDescriptor) -> RaResult<TextureId> {
        check_texture_size(
            descriptor.width,
            descriptor.height,
            MOCK_MAX_TEXTURE_DIMENSION,
        )?;
        let id = TextureId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let len = (descriptor.width * descriptor.height * 4) as usize;
        self.textures
            .lock()
            .unwrap()
            .insert(id, ((descriptor.width, descriptor.height), vec![0; len]));
        self.record(DeviceCall::CreateTexture(
            id,
            descriptor.width,
            descriptor.height,
        ));
        Ok(id)
    }

    fn destroy_texture(&self, id: TextureId) -> RaResult<()> {
        self.textures
            .lock()
            .unwrap()
            .remove(&id)
            .ok_or_else(|| RaError::invalid_argument("unknown texture"))?;
        self.record(DeviceCall::DestroyTexture(id));
        Ok(())
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
        if origin == [0, 0] && size == [dims.0, dims.1] {
            stored.clear();
            stored.extend_from_slice(data);
        }
        drop(textures);
        self.record(DeviceCall::WriteTexture(id, origin, size));
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
        self.record(DeviceCall::CreateMesh(id, descriptor.vertices.len()));
        Ok(id)
    }

    fn destroy_mesh(&self, id: MeshId) -> RaResult<()> {
        self.meshes
            .lock()
            .unwrap()
            .remove(&id)
            .ok_or_else(|| RaError::invalid_argument("unknown mesh"))?;
        self.record(DeviceCall::DestroyMesh(id));
        Ok(())
    }

    fn draw_textured(&self, texture: TextureId, mesh: MeshId) -> RaResult<()> {
        if !self.has_texture(texture) || !self.meshes.lock().unwrap().contains_key(&mesh) {
            return Err(RaError::invalid_argument("unknown draw resource"));
        }
        self.record(DeviceCall::Draw(texture, mesh));
        Ok(())
    }

    fn present(&self) -> RaResult<()> {
        self.record(DeviceCall::Present);
        Ok(())
    }

    fn resize(&self, width: u32, height: u32) -> RaResult<()> {
        *self.framebuffer.lock().unwrap() = (width, height);
        self.record(DeviceCall::Resize(width, height));
        Ok(())
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        *self.framebuffer.lock().unwrap()
    }
}

/// A window whose state lives in plain fields.
#[derive(Debug)]
pub struct MockWindow {
    pub state: Mutex<MockWindowState>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MockWindowState {
    pub title: String,
    pub framebuffer: (u32, u32),
    pub size: (u32, u32),
    pub limits: (Option<(u32, u32)>, Option<(u32, u32)>),
    pub position: (i32, i32),
    pub scale: f64,
    pub minimized: bool,
    pub maximized: bool,
    pub visible: bool,
    pub focused: bool,
    pub attention: bool,
    pub resizable: bool,
    pub decorated: bool,
    pub on_top: bool,
    pub cursor: Option<(f64, f64)>,
    pub redraws: usize,
}

impl MockWindow {
    pub fn new(width: u32, height: u32) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(MockWindowState {
                title: "Radium".to_owned(),
                framebuffer: (width, height),
                size: (width, height),
                limits: (None, None),
                position: (10, 20),
                scale: 1.0,
                minimized: false,
                maximized: false,
                visible: true,
                focused: true,
                attention: false,
                resizable: true,
                decorated: true,
                on_top: false,
                cursor: None,
                redraws: 0,
            }),
        })
    }

    pub fn snapshot(&self) -> MockWindowState {
        self.state.lock().unwrap().clone()
    }

    fn with<R>(&self, f: impl FnOnce(&mut MockWindowState) -> R) -> R {
        f(&mut self.state.lock().unwrap())
    }
}

impl NativeWindow for MockWindow {
    fn id(&self) -> u64 {
        7
    }
    fn framebuffer_size(&self) -> (u32, u32) {
        self.with(|s| s.framebuffer)
    }
    fn window_size(&self) -> (u32, u32) {
        self.with(|s| s.size)
    }
    fn set_window_size(&self, width: u32, height: u32) {
        self.with(|s| s.size = (width, height))
    }
    fn set_size_limits(&self, min: Option<(u32, u32)>, max: Option<(u32, u32)>) {
        self.with(|s| s.limits = (min, max))
    }
    fn position(&self) -> Option<(i32, i32)> {
        Some(self.with(|s| s.position))
    }
    fn set_position(&self, x: i32, y: i32) {
        self.with(|s| s.position = (x, y))
    }
    fn scale_factor(&self) -> f64 {
        self.with(|s| s.scale)
    }
    fn set_title(&self, title: &str) {
        self.with(|s| s.title = title.to_owned())
    }
    fn set_minimized(&self, minimized: bool) {
        self.with(|s| s.minimized = minimized)
    }
    fn set_maximized(&self, maximized: bool) {
        self.with(|s| s.maximized = maximized)
    }
    fn set_visible(&self, visible: bool) {
        self.with(|s| s.visible = visible)
    }
    fn focus(&self) {
        self.with(|s| s.focused = true)
    }
    fn request_attention(&self) {
        self.with(|s| s.attention = true)
    }
    fn is_focused(&self) -> bool {
        self.with(|s| s.focused)
    }
    fn is_minimized(&self) -> Option<bool> {
        Some(self.with(|s| s.minimized))
    }
    fn is_maximized(&self) -> bool {
        self.with(|s| s.maximized)
    }
    fn is_visible(&self) -> Option<bool> {
        Some(self.with(|s| s.visible))
    }
    fn is_resizable(&self) -> bool {
        self.with(|s| s.resizable)
    }
    fn is_decorated(&self) -> bool {
        self.with(|s| s.decorated)
    }
    fn set_resizable(&self, resizable: bool) {
        self.with(|s| s.resizable = resizable)
    }
    fn set_decorated(&self, decorated: bool) {
        self.with(|s| s.decorated = decorated)
    }
    fn set_always_on_top(&self, always_on_top: bool) {
        self.with(|s| s.on_top = always_on_top)
    }
    fn set_cursor_position(&self, x: f64, y: f64) -> RaResult<()> {
        self.with(|s| s.cursor = Some((x, y)));
        Ok(())
    }
    fn request_redraw(&self) {
        self.with(|s| s.redraws += 1)
    }
}

/// Builds a window of the given framebuffer size over fresh mocks.
pub fn mock_window(width: u32, height: u32) -> (RaWindow, Arc<MockWindow>, Arc<MockDevice>) {
    let native = MockWindow::new(width, height);
    let device = MockDevice::new(width, height);
    let window = RaWindow::new(native.clone(), device.clone());
    (window, native, device)
}
