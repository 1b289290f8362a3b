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

//! A `winit`-based implementation of the `NativeWindow` trait.

use radium_core::config::AppConfig;
use radium_core::error::{RaError, RaResult};
use radium_core::platform::NativeWindow;
use raw_window_handle::{
    DisplayHandle, HandleError, HasDisplayHandle, HasWindowHandle, WindowHandle,
};
use std::sync::Arc;
use winit::{
    dpi::{LogicalPosition, LogicalSize},
    error::OsError,
    event_loop::ActiveEventLoop,
    window::{UserAttentionType, Window, WindowId, WindowLevel},
};

/// A wrapper around a `winit::window::Window` that implements the `NativeWindow` trait.
///
/// Sizes and positions passed in from Radium are in logical (screen)
/// coordinates, matching what the windowing library reports to applications.
/// The framebuffer size is physical.
#[derive(Debug, Clone)]
pub struct WinitWindow {
    inner: Arc<Window>,
}

/// A builder for creating `WinitWindow` instances.
pub struct WinitWindowBuilder {
    title: String,
    width: u32,
    height: u32,
    resizable: bool,
    visible: bool,
}

impl WinitWindowBuilder {
    /// Creates a new `WinitWindowBuilder` with default settings.
    pub fn new() -> Self {
        Self::from_config(&AppConfig::default())
    }

    /// Creates a builder that applies the window section of `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            title: config.title.clone(),
            width: config.width,
            height: config.height,
            resizable: config.resizable,
            visible: config.visible,
        }
    }

    /// Sets the title of the window to be built.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial inner dimensions of the window to be built.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Builds the `WinitWindow` using the provided `winit` event loop.
    ///
    /// # Errors
    /// Returns an `OsError` if the underlying `winit` window creation fails.
    pub fn build(self, event_loop: &ActiveEventLoop) -> Result<WinitWindow, OsError> {
        log::info!(
            "Building window with title: '{}' and size: {}x{}",
            self.title,
            self.width,
            self.height
        );

        let window_attributes = Window::default_attributes()
            .with_title(self.title)
            .with_inner_size(LogicalSize::new(self.width, self.height))
            .with_resizable(self.resizable)
            .with_visible(self.visible);

        let window = event_loop.create_window(window_attributes)?;

        log::info!("Winit window created successfully (id: {:?}).", window.id());
        Ok(WinitWindow {
            inner: Arc::new(window),
        })
    }
}

impl Default for WinitWindowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WinitWindow {
    /// Returns the `winit` identifier, used to route window events.
    pub fn winit_id(&self) -> WindowId {
        self.inner.id()
    }
}

impl HasWindowHandle for WinitWindow {
    fn window_handle(&self) -> Result<WindowHandle<'_>, HandleError> {
        self.inner.window_handle()
    }
}

impl HasDisplayHandle for WinitWindow {
    fn display_handle(&self) -> Result<DisplayHandle<'_>, HandleError> {
        self.inner.display_handle()
    }
}

impl NativeWindow for WinitWindow {
    fn id(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        self.inner.id().hash(&mut hasher);
        hasher.finish()
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        let size = self.inner.inner_size();
        (size.width, size.height)
    }

    fn window_size(&self) -> (u32, u32) {
        let size: LogicalSize<u32> = self
            .inner
            .inner_size()
            .to_logical(self.inner.scale_factor());
        (size.width, size.height)
    }

    fn set_window_size(&self, width: u32, height: u32) {
        // The platform may apply the size later and report it through a resize event.
        let _ = self.inner.request_inner_size(LogicalSize::new(width, height));
    }

    fn set_size_limits(&self, min: Option<(u32, u32)>, max: Option<(u32, u32)>) {
        self.inner
            .set_min_inner_size(min.map(|(w, h)| LogicalSize::new(w, h)));
        self.inner
            .set_max_inner_size(max.map(|(w, h)| LogicalSize::new(w, h)));
    }

    fn position(&self) -> Option<(i32, i32)> {
        let position: LogicalPosition<i32> = self
            .inner
            .inner_position()
            .ok()?
            .to_logical(self.inner.scale_factor());
        Some((position.x, position.y))
    }

    fn set_position(&self, x: i32, y: i32) {
        self.inner.set_outer_position(LogicalPosition::new(x, y));
    }

    fn scale_factor(&self) -> f64 {
        self.inner.scale_factor()
    }

    fn set_title(&self, title: &str) {
        self.inner.set_title(title);
    }

    fn set_minimized(&self, minimized: bool) {
        self.inner.set_minimized(minimized);
    }

    fn set_maximized(&self, maximized: bool) {
        self.inner.set_maximized(maximized);
    }

    fn set_visible(&self, visible: bool) {
        self.inner.set_visible(visible);
    }

    fn focus(&self) {
        self.inner.focus_window();
    }

    fn request_attention(&self) {
        self.inner
            .request_user_attention(Some(UserAttentionType::Informational));
    }

    fn is_focused(&self) -> bool {
        self.inner.has_focus()
    }

    fn is_minimized(&self) -> Option<bool> {
        self.inner.is_minimized()
    }

    fn is_maximized(&self) -> bool {
        self.inner.is_maximized()
    }

    fn is_visible(&self) -> Option<bool> {
        self.inner.is_visible()
    }

    fn is_resizable(&self) -> bool {
        self.inner.is_resizable()
    }

    fn is_decorated(&self) -> bool {
        self.inner.is_decorated()
    }

    fn set_resizable(&self, resizable: bool) {
        self.inner.set_resizable(resizable);
    }

    fn set_decorated(&self, decorated: bool) {
        self.inner.set_decorations(decorated);
    }

    fn set_always_on_top(&self, always_on_top: bool) {
        let level = if always_on_top {
            WindowLevel::AlwaysOnTop
        } else {
            WindowLevel::Normal
        };
        self.inner.set_window_level(level);
    }

    fn set_cursor_position(&self, x: f64, y: f64) -> RaResult<()> {
        self.inner
            .set_cursor_position(LogicalPosition::new(x, y))
            .map_err(|e| RaError::fail(format!("failed to move the cursor: {e}")))
    }

    fn request_redraw(&self) {
        self.inner.request_redraw();
    }
}
