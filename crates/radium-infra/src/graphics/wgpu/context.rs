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

use crate::platform::WinitWindow;
use anyhow::{anyhow, Context, Result};
use radium_core::error::{RaError, RaResult};
use radium_core::platform::NativeWindow;

/// Holds the core WGPU state objects required for presenting to one window.
#[derive(Debug)]
pub struct WgpuGraphicsContext {
    /// The swapchain surface of the window.
    pub surface: wgpu::Surface<'static>,
    /// The logical device.
    pub device: wgpu::Device,
    /// The command queue of [`Self::device`].
    pub queue: wgpu::Queue,
    /// Configuration for the surface's swapchain behavior.
    pub surface_config: wgpu::SurfaceConfiguration,
    /// Human-readable name of the adapter in use.
    pub adapter_name: String,
    /// The graphics API the adapter runs on.
    pub adapter_backend: wgpu::Backend,
}

impl WgpuGraphicsContext {
    /// Initializes the graphics context for a window, blocking until the
    /// adapter and device are ready.
    ///
    /// ## Arguments
    /// * `window` - The window to present to.
    /// * `vsync` - Whether presentation waits for vertical sync.
    ///
    /// ## Returns
    /// * `Result<Self>` - The initialized context, or an error if no suitable
    ///   adapter or device is available.
    pub fn new(window: &WinitWindow, vsync: bool) -> Result<Self> {
        pollster::block_on(Self::new_async(window, vsync))
    }

    async fn new_async(window: &WinitWindow, vsync: bool) -> Result<Self> {
        log::info!("Initializing WGPU graphics context...");

        // --- 1. Create Instance and Surface ---
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window.clone())
            .context("Failed to create the window surface")?;
        log::debug!("WGPU surface created for the window.");

        // --- 2. Select Adapter ---
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                force_fallback_adapter: false,
                compatible_surface: Some(&surface),
            })
            .await
            .map_err(|e| anyhow!("No compatible graphics adapter found: {e}"))?;
        let adapter_info = adapter.get_info();
        log::info!(
            "Using graphics adapter: \"{}\" (Backend: {:?})",
            adapter_info.name,
            adapter_info.backend
        );

        // --- 3. Create Logical Device and Command Queue ---
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Radium Logical Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults().using_resolution(adapter.limits()),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::default(),
            })
            .await
            .map_err(|e| anyhow!("Failed to create logical device: {e}"))?;
        log::info!("Logical device and command queue created.");

        device.on_uncaptured_error(Box::new(|e| {
            log::error!("WGPU Uncaptured Error: {e:?}");
        }));

        // --- 4. Configure Surface ---
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow!("The surface reports no supported formats"))?;
        let present_mode = select_present_mode(&surface_caps.present_modes, vsync);
        log::info!("Surface format {surface_format:?}, present mode {present_mode:?}");

        let (width, height) = window.framebuffer_size();
        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: width.max(1),
            height: height.max(1),
            present_mode,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        Ok(WgpuGraphicsContext {
            surface,
            device,
            queue,
            surface_config,
            adapter_name: adapter_info.name,
            adapter_backend: adapter_info.backend,
        })
    }

    /// Reconfigures the surface (swapchain) when the window is resized.
    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width > 0 && new_height > 0 {
            log::info!("WgpuGraphicsContext: Resizing surface to {new_width}x{new_height}");
            self.surface_config.width = new_width;
            self.surface_config.height = new_height;
            self.surface.configure(&self.device, &self.surface_config);
        } else {
            log::warn!(
                "WgpuGraphicsContext: Ignoring resize request to zero dimensions: {new_width}x{new_height}"
            );
        }
    }

    /// Re-applies the current configuration after the surface was lost or became outdated.
    pub fn reconfigure(&self) {
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Acquires the next swapchain texture to render into.
    pub fn get_current_texture(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    /// Returns the swapchain size.
    pub fn size(&self) -> (u32, u32) {
        (self.surface_config.width, self.surface_config.height)
    }

    /// The largest width or height the device accepts for a 2D texture.
    pub fn max_texture_dimension(&self) -> u32 {
        self.device.limits().max_texture_dimension_2d
    }

    /// Runs `op` inside validation and out-of-memory error scopes.
    ///
    /// Errors raised by the device while `op` runs are returned as `Fail`
    /// instead of reaching the uncaptured error handler.
    pub fn validated<T>(
        &self,
        what: &str,
        op: impl FnOnce(&wgpu::Device, &wgpu::Queue) -> T,
    ) -> RaResult<T> {
        self.device.push_error_scope(wgpu::ErrorFilter::OutOfMemory);
        self.device.push_error_scope(wgpu::ErrorFilter::Validation);
        let value = op(&self.device, &self.queue);
        let validation = pollster::block_on(self.device.pop_error_scope());
        let out_of_memory = pollster::block_on(self.device.pop_error_scope());

        match validation.or(out_of_memory) {
            None => Ok(value),
            Some(e) => {
                log::error!("WgpuGraphicsContext: {what} failed: {e}");
                Err(RaError::fail(format!("{what} failed: {e}")))
            }
        }
    }
}

/// Picks a present mode: FIFO when vsync is requested (always supported),
/// otherwise the lowest-latency mode available.
fn select_present_mode(available: &[wgpu::PresentMode], vsync: bool) -> wgpu::PresentMode {
    if vsync {
        return wgpu::PresentMode::Fifo;
    }
    [wgpu::PresentMode::Immediate, wgpu::PresentMode::Mailbox]
        .into_iter()
        .find(|mode| available.contains(mode))
        .unwrap_or(wgpu::PresentMode::Fifo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::PresentMode;

    #[test]
    fn test_vsync_always_uses_fifo() {
        assert_eq!(
            select_present_mode(&[PresentMode::Immediate, PresentMode::Fifo], true),
            PresentMode::Fifo
        );
    }

    #[test]
    fn test_no_vsync_prefers_immediate() {
        assert_eq!(
            select_present_mode(
                &[PresentMode::Fifo, PresentMode::Mailbox, PresentMode::Immediate],
                false
            ),
            PresentMode::Immediate
        );
        assert_eq!(
            select_present_mode(&[PresentMode::Fifo, PresentMode::Mailbox], false),
            PresentMode::Mailbox
        );
    }

    #[test]
    fn test_no_vsync_falls_back_to_fifo() {
        assert_eq!(select_present_mode(&[PresentMode::Fifo], false), PresentMode::Fifo);
    }
}
