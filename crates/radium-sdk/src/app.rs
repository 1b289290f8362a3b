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

//! The application shell: one window, its display and the event loop driving them.

use crate::args::AppArgs;
use anyhow::Context;
use radium_core::error::{track, RaError, RaResult};
use radium_core::platform::NativeWindow;
use radium_core::{AppConfig, EventBus, ImageLayer, PixelFormat, RaEvent, RaWindow};
use radium_infra::{translate_window_event, WgpuDisplay, WinitWindow, WinitWindowBuilder};
use std::ffi::OsString;
use std::sync::Arc;
use std::time::Duration;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::platform::run_on_demand::EventLoopExtRunOnDemand;
use winit::window::WindowId;

/// Undelivered events kept for [`RaApplication::events`] before new ones are dropped.
const EVENT_QUEUE_CAPACITY: usize = 1024;

/// Pumps allowed for the platform to deliver the first `resumed` callback.
const STARTUP_PUMPS: usize = 16;

/// Code run once per frame, before the image layer and canvas are drawn.
pub type FrameCallback = Box<dyn FnMut(&mut RaWindow) -> RaResult<()>>;

/// The state driven by the `winit` event loop.
struct AppState {
    config: AppConfig,
    // Declared before the window so its texture is released first.
    image: Option<ImageLayer>,
    window: Option<RaWindow>,
    native: Option<WinitWindow>,
    events: EventBus<RaEvent>,
    frame_callback: Option<FrameCallback>,
    init_error: Option<RaError>,
    continuous: bool,
}

impl AppState {
    fn new(config: AppConfig) -> Self {
        Self {
            config,
            image: None,
            window: None,
            native: None,
            events: EventBus::bounded(EVENT_QUEUE_CAPACITY),
            frame_callback: None,
            init_error: None,
            continuous: false,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let native = WinitWindowBuilder::from_config(&self.config)
            .build(event_loop)
            .context("Failed to create the window")?;
        let display =
            WgpuDisplay::new(&native, &self.config).context("Failed to create the display")?;

        self.window = Some(RaWindow::new(
            Arc::new(native.clone()),
            Arc::new(display),
        ));
        self.native = Some(native);
        Ok(())
    }

    fn render_frame(&mut self) {
        let Some(window) = self.window.as_mut() else {
            return;
        };
        present_frame(window, self.image.as_ref(), self.frame_callback.as_mut());
    }

    fn should_close(&self) -> bool {
        self.window
            .as_ref()
            .is_some_and(|window| window.should_close().unwrap_or(true))
    }
}

/// Runs the frame callback, queues the image layer below the canvas, then
/// swaps buffers.
///
/// A failing step is logged and recorded as the last error. The remaining
/// steps still run, so a frame is presented every time.
fn present_frame(
    window: &mut RaWindow,
    image: Option<&ImageLayer>,
    callback: Option<&mut FrameCallback>,
) {
    if let Some(callback) = callback {
        if let Err(e) = track(callback(window)) {
            log::error!("Frame callback failed: {e}");
        }
    }
    if let Some(image) = image {
        if let Err(e) = track(image.draw()) {
            log::error!("Failed to draw the image: {e}");
        }
    }
    if let Err(e) = track(window.draw()) {
        log::error!("Failed to draw the canvas: {e}");
    }
    if let Err(e) = track(window.swap_buffers()) {
        log::error!("Failed to present the frame: {e}");
    }
}

impl ApplicationHandler for AppState {
    /// Creates the window and display the first time the event loop is ready.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.init_error.is_some() {
            return;
        }

        log::info!("Application resumed. Initializing window and display...");
        if let Err(e) = self.init_window(event_loop) {
            log::error!("{e:#}");
            self.init_error = Some(RaError::fail(format!("{e:#}")));
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        if self.native.as_ref().map(WinitWindow::winit_id) != Some(id) {
            return;
        }
        let Some(event) = translate_window_event(&event) else {
            return;
        };

        if let Some(window) = self.window.as_mut() {
            window.handle_event(&event);
        }
        match event {
            RaEvent::RedrawRequested => self.render_frame(),
            RaEvent::CloseRequested if self.continuous => {
                log::info!("Shutdown requested, exiting event loop...");
                event_loop.exit();
            }
            RaEvent::Resized { width, height } => {
                log::info!("Window resized to: {width}x{height}");
            }
            _ => {}
        }
        self.events.publish(event);
    }

    /// Keeps frames coming while [`RaApplication::run`] is active.
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.continuous {
            return;
        }
        if self.should_close() {
            event_loop.exit();
        } else if let Some(native) = &self.native {
            native.request_redraw();
        }
    }
}

impl Drop for AppState {
    fn drop(&mut self) {
        log::info!("Application shutting down...");
        self.image = None;
        self.window = None;
    }
}

/// A Radium application: one window, its display and the event loop.
///
/// The application composes the native event loop with its handler state;
/// every public operation drives the loop synchronously on the calling thread.
pub struct RaApplication {
    // The window and its surface are released before the event loop.
    state: AppState,
    event_loop: EventLoop<()>,
}

impl RaApplication {
    /// Creates the application from command-line arguments, the first one
    /// being the program name.
    pub fn create<I, T>(args: I) -> RaResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let config = track(AppArgs::try_parse_args(args).and_then(AppArgs::into_config))?;
        Self::with_config(config)
    }

    /// Creates the application from a ready configuration.
    ///
    /// The event loop is pumped until the window and display exist.
    pub fn with_config(config: AppConfig) -> RaResult<Self> {
        track(Self::with_config_inner(config))
    }

    fn with_config_inner(config: AppConfig) -> RaResult<Self> {
        config.validate()?;
        log::info!("Radium: Starting \"{}\"...", config.title);

        let event_loop = EventLoop::new()
            .map_err(|e| RaError::fail(format!("failed to create the event loop: {e}")))?;
        let mut app = Self {
            state: AppState::new(config),
            event_loop,
        };

        for _ in 0..STARTUP_PUMPS {
            app.pump(Some(Duration::ZERO));
            if let Some(err) = app.state.init_error.take() {
                return Err(err);
            }
            if app.state.window.is_some() {
                return Ok(app);
            }
        }
        Err(RaError::fail("the window was not created by the event loop"))
    }

    fn pump(&mut self, timeout: Option<Duration>) {
        if let PumpStatus::Exit(code) = self.event_loop.pump_app_events(timeout, &mut self.state) {
            log::info!("Event loop exited with code {code}");
        }
    }

    /// Dispatches events and presents frames until the window should close.
    pub fn run(&mut self) -> RaResult<()> {
        if self.state.should_close() {
            return Ok(());
        }
        self.state.continuous = true;
        let result = self.event_loop.run_app_on_demand(&mut self.state);
        self.state.continuous = false;
        track(result.map_err(|e| RaError::fail(format!("event loop failed: {e}"))))
    }

    /// Processes pending events and returns immediately.
    pub fn poll_events(&mut self) -> RaResult<()> {
        self.pump(Some(Duration::ZERO));
        Ok(())
    }

    /// Blocks until at least one event arrives, then processes pending events.
    pub fn wait_events(&mut self) -> RaResult<()> {
        self.pump(None);
        Ok(())
    }

    /// Like [`Self::wait_events`], returning after `timeout` seconds at the latest.
    pub fn wait_events_timeout(&mut self, timeout: f64) -> RaResult<()> {
        let timeout = track(timeout_from_secs(timeout))?;
        self.pump(Some(timeout));
        Ok(())
    }

    /// Shows a raw pixel buffer, bypassing the canvas.
    pub fn set_image(
        &mut self,
        width: u32,
        height: u32,
        format: PixelFormat,
        pixels: &[u8],
    ) -> RaResult<()> {
        track(self.set_image_inner(width, height, format, pixels))
    }

    fn set_image_inner(
        &mut self,
        width: u32,
        height: u32,
        format: PixelFormat,
        pixels: &[u8],
    ) -> RaResult<()> {
        if self.state.image.is_none() {
            let window = self.state.window.as_ref().ok_or_else(window_unavailable)?;
            self.state.image = Some(ImageLayer::new(Arc::clone(window.device()))?);
        }
        let Some(layer) = self.state.image.as_mut() else {
            return Err(window_unavailable());
        };
        layer.set_image(width, height, format, pixels)
    }

    /// Returns the application window.
    pub fn window(&self) -> RaResult<&RaWindow> {
        self.state.window.as_ref().ok_or_else(window_unavailable)
    }

    /// Returns the application window mutably.
    pub fn window_mut(&mut self) -> RaResult<&mut RaWindow> {
        self.state.window.as_mut().ok_or_else(window_unavailable)
    }

    /// Returns the receiver of the events published by the event loop.
    pub fn events(&self) -> &flume::Receiver<RaEvent> {
        self.state.events.receiver()
    }

    /// Registers code to run at the start of every frame.
    pub fn set_frame_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&mut RaWindow) -> RaResult<()> + 'static,
    {
        self.state.frame_callback = Some(Box::new(callback));
    }

    /// Whether the window has been asked to close.
    pub fn should_close(&self) -> bool {
        self.state.should_close()
    }
}

fn window_unavailable() -> RaError {
    RaError::fail("the application window is not available")
}

/// Converts a timeout in seconds, rejecting negative and non-finite values.
pub(crate) fn timeout_from_secs(seconds: f64) -> RaResult<Duration> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(RaError::invalid_argument(format!(
            "timeout must be a finite, non-negative number of seconds, got {seconds}"
        )));
    }
    Ok(Duration::from_secs_f64(seconds))
}
