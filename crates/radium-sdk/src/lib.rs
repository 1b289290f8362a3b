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

//! The public-facing SDK of Radium.
//! This crate wires the window, display and canvas from the lower crates to
//! a `winit` event loop behind a small, synchronous API.

mod app;
pub mod args;

pub use app::{FrameCallback, RaApplication};
pub use args::AppArgs;

pub use radium_core;
pub use radium_infra;

/// The types most applications need.
pub mod prelude {
    pub use crate::{AppArgs, RaApplication};
    pub use radium_core::platform::{Action, MouseButton, WindowAttrib};
    pub use radium_core::{
        tiny_skia, AppConfig, Canvas, ErrorCode, PixelFormat, RaError, RaEvent, RaResult,
        RaWindow,
    };
}

/// Installs the global logger. `RUST_LOG` overrides the default `info` level.
///
/// Graphics backend chatter below the error level is filtered out. Calling
/// this more than once is harmless.
pub fn init_logging() {
    let result = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("wgpu_core", log::LevelFilter::Warn)
        .filter_module("wgpu_hal", log::LevelFilter::Error)
        .filter_module("naga", log::LevelFilter::Warn)
        .try_init();
    if result.is_err() {
        log::debug!("Logger already initialized.");
    }
}
