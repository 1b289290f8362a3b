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

//! # Radium Core
//!
//! Foundational crate containing the window, canvas and display-device
//! contracts. Nothing in here talks to a GPU or a display server directly;
//! concrete backends live in `radium-infra`.

#![warn(missing_docs)]

pub mod canvas;
pub mod config;
pub mod error;
pub mod event;
pub mod image;
pub mod pixel;
pub mod platform;
pub mod renderer;
pub mod window;

pub use canvas::Canvas;
pub use config::AppConfig;
pub use error::{ErrorCode, RaError, RaResult};
pub use event::{EventBus, RaEvent};
pub use image::ImageLayer;
pub use pixel::PixelFormat;
pub use window::RaWindow;

/// Re-export of the 2D drawing library backing [`Canvas`] surfaces.
pub use tiny_skia;
