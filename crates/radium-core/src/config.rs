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

//! Application configuration, loadable from a TOML file.

use crate::error::{RaError, RaResult};
use serde::Deserialize;
use std::path::Path;

/// Settings used to create the application window and its display.
///
/// Every field is optional in the TOML source; missing fields take the
/// values of [`AppConfig::default`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// The window title.
    pub title: String,
    /// The initial inner width of the window, in logical pixels.
    pub width: u32,
    /// The initial inner height of the window, in logical pixels.
    pub height: u32,
    /// Whether the user can resize the window.
    pub resizable: bool,
    /// Whether the window is shown on creation.
    pub visible: bool,
    /// Whether presentation waits for vertical sync.
    pub vsync: bool,
    /// The color the framebuffer is cleared to before each frame (linear RGBA).
    pub clear_color: [f64; 4],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Radium".to_string(),
            width: 800,
            height: 600,
            resizable: true,
            visible: true,
            vsync: true,
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl AppConfig {
    /// Parses and validates a configuration from TOML source.
    pub fn from_toml_str(source: &str) -> RaResult<Self> {
        let config: AppConfig = toml::from_str(source)
            .map_err(|e| RaError::invalid_argument(format!("invalid configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration file.
    pub fn load(path: impl AsRef<Path>) -> RaResult<Self> {
        let path = path.as_ref();
        log::info!("Loading configuration from '{}'", path.display());
        let source = std::fs::read_to_string(path).map_err(|e| {
            RaError::fail(format!("failed to read '{}': {e}", path.display()))
        })?;
        Self::from_toml_str(&source)
    }

    /// Rejects configurations the windowing library cannot honor.
    pub fn validate(&self) -> RaResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RaError::invalid_argument(format!(
                "window dimensions must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}
