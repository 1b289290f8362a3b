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

//! Command-line arguments understood by every Radium application.

use clap::Parser;
use radium_core::config::AppConfig;
use radium_core::error::{RaError, RaResult};
use std::ffi::OsString;
use std::path::PathBuf;

/// Window and display options. Flags override values from `--config`.
#[derive(Debug, Clone, Default, PartialEq, Parser)]
#[command(name = "radium")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Open a Radium window", long_about = None)]
pub struct AppArgs {
    /// Window title
    #[arg(long)]
    pub title: Option<String>,

    /// Initial window width in logical pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Initial window height in logical pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Present without waiting for vertical sync
    #[arg(long)]
    pub no_vsync: bool,
}

impl AppArgs {
    /// Parses arguments, the first item being the program name.
    ///
    /// Parse failures, including `--help` and `--version`, are returned as
    /// `InvalidArgument` carrying clap's rendered message.
    pub fn try_parse_args<I, T>(args: I) -> RaResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|e| RaError::invalid_argument(e.to_string()))
    }

    /// Builds the final configuration: the `--config` file (or the defaults),
    /// then every flag given on the command line.
    pub fn into_config(self) -> RaResult<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        self.apply_to(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply_to(self, config: &mut AppConfig) {
        if let Some(title) = self.title {
            config.title = title;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if self.no_vsync {
            config.vsync = false;
        }
    }
}
