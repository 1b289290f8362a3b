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

// Radium Sandbox
// Opens a window and animates a canvas with tiny-skia.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use radium_sdk::prelude::tiny_skia::{Color, FillRule, Paint, PathBuilder, Rect, Transform};
use radium_sdk::prelude::*;

/// Radius of the orbiting disc, as a fraction of the smaller canvas side.
const ORBIT_DISC_RATIO: f32 = 0.08;

fn draw_frame(window: &mut RaWindow, elapsed: f32) -> RaResult<()> {
    let pressed = window.get_mouse_button(MouseButton::Left)? == Action::Press;
    let (cursor_x, cursor_y) = window.get_cursor_pos()?;
    let Some(canvas) = window.canvas_mut() else {
        return Ok(());
    };

    let (width, height) = canvas.size();
    let (w, h) = (width as f32, height as f32);
    let radius = w.min(h) * ORBIT_DISC_RATIO;

    {
        let mut pixmap = canvas.context();
        pixmap.fill(Color::from_rgba8(24, 26, 33, 255));

        let mut paint = Paint {
            anti_alias: true,
            ..Paint::default()
        };

        // --- Orbiting disc ---
        let (cx, cy) = (
            w * 0.5 + elapsed.cos() * w * 0.3,
            h * 0.5 + elapsed.sin() * h * 0.3,
        );
        if let Some(disc) = PathBuilder::from_circle(cx, cy, radius) {
            paint.set_color_rgba8(238, 140, 60, 255);
            pixmap.fill_path(&disc, &paint, FillRule::Winding, Transform::identity(), None);
        }

        // --- Cursor marker, filled while the left button is held ---
        if let Some(marker) = Rect::from_xywh(
            cursor_x as f32 - radius * 0.5,
            cursor_y as f32 - radius * 0.5,
            radius,
            radius,
        ) {
            if pressed {
                paint.set_color_rgba8(90, 200, 120, 255);
            } else {
                paint.set_color_rgba8(90, 200, 120, 96);
            }
            pixmap.fill_rect(marker, &paint, Transform::identity(), None);
        }
    }

    canvas.flush()
}

fn main() -> Result<()> {
    radium_sdk::init_logging();

    let args = AppArgs::parse();
    let mut app = RaApplication::with_config(args.into_config()?)?;

    let canvas = Canvas::create_for_window(app.window_mut()?)?;
    let (width, height) = canvas.size();
    log::info!("Sandbox: canvas of {width}x{height} pixels ready.");

    let start = Instant::now();
    app.set_frame_callback(move |window| draw_frame(window, start.elapsed().as_secs_f32()));
    app.run()?;

    for event in app.events().try_iter() {
        log::debug!("Unprocessed event at shutdown: {event:?}");
    }
    Ok(())
}
