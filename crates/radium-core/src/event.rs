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

//! Window events and the channel the event loop publishes them on.

use crate::platform::input::InputEvent;

/// An event reported by the windowing library for the application window.
#[derive(Debug, Clone, PartialEq)]
pub enum RaEvent {
    /// The framebuffer was resized to the given physical size.
    Resized {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
    /// The user asked to close the window.
    CloseRequested,
    /// The window gained (`true`) or lost (`false`) input focus.
    Focused(bool),
    /// The display scale factor changed.
    ScaleFactorChanged(f64),
    /// The window needs to be redrawn.
    RedrawRequested,
    /// A keyboard or mouse event.
    Input(InputEvent),
}

/// Manages a generic event channel.
///
/// The bus is generic over the event type `T` so that `radium-core` stays
/// decoupled from the event types of higher-level crates.
#[derive(Debug)]
pub struct EventBus<T: Clone + Send + 'static> {
    sender: flume::Sender<T>,
    receiver: flume::Receiver<T>,
}

impl<T: Clone + Send + 'static> EventBus<T> {
    /// Creates a new EventBus with an unbounded channel.
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        Self { sender, receiver }
    }

    /// Creates a new EventBus that holds at most `capacity` undelivered events.
    ///
    /// Once full, newly published events are dropped until the receiver
    /// catches up.
    pub fn bounded(capacity: usize) -> Self {
        let (sender, receiver) = flume::bounded(capacity);
        Self { sender, receiver }
    }

    /// Sends an event without blocking.
    ///
    /// Logs an error if the receiver is disconnected, and drops the event if
    /// a bounded bus is full.
    pub fn publish(&self, event: T) {
        log::trace!("Publishing an event.");

        match self.sender.try_send(event) {
            Ok(()) => {}
            Err(flume::TrySendError::Full(_)) => {
                log::trace!("Event queue full, dropping event.");
            }
            Err(e) => {
                log::error!("Failed to send event: {e}. Receiver likely disconnected.");
            }
        }
    }

    /// Returns a clone of the sender end of the channel.
    pub fn sender(&self) -> flume::Sender<T> {
        self.sender.clone()
    }

    /// Returns a reference to the receiver end of the channel.
    pub fn receiver(&self) -> &flume::Receiver<T> {
        &self.receiver
    }

    /// Takes every event currently queued.
    pub fn drain(&self) -> Vec<T> {
        self.receiver.try_iter().collect()
    }
}

impl<T: Clone + Send + 'static> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}
