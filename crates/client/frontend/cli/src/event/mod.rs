//! Event handling for CLI client.
//!
//! This module contains the event loop that coordinates keyboard input,
//! targeting dialogs, command resolution, and rendering.

mod handlers;
mod r#loop;

pub use r#loop::EventLoop;
