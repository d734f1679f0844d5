//! Terminal UI frontend for the Dungeon game.
//!
//! This crate decodes keyboard input into targeting inputs, drives
//! `client-frontend-core` targeting dialogs from a tokio tick loop, and draws
//! the stage plus the targeting overlay with ratatui.

mod app;
mod command;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;
pub mod stage;
mod state;

pub use app::CliFrontend;
pub use command::{PlayerCommand, RangedKind};
pub use config::{CliConfig, UiConfig};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
