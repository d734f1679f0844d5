//! Cross-frontend primitives for presenting the game.
//!
//! Houses the targeting session, message logging, and configuration that both
//! the CLI and future graphical clients reuse.
pub mod config;
pub mod frontend;
pub mod message;
pub mod services;

pub use config::{FrontendConfig, MessageConfig, TargetingConfig};
pub use frontend::Frontend;
pub use services::targeting;
