//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use game_core::Stage;

/// Frontend abstraction for UI layers.
///
/// The composition root loads a [`Stage`] and hands it to the frontend, which
/// owns it for the rest of the session: it reads it to open targeting dialogs
/// and applies the results of confirmed commands to it.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, stage: Stage) -> Result<()>;
}
