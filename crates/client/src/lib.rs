//! Top-level client wiring a stage to a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Stage (grid, actors, visibility)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The binary is the composition root: it reads configuration, sets up
//! logging, loads the stage, and injects everything through [`ClientBuilder`].

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use game_core::Stage;

/// Top-level client container.
pub struct Client {
    stage: Stage,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Hands the stage to the frontend and blocks until the user quits.
    ///
    /// # Errors
    ///
    /// Returns whatever fatal error the frontend reports.
    pub async fn run(self) -> Result<()> {
        let Client {
            stage,
            mut frontend,
        } = self;
        frontend.run(stage).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use async_trait::async_trait;
    use game_core::StageOracle;

    use super::*;

    struct CountingFrontend {
        monsters_seen: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Frontend for CountingFrontend {
        async fn run(&mut self, stage: Stage) -> Result<()> {
            let monsters = stage
                .actors()
                .iter()
                .filter(|actor| actor.is_monster())
                .count();
            self.monsters_seen.store(monsters, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn build_requires_stage_and_frontend() {
        assert!(Client::builder().build().is_err());

        let stage = Stage::from_ascii("@.g").expect("valid layout");
        assert!(Client::builder().stage(stage).build().is_err());
    }

    #[tokio::test]
    async fn run_hands_stage_to_frontend() {
        let monsters_seen = Arc::new(AtomicUsize::new(0));
        let client = Client::builder()
            .stage(Stage::from_ascii("@.g.o").expect("valid layout"))
            .frontend(CountingFrontend {
                monsters_seen: Arc::clone(&monsters_seen),
            })
            .build()
            .expect("complete client");

        client.run().await.expect("frontend succeeds");
        assert_eq!(monsters_seen.load(Ordering::SeqCst), 2);
    }
}
