//! Stage loading for the terminal client.
use std::path::Path;

use anyhow::{Context, Result};
use game_core::Stage;

/// Stage used when no `DUNGEON_STAGE` file is configured.
pub const BUILTIN_STAGE: &str = "
##################################
#................#...............#
#..g.........b...#.......k.......#
#................'...............#
#.......####.....#.....*.........#
#.......#..#.....#...............#
#....o..#..#.....######.##########
#.......####.....................#
#..........@...........r.........#
#................................#
#::::::::::::::::::::::::::s.....#
#::::::::::::::::::::::::::::::::#
##################################
";

/// Loads the stage at `path`, or the built-in stage when `path` is `None`.
pub fn load_stage(path: Option<&Path>) -> Result<Stage> {
    let Some(path) = path else {
        tracing::info!("using built-in stage");
        return Stage::from_ascii(BUILTIN_STAGE).context("built-in stage is malformed");
    };

    let layout = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read stage file {}", path.display()))?;
    let stage = Stage::from_ascii(&layout)
        .with_context(|| format!("failed to parse stage file {}", path.display()))?;

    tracing::info!(path = %path.display(), "stage loaded");
    Ok(stage)
}
