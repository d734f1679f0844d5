//! Stage construction errors.

/// Errors raised while building a [`Stage`](super::Stage) from a text layout.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StageError {
    #[error("stage layout is empty")]
    Empty,

    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown glyph {glyph:?} at column {column}, row {row}")]
    UnknownGlyph { glyph: char, column: usize, row: usize },

    #[error("stage layout has no hero ('@')")]
    MissingHero,

    #[error("stage layout has more than one hero ('@')")]
    DuplicateHero,
}
