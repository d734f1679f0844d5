use std::fmt;

use crate::state::Offset;

/// Maximum reach of a targeted command, in tiles (Euclidean).
///
/// All comparisons are done on squared integer lengths, so they are exact for
/// every input including zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range(u32);

impl Range {
    pub const fn new(tiles: u32) -> Self {
        Self(tiles)
    }

    pub const fn tiles(self) -> u32 {
        self.0
    }

    /// `|offset| <= range`.
    pub fn contains(self, offset: Offset) -> bool {
        !offset.exceeds(self.0)
    }

    /// `|offset| <= range * 2 / 3`, the brighter inner band.
    pub fn is_near(self, offset: Offset) -> bool {
        // |v| <= 2r/3  <=>  9|v|^2 <= 4r^2
        let r = i128::from(self.0);
        9 * offset.length_squared() <= 4 * r * r
    }
}

impl From<u32> for Range {
    fn from(tiles: u32) -> Self {
        Self(tiles)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
