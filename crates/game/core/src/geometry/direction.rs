use crate::state::Offset;

/// One of the eight compass directions on the y-down grid.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    #[strum(to_string = "north", serialize = "n")]
    North,
    #[strum(to_string = "north_east", serialize = "ne")]
    NorthEast,
    #[strum(to_string = "east", serialize = "e")]
    East,
    #[strum(to_string = "south_east", serialize = "se")]
    SouthEast,
    #[strum(to_string = "south", serialize = "s")]
    South,
    #[strum(to_string = "south_west", serialize = "sw")]
    SouthWest,
    #[strum(to_string = "west", serialize = "w")]
    West,
    #[strum(to_string = "north_west", serialize = "nw")]
    NorthWest,
}

impl Direction {
    /// All directions, clockwise starting from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Unit step for this direction. North is `(0, -1)`.
    pub const fn offset(self) -> Offset {
        match self {
            Direction::North => Offset::new(0, -1),
            Direction::NorthEast => Offset::new(1, -1),
            Direction::East => Offset::new(1, 0),
            Direction::SouthEast => Offset::new(1, 1),
            Direction::South => Offset::new(0, 1),
            Direction::SouthWest => Offset::new(-1, 1),
            Direction::West => Offset::new(-1, 0),
            Direction::NorthWest => Offset::new(-1, -1),
        }
    }

    /// The direction 90° counter-clockwise on screen.
    pub const fn rotate_left_90(self) -> Direction {
        match self {
            Direction::North => Direction::West,
            Direction::NorthEast => Direction::NorthWest,
            Direction::East => Direction::North,
            Direction::SouthEast => Direction::NorthEast,
            Direction::South => Direction::East,
            Direction::SouthWest => Direction::SouthEast,
            Direction::West => Direction::South,
            Direction::NorthWest => Direction::SouthWest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_left_is_a_quarter_turn() {
        for direction in Direction::ALL {
            let rotated = direction.rotate_left_90();
            let (a, b) = (direction.offset(), rotated.offset());
            // Perpendicular and counter-clockwise on screen (y-down).
            assert_eq!(a.x * b.x + a.y * b.y, 0, "{direction}");
            assert!(a.cross(b) < 0, "{direction}");
        }
    }

    #[test]
    fn four_left_turns_return_home() {
        for direction in Direction::ALL {
            let mut turned = direction;
            for _ in 0..4 {
                turned = turned.rotate_left_90();
            }
            assert_eq!(turned, direction);
        }
    }

    #[test]
    fn parses_short_and_long_names() {
        assert_eq!("ne".parse::<Direction>().ok(), Some(Direction::NorthEast));
        assert_eq!("West".parse::<Direction>().ok(), Some(Direction::West));
        assert_eq!(Direction::SouthWest.to_string(), "south_west");
    }
}
