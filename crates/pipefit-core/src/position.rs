//! Grid positions.

use std::{fmt, str::FromStr};

use crate::{Boundary, Direction};

/// Number of rows (and columns) in the grid.
pub const GRID_SIZE: u8 = 3;

/// Number of positions in the grid.
pub const POSITION_COUNT: u8 = GRID_SIZE * GRID_SIZE;

/// A cell position in the 3×3 grid, numbered 1-9 in row-major order.
///
/// ```text
/// 1 2 3
/// 4 5 6
/// 7 8 9
/// ```
///
/// Row and column are always derived from the number.
///
/// # Examples
///
/// ```
/// use pipefit_core::{Direction, Position};
///
/// let pos = Position::new(5);
/// assert_eq!((pos.row(), pos.column()), (1, 1));
/// assert_eq!(pos.neighbor(Direction::Top), Some(Position::new(2)));
/// assert_eq!(Position::new(1).neighbor(Direction::Left), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    number: u8,
}

impl Position {
    /// All positions in row-major order.
    pub const ALL: [Self; POSITION_COUNT as usize] = {
        let mut all = [Self { number: 1 }; POSITION_COUNT as usize];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < all.len() {
            all[i] = Self {
                number: i as u8 + 1,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from its number (1-9).
    ///
    /// # Panics
    ///
    /// Panics if `number` is not in the range 1-9.
    #[must_use]
    pub const fn new(number: u8) -> Self {
        assert!(
            number >= 1 && number <= POSITION_COUNT,
            "Position must be between 1 and 9"
        );
        Self { number }
    }

    /// Creates a position from a zero-based row and column.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is not in the range 0-2.
    #[must_use]
    pub const fn from_row_column(row: u8, column: u8) -> Self {
        assert!(row < GRID_SIZE && column < GRID_SIZE);
        Self::new(row * GRID_SIZE + column + 1)
    }

    /// Returns the position number (1-9).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.number
    }

    /// Returns the zero-based row (0 = top).
    #[must_use]
    pub const fn row(self) -> u8 {
        (self.number - 1) / GRID_SIZE
    }

    /// Returns the zero-based column (0 = left).
    #[must_use]
    pub const fn column(self) -> u8 {
        (self.number - 1) % GRID_SIZE
    }

    /// Returns the adjacent position on `side`, or `None` at the grid edge.
    #[must_use]
    pub const fn neighbor(self, side: Direction) -> Option<Self> {
        let (row, column) = (self.row(), self.column());
        match side {
            Direction::Top if row > 0 => Some(Self::from_row_column(row - 1, column)),
            Direction::Right if column + 1 < GRID_SIZE => {
                Some(Self::from_row_column(row, column + 1))
            }
            Direction::Bottom if row + 1 < GRID_SIZE => {
                Some(Self::from_row_column(row + 1, column))
            }
            Direction::Left if column > 0 => Some(Self::from_row_column(row, column - 1)),
            _ => None,
        }
    }

    /// Returns the boundary on `side` of this position.
    #[must_use]
    pub const fn boundary(self, side: Direction) -> Boundary {
        Boundary::of(self, side)
    }

    /// Returns the four boundaries of this position in [`Direction::ALL`] order.
    #[must_use]
    pub const fn boundaries(self) -> [Boundary; 4] {
        [
            self.boundary(Direction::Top),
            self.boundary(Direction::Right),
            self.boundary(Direction::Bottom),
            self.boundary(Direction::Left),
        ]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.number, f)
    }
}

impl From<Position> for u8 {
    fn from(pos: Position) -> u8 {
        pos.number()
    }
}

/// Error returned when a value does not name a grid position.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid position {input:?}: expected 1-9")]
pub struct ParsePositionError {
    input: String,
}

impl TryFrom<u8> for Position {
    type Error = ParsePositionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=POSITION_COUNT).contains(&value) {
            Ok(Self { number: value })
        } else {
            Err(ParsePositionError {
                input: value.to_string(),
            })
        }
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(|n| Self::try_from(n).ok())
            .ok_or_else(|| ParsePositionError {
                input: s.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_column_derivation() {
        let expected = [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 1),
            (1, 2),
            (2, 0),
            (2, 1),
            (2, 2),
        ];
        for (pos, (row, column)) in Position::ALL.into_iter().zip(expected) {
            assert_eq!((pos.row(), pos.column()), (row, column), "position {pos}");
            assert_eq!(Position::from_row_column(row, column), pos);
        }
    }

    #[test]
    fn test_neighbors() {
        let center = Position::new(5);
        assert_eq!(center.neighbor(Direction::Top), Some(Position::new(2)));
        assert_eq!(center.neighbor(Direction::Right), Some(Position::new(6)));
        assert_eq!(center.neighbor(Direction::Bottom), Some(Position::new(8)));
        assert_eq!(center.neighbor(Direction::Left), Some(Position::new(4)));

        assert_eq!(Position::new(3).neighbor(Direction::Right), None);
        assert_eq!(Position::new(3).neighbor(Direction::Top), None);
        assert_eq!(Position::new(7).neighbor(Direction::Bottom), None);
        assert_eq!(Position::new(7).neighbor(Direction::Left), None);
    }

    #[test]
    fn test_neighbor_is_symmetric() {
        for pos in Position::ALL {
            for side in Direction::ALL {
                if let Some(other) = pos.neighbor(side) {
                    assert_eq!(other.neighbor(side.opposite()), Some(pos));
                }
            }
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("7".parse::<Position>(), Ok(Position::new(7)));
        assert!("0".parse::<Position>().is_err());
        assert!("10".parse::<Position>().is_err());
        assert!("five".parse::<Position>().is_err());
        assert_eq!(Position::try_from(9), Ok(Position::new(9)));
    }

    #[test]
    #[should_panic(expected = "Position must be between 1 and 9")]
    fn test_new_rejects_zero() {
        let _ = Position::new(0);
    }
}
