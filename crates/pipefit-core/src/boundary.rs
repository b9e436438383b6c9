//! Grid boundaries shared between cells.

use std::fmt;

use crate::{Direction, GRID_SIZE, Position};

/// The orientation of a grid line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum Axis {
    /// A horizontal line between two rows of positions.
    #[display("row")]
    Row,
    /// A vertical line between two columns of positions.
    #[display("column")]
    Column,
}

/// One unit segment of a grid line.
///
/// A boundary is identified by its [`Axis`], the `index` of the line along
/// that axis and the `lane` it crosses:
///
/// - Row boundaries: `index` 0 is the line above the first row and 3 the line
///   below the last; `lane` is the column the segment spans.
/// - Column boundaries: `index` 0 is the line left of the first column and 3
///   the line right of the last; `lane` is the row the segment spans.
///
/// Indices 1 and 2 are interior lines, each segment of which is shared by
/// exactly two positions. Indices 0 and 3 lie on the grid exterior and touch
/// a single position.
///
/// # Examples
///
/// ```
/// use pipefit_core::{Axis, Boundary, Direction, Position};
///
/// // The bottom of position 2 is the top of position 5.
/// let b = Position::new(2).boundary(Direction::Bottom);
/// assert_eq!(b, Position::new(5).boundary(Direction::Top));
/// assert_eq!((b.axis(), b.index(), b.lane()), (Axis::Row, 1, 1));
/// assert!(!b.is_exterior());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Boundary {
    axis: Axis,
    index: u8,
    lane: u8,
}

impl Boundary {
    /// Number of boundaries in the grid (both axes, interior and exterior).
    pub const COUNT: usize = 2 * (GRID_SIZE as usize + 1) * GRID_SIZE as usize;

    /// Creates a boundary from its components.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than 3 or `lane` is greater than 2.
    #[must_use]
    pub const fn new(axis: Axis, index: u8, lane: u8) -> Self {
        assert!(index <= GRID_SIZE, "Boundary index must be 0-3");
        assert!(lane < GRID_SIZE, "Boundary lane must be 0-2");
        Self { axis, index, lane }
    }

    /// Returns the boundary on `side` of `position`.
    #[must_use]
    pub const fn of(position: Position, side: Direction) -> Self {
        let (row, column) = (position.row(), position.column());
        match side {
            Direction::Top => Self::new(Axis::Row, row, column),
            Direction::Bottom => Self::new(Axis::Row, row + 1, column),
            Direction::Left => Self::new(Axis::Column, column, row),
            Direction::Right => Self::new(Axis::Column, column + 1, row),
        }
    }

    /// Returns an iterator over every boundary of the grid.
    pub fn all() -> impl Iterator<Item = Self> {
        [Axis::Row, Axis::Column].into_iter().flat_map(|axis| {
            (0..=GRID_SIZE)
                .flat_map(move |index| (0..GRID_SIZE).map(move |lane| Self::new(axis, index, lane)))
        })
    }

    /// Returns the axis of the line this boundary lies on.
    #[must_use]
    pub const fn axis(self) -> Axis {
        self.axis
    }

    /// Returns the index of the line along its axis (0-3).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.index
    }

    /// Returns the row or column the segment spans (0-2).
    #[must_use]
    pub const fn lane(self) -> u8 {
        self.lane
    }

    /// Returns `true` if the boundary lies on the outer edge of the grid.
    #[must_use]
    pub const fn is_exterior(self) -> bool {
        self.index == 0 || self.index == GRID_SIZE
    }

    /// Returns the positions on either side of this boundary.
    ///
    /// The first element is the position above (row boundaries) or to the
    /// left (column boundaries); either element is `None` outside the grid.
    #[must_use]
    pub const fn positions(self) -> (Option<Position>, Option<Position>) {
        let before = if self.index > 0 {
            Some(self.cell(self.index - 1))
        } else {
            None
        };
        let after = if self.index < GRID_SIZE {
            Some(self.cell(self.index))
        } else {
            None
        };
        (before, after)
    }

    const fn cell(self, line: u8) -> Position {
        match self.axis {
            Axis::Row => Position::from_row_column(line, self.lane),
            Axis::Column => Position::from_row_column(self.lane, line),
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lane_axis = match self.axis {
            Axis::Row => Axis::Column,
            Axis::Column => Axis::Row,
        };
        write!(
            f,
            "{} boundary {} at {} {}",
            self.axis,
            self.index,
            lane_axis,
            self.lane + 1
        )
    }
}
