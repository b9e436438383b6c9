//! Cell side directions.

use std::fmt::{self, Display};

/// One of the four sides of a grid cell.
///
/// Directions are numbered clockwise starting from the top, which makes a
/// clockwise quarter-turn a simple `+1 mod 4` on the discriminant.
///
/// # Examples
///
/// ```
/// use pipefit_core::Direction;
///
/// assert_eq!(Direction::Top.index(), 0);
/// assert_eq!(Direction::Top.rotated(1), Direction::Right);
/// assert_eq!(Direction::Left.rotated(1), Direction::Top);
/// assert_eq!(Direction::Bottom.opposite(), Direction::Top);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Direction {
    /// The upper side.
    Top = 0,
    /// The right-hand side.
    Right = 1,
    /// The lower side.
    Bottom = 2,
    /// The left-hand side.
    Left = 3,
}

impl Direction {
    /// All directions in clockwise order starting from [`Direction::Top`].
    ///
    /// This is also the order in which sides are checked when validating a
    /// placement.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Creates a direction from its index, wrapping modulo 4.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Self::Top,
            1 => Self::Right,
            2 => Self::Bottom,
            _ => Self::Left,
        }
    }

    /// Returns the index of this direction (0-3).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the direction reached after `quarter_turns` clockwise turns.
    #[must_use]
    pub const fn rotated(self, quarter_turns: u8) -> Self {
        Self::from_index(self.index() + quarter_turns % 4)
    }

    /// Returns the direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        self.rotated(2)
    }

    /// Returns the lowercase name of this direction.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
