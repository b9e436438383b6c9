//! Piece orientation in quarter-turns.

use std::{fmt, str::FromStr};

/// Number of grad in a quarter-turn.
pub const GRAD_PER_QUARTER_TURN: u16 = 100;

/// Clockwise rotation of a piece from its base shape, in quarter-turns (0-3).
///
/// # Examples
///
/// ```
/// use pipefit_core::Orientation;
///
/// let o = Orientation::new(3);
/// assert_eq!(o.clockwise(), Orientation::new(0));
/// assert_eq!(Orientation::new(0).counter_clockwise(), Orientation::new(3));
/// assert_eq!(o.grad(), 300);
/// assert_eq!(Orientation::from_grad(200), Some(Orientation::new(2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Orientation {
    quarter_turns: u8,
}

impl Orientation {
    /// The unrotated orientation.
    pub const BASE: Self = Self { quarter_turns: 0 };

    /// All four orientations in clockwise order.
    pub const ALL: [Self; 4] = [
        Self { quarter_turns: 0 },
        Self { quarter_turns: 1 },
        Self { quarter_turns: 2 },
        Self { quarter_turns: 3 },
    ];

    /// Creates an orientation from a number of clockwise quarter-turns.
    ///
    /// # Panics
    ///
    /// Panics if `quarter_turns` is not in the range 0-3.
    #[must_use]
    pub const fn new(quarter_turns: u8) -> Self {
        assert!(quarter_turns < 4, "Orientation must be 0-3");
        Self { quarter_turns }
    }

    /// Converts an angle in grad (0, 100, 200, 300) into an orientation.
    ///
    /// Returns `None` for angles that are not a whole quarter-turn below a
    /// full revolution.
    #[must_use]
    pub const fn from_grad(grad: u16) -> Option<Self> {
        if grad % GRAD_PER_QUARTER_TURN != 0 || grad >= 4 * GRAD_PER_QUARTER_TURN {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let quarter_turns = (grad / GRAD_PER_QUARTER_TURN) as u8;
        Some(Self { quarter_turns })
    }

    /// Returns the number of clockwise quarter-turns (0-3).
    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        self.quarter_turns
    }

    /// Returns the rotation angle in grad, as used by CSS `rotate()`.
    #[must_use]
    pub const fn grad(self) -> u16 {
        self.quarter_turns as u16 * GRAD_PER_QUARTER_TURN
    }

    /// Returns the orientation one quarter-turn further clockwise.
    #[must_use]
    pub const fn clockwise(self) -> Self {
        Self {
            quarter_turns: (self.quarter_turns + 1) % 4,
        }
    }

    /// Returns the orientation one quarter-turn counter-clockwise.
    #[must_use]
    pub const fn counter_clockwise(self) -> Self {
        Self {
            quarter_turns: (self.quarter_turns + 3) % 4,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.quarter_turns, f)
    }
}

/// Error returned when parsing an [`Orientation`] fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid orientation {input:?}: expected 0-3 quarter-turns")]
pub struct ParseOrientationError {
    input: String,
}

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u8>() {
            Ok(n) if n < 4 => Ok(Self::new(n)),
            _ => Err(ParseOrientationError {
                input: s.to_owned(),
            }),
        }
    }
}
