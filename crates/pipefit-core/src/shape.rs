//! Pipe piece shapes.

use std::{fmt, str::FromStr};

use crate::{Direction, Orientation, SideSet};

/// The shape of a pipe piece.
///
/// Each shape has a fixed set of closed (non-connective) sides at
/// [`Orientation::BASE`]; every other side is open.
///
/// | shape      | closed at rotation 0 | open at rotation 0        |
/// |------------|----------------------|---------------------------|
/// | `Cross`    | -                    | top, right, bottom, left  |
/// | `Tee`      | top                  | right, bottom, left       |
/// | `Straight` | top, bottom          | right, left               |
/// | `Elbow`    | top, right           | bottom, left              |
///
/// # Examples
///
/// ```
/// use pipefit_core::{Direction, Orientation, Shape, SideSet};
///
/// let closed = Shape::Elbow.closed_sides(Orientation::new(1));
/// assert_eq!(closed, SideSet::from_iter([Direction::Right, Direction::Bottom]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shape {
    /// Four-way junction.
    Cross,
    /// Three-way junction.
    Tee,
    /// Straight run between two opposite sides.
    Straight,
    /// Right-angle bend.
    Elbow,
}

impl Shape {
    /// All shapes, in palette order.
    pub const ALL: [Self; 4] = [Self::Cross, Self::Tee, Self::Straight, Self::Elbow];

    /// Returns the closed sides of the unrotated shape.
    #[must_use]
    pub const fn non_connective_slots(self) -> &'static [Direction] {
        match self {
            Self::Cross => &[],
            Self::Tee => &[Direction::Top],
            Self::Straight => &[Direction::Top, Direction::Bottom],
            Self::Elbow => &[Direction::Top, Direction::Right],
        }
    }

    /// Returns the sides that are closed once the shape is rotated to `orientation`.
    #[must_use]
    pub const fn closed_sides(self, orientation: Orientation) -> SideSet {
        SideSet::from_slice(self.non_connective_slots()).rotated(orientation.quarter_turns())
    }

    /// Returns the sides that are open once the shape is rotated to `orientation`.
    #[must_use]
    pub fn open_sides(self, orientation: Orientation) -> SideSet {
        !self.closed_sides(orientation)
    }

    /// Returns the lowercase name of this shape.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cross => "cross",
            Self::Tee => "tee",
            Self::Straight => "straight",
            Self::Elbow => "elbow",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a [`Shape`] fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown shape {input:?}: expected cross, tee, straight or elbow")]
pub struct ParseShapeError {
    input: String,
}

impl FromStr for Shape {
    type Err = ParseShapeError;

    /// Parses a shape name, case-insensitively.
    ///
    /// The glyph-like short names `+`, `t`, `i` and `l` are accepted as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cross" | "+" => Ok(Self::Cross),
            "tee" | "t" => Ok(Self::Tee),
            "straight" | "i" => Ok(Self::Straight),
            "elbow" | "l" => Ok(Self::Elbow),
            _ => Err(ParseShapeError {
                input: s.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Direction::{Bottom, Left, Right, Top};

    fn sides(list: &[Direction]) -> SideSet {
        SideSet::from_slice(list)
    }

    #[test]
    fn test_closed_sides_table() {
        #[rustfmt::skip]
        let table: [(Shape, [SideSet; 4]); 4] = [
            (Shape::Cross, [sides(&[]), sides(&[]), sides(&[]), sides(&[])]),
            (Shape::Tee, [sides(&[Top]), sides(&[Right]), sides(&[Bottom]), sides(&[Left])]),
            (Shape::Straight, [
                sides(&[Top, Bottom]),
                sides(&[Right, Left]),
                sides(&[Top, Bottom]),
                sides(&[Right, Left]),
            ]),
            (Shape::Elbow, [
                sides(&[Top, Right]),
                sides(&[Right, Bottom]),
                sides(&[Bottom, Left]),
                sides(&[Left, Top]),
            ]),
        ];

        for (shape, expected) in table {
            for (orientation, expected) in Orientation::ALL.into_iter().zip(expected) {
                assert_eq!(
                    shape.closed_sides(orientation),
                    expected,
                    "{shape} at orientation {orientation}"
                );
            }
        }
    }

    #[test]
    fn test_open_sides_complement_closed() {
        for shape in Shape::ALL {
            for orientation in Orientation::ALL {
                let open = shape.open_sides(orientation);
                let closed = shape.closed_sides(orientation);
                assert_eq!(open | closed, SideSet::FULL);
                assert!((open & closed).is_empty());
            }
        }
        assert_eq!(Shape::Cross.open_sides(Orientation::BASE), SideSet::FULL);
    }

    #[test]
    fn test_parse_names() {
        for shape in Shape::ALL {
            assert_eq!(shape.name().parse::<Shape>(), Ok(shape));
        }
        assert_eq!("T".parse::<Shape>(), Ok(Shape::Tee));
        assert_eq!("L".parse::<Shape>(), Ok(Shape::Elbow));
        assert_eq!("Straight".parse::<Shape>(), Ok(Shape::Straight));
        assert!("pipe".parse::<Shape>().is_err());
    }
}
