//! Committed pieces and the effect of placing them.

use pipefit_core::{Orientation, Shape, SideSet};

/// A piece committed to a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// The piece shape.
    pub shape: Shape,
    /// The piece rotation.
    pub orientation: Orientation,
}

impl Placement {
    /// Creates a placement.
    #[must_use]
    pub const fn new(shape: Shape, orientation: Orientation) -> Self {
        Self { shape, orientation }
    }

    /// Returns the sides this piece connects through.
    #[must_use]
    pub fn open_sides(self) -> SideSet {
        self.shape.open_sides(self.orientation)
    }
}

/// The effect a cell operation had, or would have, on a design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PlacementChange {
    /// The cell already held an identical piece.
    Unchanged,
    /// A piece was put into an empty cell.
    Placed,
    /// A piece replaced a different one.
    Replaced {
        /// The piece that was there before.
        previous: Placement,
    },
    /// The piece in the cell was removed.
    Removed {
        /// The piece that was removed.
        previous: Placement,
    },
}
