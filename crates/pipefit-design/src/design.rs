use pipefit_core::{Orientation, POSITION_COUNT, Position, Shape};
use pipefit_engine::{EdgeConflict, EdgeRegistry, check, release, validate};

use crate::{DesignError, Palette, Placement, PlacementChange, Rotation, Tool};

/// A pipe design being built on the 3×3 grid.
///
/// The design owns the committed placements, the edge registry holding
/// their boundary requirements and the palette the user picks pieces from.
/// Every mutation keeps the registry in step with the placements: a piece is
/// stored only if it fits its neighbors, and removing or replacing a piece
/// releases its requirements.
///
/// # Example
///
/// ```
/// use pipefit_core::{Orientation, Position, Shape};
/// use pipefit_design::{Design, DesignError, PlacementChange, Tool};
///
/// let mut design = Design::new();
///
/// // A cross opens every side, so a straight (closed top) cannot go below it.
/// design.place(Position::new(1), Shape::Cross, Orientation::BASE).unwrap();
/// let err = design
///     .place(Position::new(4), Shape::Straight, Orientation::BASE)
///     .unwrap_err();
/// assert!(matches!(err, DesignError::Conflict(_)));
///
/// // Using the palette: select a tool, then click cells.
/// design.select(Tool::Delete);
/// let change = design.click(Position::new(1)).unwrap();
/// assert!(change.is_removed());
/// assert!(design.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Design {
    cells: [Option<Placement>; POSITION_COUNT as usize],
    registry: EdgeRegistry,
    palette: Palette,
}

impl Design {
    /// Creates an empty design with an empty registry and palette.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(pos: Position) -> usize {
        usize::from(pos.number() - 1)
    }

    /// Returns the piece at `pos`, if any.
    #[must_use]
    pub fn placement(&self, pos: Position) -> Option<Placement> {
        self.cells[Self::slot(pos)]
    }

    /// Returns an iterator over the occupied cells in position order.
    pub fn placements(&self) -> impl Iterator<Item = (Position, Placement)> + '_ {
        Position::ALL
            .into_iter()
            .filter_map(|pos| self.placement(pos).map(|placement| (pos, placement)))
    }

    /// Returns `true` if no cell holds a piece.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Returns the edge registry backing this design.
    #[must_use]
    pub fn registry(&self) -> &EdgeRegistry {
        &self.registry
    }

    /// Returns the palette.
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Selects `tool`, or clears the selection if it is already selected.
    ///
    /// Returns the selection after the call.
    pub fn select(&mut self, tool: Tool) -> Option<Tool> {
        self.palette.toggle(tool)
    }

    /// Clears the palette selection.
    pub fn clear_selection(&mut self) {
        self.palette.clear();
    }

    /// Rotates the selected shape in the palette.
    ///
    /// Placed pieces keep their orientation. Returns `None` when no shape is
    /// selected.
    pub fn rotate_selected(&mut self, rotation: Rotation) -> Option<(Shape, Orientation)> {
        self.palette.rotate_selected(rotation)
    }

    /// Puts a piece at `pos`, replacing whatever is there.
    ///
    /// The previous piece's requirements are released before the new piece is
    /// validated. If the new piece does not fit, the registry is restored from
    /// a snapshot taken before the release, so the design is exactly as it
    /// was, including the order of positions within each entry.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::Conflict`] if the piece contradicts a neighbor.
    pub fn place(
        &mut self,
        pos: Position,
        shape: Shape,
        orientation: Orientation,
    ) -> Result<PlacementChange, DesignError> {
        let placement = Placement::new(shape, orientation);
        let previous = self.placement(pos);
        if previous == Some(placement) {
            return Ok(PlacementChange::Unchanged);
        }

        let snapshot = previous.map(|_| self.registry.clone());
        if previous.is_some() {
            release(pos, &mut self.registry);
        }
        if let Err(conflict) = validate(shape, orientation, pos, &mut self.registry) {
            if let Some(snapshot) = snapshot {
                self.registry = snapshot;
            }
            log::debug!("rejected {shape} at position {pos}: {conflict}");
            return Err(conflict.into());
        }

        self.cells[Self::slot(pos)] = Some(placement);
        Ok(match previous {
            Some(previous) => PlacementChange::Replaced { previous },
            None => PlacementChange::Placed,
        })
    }

    /// Removes the piece at `pos` and releases its requirements.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::EmptyCell`] if there is no piece at `pos`.
    pub fn delete(&mut self, pos: Position) -> Result<PlacementChange, DesignError> {
        let previous = self.cells[Self::slot(pos)]
            .take()
            .ok_or(DesignError::EmptyCell(pos))?;
        release(pos, &mut self.registry);
        log::debug!("deleted {} from position {pos}", previous.shape);
        Ok(PlacementChange::Removed { previous })
    }

    /// Applies the selected palette tool to `pos`.
    ///
    /// With a shape selected, places it at the palette orientation; with the
    /// delete tool, removes the piece at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::NoToolSelected`] if nothing is selected, or the
    /// error of [`place`](Self::place) or [`delete`](Self::delete).
    pub fn click(&mut self, pos: Position) -> Result<PlacementChange, DesignError> {
        match self.palette.selected() {
            None => Err(DesignError::NoToolSelected),
            Some(Tool::Delete) => self.delete(pos),
            Some(Tool::Shape(shape)) => {
                let orientation = self.palette.orientation(shape);
                self.place(pos, shape, orientation)
            }
        }
    }

    /// Reports what [`place`](Self::place) would do without changing anything.
    ///
    /// # Errors
    ///
    /// Returns [`EdgeConflict`] if the piece would be rejected.
    pub fn place_capability(
        &self,
        pos: Position,
        shape: Shape,
        orientation: Orientation,
    ) -> Result<PlacementChange, EdgeConflict> {
        let placement = Placement::new(shape, orientation);
        let previous = self.placement(pos);
        if previous == Some(placement) {
            return Ok(PlacementChange::Unchanged);
        }

        match previous {
            None => {
                check(shape, orientation, pos, &self.registry)?;
                Ok(PlacementChange::Placed)
            }
            Some(previous) => {
                let mut registry = self.registry.clone();
                release(pos, &mut registry);
                check(shape, orientation, pos, &registry)?;
                Ok(PlacementChange::Replaced { previous })
            }
        }
    }

    /// Reports what [`click`](Self::click) would do without changing anything.
    ///
    /// This is what a hover preview shows.
    ///
    /// # Errors
    ///
    /// Returns the error [`click`](Self::click) would return.
    pub fn click_capability(&self, pos: Position) -> Result<PlacementChange, DesignError> {
        match self.palette.selected() {
            None => Err(DesignError::NoToolSelected),
            Some(Tool::Delete) => self
                .placement(pos)
                .map(|previous| PlacementChange::Removed { previous })
                .ok_or(DesignError::EmptyCell(pos)),
            Some(Tool::Shape(shape)) => {
                let orientation = self.palette.orientation(shape);
                Ok(self.place_capability(pos, shape, orientation)?)
            }
        }
    }

    /// Removes every piece and empties the registry. The palette is kept.
    pub fn reset(&mut self) {
        self.cells = [None; POSITION_COUNT as usize];
        self.registry.reset();
        log::debug!("design reset");
    }
}
