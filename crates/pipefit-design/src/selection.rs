//! The piece palette: tool selection and per-shape orientation.

use pipefit_core::{Orientation, Shape};

/// What a click on a grid cell does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Tool {
    /// Place the given shape at its palette orientation.
    Shape(Shape),
    /// Remove the piece at the clicked cell.
    Delete,
}

impl From<Shape> for Tool {
    fn from(shape: Shape) -> Self {
        Self::Shape(shape)
    }
}

/// Direction of a palette rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::IsVariant)]
pub enum Rotation {
    /// One quarter-turn clockwise.
    #[default]
    Clockwise,
    /// One quarter-turn counter-clockwise.
    CounterClockwise,
}

impl Rotation {
    /// Applies this rotation to `orientation`.
    #[must_use]
    pub const fn apply(self, orientation: Orientation) -> Orientation {
        match self {
            Self::Clockwise => orientation.clockwise(),
            Self::CounterClockwise => orientation.counter_clockwise(),
        }
    }
}

/// The palette state: the selected tool and each shape's current orientation.
///
/// Every shape remembers its own orientation, so rotating the selected
/// shape leaves the others as they were.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    selected: Option<Tool>,
    orientations: [Orientation; Shape::ALL.len()],
}

impl Palette {
    /// Creates a palette with nothing selected and every shape unrotated.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected tool, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Tool> {
        self.selected
    }

    /// Selects `tool`, or clears the selection if `tool` is already selected.
    ///
    /// Returns the selection after the call.
    pub fn toggle(&mut self, tool: Tool) -> Option<Tool> {
        self.selected = if self.selected == Some(tool) {
            None
        } else {
            Some(tool)
        };
        log::trace!("palette selection: {:?}", self.selected);
        self.selected
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Returns the current orientation of `shape`.
    #[must_use]
    pub fn orientation(&self, shape: Shape) -> Orientation {
        self.orientations[shape_index(shape)]
    }

    /// Rotates `shape` and returns its new orientation.
    pub fn rotate(&mut self, shape: Shape, rotation: Rotation) -> Orientation {
        let slot = &mut self.orientations[shape_index(shape)];
        *slot = rotation.apply(*slot);
        *slot
    }

    /// Rotates the selected shape.
    ///
    /// Returns the shape and its new orientation, or `None` when no shape is
    /// selected.
    pub fn rotate_selected(&mut self, rotation: Rotation) -> Option<(Shape, Orientation)> {
        let Some(Tool::Shape(shape)) = self.selected else {
            return None;
        };
        Some((shape, self.rotate(shape, rotation)))
    }

    /// Returns the selected shape with its orientation, if a shape is selected.
    #[must_use]
    pub fn selected_piece(&self) -> Option<(Shape, Orientation)> {
        match self.selected {
            Some(Tool::Shape(shape)) => Some((shape, self.orientation(shape))),
            _ => None,
        }
    }
}

fn shape_index(shape: Shape) -> usize {
    match shape {
        Shape::Cross => 0,
        Shape::Tee => 1,
        Shape::Straight => 2,
        Shape::Elbow => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_same_tool_clears() {
        let mut palette = Palette::new();
        assert_eq!(palette.toggle(Tool::Shape(Shape::Tee)), Some(Tool::Shape(Shape::Tee)));
        assert_eq!(palette.toggle(Tool::Delete), Some(Tool::Delete));
        assert_eq!(palette.toggle(Tool::Delete), None);
        assert_eq!(palette.selected(), None);
    }

    #[test]
    fn test_orientation_is_per_shape() {
        let mut palette = Palette::new();
        palette.rotate(Shape::Elbow, Rotation::Clockwise);
        palette.rotate(Shape::Elbow, Rotation::Clockwise);
        palette.rotate(Shape::Tee, Rotation::CounterClockwise);

        assert_eq!(palette.orientation(Shape::Elbow), Orientation::new(2));
        assert_eq!(palette.orientation(Shape::Tee), Orientation::new(3));
        assert_eq!(palette.orientation(Shape::Cross), Orientation::BASE);
        assert_eq!(palette.orientation(Shape::Straight), Orientation::BASE);
    }

    #[test]
    fn test_rotate_selected_requires_shape() {
        let mut palette = Palette::new();
        assert_eq!(palette.rotate_selected(Rotation::Clockwise), None);
        palette.toggle(Tool::Delete);
        assert_eq!(palette.rotate_selected(Rotation::Clockwise), None);

        palette.toggle(Shape::Straight.into());
        assert_eq!(
            palette.rotate_selected(Rotation::CounterClockwise),
            Some((Shape::Straight, Orientation::new(3)))
        );
        assert_eq!(
            palette.selected_piece(),
            Some((Shape::Straight, Orientation::new(3)))
        );
    }

    #[test]
    fn test_orientation_survives_deselect() {
        let mut palette = Palette::new();
        palette.toggle(Shape::Cross.into());
        palette.rotate_selected(Rotation::Clockwise);
        palette.clear();
        assert_eq!(palette.selected_piece(), None);
        assert_eq!(palette.orientation(Shape::Cross), Orientation::new(1));
    }
}
