//! Core geometry for pipe-tiling designs.
//!
//! This crate provides the small value types shared by the constraint engine
//! and the design session: where a piece sits, which way it faces and which
//! of its sides are open.
//!
//! # Overview
//!
//! 1. **Grid geometry**
//!    - [`position`]: Positions 1-9 in a 3×3 grid, with derived row and column
//!    - [`direction`]: The four sides of a cell, numbered clockwise from the top
//!    - [`boundary`]: Unit segments of the grid lines shared between cells
//!
//! 2. **Pieces**
//!    - [`shape`]: The four pipe shapes and their closed sides
//!    - [`orientation`]: Quarter-turn rotation of a piece
//!    - [`side_set`]: A compact set of sides used for open/closed masks
//!
//! # Examples
//!
//! ```
//! use pipefit_core::{Direction, Orientation, Position, Shape};
//!
//! // A straight pipe turned a quarter-turn runs top to bottom.
//! let open = Shape::Straight.open_sides(Orientation::new(1));
//! assert!(open.contains(Direction::Top));
//! assert!(!open.contains(Direction::Left));
//!
//! // Positions 5 and 8 share one boundary.
//! let shared = Position::new(5).boundary(Direction::Bottom);
//! assert_eq!(shared, Position::new(8).boundary(Direction::Top));
//! ```

pub mod boundary;
pub mod direction;
pub mod orientation;
pub mod position;
pub mod shape;
pub mod side_set;

pub use self::{
    boundary::{Axis, Boundary},
    direction::Direction,
    orientation::{Orientation, ParseOrientationError},
    position::{GRID_SIZE, POSITION_COUNT, ParsePositionError, Position},
    shape::{ParseShapeError, Shape},
    side_set::SideSet,
};
