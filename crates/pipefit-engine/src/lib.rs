//! Edge-constraint engine for pipe-tiling designs.
//!
//! Every cell side in the grid lies on a [`Boundary`](pipefit_core::Boundary)
//! that must be open on both sides or closed on both sides. This crate keeps
//! track of which placed pieces require which boundaries to be open or closed
//! and refuses placements that would contradict them.
//!
//! - [`EdgeRegistry`]: the `enabled` (open) and `disabled` (closed) tables,
//!   each mapping a boundary to the positions asserting it.
//! - [`validate`]: checks a piece's four side requirements and records them
//!   when none conflicts, otherwise reports an [`EdgeConflict`].
//! - [`release`]: forgets everything a position has asserted, used before
//!   deleting or overwriting a placement.
//!
//! The registry is an ordinary value owned by the caller. Independent
//! designs use independent registries.
//!
//! # Examples
//!
//! ```
//! use pipefit_core::{Orientation, Position, Shape};
//! use pipefit_engine::{EdgeRegistry, release, validate};
//!
//! let mut registry = EdgeRegistry::new();
//! let pos = Position::new(1);
//!
//! // An elbow closing its top and right, next to one closing its bottom and left.
//! validate(Shape::Elbow, Orientation::new(0), pos, &mut registry).unwrap();
//! validate(Shape::Elbow, Orientation::new(2), Position::new(2), &mut registry).unwrap();
//!
//! // Overwriting position 1 starts by releasing its old requirements.
//! release(pos, &mut registry);
//! validate(Shape::Tee, Orientation::new(1), pos, &mut registry).unwrap();
//! assert!(registry.contested_boundaries().is_empty());
//! ```

pub mod registry;
pub mod validator;

pub use self::{
    registry::{EdgeRegistry, Requirement},
    validator::{
        ConflictKind, EdgeConflict, SideRequirement, check, release, requirements, validate,
    },
};
