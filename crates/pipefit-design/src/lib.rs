//! Design sessions for the pipe-tiling grid.
//!
//! A [`Design`] is what a front end drives: it holds the placed pieces, the
//! edge registry that keeps them consistent and the piece palette (selected
//! tool plus each shape's orientation).
//!
//! Cell operations report their effect as a [`PlacementChange`]; each has a
//! `*_capability` twin that answers the same question without mutating,
//! which is what hover previews use.

pub use self::{
    design::Design,
    error::DesignError,
    placement::{Placement, PlacementChange},
    selection::{Palette, Rotation, Tool},
};

mod design;
mod error;
mod placement;
mod selection;
