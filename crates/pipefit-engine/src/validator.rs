//! Placement validation against the edge registry.

use pipefit_core::{Boundary, Direction, Orientation, Position, Shape};

use crate::{EdgeRegistry, Requirement};

/// Which way a requirement was contradicted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum ConflictKind {
    /// The piece needs the boundary open but another piece has it closed.
    #[display("required open but closed")]
    RequiredOpenButClosed,
    /// The piece needs the boundary closed but another piece has it open.
    #[display("required closed but open")]
    RequiredClosedButOpen,
}

impl ConflictKind {
    /// Returns the kind of conflict raised when `requirement` is contradicted.
    #[must_use]
    pub const fn violating(requirement: Requirement) -> Self {
        match requirement {
            Requirement::Open => Self::RequiredOpenButClosed,
            Requirement::Closed => Self::RequiredClosedButOpen,
        }
    }
}

/// A placement was rejected because one of its sides contradicts a neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{side} edge {kind}: {boundary} is held by position {blocked_by}")]
pub struct EdgeConflict {
    /// The side of the rejected piece that conflicts.
    pub side: Direction,
    /// Which requirement was contradicted.
    pub kind: ConflictKind,
    /// The boundary on that side.
    pub boundary: Boundary,
    /// The first other position asserting the opposite requirement.
    pub blocked_by: Position,
}

/// The requirement one side of a piece imposes on its boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SideRequirement {
    /// The side of the piece.
    pub side: Direction,
    /// The boundary on that side.
    pub boundary: Boundary,
    /// Whether the boundary must be open or closed.
    pub requirement: Requirement,
}

/// Computes the four side requirements of `shape` rotated to `orientation`
/// at `position`, in [`Direction::ALL`] order.
#[must_use]
pub fn requirements(
    shape: Shape,
    orientation: Orientation,
    position: Position,
) -> [SideRequirement; 4] {
    let closed = shape.closed_sides(orientation);
    Direction::ALL.map(|side| SideRequirement {
        side,
        boundary: position.boundary(side),
        requirement: Requirement::for_side(closed, side),
    })
}

/// Returns the first position other than `candidate` among `asserting`.
///
/// A boundary asserted by nothing but the candidate itself does not oppose
/// it: that is the candidate's own earlier requirement being re-checked. As
/// soon as any other position is listed the boundary is opposed, whether or
/// not the candidate is listed too.
fn opposing_position(asserting: &[Position], candidate: Position) -> Option<Position> {
    asserting.iter().copied().find(|p| *p != candidate)
}

/// Checks a placement against `registry` without recording anything.
///
/// Sides are checked in the order top, right, bottom, left and the first
/// conflicting side is reported. On success the side requirements that
/// [`validate`] would record are returned.
///
/// # Errors
///
/// Returns [`EdgeConflict`] if any side requires a boundary state that
/// another position has already asserted the opposite of.
pub fn check(
    shape: Shape,
    orientation: Orientation,
    position: Position,
    registry: &EdgeRegistry,
) -> Result<[SideRequirement; 4], EdgeConflict> {
    let reqs = requirements(shape, orientation, position);
    for req in &reqs {
        let opposing = registry.query(req.requirement.opposite(), req.boundary);
        log::trace!(
            "position {position} {side}: {requirement:?} on {boundary}, opposed by {opposing:?}",
            side = req.side,
            requirement = req.requirement,
            boundary = req.boundary,
        );
        if let Some(blocked_by) = opposing_position(opposing, position) {
            return Err(EdgeConflict {
                side: req.side,
                kind: ConflictKind::violating(req.requirement),
                boundary: req.boundary,
                blocked_by,
            });
        }
    }
    Ok(reqs)
}

/// Validates a placement and, if it fits, records its requirements.
///
/// The registry is only modified when every side passes, so a rejected call
/// leaves it untouched. Re-validating a position that already holds a piece
/// requires calling [`release`] first; stale entries shared with other
/// positions are not exempted.
///
/// # Errors
///
/// Returns [`EdgeConflict`] describing the first conflicting side.
///
/// # Examples
///
/// ```
/// use pipefit_core::{Direction, Orientation, Position, Shape};
/// use pipefit_engine::{ConflictKind, EdgeRegistry, validate};
///
/// let mut registry = EdgeRegistry::new();
///
/// // A cross opens every side of position 1, including its bottom.
/// validate(Shape::Cross, Orientation::BASE, Position::new(1), &mut registry).unwrap();
///
/// // A straight at rotation 0 closes its top, which is position 1's bottom.
/// let err = validate(Shape::Straight, Orientation::BASE, Position::new(4), &mut registry)
///     .unwrap_err();
/// assert_eq!(err.side, Direction::Top);
/// assert_eq!(err.kind, ConflictKind::RequiredClosedButOpen);
/// ```
pub fn validate(
    shape: Shape,
    orientation: Orientation,
    position: Position,
    registry: &mut EdgeRegistry,
) -> Result<(), EdgeConflict> {
    let reqs = check(shape, orientation, position, registry)?;
    for req in reqs {
        registry.record(req.requirement, req.boundary, position);
    }
    log::debug!("committed {shape} at orientation {orientation} on position {position}");
    Ok(())
}

/// Removes every requirement `position` has recorded in `registry`.
///
/// Returns the number of entries the position was removed from.
pub fn release(position: Position, registry: &mut EdgeRegistry) -> usize {
    registry.release(position)
}
