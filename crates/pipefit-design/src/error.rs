use pipefit_core::Position;
use pipefit_engine::EdgeConflict;

/// Errors returned by design operations.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum DesignError {
    /// A cell was clicked with no tool selected.
    #[display("no shape selected")]
    #[from(ignore)]
    NoToolSelected,
    /// The delete tool was used on an empty cell.
    #[display("position {_0} is empty")]
    #[from(ignore)]
    EmptyCell(#[error(not(source))] Position),
    /// The piece does not fit its neighbors.
    #[display("piece does not fit: {_0}")]
    Conflict(#[from] EdgeConflict),
}
