//! Ledger of boundary requirements asserted by placed pieces.

use std::collections::{BTreeMap, btree_map::Entry};

use pipefit_core::{Boundary, Direction, Position, SideSet};

/// Whether a piece needs a boundary to be open or closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::IsVariant)]
pub enum Requirement {
    /// The boundary must carry a pipe connection.
    Open,
    /// The boundary must be sealed.
    Closed,
}

impl Requirement {
    /// Both requirements, open first.
    pub const ALL: [Self; 2] = [Self::Open, Self::Closed];

    /// Returns the requirement that contradicts this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    /// Returns the requirement a piece with `closed` sides imposes on `side`.
    #[must_use]
    pub const fn for_side(closed: SideSet, side: Direction) -> Self {
        if closed.contains(side) {
            Self::Closed
        } else {
            Self::Open
        }
    }

    /// Returns the name of the table this requirement is recorded in.
    #[must_use]
    pub const fn table_name(self) -> &'static str {
        match self {
            Self::Open => "enabled",
            Self::Closed => "disabled",
        }
    }
}

type Table = BTreeMap<Boundary, Vec<Position>>;

/// The two requirement tables of a design session.
///
/// `enabled` maps each boundary to the positions requiring it open and
/// `disabled` to the positions requiring it closed. Positions are kept in
/// insertion order and never repeat within one entry. Entries whose list
/// becomes empty are removed.
///
/// The registry performs no validation: it will happily record contradictory
/// requirements. Use [`validate`](crate::validate) to mutate it safely.
///
/// # Examples
///
/// ```
/// use pipefit_core::{Direction, Position};
/// use pipefit_engine::{EdgeRegistry, Requirement};
///
/// let mut registry = EdgeRegistry::new();
/// let pos = Position::new(5);
/// let top = pos.boundary(Direction::Top);
///
/// registry.record(Requirement::Closed, top, pos);
/// assert_eq!(registry.query(Requirement::Closed, top), [pos]);
/// assert!(registry.query(Requirement::Open, top).is_empty());
///
/// registry.release(pos);
/// assert!(registry.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeRegistry {
    enabled: Table,
    disabled: Table,
}

impl EdgeRegistry {
    /// Creates a registry with empty tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self, requirement: Requirement) -> &Table {
        match requirement {
            Requirement::Open => &self.enabled,
            Requirement::Closed => &self.disabled,
        }
    }

    fn table_mut(&mut self, requirement: Requirement) -> &mut Table {
        match requirement {
            Requirement::Open => &mut self.enabled,
            Requirement::Closed => &mut self.disabled,
        }
    }

    /// Records that `position` imposes `requirement` on `boundary`.
    ///
    /// Returns `true` if the position was newly added, `false` if it was
    /// already recorded there.
    pub fn record(
        &mut self,
        requirement: Requirement,
        boundary: Boundary,
        position: Position,
    ) -> bool {
        let positions = self.table_mut(requirement).entry(boundary).or_default();
        if positions.contains(&position) {
            return false;
        }
        positions.push(position);
        true
    }

    /// Removes every requirement imposed by `position` from both tables.
    ///
    /// A position only ever records requirements on its own four boundaries,
    /// so only those entries are visited. Returns the number of entries the
    /// position was removed from.
    pub fn release(&mut self, position: Position) -> usize {
        let mut removed = 0;
        for requirement in Requirement::ALL {
            let table = self.table_mut(requirement);
            for boundary in position.boundaries() {
                let Entry::Occupied(mut entry) = table.entry(boundary) else {
                    continue;
                };
                let positions = entry.get_mut();
                let Some(i) = positions.iter().position(|p| *p == position) else {
                    continue;
                };
                positions.remove(i);
                removed += 1;
                if positions.is_empty() {
                    entry.remove();
                }
            }
        }
        if removed > 0 {
            log::debug!("released {removed} requirement(s) held by position {position}");
        }
        removed
    }

    /// Returns the positions imposing `requirement` on `boundary`, in
    /// insertion order. Empty if there are none.
    #[must_use]
    pub fn query(&self, requirement: Requirement, boundary: Boundary) -> &[Position] {
        self.table(requirement)
            .get(&boundary)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the requirement currently asserted on `boundary`, if any.
    ///
    /// If the registry holds contradictory entries (only possible when
    /// mutated through [`record`](Self::record) directly), `Open` wins.
    #[must_use]
    pub fn requirement_at(&self, boundary: Boundary) -> Option<Requirement> {
        Requirement::ALL
            .into_iter()
            .find(|req| self.table(*req).contains_key(&boundary))
    }

    /// Returns the requirements recorded for `position`, in boundary order.
    #[must_use]
    pub fn requirements_of(&self, position: Position) -> Vec<(Boundary, Requirement)> {
        let mut found = Vec::new();
        for boundary in position.boundaries() {
            for requirement in Requirement::ALL {
                if self.query(requirement, boundary).contains(&position) {
                    found.push((boundary, requirement));
                }
            }
        }
        found
    }

    /// Returns an iterator over the entries of one table, in boundary order.
    pub fn entries(
        &self,
        requirement: Requirement,
    ) -> impl Iterator<Item = (Boundary, &[Position])> + '_ {
        self.table(requirement)
            .iter()
            .map(|(boundary, positions)| (*boundary, positions.as_slice()))
    }

    /// Returns the boundaries that appear in both tables at once.
    ///
    /// This is always empty for a registry mutated only through
    /// [`validate`](crate::validate) and [`release`](Self::release).
    #[must_use]
    pub fn contested_boundaries(&self) -> Vec<Boundary> {
        self.enabled
            .keys()
            .filter(|boundary| self.disabled.contains_key(boundary))
            .copied()
            .collect()
    }

    /// Returns `true` if neither table has any entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty() && self.disabled.is_empty()
    }

    /// Returns the number of entries across both tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.enabled.len() + self.disabled.len()
    }

    /// Empties both tables.
    pub fn reset(&mut self) {
        self.enabled.clear();
        self.disabled.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn top(n: u8) -> Boundary {
        Position::new(n).boundary(Direction::Top)
    }

    #[test]
    fn test_record_is_idempotent() {
        let mut registry = EdgeRegistry::new();
        let pos = Position::new(5);
        assert!(registry.record(Requirement::Open, top(5), pos));
        assert!(!registry.record(Requirement::Open, top(5), pos));
        assert_eq!(registry.query(Requirement::Open, top(5)), [pos]);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_record_keeps_insertion_order() {
        let mut registry = EdgeRegistry::new();
        let shared = top(5);
        registry.record(Requirement::Open, shared, Position::new(5));
        registry.record(Requirement::Open, shared, Position::new(2));
        assert_eq!(
            registry.query(Requirement::Open, shared),
            [Position::new(5), Position::new(2)]
        );
    }

    #[test]
    fn test_query_absent_is_empty() {
        let registry = EdgeRegistry::new();
        for boundary in Boundary::all() {
            for requirement in Requirement::ALL {
                assert!(registry.query(requirement, boundary).is_empty());
            }
        }
    }

    #[test]
    fn test_release_removes_only_that_position() {
        let mut registry = EdgeRegistry::new();
        let (p2, p5) = (Position::new(2), Position::new(5));
        let shared = top(5);
        registry.record(Requirement::Closed, shared, p2);
        registry.record(Requirement::Closed, shared, p5);
        registry.record(Requirement::Open, top(2), p2);

        assert_eq!(registry.release(p2), 2);
        assert_eq!(registry.query(Requirement::Closed, shared), [p5]);
        assert!(registry.query(Requirement::Open, top(2)).is_empty());
        assert_eq!(registry.requirement_at(top(2)), None);
        assert_eq!(registry.len(), 1);

        assert_eq!(registry.release(p5), 1);
        assert!(registry.is_empty());
        assert_eq!(registry.release(p5), 0);
    }

    #[test]
    fn test_requirements_of_position() {
        let mut registry = EdgeRegistry::new();
        let pos = Position::new(1);
        registry.record(Requirement::Closed, pos.boundary(Direction::Top), pos);
        registry.record(Requirement::Open, pos.boundary(Direction::Bottom), pos);
        registry.record(Requirement::Open, pos.boundary(Direction::Bottom), Position::new(4));

        let found = registry.requirements_of(pos);
        assert_eq!(
            found,
            [
                (pos.boundary(Direction::Top), Requirement::Closed),
                (pos.boundary(Direction::Bottom), Requirement::Open),
            ]
        );
    }

    #[test]
    fn test_contested_boundaries_detects_raw_contradiction() {
        let mut registry = EdgeRegistry::new();
        let shared = top(5);
        registry.record(Requirement::Open, shared, Position::new(2));
        assert!(registry.contested_boundaries().is_empty());
        registry.record(Requirement::Closed, shared, Position::new(5));
        assert_eq!(registry.contested_boundaries(), [shared]);
        assert_eq!(registry.requirement_at(shared), Some(Requirement::Open));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut registry = EdgeRegistry::new();
        registry.record(Requirement::Open, top(4), Position::new(4));
        registry.record(Requirement::Closed, top(7), Position::new(7));
        registry.reset();
        assert!(registry.is_empty());
        assert_eq!(registry, EdgeRegistry::new());
    }
}
