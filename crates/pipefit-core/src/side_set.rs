//! A compact set of cell sides.

use std::{
    fmt,
    iter::FusedIterator,
    ops::{BitAnd, BitOr, Not},
};

use crate::Direction;

/// A set of [`Direction`]s, stored as a 4-bit mask.
///
/// Bit `n` is set when the direction with index `n` is a member.
///
/// # Examples
///
/// ```
/// use pipefit_core::{Direction, SideSet};
///
/// let closed = SideSet::from_iter([Direction::Top, Direction::Right]);
/// assert!(closed.contains(Direction::Top));
/// assert_eq!(closed.len(), 2);
///
/// // A quarter-turn clockwise moves every side along.
/// let turned = closed.rotated(1);
/// assert_eq!(turned, SideSet::from_iter([Direction::Right, Direction::Bottom]));
///
/// // The complement is the set of open sides.
/// assert_eq!(!closed, SideSet::from_iter([Direction::Bottom, Direction::Left]));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SideSet {
    bits: u8,
}

impl SideSet {
    const MASK: u8 = 0b1111;

    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set of all four sides.
    pub const FULL: Self = Self { bits: Self::MASK };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set from a slice of directions.
    #[must_use]
    pub const fn from_slice(sides: &[Direction]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < sides.len() {
            bits |= 1 << sides[i].index();
            i += 1;
        }
        Self { bits }
    }

    /// Returns `true` if `side` is in the set.
    #[must_use]
    pub const fn contains(self, side: Direction) -> bool {
        self.bits & (1 << side.index()) != 0
    }

    /// Adds `side` to the set. Returns `true` if it was not already present.
    pub fn insert(&mut self, side: Direction) -> bool {
        let added = !self.contains(side);
        self.bits |= 1 << side.index();
        added
    }

    /// Removes `side` from the set. Returns `true` if it was present.
    pub fn remove(&mut self, side: Direction) -> bool {
        let removed = self.contains(side);
        self.bits &= !(1 << side.index());
        removed
    }

    /// Returns the number of sides in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set has no members.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the set with every member turned `quarter_turns` times clockwise.
    #[must_use]
    pub const fn rotated(self, quarter_turns: u8) -> Self {
        let n = quarter_turns % 4;
        let bits = ((self.bits << n) | (self.bits >> ((4 - n) % 4))) & Self::MASK;
        Self { bits }
    }

    /// Returns an iterator over the members in clockwise order from the top.
    #[must_use]
    pub fn iter(self) -> Iter {
        Iter { set: self, next: 0 }
    }
}

impl FromIterator<Direction> for SideSet {
    fn from_iter<T: IntoIterator<Item = Direction>>(iter: T) -> Self {
        let mut set = Self::new();
        for side in iter {
            set.insert(side);
        }
        set
    }
}

impl IntoIterator for SideSet {
    type Item = Direction;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl BitOr for SideSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitAnd for SideSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl Not for SideSet {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self {
            bits: !self.bits & Self::MASK,
        }
    }
}

impl fmt::Debug for SideSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the members of a [`SideSet`].
#[derive(Debug, Clone)]
pub struct Iter {
    set: SideSet,
    next: u8,
}

impl Iterator for Iter {
    type Item = Direction;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < 4 {
            let side = Direction::from_index(self.next);
            self.next += 1;
            if self.set.contains(side) {
                return Some(side);
            }
        }
        None
    }
}

impl FusedIterator for Iter {}
