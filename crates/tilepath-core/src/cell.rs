//! The [`Cell`] type: walkability plus an optional occupant handle.

/// Caller-issued handle for whatever sits on a cell (a tower, a wall block).
///
/// The grid stores the handle only; the occupant itself lives with the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupantId(pub u32);

impl From<u32> for OccupantId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// A single grid cell.
///
/// `walkable` and `occupant` are independent: placing an occupant does not
/// block the cell unless the caller also clears `walkable`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub walkable: bool,
    pub occupant: Option<OccupantId>,
}

impl Cell {
    /// A walkable, unoccupied cell.
    pub const OPEN: Self = Self {
        walkable: true,
        occupant: None,
    };

    /// An unwalkable, unoccupied cell.
    pub const BLOCKED: Self = Self {
        walkable: false,
        occupant: None,
    };

    /// Set walkability (builder).
    #[inline]
    pub const fn with_walkable(mut self, walkable: bool) -> Self {
        self.walkable = walkable;
        self
    }

    /// Set the occupant (builder).
    #[inline]
    pub const fn with_occupant(mut self, occupant: Option<OccupantId>) -> Self {
        self.occupant = occupant;
        self
    }

    /// Whether something has been placed on the cell.
    #[inline]
    pub const fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self::OPEN
    }
}
