use std::fmt;

use super::error::DefinitionError;

/// Number of player slots tracked by a ride document.
pub const SLOT_COUNT: u8 = 8;

/// One of the eight symmetric player positions, `player1` through `player8`.
///
/// Always holds an index in `1..=SLOT_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(u8);

impl Slot {
    /// # Errors
    ///
    /// Returns [`DefinitionError::InvalidSlot`] unless `1 <= index <= SLOT_COUNT`.
    pub fn new(index: u8) -> Result<Self, DefinitionError> {
        if (1..=SLOT_COUNT).contains(&index) {
            Ok(Self(index))
        } else {
            Err(DefinitionError::InvalidSlot {
                index,
                max: SLOT_COUNT,
            })
        }
    }

    /// Every slot in ascending order.
    pub fn all() -> impl Iterator<Item = Slot> {
        (1..=SLOT_COUNT).map(Slot)
    }

    /// Every slot except `self`, in ascending order.
    pub fn peers(self) -> impl Iterator<Item = Slot> {
        Self::all().filter(move |s| *s != self)
    }

    #[must_use]
    pub fn index(self) -> u8 {
        self.0
    }

    /// Field holding the owner's uid, e.g. `player3`.
    #[must_use]
    pub fn owner_field(self) -> String {
        format!("player{}", self.0)
    }

    #[must_use]
    pub fn name_field(self) -> String {
        format!("player{}Name", self.0)
    }

    #[must_use]
    pub fn score_field(self) -> String {
        format!("player{}Score", self.0)
    }

    #[must_use]
    pub fn position_field(self) -> String {
        format!("player{}Position", self.0)
    }
}

impl TryFrom<u8> for Slot {
    type Error = DefinitionError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player{}", self.0)
    }
}
