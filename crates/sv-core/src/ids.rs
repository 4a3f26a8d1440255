use core::fmt;
use core::num::NonZeroU32;

/// Compact identifier for an entry of an index-addressed arena.
///
/// Stores `index + 1` so that `Option<Id>` stays four bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Create an Id from a 0-based index.
    ///
    /// Indices are bounded by arena lengths, which never reach `u32::MAX`.
    pub fn from_index(index: u32) -> Self {
        Self(NonZeroU32::new(index.saturating_add(1)).unwrap_or(NonZeroU32::MAX))
    }

    /// Create an Id from a `usize` position, failing past the `u32` range.
    pub fn try_from_usize(index: usize) -> Option<Self> {
        u32::try_from(index)
            .ok()
            .filter(|&i| i < u32::MAX)
            .map(Self::from_index)
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// Recover the 0-based index as `usize` for slice access.
    pub fn as_usize(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Identifier of a node in an ingested document graph.
pub type NodeId = Id;

/// Handle to a presentation node in the outline arena.
///
/// The generation is bumped every time a slot is freed, so a handle kept
/// across a collapse no longer matches the recycled slot.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PresId {
    slot: Id,
    generation: u32,
}

impl PresId {
    pub fn new(slot: Id, generation: u32) -> Self {
        Self { slot, generation }
    }

    pub fn slot(self) -> Id {
        self.slot
    }

    pub fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for PresId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PresId({}v{})", self.slot.index(), self.generation)
    }
}

impl fmt::Display for PresId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.slot.index(), self.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trip_index() {
        for i in [0_u32, 1, 2, 42, 10_000] {
            let id = Id::from_index(i);
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn option_id_is_small() {
        assert_eq!(
            core::mem::size_of::<Id>(),
            core::mem::size_of::<Option<Id>>()
        );
    }

    #[test]
    fn try_from_usize_rejects_overflow() {
        assert_eq!(Id::try_from_usize(7).map(Id::index), Some(7));
        assert!(Id::try_from_usize(u32::MAX as usize).is_none());
        assert!(Id::try_from_usize(usize::MAX).is_none());
    }

    #[test]
    fn pres_id_generations_differ() {
        let a = PresId::new(Id::from_index(3), 0);
        let b = PresId::new(Id::from_index(3), 1);
        assert_ne!(a, b);
        assert_eq!(a.slot(), b.slot());
        assert_eq!(b.to_string(), "3v1");
    }
}
