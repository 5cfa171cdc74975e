//! Hash-table cell storage
//!
//! Each occupied cell owns one logical entry plus the intrusive links that
//! thread the insertion-order list through the table. Links are slot indices
//! rather than references, so relocating an entry during a resize only means
//! rewriting indices, never chasing pointers.

/// A single occupied hash-table cell.
///
/// At the table level a cell is `Option<Slot<T>>`: `None` means never used,
/// `Some` with `deleted == false` is a live entry, and `Some` with
/// `deleted == true` is a tombstone. Tombstones keep linear-probe chains
/// intact but no longer participate in membership or the order list.
#[derive(Debug, Clone)]
pub(crate) struct Slot<T> {
    /// Stored element. Abandoned in place once the slot is tombstoned.
    pub element: T,

    /// Live multiplicity (>= 1 while live; meaningless after tombstoning).
    pub count: usize,

    /// Tombstone marker.
    pub deleted: bool,

    /// Index of the next live slot in insertion order.
    pub next: Option<usize>,

    /// Index of the previous live slot in insertion order.
    pub prev: Option<usize>,
}

impl<T> Slot<T> {
    /// Create a fresh live slot, not yet linked into the order list.
    pub fn new(element: T, count: usize) -> Self {
        Self {
            element,
            count,
            deleted: false,
            next: None,
            prev: None,
        }
    }

    /// True for an occupied cell that still counts toward membership.
    #[inline]
    pub fn is_live(&self) -> bool {
        !self.deleted
    }
}
