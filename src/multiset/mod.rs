//! Insertion-ordered hash multiset
//!
//! [`OrderedMultiset`] stores elements with a repetition count in an
//! open-addressed hash table (linear probing, tombstone deletion, amortized
//! doubling) and threads an intrusive doubly-linked list through the table
//! cells so iteration follows first-insertion order.
//!
//! Three invariants are maintained together across every operation:
//!
//! 1. **Occupancy**: the number of distinct live elements stays strictly
//!    below the table capacity, so insertion probes always terminate.
//! 2. **Tombstones**: removing the last occurrence of an element marks its
//!    cell deleted instead of clearing it, keeping probe chains past the
//!    cell traversable. Tombstoned cells are reused by later insertions and
//!    dropped entirely on resize.
//! 3. **Order list**: `head`/`tail` plus per-slot `next`/`prev` indices form
//!    a doubly-linked list over live slots in first-insertion order. An
//!    element whose occurrences were all removed and which is later re-added
//!    is appended at the tail; it does not recover its old position.
//!
//! The structure is single-threaded by design: no locking, no interior
//! mutability. Sharing one instance across threads requires external
//! synchronization.

mod iter;
mod slot;

pub use iter::{Iter, IterCounts};

use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use thiserror::Error;
use tracing::trace;

use slot::Slot;

/// Errors reported by multiset operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MultisetError {
    /// A removal asked for more occurrences than are currently stored.
    /// `found` is zero when the element is absent altogether.
    #[error("cannot remove {requested} occurrence(s): only {found} present")]
    MissingElement {
        /// Occurrences the caller asked to remove.
        requested: usize,
        /// Occurrences actually stored at the time of the call.
        found: usize,
    },
}

/// A hash multiset with deterministic first-insertion iteration order.
///
/// Elements only need [`Hash`] + [`Eq`]; no total order is required. The
/// hasher state is pluggable via the `S` parameter and defaults to the
/// standard library's [`RandomState`].
///
/// # Examples
///
/// ```
/// use ordbag::OrderedMultiset;
///
/// let mut bag = OrderedMultiset::new(4);
/// bag.add("a");
/// bag.add_count("b", 2);
/// bag.add("a");
///
/// assert_eq!(bag.len(), 4);
/// assert_eq!(bag.count(&"a"), 2);
/// let items: Vec<_> = bag.iter().copied().collect();
/// assert_eq!(items, ["a", "a", "b", "b"]);
/// ```
#[derive(Clone)]
pub struct OrderedMultiset<T, S = RandomState> {
    table: Vec<Option<Slot<T>>>,
    head: Option<usize>,
    tail: Option<usize>,
    /// Number of live (non-tombstoned) slots.
    distinct: usize,
    /// Sum of live multiplicities.
    total: usize,
    hasher: S,
}

impl<T> OrderedMultiset<T, RandomState> {
    /// Create an empty multiset able to hold `initial_capacity` distinct
    /// elements before the first resize.
    ///
    /// # Panics
    ///
    /// Panics if `initial_capacity` is zero.
    pub fn new(initial_capacity: usize) -> Self {
        Self::with_hasher(initial_capacity, RandomState::new())
    }
}

impl<T, S> OrderedMultiset<T, S> {
    /// Create an empty multiset with an explicit hasher state.
    ///
    /// # Panics
    ///
    /// Panics if `initial_capacity` is zero.
    pub fn with_hasher(initial_capacity: usize, hasher: S) -> Self {
        assert!(initial_capacity > 0, "initial capacity must be positive");
        Self {
            table: (0..initial_capacity).map(|_| None).collect(),
            head: None,
            tail: None,
            distinct: 0,
            total: 0,
            hasher,
        }
    }

    /// Total number of stored occurrences, duplicates included. O(1).
    pub fn len(&self) -> usize {
        self.total
    }

    /// True when no occurrences are stored. O(1).
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct live elements. O(1).
    pub fn distinct_count(&self) -> usize {
        self.distinct
    }

    /// Current internal table capacity: the number of distinct elements the
    /// multiset can hold before the next doubling. Never decreases. O(1).
    pub fn capacity(&self) -> usize {
        self.table.len()
    }

    /// Iterate over all occurrences in first-insertion order. An element
    /// with multiplicity `k` is yielded `k` consecutive times.
    pub fn iter(&self) -> Iter<'_, T, S> {
        Iter::new(self)
    }

    /// Iterate over `(element, multiplicity)` pairs in first-insertion
    /// order, one entry per distinct element.
    pub fn iter_counts(&self) -> IterCounts<'_, T, S> {
        IterCounts::new(self)
    }

    pub(crate) fn order_head(&self) -> Option<usize> {
        self.head
    }

    pub(crate) fn slot(&self, index: usize) -> &Slot<T> {
        self.table[index]
            .as_ref()
            .expect("order-list index refers to an occupied cell")
    }

    fn slot_mut(&mut self, index: usize) -> &mut Slot<T> {
        self.table[index]
            .as_mut()
            .expect("order-list index refers to an occupied cell")
    }

    /// Unlink a live slot from the order list, patching the head/tail
    /// anchors or the neighbours' links as appropriate.
    fn unlink(&mut self, index: usize) {
        let (prev, next) = {
            let slot = self.slot(index);
            (slot.prev, slot.next)
        };
        match prev {
            Some(p) => self.slot_mut(p).next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.slot_mut(n).prev = prev,
            None => self.tail = prev,
        }
        let slot = self.slot_mut(index);
        slot.next = None;
        slot.prev = None;
    }
}

impl<T, S> OrderedMultiset<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Add a single occurrence of `element`.
    ///
    /// Equivalent to [`add_count`](Self::add_count) with a count of 1.
    pub fn add(&mut self, element: T) {
        self.add_count(element, 1);
    }

    /// Add `count` occurrences of `element`. A count of zero is a no-op.
    ///
    /// If the element is already live its multiplicity grows in place and
    /// its position in the iteration order is unchanged. Otherwise the
    /// element lands in the first empty or tombstoned cell along its probe
    /// chain and is appended at the tail of the iteration order, even when
    /// an equal element existed earlier and was fully removed.
    ///
    /// If storing a brand-new distinct element fills the table, the table
    /// doubles before this call returns, so the load factor stays strictly
    /// below one. Amortized O(1); worst case O(capacity).
    pub fn add_count(&mut self, element: T, count: usize) {
        if count == 0 {
            return;
        }
        if let Some(index) = self.find_live(&element) {
            self.slot_mut(index).count += count;
            self.total += count;
            return;
        }

        let home = self.home_index(&element, self.table.len());
        let index = insertion_index(&self.table, home);
        let mut slot = Slot::new(element, count);
        slot.prev = self.tail;
        // Overwriting a tombstone drops its abandoned element here.
        self.table[index] = Some(slot);
        match self.tail {
            Some(tail) => self.slot_mut(tail).next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.distinct += 1;
        self.total += count;

        // Resize on distinct-slot occupancy, not total occurrences, and
        // before any further operation can observe a full table.
        if self.distinct == self.table.len() {
            self.grow();
        }
    }

    /// True when at least one live occurrence of `element` is stored.
    ///
    /// Probes linearly from the element's home index, skipping tombstones
    /// and mismatched live cells, and stops at the first empty cell or
    /// after a full wrap of the table. Worst case O(capacity).
    pub fn contains(&self, element: &T) -> bool {
        self.find_live(element).is_some()
    }

    /// Number of live occurrences of `element`; zero when absent.
    pub fn count(&self, element: &T) -> usize {
        match self.find_live(element) {
            Some(index) => self.slot(index).count,
            None => 0,
        }
    }

    /// Remove a single occurrence of `element`.
    ///
    /// Equivalent to [`remove_count`](Self::remove_count) with a count of 1.
    pub fn remove(&mut self, element: &T) -> Result<(), MultisetError> {
        self.remove_count(element, 1)
    }

    /// Remove `count` occurrences of `element`.
    ///
    /// Fails with [`MultisetError::MissingElement`] when the element is
    /// absent (even for a count of zero) or holds fewer than `count`
    /// occurrences; the multiset is left unchanged in that case. The
    /// removal is never silently clamped.
    ///
    /// When the multiplicity reaches exactly zero the slot is unlinked from
    /// the iteration order and becomes a tombstone: still opaque to probe
    /// chains, but available as a landing site for later insertions.
    pub fn remove_count(&mut self, element: &T, count: usize) -> Result<(), MultisetError> {
        let Some(index) = self.find_live(element) else {
            return Err(MultisetError::MissingElement {
                requested: count,
                found: 0,
            });
        };
        let found = self.slot(index).count;
        if found < count {
            return Err(MultisetError::MissingElement {
                requested: count,
                found,
            });
        }

        self.slot_mut(index).count -= count;
        self.total -= count;
        if self.slot(index).count == 0 {
            self.unlink(index);
            self.slot_mut(index).deleted = true;
            self.distinct -= 1;
        }
        Ok(())
    }

    fn home_index(&self, element: &T, capacity: usize) -> usize {
        (self.hasher.hash_one(element) % capacity as u64) as usize
    }

    /// Search-existing probe: locate the live slot holding an element equal
    /// to `element`. Tombstones and mismatched live cells are stepped over;
    /// the search fails on the first empty cell or after a full wrap (the
    /// wrap guard matters when live cells and tombstones saturate the
    /// table).
    fn find_live(&self, element: &T) -> Option<usize> {
        let capacity = self.table.len();
        let mut index = self.home_index(element, capacity);
        for _ in 0..capacity {
            match &self.table[index] {
                None => return None,
                Some(slot) if slot.is_live() && slot.element == *element => return Some(index),
                Some(_) => index = (index + 1) % capacity,
            }
        }
        None
    }

    /// Double the table. Live slots are re-probed into the new table in
    /// physical index order; tombstones are dropped, not carried over. The
    /// order list is preserved by identity: only the physical positions
    /// change, so every link is rewritten through a relocation map rather
    /// than being rebuilt in rehash order.
    fn grow(&mut self) {
        let old_capacity = self.table.len();
        let new_capacity = old_capacity * 2;
        trace!(
            old_capacity,
            new_capacity,
            distinct = self.distinct,
            "doubling multiset table"
        );

        let hasher = &self.hasher;
        let mut new_table: Vec<Option<Slot<T>>> = (0..new_capacity).map(|_| None).collect();
        let mut relocated: Vec<Option<usize>> = vec![None; old_capacity];
        for (old_index, cell) in self.table.iter_mut().enumerate() {
            let Some(slot) = cell.take() else { continue };
            if slot.deleted {
                continue;
            }
            let home = (hasher.hash_one(&slot.element) % new_capacity as u64) as usize;
            let new_index = insertion_index(&new_table, home);
            new_table[new_index] = Some(slot);
            relocated[old_index] = Some(new_index);
        }

        let remap = |link: Option<usize>| {
            link.map(|old| relocated[old].expect("order list only links live slots"))
        };
        for cell in new_table.iter_mut().flatten() {
            cell.next = remap(cell.next);
            cell.prev = remap(cell.prev);
        }
        self.head = remap(self.head);
        self.tail = remap(self.tail);
        self.table = new_table;
    }
}

/// Search-insertion-point probe: the first empty **or tombstoned** cell at
/// or after `home`. Distinct from the search-existing probe: tombstones are
/// skip-over targets for lookups but valid landing targets for insertions.
///
/// Terminates because the load invariant guarantees at least one non-live
/// cell between public operations.
fn insertion_index<T>(table: &[Option<Slot<T>>], home: usize) -> usize {
    let capacity = table.len();
    let mut index = home;
    loop {
        match &table[index] {
            Some(slot) if slot.is_live() => index = (index + 1) % capacity,
            _ => return index,
        }
    }
}

impl<T: fmt::Debug, S> fmt::Debug for OrderedMultiset<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter_counts()).finish()
    }
}

impl<'a, T, S> IntoIterator for &'a OrderedMultiset<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, S>;

    fn into_iter(self) -> Iter<'a, T, S> {
        self.iter()
    }
}

impl<T, S> Extend<T> for OrderedMultiset<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use std::fmt;
    use std::hash::{BuildHasher, Hash};
    use std::marker::PhantomData;

    use serde::de::{SeqAccess, Visitor};
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::OrderedMultiset;

    /// Serializes as the insertion-ordered sequence of `(element, count)`
    /// pairs, so a round trip reproduces both contents and iteration order.
    impl<T, S> Serialize for OrderedMultiset<T, S>
    where
        T: Serialize,
    {
        fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
        where
            Ser: Serializer,
        {
            let mut seq = serializer.serialize_seq(Some(self.distinct_count()))?;
            for entry in self.iter_counts() {
                seq.serialize_element(&entry)?;
            }
            seq.end()
        }
    }

    impl<'de, T, S> Deserialize<'de> for OrderedMultiset<T, S>
    where
        T: Deserialize<'de> + Hash + Eq,
        S: BuildHasher + Default,
    {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct PairsVisitor<T, S>(PhantomData<(T, S)>);

            impl<'de, T, S> Visitor<'de> for PairsVisitor<T, S>
            where
                T: Deserialize<'de> + Hash + Eq,
                S: BuildHasher + Default,
            {
                type Value = OrderedMultiset<T, S>;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str("a sequence of (element, count) pairs")
                }

                fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
                where
                    A: SeqAccess<'de>,
                {
                    // Double the hint so replaying the pairs does not
                    // immediately trigger a resize.
                    let capacity = seq.size_hint().unwrap_or(0).max(1) * 2;
                    let mut set = OrderedMultiset::with_hasher(capacity, S::default());
                    while let Some((element, count)) = seq.next_element::<(T, usize)>()? {
                        set.add_count(element, count);
                    }
                    Ok(set)
                }
            }

            deserializer.deserialize_seq(PairsVisitor(PhantomData))
        }
    }
}
