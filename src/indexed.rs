use std::{fmt, mem::swap};

use crate::bucket::Bucket;
use crate::heap::Iter;
use crate::radix::Radix;

/// Position-table entry of a value that is not currently stored.
const ABSENT: usize = usize::MAX;

/// A monotone radix min-heap over dense integer values, with constant-time
/// priority decrease.
///
/// Values are integers in `[0, capacity)` and must be unique while
/// simultaneously present: the kind of identifier a shortest-path search
/// has anyway, where the value is a node index and the key its tentative
/// distance. Two flat tables map every value to its slot inside its bucket
/// and to its currently stored key, which is what makes [`decrease_key`]
/// and [`contains`] O(1) at the cost of O(capacity) memory. If you do not
/// need either, use [`RadixHeapMap`], which accepts arbitrary value types.
///
/// Ordering and complexity are the same as [`RadixHeapMap`]: keys pushed
/// must be greater than or equal to the top key (initially zero), pushes
/// are O(1), and pops amortize to O(log m).
///
/// # Example
///
/// ```
/// let mut heap = radix_queue::IndexedRadixHeap::new(8);
/// heap.push(30u32, 4);
/// heap.push(10, 1);
/// heap.push(20, 2);
///
/// // Node 4 turned out to be closer than first thought.
/// heap.decrease_key(4, 15);
///
/// assert_eq!(heap.pop(), Some((10, 1)));
/// assert_eq!(heap.pop(), Some((15, 4)));
/// assert!(heap.contains(2));
/// assert_eq!(heap.priority(2), Some(20));
/// ```
///
/// [`decrease_key`]: IndexedRadixHeap::decrease_key
/// [`contains`]: IndexedRadixHeap::contains
/// [`RadixHeapMap`]: crate::RadixHeapMap
#[derive(Clone)]
pub struct IndexedRadixHeap<K> {
    len: usize,

    /// The key of the most recently popped element. Never decreases.
    top: K,

    buckets: Vec<Bucket<K, usize>>,

    /// Slot of each value inside its bucket, or `ABSENT`. Which bucket that
    /// is follows from `priorities`: the bucket addressed by the radix
    /// distance between the stored key and `top`.
    positions: Vec<usize>,

    /// Currently stored key of each value; only meaningful while the
    /// matching `positions` entry is not `ABSENT`.
    priorities: Vec<K>,
}

impl<K: Radix + Ord + Copy> IndexedRadixHeap<K> {
    /// Creates an empty heap able to hold values in `[0, capacity)`, with
    /// the top key at zero.
    pub fn new(capacity: usize) -> IndexedRadixHeap<K> {
        IndexedRadixHeap {
            len: 0,
            top: K::ZERO,
            buckets: (0..=K::RADIX_BITS).map(|_| Bucket::default()).collect(),
            positions: vec![ABSENT; capacity],
            priorities: vec![K::ZERO; capacity],
        }
    }

    /// The declared value capacity.
    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    /// Pushes a value with the given key.
    ///
    /// Pushing a value that is already in the heap is a logic error: it
    /// corrupts the position tracking. This is asserted in debug builds.
    ///
    /// Panics
    /// ------
    /// Panics if `value` is not below the declared capacity or the key is
    /// less than the current top key.
    #[inline]
    pub fn push(&mut self, key: K, value: usize) {
        assert!(
            value < self.capacity(),
            "Value must be below the declared capacity"
        );
        assert!(
            key >= self.top,
            "Key must be greater or equal to the current top key"
        );
        debug_assert!(!self.contains(value), "Value is already in the heap");

        let target = key.radix_distance(&self.top) as usize;
        self.buckets[target].push(key, value);
        self.positions[value] = self.buckets[target].len() - 1;
        self.priorities[value] = key;
        self.len += 1;
    }

    /// Removes the smallest element from the heap and returns it, or `None`
    /// if empty.
    ///
    /// This sets the top key to the extracted key.
    #[inline]
    pub fn pop(&mut self) -> Option<(K, usize)> {
        if self.buckets[0].is_empty() {
            self.pull_down();
        }

        let popped = self.buckets[0].pop();

        if let Some((_, value)) = popped {
            self.positions[value] = ABSENT;
            self.len -= 1;
        }

        popped
    }

    /// Advances the top key to the smallest stored key and redistributes the
    /// bucket holding it, re-anchoring every moved value in the position
    /// table.
    fn pull_down(&mut self) {
        let index = match self.buckets.iter().position(|bucket| !bucket.is_empty()) {
            None | Some(0) => return,
            Some(index) => index,
        };

        let top = self.buckets[index]
            .min()
            .expect("Expected non-empty bucket");
        self.top = top;

        let mut repush = Bucket::default();
        swap(&mut self.buckets[index], &mut repush);

        while let Some((key, value)) = repush.pop() {
            let target = key.radix_distance(&top) as usize;
            self.buckets[target].push(key, value);
            self.positions[value] = self.buckets[target].len() - 1;
        }

        swap(&mut self.buckets[index], &mut repush);

        debug_assert!(repush.is_empty());
    }

    /// Lowers the key of a value that is currently in the heap.
    ///
    /// If the new key addresses the same bucket as the old one, the key is
    /// rewritten in place and no other element moves. Otherwise the element
    /// is removed (the bucket's tail is swapped into the vacated slot) and
    /// pushed again under the new key.
    ///
    /// # Example
    ///
    /// ```
    /// let mut heap = radix_queue::IndexedRadixHeap::new(4);
    /// heap.push(100u32, 0);
    /// heap.push(70, 1);
    ///
    /// heap.decrease_key(0, 50);
    /// assert_eq!(heap.pop(), Some((50, 0)));
    /// ```
    ///
    /// Panics
    /// ------
    /// Panics if the value is not in the heap, if the new key exceeds the
    /// value's current key, or if the new key is less than the current top
    /// key.
    pub fn decrease_key(&mut self, value: usize, new_key: K) {
        let slot = self.positions[value];
        assert!(slot != ABSENT, "Value is not in the heap");

        let old_key = self.priorities[value];
        assert!(
            new_key <= old_key,
            "New key must not exceed the value's current key"
        );
        assert!(
            new_key >= self.top,
            "New key must be greater or equal to the current top key"
        );

        let source = old_key.radix_distance(&self.top) as usize;
        let target = new_key.radix_distance(&self.top) as usize;

        if source == target {
            // The element stays put; rewrite its key where it sits.
            self.buckets[source].set_key(slot, new_key);
            self.priorities[value] = new_key;
            return;
        }

        let (removed_key, removed_value) = self.buckets[source].swap_remove(slot);
        debug_assert_eq!(removed_value, value);

        // The former tail (if any) now occupies the vacated slot.
        if slot < self.buckets[source].len() {
            let displaced = *self.buckets[source].value_at(slot);
            self.positions[displaced] = slot;
        }

        self.buckets[source].fix_min_after_remove(removed_key);

        self.positions[value] = ABSENT;
        self.len -= 1;
        self.push(new_key, value);
    }

    /// Returns true if the value is currently in the heap.
    ///
    /// Panics
    /// ------
    /// Panics if `value` is not below the declared capacity.
    pub fn contains(&self, value: usize) -> bool {
        self.positions[value] != ABSENT
    }

    /// The currently stored key of the value, or `None` if it is not in the
    /// heap.
    ///
    /// Panics
    /// ------
    /// Panics if `value` is not below the declared capacity.
    pub fn priority(&self, value: usize) -> Option<K> {
        if self.positions[value] == ABSENT {
            None
        } else {
            Some(self.priorities[value])
        }
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if there are no elements in the heap.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The current top key. All keys pushed onto the heap must be greater
    /// than or equal to this value.
    pub fn top(&self) -> K {
        self.top
    }

    /// Drops all items and resets the top key to zero, clearing only the
    /// table entries of values that were actually present.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            while let Some((_, value)) = bucket.pop() {
                self.positions[value] = ABSENT;
            }
        }

        self.len = 0;
        self.top = K::ZERO;
    }

    /// Returns an iterator over all key-value pairs in arbitrary order.
    pub fn iter(&self) -> Iter<K, usize> {
        Iter::new(&self.buckets, self.len)
    }

}

#[cfg(test)]
impl<K: Radix + Ord + Copy + fmt::Debug> IndexedRadixHeap<K> {
    /// Checks every documented invariant of the structure: bucket
    /// addressing, table consistency, cached minima, and the element count.
    fn assert_invariants(&self) {
        let mut total = 0;

        for (index, bucket) in self.buckets.iter().enumerate() {
            let mut scanned_min: Option<K> = None;

            for (slot, &(key, value)) in bucket.iter().enumerate() {
                assert_eq!(key.radix_distance(&self.top) as usize, index);
                assert!(key >= self.top);
                assert_eq!(self.positions[value], slot);
                assert_eq!(self.priorities[value], key);

                scanned_min = Some(match scanned_min {
                    Some(m) => m.min(key),
                    None => key,
                });
                total += 1;
            }

            assert_eq!(bucket.min(), scanned_min);
        }

        assert_eq!(total, self.len);

        let present = self.positions.iter().filter(|&&p| p != ABSENT).count();
        assert_eq!(present, self.len);
    }
}

impl<K: Radix + Ord + Copy + fmt::Debug> fmt::Debug for IndexedRadixHeap<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
