#[cfg(feature = "min-cache")]
use std::cmp::min;

/// One bucket of the heap: a growable run of `(key, value)` elements.
///
/// Elements are appended and removed at the tail; the indexed heap may also
/// remove from the middle, which swaps the tail into the vacated slot so the
/// run stays contiguous. Capacity only ever shrinks through an explicit
/// `shrink_to_fit`, never on pop.
#[derive(Clone)]
pub(crate) struct Bucket<K, V> {
    /// Smallest key currently stored, or `None` when empty.
    #[cfg(feature = "min-cache")]
    min: Option<K>,
    elems: Vec<(K, V)>,
}

impl<K, V> Bucket<K, V> {
    pub(crate) fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    #[cfg(feature = "indexed")]
    pub(crate) fn len(&self) -> usize {
        self.elems.len()
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<(K, V)> {
        self.elems.iter()
    }

    #[cfg(feature = "indexed")]
    pub(crate) fn value_at(&self, slot: usize) -> &V {
        &self.elems[slot].1
    }

    pub(crate) fn clear(&mut self) {
        #[cfg(feature = "min-cache")]
        {
            self.min = None;
        }
        self.elems.clear();
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.elems.shrink_to_fit();
    }
}

impl<K: Ord + Copy, V> Bucket<K, V> {
    pub(crate) fn push(&mut self, key: K, value: V) {
        #[cfg(feature = "min-cache")]
        {
            self.min = Some(match self.min {
                Some(m) => min(m, key),
                None => key,
            });
        }
        self.elems.push((key, value));
    }

    /// Removes and returns the tail element. The cached minimum is left in
    /// place unless the bucket drains: a tail pop either comes from bucket 0
    /// (homogeneous keys) or from a redistribution loop that empties the
    /// bucket entirely.
    pub(crate) fn pop(&mut self) -> Option<(K, V)> {
        let popped = self.elems.pop();

        #[cfg(feature = "min-cache")]
        {
            if self.elems.is_empty() {
                self.min = None;
            }
        }

        popped
    }

    /// The smallest key in the bucket, or `None` when empty. O(1) with the
    /// `min-cache` feature, otherwise a scan.
    #[cfg(feature = "min-cache")]
    pub(crate) fn min(&self) -> Option<K> {
        self.min
    }

    #[cfg(not(feature = "min-cache"))]
    pub(crate) fn min(&self) -> Option<K> {
        self.elems.iter().map(|&(key, _)| key).min()
    }

    /// Rewrites the key of the element in `slot` without moving it.
    #[cfg(feature = "indexed")]
    pub(crate) fn set_key(&mut self, slot: usize, key: K) {
        self.elems[slot].0 = key;

        #[cfg(feature = "min-cache")]
        {
            self.min = Some(match self.min {
                Some(m) => min(m, key),
                None => key,
            });
        }
    }

    /// Removes the element in `slot`, moving the tail into its place. The
    /// caller re-anchors whatever element now occupies `slot` and then calls
    /// `fix_min_after_remove` with the removed key.
    #[cfg(feature = "indexed")]
    pub(crate) fn swap_remove(&mut self, slot: usize) -> (K, V) {
        let removed = self.elems.swap_remove(slot);

        #[cfg(feature = "min-cache")]
        {
            if self.elems.is_empty() {
                self.min = None;
            }
        }

        removed
    }

    /// Repairs the cached minimum after `removed` left the bucket. Nothing
    /// to do unless the removed key was the cached minimum; even then,
    /// another element carrying the same key keeps the cache valid and ends
    /// the scan early.
    #[cfg(all(feature = "indexed", feature = "min-cache"))]
    pub(crate) fn fix_min_after_remove(&mut self, removed: K) {
        if self.min != Some(removed) {
            return;
        }

        let mut fresh = None;

        for &(key, _) in &self.elems {
            if key == removed {
                return;
            }

            fresh = Some(match fresh {
                Some(m) => min(m, key),
                None => key,
            });
        }

        self.min = fresh;
    }

    #[cfg(all(feature = "indexed", not(feature = "min-cache")))]
    pub(crate) fn fix_min_after_remove(&mut self, _removed: K) {}
}

impl<K, V> Default for Bucket<K, V> {
    fn default() -> Bucket<K, V> {
        Bucket {
            #[cfg(feature = "min-cache")]
            min: None,
            elems: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Bucket;

    fn scan_min(bucket: &Bucket<u32, ()>) -> Option<u32> {
        bucket.iter().map(|&(key, ())| key).min()
    }

    #[test]
    fn min_tracks_pushes() {
        let mut bucket = Bucket::default();

        for key in [9u32, 4, 7, 4, 11] {
            bucket.push(key, ());
            assert_eq!(bucket.min(), scan_min(&bucket));
        }
    }

    #[test]
    fn min_clears_on_drain() {
        let mut bucket = Bucket::default();
        bucket.push(3u32, ());
        bucket.push(5, ());

        while bucket.pop().is_some() {}

        assert!(bucket.is_empty());
        assert_eq!(bucket.min(), None);
    }

    #[cfg(feature = "indexed")]
    #[test]
    fn swap_remove_keeps_run_contiguous() {
        let mut bucket = Bucket::default();
        bucket.push(8u32, 'a');
        bucket.push(3, 'b');
        bucket.push(5, 'c');

        let removed = bucket.swap_remove(0);
        assert_eq!(removed, (8, 'a'));
        assert_eq!(*bucket.value_at(0), 'c');
        assert_eq!(bucket.len(), 2);
    }

    #[cfg(feature = "indexed")]
    #[test]
    fn min_repair_after_unique_minimum_leaves() {
        let mut bucket = Bucket::default();
        bucket.push(3u32, ());
        bucket.push(9, ());
        bucket.push(6, ());

        let (key, ()) = bucket.swap_remove(0);
        bucket.fix_min_after_remove(key);

        assert_eq!(bucket.min(), Some(6));
    }

    #[cfg(feature = "indexed")]
    #[test]
    fn min_repair_keeps_duplicate_witness() {
        let mut bucket = Bucket::default();
        bucket.push(3u32, ());
        bucket.push(3, ());
        bucket.push(9, ());

        let (key, ()) = bucket.swap_remove(0);
        bucket.fix_min_after_remove(key);

        assert_eq!(bucket.min(), Some(3));
    }
}
