#![deny(missing_docs)]

//! Monotone integer priority queues implemented with radix heaps.
//!
//! A monotone priority queue is a variant of priority queues (itself a
//! generalization of heaps) that requires the extracted elements to follow
//! a monotonic sequence. This means that you cannot insert an element into
//! a radix heap that is smaller than the last extracted element.
//!
//! The key of the last extracted element is called the "top" key of the
//! radix heap. Thus any key pushed onto the heap must be larger than or
//! equal to the top key. A fresh heap has a top key of zero, so every key
//! of an unsigned integer type is admissible until the first pop.
//!
//! In return for this restriction, the radix heap does O(1) inserts.
//! Popping an element is amortized O(log m) where m is the difference
//! between a popped key and the top key at the time the element was
//! inserted. Note that this does not depend on the number of elements in
//! the radix heap. This means that for workloads where this difference is
//! bounded by a constant, the radix heap has O(1) pops. It is the queue
//! that gives Dijkstra's algorithm its O(m + n log C) form on integer
//! edge weights.
//!
//! Two heaps are provided:
//!
//! - [`RadixHeapMap`]: keys of any unsigned integer type, values of any
//!   type.
//! - [`IndexedRadixHeap`]: values are dense integers below a declared
//!   capacity, which buys the O(1) [`decrease_key`] and [`contains`] that
//!   a shortest-path search needs.
//!
//! # Example
//!
//! ```
//! let mut heap = radix_queue::RadixHeapMap::new();
//! heap.push(7u32, 'a');
//! heap.push(2, 'b');
//! heap.push(9, 'c');
//!
//! assert!(heap.top() == 0);
//! assert!(heap.pop() == Some((2, 'b')));
//! assert!(heap.top() == 2);
//! assert!(heap.pop() == Some((7, 'a')));
//! assert!(heap.top() == 7);
//! assert!(heap.pop() == Some((9, 'c')));
//! assert!(heap.pop() == None);
//! ```
//!
//! # Crate features
//!
//! All features are enabled by default; opt out with
//! `default-features = false`.
//!
//! - `indexed`: compiles [`IndexedRadixHeap`] and its O(capacity) lookup
//!   tables.
//! - `min-cache`: caches the smallest key of every bucket, so a pop that
//!   has to advance the top key finds it in O(1) instead of scanning the
//!   bucket. Worth turning off when decreases dominate the workload, since
//!   a decrease that moves a bucket's minimum must repair the cache.
//! - `hardware-bitscan`: computes bucket indices with the CPU leading-zero
//!   count; when disabled a portable de Bruijn bit scan is used instead.
//!
//! [`decrease_key`]: IndexedRadixHeap::decrease_key
//! [`contains`]: IndexedRadixHeap::contains

mod bits;
mod bucket;
mod heap;
#[cfg(feature = "indexed")]
mod indexed;
mod radix;

pub use crate::heap::{Iter, RadixHeapMap};
#[cfg(feature = "indexed")]
pub use crate::indexed::IndexedRadixHeap;
pub use crate::radix::Radix;
