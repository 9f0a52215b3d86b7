//! Mergeable priority queue of candidate arcs.
//!
//! [`ArcQueue`] is an array-backed binary min-heap ordered by arc weight
//! alone; equal weights carry no secondary key, so ties surface in
//! unspecified order. Merging reinserts the smaller heap into the larger
//! one, which is all the merge loop needs.

use std::cmp::Ordering;

use thiserror::Error;

use crate::graph::VertexId;

/// Weighted arc between two vertices, queued as a merge candidate.
///
/// The vocabulary follows the original program: "arc" names a candidate
/// edge held in a queue even though the graph is undirected.
///
/// # Examples
/// ```
/// use bosk_core::{CandidateArc, VertexId};
///
/// let arc = CandidateArc::new(VertexId::new(0), VertexId::new(1), 2.0);
/// assert_eq!(arc.target().index(), 1);
/// assert_eq!(arc.weight(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateArc {
    source: VertexId,
    target: VertexId,
    weight: f32,
}

impl CandidateArc {
    /// Creates an arc from `source` to `target` with the given weight.
    #[must_use]
    pub const fn new(source: VertexId, target: VertexId, weight: f32) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Vertex the arc leaves from.
    #[rustfmt::skip]
    #[must_use] pub const fn source(&self) -> VertexId { self.source }

    /// Vertex the arc points at.
    #[rustfmt::skip]
    #[must_use] pub const fn target(&self) -> VertexId { self.target }

    /// Arc weight.
    #[rustfmt::skip]
    #[must_use] pub const fn weight(&self) -> f32 { self.weight }

    fn weighs_less_than(&self, other: &Self) -> bool {
        self.weight.total_cmp(&other.weight) == Ordering::Less
    }
}

/// Error returned by [`ArcQueue::delete_min`] when the queue holds no arcs.
///
/// Inside the merge loop this is the disconnection signal; anywhere else it
/// marks caller misuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("delete_min called on an empty arc queue")]
pub struct EmptyQueue;

/// Array-backed binary min-heap of [`CandidateArc`] values.
///
/// # Examples
/// ```
/// use bosk_core::{ArcQueue, CandidateArc, VertexId};
///
/// let mut queue = ArcQueue::new();
/// queue.insert(CandidateArc::new(VertexId::new(0), VertexId::new(1), 5.0));
/// queue.insert(CandidateArc::new(VertexId::new(0), VertexId::new(2), 1.0));
/// let cheapest = queue.delete_min().expect("queue holds two arcs");
/// assert_eq!(cheapest.weight(), 1.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArcQueue {
    heap: Vec<CandidateArc>,
}

impl ArcQueue {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self { heap: Vec::new() }
    }

    /// Number of queued arcs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue holds no arcs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Cheapest arc without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&CandidateArc> {
        self.heap.first()
    }

    /// Adds an arc, restoring the heap order by bubbling it up.
    pub fn insert(&mut self, arc: CandidateArc) {
        self.heap.push(arc);
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes and returns the cheapest arc.
    ///
    /// # Errors
    /// Returns [`EmptyQueue`] when the queue holds no arcs.
    pub fn delete_min(&mut self) -> Result<CandidateArc, EmptyQueue> {
        if self.heap.is_empty() {
            return Err(EmptyQueue);
        }
        let min = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    /// Absorbs every arc of `other` into this queue.
    ///
    /// The smaller side is reinserted into the larger side, so merging
    /// costs O(k log n) for k arcs moved.
    pub fn merge(&mut self, mut other: Self) {
        if other.heap.len() > self.heap.len() {
            std::mem::swap(&mut self.heap, &mut other.heap);
        }
        self.heap.reserve(other.heap.len());
        for arc in other.heap {
            self.insert(arc);
        }
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if self.heap[child].weighs_less_than(&self.heap[parent]) {
                self.heap.swap(child, parent);
                child = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut parent: usize) {
        loop {
            let left = 2 * parent + 1;
            if left >= self.heap.len() {
                break;
            }
            let right = left + 1;
            let mut smallest = left;
            if right < self.heap.len() && self.heap[right].weighs_less_than(&self.heap[left]) {
                smallest = right;
            }
            if self.heap[smallest].weighs_less_than(&self.heap[parent]) {
                self.heap.swap(parent, smallest);
                parent = smallest;
            } else {
                break;
            }
        }
    }
}
