use std::cmp::Ordering;

use crate::constants::Weight;
use crate::graph::NodeIndex;

/// Open set of the uniform cost search.
///
/// Addressable min queue over vertices keyed by their tentative distance.
/// Every vertex is contained at most once, lowering its key replaces the
/// existing entry instead of pushing a duplicate.
pub struct OpenSet {
    queue: ::priority_queue::PriorityQueue<NodeIndex, Distance>,
}

impl OpenSet {
    pub fn with_capacity(capacity: usize) -> Self {
        OpenSet {
            queue: ::priority_queue::PriorityQueue::with_capacity(capacity),
        }
    }

    /// Inserts `node` or, if it is already queued, replaces its key.
    pub fn push(&mut self, node: NodeIndex, distance: Weight) {
        self.queue.push(node, Distance(distance));
    }

    /// Lowers the key of an already queued vertex. Returns `false` if the
    /// vertex is not (or no longer) in the open set.
    pub fn decrease(&mut self, node: NodeIndex, distance: Weight) -> bool {
        self.queue
            .change_priority(&node, Distance(distance))
            .is_some()
    }

    /// Removes the vertex with the smallest distance.
    pub fn pop(&mut self) -> Option<(NodeIndex, Weight)> {
        self.queue
            .pop()
            .map(|(node, Distance(distance))| (node, distance))
    }

    #[cfg(test)]
    fn contains(&self, node: NodeIndex) -> bool {
        self.queue.get_priority(&node).is_some()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

/// Queue key. The ordering is reversed so the smallest distance has the
/// highest priority.
#[derive(Copy, Clone, Debug)]
struct Distance(Weight);

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Distance {}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.partial_cmp(&self.0).unwrap_or(Ordering::Equal)
    }
}
