use rustc_hash::FxHashSet;

use crate::{
    constants::{Weight, UNREACHABLE},
    graph::{Arc, Graph, NodeIndex},
};

pub mod path;
pub mod uniform_cost;

pub use uniform_cost::search;

/// Per search state of every vertex: tentative distance, the arc it was last
/// reached by and whether it has been expanded already.
///
/// Kept outside of the [`Graph`] so a graph can be searched from several
/// places at the same time.
#[derive(Debug, Clone, Default)]
pub struct SearchSpace {
    distances: Vec<Weight>,
    predecessors: Vec<Option<(NodeIndex, Arc)>>,
    closed: FxHashSet<NodeIndex>,
    /// Every distance written since the last reset, in order
    #[cfg(test)]
    updates: Vec<(NodeIndex, Weight)>,
}

impl SearchSpace {
    pub fn new(g: &Graph) -> Self {
        let mut space = SearchSpace::default();
        space.reset(g);
        space
    }

    /// Forgets everything of a previous search: all distances back to
    /// [`UNREACHABLE`], no predecessors, nothing closed.
    pub fn reset(&mut self, g: &Graph) {
        let n = g.num_vertices();
        self.distances.clear();
        self.distances.resize(n, UNREACHABLE);
        self.predecessors.clear();
        self.predecessors.resize(n, None);
        self.closed.clear();
        #[cfg(test)]
        self.updates.clear();
    }

    #[inline]
    pub fn distance(&self, node: NodeIndex) -> Weight {
        self.distances[node.index()]
    }

    pub fn set_start(&mut self, node: NodeIndex) {
        self.distances[node.index()] = 0.0;
        self.predecessors[node.index()] = None;
    }

    /// Relaxes `arc` leaving `source`. The target's distance only changes if
    /// the path over `source` is strictly shorter.
    ///
    /// Returns the new distance of the target if it was lowered.
    pub fn relax(&mut self, source: NodeIndex, arc: &Arc) -> Option<Weight> {
        let candidate = self.distance(source) + arc.weight;
        if candidate < self.distance(arc.target) {
            self.distances[arc.target.index()] = candidate;
            self.predecessors[arc.target.index()] = Some((source, *arc));
            #[cfg(test)]
            self.updates.push((arc.target, candidate));
            Some(candidate)
        } else {
            None
        }
    }

    pub fn predecessor(&self, node: NodeIndex) -> Option<(NodeIndex, Arc)> {
        self.predecessors[node.index()]
    }

    /// Marks `node` as expanded. Returns `false` if it was closed before.
    pub fn close(&mut self, node: NodeIndex) -> bool {
        self.closed.insert(node)
    }

    #[cfg(test)]
    pub(crate) fn is_closed(&self, node: NodeIndex) -> bool {
        self.closed.contains(&node)
    }

    #[cfg(test)]
    pub(crate) fn updates(&self) -> &[(NodeIndex, Weight)] {
        &self.updates
    }

    pub fn num_closed(&self) -> usize {
        self.closed.len()
    }
}

#[cfg(test)]
pub(crate) fn assert_path(
    expected_path: Vec<usize>,
    expected_weight: Weight,
    path: Result<path::Path, crate::error::SearchError>,
) {
    let path = path.expect("Search failed");
    assert_eq!(
        expected_path
            .into_iter()
            .map(NodeIndex::new)
            .collect::<Vec<_>>(),
        path.nodes
    );
    assert_eq!(expected_weight, path.weight);
}

#[cfg(test)]
pub(crate) fn assert_no_path(path: Result<path::Path, crate::error::SearchError>) {
    let path = path.expect("Search failed");
    assert!(!path.is_reachable());
    assert!(path.nodes.is_empty());
    assert_eq!(UNREACHABLE, path.weight);
}
