use std::{fmt, time::Duration};

use serde::Serialize;

use crate::{
    constants::{VertexId, Weight, UNREACHABLE},
    graph::{Arc, Graph, NodeIndex},
    search::SearchSpace,
};

/// Result of a search: the route from start to goal, its cost and the
/// statistics of the search that found it.
///
/// Owns a copy of everything it references, later changes to the graph do not
/// affect it.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Path {
    /// Vertices from start to goal. Empty if the goal is unreachable.
    pub nodes: Vec<NodeIndex>,
    /// External ids of `nodes`
    pub ids: Vec<VertexId>,
    /// `arcs[i]` leads from `nodes[i]` to `nodes[i + 1]`
    pub arcs: Vec<Arc>,
    /// Total cost, [`UNREACHABLE`] if there is no route
    pub weight: Weight,
    pub nodes_generated: usize,
    pub nodes_expanded: usize,
    pub duration: Duration,
}

impl Path {
    /// Materializes the route to `goal` by following the predecessor chain
    /// recorded in `space`.
    pub fn build(
        g: &Graph,
        space: &SearchSpace,
        goal: NodeIndex,
        weight: Weight,
        nodes_generated: usize,
        nodes_expanded: usize,
        duration: Duration,
    ) -> Self {
        let mut nodes = Vec::new();
        let mut arcs = Vec::new();

        // The start is the only reached vertex without predecessor
        if space.distance(goal) != UNREACHABLE {
            let mut current = goal;
            nodes.push(current);
            while let Some((previous, arc)) = space.predecessor(current) {
                nodes.push(previous);
                arcs.push(arc);
                current = previous;
            }
            nodes.reverse();
            arcs.reverse();
        }

        // Predecessors are always vertices of `g`
        let ids = nodes.iter().map(|node| g[*node].id).collect();

        Path {
            nodes,
            ids,
            arcs,
            weight,
            nodes_generated,
            nodes_expanded,
            duration,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.weight != UNREACHABLE
    }

    /// Number of vertices on the route
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Labels of the route's vertices as found in `g`
    ///
    /// **Panics** if `g` is not the graph the path was searched on
    pub fn labels<'a>(&self, g: &'a Graph) -> Vec<&'a str> {
        self.nodes
            .iter()
            .map(|node| g[*node].label.as_str())
            .collect()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_reachable() {
            return write!(f, "No path found");
        }
        let ids: Vec<String> = self.ids.iter().map(|id| id.to_string()).collect();
        write!(f, "{} ({})", ids.join(" -> "), self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{graph::node_index, util::test_graphs::generate_scenario_graph};

    #[test]
    fn build_follows_predecessors() {
        let g = generate_scenario_graph();
        let mut space = SearchSpace::new(&g);
        let (a, b, c, d) = (node_index(0), node_index(1), node_index(2), node_index(3));
        space.set_start(a);
        space.relax(a, &Arc::new(c, 1.0));
        space.relax(c, &Arc::new(b, 1.0));
        space.relax(b, &Arc::new(d, 1.0));

        let path = Path::build(&g, &space, d, 3.0, 4, 4, Duration::from_millis(1));

        assert_eq!(path.nodes, vec![a, c, b, d]);
        assert_eq!(path.ids, vec![0, 2, 1, 3]);
        assert_eq!(path.ids.len(), path.nodes.len());
        assert_eq!(path.arcs.len(), 3);
        assert_eq!(path.arcs[0].target, c);
        assert_eq!(path.labels(&g), vec!["A", "C", "B", "D"]);
        assert_eq!(path.to_string(), "0 -> 2 -> 1 -> 3 (3)");
        assert!(path.is_reachable());
    }

    #[test]
    fn build_unreachable_is_empty() {
        let g = generate_scenario_graph();
        let mut space = SearchSpace::new(&g);
        space.set_start(node_index(3));

        let path = Path::build(
            &g,
            &space,
            node_index(0),
            UNREACHABLE,
            1,
            4,
            Duration::ZERO,
        );

        assert!(path.is_empty());
        assert!(!path.is_reachable());
        assert_eq!(path.to_string(), "No path found");
    }

    #[test]
    fn snapshot_is_independent_of_graph() {
        let mut g = generate_scenario_graph();
        let mut space = SearchSpace::new(&g);
        let (a, b) = (node_index(0), node_index(1));
        space.set_start(a);
        space.relax(a, &Arc::new(b, 4.0));
        let path = Path::build(&g, &space, b, 4.0, 2, 2, Duration::ZERO);

        g.add_edge(crate::edge!(a => b, 0.5));

        assert_eq!(path.arcs[0].weight, 4.0);
        assert_eq!(path.weight, 4.0);
    }
}
