//! Implementation of the uniform cost search.
use log::{debug, info, trace};

use crate::{
    constants::{Weight, UNREACHABLE},
    error::SearchError,
    graph::{Graph, NodeIndex},
    priority_queue::OpenSet,
    search::{path::Path, SearchSpace},
    statistics::SearchStats,
};

pub struct UniformCostSearch<'a> {
    pub stats: SearchStats,
    space: SearchSpace,
    open: OpenSet,
    g: &'a Graph,
}

impl<'a> UniformCostSearch<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        UniformCostSearch {
            g: graph,
            stats: SearchStats::default(),
            space: SearchSpace::new(graph),
            open: OpenSet::with_capacity(graph.num_vertices()),
        }
    }

    /// Searches the cheapest route from `start` to `goal`.
    ///
    /// An unreachable goal is not an error, the returned [`Path`] then has
    /// weight [`crate::constants::UNREACHABLE`] and no vertices. Fails only if
    /// `start` or `goal` are not part of the graph.
    pub fn search(&mut self, start: NodeIndex, goal: NodeIndex) -> Result<Path, SearchError> {
        for node in [start, goal] {
            if !self.g.contains(node) {
                return Err(SearchError::InvalidVertex(node));
            }
        }

        info!("BEGIN UCS from {:?} to {:?}", start, goal);
        self.init(start);

        let g = self.g;
        while let Some((node, distance)) = self.open.pop() {
            // Only unreached vertices are left, the goal is not reachable
            if distance == UNREACHABLE {
                break;
            }
            self.space.close(node);

            if node == goal {
                self.stats.nodes_expanded = self.space.num_closed();
                return Ok(self.finish(goal, distance));
            }

            for arc in g.arcs_outgoing(node) {
                if let Some(new_distance) = self.space.relax(node, arc) {
                    trace!(
                        "Relaxed {:?} -> {:?}: {}",
                        node,
                        arc.target,
                        new_distance
                    );
                    self.open.decrease(arc.target, new_distance);
                    self.stats.nodes_generated += 1;
                }
            }
        }

        let weight = self.space.distance(goal);
        Ok(self.finish(goal, weight))
    }

    fn init(&mut self, start: NodeIndex) {
        self.stats.init();
        self.space.reset(self.g);
        self.space.set_start(start);

        // Every vertex is queued exactly once, the start already keyed with 0
        self.open.clear();
        for node in self.g.node_indices() {
            self.open.push(node, self.space.distance(node));
        }
        self.stats.nodes_generated = 1;
    }

    fn finish(&mut self, goal: NodeIndex, weight: Weight) -> Path {
        self.stats.finish();

        let path = Path::build(
            self.g,
            &self.space,
            goal,
            weight,
            self.stats.nodes_generated,
            self.stats.nodes_expanded,
            self.stats.elapsed(),
        );

        if path.is_reachable() {
            debug!("Path found: {:?}", path.nodes);
            info!(
                "Path found: {:?}/{} nodes expanded",
                self.stats.elapsed(),
                self.stats.nodes_expanded
            );
        } else {
            info!(
                "No path found: {:?}/{} nodes expanded",
                self.stats.elapsed(),
                self.stats.nodes_expanded
            );
        }

        path
    }
}

/// Runs a single uniform cost search on `g`. See [`UniformCostSearch::search`].
pub fn search(g: &Graph, start: NodeIndex, goal: NodeIndex) -> Result<Path, SearchError> {
    UniformCostSearch::new(g).search(start, goal)
}
