use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use crate::graph::Graph;

#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    /// Start vertex plus every successful relaxation
    pub nodes_generated: usize,
    /// Distinct vertices removed from the open set
    pub nodes_expanded: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_generated = 0;
        self.nodes_expanded = 0;
        self.duration = None;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }

    /// Elapsed time of the last finished search, zero if none finished yet
    pub fn elapsed(&self) -> Duration {
        self.duration.unwrap_or_default()
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} nodes generated, {} nodes expanded in {:?}",
            self.nodes_generated,
            self.nodes_expanded,
            self.elapsed()
        )
    }
}

pub fn average_out_degree(g: &Graph) -> f64 {
    if g.is_empty() {
        return 0.0;
    }
    g.num_arcs() as f64 / g.num_vertices() as f64
}

pub fn average_in_degree(g: &Graph) -> f64 {
    if g.is_empty() {
        return 0.0;
    }
    let mut in_degrees = vec![0usize; g.num_vertices()];
    for node in g.node_indices() {
        for arc in g.arcs_outgoing(node) {
            in_degrees[arc.target.index()] += 1;
        }
    }
    in_degrees.iter().sum::<usize>() as f64 / g.num_vertices() as f64
}

/// Largest number of outgoing arcs of any vertex
pub fn max_out_degree(g: &Graph) -> usize {
    g.vertices().map(|v| v.arcs.len()).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::{
        search::uniform_cost::UniformCostSearch,
        statistics::{average_in_degree, average_out_degree, max_out_degree},
        util::test_graphs::generate_scenario_graph,
    };

    #[test]
    fn stats_work() {
        let g = generate_scenario_graph();

        let mut ucs = UniformCostSearch::new(&g);
        ucs.search(0.into(), 3.into()).unwrap();

        assert!(ucs.stats.duration.is_some());
        assert_eq!(ucs.stats.nodes_expanded, 4);
        assert!(ucs.stats.nodes_generated >= ucs.stats.nodes_expanded);
    }

    #[test]
    fn degrees() {
        let g = generate_scenario_graph();

        assert_abs_diff_eq!(average_out_degree(&g), 5.0 / 4.0);
        assert_abs_diff_eq!(average_in_degree(&g), 5.0 / 4.0);
        assert_eq!(max_out_degree(&g), 2);
    }
}
