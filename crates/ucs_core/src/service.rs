//! Route lookups by external vertex id or label.
use log::debug;

use crate::{
    constants::VertexId,
    error::SearchError,
    graph::{Graph, NodeIndex},
    search::{path::Path, uniform_cost::UniformCostSearch},
};

/// Owns a graph and answers route requests on it.
///
/// Every request runs with its own search state, so `&RouteService` can be
/// shared between threads.
pub struct RouteService {
    graph: Graph,
}

impl RouteService {
    pub fn new(graph: Graph) -> Self {
        RouteService { graph }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn route(&self, from: VertexId, to: VertexId) -> Result<Path, SearchError> {
        let start = self.resolve_id(from)?;
        let goal = self.resolve_id(to)?;
        debug!("Route request {} -> {}", from, to);
        UniformCostSearch::new(&self.graph).search(start, goal)
    }

    pub fn route_by_label(&self, from: &str, to: &str) -> Result<Path, SearchError> {
        let start = self.resolve_label(from)?;
        let goal = self.resolve_label(to)?;
        debug!("Route request {:?} -> {:?}", from, to);
        UniformCostSearch::new(&self.graph).search(start, goal)
    }

    fn resolve_id(&self, id: VertexId) -> Result<NodeIndex, SearchError> {
        self.graph
            .node_index_of(id)
            .ok_or(SearchError::UnknownVertexId(id))
    }

    fn resolve_label(&self, label: &str) -> Result<NodeIndex, SearchError> {
        self.graph
            .node_index_by_label(label)
            .ok_or_else(|| SearchError::UnknownLabel(label.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path as FsPath;

    use super::*;
    use crate::util::test_graphs::generate_city_graph;

    #[test]
    fn route_by_external_ids() {
        let g = Graph::from_csv(
            &FsPath::new(env!("CARGO_MANIFEST_DIR")).join("test_data/vertices.csv"),
            &FsPath::new(env!("CARGO_MANIFEST_DIR")).join("test_data/arcs.csv"),
        )
        .unwrap();
        let service = RouteService::new(g);

        let path = service.route(10, 40).unwrap();

        assert_eq!(path.ids, vec![10, 30, 20, 40]);
        assert_eq!(path.weight, 3.0);
        assert_eq!(path.labels(service.graph()), vec!["A", "C", "B", "D"]);
    }

    #[test]
    fn unknown_ids_and_labels() {
        let service = RouteService::new(generate_city_graph());

        assert_eq!(
            service.route(0, 99),
            Err(SearchError::UnknownVertexId(99))
        );
        assert_eq!(
            service.route_by_label("Lisbon", "Atlantis"),
            Err(SearchError::UnknownLabel("Atlantis".to_string()))
        );
    }

    #[test]
    fn route_by_label() {
        let service = RouteService::new(generate_city_graph());

        let path = service.route_by_label("Paris", "Vienna").unwrap();

        assert_eq!(path.labels(service.graph()), vec!["Paris", "Munich", "Vienna"]);
        assert_eq!(path.weight, 840.0 + 435.0);
    }

    #[test]
    fn shared_between_threads() {
        let service = RouteService::new(generate_city_graph());

        std::thread::scope(|s| {
            let a = s.spawn(|| service.route_by_label("Lisbon", "Rome").unwrap());
            let b = s.spawn(|| service.route_by_label("Rome", "Lisbon").unwrap());
            let (a, b) = (a.join().unwrap(), b.join().unwrap());
            assert_eq!(a.weight, b.weight);
        });
    }
}
