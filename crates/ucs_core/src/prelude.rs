//! Re-exports of the most commonly used items in `ucs_core`.
pub use crate::search;
pub use crate::search::path::Path;
pub use crate::search::uniform_cost::UniformCostSearch;

pub use crate::constants::{VertexId, Weight, UNREACHABLE};
pub use crate::error::SearchError;
pub use crate::graph::node_index;
pub use crate::graph::{Graph, NodeIndex, Vertex};
pub use crate::service::RouteService;
pub use crate::util::test_graphs::generate_scenario_graph;
