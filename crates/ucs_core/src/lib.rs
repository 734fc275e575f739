//! Crate to find cheapest routes with a uniform cost search.
//!
//! # Basic usage
//! ```
//! use ucs_core::prelude::*;
//!
//! // A -4-> B -1-> D, A -1-> C -1-> B, C -5-> D
//! let g = generate_scenario_graph();
//!
//! // Search the cheapest route from A to D
//! let path = search::search(&g, node_index(0), node_index(3)).expect("A and D are part of g");
//!
//! assert_eq!(path.labels(&g), vec!["A", "C", "B", "D"]);
//! assert_eq!(path.weight, 3.0);
//!```
//! [`Graph`]: crate::graph::Graph
pub mod constants;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod priority_queue;
pub mod search;
pub mod service;
pub mod statistics;
pub mod util;
