use rand::Rng;

use crate::{
    edge,
    graph::{node_index, Graph, Vertex},
};

pub fn generate_scenario_graph() -> Graph {
    // A -4-> B -1-> D
    // |      ^      ^
    // 1      1      |
    // v      |      |
    // C -----+--5---+
    let mut g = Graph::new();

    let a = g.add_vertex(Vertex::new(0, "A"));
    let b = g.add_vertex(Vertex::new(1, "B"));
    let c = g.add_vertex(Vertex::new(2, "C"));
    let d = g.add_vertex(Vertex::new(3, "D"));

    g.add_edge(edge!(a => b, 4.0));
    g.add_edge(edge!(a => c, 1.0));
    g.add_edge(edge!(c => b, 1.0));
    g.add_edge(edge!(b => d, 1.0));
    g.add_edge(edge!(c => d, 5.0));

    g
}

pub fn generate_city_graph() -> Graph {
    let mut graph = Graph::new();

    let lisbon = graph.add_vertex(Vertex::new(0, "Lisbon"));
    let madrid = graph.add_vertex(Vertex::new(1, "Madrid"));
    let paris = graph.add_vertex(Vertex::new(2, "Paris"));
    let brussels = graph.add_vertex(Vertex::new(3, "Brussels"));
    let amsterdam = graph.add_vertex(Vertex::new(4, "Amsterdam"));
    let berlin = graph.add_vertex(Vertex::new(5, "Berlin"));
    let warsaw = graph.add_vertex(Vertex::new(6, "Warsaw"));
    let munich = graph.add_vertex(Vertex::new(7, "Munich"));
    let vienna = graph.add_vertex(Vertex::new(8, "Vienna"));
    let prague = graph.add_vertex(Vertex::new(9, "Prague"));
    let rome = graph.add_vertex(Vertex::new(10, "Rome"));

    graph.add_edges(edge!(lisbon, madrid, 625.0));
    graph.add_edges(edge!(madrid, paris, 1270.0));
    graph.add_edges(edge!(paris, brussels, 300.0));
    graph.add_edges(edge!(paris, munich, 840.0));
    graph.add_edges(edge!(paris, rome, 1420.0));
    graph.add_edges(edge!(brussels, amsterdam, 210.0));
    graph.add_edges(edge!(amsterdam, berlin, 655.0));
    graph.add_edges(edge!(berlin, warsaw, 575.0));
    graph.add_edges(edge!(berlin, prague, 350.0));
    graph.add_edges(edge!(munich, prague, 380.0));
    graph.add_edges(edge!(munich, vienna, 435.0));
    graph.add_edges(edge!(vienna, prague, 330.0));
    graph.add_edges(edge!(prague, warsaw, 680.0));
    graph.add_edges(edge!(vienna, warsaw, 680.0));
    graph.add_edges(edge!(munich, rome, 910.0));

    graph
}

/// Random directed graph with `num_vertices` vertices and up to `num_arcs`
/// arcs with integral weights in `0..=max_weight`.
pub fn generate_random_graph(
    rng: &mut impl Rng,
    num_vertices: usize,
    num_arcs: usize,
    max_weight: u32,
) -> Graph {
    let mut g = Graph::with_capacity(num_vertices);
    for i in 0..num_vertices {
        g.add_vertex(Vertex::new(i as u64, format!("v{}", i)));
    }
    if num_vertices == 0 {
        return g;
    }

    for _ in 0..num_arcs {
        let source = node_index(rng.gen_range(0..num_vertices));
        let target = node_index(rng.gen_range(0..num_vertices));
        let weight = rng.gen_range(0..=max_weight) as f64;
        g.add_edge(edge!(source => target, weight));
    }

    g
}
