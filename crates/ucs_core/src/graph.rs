use crate::constants::{VertexId, Weight};
use anyhow::{bail, Context};
use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{fmt, hash::Hash, ops::Index, path::Path};

/// Default integer typer for vertex indices
/// Needs to be increased for very large graphs > u32::max
pub type DefaultIdx = u32;

pub trait IndexType: Copy + Default + Hash + Ord + fmt::Debug {
    fn new(idx: usize) -> Self;
    fn index(&self) -> usize;
    fn max() -> Self;
}

impl IndexType for u32 {
    #[inline(always)]
    fn new(x: usize) -> Self {
        x as u32
    }
    #[inline(always)]
    fn index(&self) -> usize {
        *self as usize
    }
    #[inline(always)]
    fn max() -> Self {
        ::std::u32::MAX
    }
}

/// Dense vertex handle into the vertex table of a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct NodeIndex<Idx = DefaultIdx>(Idx);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(IndexType::new(x))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0.index()
    }

    #[inline]
    pub fn end() -> Self {
        NodeIndex(IndexType::max())
    }
}

impl<Idx: IndexType> From<Idx> for NodeIndex<Idx> {
    fn from(ix: Idx) -> Self {
        NodeIndex(ix)
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Directed, weighted arc. The source is the vertex owning the arc.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Arc {
    pub target: NodeIndex,
    pub weight: Weight,
}

impl Arc {
    pub fn new(target: NodeIndex, weight: Weight) -> Self {
        Arc { target, weight }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Vertex {
    pub id: VertexId,
    pub label: String,
    pub arcs: Vec<Arc>,
}

impl Vertex {
    pub fn new(id: VertexId, label: impl Into<String>) -> Self {
        Vertex {
            id,
            label: label.into(),
            arcs: Vec::new(),
        }
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

/// Input record used to add arcs to a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: NodeIndex, target: NodeIndex, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
struct VertexRecord {
    id: VertexId,
    label: String,
}

#[derive(Debug, Deserialize, Serialize)]
struct ArcRecord {
    source: VertexId,
    target: VertexId,
    weight: Weight,
}

/// Weights have to be finite and non-negative.
pub fn is_valid_weight(weight: Weight) -> bool {
    weight.is_finite() && weight >= 0.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    vertices: Vec<Vertex>,
    index: FxHashMap<VertexId, NodeIndex>,
    num_arcs: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            index: FxHashMap::default(),
            num_arcs: 0,
        }
    }

    pub fn with_capacity(num_vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(num_vertices),
            index: FxHashMap::with_capacity_and_hasher(num_vertices, Default::default()),
            num_arcs: 0,
        }
    }

    /// Adds a new vertex to the graph
    ///
    /// **Panics** if the Graph is at the maximum number of vertices for its index type
    /// **Panics** if a vertex with the same id already exists
    pub fn add_vertex(&mut self, vertex: Vertex) -> NodeIndex {
        let node_idx = NodeIndex::new(self.vertices.len());

        assert!(
            NodeIndex::end() != node_idx,
            "Maximum number of vertices for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );
        assert!(
            !self.index.contains_key(&vertex.id),
            "Vertex id ({}) already exists",
            vertex.id
        );

        self.index.insert(vertex.id, node_idx);
        self.vertices.push(vertex);

        node_idx
    }

    /// Add a new `edge` to the graph. The arc is stored in the source vertex.
    ///
    /// **Panics** if the source or target vertex does not exist
    /// **Panics** if the weight is negative, NaN or infinite
    pub fn add_edge(&mut self, edge: Edge) {
        assert!(
            self.contains(edge.source),
            "Source vertex index ({}) does not exist",
            edge.source
        );
        assert!(
            self.contains(edge.target),
            "Target vertex index ({}) does not exist",
            edge.target
        );
        assert!(
            is_valid_weight(edge.weight),
            "Arc weight ({}) must be finite and non-negative",
            edge.weight
        );

        let arcs = &mut self.vertices[edge.source.index()].arcs;

        // If an arc already exists between source and target keep the lower weight
        if let Some(arc) = arcs.iter_mut().find(|arc| arc.target == edge.target) {
            if edge.weight < arc.weight {
                arc.weight = edge.weight;
            }
            return;
        }

        arcs.push(Arc::new(edge.target, edge.weight));
        self.num_arcs += 1;
    }

    pub fn add_edges(&mut self, edges: Vec<Edge>) {
        for edge in edges {
            self.add_edge(edge);
        }
    }

    pub fn contains(&self, node_idx: NodeIndex) -> bool {
        node_idx.index() < self.vertices.len()
    }

    pub fn vertex(&self, node_idx: NodeIndex) -> Option<&Vertex> {
        self.vertices.get(node_idx.index())
    }

    /// Returns an iterator over all vertices of the graph
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    /// Returns an iterator over the indices of all vertices
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> {
        (0..self.vertices.len()).map(NodeIndex::new)
    }

    /// Outgoing arcs of `node_idx`.
    ///
    /// **Panics** if the vertex does not exist
    pub fn arcs_outgoing(&self, node_idx: NodeIndex) -> impl Iterator<Item = &Arc> + '_ {
        self.vertices[node_idx.index()].arcs.iter()
    }

    /// Resolves an external vertex id
    pub fn node_index_of(&self, id: VertexId) -> Option<NodeIndex> {
        self.index.get(&id).copied()
    }

    pub fn node_index_by_label(&self, label: &str) -> Option<NodeIndex> {
        self.vertices
            .iter()
            .position(|v| v.label == label)
            .map(NodeIndex::new)
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_arcs(&self) -> usize {
        self.num_arcs
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn from_csv(path_to_vertices: &Path, path_to_arcs: &Path) -> anyhow::Result<Self> {
        info!("Reading graph from {:?} and {:?}", path_to_vertices, path_to_arcs);

        let mut vertices: Vec<VertexRecord> = Vec::new();
        let mut reader = csv::Reader::from_path(path_to_vertices)
            .with_context(|| format!("Could not open {:?}", path_to_vertices))?;
        for result in reader.deserialize() {
            let record: VertexRecord = result.context("Failed to parse Vertex")?;
            vertices.push(record);
        }

        let mut arcs: Vec<ArcRecord> = Vec::new();
        let mut reader = csv::Reader::from_path(path_to_arcs)
            .with_context(|| format!("Could not open {:?}", path_to_arcs))?;
        for result in reader.deserialize() {
            let record: ArcRecord = result.context("Failed to parse Arc")?;
            arcs.push(record);
        }

        // Build the graph
        let mut g = Graph::with_capacity(vertices.len());
        for VertexRecord { id, label } in vertices {
            if g.node_index_of(id).is_some() {
                bail!("Duplicate vertex id {}", id);
            }
            g.add_vertex(Vertex::new(id, label));
        }

        for ArcRecord {
            source,
            target,
            weight,
        } in arcs
        {
            let source_idx = g
                .node_index_of(source)
                .with_context(|| format!("Arc references unknown source vertex {}", source))?;
            let target_idx = g
                .node_index_of(target)
                .with_context(|| format!("Arc references unknown target vertex {}", target))?;
            if !is_valid_weight(weight) {
                bail!("Invalid weight {} on arc {} -> {}", weight, source, target);
            }
            g.add_edge(Edge::new(source_idx, target_idx, weight));
        }

        info!("Finished reading graph");
        info!("{}", g);
        Ok(g)
    }

    pub fn export_csv(&self, path_to_vertices: &Path, path_to_arcs: &Path) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_path(path_to_vertices)?;

        debug!("BEGIN writing vertices");
        for vertex in self.vertices() {
            wtr.serialize(VertexRecord {
                id: vertex.id,
                label: vertex.label.clone(),
            })?;
        }

        wtr.flush()?;
        debug!("FINISHED writing vertices");

        let mut wtr = csv::Writer::from_path(path_to_arcs)?;
        debug!("BEGIN writing arcs");
        for vertex in self.vertices() {
            for arc in &vertex.arcs {
                wtr.serialize(ArcRecord {
                    source: vertex.id,
                    target: self.vertices[arc.target.index()].id,
                    weight: arc.weight,
                })?;
            }
        }

        wtr.flush()?;
        debug!("FINISHED writing arcs");
        Ok(())
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

/// **Panics** if the vertex does not exist
impl Index<NodeIndex> for Graph {
    type Output = Vertex;

    fn index(&self, node_idx: NodeIndex) -> &Vertex {
        &self.vertices[node_idx.index()]
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph:\t#Vertices: {}, #Arcs: {}",
            self.num_vertices(),
            self.num_arcs()
        )
    }
}

/// Macro to create an edge from source to target with a weight
///
/// edge!(0 , 1, 3.0) Returns edges in both directions
///
/// edge!(0 => 1, 3.0) Returns directed edge
#[macro_export]
macro_rules! edge {
    ($source:expr => $target:expr, $weight:expr) => {
        $crate::graph::Edge::new($source.into(), $target.into(), $weight)
    };
    ($source:expr , $target:expr, $weight:expr) => {
        vec![
            $crate::graph::Edge::new($source.into(), $target.into(), $weight),
            $crate::graph::Edge::new($target.into(), $source.into(), $weight),
        ]
    };
}

/// Macro to create a vertex with a given id and label
/// vertex!(0, "Berlin")
#[macro_export]
macro_rules! vertex {
    ($id:expr, $label:expr) => {
        $crate::graph::Vertex::new($id, $label)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_from_csv() {
        let graph = Graph::from_csv(
            &Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/vertices.csv"),
            &Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/arcs.csv"),
        )
        .unwrap();

        assert_eq!(graph.num_vertices(), 4);
        assert_eq!(graph.num_arcs(), 5);

        let a = graph.node_index_of(10).unwrap();
        let d = graph.node_index_of(40).unwrap();
        assert_eq!(graph.vertex(a).unwrap().label, "A");
        assert_eq!(graph[d].id, 40);
        assert_eq!(graph[d].label, "D");
        assert_eq!(graph.arcs_outgoing(a).count(), 2);
        assert_eq!(graph.arcs_outgoing(d).count(), 0);
        assert_eq!(graph.node_index_by_label("C"), graph.node_index_of(30));
    }

    #[test]
    fn csv_with_unknown_vertex_fails() {
        let dir = tempfile::tempdir().unwrap();
        let vertices = dir.path().join("vertices.csv");
        let arcs = dir.path().join("arcs.csv");
        std::fs::write(&vertices, "id,label\n1,A\n2,B\n").unwrap();
        std::fs::write(&arcs, "source,target,weight\n1,3,1.0\n").unwrap();

        assert!(Graph::from_csv(&vertices, &arcs).is_err());
    }

    #[test]
    fn csv_with_negative_weight_fails() {
        let dir = tempfile::tempdir().unwrap();
        let vertices = dir.path().join("vertices.csv");
        let arcs = dir.path().join("arcs.csv");
        std::fs::write(&vertices, "id,label\n1,A\n2,B\n").unwrap();
        std::fs::write(&arcs, "source,target,weight\n1,2,-1.0\n").unwrap();

        assert!(Graph::from_csv(&vertices, &arcs).is_err());
    }

    #[test]
    fn export_and_reimport_csv() {
        let graph = Graph::from_csv(
            &Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/vertices.csv"),
            &Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/arcs.csv"),
        )
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let vertices = dir.path().join("vertices.csv");
        let arcs = dir.path().join("arcs.csv");
        graph.export_csv(&vertices, &arcs).unwrap();

        let reimported = Graph::from_csv(&vertices, &arcs).unwrap();
        assert_eq!(reimported.num_vertices(), graph.num_vertices());
        assert_eq!(reimported.num_arcs(), graph.num_arcs());
        for (a, b) in graph.vertices().zip(reimported.vertices()) {
            assert_eq!(a, b);
            assert_eq!(a.arcs, b.arcs);
        }
    }

    #[test]
    fn add_duplicate_edges() {
        let mut g = Graph::new();
        let a = g.add_vertex(vertex!(0, "A"));
        let b = g.add_vertex(vertex!(1, "B"));

        g.add_edge(edge!(a => b, 2.0));
        g.add_edge(edge!(a => b, 1.0));
        g.add_edge(edge!(a => b, 5.0));

        assert_eq!(g.num_arcs(), 1);
        assert_eq!(g.arcs_outgoing(a).next().unwrap().weight, 1.0);
    }

    #[test]
    fn bidirectional_edges() {
        let mut g = Graph::new();
        let a = g.add_vertex(vertex!(0, "A"));
        let b = g.add_vertex(vertex!(1, "B"));

        g.add_edges(edge!(a, b, 2.0));

        assert_eq!(g.num_arcs(), 2);
        assert_eq!(g.arcs_outgoing(b).next().unwrap().target, a);
    }

    #[test]
    #[should_panic(expected = "already exists")]
    fn duplicate_vertex_id_panics() {
        let mut g = Graph::new();
        g.add_vertex(vertex!(7, "A"));
        g.add_vertex(vertex!(7, "B"));
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn negative_weight_panics() {
        let mut g = Graph::new();
        let a = g.add_vertex(vertex!(0, "A"));
        let b = g.add_vertex(vertex!(1, "B"));
        g.add_edge(edge!(a => b, -1.0));
    }
}
