/// Arc weight / path cost type
pub type Weight = f64;
/// External identity of a vertex, as supplied by the graph source
pub type VertexId = u64;
/// Sentinel distance of a vertex which has not been reached (yet)
pub const UNREACHABLE: Weight = Weight::INFINITY;
