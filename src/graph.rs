//! Representation of temporal graphs that grow
//! one matching per round, with and without
//! the automorphisms of the edges added so far.
mod tgraph;
pub use tgraph::{candidate_edges, TGraph};

mod symmetric;
pub use symmetric::SymmetricTGraph;

pub type VertexIndex = u8;
pub type EdgeIndex = u8;
/// One bit per edge index.
pub type EdgeSet = u64;
/// One bit per vertex.
pub type VertexSet = u16;

/// Every edge index has to fit into an `EdgeSet`,
/// i.e. n(n-1)/2 <= 64.
pub const MAX_VERTICES: usize = 11;

/// Edge `u -- v` added in round `t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TEdge {
    pub u: VertexIndex,
    pub v: VertexIndex,
    pub t: u8,
}

pub fn full_edge_set(number_of_edges: usize) -> EdgeSet {
    if number_of_edges >= EdgeSet::BITS as usize {
        EdgeSet::MAX
    } else {
        (1 << number_of_edges) - 1
    }
}

pub fn full_vertex_set(vertices: usize) -> VertexSet {
    if vertices >= VertexSet::BITS as usize {
        VertexSet::MAX
    } else {
        (1 << vertices) - 1
    }
}
