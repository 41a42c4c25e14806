//! Structural properties of temporal graphs that allow to
//! discard graphs whose prefix can already be reduced
//! to a smaller instance, and the search for sparse
//! temporal spanners.
use rand::{seq::SliceRandom, Rng};

use crate::{
    combinatoric::set_bits,
    edge::{number_of_edges, pair},
    graph::{full_edge_set, full_vertex_set, EdgeIndex, EdgeSet, TGraph, VertexSet},
};

/// Size of the smallest possible temporal spanner, 2n-3.
pub fn optimal_spanner_size(vertices: usize) -> usize {
    (2 * vertices).saturating_sub(3)
}

/// Degree bookkeeping along the time ordered edges.
#[derive(Debug, Clone)]
struct Dismountability {
    degrees: Vec<usize>,
    /// Vertices that are not yet a neighbour.
    missing_neighbours: Vec<VertexSet>,
    /// Vertices that are the first neighbour of some vertex.
    mins: VertexSet,
    /// Vertices that are the last neighbour of some vertex.
    maxs: VertexSet,
}

impl Dismountability {
    fn new(vertices: usize) -> Self {
        let all_vertices = full_vertex_set(vertices);
        Dismountability {
            degrees: vec![0; vertices],
            missing_neighbours: (0..vertices)
                .map(|vertex| all_vertices ^ (1 << vertex))
                .collect(),
            mins: 0,
            maxs: 0,
        }
    }

    fn update(&mut self, u: usize, v: usize) {
        let last_degree = self.degrees.len() - 1;

        self.degrees[u] += 1;
        self.degrees[v] += 1;
        self.missing_neighbours[u] ^= 1 << v;
        self.missing_neighbours[v] ^= 1 << u;

        if self.degrees[u] == 1 {
            self.mins |= 1 << v;
        }
        if self.degrees[v] == 1 {
            self.mins |= 1 << u;
        }
        if self.degrees[u] == last_degree {
            self.maxs |= 1 << v;
        }
        if self.degrees[v] == last_degree {
            self.maxs |= 1 << u;
        }
    }

    fn is_dismountable(&self) -> bool {
        if self.mins & self.maxs != 0 {
            return true;
        }

        self.missing_neighbours
            .iter()
            .any(|missing| *missing != 0 && missing & self.mins == *missing)
    }
}

/// Reachability bookkeeping that also remembers, per vertex,
/// which fully reached vertices ("sinks") reach it afterwards.
#[derive(Debug, Clone)]
struct Reachability {
    all_vertices: VertexSet,
    predecessors: Vec<VertexSet>,
    sink_predecessors: Vec<VertexSet>,
}

impl Reachability {
    fn new(vertices: usize) -> Self {
        Reachability {
            all_vertices: full_vertex_set(vertices),
            predecessors: (0..vertices).map(|vertex| 1 << vertex).collect(),
            sink_predecessors: vec![0; vertices],
        }
    }

    fn update(&mut self, u: usize, v: usize) {
        for (this, other) in [(u, v), (v, u)] {
            if self.predecessors[this] != self.all_vertices {
                self.predecessors[this] |= self.predecessors[other];
                if self.predecessors[this] == self.all_vertices {
                    self.sink_predecessors[this] |= 1 << this;
                }
            }
        }
        self.sink_predecessors[u] |= self.sink_predecessors[v];
        self.sink_predecessors[v] = self.sink_predecessors[u];
    }
}

impl TGraph {
    /// A vertex is dismountable if its first neighbour is the last
    /// neighbour of some other vertex, or if all of its missing
    /// neighbours are first neighbours of some vertex.
    pub fn is_dismountable(&self) -> bool {
        let mut dismountability = Dismountability::new(self.vertices());
        for tedge in self.tedges() {
            dismountability.update(tedge.u as usize, tedge.v as usize);
        }
        dismountability.is_dismountable()
    }

    /// Whether some vertex is a pivot in every completion of this graph,
    /// i.e. it is reached by every vertex and afterwards reaches every vertex,
    /// given that all missing edges are added later.
    pub fn has_pivot_vertex(&self) -> bool {
        let mut reachability = Reachability::new(self.vertices());
        for tedge in self.tedges() {
            reachability.update(tedge.u as usize, tedge.v as usize);
        }

        let sinks = &reachability.sink_predecessors;
        let mut future_sinks = sinks.clone();
        let missing = !self.edges() & full_edge_set(number_of_edges(self.vertices()));
        for edge in set_bits(missing) {
            let (u, v) = pair(self.vertices(), edge as EdgeIndex);
            let (u, v) = (u as usize, v as usize);
            future_sinks[u] |= sinks[v];
            future_sinks[v] |= sinks[u];
        }

        future_sinks
            .iter()
            .fold(reachability.all_vertices, |common, sinks| common & sinks)
            != 0
    }

    /// Whether every vertex still reaches every other vertex once the
    /// timestamped edges at the positions in `removed` are left out.
    pub fn is_happy_without(&self, removed: EdgeSet) -> bool {
        let mut predecessors = (0..self.vertices())
            .map(|vertex| 1 << vertex)
            .collect::<Vec<VertexSet>>();

        for (position, tedge) in self.tedges().iter().enumerate() {
            if removed & (1 << position) != 0 {
                continue;
            }
            let (u, v) = (tedge.u as usize, tedge.v as usize);
            predecessors[u] |= predecessors[v];
            predecessors[v] = predecessors[u];
        }

        let all_vertices = full_vertex_set(self.vertices());
        predecessors
            .into_iter()
            .all(|predecessors| predecessors == all_vertices)
    }

    /// Removes the edges in the given order whenever the graph stays happy,
    /// until only 2n-3 are left. Returns the number of remaining edges.
    fn spanner_size(&self, order: impl IntoIterator<Item = usize>) -> usize {
        let edges = self.tedges().len();
        let target = edges.saturating_sub(optimal_spanner_size(self.vertices()));
        let mut removed: EdgeSet = 0;
        let mut number_removed = 0;

        for position in order {
            if number_removed == target {
                break;
            }
            if self.is_happy_without(removed | (1 << position)) {
                removed |= 1 << position;
                number_removed += 1;
            }
        }
        edges - number_removed
    }

    /// Spanner size when trying to remove the edges in time order.
    pub fn greedy_spanner_size(&self) -> usize {
        self.spanner_size(0..self.tedges().len())
    }

    /// Spanner size when trying to remove the edges in random order.
    pub fn random_spanner_size<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let mut order = (0..self.tedges().len()).collect::<Vec<_>>();
        order.shuffle(rng);
        self.spanner_size(order)
    }

    /// Whether a happy subgraph with at most 2n-3 edges was found, first
    /// greedily and then in up to `tries - 1` random orders. Graphs with less
    /// than 2n-4 edges or that are not happy have none.
    pub fn has_optimal_spanner<R: Rng + ?Sized>(&self, tries: usize, rng: &mut R) -> bool {
        let optimal = optimal_spanner_size(self.vertices());
        if self.number_of_edges() + 4 < 2 * self.vertices() || !self.is_happy() {
            return false;
        }
        if self.greedy_spanner_size() <= optimal {
            return true;
        }
        (1..tries).any(|_| self.random_spanner_size(rng) <= optimal)
    }
}
