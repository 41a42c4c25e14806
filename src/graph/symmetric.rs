use custom_debug_derive::Debug;

use super::{EdgeIndex, EdgeSet, TGraph};
use crate::{
    combinatoric::nontrivial_permutations,
    matching::{are_equivalent_matchings, is_stable_under_automorphism},
    tables::Tables,
};

/// A temporal graph together with the non-trivial vertex
/// permutations that map each round onto itself.
///
/// Automorphisms are stored by their action on edge indices,
/// one after the other, `number_of_edges` entries each.
/// The identity is never stored, so a graph without
/// automorphisms is rigid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymmetricTGraph {
    graph: TGraph,
    #[debug(skip)]
    automorphisms: Vec<EdgeIndex>,
    #[debug(skip)]
    stride: usize,
}

impl SymmetricTGraph {
    /// The empty graph, whose automorphisms are all n!-1
    /// non-trivial relabelings of its vertices.
    pub fn new(tables: &Tables) -> Self {
        let automorphisms = nontrivial_permutations(tables.vertices())
            .flat_map(|permutation| tables.indexer.edge_action(&permutation))
            .collect();

        SymmetricTGraph {
            graph: TGraph::new(tables),
            automorphisms,
            stride: tables.number_of_edges(),
        }
    }

    /// Wraps a graph whose automorphisms are not tracked (anymore).
    pub fn rigid(graph: TGraph, tables: &Tables) -> Self {
        SymmetricTGraph {
            graph,
            automorphisms: Vec::new(),
            stride: tables.number_of_edges(),
        }
    }

    /// Copy of this graph with `matching` added as the next round.
    /// Only the automorphisms that stabilize `matching` survive.
    pub fn extend(&self, matching: EdgeSet, tables: &Tables) -> Self {
        let automorphisms = self
            .automorphisms()
            .filter(|automorphism| is_stable_under_automorphism(matching, automorphism))
            .flatten()
            .copied()
            .collect();

        SymmetricTGraph {
            graph: self.graph.extend(matching, tables),
            automorphisms,
            stride: self.stride,
        }
    }

    pub fn graph(&self) -> &TGraph {
        &self.graph
    }

    pub fn is_rigid(&self) -> bool {
        self.automorphisms.is_empty()
    }

    pub fn number_of_automorphisms(&self) -> usize {
        self.automorphisms.len() / self.stride
    }

    pub fn automorphisms(&self) -> std::slice::ChunksExact<'_, EdgeIndex> {
        self.automorphisms.chunks_exact(self.stride)
    }

    /// Whether some automorphism maps `matching` onto one of `matchings`
    /// of the same size.
    pub fn contains_equivalent_matching(&self, matchings: &[EdgeSet], matching: EdgeSet) -> bool {
        matchings
            .iter()
            .filter(|other| other.count_ones() == matching.count_ones())
            .any(|other| {
                self.automorphisms()
                    .any(|automorphism| are_equivalent_matchings(matching, *other, automorphism))
            })
    }

    /// The matchings with `size` edges within `candidates`, at most one per
    /// orbit under the automorphisms of this graph.
    pub fn successors_as_matchings(
        &self,
        candidates: EdgeSet,
        size: usize,
        tables: &Tables,
    ) -> Vec<EdgeSet> {
        let mut matchings = Vec::with_capacity(tables.vertices());
        for matching in tables.catalog.of_size(size) {
            if candidates | matching == candidates
                && !self.contains_equivalent_matching(&matchings, *matching)
            {
                matchings.push(*matching);
            }
        }
        matchings
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{combinatoric::set_bits, Error};

    fn image(edges: EdgeSet, automorphism: &[EdgeIndex]) -> EdgeSet {
        set_bits(edges).fold(0, |set, edge| set | (1 << automorphism[edge]))
    }

    #[test]
    fn test_root() -> Result<(), Error> {
        let tables = Tables::new(4)?;
        let root = SymmetricTGraph::new(&tables);
        assert_eq!(root.number_of_automorphisms(), 23);
        assert!(!root.is_rigid());
        assert!(root
            .automorphisms()
            .all(|automorphism| automorphism.len() == 6));

        let two = Tables::new(2)?;
        let root = SymmetricTGraph::new(&two);
        assert_eq!(root.number_of_automorphisms(), 1);
        assert_eq!(root.automorphisms().next(), Some(&[0][..]));
        Ok(())
    }

    #[test]
    fn test_extend_keeps_stabilizer() -> Result<(), Error> {
        let tables = Tables::new(4)?;
        let root = SymmetricTGraph::new(&tables);

        // {0-1, 2-3} is kept by 8 permutations, 7 without the identity.
        let perfect = root.extend(0b100001, &tables);
        assert_eq!(perfect.number_of_automorphisms(), 7);

        // Adding 1-2 leaves only the swap of 0-3 and 1-2 simultaneously.
        let path = perfect.extend(0b001000, &tables);
        assert_eq!(path.number_of_automorphisms(), 1);
        assert_eq!(path.graph().edges(), 0b101001);

        // Adding 0-2 as well breaks the last symmetry.
        let rigid = path.extend(0b000010, &tables);
        assert!(rigid.is_rigid());
        assert_eq!(rigid.number_of_automorphisms(), 0);
        Ok(())
    }

    #[test]
    fn test_automorphism_closure_and_monotonicity() -> Result<(), Error> {
        let tables = Tables::new(5)?;
        let mut current = SymmetricTGraph::new(&tables);
        // 0-1, then 1-2, then 0-2 and 3-4.
        let rounds = [
            tables.indexer.index(0, 1),
            tables.indexer.index(1, 2),
            tables.indexer.index(0, 2),
        ];

        for (round, edge) in rounds.iter().enumerate() {
            let mut matching = 1 << edge;
            if round == 2 {
                matching |= 1 << tables.indexer.index(3, 4);
            }
            let next = current.extend(matching, &tables);
            assert!(next.number_of_automorphisms() <= current.number_of_automorphisms());
            for automorphism in next.automorphisms() {
                assert_eq!(image(next.graph().edges(), automorphism), next.graph().edges());
            }
            current = next;
        }
        Ok(())
    }

    #[test]
    fn test_orbit_pruning() -> Result<(), Error> {
        let tables = Tables::new(4)?;
        let root = SymmetricTGraph::new(&tables);

        // All single edges are equivalent for the empty graph.
        let singles = root.successors_as_matchings(tables.all_edges(), 1, &tables);
        assert_eq!(singles, vec![0b000001]);
        let pairs = root.successors_as_matchings(tables.all_edges(), 2, &tables);
        assert_eq!(pairs, vec![0b100001]);

        // After 0-1 the edges 0-2, 0-3, 1-2, 1-3 form one orbit.
        let single = root.extend(0b000001, &tables);
        let singles = single.successors_as_matchings(0b011110, 1, &tables);
        assert_eq!(singles, vec![0b000010]);
        // {0-2, 1-3} and {0-3, 1-2} are swapped by exchanging 2 and 3.
        let pairs = single.successors_as_matchings(0b011110, 2, &tables);
        assert_eq!(pairs, vec![0b010010]);
        Ok(())
    }
}
