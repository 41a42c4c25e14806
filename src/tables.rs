//! The read-only tables every traversal shares.
use custom_debug_derive::Debug;

use crate::{
    edge::EdgeIndexer,
    graph::{full_edge_set, EdgeSet, MAX_VERTICES},
    matching::MatchingCatalog,
    Error,
};

/// Edge numbering, edge adjacency and matching catalog for
/// one vertex count. Built once before any traversal starts
/// and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tables {
    pub indexer: EdgeIndexer,
    pub catalog: MatchingCatalog,
}

impl Tables {
    pub fn new(vertices: usize) -> Result<Self, Error> {
        if !(2..=MAX_VERTICES).contains(&vertices) {
            return Err(Error::VertexCountError(vertices));
        }

        let indexer = EdgeIndexer::new(vertices);
        let catalog = MatchingCatalog::new(&indexer);
        log::debug!(
            "Tables for n={}: {} edges, {} matchings",
            vertices,
            indexer.number_of_edges(),
            catalog.len()
        );

        Ok(Tables { indexer, catalog })
    }

    pub fn vertices(&self) -> usize {
        self.indexer.vertices()
    }

    pub fn number_of_edges(&self) -> usize {
        self.indexer.number_of_edges()
    }

    pub fn all_edges(&self) -> EdgeSet {
        full_edge_set(self.number_of_edges())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_vertex_count_validation() {
        assert!(matches!(Tables::new(0), Err(Error::VertexCountError(0))));
        assert!(matches!(Tables::new(1), Err(Error::VertexCountError(1))));
        assert!(matches!(
            Tables::new(MAX_VERTICES + 1),
            Err(Error::VertexCountError(12))
        ));
        assert!(Tables::new(2).is_ok());
    }

    #[test]
    fn test_tables() -> Result<(), Error> {
        let tables = Tables::new(5)?;
        assert_eq!(tables.vertices(), 5);
        assert_eq!(tables.number_of_edges(), 10);
        assert_eq!(tables.all_edges(), 0b11_1111_1111);
        assert_eq!(tables, Tables::new(5)?);
        Ok(())
    }
}
