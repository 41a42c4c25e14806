#![warn(rust_2018_idioms)]

//! Generator for temporal graphs that grow one matching
//! per round until they are complete.
//!
//! The search starts from the empty graph on `n` vertices and
//! adds, round by round, a non-empty set of vertex disjoint edges
//! that touch the edges of the previous round. While the partial
//! graph still has non-trivial automorphisms, only one successor
//! per orbit is explored.
//!
//! ```no_run
//! use happygen::{runner::SequentialRunner, tables::Tables, visitor::count_happy, Error};
//!
//! fn main() -> Result<(), Error> {
//!     let tables = Tables::new(5)?;
//!     let happy = SequentialRunner::new(&tables, count_happy).run();
//!     println!("{}", happy);
//!     Ok(())
//! }
//! ```

pub mod combinatoric;
pub mod debug;
pub mod edge;
pub mod graph;
pub mod input;
pub mod matching;
pub mod misc;
pub mod properties;
pub mod runner;
pub mod statistics;
pub mod tables;
pub mod traverse;
pub mod visitor;

pub use debug::Error;

/// Accumulator the visitors add their contribution to.
pub type Count = i64;
