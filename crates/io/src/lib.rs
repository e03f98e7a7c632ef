//! Text adapters over a Cayley graph's iteration order.
//!
//! The sparse adjacency format is one line per directed incidence,
//! `row col 1` with 1-based indices, ordered by row and then by column.
//! The element list file holds one group element per line, in vertex index
//! order, using each element family's space-separated form. Neither format
//! is part of the graph's own contract; both are plain projections of the
//! finished graph's iteration order.

mod sparse;

pub use self::sparse::{
    read_sparse_matrix, write_element_list, write_sparse_matrix, ReadError,
};
