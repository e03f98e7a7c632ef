#![cfg_attr(not(feature = "std"), no_std)]

//! The navigable Cayley graph.
//!
//! [`CayleyGraph`] stores the connected component produced by a
//! breadth-first enumeration: vertices in discovery order, shell boundaries
//! (distance classes from the root), and undirected edges labeled by the
//! generator that produced them. Construction happens through the mutating
//! half of the interface; after [`finish`](CayleyGraph::finish) the graph
//! is read-only and every further modification is a refused no-op.

extern crate alloc;

mod graph;
mod index;

pub use self::{
    graph::CayleyGraph,
    index::{Color, VertexIndex},
};
