#![cfg_attr(not(feature = "std"), no_std)]

//! Shell expansion statistics of a finished Cayley graph.
//!
//! For every radius `d` the analyzer counts the shell size `s[d]`, the
//! edges reaching back into shell `d − 1` (`e[d]`) and the edges lying
//! within shell `d` (`t[d]`), then derives girth, bipartiteness, diameter
//! and the mean distance from the root. The graph must be finished; the
//! shell structure of a cancelled build is not final and is refused.

extern crate alloc;

mod error;

use alloc::{vec, vec::Vec};

use cayley_graph::{CayleyGraph, VertexIndex};
use cayley_group::GroupElement;
use error_stack::{Report, Result};

pub use self::error::AnalysisError;

/// The length of the shortest cycle seen from the root, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Girth {
    /// A shortest cycle of the given length.
    Cycle(usize),
    /// No cycle up to the component's maximal radius: the component is a
    /// tree.
    AcyclicWithinRadius,
}

/// Per-radius expansion counts and the scalar summaries derived from them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShellReport {
    /// `s[d]`: the number of vertices at distance `d` from the root.
    pub shell_sizes: Vec<usize>,
    /// `e[d]`: the number of edges between shell `d` and shell `d − 1`
    /// (`e[0] = 0`).
    pub outward_edges: Vec<usize>,
    /// `t[d]`: the number of edges with both endpoints in shell `d`.
    pub tangent_edges: Vec<usize>,
    pub girth: Girth,
    /// Whether no edge lies within a shell; with the root on one side,
    /// every edge then joins consecutive shells.
    pub bipartite: bool,
    /// The maximal distance from the root. Equals the graph diameter only
    /// when the graph is vertex-transitive, which the caller must assert.
    pub diameter: usize,
    /// `Σ_d d · s[d] / |V|`.
    pub average_distance: f64,
}

/// Analyze a finished graph.
///
/// Fails with [`AnalysisError::GraphIncomplete`] when
/// [`finish`](CayleyGraph::finish) was never called.
///
/// # Example
///
/// ```
/// use cayley_analysis::{analyze, Girth};
/// use cayley_builder::build_cayley_graph;
/// use cayley_group::Permutation;
///
/// let graph = build_cayley_graph(
///     [
///         Permutation::transposition(3, 0, 1),
///         Permutation::transposition(3, 1, 2),
///     ],
///     Permutation::one(3),
/// )
/// .unwrap();
/// let report = analyze(&graph).unwrap();
/// assert_eq!(report.shell_sizes, vec![1, 2, 2, 1]);
/// assert_eq!(report.girth, Girth::Cycle(6));
/// assert!(report.bipartite);
/// ```
pub fn analyze<G: GroupElement>(graph: &CayleyGraph<G>) -> Result<ShellReport, AnalysisError> {
    if !graph.is_finished() {
        return Err(Report::new(AnalysisError::GraphIncomplete));
    }

    let radius = graph.max_distance_from_root();
    let mut shell_sizes = Vec::with_capacity(radius + 1);
    let mut outward_edges = vec![0_usize; radius + 2];
    let mut tangent_halves = vec![0_usize; radius + 1];

    for d in 0..=radius {
        let shell = graph.shell_range(d);
        shell_sizes.push(shell.len());
        for v in shell {
            let v = VertexIndex::new(v);
            outward_edges[d + 1] += graph.neighbors_in_next_shell(v).count();
            for u in graph.neighbors_in_same_shell(v) {
                // a self loop appears only once in the neighbor list; count
                // it as both endpoints
                tangent_halves[d] += if u == v { 2 } else { 1 };
            }
        }
    }
    outward_edges.truncate(radius + 1);
    let tangent_edges: Vec<usize> = tangent_halves.into_iter().map(|h| h / 2).collect();

    let mut girth = Girth::AcyclicWithinRadius;
    for d in 1..=radius {
        // an even cycle closes where a shell receives more edges than it
        // has vertices; an odd cycle closes at the first tangent edge
        if outward_edges[d] > shell_sizes[d] {
            girth = Girth::Cycle(2 * d);
            break;
        }
        if tangent_edges[d] > 0 {
            girth = Girth::Cycle(2 * d + 1);
            break;
        }
    }

    let bipartite = tangent_edges.iter().all(|&t| t == 0);
    let vertex_count: usize = shell_sizes.iter().sum();
    let weighted: usize = shell_sizes
        .iter()
        .enumerate()
        .map(|(d, &s)| d * s)
        .sum();

    Ok(ShellReport {
        girth,
        bipartite,
        diameter: radius,
        average_distance: weighted as f64 / vertex_count as f64,
        shell_sizes,
        outward_edges,
        tangent_edges,
    })
}
