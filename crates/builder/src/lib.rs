#![cfg_attr(not(feature = "std"), no_std)]

//! Breadth-first construction of Cayley graphs.
//!
//! Given a generating set S and a root element r, the builder enumerates
//! the connected component of r in Cay(⟨S⟩, S) shell by shell, writing the
//! result into a [`CayleyGraph`]. The generating set is closed under
//! inverse before expansion starts, and every edge is attempted at most
//! once from each endpoint: when the edge `v — v·s` is inserted, the color
//! `s⁻¹` is retired at the far endpoint.
//!
//! Construction terminates iff ⟨S⟩ is finite (or the caller cancels
//! through a [`CancelToken`]).

extern crate alloc;

mod cancel;
mod common;
mod error;
mod progress;

use alloc::{boxed::Box, vec::Vec};

use cayley_graph::{CayleyGraph, Color, VertexIndex};
use cayley_group::GroupElement;
use error_stack::{Report, Result};
use fixedbitset::FixedBitSet;

pub use self::{
    cancel::CancelToken,
    error::BuildError,
    progress::{ProgressEvent, EDGE_GRANULARITY, VERTEX_GRANULARITY},
};
use crate::common::IndexSet;

/// Build the component of `root` in the Cayley graph of the generated
/// group, blocking until the enumeration is complete.
///
/// The iteration order of `generators` fixes the color numbering and hence
/// the vertex discovery order, so repeated runs over the same input
/// reproduce the same graph.
///
/// # Example
///
/// ```
/// use cayley_builder::build_cayley_graph;
/// use cayley_group::Permutation;
///
/// let s = Permutation::transposition(3, 0, 1);
/// let t = Permutation::transposition(3, 1, 2);
/// let graph = build_cayley_graph([s, t], Permutation::one(3)).unwrap();
/// assert_eq!(graph.vertex_count(), 6);
/// ```
pub fn build_cayley_graph<G, I>(generators: I, root: G) -> Result<CayleyGraph<G>, BuildError>
where
    G: GroupElement,
    I: IntoIterator<Item = G>,
{
    build_cayley_graph_with_size_hint(generators, root, 0)
}

/// Like [`build_cayley_graph`], preallocating for `expected` vertices.
pub fn build_cayley_graph_with_size_hint<G, I>(
    generators: I,
    root: G,
    expected: usize,
) -> Result<CayleyGraph<G>, BuildError>
where
    G: GroupElement,
    I: IntoIterator<Item = G>,
{
    let token = CancelToken::new();
    match expand(generators, root, expected, &token, &mut |_| {})? {
        Outcome::Finished(graph) => Ok(graph),
        Outcome::Cancelled(_) => unreachable!("token is private to this call"),
    }
}

/// A reusable builder with progress listeners and cooperative cancellation.
///
/// ```
/// use cayley_builder::{ObservableBuilder, ProgressEvent};
/// use cayley_group::Permutation;
///
/// let mut builder = ObservableBuilder::new();
/// builder.add_listener(|event| {
///     if let ProgressEvent::BeforeFinish = event {
///         // about to freeze the graph
///     }
/// });
/// let graph = builder
///     .build([Permutation::transposition(4, 0, 1)], Permutation::one(4))
///     .unwrap();
/// assert_eq!(graph.vertex_count(), 2);
/// ```
pub struct ObservableBuilder<G> {
    listeners: Vec<Box<dyn FnMut(ProgressEvent)>>,
    token: CancelToken,
    expected: usize,
    partial: Option<CayleyGraph<G>>,
}

impl<G: GroupElement> Default for ObservableBuilder<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: GroupElement> ObservableBuilder<G> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            token: CancelToken::new(),
            expected: 0,
            partial: None,
        }
    }

    /// Preallocate for `expected` vertices.
    #[must_use]
    pub fn with_size_hint(mut self, expected: usize) -> Self {
        self.expected = expected;
        self
    }

    /// Register a progress listener; listeners are invoked synchronously,
    /// in registration order, and must not block.
    pub fn add_listener(&mut self, listener: impl FnMut(ProgressEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// A clonable handle onto this builder's cancellation flag.
    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Set the cancellation flag; a build in progress stops at its next
    /// sample point.
    pub fn terminate(&self) {
        self.token.cancel();
    }

    /// Run the breadth-first expansion.
    ///
    /// On cancellation the partially built (unfinished but consistent)
    /// graph is retained and can be taken with
    /// [`into_partial`](Self::into_partial).
    pub fn build<I>(&mut self, generators: I, root: G) -> Result<CayleyGraph<G>, BuildError>
    where
        I: IntoIterator<Item = G>,
    {
        self.partial = None;
        let listeners = &mut self.listeners;
        let mut emit = |event: ProgressEvent| {
            for listener in listeners.iter_mut() {
                listener(event);
            }
        };
        match expand(generators, root, self.expected, &self.token, &mut emit)? {
            Outcome::Finished(graph) => Ok(graph),
            Outcome::Cancelled(graph) => {
                self.partial = Some(graph);
                Err(Report::new(BuildError::Cancelled))
            }
        }
    }

    /// The partial graph left behind by a cancelled build.
    #[must_use]
    pub fn partial(&self) -> Option<&CayleyGraph<G>> {
        self.partial.as_ref()
    }

    /// Take ownership of the partial graph left behind by a cancelled
    /// build.
    #[must_use]
    pub fn into_partial(self) -> Option<CayleyGraph<G>> {
        self.partial
    }
}

enum Outcome<G> {
    Finished(CayleyGraph<G>),
    Cancelled(CayleyGraph<G>),
}

/// Close the generating set under inverse and number the colors.
///
/// Returns the ordered generator list together with the color involution
/// `c ↦ c⁻¹`. Inverses that are missing from the input are appended behind
/// it, so the caller's ordering is preserved.
fn close_under_inverse<G: GroupElement>(
    generators: impl IntoIterator<Item = G>,
) -> Result<(Vec<G>, Vec<Color>), BuildError> {
    let mut set: IndexSet<G> = generators.into_iter().collect();
    let mut cursor = 0;
    while cursor < set.len() {
        let inverse = set[cursor].inverse();
        if !set[cursor].is_operational_with(&inverse) {
            return Err(Report::new(BuildError::GeneratorSetNotInvertible));
        }
        set.insert(inverse);
        cursor += 1;
    }

    let involution = set
        .iter()
        .map(|g| {
            set.get_index_of(&g.inverse())
                .map(Color::new)
                .ok_or_else(|| Report::new(BuildError::GeneratorSetNotInvertible))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok((set.into_iter().collect(), involution))
}

fn expand<G: GroupElement>(
    generators: impl IntoIterator<Item = G>,
    root: G,
    expected: usize,
    token: &CancelToken,
    emit: &mut dyn FnMut(ProgressEvent),
) -> Result<Outcome<G>, BuildError> {
    let (generators, inverse_colors) = close_under_inverse(generators)?;
    for generator in &generators {
        if let Err(error) = root.checked_right_mul(generator) {
            return Err(Report::new(error).change_context(BuildError::GroupArithmeticFailure));
        }
    }

    let color_count = generators.len();
    let mut graph = CayleyGraph::with_capacity(
        generators.clone(),
        inverse_colors.clone(),
        root,
        expected,
    );
    graph.close_shell();

    // pending_generators(v): the colors not yet attempted from v
    let mut all_colors = FixedBitSet::with_capacity(color_count);
    all_colors.set_range(.., true);
    let mut pending = alloc::vec![all_colors.clone()];

    let mut frontier = 0..1_usize;
    loop {
        for v in frontier.clone() {
            if token.is_cancelled() {
                return Ok(Outcome::Cancelled(graph));
            }
            for c in 0..color_count {
                if token.is_cancelled() {
                    return Ok(Outcome::Cancelled(graph));
                }
                if !pending[v].contains(c) {
                    continue;
                }
                pending[v].set(c, false);

                let source = graph.vertex_at_index(VertexIndex::new(v)).clone();
                let product = match source.checked_right_mul(&generators[c]) {
                    Ok(product) => product,
                    Err(error) => {
                        return Err(
                            Report::new(error).change_context(BuildError::GroupArithmeticFailure)
                        );
                    }
                };

                let w = match graph.index_of(&product) {
                    Some(w) => w,
                    None => {
                        let w = graph.add_vertex(product).expect("graph is not finished");
                        pending.push(all_colors.clone());
                        let count = graph.vertex_count();
                        if count % VERTEX_GRANULARITY == 0 {
                            emit(ProgressEvent::Vertices(count));
                        }
                        w
                    }
                };
                if graph.add_edge(VertexIndex::new(v), w, Color::new(c)) {
                    let inverse = inverse_colors[c];
                    pending[w.index()].set(inverse.index(), false);
                    let count = graph.edge_count();
                    if count % EDGE_GRANULARITY == 0 {
                        emit(ProgressEvent::Edges(count));
                    }
                }
            }
        }

        let next = frontier.end..graph.vertex_count();
        if next.is_empty() {
            break;
        }
        graph.close_shell();
        frontier = next;
    }

    emit(ProgressEvent::BeforeFinish);
    graph.finish();
    emit(ProgressEvent::AfterFinish);
    Ok(Outcome::Finished(graph))
}

#[cfg(test)]
mod tests {
    use alloc::{rc::Rc, vec};
    use core::cell::RefCell;

    use cayley_arith::Matrix;
    use cayley_group::{GeneralLinear, Permutation};

    use super::*;

    #[test]
    fn symmetric_group_on_three_letters() {
        let s = Permutation::transposition(3, 0, 1);
        let t = Permutation::transposition(3, 1, 2);
        let graph = build_cayley_graph([s, t], Permutation::one(3)).unwrap();

        assert!(graph.is_finished());
        assert_eq!(graph.vertex_count(), 6);
        assert_eq!(graph.edge_count(), 6);
        assert_eq!(graph.max_distance_from_root(), 3);
        let sizes: Vec<_> = (0..=3).map(|d| graph.shell(d).len()).collect();
        assert_eq!(sizes, vec![1, 2, 2, 1]);
    }

    #[test]
    fn generator_set_is_closed_under_inverse() {
        // a 3-cycle is not its own inverse; the builder must add it
        let c = Permutation::from_cycles(3, &[&[0, 1, 2]]);
        let graph = build_cayley_graph([c.clone()], Permutation::one(3)).unwrap();
        assert_eq!(graph.generators().len(), 2);
        assert_eq!(graph.generators()[1], c.inverse());
        assert_eq!(graph.inverse_color(cayley_graph::Color::new(0)).index(), 1);
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn neighbor_distances_differ_by_at_most_one() {
        let graph = build_cayley_graph(
            [
                Permutation::transposition(4, 0, 1),
                Permutation::transposition(4, 1, 2),
                Permutation::transposition(4, 2, 3),
            ],
            Permutation::one(4),
        )
        .unwrap();
        assert_eq!(graph.vertex_count(), 24);
        for v in 0..graph.vertex_count() {
            let v = VertexIndex::new(v);
            let d = graph.distance_from_root(v);
            for u in graph.neighbors(v) {
                let e = graph.distance_from_root(u);
                assert!(d.abs_diff(e) <= 1);
            }
            if v.index() != 0 {
                assert!(graph.neighbors_in_previous_shell(v).next().is_some());
            }
        }
    }

    #[test]
    fn matrix_group_component() {
        // upper triangular shear generates a cycle of length q in GL_2(F_q)
        let q = 7;
        let shear = GeneralLinear::new(Matrix::from_rows([[1, 1], [0, 1]]), q).unwrap();
        let graph = build_cayley_graph([shear.clone()], shear.identity()).unwrap();
        assert_eq!(graph.vertex_count(), 7);
        // 7-cycle: every vertex has degree 2
        for v in 0..7 {
            assert_eq!(graph.neighbors(VertexIndex::new(v)).count(), 2);
        }
    }

    #[test]
    fn mismatched_generators_fail() {
        let a = Permutation::one(3);
        let bad = Permutation::transposition(4, 0, 1);
        let error = build_cayley_graph([bad], a).unwrap_err();
        assert_eq!(
            *error.current_context(),
            BuildError::GroupArithmeticFailure
        );
    }

    #[test]
    fn cancellation_leaves_partial_graph() {
        let mut builder = ObservableBuilder::new();
        builder.terminate();
        let error = builder
            .build(
                vec![
                    Permutation::transposition(5, 0, 1),
                    Permutation::transposition(5, 1, 2),
                    Permutation::transposition(5, 2, 3),
                    Permutation::transposition(5, 3, 4),
                ],
                Permutation::one(5),
            )
            .unwrap_err();
        assert_eq!(*error.current_context(), BuildError::Cancelled);

        let partial = builder.into_partial().expect("partial graph retained");
        assert!(!partial.is_finished());
        assert_eq!(partial.vertex_count(), 1);
    }

    #[test]
    fn listeners_observe_finish_bracket() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let mut builder = ObservableBuilder::new();
        builder.add_listener(move |event| sink.borrow_mut().push(event));
        builder
            .build(
                [Permutation::transposition(3, 0, 1)],
                Permutation::one(3),
            )
            .unwrap();

        let events = events.borrow();
        let before = events
            .iter()
            .position(|&e| e == ProgressEvent::BeforeFinish)
            .expect("before-finish emitted");
        let after = events
            .iter()
            .position(|&e| e == ProgressEvent::AfterFinish)
            .expect("after-finish emitted");
        assert_eq!(after, before + 1);
    }

    #[test]
    fn vertex_progress_fires_on_granularity() {
        // S_5 has 120 elements, crossing the 100-vertex milestone
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let mut builder = ObservableBuilder::new();
        builder.add_listener(move |event| {
            if let ProgressEvent::Vertices(count) = event {
                sink.borrow_mut().push(count);
            }
        });
        let graph = builder
            .build(
                vec![
                    Permutation::from_cycles(5, &[&[0, 1, 2, 3, 4]]),
                    Permutation::transposition(5, 0, 1),
                ],
                Permutation::one(5),
            )
            .unwrap();
        assert_eq!(graph.vertex_count(), 120);
        assert_eq!(events.borrow().as_slice(), &[100]);
    }

    #[test]
    fn deterministic_across_runs() {
        let gens = || {
            [
                Permutation::transposition(4, 0, 1),
                Permutation::transposition(4, 1, 2),
                Permutation::transposition(4, 2, 3),
            ]
        };
        let a = build_cayley_graph(gens(), Permutation::one(4)).unwrap();
        let b = build_cayley_graph(gens(), Permutation::one(4)).unwrap();
        assert_eq!(a.vertex_count(), b.vertex_count());
        for v in 0..a.vertex_count() {
            assert_eq!(
                a.vertex_at_index(VertexIndex::new(v)),
                b.vertex_at_index(VertexIndex::new(v))
            );
        }
    }
}
