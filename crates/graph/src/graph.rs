use alloc::{vec, vec::Vec};
use core::ops::Range;

use cayley_group::GroupElement;
use hashbrown::HashMap;

use crate::{Color, VertexIndex};

/// A rooted undirected graph with insertion-indexed vertices, shell
/// boundaries and generator-colored edges.
///
/// Invariants maintained through construction:
///
/// * adjacency is symmetric: `neighbors(u)` contains `v` iff `neighbors(v)`
///   contains `u`;
/// * the entry for `v` in `neighbors(u)` carries the color `c` with
///   `u · generator(c) = v`, and the reverse entry carries
///   `inverse_color(c)`;
/// * `shell_start` is strictly increasing and starts at 0, so every vertex
///   belongs to exactly one shell;
/// * no multi-edges: at most one edge per unordered vertex pair.
#[derive(Debug, Clone)]
pub struct CayleyGraph<G> {
    generators: Vec<G>,
    inverse_colors: Vec<Color>,
    vertices: Vec<G>,
    index: HashMap<G, VertexIndex>,
    adjacency: Vec<Vec<(VertexIndex, Color)>>,
    edges: HashMap<(VertexIndex, VertexIndex), Color>,
    shell_start: Vec<usize>,
    edge_count: usize,
    finished: bool,
}

impl<G: GroupElement> CayleyGraph<G> {
    /// An empty graph holding only the root, with the given generator list
    /// and color involution.
    ///
    /// # Panics
    ///
    /// Panics when `inverse_colors` is not an involution of the generator
    /// positions.
    #[must_use]
    pub fn new(generators: Vec<G>, inverse_colors: Vec<Color>, root: G) -> Self {
        Self::with_capacity(generators, inverse_colors, root, 0)
    }

    /// Like [`new`](Self::new), but preallocating for `expected` vertices.
    #[must_use]
    pub fn with_capacity(
        generators: Vec<G>,
        inverse_colors: Vec<Color>,
        root: G,
        expected: usize,
    ) -> Self {
        assert_eq!(generators.len(), inverse_colors.len());
        for (c, &inv) in inverse_colors.iter().enumerate() {
            assert_eq!(
                inverse_colors[inv.index()].index(),
                c,
                "inverse colors must form an involution"
            );
        }
        let mut graph = Self {
            generators,
            inverse_colors,
            vertices: Vec::with_capacity(expected),
            index: HashMap::with_capacity(expected),
            adjacency: Vec::with_capacity(expected),
            edges: HashMap::new(),
            shell_start: vec![0],
            edge_count: 0,
            finished: false,
        };
        graph.push_vertex(root);
        graph
    }

    fn push_vertex(&mut self, element: G) -> VertexIndex {
        let index = VertexIndex::new(self.vertices.len());
        self.index.insert(element.clone(), index);
        self.vertices.push(element);
        self.adjacency.push(Vec::new());
        index
    }

    /// Insert a vertex, returning its index; refuses duplicates and
    /// modification after [`finish`](Self::finish).
    pub fn add_vertex(&mut self, element: G) -> Option<VertexIndex> {
        if self.finished || self.index.contains_key(&element) {
            return None;
        }
        Some(self.push_vertex(element))
    }

    /// Insert an undirected edge between `u` and `v`, colored by the
    /// generator that maps `u` to `v`.
    ///
    /// Returns `false` (leaving the graph unchanged) after `finish`, when
    /// either endpoint is unknown, or when the edge already exists.
    pub fn add_edge(&mut self, u: VertexIndex, v: VertexIndex, color: Color) -> bool {
        if self.finished
            || u.index() >= self.vertices.len()
            || v.index() >= self.vertices.len()
        {
            return false;
        }
        let key = if u <= v { (u, v) } else { (v, u) };
        if self.edges.contains_key(&key) {
            return false;
        }
        let stored = if u <= v { color } else { self.inverse_color(color) };
        self.edges.insert(key, stored);
        self.adjacency[u.index()].push((v, color));
        if u != v {
            let inv = self.inverse_color(color);
            self.adjacency[v.index()].push((u, inv));
        }
        self.edge_count += 1;
        true
    }

    /// Mark the boundary between the current shell and the next one.
    ///
    /// Returns `false` when no vertex was added since the previous boundary
    /// or the graph is finished.
    pub fn close_shell(&mut self) -> bool {
        let len = self.vertices.len();
        if self.finished || *self.shell_start.last().expect("never empty") >= len {
            return false;
        }
        self.shell_start.push(len);
        true
    }

    /// Freeze the graph: sorts every neighbor list by vertex index so the
    /// iteration order is deterministic, then refuses all further
    /// modification. Returns `false` when already finished.
    pub fn finish(&mut self) -> bool {
        if self.finished {
            return false;
        }
        for list in &mut self.adjacency {
            list.sort_unstable_by_key(|&(v, _)| v);
        }
        self.finished = true;
        true
    }

    /// Whether [`finish`](Self::finish) has been called.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// The generator list; edge colors index into it.
    #[must_use]
    pub fn generators(&self) -> &[G] {
        &self.generators
    }

    /// The generator a color stands for.
    #[must_use]
    pub fn generator(&self, color: Color) -> &G {
        &self.generators[color.index()]
    }

    /// The color of the inverse generator.
    #[must_use]
    pub fn inverse_color(&self, color: Color) -> Color {
        self.inverse_colors[color.index()]
    }

    /// The root element (vertex 0).
    #[must_use]
    pub fn root(&self) -> &G {
        &self.vertices[0]
    }

    #[must_use]
    pub fn contains_vertex(&self, element: &G) -> bool {
        self.index.contains_key(element)
    }

    /// The insertion index of an element, if present.
    #[must_use]
    pub fn index_of(&self, element: &G) -> Option<VertexIndex> {
        self.index.get(element).copied()
    }

    /// The element at an insertion index.
    #[must_use]
    pub fn vertex_at_index(&self, index: VertexIndex) -> &G {
        &self.vertices[index.index()]
    }

    /// The elements with insertion indices in `range`, in index order.
    #[must_use]
    pub fn elements(&self, range: Range<usize>) -> &[G] {
        &self.vertices[range]
    }

    #[must_use]
    pub fn has_edge(&self, u: VertexIndex, v: VertexIndex) -> bool {
        let key = if u <= v { (u, v) } else { (v, u) };
        self.edges.contains_key(&key)
    }

    /// The color of the edge from `u` to `v`, if present: the `c` with
    /// `u · generator(c) = v`.
    #[must_use]
    pub fn edge_color(&self, u: VertexIndex, v: VertexIndex) -> Option<Color> {
        let key = if u <= v { (u, v) } else { (v, u) };
        let &stored = self.edges.get(&key)?;
        Some(if u <= v { stored } else { self.inverse_color(stored) })
    }

    /// The neighbors of `v` in iteration order (sorted by index once the
    /// graph is finished).
    pub fn neighbors(&self, v: VertexIndex) -> impl Iterator<Item = VertexIndex> + '_ {
        self.adjacency[v.index()].iter().map(|&(u, _)| u)
    }

    /// The neighbors of `v` with the color of the connecting edge as seen
    /// from `v`.
    #[must_use]
    pub fn neighbor_entries(&self, v: VertexIndex) -> &[(VertexIndex, Color)] {
        &self.adjacency[v.index()]
    }

    /// The unique neighbor reached from `v` along `color`, if any.
    #[must_use]
    pub fn neighbor_at_color(&self, v: VertexIndex, color: Color) -> Option<VertexIndex> {
        self.adjacency[v.index()]
            .iter()
            .find(|&&(_, c)| c == color)
            .map(|&(u, _)| u)
    }

    /// The breadth-first distance of `v` from the root: a binary search of
    /// the shell boundaries.
    #[must_use]
    pub fn distance_from_root(&self, v: VertexIndex) -> usize {
        let idx = v.index();
        debug_assert!(idx < self.vertices.len());
        self.shell_start.partition_point(|&start| start <= idx) - 1
    }

    /// The largest distance with a non-empty shell.
    #[must_use]
    pub fn max_distance_from_root(&self) -> usize {
        // a trailing boundary equal to the vertex count delimits an empty
        // open shell
        let trailing_empty = *self.shell_start.last().expect("never empty")
            == self.vertices.len();
        self.shell_start.len() - 1 - usize::from(trailing_empty)
    }

    /// The index range of shell `d` (empty for `d` beyond the last shell).
    #[must_use]
    pub fn shell_range(&self, d: usize) -> Range<usize> {
        let len = self.vertices.len();
        let start = self.shell_start.get(d).copied().unwrap_or(len);
        let end = self.shell_start.get(d + 1).copied().unwrap_or(len);
        start..end
    }

    /// The elements at distance `d` from the root, in discovery order.
    #[must_use]
    pub fn shell(&self, d: usize) -> &[G] {
        &self.vertices[self.shell_range(d)]
    }

    fn neighbors_at_distance(
        &self,
        v: VertexIndex,
        d: Option<usize>,
    ) -> impl Iterator<Item = VertexIndex> + '_ {
        let range = d.map_or(0..0, |d| self.shell_range(d));
        self.neighbors(v).filter(move |u| range.contains(&u.index()))
    }

    /// The neighbors of `v` one shell closer to the root.
    pub fn neighbors_in_previous_shell(
        &self,
        v: VertexIndex,
    ) -> impl Iterator<Item = VertexIndex> + '_ {
        self.neighbors_at_distance(v, self.distance_from_root(v).checked_sub(1))
    }

    /// The neighbors of `v` in the same shell.
    pub fn neighbors_in_same_shell(
        &self,
        v: VertexIndex,
    ) -> impl Iterator<Item = VertexIndex> + '_ {
        self.neighbors_at_distance(v, Some(self.distance_from_root(v)))
    }

    /// The neighbors of `v` one shell further from the root.
    pub fn neighbors_in_next_shell(
        &self,
        v: VertexIndex,
    ) -> impl Iterator<Item = VertexIndex> + '_ {
        self.neighbors_at_distance(v, Some(self.distance_from_root(v) + 1))
    }

    /// The colors of a geodesic from `v` down to the root, in traversal
    /// order (first entry leaves `v`). Ties between parents are broken by
    /// neighbor iteration order.
    ///
    /// Every non-root vertex of a breadth-first component has a neighbor in
    /// the previous shell, so the walk always terminates.
    #[must_use]
    pub fn shortest_path_to_root(&self, v: VertexIndex) -> Vec<Color> {
        let mut word = Vec::with_capacity(self.distance_from_root(v));
        let mut current = v;
        while current.index() != 0 {
            let parent = self
                .neighbors_in_previous_shell(current)
                .next()
                .expect("non-root vertices have a parent shell neighbor");
            let color = self
                .edge_color(current, parent)
                .expect("parent is a neighbor");
            word.push(color);
            current = parent;
        }
        word
    }
}

#[cfg(test)]
mod tests {
    use cayley_group::Permutation;

    use super::*;

    /// A 6-cycle: the Cayley graph of S_3 under two transpositions, built
    /// by hand in breadth-first order.
    fn six_cycle() -> CayleyGraph<Permutation> {
        let s = Permutation::transposition(3, 0, 1);
        let t = Permutation::transposition(3, 1, 2);
        let root = Permutation::one(3);
        let generators = vec![s.clone(), t.clone()];
        // transpositions are their own inverses
        let inverse_colors = vec![Color::new(0), Color::new(1)];
        let mut graph = CayleyGraph::new(generators, inverse_colors, root.clone());
        graph.close_shell();

        let a = graph.add_vertex(root.right_mul(&s)).unwrap();
        let b = graph.add_vertex(root.right_mul(&t)).unwrap();
        graph.add_edge(VertexIndex::new(0), a, Color::new(0));
        graph.add_edge(VertexIndex::new(0), b, Color::new(1));
        graph.close_shell();

        let st = graph.add_vertex(root.right_mul(&s).right_mul(&t)).unwrap();
        let ts = graph.add_vertex(root.right_mul(&t).right_mul(&s)).unwrap();
        graph.add_edge(a, st, Color::new(1));
        graph.add_edge(b, ts, Color::new(0));
        graph.close_shell();

        let sts = graph
            .add_vertex(root.right_mul(&s).right_mul(&t).right_mul(&s))
            .unwrap();
        graph.add_edge(st, sts, Color::new(0));
        graph.add_edge(ts, sts, Color::new(1));
        graph.close_shell();

        graph.finish();
        graph
    }

    #[test]
    fn shells_and_distances() {
        let graph = six_cycle();
        assert_eq!(graph.vertex_count(), 6);
        assert_eq!(graph.edge_count(), 6);
        assert_eq!(graph.max_distance_from_root(), 3);
        let sizes: Vec<_> = (0..=3).map(|d| graph.shell(d).len()).collect();
        assert_eq!(sizes, vec![1, 2, 2, 1]);
        assert_eq!(graph.distance_from_root(VertexIndex::new(0)), 0);
        assert_eq!(graph.distance_from_root(VertexIndex::new(2)), 1);
        assert_eq!(graph.distance_from_root(VertexIndex::new(5)), 3);
    }

    #[test]
    fn adjacency_is_symmetric_and_sorted() {
        let graph = six_cycle();
        for v in 0..graph.vertex_count() {
            let v = VertexIndex::new(v);
            let mut previous = None;
            for u in graph.neighbors(v) {
                assert!(graph.neighbors(u).any(|w| w == v));
                assert!(previous.map_or(true, |p| p < u), "unsorted neighbors");
                previous = Some(u);
            }
        }
    }

    #[test]
    fn edge_colors_point_along_generators() {
        let graph = six_cycle();
        for v in 0..graph.vertex_count() {
            let v = VertexIndex::new(v);
            for &(u, c) in graph.neighbor_entries(v) {
                let expected = graph.vertex_at_index(v).right_mul(graph.generator(c));
                assert_eq!(&expected, graph.vertex_at_index(u));
                assert_eq!(graph.edge_color(v, u), Some(c));
            }
        }
    }

    #[test]
    fn frozen_graph_refuses_modification() {
        let mut graph = six_cycle();
        assert!(!graph.finish());
        // an element the graph has never seen is refused all the same
        assert_eq!(graph.add_vertex(Permutation::one(4)), None);
        assert!(!graph.add_edge(VertexIndex::new(0), VertexIndex::new(5), Color::new(0)));
        assert!(!graph.close_shell());
        assert_eq!(graph.vertex_count(), 6);
        assert_eq!(graph.edge_count(), 6);
    }

    #[test]
    fn no_multi_edges() {
        let s = Permutation::transposition(2, 0, 1);
        let root = Permutation::one(2);
        let mut graph = CayleyGraph::new(
            vec![s.clone()],
            vec![Color::new(0)],
            root.clone(),
        );
        graph.close_shell();
        let a = graph.add_vertex(s).unwrap();
        assert!(graph.add_edge(VertexIndex::new(0), a, Color::new(0)));
        assert!(!graph.add_edge(VertexIndex::new(0), a, Color::new(0)));
        assert!(!graph.add_edge(a, VertexIndex::new(0), Color::new(0)));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn shell_relative_neighbor_views() {
        let graph = six_cycle();
        let st = VertexIndex::new(3);
        assert_eq!(
            graph.neighbors_in_previous_shell(st).collect::<Vec<_>>(),
            vec![VertexIndex::new(1)]
        );
        assert_eq!(graph.neighbors_in_same_shell(st).count(), 0);
        assert_eq!(
            graph.neighbors_in_next_shell(st).collect::<Vec<_>>(),
            vec![VertexIndex::new(5)]
        );
    }

    #[test]
    fn path_to_root_is_a_geodesic_word() {
        let graph = six_cycle();
        let far = VertexIndex::new(5);
        let word = graph.shortest_path_to_root(far);
        assert_eq!(word.len(), 3);
        // replaying the word from the far vertex lands on the root
        let mut element = graph.vertex_at_index(far).clone();
        for color in word {
            element = element.right_mul(graph.generator(color));
        }
        assert_eq!(&element, graph.root());
    }

    #[test]
    fn lookup_by_element() {
        let graph = six_cycle();
        let s = Permutation::transposition(3, 0, 1);
        assert!(graph.contains_vertex(&s));
        assert_eq!(graph.index_of(&s), Some(VertexIndex::new(1)));
        assert_eq!(graph.elements(1..3).len(), 2);
    }
}
