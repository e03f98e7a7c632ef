//! **cayley** builds and analyzes Cayley graphs of finite groups.
//!
//! The central flow: pick a group family from [`catalog`], hand the
//! generating set and a root element to [`build_cayley_graph`], and feed
//! the resulting [`CayleyGraph`] to [`analyze`] for its shell expansion
//! profile (shell sizes, girth, bipartiteness, diameter).
//!
//! ```
//! use cayley::{analyze, build_cayley_graph, catalog, Girth, Permutation};
//!
//! let generators = catalog::adjacent_transpositions(4)?;
//! let graph = build_cayley_graph(generators, Permutation::one(4)).unwrap();
//! let report = analyze(&graph).unwrap();
//!
//! assert_eq!(graph.vertex_count(), 24);
//! assert_eq!(report.shell_sizes, vec![1, 3, 5, 6, 5, 3, 1]);
//! assert_eq!(report.girth, Girth::Cycle(4));
//! assert!(report.bipartite);
//! # Ok::<(), cayley::CatalogError>(())
//! ```
//!
//! The group element families live in [`group`]; the LPS Ramanujan
//! generator construction is [`catalog::lps_generators`]. Everything is
//! generic over the [`GroupElement`] trait, so client-defined finite
//! groups plug into the same builder.

pub use cayley_analysis::{analyze, AnalysisError, Girth, ShellReport};
pub use cayley_arith::{ArithmeticError, ByteField, Matrix, MatrixError};
pub use cayley_builder::{
    build_cayley_graph, build_cayley_graph_with_size_hint, BuildError, CancelToken,
    ObservableBuilder, ProgressEvent,
};
pub use cayley_catalog::CatalogError;
pub use cayley_graph::{CayleyGraph, Color, VertexIndex};
pub use cayley_group::{
    ByteGeneralLinear, GeneralLinear, GroupElement, GroupError, LipschitzQuaternion, Permutation,
    ProjectiveLinear, ProjectiveQuaternion, ReducedQuaternion,
};

pub mod arith {
    //! Scalar and matrix arithmetic over F_q.
    pub use cayley_arith::{byte_field, matrix, modular};
}

pub mod catalog {
    //! Generating sets for named group families.
    pub use cayley_catalog::{
        adjacent_transpositions, alternating_pair, gl_pair, gsp_pair, janko_1, lps,
        lps_generators, mathieu_11, mathieu_12, mathieu_22, pgl_pair, pgsp_pair, psl_pair,
        psp_pair, sl_pair, sp_pair, suzuki_8, symmetric_pair, IndexSet,
    };
}

pub mod group {
    //! Group elements as values: the trait and the concrete families.
    pub use cayley_group::{
        commutator, conjugate, element_order, ByteGeneralLinear, GeneralLinear, GroupElement,
        LipschitzQuaternion, Permutation, ProjectiveLinear, ProjectiveQuaternion,
        ReducedQuaternion,
    };
}

pub mod lattice {
    //! Integer points of Z³ under the cube symmetry group.
    pub use cayley_lattice::{
        bc3_orbit, classify, fundamental_points_on_sphere, fundamental_representative,
        octahedral_orbit, points_on_sphere, OrbitClass, Point3,
    };
}

#[cfg(feature = "io")]
pub mod io {
    //! Sparse-matrix and element-list text adapters.
    pub use cayley_io::{
        read_sparse_matrix, write_element_list, write_sparse_matrix, ReadError,
    };
}

pub mod prelude {
    //! Commonly used items.
    //!
    //! ```
    //! use cayley::prelude::*;
    //! ```
    pub use crate::{
        analyze, build_cayley_graph, build_cayley_graph_with_size_hint, CayleyGraph, Color,
        GeneralLinear, Girth, GroupElement, ObservableBuilder, Permutation, ProjectiveLinear,
        ShellReport, VertexIndex,
    };
}
