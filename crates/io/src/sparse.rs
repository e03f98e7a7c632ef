use std::{
    fmt::Display,
    io::{self, BufRead, Write},
};

use cayley_graph::{CayleyGraph, VertexIndex};
use cayley_group::GroupElement;

/// Failure to parse a sparse adjacency file.
#[derive(Debug)]
pub enum ReadError {
    Io(io::Error),
    /// A line is not of the form `row col 1` (1-based line number).
    Malformed {
        line: usize,
    },
}

impl Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(error) => write!(f, "read failed: {error}"),
            Self::Malformed { line } => write!(f, "line {line} is not `row col 1`"),
        }
    }
}

impl std::error::Error for ReadError {}

impl From<io::Error> for ReadError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

/// Write the adjacency matrix in sparse text form: `row col 1` per
/// incidence, 1-based, both triangles, ordered by row then column.
pub fn write_sparse_matrix<G, W>(graph: &CayleyGraph<G>, mut writer: W) -> io::Result<()>
where
    G: GroupElement,
    W: Write,
{
    for u in 0..graph.vertex_count() {
        for v in graph.neighbors(VertexIndex::new(u)) {
            writeln!(writer, "{} {} 1", u + 1, v.index() + 1)?;
        }
    }
    Ok(())
}

/// Write one element per line in vertex index order, so line `i` names the
/// row/column `i + 1` of the sparse matrix file.
pub fn write_element_list<G, W>(graph: &CayleyGraph<G>, mut writer: W) -> io::Result<()>
where
    G: GroupElement + Display,
    W: Write,
{
    for index in 0..graph.vertex_count() {
        writeln!(writer, "{}", graph.vertex_at_index(VertexIndex::new(index)))?;
    }
    Ok(())
}

/// Parse a sparse adjacency file back into its `(row, col)` incidences,
/// 1-based, as written.
pub fn read_sparse_matrix<R: BufRead>(reader: R) -> Result<Vec<(usize, usize)>, ReadError> {
    let mut entries = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let entry = (|| {
            let row = fields.next()?.parse().ok()?;
            let col = fields.next()?.parse().ok()?;
            if fields.next() != Some("1") || fields.next().is_some() {
                return None;
            }
            Some((row, col))
        })();
        match entry {
            Some(pair) => entries.push(pair),
            None => return Err(ReadError::Malformed { line: number + 1 }),
        }
    }
    Ok(entries)
}
