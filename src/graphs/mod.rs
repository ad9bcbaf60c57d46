use thiserror::Error;

pub mod graph_factory;
pub mod matrix_graph;

pub type Vertex = u32;
pub type Weight = u32;
pub type Distance = u32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("a graph needs at least one vertex")]
    NoVertices,
    #[error("{number_of_vertices} vertices exceed the limit of {max_dimension}")]
    TooManyVertices {
        number_of_vertices: usize,
        max_dimension: u32,
    },
    #[error("the weight range [0, max_weight) must not be empty")]
    EmptyWeightRange,
    #[error("row {row} has {len} entries but the graph has {number_of_vertices} vertices")]
    NotSquare {
        row: usize,
        len: usize,
        number_of_vertices: usize,
    },
    #[error("vertex {0} has a non-zero distance to itself")]
    NonZeroDiagonal(Vertex),
}

/// Weighted matrix view shared by the weight and distance matrices.
///
/// `None` marks an entry without a finite value.
pub trait Matrix {
    fn number_of_vertices(&self) -> u32;

    fn entry(&self, tail: Vertex, head: Vertex) -> Option<u32>;
}

impl Matrix for Vec<Vec<Option<u32>>> {
    fn number_of_vertices(&self) -> u32 {
        self.len() as u32
    }

    fn entry(&self, tail: Vertex, head: Vertex) -> Option<u32> {
        *self.get(tail as usize)?.get(head as usize)?
    }
}
