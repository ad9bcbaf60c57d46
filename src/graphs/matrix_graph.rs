use serde::{Deserialize, Serialize};

use super::{GraphError, Matrix, Vertex, Weight};

/// Directed graph stored as a dense weight matrix.
///
/// `edges[tail][head]` is `None` if there is no direct edge. The diagonal is
/// always `Some(0)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Option<Weight>>>", into = "Vec<Vec<Option<Weight>>>")]
pub struct MatrixGraph {
    edges: Vec<Vec<Option<Weight>>>, // [tail][head] = Option<Weight>
}

impl Matrix for MatrixGraph {
    fn number_of_vertices(&self) -> u32 {
        self.edges.len() as u32
    }

    fn entry(&self, tail: Vertex, head: Vertex) -> Option<u32> {
        self.get_edge_weight(tail, head)
    }
}

impl TryFrom<Vec<Vec<Option<Weight>>>> for MatrixGraph {
    type Error = GraphError;

    fn try_from(rows: Vec<Vec<Option<Weight>>>) -> Result<Self, Self::Error> {
        MatrixGraph::from_rows(rows)
    }
}

impl From<MatrixGraph> for Vec<Vec<Option<Weight>>> {
    fn from(graph: MatrixGraph) -> Self {
        graph.edges
    }
}

impl MatrixGraph {
    pub fn from_rows(rows: Vec<Vec<Option<Weight>>>) -> Result<MatrixGraph, GraphError> {
        if rows.is_empty() {
            return Err(GraphError::NoVertices);
        }

        let number_of_vertices = rows.len();
        for (row, edges) in rows.iter().enumerate() {
            if edges.len() != number_of_vertices {
                return Err(GraphError::NotSquare {
                    row,
                    len: edges.len(),
                    number_of_vertices,
                });
            }
            if edges[row] != Some(0) {
                return Err(GraphError::NonZeroDiagonal(row as Vertex));
            }
        }

        Ok(MatrixGraph { edges: rows })
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.edges.len() as u32
    }

    pub fn number_of_edges(&self) -> u32 {
        self.edges
            .iter()
            .enumerate()
            .map(|(tail, heads)| {
                heads
                    .iter()
                    .enumerate()
                    .filter(|&(head, weight)| head != tail && weight.is_some())
                    .count() as u32
            })
            .sum()
    }

    /// Weight of the direct edge, `None` for unknown vertices or missing edges.
    pub fn get_edge_weight(&self, tail: Vertex, head: Vertex) -> Option<Weight> {
        *self.edges.get(tail as usize)?.get(head as usize)?
    }

    pub fn rows(&self) -> &Vec<Vec<Option<Weight>>> {
        &self.edges
    }
}
