use rand::Rng;
use tracing::info;

use super::{matrix_graph::MatrixGraph, GraphError, Weight};

/// Upper bound (exclusive) of randomly drawn edge weights.
pub const DEFAULT_MAX_WEIGHT: Weight = 20;

/// Largest number of vertices a random graph may have.
pub const MAX_DIMENSION: u32 = 1_000;

#[derive(Clone)]
pub struct GraphFactory {}

impl GraphFactory {
    /// Generates a random directed graph with `number_of_vertices` vertices.
    ///
    /// Every off-diagonal weight is drawn independently and uniformly from
    /// `[0, max_weight)`. A draw of 0 means there is no edge.
    pub fn random_matrix_graph<R: Rng>(
        number_of_vertices: usize,
        max_weight: Weight,
        rng: &mut R,
    ) -> Result<MatrixGraph, GraphError> {
        if number_of_vertices == 0 {
            return Err(GraphError::NoVertices);
        }
        if number_of_vertices > MAX_DIMENSION as usize {
            return Err(GraphError::TooManyVertices {
                number_of_vertices,
                max_dimension: MAX_DIMENSION,
            });
        }
        if max_weight == 0 {
            return Err(GraphError::EmptyWeightRange);
        }

        let rows = (0..number_of_vertices)
            .map(|tail| {
                (0..number_of_vertices)
                    .map(|head| {
                        if tail == head {
                            return Some(0);
                        }
                        match rng.gen_range(0..max_weight) {
                            0 => None,
                            weight => Some(weight),
                        }
                    })
                    .collect()
            })
            .collect();

        let graph = MatrixGraph::from_rows(rows)?;
        info!(
            vertices = graph.number_of_vertices(),
            edges = graph.number_of_edges(),
            "generated random graph"
        );

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{GraphFactory, MAX_DIMENSION};
    use crate::graphs::GraphError;

    #[test]
    fn random_graph_has_zero_diagonal_and_bounded_weights() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = GraphFactory::random_matrix_graph(12, 20, &mut rng).unwrap();

        for tail in 0..12 {
            assert_eq!(graph.get_edge_weight(tail, tail), Some(0));
            for head in (0..12).filter(|&head| head != tail) {
                if let Some(weight) = graph.get_edge_weight(tail, head) {
                    assert!((1..20).contains(&weight));
                }
            }
        }
    }

    #[test]
    fn same_seed_same_graph() {
        let first = GraphFactory::random_matrix_graph(8, 20, &mut StdRng::seed_from_u64(3));
        let second = GraphFactory::random_matrix_graph(8, 20, &mut StdRng::seed_from_u64(3));
        assert_eq!(first, second);
    }

    #[test]
    fn weight_range_of_one_has_no_edges() {
        let mut rng = StdRng::seed_from_u64(0);
        let graph = GraphFactory::random_matrix_graph(5, 1, &mut rng).unwrap();
        assert_eq!(graph.number_of_edges(), 0);
    }

    #[test]
    fn rejects_empty_inputs() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            GraphFactory::random_matrix_graph(0, 20, &mut rng),
            Err(GraphError::NoVertices)
        );
        assert_eq!(
            GraphFactory::random_matrix_graph(3, 0, &mut rng),
            Err(GraphError::EmptyWeightRange)
        );
        assert_eq!(
            GraphFactory::random_matrix_graph(MAX_DIMENSION as usize + 1, 20, &mut rng),
            Err(GraphError::TooManyVertices {
                number_of_vertices: MAX_DIMENSION as usize + 1,
                max_dimension: MAX_DIMENSION
            })
        );
    }
}
