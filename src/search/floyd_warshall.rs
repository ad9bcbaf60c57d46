use indicatif::{ProgressBar, ProgressIterator};
use tracing::debug;

use super::{
    path::{Path, ShortestPathRequest},
    path_reconstruction::unpack_path,
    PathFinding,
};
use crate::graphs::{matrix_graph::MatrixGraph, Distance, Vertex};

/// Distances and intermediate vertices between every ordered vertex pair.
///
/// `distances[i][j]` is `None` if `j` is unreachable from `i`.
/// `intermediates[i][j]` is a vertex on a shortest `i -> j` path, or `None`
/// if the path is direct, trivial or does not exist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllPairsShortestPaths {
    distances: Vec<Vec<Option<Distance>>>,
    intermediates: Vec<Vec<Option<Vertex>>>,
}

impl AllPairsShortestPaths {
    pub fn new(graph: &MatrixGraph) -> Self {
        Self::with_progress(graph, ProgressBar::hidden())
    }

    /// Runs Floyd-Warshall, ticking `bar` once per intermediate vertex.
    pub fn with_progress(graph: &MatrixGraph, bar: ProgressBar) -> Self {
        let number_of_vertices = graph.number_of_vertices() as usize;
        let mut distances = graph.rows().clone();
        let mut intermediates = vec![vec![None; number_of_vertices]; number_of_vertices];

        bar.set_length(number_of_vertices as u64);
        let mut improvements: u64 = 0;

        // paths using only vertices 0..=k as intermediates
        for k in (0..number_of_vertices).progress_with(bar.clone()) {
            for i in 0..number_of_vertices {
                let Some(i_to_k) = distances[i][k] else {
                    continue;
                };

                for j in 0..number_of_vertices {
                    let Some(k_to_j) = distances[k][j] else {
                        continue;
                    };
                    let Some(via_k) = i_to_k.checked_add(k_to_j) else {
                        continue;
                    };

                    if distances[i][j].map_or(true, |i_to_j| via_k < i_to_j) {
                        distances[i][j] = Some(via_k);
                        intermediates[i][j] = Some(k as Vertex);
                        improvements += 1;
                    }
                }
            }
        }
        bar.finish_and_clear();

        debug!(
            vertices = number_of_vertices,
            improvements, "computed all-pairs shortest paths"
        );

        AllPairsShortestPaths {
            distances,
            intermediates,
        }
    }

    pub fn distance(&self, source: Vertex, target: Vertex) -> Option<Distance> {
        *self.distances.get(source as usize)?.get(target as usize)?
    }

    pub fn intermediate(&self, source: Vertex, target: Vertex) -> Option<Vertex> {
        *self.intermediates.get(source as usize)?.get(target as usize)?
    }

    pub fn distances(&self) -> &Vec<Vec<Option<Distance>>> {
        &self.distances
    }

    pub fn intermediates(&self) -> &Vec<Vec<Option<Vertex>>> {
        &self.intermediates
    }
}

impl PathFinding for AllPairsShortestPaths {
    fn shortest_path(&self, source: Vertex, target: Vertex) -> Option<Path> {
        let request = ShortestPathRequest::new(source, target, self.number_of_vertices())?;
        let distance = self.distance(request.source, request.target)?;
        let vertices = unpack_path(&self.intermediates, request.source, request.target)?;

        Some(Path { vertices, distance })
    }

    fn shortest_path_distance(&self, source: Vertex, target: Vertex) -> Option<Distance> {
        self.distance(source, target)
    }

    fn number_of_vertices(&self) -> u32 {
        self.distances.len() as u32
    }
}
