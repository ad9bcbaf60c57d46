use crate::graphs::{matrix_graph::MatrixGraph, Distance, Vertex};

/// Represents a request for finding a shortest path in a graph.
///
/// This struct is used to encapsulate the information required to find a path
/// from a source vertex to a target vertex in a graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPathRequest {
    pub source: Vertex,
    pub target: Vertex,
}

impl ShortestPathRequest {
    /// Returns `None` unless both vertices lie in `[0, number_of_vertices)`.
    pub fn new(
        source: Vertex,
        target: Vertex,
        number_of_vertices: u32,
    ) -> Option<ShortestPathRequest> {
        if source >= number_of_vertices || target >= number_of_vertices {
            return None;
        }

        Some(ShortestPathRequest { source, target })
    }
}

/// Represents a path in a graph.
///
/// This struct encapsulates the vertices that form a path in the graph, both
/// endpoints included, and the total distance of traversing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    pub vertices: Vec<Vertex>,
    pub distance: Distance,
}

/// Checks that consecutive path vertices are joined by edges of `graph` and
/// that the edge weights add up to the distance of the path.
pub fn validate_path(graph: &MatrixGraph, path: &Path) -> Result<(), String> {
    if path.vertices.len() < 2 {
        return Err("path needs at least a source and a target".to_string());
    }

    let mut weight: Distance = 0;
    for (&tail, &head) in path.vertices.iter().zip(path.vertices.iter().skip(1)) {
        let edge_weight = graph
            .get_edge_weight(tail, head)
            .ok_or_else(|| format!("no edge between {} and {} found", tail, head))?;
        weight = weight
            .checked_add(edge_weight)
            .ok_or_else(|| "path weight overflows".to_string())?;
    }

    if weight != path.distance {
        return Err(format!(
            "wrong path distance: edges sum to {} but path claims {}",
            weight, path.distance
        ));
    }

    Ok(())
}
