use path::Path;

use crate::graphs::{Distance, Vertex};

pub mod floyd_warshall;
pub mod path;
pub mod path_reconstruction;

pub trait PathFinding {
    fn shortest_path(&self, source: Vertex, target: Vertex) -> Option<Path>;

    fn shortest_path_distance(&self, source: Vertex, target: Vertex) -> Option<Distance>;

    fn number_of_vertices(&self) -> u32;
}
