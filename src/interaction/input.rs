use std::str::FromStr;

use super::InputError;
use crate::graphs::{graph_factory::MAX_DIMENSION, Vertex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    FindShortestPath,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = InputError;

    fn from_str(choice: &str) -> Result<Self, Self::Err> {
        match choice.trim() {
            "1" => Ok(MenuChoice::FindShortestPath),
            "2" => Ok(MenuChoice::Exit),
            _ => Err(InputError::InvalidChoice),
        }
    }
}

/// Parses the number of vertices of the graph to generate.
pub fn parse_dimension(input: &str) -> Result<u32, InputError> {
    let dimension: i64 = input
        .trim()
        .parse()
        .map_err(|_| InputError::InvalidNumber)?;
    if dimension <= 0 {
        return Err(InputError::NonPositiveDimension);
    }

    if dimension > i64::from(MAX_DIMENSION) {
        return Err(InputError::DimensionTooLarge {
            max_dimension: MAX_DIMENSION,
        });
    }

    Ok(dimension as u32)
}

/// Parses a vertex index in `[0, number_of_vertices)`.
pub fn parse_vertex(input: &str, number_of_vertices: u32) -> Result<Vertex, InputError> {
    let vertex: i64 = input
        .trim()
        .parse()
        .map_err(|_| InputError::InvalidVertex)?;

    if vertex < 0 || vertex >= i64::from(number_of_vertices) {
        return Err(InputError::VertexOutOfRange {
            max_vertex: number_of_vertices.saturating_sub(1),
        });
    }

    Ok(vertex as Vertex)
}
