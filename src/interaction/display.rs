use std::io::{self, Write};

use itertools::Itertools;

use crate::{
    graphs::{Matrix, Vertex, Weight},
    search::path::Path,
};

const CELL_WIDTH: usize = 8;
const INFINITY: &str = "∞";

/// Writes `matrix` with bracketed row and column indices.
pub fn write_matrix<W: Write>(out: &mut W, title: &str, matrix: &dyn Matrix) -> io::Result<()> {
    let number_of_vertices = matrix.number_of_vertices();
    let label_width = format!("[{}]", number_of_vertices.saturating_sub(1)).len() + 1;

    writeln!(out, "\n{}:", title)?;
    write!(out, "\n{:label_width$}", "")?;
    for head in 0..number_of_vertices {
        write!(out, "{:>CELL_WIDTH$}", format!("[{}]", head))?;
    }
    writeln!(out, "\n")?;

    for tail in 0..number_of_vertices {
        write!(out, "{:<label_width$}", format!("[{}]", tail))?;
        for head in 0..number_of_vertices {
            match matrix.entry(tail, head) {
                Some(value) => write!(out, "{:>CELL_WIDTH$}", value)?,
                None => write!(out, "{:>CELL_WIDTH$}", INFINITY)?,
            }
        }
        writeln!(out)?;
    }

    Ok(())
}

pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "-".repeat(43))?;
    writeln!(out, "MENU OPTIONS:")?;
    writeln!(out, "1. Find shortest path between two vertices")?;
    writeln!(out, "2. Exit program")?;
    writeln!(out, "{}", "-".repeat(43))
}

pub fn format_route(vertices: &[Vertex]) -> String {
    vertices
        .iter()
        .map(|vertex| format!("v{}", vertex))
        .join(" -> ")
}

/// Reports the direct edge and the shortest path of a query.
pub fn write_path_analysis<W: Write>(
    out: &mut W,
    direct_weight: Option<Weight>,
    path: Option<&Path>,
) -> io::Result<()> {
    writeln!(out, "\n{}", "-".repeat(40))?;
    writeln!(out, "PATH ANALYSIS RESULTS:")?;

    writeln!(out, "\n1. Direct Path:")?;
    match direct_weight {
        Some(weight) => writeln!(out, "   Weight: {}", weight)?,
        None => writeln!(out, "   No direct connection exists")?,
    }

    writeln!(out, "\n2. Shortest Path:")?;
    match path {
        Some(path) => {
            writeln!(out, "   Route: {}", format_route(&path.vertices))?;
            writeln!(out, "   Total distance: {}", path.distance)?;
        }
        None => writeln!(out, "   No path exists between these vertices")?,
    }

    Ok(())
}
