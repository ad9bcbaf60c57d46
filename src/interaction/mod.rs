use std::io::{self, BufRead, Write};

use indicatif::ProgressBar;
use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::{
    graphs::{
        graph_factory::{GraphFactory, DEFAULT_MAX_WEIGHT},
        matrix_graph::MatrixGraph,
        GraphError, Weight,
    },
    search::{floyd_warshall::AllPairsShortestPaths, path::ShortestPathRequest, PathFinding},
    utility::get_progressbar,
};

pub mod console;
pub mod display;
pub mod input;

use console::Console;
use display::{write_matrix, write_menu, write_path_analysis};
use input::{parse_dimension, parse_vertex, MenuChoice};

/// Malformed user input. Recovered by the session, never fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a valid number.")]
    InvalidNumber,
    #[error("Please enter a positive number.")]
    NonPositiveDimension,
    #[error("Please enter a number no larger than {max_dimension}.")]
    DimensionTooLarge { max_dimension: u32 },
    #[error("Please enter valid numbers.")]
    InvalidVertex,
    #[error("Please enter a number between 0 and {max_vertex}")]
    VertexOutOfRange { max_vertex: u32 },
    #[error("Invalid choice. Please enter 1 or 2.")]
    InvalidChoice,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("input was closed")]
    InputClosed,
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Number of vertices; prompted for if absent.
    pub dimension: Option<u32>,
    pub max_weight: Weight,
    pub show_distances: bool,
    pub show_progress: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            dimension: None,
            max_weight: DEFAULT_MAX_WEIGHT,
            show_distances: false,
            show_progress: false,
        }
    }
}

/// Generates a random graph, computes all shortest paths and answers queries
/// until the user exits or the input is closed.
pub fn run_session<R, W, G>(
    console: &mut Console<R, W>,
    config: &SessionConfig,
    rng: &mut G,
) -> Result<(), SessionError>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    match session(console, config, rng) {
        Err(SessionError::InputClosed) => {
            debug!("input closed, ending session");
            Ok(())
        }
        result => result,
    }
}

fn session<R, W, G>(
    console: &mut Console<R, W>,
    config: &SessionConfig,
    rng: &mut G,
) -> Result<(), SessionError>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    writeln!(
        console.output(),
        "\nWelcome to Floyd-Warshall Algorithm Path Finder"
    )?;
    writeln!(console.output(), "{}", "-".repeat(48))?;

    let number_of_vertices = match config.dimension {
        Some(dimension) => dimension,
        None => read_dimension(console)?,
    };

    let graph =
        GraphFactory::random_matrix_graph(number_of_vertices as usize, config.max_weight, rng)?;
    write_matrix(console.output(), "Adjacency Matrix", &graph)?;

    let bar = if config.show_progress {
        get_progressbar("Computing shortest paths", number_of_vertices as u64)
    } else {
        ProgressBar::hidden()
    };
    let paths = AllPairsShortestPaths::with_progress(&graph, bar);
    if config.show_distances {
        write_matrix(console.output(), "Distance Matrix", paths.distances())?;
    }

    answer_queries(console, &graph, &paths)
}

fn read_dimension<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<u32, SessionError> {
    loop {
        let line = console.prompt("\nEnter n for the dimension of the n x n matrix: ")?;
        match parse_dimension(&line) {
            Ok(dimension) => return Ok(dimension),
            Err(err) => writeln!(console.output(), "Error: {}", err)?,
        }
    }
}

/// Runs the menu loop on an already computed graph.
pub fn answer_queries<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    graph: &MatrixGraph,
    paths: &AllPairsShortestPaths,
) -> Result<(), SessionError> {
    loop {
        write_menu(console.output())?;
        let choice = console.prompt("\nEnter your choice (1-2): ")?;

        let result = match choice.parse::<MenuChoice>() {
            Ok(MenuChoice::Exit) => {
                writeln!(console.output(), "\nThank you for using Path Finder!\n")?;
                return Ok(());
            }
            Ok(MenuChoice::FindShortestPath) => answer_query(console, graph, paths),
            Err(err) => Err(err.into()),
        };

        match result {
            Err(SessionError::Input(err)) => writeln!(console.output(), "Error: {}", err)?,
            result => result?,
        }
    }
}

fn answer_query<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    graph: &MatrixGraph,
    paths: &AllPairsShortestPaths,
) -> Result<(), SessionError> {
    let number_of_vertices = graph.number_of_vertices();
    let max_vertex = number_of_vertices - 1;

    writeln!(console.output(), "\nEnter vertex numbers:")?;
    let line = console.prompt(&format!("From vertex (0-{}): ", max_vertex))?;
    let source = parse_vertex(&line, number_of_vertices)?;
    let line = console.prompt(&format!("To vertex (0-{}): ", max_vertex))?;
    let target = parse_vertex(&line, number_of_vertices)?;

    let request = ShortestPathRequest { source, target };
    debug!(?request, "answering shortest path query");

    let direct_weight = graph.get_edge_weight(request.source, request.target);
    let path = paths.shortest_path(request.source, request.target);
    write_path_analysis(console.output(), direct_weight, path.as_ref())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{console::Console, run_session, SessionConfig};

    fn run(input: &[u8], config: &SessionConfig) -> String {
        let mut console = Console::new(input, Vec::new());
        let mut rng = StdRng::seed_from_u64(42);
        run_session(&mut console, config, &mut rng).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn reprompts_for_dimension() {
        let out = run(b"abc\n0\n-2\n2\n2\n", &SessionConfig::default());

        assert!(out.contains("Error: Please enter a valid number."));
        assert_eq!(out.matches("Error: Please enter a positive number.").count(), 2);
        assert!(out.contains("Adjacency Matrix:"));
        assert!(out.ends_with("Thank you for using Path Finder!\n\n"));
    }

    #[test]
    fn preset_dimension_skips_prompt() {
        let config = SessionConfig {
            dimension: Some(3),
            show_distances: true,
            ..SessionConfig::default()
        };
        let out = run(b"2\n", &config);

        assert!(!out.contains("Enter n for the dimension"));
        assert!(out.contains("Distance Matrix:"));
    }

    #[test]
    fn closed_input_ends_session() {
        let out = run(b"3\n1\n", &SessionConfig::default());
        assert!(out.contains("From vertex (0-2): "));
        assert!(!out.contains("Thank you"));
    }

    #[test]
    fn huge_dimension_is_rejected() {
        let out = run(b"4000000000\n1001\n2\n2\n", &SessionConfig::default());

        assert_eq!(
            out.matches("Error: Please enter a number no larger than 1000.")
                .count(),
            2
        );
        assert!(out.contains("Adjacency Matrix:"));
        assert!(out.ends_with("Thank you for using Path Finder!\n\n"));
    }

    #[test]
    fn invalid_utf8_dimension_is_reprompted() {
        let out = run(b"\xff\xfe\n2\n2\n", &SessionConfig::default());

        assert!(out.contains("Error: Please enter a valid number."));
        assert!(out.ends_with("Thank you for using Path Finder!\n\n"));
    }
}
