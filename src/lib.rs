//! Eccentric is a small toolkit for generating random graphs and measuring how far apart their
//! vertices are.
//!
//! # Basic usage
//!
//! The library is centered around the [`Graph`](graph::Graph) structure, an immutable adjacency
//! matrix which can be built from explicit rows, from [`Edge`](edge::Edge) instances or
//! generated at random with [`generate`](generate::generate). Once constructed, distances from
//! any vertex and the eccentricity based metrics of the whole graph can be computed.
//!
//! ```rust
//! use eccentric::edge::Edge;
//! use eccentric::graph::Graph;
//!
//! // A path: 0 - 1 - 2.
//! let graph = Graph::from_edges(3, false, [Edge::new(0, 1), Edge::new(1, 2)]).unwrap();
//!
//! // Distances from a single vertex, `None` marks unreachable vertices.
//! let distances = graph.distances(0);
//! assert_eq!(distances.as_slice(), &[Some(0), Some(1), Some(2)]);
//!
//! // Whole graph metrics.
//! let metrics = graph.metrics();
//! assert_eq!(metrics.radius, 1);
//! assert_eq!(metrics.diameter, 2);
//! assert_eq!(metrics.central, vec![1]);
//! assert_eq!(metrics.peripheral, vec![0, 2]);
//! ```
//!
//! Distances are computed by a breadth-first traversal which adds up edge weights in the order
//! vertices are discovered. On weighted graphs this is not a lightest path search, see
//! [`bfs_distances`](distance::bfs_distances).

use std::io::Write;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

pub mod config;
pub mod distance;
pub mod edge;
pub mod error;
pub mod generate;
pub mod graph;
pub mod metrics;
pub mod report;

pub use crate::{
    config::Config,
    error::{Error, GraphError, Result},
    graph::Graph,
    report::{Format, Report},
};

/// Generates a graph from `config`, measures it and writes the report to `writer`.
///
/// The config is validated before anything is generated or written. When the config carries
/// no seed a random one is picked, it is logged and recorded in the returned report.
///
/// # Examples
///
/// ```
/// use eccentric::{run, Config, Format};
///
/// let config = Config {
///     seed: Some(3),
///     ..Config::new(4, 0)
/// };
///
/// let mut out = Vec::new();
/// let report = run(&config, Format::Text, &mut out).unwrap();
///
/// assert_eq!(report.seed, Some(3));
/// assert_eq!(report.distances.get(0), Some(0));
/// assert!(String::from_utf8(out).unwrap().starts_with("Generated adjacency matrix:"));
/// ```
pub fn run<W: Write>(config: &Config, format: Format, writer: &mut W) -> Result<Report> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(rand::random);
    info!(seed, "seeding graph generator");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let graph = generate::generate(&config.generator_config(), &mut rng)?;

    let report = Report::new(&graph, config.start)?.with_seed(seed);
    info!(
        radius = report.metrics.radius,
        diameter = report.metrics.diameter,
        "measured graph"
    );

    report.write(format, writer)?;

    Ok(report)
}
