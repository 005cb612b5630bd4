//! A module for presenting the measurements taken on a graph.

use std::{fmt, io::Write};

use itertools::Itertools;
use serde::Serialize;

use crate::{
    distance::Distances,
    error::{GraphError, Result},
    graph::Graph,
    metrics::GraphMetrics,
};

/// The output formats a report can be written in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// Human readable text.
    #[default]
    Text,
    /// Pretty printed JSON, unreachable distances are `null`.
    Json,
}

/// The adjacency matrix of a graph along with the distances from a start vertex and the graph's
/// metrics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    /// The seed the graph was generated from, if it was generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub directed: bool,
    pub matrix: Vec<Vec<u32>>,
    pub start: usize,
    pub distances: Distances,
    pub metrics: GraphMetrics,
}

impl Report {
    /// Measures `graph` from the `start` vertex.
    ///
    /// # Examples
    ///
    /// ```
    /// use eccentric::graph::Graph;
    /// use eccentric::report::Report;
    ///
    /// let graph = Graph::from_rows(&[vec![0, 0], vec![0, 0]], false).unwrap();
    /// let report = Report::new(&graph, 0).unwrap();
    ///
    /// assert_eq!(report.distances.to_signed(), vec![0, -1]);
    /// assert_eq!(report.metrics.central, vec![0, 1]);
    /// assert!(Report::new(&graph, 2).is_err());
    /// ```
    pub fn new(graph: &Graph, start: usize) -> std::result::Result<Self, GraphError> {
        graph.check_source(start)?;

        Ok(Self {
            seed: None,
            directed: graph.is_directed(),
            matrix: graph.rows(),
            start,
            distances: graph.distances(start),
            metrics: graph.metrics(),
        })
    }

    /// Records the seed the graph was generated from.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Writes the report in the requested format.
    pub fn write<W: Write>(&self, format: Format, writer: &mut W) -> Result<()> {
        match format {
            Format::Text => write!(writer, "{self}")?,
            Format::Json => {
                serde_json::to_writer_pretty(&mut *writer, self)?;
                writeln!(writer)?;
            }
        }

        Ok(())
    }
}

//
// Trait implementations
//

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generated adjacency matrix:")?;
        for row in &self.matrix {
            writeln!(f, "{}", row.iter().map(|w| format!("{w:>2}")).join(" "))?;
        }

        writeln!(f, "Distances from vertex {}:", self.start)?;
        for (vertex, distance) in self.distances.iter().enumerate() {
            match distance {
                Some(distance) => writeln!(f, "Distance to vertex {vertex}: {distance}")?,
                None => writeln!(f, "Distance to vertex {vertex}: unreachable")?,
            }
        }

        writeln!(f)?;
        writeln!(f, "Graph radius: {}", self.metrics.radius)?;
        writeln!(f, "Graph diameter: {}", self.metrics.diameter)?;

        writeln!(f)?;
        writeln!(f, "Central vertices: {}", self.metrics.central.iter().join(" "))?;

        writeln!(f)?;
        writeln!(
            f,
            "Peripheral vertices: {}",
            self.metrics.peripheral.iter().join(" ")
        )
    }
}
