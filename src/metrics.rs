//! A module for computing eccentricity based measurements of a graph.

use serde::Serialize;
use tracing::{debug, trace};

use crate::{distance, graph::Graph};

/// Eccentricity based measurements of a graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GraphMetrics {
    /// The eccentricity of each vertex, indexed by vertex.
    pub eccentricities: Vec<u64>,
    /// The smallest eccentricity.
    pub radius: u64,
    /// The largest eccentricity.
    pub diameter: u64,
    /// Vertices whose eccentricity equals the radius, in increasing order.
    pub central: Vec<usize>,
    /// Vertices whose eccentricity equals the diameter, in increasing order.
    pub peripheral: Vec<usize>,
}

impl GraphMetrics {
    /// Computes the metrics of a graph.
    ///
    /// The radius and diameter are settled over every vertex before membership of the central
    /// and peripheral sets is decided, so the result doesn't depend on the order vertices are
    /// visited in. Comparing each vertex against a running minimum instead would admit vertices
    /// into the central set that a later, smaller eccentricity disqualifies.
    ///
    /// # Examples
    ///
    /// ```
    /// use eccentric::graph::Graph;
    /// use eccentric::metrics::GraphMetrics;
    ///
    /// let graph = Graph::from_rows(&[vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]], false).unwrap();
    /// let metrics = GraphMetrics::compute(&graph);
    ///
    /// assert_eq!(metrics.eccentricities, vec![2, 1, 2]);
    /// assert_eq!(metrics.radius, 1);
    /// assert_eq!(metrics.diameter, 2);
    /// assert_eq!(metrics.central, vec![1]);
    /// assert_eq!(metrics.peripheral, vec![0, 2]);
    /// ```
    pub fn compute(graph: &Graph) -> Self {
        let eccentricities = eccentricities(graph);

        // A graph always has at least one vertex, the fallbacks are never used.
        let radius = eccentricities.iter().copied().min().unwrap_or(0);
        let diameter = eccentricities.iter().copied().max().unwrap_or(0);

        let central = vertices_with(&eccentricities, radius);
        let peripheral = vertices_with(&eccentricities, diameter);

        debug!(
            radius,
            diameter,
            central = central.len(),
            peripheral = peripheral.len(),
            "computed graph metrics"
        );

        Self {
            eccentricities,
            radius,
            diameter,
            central,
            peripheral,
        }
    }

    /// Returns the eccentricity of `vertex`, if it is in range.
    pub fn eccentricity(&self, vertex: usize) -> Option<u64> {
        self.eccentricities.get(vertex).copied()
    }

    pub fn is_central(&self, vertex: usize) -> bool {
        self.central.binary_search(&vertex).is_ok()
    }

    pub fn is_peripheral(&self, vertex: usize) -> bool {
        self.peripheral.binary_search(&vertex).is_ok()
    }
}

/// Computes the eccentricity of every vertex by running a traversal from each of them.
///
/// The eccentricity of a vertex is the largest finite distance from it, unreachable vertices are
/// ignored and a vertex that reaches nothing has an eccentricity of 0.
pub fn eccentricities(graph: &Graph) -> Vec<u64> {
    (0..graph.vertex_count())
        .map(|source| {
            let eccentricity = distance::bfs_distances(graph, source).eccentricity();
            trace!(source, eccentricity, "computed eccentricity");

            eccentricity
        })
        .collect()
}

//
// Helpers
//

/// Returns the vertices whose eccentricity equals `target`.
fn vertices_with(eccentricities: &[u64], target: u64) -> Vec<usize> {
    eccentricities
        .iter()
        .enumerate()
        .filter(|(_, &e)| e == target)
        .map(|(vertex, _)| vertex)
        .collect()
}
