//! A module for generating random graphs.

use nalgebra::DMatrix;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{edge::UNIT_WEIGHT, error::GraphError, graph::Graph};

/// The probability of any single edge being present when none is configured.
pub const DEFAULT_EDGE_PROBABILITY: f64 = 0.5;
/// The lightest weight a generated weighted edge can carry.
pub const MIN_WEIGHT: u32 = 1;
/// The heaviest weight a generated weighted edge can carry.
pub const MAX_WEIGHT: u32 = 10;

/// Describes the shape of the graphs to generate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub vertices: usize,
    /// Draw edge weights uniformly from `MIN_WEIGHT..=MAX_WEIGHT` instead of using 1.
    pub weighted: bool,
    pub directed: bool,
    /// The probability each candidate edge is present.
    pub edge_probability: f64,
}

impl GeneratorConfig {
    /// Creates a config with the default edge probability.
    pub fn new(vertices: usize, weighted: bool, directed: bool) -> Self {
        Self {
            vertices,
            weighted,
            directed,
            edge_probability: DEFAULT_EDGE_PROBABILITY,
        }
    }

    pub fn with_edge_probability(mut self, edge_probability: f64) -> Self {
        self.edge_probability = edge_probability;
        self
    }

    /// Checks the config describes a graph that can be generated.
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.vertices == 0 {
            return Err(GraphError::Empty);
        }

        if !(0.0..=1.0).contains(&self.edge_probability) {
            return Err(GraphError::InvalidProbability(self.edge_probability));
        }

        Ok(())
    }
}

/// Generates a random graph.
///
/// In a directed graph every ordered pair of distinct vertices is a candidate edge, in an
/// undirected graph every unordered pair is, with its weight written to both cells. Each
/// candidate is kept with the configured probability. The same config and the same random
/// source state always produce the same graph.
///
/// # Examples
///
/// ```
/// use eccentric::generate::{generate, GeneratorConfig};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let config = GeneratorConfig::new(5, true, false);
///
/// let a = generate(&config, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
/// let b = generate(&config, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
///
/// assert_eq!(a, b);
/// assert_eq!(a.vertex_count(), 5);
/// ```
pub fn generate<R>(config: &GeneratorConfig, rng: &mut R) -> Result<Graph, GraphError>
where
    R: Rng,
{
    config.validate()?;

    let n = config.vertices;
    let mut matrix = DMatrix::<u32>::zeros(n, n);

    for i in 0..n {
        // Undirected graphs only draw the upper triangle and mirror it.
        let first = if config.directed { 0 } else { i + 1 };

        for j in first..n {
            if i == j || !rng.gen_bool(config.edge_probability) {
                continue;
            }

            let weight = if config.weighted {
                rng.gen_range(MIN_WEIGHT..=MAX_WEIGHT)
            } else {
                UNIT_WEIGHT
            };

            matrix[(i, j)] = weight;
            if !config.directed {
                matrix[(j, i)] = weight;
            }
        }
    }

    let graph = Graph::from_matrix(matrix, config.directed)?;

    debug!(
        vertices = n,
        edges = graph.edge_count(),
        directed = config.directed,
        weighted = config.weighted,
        "generated graph"
    );

    Ok(graph)
}
