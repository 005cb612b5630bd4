//! Settings for a single generate-and-measure run.

use serde::{Deserialize, Serialize};

use crate::{
    error::GraphError,
    generate::{GeneratorConfig, DEFAULT_EDGE_PROBABILITY},
};

/// Everything needed to generate a graph and report on it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// The number of vertices to generate.
    pub vertices: usize,
    /// The vertex distances are reported from.
    pub start: usize,
    #[serde(default)]
    pub weighted: bool,
    #[serde(default)]
    pub directed: bool,
    #[serde(default = "default_edge_probability")]
    pub edge_probability: f64,
    /// Seeds the random source, a random seed is picked when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Config {
    /// Creates an unweighted, undirected config with the default edge probability and no seed.
    pub fn new(vertices: usize, start: usize) -> Self {
        Self {
            vertices,
            start,
            weighted: false,
            directed: false,
            edge_probability: DEFAULT_EDGE_PROBABILITY,
            seed: None,
        }
    }

    /// Checks the config before anything is generated.
    ///
    /// # Examples
    ///
    /// ```
    /// use eccentric::config::Config;
    /// use eccentric::error::GraphError;
    ///
    /// assert!(Config::new(3, 2).validate().is_ok());
    /// assert_eq!(
    ///     Config::new(3, 3).validate(),
    ///     Err(GraphError::SourceOutOfRange { vertex: 3, max: 2 })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), GraphError> {
        self.generator_config().validate()?;

        if self.start >= self.vertices {
            return Err(GraphError::SourceOutOfRange {
                vertex: self.start,
                max: self.vertices - 1,
            });
        }

        Ok(())
    }

    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::new(self.vertices, self.weighted, self.directed)
            .with_edge_probability(self.edge_probability)
    }
}

fn default_edge_probability() -> f64 {
    DEFAULT_EDGE_PROBABILITY
}
