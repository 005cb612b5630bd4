//! A module for working with graphs.

use nalgebra::DMatrix;

use crate::{
    distance::{self, Distances},
    edge::Edge,
    error::GraphError,
    metrics::{self, GraphMetrics},
};

/// A graph stored as a square adjacency matrix of edge weights.
///
/// Cell `(i, j)` holds the weight of the edge from vertex `i` to vertex `j`, a zero cell means
/// there is no such edge. The diagonal is always zero and undirected graphs are always
/// symmetric, both are checked on construction. A graph can't be mutated once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    adjacency_matrix: DMatrix<u32>,
    directed: bool,
}

impl Graph {
    /// Creates a graph from an adjacency matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::dmatrix;
    /// use eccentric::graph::Graph;
    ///
    /// let graph = Graph::from_matrix(
    ///     dmatrix![0, 1, 0;
    ///              1, 0, 1;
    ///              0, 1, 0],
    ///     false,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(graph.vertex_count(), 3);
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    pub fn from_matrix(adjacency_matrix: DMatrix<u32>, directed: bool) -> Result<Self, GraphError> {
        let (rows, cols) = adjacency_matrix.shape();

        if rows != cols {
            return Err(GraphError::NotSquare { rows, cols });
        }

        if rows == 0 {
            return Err(GraphError::Empty);
        }

        if let Some(vertex) = (0..rows).find(|&i| adjacency_matrix[(i, i)] != 0) {
            return Err(GraphError::SelfLoop { vertex });
        }

        // Only the upper triangle needs visiting to compare each mirrored pair once.
        if !directed {
            for from in 0..rows {
                for to in from + 1..rows {
                    if adjacency_matrix[(from, to)] != adjacency_matrix[(to, from)] {
                        return Err(GraphError::Asymmetric { from, to });
                    }
                }
            }
        }

        Ok(Self {
            adjacency_matrix,
            directed,
        })
    }

    /// Creates a graph from the rows of an adjacency matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use eccentric::graph::Graph;
    ///
    /// let graph = Graph::from_rows(&[vec![0, 4], vec![0, 0]], true).unwrap();
    ///
    /// assert_eq!(graph.weight(0, 1), Some(4));
    /// assert_eq!(graph.weight(1, 0), None);
    /// ```
    pub fn from_rows(rows: &[Vec<u32>], directed: bool) -> Result<Self, GraphError> {
        let n = rows.len();

        if let Some(row) = rows.iter().find(|row| row.len() != n) {
            return Err(GraphError::NotSquare {
                rows: n,
                cols: row.len(),
            });
        }

        Self::from_matrix(DMatrix::from_fn(n, n, |i, j| rows[i][j]), directed)
    }

    /// Creates a graph with `vertex_count` vertices from a set of edges.
    ///
    /// In an undirected graph each edge is written in both directions, a later edge between the
    /// same pair of vertices overwrites the weight of an earlier one.
    ///
    /// # Examples
    ///
    /// ```
    /// use eccentric::edge::Edge;
    /// use eccentric::graph::Graph;
    ///
    /// let graph = Graph::from_edges(3, false, [Edge::new(0, 1), Edge::weighted(1, 2, 5)]).unwrap();
    ///
    /// assert_eq!(graph.weight(2, 1), Some(5));
    /// assert!(graph.is_weighted());
    /// ```
    pub fn from_edges<I>(vertex_count: usize, directed: bool, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = Edge>,
    {
        if vertex_count == 0 {
            return Err(GraphError::Empty);
        }

        let mut matrix = DMatrix::<u32>::zeros(vertex_count, vertex_count);

        for edge in edges {
            if let Some(vertex) = [edge.source(), edge.target()]
                .into_iter()
                .find(|&v| v >= vertex_count)
            {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count,
                });
            }

            if edge.is_loop() {
                return Err(GraphError::SelfLoop {
                    vertex: edge.source(),
                });
            }

            if edge.weight() == 0 {
                return Err(GraphError::ZeroWeight {
                    from: edge.source(),
                    to: edge.target(),
                });
            }

            matrix[(edge.source(), edge.target())] = edge.weight();
            if !directed {
                let reversed = edge.reversed();
                matrix[(reversed.source(), reversed.target())] = reversed.weight();
            }
        }

        Self::from_matrix(matrix, directed)
    }

    /// Returns the vertex count of the graph.
    pub fn vertex_count(&self) -> usize {
        self.adjacency_matrix.nrows()
    }

    /// Returns the edge count of the graph, undirected edges are counted once.
    ///
    /// # Examples
    ///
    /// ```
    /// use eccentric::edge::Edge;
    /// use eccentric::graph::Graph;
    ///
    /// let undirected = Graph::from_edges(2, false, [Edge::new(0, 1)]).unwrap();
    /// assert_eq!(undirected.edge_count(), 1);
    ///
    /// let directed = Graph::from_edges(2, true, [Edge::new(0, 1), Edge::new(1, 0)]).unwrap();
    /// assert_eq!(directed.edge_count(), 2);
    /// ```
    pub fn edge_count(&self) -> usize {
        let cells = self.adjacency_matrix.iter().filter(|&&w| w > 0).count();

        if self.directed {
            cells
        } else {
            cells / 2
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns whether any edge carries a weight other than 1.
    pub fn is_weighted(&self) -> bool {
        self.adjacency_matrix.iter().any(|&w| w > 1)
    }

    /// Returns the weight of the edge from `from` to `to`, if there is one.
    ///
    /// Out of range vertices have no edges.
    pub fn weight(&self, from: usize, to: usize) -> Option<u32> {
        self.adjacency_matrix
            .get((from, to))
            .copied()
            .filter(|&w| w > 0)
    }

    /// Returns the `(vertex, weight)` pairs reachable over a single edge from `vertex`, in
    /// increasing vertex order.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    pub fn neighbours(&self, vertex: usize) -> impl Iterator<Item = (usize, u32)> + '_ {
        assert!(
            vertex < self.vertex_count(),
            "vertex {vertex} is out of range"
        );

        (0..self.vertex_count()).filter_map(move |i| {
            let weight = self.adjacency_matrix[(vertex, i)];
            (weight > 0).then_some((i, weight))
        })
    }

    /// Returns the number of edges leaving `vertex`.
    pub fn out_degree(&self, vertex: usize) -> usize {
        self.neighbours(vertex).count()
    }

    /// Computes the density of the graph, the ratio of edges with respect to the maximum possible
    /// edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use eccentric::edge::Edge;
    /// use eccentric::graph::Graph;
    ///
    /// let graph = Graph::from_edges(3, false, [Edge::new(0, 1)]).unwrap();
    /// assert_eq!(graph.density(), 1.0 / 3.0);
    ///
    /// let graph = Graph::from_edges(3, true, [Edge::new(0, 1)]).unwrap();
    /// assert_eq!(graph.density(), 1.0 / 6.0);
    /// ```
    pub fn density(&self) -> f64 {
        let vc = self.vertex_count() as f64;
        let ec = self.edge_count() as f64;

        // Calculate the total number of possible edges given a vertex count.
        let pec = if self.directed {
            vc * (vc - 1.0)
        } else {
            vc * (vc - 1.0) / 2.0
        };

        // A single vertex can't have any edges.
        if pec == 0.0 {
            return 0.0;
        }

        ec / pec
    }

    /// Returns the adjacency matrix backing this graph.
    pub fn adjacency_matrix(&self) -> &DMatrix<u32> {
        &self.adjacency_matrix
    }

    /// Returns the adjacency matrix as a vector of rows.
    pub fn rows(&self) -> Vec<Vec<u32>> {
        self.adjacency_matrix
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }

    /// Checks that `source` can be used as a traversal starting point.
    ///
    /// # Examples
    ///
    /// ```
    /// use eccentric::error::GraphError;
    /// use eccentric::graph::Graph;
    ///
    /// let graph = Graph::from_rows(&[vec![0, 0], vec![0, 0]], false).unwrap();
    ///
    /// assert!(graph.check_source(1).is_ok());
    /// assert_eq!(
    ///     graph.check_source(2),
    ///     Err(GraphError::SourceOutOfRange { vertex: 2, max: 1 })
    /// );
    /// ```
    pub fn check_source(&self, source: usize) -> Result<(), GraphError> {
        if source < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::SourceOutOfRange {
                vertex: source,
                max: self.vertex_count() - 1,
            })
        }
    }

    /// Computes the distances from `source` to every vertex, see [`distance::bfs_distances`].
    ///
    /// # Panics
    ///
    /// Panics if `source` is out of range, use [`Graph::check_source`] first.
    pub fn distances(&self, source: usize) -> Distances {
        distance::bfs_distances(self, source)
    }

    /// Returns the eccentricity of every vertex, indexed by vertex.
    pub fn eccentricities(&self) -> Vec<u64> {
        metrics::eccentricities(self)
    }

    /// Computes the radius, diameter, central and peripheral vertices of the graph.
    pub fn metrics(&self) -> GraphMetrics {
        GraphMetrics::compute(self)
    }

    /// Returns the smallest eccentricity in the graph.
    ///
    /// This runs the full metrics computation, prefer [`Graph::metrics`] when more than one
    /// measurement is needed.
    pub fn radius(&self) -> u64 {
        self.metrics().radius
    }

    /// Returns the largest eccentricity in the graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use eccentric::edge::Edge;
    /// use eccentric::graph::Graph;
    ///
    /// let graph = Graph::from_edges(4, false, [Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 3)]).unwrap();
    ///
    /// assert_eq!(graph.diameter(), 3);
    /// assert_eq!(graph.radius(), 2);
    /// ```
    pub fn diameter(&self) -> u64 {
        self.metrics().diameter
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::dmatrix;

    use super::*;

    macro_rules! graph {
        ($n:expr; $($path:expr),*) => {{
            let mut edges = vec![];

            $(
                let mut iter = $path.into_iter().peekable();
                while let (Some(a), Some(&b)) = (iter.next(), iter.peek()) {
                    edges.push(Edge::new(a, b));
                }
            )*

            Graph::from_edges($n, false, edges).unwrap()
        }}
    }

    #[test]
    fn from_matrix() {
        let graph = Graph::from_matrix(
            dmatrix![0, 2;
                     2, 0],
            false,
        )
        .unwrap();

        assert_eq!(graph.vertex_count(), 2);
        assert!(!graph.is_directed());
    }

    #[test]
    fn from_matrix_empty() {
        assert_eq!(
            Graph::from_matrix(DMatrix::zeros(0, 0), false),
            Err(GraphError::Empty)
        );
    }

    #[test]
    fn from_matrix_not_square() {
        assert_eq!(
            Graph::from_matrix(DMatrix::zeros(2, 3), true),
            Err(GraphError::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn from_matrix_self_loop() {
        assert_eq!(
            Graph::from_matrix(
                dmatrix![0, 1;
                         1, 3],
                false
            ),
            Err(GraphError::SelfLoop { vertex: 1 })
        );
    }

    #[test]
    fn from_matrix_asymmetric() {
        let matrix = dmatrix![0, 1, 0;
                              0, 0, 0;
                              0, 0, 0];

        assert_eq!(
            Graph::from_matrix(matrix.clone(), false),
            Err(GraphError::Asymmetric { from: 0, to: 1 })
        );

        // The same matrix is a valid directed graph.
        assert!(Graph::from_matrix(matrix, true).is_ok());
    }

    #[test]
    fn from_rows_ragged() {
        assert_eq!(
            Graph::from_rows(&[vec![0, 1], vec![1]], false),
            Err(GraphError::NotSquare { rows: 2, cols: 1 })
        );
    }

    #[test]
    fn from_rows_empty() {
        assert_eq!(Graph::from_rows(&[], false), Err(GraphError::Empty));
    }

    #[test]
    fn from_edges() {
        let graph = Graph::from_edges(3, false, [Edge::new(0, 1), Edge::weighted(2, 1, 4)]).unwrap();

        assert_eq!(
            graph.adjacency_matrix(),
            &dmatrix![0, 1, 0;
                      1, 0, 4;
                      0, 4, 0]
        );
    }

    #[test]
    fn from_edges_directed() {
        let graph = Graph::from_edges(3, true, [Edge::new(0, 1), Edge::weighted(2, 1, 4)]).unwrap();

        assert_eq!(
            graph.adjacency_matrix(),
            &dmatrix![0, 1, 0;
                      0, 0, 0;
                      0, 4, 0]
        );
    }

    #[test]
    fn from_edges_rejects_invalid_edges() {
        assert_eq!(
            Graph::from_edges(0, false, []),
            Err(GraphError::Empty)
        );
        assert_eq!(
            Graph::from_edges(2, false, [Edge::new(0, 2)]),
            Err(GraphError::VertexOutOfRange {
                vertex: 2,
                vertex_count: 2
            })
        );
        assert_eq!(
            Graph::from_edges(2, false, [Edge::new(1, 1)]),
            Err(GraphError::SelfLoop { vertex: 1 })
        );
        assert_eq!(
            Graph::from_edges(2, true, [Edge::weighted(0, 1, 0)]),
            Err(GraphError::ZeroWeight { from: 0, to: 1 })
        );
    }

    #[test]
    fn edge_count() {
        let graph = graph!(4; [0, 1, 2, 3]);
        assert_eq!(graph.edge_count(), 3);

        let graph = Graph::from_edges(1, true, []).unwrap();
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn is_weighted() {
        assert!(!graph!(3; [0, 1, 2]).is_weighted());
        assert!(Graph::from_edges(2, true, [Edge::weighted(0, 1, 2)])
            .unwrap()
            .is_weighted());
    }

    #[test]
    fn weight() {
        let graph = graph!(3; [0, 1]);

        assert_eq!(graph.weight(0, 1), Some(1));
        assert_eq!(graph.weight(1, 0), Some(1));
        assert_eq!(graph.weight(0, 2), None);
        assert_eq!(graph.weight(0, 9), None);
    }

    #[test]
    fn neighbours() {
        // Edges are inserted out of order, neighbours must still come back sorted.
        let graph = graph!(5; [2, 4], [2, 0], [2, 3]);

        assert_eq!(
            graph.neighbours(2).collect::<Vec<_>>(),
            vec![(0, 1), (3, 1), (4, 1)]
        );
        assert_eq!(graph.neighbours(1).count(), 0);
    }

    #[test]
    #[should_panic]
    fn neighbours_out_of_range() {
        let graph = graph!(2; [0, 1]);
        graph.neighbours(2).count();
    }

    #[test]
    fn out_degree() {
        let graph = Graph::from_edges(3, true, [Edge::new(0, 1), Edge::new(0, 2), Edge::new(2, 0)])
            .unwrap();

        assert_eq!(graph.out_degree(0), 2);
        assert_eq!(graph.out_degree(1), 0);
        assert_eq!(graph.out_degree(2), 1);
    }

    #[test]
    fn density() {
        let graph = Graph::from_edges(1, false, []).unwrap();
        assert_eq!(graph.density(), 0.0);

        let graph = graph!(2; [0, 1]);
        assert_eq!(graph.density(), 1.0);

        let graph = graph!(3; [0, 1, 2]);
        assert_eq!(graph.density(), 2.0 / 3.0);
    }

    #[test]
    fn rows() {
        let graph = Graph::from_edges(3, true, [Edge::weighted(0, 2, 7), Edge::new(1, 0)]).unwrap();

        assert_eq!(
            graph.rows(),
            vec![vec![0, 0, 7], vec![1, 0, 0], vec![0, 0, 0]]
        );
    }

    #[test]
    fn metrics_on_path() {
        let graph = graph!(4; [0, 1, 2, 3]);

        assert_eq!(graph.eccentricities(), vec![3, 2, 2, 3]);
        assert_eq!(graph.radius(), 2);
        assert_eq!(graph.diameter(), 3);
    }
}
