//! A module for computing single-source distances.

use std::collections::VecDeque;

use serde::Serialize;

use crate::graph::Graph;

/// The distances from one source vertex to every vertex of a graph, indexed by vertex.
///
/// `None` marks a vertex that can't be reached from the source. Distances are summed in `u64`,
/// a path crosses at most `n - 1` edges of at most `u32::MAX` each so they can't overflow.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Distances(Vec<Option<u64>>);

impl Distances {
    /// Returns the distance to `vertex`, `None` if it is unreachable or out of range.
    pub fn get(&self, vertex: usize) -> Option<u64> {
        self.0.get(vertex).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<u64>> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Option<u64>] {
        &self.0
    }

    /// Returns the number of reachable vertices, the source included.
    pub fn reachable_count(&self) -> usize {
        self.0.iter().flatten().count()
    }

    /// Returns the largest finite distance, 0 when only the source is reachable.
    ///
    /// # Examples
    ///
    /// ```
    /// use eccentric::graph::Graph;
    ///
    /// let graph = Graph::from_rows(&[vec![0, 3, 0], vec![0, 0, 0], vec![0, 0, 0]], true).unwrap();
    ///
    /// assert_eq!(graph.distances(0).eccentricity(), 3);
    /// assert_eq!(graph.distances(1).eccentricity(), 0);
    /// ```
    pub fn eccentricity(&self) -> u64 {
        self.0.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Returns the distances with unreachable vertices encoded as `-1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use eccentric::graph::Graph;
    ///
    /// let graph = Graph::from_rows(&[vec![0, 0], vec![0, 0]], false).unwrap();
    ///
    /// assert_eq!(graph.distances(0).to_signed(), vec![0, -1]);
    /// ```
    pub fn to_signed(&self) -> Vec<i64> {
        self.0
            .iter()
            .map(|d| d.map_or(-1, |d| i64::try_from(d).unwrap_or(i64::MAX)))
            .collect()
    }
}

impl From<Vec<Option<u64>>> for Distances {
    fn from(distances: Vec<Option<u64>>) -> Self {
        Self(distances)
    }
}

/// Computes the distances from `source` with a breadth-first traversal that sums edge weights.
///
/// Each vertex is assigned a distance the first time it is discovered, its parent's distance
/// plus the weight of the connecting edge, and is never updated afterwards. Neighbours are
/// scanned in increasing index order. With unit weights this is the hop count of a shortest
/// path, with other weights it is the length of the path the traversal found first, which
/// isn't necessarily the lightest one.
///
/// # Panics
///
/// Panics if `source` is out of range, use [`Graph::check_source`] first.
///
/// # Examples
///
/// ```
/// use eccentric::distance::bfs_distances;
/// use eccentric::graph::Graph;
///
/// let graph = Graph::from_rows(&[vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]], false).unwrap();
///
/// assert_eq!(bfs_distances(&graph, 0).to_signed(), vec![0, 1, 2]);
/// ```
pub fn bfs_distances(graph: &Graph, source: usize) -> Distances {
    let num_nodes = graph.vertex_count();
    assert!(
        source < num_nodes,
        "source vertex {source} is out of range for {num_nodes} vertices"
    );

    let mut deltas: Vec<Option<u64>> = vec![None; num_nodes];
    let mut queue: VecDeque<usize> = VecDeque::new();

    deltas[source] = Some(0);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        // Only vertices with an assigned distance are ever queued.
        let Some(current_delta) = deltas[current] else {
            continue;
        };

        for (next, weight) in graph.neighbours(current) {
            if deltas[next].is_none() {
                deltas[next] = Some(current_delta + u64::from(weight));
                queue.push_back(next);
            }
        }
    }

    Distances(deltas)
}
