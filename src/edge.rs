//! A module for working with weighted edges.

/// The weight carried by unweighted edges.
pub const UNIT_WEIGHT: u32 = 1;

/// A weighted edge between two vertex indices.
///
/// Whether the edge is directed depends on the graph it is inserted into: an undirected graph
/// writes both `(source, target)` and `(target, source)` cells.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: u32,
}

impl Edge {
    /// Creates a new unweighted edge (weight 1) from two vertices.
    ///
    /// # Examples
    ///
    /// ```
    /// use eccentric::edge::Edge;
    ///
    /// let edge = Edge::new(0, 1);
    /// assert_eq!(edge.weight(), 1);
    /// ```
    pub fn new(source: usize, target: usize) -> Self {
        Self::weighted(source, target, UNIT_WEIGHT)
    }

    /// Creates a new edge with an explicit weight.
    pub fn weighted(source: usize, target: usize, weight: u32) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the vertex the edge leaves from.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the vertex the edge points to.
    pub fn target(&self) -> usize {
        self.target
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Returns the same edge travelling in the opposite direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use eccentric::edge::Edge;
    ///
    /// let edge = Edge::weighted(0, 1, 7);
    /// assert_eq!(edge.reversed(), Edge::weighted(1, 0, 7));
    /// ```
    pub fn reversed(&self) -> Self {
        Self::weighted(self.target, self.source, self.weight)
    }

    /// Returns whether the edge starts and ends at the same vertex.
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new() {
        let (source, target) = (0, 1);

        assert_eq!(
            Edge::new(source, target),
            Edge {
                source,
                target,
                weight: UNIT_WEIGHT
            }
        )
    }

    #[test]
    fn source() {
        let edge = Edge::new(2, 5);

        assert_eq!(edge.source(), 2);
    }

    #[test]
    fn target() {
        let edge = Edge::new(2, 5);

        assert_eq!(edge.target(), 5);
    }

    #[test]
    fn is_loop() {
        assert!(Edge::new(1, 1).is_loop());
        assert!(!Edge::new(1, 2).is_loop());
    }

    //
    // Trait implementations
    //

    #[test]
    fn partial_eq_is_directed() {
        assert_eq!(Edge::new(0, 1), Edge::new(0, 1));
        assert_ne!(Edge::new(0, 1), Edge::new(1, 0));
        assert_ne!(Edge::weighted(0, 1, 2), Edge::weighted(0, 1, 3));
    }
}
