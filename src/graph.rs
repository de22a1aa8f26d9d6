use thiserror::Error;

/// A raw `(u, v, cost)` triple as supplied by callers.
pub type Connection = [i32; 3];

/// Errors raised while turning raw connections into a [`Graph`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("Negative node count: {0}")]
    NegativeNodeCount(i32),

    #[error("Node label {label} is outside the node range (node count {node_count})")]
    LabelOutOfRange {
        /// The label as the caller wrote it.
        label: i64,
        node_count: usize,
    },

    #[error("Negative connection cost: {cost}")]
    NegativeCost { cost: i32 },
}

/// How node labels in raw connections map onto internal indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Labeling {
    /// Labels run `1..=n`.
    #[default]
    OneBased,
    /// Labels already are the indices `0..n`.
    ZeroBased,
}

impl Labeling {
    fn offset(self) -> i64 {
        match self {
            Labeling::OneBased => 1,
            Labeling::ZeroBased => 0,
        }
    }
}

/// An undirected weighted edge between two distinct, 0-based nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub u: usize,
    pub v: usize,
    pub weight: u32,
}

/// An immutable description of a weighted undirected graph.
///
/// Self-loops are never stored: they cannot join two components, so both
/// spanning tree algorithms would discard them anyway.
///
/// # Example
///
/// ```
/// use mst_connector::graph::{Graph, Labeling};
///
/// let graph = Graph::from_connections(3, &[[1, 2, 5], [2, 2, 9], [2, 3, 1]], Labeling::OneBased)
///     .unwrap();
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edges().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    node_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates a graph with `node_count` isolated nodes.
    pub fn new(node_count: usize) -> Graph {
        Graph {
            node_count,
            edges: Vec::new(),
        }
    }

    /// Builds a graph from raw connections, validating every one of them.
    ///
    /// # Arguments
    ///
    /// * `n` - Number of nodes.
    /// * `connections` - `(u, v, cost)` triples with labels in the `labeling` convention.
    /// * `labeling` - How labels map onto the indices `0..n`.
    ///
    /// # Returns
    ///
    /// The graph with all self-loops dropped, or the first invalid connection found.
    pub fn from_connections(
        n: i32,
        connections: &[Connection],
        labeling: Labeling,
    ) -> Result<Graph, GraphError> {
        let node_count = usize::try_from(n).map_err(|_| GraphError::NegativeNodeCount(n))?;
        let mut graph = Graph::new(node_count);
        graph.edges.reserve(connections.len());

        for &[x, y, cost] in connections {
            let u = graph.normalize(x, labeling)?;
            let v = graph.normalize(y, labeling)?;
            let weight = u32::try_from(cost).map_err(|_| GraphError::NegativeCost { cost })?;
            if u == v {
                log::trace!("Dropping self-loop on label {x} with cost {cost}");
                continue;
            }
            graph.edges.push(Edge { u, v, weight });
        }

        log::debug!(
            "Built graph with {} nodes and {} edges ({} self-loops dropped)",
            graph.node_count,
            graph.edges.len(),
            connections.len() - graph.edges.len()
        );
        Ok(graph)
    }

    /// Adds an undirected edge between the 0-based nodes `u` and `v`.
    ///
    /// Self-loops are accepted and ignored.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: u32) -> Result<(), GraphError> {
        for node in [u, v] {
            if node >= self.node_count {
                return Err(GraphError::LabelOutOfRange {
                    label: node as i64,
                    node_count: self.node_count,
                });
            }
        }
        if u != v {
            self.edges.push(Edge { u, v, weight });
        }
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Builds the adjacency lists: `adjacency[u]` holds a `(v, weight)` pair
    /// for every edge incident to `u`, in insertion order.
    pub fn adjacency(&self) -> Vec<Vec<(usize, u32)>> {
        let mut adjacency = vec![Vec::new(); self.node_count];
        for edge in &self.edges {
            adjacency[edge.u].push((edge.v, edge.weight));
            adjacency[edge.v].push((edge.u, edge.weight));
        }
        adjacency
    }

    fn normalize(&self, label: i32, labeling: Labeling) -> Result<usize, GraphError> {
        let index = i64::from(label) - labeling.offset();
        match usize::try_from(index) {
            Ok(index) if index < self.node_count => Ok(index),
            _ => Err(GraphError::LabelOutOfRange {
                label: i64::from(label),
                node_count: self.node_count,
            }),
        }
    }
}
