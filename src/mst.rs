mod kruskal;
mod prim;

use crate::graph::Graph;
pub use kruskal::Kruskal;
pub use prim::Prim;
use thiserror::Error;

/// Reasons a minimum spanning tree cost could not be produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MstError {
    #[error("Graph is disconnected: only {tree_edges} tree edges found for {node_count} nodes")]
    Disconnected {
        /// Edges selected before the algorithm ran out of candidates.
        tree_edges: usize,
        node_count: usize,
    },

    #[error("Start node {start} is outside the node range (node count {node_count})")]
    StartOutOfRange { start: usize, node_count: usize },

    #[error("Kruskal and Prim disagree: {kruskal} vs {prim}")]
    Mismatch { kruskal: u64, prim: u64 },
}

/// A minimum spanning tree algorithm.
///
/// Implementors only report the total weight of the tree. Equal-weight ties
/// may change which edges are chosen, never the total.
pub trait SpanningTree {
    /// Computes the total weight of a minimum spanning tree of `graph`.
    ///
    /// # Returns
    ///
    /// `Ok(0)` for graphs with at most one node, the tree weight for connected
    /// graphs, and [`MstError::Disconnected`] otherwise.
    fn minimum_cost(&self, graph: &Graph) -> Result<u64, MstError>;
}

/// Runs [`Kruskal`] and [`Prim`] side by side and checks that they agree.
///
/// The two algorithms share nothing but the read-only `graph`, so they are
/// run on the rayon pool concurrently.
///
/// # Example
///
/// ```
/// use mst_connector::graph::{Graph, Labeling};
/// use mst_connector::mst::cross_check;
///
/// let graph = Graph::from_connections(3, &[[1, 2, 1], [2, 3, 1]], Labeling::OneBased).unwrap();
/// assert_eq!(cross_check(&graph), Ok(2));
/// ```
pub fn cross_check(graph: &Graph) -> Result<u64, MstError> {
    let (kruskal, prim) = rayon::join(
        || Kruskal.minimum_cost(graph),
        || Prim::default().minimum_cost(graph),
    );
    match (kruskal?, prim?) {
        (kruskal, prim) if kruskal == prim => Ok(kruskal),
        (kruskal, prim) => {
            log::error!("Spanning tree costs diverged: kruskal={kruskal}, prim={prim}");
            Err(MstError::Mismatch { kruskal, prim })
        }
    }
}
