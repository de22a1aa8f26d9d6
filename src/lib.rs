//! Minimum cost to connect a set of cities.
//!
//! Two independent minimum spanning tree algorithms compute the same total:
//! [`mst::Kruskal`] sorts edges and joins components with a
//! [`dsu::DisjointSetUnion`], [`mst::Prim`] grows one tree with a binary heap.
//! Either can be used through the [`mst::SpanningTree`] trait on a validated
//! [`graph::Graph`], or through the integer entry points below.
use crate::graph::{Connection, Graph, Labeling};
use crate::mst::{Kruskal, MstError, Prim, SpanningTree};

pub mod dsu;
pub mod graph;
pub mod mst;

/// Returned by the integer entry points when the cities cannot all be connected.
pub const NOT_CONNECTED: i32 = -1;

/// Minimum total cost to connect cities `1..=n` using Kruskal's algorithm.
///
/// # Arguments
///
/// * `n` - Number of cities.
/// * `connections` - `[city1, city2, cost]` triples with 1-based city labels.
///
/// # Returns
///
/// The minimum total cost, `0` if `n <= 1`, or [`NOT_CONNECTED`] if the
/// cities cannot all be joined.
///
/// # Example
///
/// ```
/// use mst_connector::minimum_cost_kruskal;
///
/// let connections = [[1, 2, 3], [2, 3, 4], [3, 4, 5], [1, 4, 10], [2, 4, 6]];
/// assert_eq!(minimum_cost_kruskal(4, &connections), 12);
/// ```
pub fn minimum_cost_kruskal(n: i32, connections: &[Connection]) -> i32 {
    minimum_cost_with(&Kruskal, n, connections)
}

/// Minimum total cost to connect cities `1..=n` using Prim's algorithm,
/// growing the tree from city `1`.
///
/// Same contract as [`minimum_cost_kruskal`].
///
/// # Example
///
/// ```
/// use mst_connector::{minimum_cost_prim, NOT_CONNECTED};
///
/// assert_eq!(minimum_cost_prim(3, &[[1, 2, 1], [2, 3, 1]]), 2);
/// assert_eq!(minimum_cost_prim(2, &[]), NOT_CONNECTED);
/// ```
pub fn minimum_cost_prim(n: i32, connections: &[Connection]) -> i32 {
    minimum_cost_with(&Prim::default(), n, connections)
}

fn minimum_cost_with<T: SpanningTree>(algorithm: &T, n: i32, connections: &[Connection]) -> i32 {
    if n <= 1 {
        return 0;
    }

    let graph = match Graph::from_connections(n, connections, Labeling::OneBased) {
        Ok(graph) => graph,
        Err(e) => {
            log::warn!("Rejecting malformed connections: {e}");
            return NOT_CONNECTED;
        }
    };

    match algorithm.minimum_cost(&graph) {
        Ok(total) => i32::try_from(total).unwrap_or_else(|_| {
            log::warn!("Total cost {total} does not fit the integer result");
            NOT_CONNECTED
        }),
        Err(MstError::Disconnected { .. }) => NOT_CONNECTED,
        Err(e) => {
            log::warn!("Spanning tree failed: {e}");
            NOT_CONNECTED
        }
    }
}
