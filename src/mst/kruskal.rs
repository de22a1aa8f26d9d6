use crate::dsu::DisjointSetUnion;
use crate::graph::{Edge, Graph};
use crate::mst::{MstError, SpanningTree};

/// Kruskal's algorithm: take edges cheapest first, keeping those that join
/// two different components.
///
/// Runs in O(E log E) for the sort plus near-linear time for the union-find.
#[derive(Debug, Clone, Copy, Default)]
pub struct Kruskal;

impl SpanningTree for Kruskal {
    fn minimum_cost(&self, graph: &Graph) -> Result<u64, MstError> {
        let n = graph.node_count();
        if n <= 1 {
            return Ok(0);
        }

        let mut edges: Vec<Edge> = graph.edges().to_vec();
        edges.sort_unstable_by_key(|edge| edge.weight);

        let mut dsu = DisjointSetUnion::new(n);
        let mut total: u64 = 0;
        let mut used = 0;

        for edge in edges {
            if !dsu.union(edge.u, edge.v) {
                continue;
            }
            total += u64::from(edge.weight);
            used += 1;
            if used == n - 1 {
                log::debug!("Kruskal spanned {n} nodes with total cost {total}");
                return Ok(total);
            }
        }

        log::debug!("Kruskal ran out of edges after joining {used} of {} needed", n - 1);
        Err(MstError::Disconnected {
            tree_edges: used,
            node_count: n,
        })
    }
}
