use crate::graph::Graph;
use crate::mst::{MstError, SpanningTree};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Prim's algorithm: grow a single tree from `start`, always attaching the
/// cheapest edge leaving it.
///
/// Uses a lazy binary heap, so stale entries for already visited nodes are
/// skipped when popped. Runs in O(E log E).
#[derive(Debug, Clone, Copy, Default)]
pub struct Prim {
    start: usize,
}

impl Prim {
    /// Creates a `Prim` that grows its tree from node `start`.
    ///
    /// Any start node gives the same total cost on a connected graph.
    pub fn new(start: usize) -> Prim {
        Prim { start }
    }

    pub fn start(&self) -> usize {
        self.start
    }
}

impl SpanningTree for Prim {
    fn minimum_cost(&self, graph: &Graph) -> Result<u64, MstError> {
        let n = graph.node_count();
        if n <= 1 {
            return Ok(0);
        }
        if self.start >= n {
            return Err(MstError::StartOutOfRange {
                start: self.start,
                node_count: n,
            });
        }

        let adjacency = graph.adjacency();
        let mut visited = vec![false; n];
        let mut heap = BinaryHeap::new();
        let mut total: u64 = 0;
        let mut count = 1;

        visited[self.start] = true;
        heap.extend(
            adjacency[self.start]
                .iter()
                .map(|&(node, weight)| Reverse((weight, node))),
        );

        while count < n {
            let Some(Reverse((weight, node))) = heap.pop() else {
                break;
            };
            if visited[node] {
                continue;
            }
            visited[node] = true;
            count += 1;
            total += u64::from(weight);
            heap.extend(
                adjacency[node]
                    .iter()
                    .filter(|&&(next, _)| !visited[next])
                    .map(|&(next, weight)| Reverse((weight, next))),
            );
        }

        if count == n {
            log::debug!("Prim spanned {n} nodes from {} with total cost {total}", self.start);
            Ok(total)
        } else {
            log::debug!("Prim reached {count} of {n} nodes from {}", self.start);
            Err(MstError::Disconnected {
                tree_edges: count - 1,
                node_count: n,
            })
        }
    }
}
