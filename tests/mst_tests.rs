#[cfg(test)]
mod test {
    extern crate mst_connector;
    use mst_connector::graph::{Graph, Labeling};
    use mst_connector::mst::{cross_check, Kruskal, Prim, SpanningTree};
    use mst_connector::{minimum_cost_kruskal, minimum_cost_prim, NOT_CONNECTED};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_four_cities() {
        let connections = [[1, 2, 3], [2, 3, 4], [3, 4, 5], [1, 4, 10], [2, 4, 6]];
        assert_eq!(minimum_cost_kruskal(4, &connections), 12);
        assert_eq!(minimum_cost_prim(4, &connections), 12);
    }

    #[test]
    fn test_three_cities_in_a_line() {
        let connections = [[1, 2, 1], [2, 3, 1]];
        assert_eq!(minimum_cost_kruskal(3, &connections), 2);
        assert_eq!(minimum_cost_prim(3, &connections), 2);
    }

    #[test]
    fn test_no_connections() {
        assert_eq!(minimum_cost_kruskal(2, &[]), NOT_CONNECTED);
        assert_eq!(minimum_cost_prim(2, &[]), NOT_CONNECTED);
        assert_eq!(minimum_cost_kruskal(0, &[]), 0);
        assert_eq!(minimum_cost_prim(1, &[]), 0);
    }

    #[test]
    fn test_disconnected_component() {
        let connections = [[1, 2, 5], [2, 3, 2], [4, 5, 1]];
        assert_eq!(minimum_cost_kruskal(5, &connections), NOT_CONNECTED);
        assert_eq!(minimum_cost_prim(5, &connections), NOT_CONNECTED);
    }

    #[test]
    fn test_only_self_loops() {
        let connections = [[1, 1, 1], [2, 2, 1]];
        assert_eq!(minimum_cost_kruskal(2, &connections), NOT_CONNECTED);
        assert_eq!(minimum_cost_prim(2, &connections), NOT_CONNECTED);
    }

    #[test]
    fn test_repeated_calls_agree() {
        let connections = [[1, 2, 3], [2, 3, 4], [3, 4, 5], [1, 4, 10], [2, 4, 6]];
        let first = minimum_cost_prim(4, &connections);
        for _ in 0..3 {
            assert_eq!(minimum_cost_prim(4, &connections), first);
            assert_eq!(minimum_cost_kruskal(4, &connections), first);
        }
    }

    #[test]
    fn test_random_connected_graphs_agree() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let n = rng.gen_range(2..40);
            let graph = random_connected_graph(&mut rng, n);
            let kruskal = Kruskal.minimum_cost(&graph).unwrap();
            let prim = Prim::new(rng.gen_range(0..n)).minimum_cost(&graph).unwrap();
            assert_eq!(kruskal, prim);
            assert_eq!(cross_check(&graph), Ok(kruskal));
        }
    }

    #[test]
    fn test_complete_graph_with_equal_weights() {
        let n = 10;
        let mut graph = Graph::new(n);
        for u in 0..n {
            for v in u + 1..n {
                graph.add_edge(u, v, 4).unwrap();
            }
        }
        assert_eq!(cross_check(&graph), Ok(4 * (n as u64 - 1)));
    }

    #[test]
    fn test_zero_based_labels() {
        let graph =
            Graph::from_connections(3, &[[0, 1, 2], [1, 2, 3], [0, 2, 9]], Labeling::ZeroBased)
                .unwrap();
        assert_eq!(cross_check(&graph), Ok(5));
    }

    /// A random spanning tree plus random extra edges, so the graph is always connected.
    fn random_connected_graph(rng: &mut StdRng, n: usize) -> Graph {
        let mut graph = Graph::new(n);
        for v in 1..n {
            let u = rng.gen_range(0..v);
            graph.add_edge(u, v, rng.gen_range(0..50)).unwrap();
        }
        for _ in 0..rng.gen_range(0..3 * n) {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            graph.add_edge(u, v, rng.gen_range(0..50)).unwrap();
        }
        graph
    }
}
