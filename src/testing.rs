/// Every representation runs the same randomized checks against a plain reference matrix.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ty) => {
        #[cfg(test)]
        mod $env {
            use crate::prelude::*;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            type Reference = Vec<Vec<Option<Weight>>>;

            /// Creates a list of at most `m_ub` random edges for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<WeightedEdge> {
                (0..m_ub)
                    .map(|_| {
                        WeightedEdge::new(
                            rng.random_range(0..n),
                            rng.random_range(0..n),
                            rng.random_range(1..10) as Weight,
                        )
                    })
                    .collect_vec()
            }

            fn insert_reference(reference: &mut Reference, e: &WeightedEdge, directed: bool) {
                reference[e.origin as usize][e.destination as usize] = Some(e.weight);
                if !directed {
                    reference[e.destination as usize][e.origin as usize] = Some(e.weight);
                }
            }

            fn assert_matches_reference(graph: &$graph, reference: &Reference) {
                let n = graph.number_of_nodes();
                assert_eq!(reference.len(), n as usize);

                for u in 0..n {
                    let expected = reference[u as usize]
                        .iter()
                        .enumerate()
                        .filter_map(|(v, w)| w.map(|w| (v as Node, w)))
                        .collect_vec();

                    assert_eq!(graph.sorted_neighbors_of(u), expected);
                    assert_eq!(graph.degree_of(u) as usize, expected.len());

                    for v in 0..n {
                        assert_eq!(graph.try_weight(u, v), reference[u as usize][v as usize]);
                    }
                }
            }

            #[test]
            fn graph_new() {
                for n in 0..20 {
                    for directed in [false, true] {
                        let graph = <$graph>::with_vertices(n, directed, true);

                        assert_eq!(graph.number_of_edges(), 0);
                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.is_directed(), directed);
                        assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                        assert_eq!(
                            graph.labels().collect_vec(),
                            (0..n).map(|u| u.to_string()).collect_vec()
                        );
                    }
                }
            }

            #[test]
            fn adjacency_list() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for directed in [false, true] {
                    for n in [5 as NumNodes, 10, 20] {
                        for m_ub in [n, n * 3] {
                            let edges = random_edges(rng, n, m_ub);
                            let mut reference: Reference = vec![vec![None; n as usize]; n as usize];
                            edges
                                .iter()
                                .for_each(|e| insert_reference(&mut reference, e, directed));

                            let graph = <$graph>::from_edges(n, directed, true, edges.iter()).unwrap();
                            assert_matches_reference(&graph, &reference);

                            let m = graph.edges().count();
                            assert_eq!(m, graph.number_of_edges() as usize);
                            for e in graph.edges() {
                                assert!(directed || e.origin <= e.destination);
                            }
                        }
                    }
                }
            }

            #[test]
            fn edge_editing() {
                let rng = &mut Pcg64Mcg::seed_from_u64(4);

                for directed in [false, true] {
                    let n: NumNodes = 15;
                    let mut graph = <$graph>::with_vertices(n, directed, true);
                    let mut reference: Reference = vec![vec![None; n as usize]; n as usize];

                    for e in random_edges(rng, n, 60) {
                        let was_new = reference[e.origin as usize][e.destination as usize].is_none();
                        assert_eq!(graph.insert_edge(e.origin, e.destination, e.weight).unwrap(), was_new);
                        insert_reference(&mut reference, &e, directed);
                    }
                    assert_matches_reference(&graph, &reference);

                    for _ in 0..100 {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);

                        let present = reference[u as usize][v as usize].take().is_some();
                        if !directed {
                            reference[v as usize][u as usize] = None;
                        }
                        assert_eq!(graph.remove_edge(u, v).unwrap(), present);
                        assert!(!graph.has_edge(u, v));
                        if !directed {
                            assert!(!graph.has_edge(v, u));
                        }
                    }
                    assert_matches_reference(&graph, &reference);

                    assert!(matches!(
                        graph.insert_edge(0, n, 1.0),
                        Err(GraphError::InvalidIndex { index, .. }) if index == n
                    ));
                    assert!(graph.remove_edge(n + 3, 0).is_err());
                }
            }

            #[test]
            fn vertex_editing() {
                let rng = &mut Pcg64Mcg::seed_from_u64(5);

                for directed in [false, true] {
                    let n: NumNodes = 12;
                    let edges = random_edges(rng, n, 40);
                    let mut graph = <$graph>::from_edges(n, directed, true, edges.iter()).unwrap();
                    let mut reference: Reference = vec![vec![None; n as usize]; n as usize];
                    edges
                        .iter()
                        .for_each(|e| insert_reference(&mut reference, e, directed));
                    let mut labels = (0..n).map(|u| u.to_string()).collect_vec();

                    while !graph.is_empty() {
                        let u = rng.random_range(0..graph.number_of_nodes());

                        assert_eq!(graph.remove_vertex(u).unwrap(), labels.remove(u as usize));
                        reference.remove(u as usize);
                        reference.iter_mut().for_each(|row| {
                            row.remove(u as usize);
                        });

                        assert_matches_reference(&graph, &reference);
                        assert_eq!(graph.labels().collect_vec(), labels);
                        assert_eq!(graph.edges().count(), graph.number_of_edges() as usize);
                    }

                    assert!(graph.remove_vertex(0).is_err());
                    assert_eq!(graph.insert_vertex("x").unwrap(), 0);
                    assert!(matches!(
                        graph.insert_vertex("x"),
                        Err(GraphError::DuplicateVertex(_))
                    ));
                    assert_eq!(graph.insert_vertex("y").unwrap(), 1);
                    assert!(graph.add_edge(0, 1).unwrap());
                    assert!(graph.has_edge(0, 1));
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
