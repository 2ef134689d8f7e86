//! The core of the router library.
//!
//! The engine module builds a graph from a snapshot of route segments and
//! finds the cheapest simple path between two labels by enumerating every
//! simple path between them.

/// The router engine module.
pub mod engine {
    use std::{
        collections::HashMap,
        fmt::{Display, Formatter, Result},
    };

    use petgraph::{graph::NodeIndex, stable_graph::StableDiGraph};

    use crate::router::router_types::{
        edge::{Cost, Edge},
        outcome::Outcome,
    };
    use crate::router::router_utils::{
        explorer::PathExplorer,
        graph::{build_graph, outgoing_in_order},
        selector::select_cheapest,
    };

    /// Error types for the router engine.
    ///
    /// # Errors
    /// * `SearchAborted` - The search entered more nodes than the
    ///   configured ceiling allows
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub enum RouterError {
        /// The expansion ceiling was exceeded.
        ///
        /// Expected message: "Search aborted"
        SearchAborted,
    }

    impl Display for RouterError {
        fn fmt(&self, f: &mut Formatter) -> Result {
            match self {
                RouterError::SearchAborted => write!(f, "Search aborted"),
            }
        }
    }

    impl std::error::Error for RouterError {}

    /// Optional bounds on the exhaustive search.
    #[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
    pub struct SearchLimits {
        /// Maximum number of nodes the explorer may enter, counted over
        /// every branch. `None` searches exhaustively.
        pub max_expansions: Option<u64>,
    }

    impl SearchLimits {
        /// No ceiling.
        pub const UNLIMITED: SearchLimits = SearchLimits {
            max_expansions: None,
        };
    }

    /// A Router holds the graph built from one snapshot of edges and a
    /// hashmap that maps a label to its index in the graph.
    ///
    /// Nothing is cached between snapshots: build a new Router for every
    /// query.
    #[derive(Debug)]
    pub struct Router<'a> {
        pub(crate) graph: StableDiGraph<&'a str, Cost>,
        pub(crate) node_indices: HashMap<&'a str, NodeIndex>,
    }

    impl<'a> Router<'a> {
        /// Creates a new router over the given edges.
        ///
        /// # Arguments
        /// * `edges` - Route segments in store order. The order decides
        ///   which path wins a cost tie.
        pub fn new(edges: &'a [Edge]) -> Router<'a> {
            let (graph, node_indices) = build_graph(edges);
            let router = Router {
                graph,
                node_indices,
            };
            router_debug!(
                "(Router::new) {} labels, {} edges.",
                router.get_node_count(),
                router.get_edge_count()
            );
            router
        }

        /// Get the NodeIndex for a label.
        pub fn get_node_index(&self, label: &str) -> Option<NodeIndex> {
            self.node_indices.get(label).copied()
        }

        /// Get a label by NodeIndex.
        pub fn get_label(&self, index: NodeIndex) -> Option<&'a str> {
            self.graph.node_weight(index).copied()
        }

        /// Return the number of distinct labels in the graph.
        pub fn get_node_count(&self) -> usize {
            self.graph.node_count()
        }

        /// Return the number of edges in the graph.
        pub fn get_edge_count(&self) -> usize {
            self.graph.edge_count()
        }

        /// Outgoing neighbours of a node with their edge costs, in edge
        /// insertion order.
        pub fn outgoing(&self, index: NodeIndex) -> Vec<(NodeIndex, Cost)> {
            outgoing_in_order(&self.graph, index)
        }

        /// Find the cheapest simple path between two labels.
        ///
        /// Identical labels short-circuit to
        /// [`Outcome::IdenticalEndpoints`] without searching. A label that
        /// no edge mentions cannot be reached, so it yields
        /// [`Outcome::NoRoute`].
        ///
        /// # Arguments
        /// * `origin` - The label to start from.
        /// * `destination` - The label to end at.
        /// * `limits` - Optional search ceiling.
        pub fn find_cheapest_path(
            &self,
            origin: &str,
            destination: &str,
            limits: SearchLimits,
        ) -> Outcome {
            if origin == destination {
                router_debug!(
                    "(find_cheapest_path) origin and destination are both [{}].",
                    origin
                );
                return Outcome::IdenticalEndpoints;
            }

            let (Some(from), Some(to)) = (
                self.get_node_index(origin),
                self.get_node_index(destination),
            ) else {
                router_debug!(
                    "(find_cheapest_path) [{}] or [{}] is not part of any route.",
                    origin,
                    destination
                );
                return Outcome::NoRoute;
            };

            let candidates = match PathExplorer::new(self, to, limits).explore(from) {
                Ok(candidates) => candidates,
                Err(e) => {
                    router_warn!(
                        "(find_cheapest_path) {} from [{}] to [{}], limits {:?}.",
                        e,
                        origin,
                        destination,
                        limits
                    );
                    return Outcome::SearchAborted;
                }
            };
            router_debug!(
                "(find_cheapest_path) {} candidate paths from [{}] to [{}].",
                candidates.len(),
                origin,
                destination
            );

            match select_cheapest(candidates) {
                Some(winner) => {
                    router_debug!(
                        "(find_cheapest_path) winner has {} hops at {}.",
                        winner.hops(),
                        winner.total_cost
                    );
                    Outcome::Found(winner)
                }
                None => Outcome::NoRoute,
            }
        }
    }

    /// Find the cheapest simple path between `origin` and `destination`
    /// over a snapshot of edges, searching exhaustively.
    ///
    /// Identical labels return before the graph is built.
    pub fn find_cheapest_path(edges: &[Edge], origin: &str, destination: &str) -> Outcome {
        if origin == destination {
            return Outcome::IdenticalEndpoints;
        }

        Router::new(edges).find_cheapest_path(origin, destination, SearchLimits::UNLIMITED)
    }
}

#[cfg(test)]
mod router_tests {
    use crate::router::router_types::{
        candidate::Candidate,
        edge::Edge,
        outcome::Outcome,
        router::engine::{find_cheapest_path, Router, SearchLimits},
    };
    use crate::test_util::{labels, seed_edges};

    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn found(path: &[&str], cost: Decimal) -> Outcome {
        Outcome::Found(Candidate {
            path: labels(path),
            total_cost: cost,
        })
    }

    #[tokio::test]
    async fn test_seed_routes_cheapest_path() {
        crate::get_log_handle().await;
        ut_info!("(test_seed_routes_cheapest_path) Start.");

        let edges = seed_edges();
        let result = find_cheapest_path(&edges, "GRU", "CDG");

        // 10 + 5 + 20 + 5 beats the direct 75 and GRU-SCL-ORL-CDG at 45
        assert_eq!(result, found(&["GRU", "BRC", "SCL", "ORL", "CDG"], dec!(40)));

        ut_info!("(test_seed_routes_cheapest_path) Success.");
    }

    #[test]
    fn test_smaller_graph_cheapest_path() {
        let edges = vec![
            Edge::new("GRU", "BRC", dec!(10)),
            Edge::new("BRC", "SCL", dec!(5)),
            Edge::new("SCL", "CDG", dec!(15)),
            Edge::new("GRU", "CDG", dec!(50)),
        ];

        let result = find_cheapest_path(&edges, "GRU", "CDG");
        assert_eq!(result, found(&["GRU", "BRC", "SCL", "CDG"], dec!(30)));
    }

    #[test]
    fn test_identical_endpoints_never_search() {
        let edges = seed_edges();
        assert_eq!(
            find_cheapest_path(&edges, "GRU", "GRU"),
            Outcome::IdenticalEndpoints
        );
        assert_eq!(find_cheapest_path(&[], "X", "X"), Outcome::IdenticalEndpoints);

        // a ceiling of zero would abort any real search
        let router = Router::new(&edges);
        let limits = SearchLimits {
            max_expansions: Some(0),
        };
        assert_eq!(
            router.find_cheapest_path("SCL", "SCL", limits),
            Outcome::IdenticalEndpoints
        );
    }

    #[test]
    fn test_empty_edges_no_route() {
        assert_eq!(find_cheapest_path(&[], "A", "B"), Outcome::NoRoute);
    }

    #[test]
    fn test_unknown_destination_no_route() {
        let edges = seed_edges();
        assert_eq!(find_cheapest_path(&edges, "SCL", "XXX"), Outcome::NoRoute);
        assert_eq!(find_cheapest_path(&edges, "XXX", "GRU"), Outcome::NoRoute);
    }

    #[test]
    fn test_unreachable_against_edge_direction() {
        // CDG only ever appears as a destination
        let edges = seed_edges();
        assert_eq!(find_cheapest_path(&edges, "CDG", "GRU"), Outcome::NoRoute);
    }

    #[test]
    fn test_dangling_edges_are_ignored() {
        let edges = vec![
            Edge::new("A", "DEAD", dec!(1)),
            Edge::new("A", "B", dec!(5)),
            Edge::new("DEAD", "END", dec!(1)),
        ];
        assert_eq!(find_cheapest_path(&edges, "A", "B"), found(&["A", "B"], dec!(5)));
    }

    #[test]
    fn test_cycles_and_self_loops_terminate() {
        let edges = vec![
            Edge::new("A", "A", dec!(1)),
            Edge::new("A", "B", dec!(1)),
            Edge::new("B", "A", dec!(1)),
            Edge::new("B", "B", dec!(1)),
            Edge::new("B", "C", dec!(1)),
            Edge::new("C", "A", dec!(1)),
            Edge::new("C", "D", dec!(1)),
        ];
        assert_eq!(
            find_cheapest_path(&edges, "A", "D"),
            found(&["A", "B", "C", "D"], dec!(3))
        );
        assert_eq!(find_cheapest_path(&edges, "D", "A"), Outcome::NoRoute);
    }

    #[test]
    fn test_tie_goes_to_first_enumerated_path() {
        let edges = vec![
            Edge::new("A", "B", dec!(5)),
            Edge::new("A", "C", dec!(5)),
            Edge::new("B", "D", dec!(5)),
            Edge::new("C", "D", dec!(5)),
        ];
        assert_eq!(
            find_cheapest_path(&edges, "A", "D"),
            found(&["A", "B", "D"], dec!(10))
        );

        let reversed: Vec<Edge> = edges.into_iter().rev().collect();
        assert_eq!(
            find_cheapest_path(&reversed, "A", "D"),
            found(&["A", "C", "D"], dec!(10))
        );
    }

    #[test]
    fn test_tie_is_not_decided_by_path_length() {
        // the longer path is enumerated first and wins the tie
        let edges = vec![
            Edge::new("A", "B", dec!(1)),
            Edge::new("B", "C", dec!(1)),
            Edge::new("A", "C", dec!(2)),
        ];
        assert_eq!(
            find_cheapest_path(&edges, "A", "C"),
            found(&["A", "B", "C"], dec!(2))
        );
    }

    #[test]
    fn test_fractional_costs_tie_exactly() {
        // 0.1 + 0.2 equals 0.3, so the path enumerated first keeps the tie
        let edges = vec![
            Edge::new("A", "B", dec!(0.1)),
            Edge::new("B", "C", dec!(0.2)),
            Edge::new("A", "C", dec!(0.3)),
        ];
        assert_eq!(
            find_cheapest_path(&edges, "A", "C"),
            found(&["A", "B", "C"], dec!(0.3))
        );

        let edges = vec![
            Edge::new("A", "C", dec!(0.3)),
            Edge::new("A", "B", dec!(0.1)),
            Edge::new("B", "C", dec!(0.2)),
        ];
        assert_eq!(
            find_cheapest_path(&edges, "A", "C"),
            found(&["A", "C"], dec!(0.3))
        );
    }

    #[test]
    fn test_parallel_edges_cheapest_is_used() {
        let edges = vec![
            Edge::new("A", "B", dec!(9)),
            Edge::new("B", "C", dec!(1)),
            Edge::new("A", "B", dec!(2)),
        ];
        assert_eq!(
            find_cheapest_path(&edges, "A", "C"),
            found(&["A", "B", "C"], dec!(3))
        );
    }

    #[test]
    fn test_search_ceiling() {
        let edges = seed_edges();
        let router = Router::new(&edges);

        let tight = SearchLimits {
            max_expansions: Some(1),
        };
        assert_eq!(
            router.find_cheapest_path("GRU", "CDG", tight),
            Outcome::SearchAborted
        );

        let generous = SearchLimits {
            max_expansions: Some(1_000),
        };
        assert_eq!(
            router.find_cheapest_path("GRU", "CDG", generous),
            router.find_cheapest_path("GRU", "CDG", SearchLimits::UNLIMITED)
        );
    }

    #[test]
    fn test_router_counts() {
        let edges = seed_edges();
        let router = Router::new(&edges);

        assert_eq!(router.get_node_count(), 5);
        assert_eq!(router.get_edge_count(), 7);

        let Some(index) = router.get_node_index("ORL") else {
            panic!("ORL should be indexed");
        };
        assert_eq!(router.get_label(index), Some("ORL"));
        assert_eq!(router.get_node_index("orl"), None);
    }
}
