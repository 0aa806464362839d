use searchlab::context::{SearchContext, SearchError};
use searchlab::search::astar::a_star;
use searchlab::search::beam::beam;
use searchlab::search::hill::hill_climbing;
use searchlab::search::oracle::oracle;

/// Worked example: A-B(1), B-D(5), A-C(2), C-D(1), D-E(1);
/// h(A)=4, h(B)=3, h(C)=2, h(D)=1, h(E)=0 (admissible and consistent).
fn worked_example() -> SearchContext {
    let mut cx = SearchContext::new();
    for (name, h) in [("A", 4.0), ("B", 3.0), ("C", 2.0), ("D", 1.0), ("E", 0.0)] {
        cx.graph.add_node_with_heuristic(name, h).unwrap();
    }
    cx.graph.add_edge("A", "B", 1.0).unwrap();
    cx.graph.add_edge("B", "D", 5.0).unwrap();
    cx.graph.add_edge("A", "C", 2.0).unwrap();
    cx.graph.add_edge("C", "D", 1.0).unwrap();
    cx.graph.add_edge("D", "E", 1.0).unwrap();
    cx
}

#[test]
fn a_star_matches_oracle_on_worked_example() {
    let cx = worked_example();
    let a = cx.graph.resolve("A").unwrap();
    let e = cx.graph.resolve("E").unwrap();

    let found = a_star(&cx, a, e).unwrap().unwrap();
    assert_eq!(cx.graph.names(&found.nodes), vec!["A", "C", "D", "E"]);
    assert_eq!(found.cost, 4.0);

    let truth = oracle(&cx, a, e).unwrap().unwrap();
    assert_eq!(truth.cost, found.cost);
}

#[test]
fn a_star_with_inadmissible_heuristic_terminates() {
    // Wildly overestimating C pushes the search away from the optimal path.
    // The result may be suboptimal but must still be a valid path, not an
    // error or a hang.
    let mut cx = worked_example();
    cx.graph.add_node_with_heuristic("C", 100.0).unwrap();
    let a = cx.graph.resolve("A").unwrap();
    let e = cx.graph.resolve("E").unwrap();

    let found = a_star(&cx, a, e).unwrap().unwrap();
    assert!(found.cost >= 4.0);
    assert_eq!(found.nodes.first().copied(), Some(a));
    assert_eq!(found.nodes.last().copied(), Some(e));
}

#[test]
fn a_star_missing_heuristic_is_an_error() {
    let mut cx = worked_example();
    cx.graph.add_node("F");
    cx.graph.add_edge("A", "F", 1.0).unwrap();
    let a = cx.graph.resolve("A").unwrap();
    let e = cx.graph.resolve("E").unwrap();

    let err = a_star(&cx, a, e).unwrap_err();
    assert!(matches!(err, SearchError::MissingHeuristic { node } if node == "F"));
}

#[test]
fn a_star_disconnected_is_not_found() {
    let mut cx = worked_example();
    let z = cx.graph.add_node_with_heuristic("Z", 0.0).unwrap();
    let a = cx.graph.resolve("A").unwrap();

    assert!(a_star(&cx, a, z).unwrap().is_none());
}

#[test]
fn oracle_reports_true_shortest_path() {
    let cx = worked_example();
    let a = cx.graph.resolve("A").unwrap();
    let e = cx.graph.resolve("E").unwrap();

    let truth = oracle(&cx, a, e).unwrap().unwrap();
    assert_eq!(cx.graph.names(&truth.nodes), vec!["A", "C", "D", "E"]);
    assert_eq!(truth.cost, 4.0);
}

#[test]
fn oracle_disconnected_is_not_found() {
    let mut cx = worked_example();
    let z = cx.graph.add_node("Z");
    let a = cx.graph.resolve("A").unwrap();

    assert!(oracle(&cx, a, z).unwrap().is_none());
}

#[test]
fn beam_with_sufficient_width_reaches_goal() {
    let cx = worked_example();
    let a = cx.graph.resolve("A").unwrap();
    let e = cx.graph.resolve("E").unwrap();

    let found = beam(&cx, a, e, 10).unwrap().unwrap();
    assert_eq!(cx.graph.names(&found.nodes), vec!["A", "C", "D", "E"]);
    assert_eq!(found.cost, 4.0);
}

#[test]
fn beam_width_one_is_pure_greedy_descent() {
    let cx = worked_example();
    let a = cx.graph.resolve("A").unwrap();
    let e = cx.graph.resolve("E").unwrap();

    // The heuristic descends monotonically along A,C,D,E, so width 1 still
    // gets there.
    let found = beam(&cx, a, e, 1).unwrap().unwrap();
    assert_eq!(cx.graph.names(&found.nodes), vec!["A", "C", "D", "E"]);
}

#[test]
fn narrow_beam_can_discard_the_only_path() {
    // The only route to G goes through X, but X looks worse than the dead
    // end T. Width 1 keeps T and loses; that incompleteness is by design.
    let mut cx = SearchContext::new();
    for (name, h) in [("S", 3.0), ("X", 5.0), ("T", 1.0), ("G", 0.0)] {
        cx.graph.add_node_with_heuristic(name, h).unwrap();
    }
    cx.graph.add_edge("S", "X", 1.0).unwrap();
    cx.graph.add_edge("S", "T", 1.0).unwrap();
    cx.graph.add_edge("X", "G", 1.0).unwrap();
    let s = cx.graph.resolve("S").unwrap();
    let g = cx.graph.resolve("G").unwrap();

    assert!(beam(&cx, s, g, 1).unwrap().is_none());
    assert!(beam(&cx, s, g, 2).unwrap().is_some());
}

#[test]
fn beam_width_zero_is_invalid() {
    let cx = worked_example();
    let a = cx.graph.resolve("A").unwrap();
    let e = cx.graph.resolve("E").unwrap();

    let err = beam(&cx, a, e, 0).unwrap_err();
    assert!(matches!(err, SearchError::InvalidQuery { .. }));
}

#[test]
fn hill_climbing_follows_the_descent() {
    let cx = worked_example();
    let a = cx.graph.resolve("A").unwrap();
    let e = cx.graph.resolve("E").unwrap();

    let found = hill_climbing(&cx, a, e).unwrap().unwrap();
    assert_eq!(cx.graph.names(&found.nodes), vec!["A", "C", "D", "E"]);
    assert_eq!(found.cost, 4.0);
}

#[test]
fn hill_climbing_stops_at_local_optimum() {
    // S's only neighbor ties S's heuristic; the strict-improvement rule
    // stops there even though G is reachable through it.
    let mut cx = SearchContext::new();
    for (name, h) in [("S", 2.0), ("T", 2.0), ("G", 0.0)] {
        cx.graph.add_node_with_heuristic(name, h).unwrap();
    }
    cx.graph.add_edge("S", "T", 1.0).unwrap();
    cx.graph.add_edge("T", "G", 1.0).unwrap();
    let s = cx.graph.resolve("S").unwrap();
    let g = cx.graph.resolve("G").unwrap();

    assert!(hill_climbing(&cx, s, g).unwrap().is_none());
}

#[test]
fn hill_climbing_with_no_neighbors_is_not_found() {
    let mut cx = SearchContext::new();
    let s = cx.graph.add_node_with_heuristic("S", 1.0).unwrap();
    let g = cx.graph.add_node_with_heuristic("G", 0.0).unwrap();

    assert!(hill_climbing(&cx, s, g).unwrap().is_none());
}

#[test]
fn hill_climbing_start_equals_goal() {
    let cx = worked_example();
    let a = cx.graph.resolve("A").unwrap();

    let found = hill_climbing(&cx, a, a).unwrap().unwrap();
    assert_eq!(found.nodes, vec![a]);
}
