use searchlab::context::{SearchContext, SearchError};
use searchlab::search::branch_bound::{
    branch_and_bound, branch_and_bound_greedy_exit, branch_and_bound_heuristic, greedy_best_first,
};
use searchlab::search::oracle::oracle;

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
fn plain_branch_and_bound_matches_oracle() {
    let cx = worked_example();
    let a = cx.graph.resolve("A").unwrap();
    let e = cx.graph.resolve("E").unwrap();

    let found = branch_and_bound(&cx, a, e).unwrap().unwrap();
    let truth = oracle(&cx, a, e).unwrap().unwrap();
    assert_eq!(found.cost, truth.cost);
    assert_eq!(found.cost, 4.0);
    assert_eq!(cx.graph.names(&found.nodes), vec!["A", "C", "D", "E"]);
}

#[test]
fn plain_branch_and_bound_matches_oracle_on_a_denser_graph() {
    // Two crossing shortcuts; the cheap route is not the first discovered.
    let mut cx = SearchContext::new();
    cx.graph.add_edge("S", "A", 4.0).unwrap();
    cx.graph.add_edge("S", "B", 1.0).unwrap();
    cx.graph.add_edge("A", "G", 1.0).unwrap();
    cx.graph.add_edge("B", "A", 1.0).unwrap();
    cx.graph.add_edge("B", "G", 5.0).unwrap();
    let s = cx.graph.resolve("S").unwrap();
    let g = cx.graph.resolve("G").unwrap();

    let found = branch_and_bound(&cx, s, g).unwrap().unwrap();
    let truth = oracle(&cx, s, g).unwrap().unwrap();
    assert_eq!(found.cost, truth.cost);
    assert_eq!(found.cost, 3.0);
}

#[test]
fn branch_and_bound_disconnected_is_not_found() {
    let mut cx = worked_example();
    let z = cx.graph.add_node("Z");
    let a = cx.graph.resolve("A").unwrap();

    assert!(branch_and_bound(&cx, a, z).unwrap().is_none());
}

#[test]
fn heuristic_variant_matches_oracle_with_admissible_heuristic() {
    let cx = worked_example();
    let a = cx.graph.resolve("A").unwrap();
    let e = cx.graph.resolve("E").unwrap();

    let found = branch_and_bound_heuristic(&cx, a, e).unwrap().unwrap();
    assert_eq!(found.cost, 4.0);
    assert_eq!(cx.graph.names(&found.nodes), vec!["A", "C", "D", "E"]);
}

#[test]
fn greedy_exit_without_bound_returns_first_goal_pop() {
    let cx = worked_example();
    let a = cx.graph.resolve("A").unwrap();
    let e = cx.graph.resolve("E").unwrap();

    // No bound is +infinity: the first goal pop is accepted outright. With
    // this admissible heuristic that first pop happens to be optimal.
    let found = branch_and_bound_greedy_exit(&cx, a, e, None).unwrap().unwrap();
    assert_eq!(found.cost, 4.0);
}

#[test]
fn greedy_exit_accepts_good_enough_cost() {
    let cx = worked_example();
    let a = cx.graph.resolve("A").unwrap();
    let e = cx.graph.resolve("E").unwrap();

    let found = branch_and_bound_greedy_exit(&cx, a, e, Some(10.0))
        .unwrap()
        .unwrap();
    assert!(found.cost <= 10.0);
}

#[test]
fn greedy_exit_unmet_bound_falls_back_to_best_path() {
    let cx = worked_example();
    let a = cx.graph.resolve("A").unwrap();
    let e = cx.graph.resolve("E").unwrap();

    // No path costs <= 3, so the early exit never fires and exhaustion
    // reports the optimum instead.
    let found = branch_and_bound_greedy_exit(&cx, a, e, Some(3.0))
        .unwrap()
        .unwrap();
    assert_eq!(found.cost, 4.0);
}

#[test]
fn greedy_exit_rejects_negative_bound() {
    let cx = worked_example();
    let a = cx.graph.resolve("A").unwrap();
    let e = cx.graph.resolve("E").unwrap();

    let err = branch_and_bound_greedy_exit(&cx, a, e, Some(-1.0)).unwrap_err();
    assert!(matches!(err, SearchError::InvalidQuery { .. }));
}

#[test]
fn greedy_best_first_is_heuristic_only_and_reports_true_cost() {
    // The direct edge to G is expensive but G's heuristic (0) beats B's, so
    // heuristic-only ordering pops G through the costly edge first.
    let mut cx = SearchContext::new();
    for (name, h) in [("A", 5.0), ("B", 6.0), ("G", 0.0)] {
        cx.graph.add_node_with_heuristic(name, h).unwrap();
    }
    cx.graph.add_edge("A", "B", 1.0).unwrap();
    cx.graph.add_edge("B", "G", 1.0).unwrap();
    cx.graph.add_edge("A", "G", 10.0).unwrap();
    let a = cx.graph.resolve("A").unwrap();
    let g = cx.graph.resolve("G").unwrap();

    let found = greedy_best_first(&cx, a, g).unwrap().unwrap();
    assert_eq!(cx.graph.names(&found.nodes), vec!["A", "G"]);
    assert_eq!(found.cost, 10.0);

    let truth = oracle(&cx, a, g).unwrap().unwrap();
    assert_eq!(truth.cost, 2.0);
}

#[test]
fn greedy_best_first_disconnected_is_not_found() {
    let mut cx = worked_example();
    let z = cx.graph.add_node_with_heuristic("Z", 0.0).unwrap();
    let a = cx.graph.resolve("A").unwrap();

    assert!(greedy_best_first(&cx, a, z).unwrap().is_none());
}
