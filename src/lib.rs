//! A collection of graph and game-tree search strategies over a shared
//! weighted-graph model: uninformed search (breadth-first, depth-first,
//! bidirectional), heuristic-guided search (A*, beam, hill climbing, a
//! branch-and-bound family), a Dijkstra oracle for ground truth, and
//! adversarial evaluation (minimax, alpha-beta).

pub mod context;
pub mod game;
pub mod graph;
pub mod path;
pub mod run;
pub mod search;
pub mod solve;
