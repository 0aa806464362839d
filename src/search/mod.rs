//! Path-search strategies over the undirected weighted graph.

pub mod astar;
pub mod beam;
pub mod branch_bound;
pub mod frontier;
pub mod hill;
pub mod oracle;
pub mod resources;
pub mod uninformed;
