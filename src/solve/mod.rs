//! Adversarial evaluation over the directed game-tree model.

pub mod alpha_beta;
pub mod minimax;

pub use alpha_beta::alpha_beta;
pub use minimax::minimax;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which player's turn a node is evaluated for.
pub enum Role {
    Maximizing,
    Minimizing,
}

impl Role {
    #[inline]
    pub fn other(self) -> Role {
        match self {
            Role::Maximizing => Role::Minimizing,
            Role::Minimizing => Role::Maximizing,
        }
    }
}
