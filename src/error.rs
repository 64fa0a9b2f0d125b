//! Errors reported when validating the structure of a tree.

use thiserror::Error;

/// A violation of one of the invariants of a left-leaning red black tree.
///
/// Ranks refer to the in-order position of the offending node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RedBlackError {
    #[error("root link is red")]
    RedRoot,
    #[error("key at rank {rank} is not greater than its predecessor")]
    UnsortedKeys { rank: usize },
    #[error("node at rank {rank} has a right-leaning red link")]
    RightLeaningRed { rank: usize },
    #[error("red node at rank {rank} has a red left child")]
    ConsecutiveReds { rank: usize },
    #[error("black height of left subtree is {left}, right subtree is {right}")]
    UnbalancedBlacks { left: usize, right: usize },
    #[error("subtree size is {actual}, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, RedBlackError>;
