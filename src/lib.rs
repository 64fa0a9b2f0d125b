//! Ordered collections backed by a left-leaning red black tree.
//!
//! Every node tracks the size of its subtree, so on top of the usual ordered map operations the
//! collections answer order-statistics queries (`rank`, `select`) in logarithmic time.

mod entry;
pub mod error;
pub mod red_black_tree;
