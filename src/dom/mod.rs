//! DOM arena: slotmap-backed element tree, the reference construction primitive.

pub mod node;
pub mod tree;

pub use node::{NodeData, NodeId};
pub use tree::Dom;
