pub mod entity;
pub mod error;
pub mod graph;
pub mod loader;

pub use entity::{Edge, Vertex};
pub use error::{GraphError, Result};
pub use graph::Graph;
