use std::collections::TryReserveError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("new capacity {requested} is less than current capacity {current}")]
    CapacityShrink { current: usize, requested: usize },
    #[error("vertex {id} is out of range for capacity {capacity}")]
    VertexOutOfRange { id: usize, capacity: usize },
    #[error("vertex {id} on line {line} is too large to size a graph for")]
    CapacityOverflow { line: usize, id: usize },
    #[error("cannot allocate {requested} vertex slots")]
    AllocationFailed {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
    #[error("no vertex in this graph")]
    EmptyGraph,
    #[error("malformed record on line {line} (got {content:?})")]
    MalformedRecord { line: usize, content: String },
    #[error("add edge to graph failed on line {line}")]
    BuildFailed {
        line: usize,
        #[source]
        source: Box<GraphError>,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
