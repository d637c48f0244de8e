pub mod adjacency;
pub mod data;
pub mod generators;
pub mod traits;

pub use adjacency::AdjacencyGraph;
pub use data::{DataArray, DataArrays, EdgeWeights};
pub use traits::{EdgeId, Graph, MutableGraph};
