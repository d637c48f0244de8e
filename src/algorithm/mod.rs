pub mod dijkstra;
pub mod extract;
pub mod prim;
pub mod result;

pub use result::{Predecessor, ShortestPathResult};
