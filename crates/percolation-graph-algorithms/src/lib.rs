pub mod common;
pub mod community;
pub mod traversal;

pub use common::GraphView;
pub use community::{weakly_connected_components, WccResult};
pub use traversal::{bfs_component, largest_component_size};
