pub mod adjacency_list;
pub mod kruskal;
pub mod prim;

pub use adjacency_list::Graph;
pub use prim::{
    minimum_spanning_tree, minimum_spanning_tree_with, FrontierStrategy, MinimumSpanningTree,
    MstConfig,
};
