//! 图算法模块
//!
//! 包含遍历、最短路径、结构分析、排名与度量算法
//! 所有算法只读取图结构，不做任何修改

mod metrics;
mod ranking;
mod shortest_path;
mod structure;
mod traversal;

pub use metrics::{average_clustering_coefficient, clustering_coefficient, diameter, Diameter};
pub use ranking::{page_rank, page_rank_default, PageRankConfig};
pub use shortest_path::{bellman_ford, dijkstra, ShortestPaths};
pub use structure::{is_bipartite, strongly_connected_components, topological_order};
pub use traversal::{bfs, bfs_range, BfsTree};
