//! GraphKit - 通用图分析工具库
//!
//! 面向内存图的经典算法库，支持：
//! - 可变的泛型图 ADT（有向/无向、带权邻接表）
//! - 遍历与最短路径（BFS、Dijkstra、Bellman-Ford）
//! - 结构分析（二分图判定、拓扑排序、Tarjan 强连通分量）
//! - 迭代式 PageRank 与图度量（直径、聚集系数）

pub mod algorithm;
pub mod error;
pub mod graph;

// 重导出常用类型
pub use algorithm::{
    average_clustering_coefficient, bellman_ford, bfs, bfs_range, clustering_coefficient,
    diameter, dijkstra, is_bipartite, page_rank, page_rank_default,
    strongly_connected_components, topological_order, BfsTree, Diameter, PageRankConfig,
    ShortestPaths,
};
pub use error::{Error, Result};
pub use graph::{Graph, VertexKey};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
