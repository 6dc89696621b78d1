//! 图核心模块
//!
//! 定义泛型图的核心数据结构

mod graph;

pub use graph::{Graph, VertexKey};
