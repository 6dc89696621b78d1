//! 图数据结构
//!
//! 基于邻接表（顶点 -> 邻居 -> 权重）的泛型内存图

use indexmap::IndexMap;
use rand::Rng;
use std::fmt::Debug;
use std::hash::Hash;

/// 顶点键约束：可哈希、可比较、可克隆
///
/// 对满足条件的类型自动实现，调用方无需手动声明
pub trait VertexKey: Eq + Hash + Ord + Clone + Debug {}

impl<T: Eq + Hash + Ord + Clone + Debug> VertexKey for T {}

/// 泛型图
///
/// 每个顶点持有一条邻接记录（邻居 -> 边权重）。`directed` 在构造时固定，
/// 无向图的边在插入/删除时自动镜像。
///
/// 迭代顺序按插入顺序稳定，但属于实现细节，调用方不应依赖。
#[derive(Debug, Clone)]
pub struct Graph<K> {
    /// 顶点 -> 邻接记录
    vertices: IndexMap<K, IndexMap<K, f64>>,
    /// 是否有向
    directed: bool,
}

impl<K: VertexKey> Graph<K> {
    /// 创建图，`directed` 决定边是否镜像
    pub fn new(directed: bool) -> Self {
        Self {
            vertices: IndexMap::new(),
            directed,
        }
    }

    /// 创建无向图
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// 创建有向图
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// 是否有向
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点，已存在时不做任何修改并返回 false
    pub fn add_vertex(&mut self, key: K) -> bool {
        if self.vertices.contains_key(&key) {
            return false;
        }
        self.vertices.insert(key, IndexMap::new());
        true
    }

    /// 删除顶点及其所有关联边（两个方向），顶点不存在时返回 false
    pub fn remove_vertex(&mut self, key: &K) -> bool {
        if self.vertices.shift_remove(key).is_none() {
            return false;
        }
        for (_, adjacency) in self.vertices.iter_mut() {
            adjacency.shift_remove(key);
        }
        true
    }

    /// 顶点是否存在
    pub fn contains(&self, key: &K) -> bool {
        self.vertices.contains_key(key)
    }

    /// 顶点数量
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// 是否为空图
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// 均匀随机选取一个顶点，空图返回 None
    ///
    /// 随机源由调用方注入，测试可传入固定种子的 RNG
    pub fn random_vertex<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&K> {
        if self.vertices.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.vertices.len());
        self.vertices.get_index(index).map(|(key, _)| key)
    }

    /// 迭代所有顶点（顺序不作保证）
    pub fn vertices(&self) -> impl Iterator<Item = &K> {
        self.vertices.keys()
    }

    // ==================== 边操作 ====================

    /// 添加带权边，两个端点都存在时才生效；无向图自动镜像
    ///
    /// 重复添加会覆盖旧权重
    pub fn add_edge(&mut self, from: K, to: K, weight: f64) -> bool {
        if !self.vertices.contains_key(&from) || !self.vertices.contains_key(&to) {
            return false;
        }
        if let Some(adjacency) = self.vertices.get_mut(&from) {
            adjacency.insert(to.clone(), weight);
        }
        if !self.directed {
            if let Some(adjacency) = self.vertices.get_mut(&to) {
                adjacency.insert(from, weight);
            }
        }
        true
    }

    /// 添加权重为 1 的边
    pub fn add_edge_unweighted(&mut self, from: K, to: K) -> bool {
        self.add_edge(from, to, 1.0)
    }

    /// 删除边并返回其权重，边不存在时返回 None；无向图镜像删除
    pub fn remove_edge(&mut self, from: &K, to: &K) -> Option<f64> {
        let weight = self.vertices.get_mut(from)?.shift_remove(to)?;
        if !self.directed && from != to {
            if let Some(adjacency) = self.vertices.get_mut(to) {
                adjacency.shift_remove(from);
            }
        }
        Some(weight)
    }

    /// 两个顶点之间是否存在 from -> to 的边
    pub fn are_connected(&self, from: &K, to: &K) -> bool {
        self.vertices
            .get(from)
            .map_or(false, |adjacency| adjacency.contains_key(to))
    }

    /// 边的权重，边不存在时返回 None
    pub fn weight(&self, from: &K, to: &K) -> Option<f64> {
        self.vertices.get(from)?.get(to).copied()
    }

    /// 迭代所有存储的 (起点, 终点, 权重) 三元组
    ///
    /// 无向图的一条边会产出两个镜像三元组
    pub fn edges(&self) -> impl Iterator<Item = (&K, &K, f64)> {
        self.vertices.iter().flat_map(|(from, adjacency)| {
            adjacency.iter().map(move |(to, weight)| (from, to, *weight))
        })
    }

    // ==================== 邻居查询 ====================

    /// 迭代顶点的邻居，顶点不存在时迭代器为空
    pub fn neighbors(&self, key: &K) -> impl Iterator<Item = &K> {
        self.vertices
            .get(key)
            .into_iter()
            .flat_map(|adjacency| adjacency.keys())
    }

    /// 顶点的邻接记录大小（出度），顶点不存在时为 0
    pub fn degree(&self, key: &K) -> usize {
        self.vertices.get(key).map_or(0, |adjacency| adjacency.len())
    }
}

impl<'a, K: VertexKey> IntoIterator for &'a Graph<K> {
    type Item = &'a K;
    type IntoIter = indexmap::map::Keys<'a, K, IndexMap<K, f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.keys()
    }
}
