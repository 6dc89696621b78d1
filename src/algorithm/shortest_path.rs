//! 最短路径算法
//!
//! Dijkstra（非负权重）与 Bellman-Ford（允许负权重、检测负权环）

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexKey};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use tracing::debug;

/// 最短路径结果
///
/// `distance` 覆盖图中全部顶点，未到达的顶点保持无穷大；
/// `parent` 只包含已到达的顶点（起点映射到 None）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortestPaths<K: VertexKey> {
    /// 顶点 -> 父顶点
    pub parent: HashMap<K, Option<K>>,
    /// 顶点 -> 距起点的最短路径总权重
    pub distance: HashMap<K, f64>,
}

/// 最小堆表项：按暂定距离排序，距离相同时按顶点键排序
struct HeapEntry<K> {
    distance: f64,
    vertex: K,
}

impl<K: Ord> PartialEq for HeapEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord> Eq for HeapEntry<K> {}

impl<K: Ord> Ord for HeapEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap 是最大堆，反转比较得到最小堆
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl<K: Ord> PartialOrd for HeapEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra 算法，计算起点到所有顶点的最短路径
///
/// 要求边权重非负，负权重下结果未定义，由调用方保证。
/// 堆中允许同一顶点的过期表项，出堆后由松弛判断自然失效。
pub fn dijkstra<K: VertexKey>(graph: &Graph<K>, origin: &K) -> Result<ShortestPaths<K>> {
    if !graph.contains(origin) {
        return Err(Error::vertex_not_found(origin));
    }

    let mut distance: HashMap<K, f64> = graph
        .vertices()
        .map(|v| (v.clone(), f64::INFINITY))
        .collect();
    let mut parent: HashMap<K, Option<K>> = HashMap::new();

    distance.insert(origin.clone(), 0.0);
    parent.insert(origin.clone(), None);

    let mut heap = BinaryHeap::new();
    heap.push(HeapEntry {
        distance: 0.0,
        vertex: origin.clone(),
    });

    while let Some(HeapEntry { vertex: v, .. }) = heap.pop() {
        let dist_v = distance.get(&v).copied().unwrap_or(f64::INFINITY);
        for w in graph.neighbors(&v) {
            let weight = graph.weight(&v, w).unwrap_or(f64::INFINITY);
            let candidate = dist_v + weight;
            if candidate < distance.get(w).copied().unwrap_or(f64::INFINITY) {
                distance.insert(w.clone(), candidate);
                parent.insert(w.clone(), Some(v.clone()));
                heap.push(HeapEntry {
                    distance: candidate,
                    vertex: w.clone(),
                });
            }
        }
    }

    Ok(ShortestPaths { parent, distance })
}

/// Bellman-Ford 算法，允许负权重
///
/// 对全部边做 |V| 轮松弛，之后再扫描一轮：仍可松弛说明存在
/// 可达的负权环，此时返回 Ok(None)，调用方必须先行分支判断
pub fn bellman_ford<K: VertexKey>(
    graph: &Graph<K>,
    origin: &K,
) -> Result<Option<ShortestPaths<K>>> {
    if !graph.contains(origin) {
        return Err(Error::vertex_not_found(origin));
    }

    let mut distance: HashMap<K, f64> = graph
        .vertices()
        .map(|v| (v.clone(), f64::INFINITY))
        .collect();
    let mut parent: HashMap<K, Option<K>> = HashMap::new();

    distance.insert(origin.clone(), 0.0);
    parent.insert(origin.clone(), None);

    // |V| 轮覆盖最长简单路径
    for _ in 0..graph.len() {
        for (v, w, weight) in graph.edges() {
            let dist_v = distance.get(v).copied().unwrap_or(f64::INFINITY);
            let candidate = dist_v + weight;
            if candidate < distance.get(w).copied().unwrap_or(f64::INFINITY) {
                distance.insert(w.clone(), candidate);
                parent.insert(w.clone(), Some(v.clone()));
            }
        }
    }

    // 检测轮：仍可松弛即存在负权环
    for (v, w, weight) in graph.edges() {
        let dist_v = distance.get(v).copied().unwrap_or(f64::INFINITY);
        if dist_v + weight < distance.get(w).copied().unwrap_or(f64::INFINITY) {
            debug!(?v, ?w, weight, "检测到负权环");
            return Ok(None);
        }
    }

    Ok(Some(ShortestPaths { parent, distance }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::bfs;

    fn weighted_graph() -> Graph<&'static str> {
        // a --1--> b --4--> d
        // |        ^        ^
        // 4        1        1
        // v        |        |
        // c --5----+--> e --+
        //   (c->b=1, c->e=5, e->d=1)
        let mut graph = Graph::directed();
        for v in ["a", "b", "c", "d", "e"] {
            graph.add_vertex(v);
        }
        graph.add_edge("a", "b", 1.0);
        graph.add_edge("a", "c", 4.0);
        graph.add_edge("b", "d", 4.0);
        graph.add_edge("c", "b", 1.0);
        graph.add_edge("c", "e", 5.0);
        graph.add_edge("e", "d", 1.0);
        graph
    }

    #[test]
    fn test_dijkstra_distances() {
        let graph = weighted_graph();
        let result = dijkstra(&graph, &"a").unwrap();

        assert_eq!(result.distance[&"a"], 0.0);
        assert_eq!(result.distance[&"b"], 1.0);
        assert_eq!(result.distance[&"c"], 4.0);
        assert_eq!(result.distance[&"d"], 5.0);
        assert_eq!(result.distance[&"e"], 9.0);

        assert_eq!(result.parent[&"a"], None);
        assert_eq!(result.parent[&"d"], Some("b"));
    }

    #[test]
    fn test_dijkstra_unreachable_keeps_infinity() {
        let mut graph = Graph::directed();
        graph.add_vertex("a");
        graph.add_vertex("b");

        let result = dijkstra(&graph, &"a").unwrap();
        // 未到达的顶点保持无穷大且没有父顶点
        assert!(result.distance[&"b"].is_infinite());
        assert!(!result.parent.contains_key(&"b"));
    }

    #[test]
    fn test_dijkstra_matches_bfs_on_uniform_weights() {
        // 权重全为 1 时 Dijkstra 与 BFS 的距离映射一致
        let mut graph = Graph::undirected();
        for v in 0..8u32 {
            graph.add_vertex(v);
        }
        for (a, b) in [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4), (4, 5), (2, 6)] {
            graph.add_edge_unweighted(a, b);
        }

        let dij = dijkstra(&graph, &0).unwrap();
        let tree = bfs(&graph, &0, None).unwrap();

        for (v, &d) in &tree.distance {
            assert_eq!(dij.distance[v], d as f64);
        }
        // BFS 中缺席的顶点在 Dijkstra 里保持无穷大
        assert!(dij.distance[&7].is_infinite());
    }

    #[test]
    fn test_bellman_ford_matches_dijkstra() {
        let graph = weighted_graph();
        let bf = bellman_ford(&graph, &"a").unwrap().unwrap();
        let dij = dijkstra(&graph, &"a").unwrap();

        for v in graph.vertices() {
            assert_eq!(bf.distance[v], dij.distance[v]);
        }
    }

    #[test]
    fn test_bellman_ford_negative_edge() {
        // 负权边但无负权环
        let mut graph = Graph::directed();
        for v in ["a", "b", "c"] {
            graph.add_vertex(v);
        }
        graph.add_edge("a", "b", 4.0);
        graph.add_edge("a", "c", 2.0);
        graph.add_edge("c", "b", -3.0);

        let result = bellman_ford(&graph, &"a").unwrap().unwrap();
        assert_eq!(result.distance[&"b"], -1.0);
        assert_eq!(result.parent[&"b"], Some("c"));
    }

    #[test]
    fn test_bellman_ford_negative_cycle() {
        // b -> c -> b 总权重为负
        let mut graph = Graph::directed();
        for v in ["a", "b", "c"] {
            graph.add_vertex(v);
        }
        graph.add_edge("a", "b", 1.0);
        graph.add_edge("b", "c", 2.0);
        graph.add_edge("c", "b", -5.0);

        assert!(bellman_ford(&graph, &"a").unwrap().is_none());
    }

    #[test]
    fn test_missing_origin() {
        let graph = weighted_graph();
        assert!(matches!(
            dijkstra(&graph, &"z"),
            Err(Error::VertexNotFound(_))
        ));
        assert!(matches!(
            bellman_ford(&graph, &"z"),
            Err(Error::VertexNotFound(_))
        ));
    }
}
