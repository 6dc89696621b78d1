//! 广度优先遍历
//!
//! 提供标准 BFS 和按距离计数的范围 BFS

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexKey};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};

/// BFS 结果：父顶点映射和距离映射
///
/// 未到达的顶点不会出现在任何一个映射中，缺席即代表不可达
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BfsTree<K: VertexKey> {
    /// 顶点 -> 父顶点（起点映射到 None）
    pub parent: HashMap<K, Option<K>>,
    /// 顶点 -> 距起点的边数
    pub distance: HashMap<K, usize>,
}

/// 从 `origin` 开始的广度优先遍历
///
/// 给定 `destination` 时在其出队后提前结束；传 None 则探索整个可达分量。
/// 起点不在图中时返回 VertexNotFound。
pub fn bfs<K: VertexKey>(
    graph: &Graph<K>,
    origin: &K,
    destination: Option<&K>,
) -> Result<BfsTree<K>> {
    if !graph.contains(origin) {
        return Err(Error::vertex_not_found(origin));
    }

    let mut visited = HashSet::new();
    let mut parent = HashMap::new();
    let mut distance = HashMap::new();
    let mut queue = VecDeque::new();

    visited.insert(origin.clone());
    parent.insert(origin.clone(), None);
    distance.insert(origin.clone(), 0usize);
    queue.push_back(origin.clone());

    while let Some(v) = queue.pop_front() {
        if destination == Some(&v) {
            break;
        }
        let d = distance.get(&v).copied().unwrap_or(0);
        for w in graph.neighbors(&v) {
            if visited.contains(w) {
                continue;
            }
            visited.insert(w.clone());
            parent.insert(w.clone(), Some(v.clone()));
            distance.insert(w.clone(), d + 1);
            queue.push_back(w.clone());
        }
    }

    Ok(BfsTree { parent, distance })
}

/// 统计与 `origin` 的 BFS 距离恰好为 `n` 的顶点数量
///
/// 发现超出 `n` 的顶点时中断当前顶点的邻居扫描（局部剪枝，
/// 不终止整个遍历），同层邻居的计数结果因此依赖邻居迭代顺序
pub fn bfs_range<K: VertexKey>(graph: &Graph<K>, origin: &K, n: usize) -> Result<usize> {
    if !graph.contains(origin) {
        return Err(Error::vertex_not_found(origin));
    }

    let mut count = 0usize;
    let mut visited = HashSet::new();
    let mut distance = HashMap::new();
    let mut queue = VecDeque::new();

    visited.insert(origin.clone());
    distance.insert(origin.clone(), 0usize);
    queue.push_back(origin.clone());

    while let Some(v) = queue.pop_front() {
        let d = distance.get(&v).copied().unwrap_or(0);
        for w in graph.neighbors(&v) {
            if visited.contains(w) {
                continue;
            }
            visited.insert(w.clone());
            distance.insert(w.clone(), d + 1);
            if d + 1 == n {
                count += 1;
            }
            if d + 1 > n {
                break;
            }
            queue.push_back(w.clone());
        }
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_graph() -> Graph<&'static str> {
        // a - b - c - d
        let mut graph = Graph::undirected();
        for v in ["a", "b", "c", "d"] {
            graph.add_vertex(v);
        }
        graph.add_edge_unweighted("a", "b");
        graph.add_edge_unweighted("b", "c");
        graph.add_edge_unweighted("c", "d");
        graph
    }

    #[test]
    fn test_bfs_distances() {
        let graph = line_graph();
        let tree = bfs(&graph, &"a", None).unwrap();

        assert_eq!(tree.distance[&"a"], 0);
        assert_eq!(tree.distance[&"b"], 1);
        assert_eq!(tree.distance[&"c"], 2);
        assert_eq!(tree.distance[&"d"], 3);

        // 起点没有父顶点
        assert_eq!(tree.parent[&"a"], None);
        assert_eq!(tree.parent[&"d"], Some("c"));
    }

    #[test]
    fn test_bfs_unreachable_absent() {
        // a -> b，c 孤立
        let mut graph = Graph::directed();
        for v in ["a", "b", "c"] {
            graph.add_vertex(v);
        }
        graph.add_edge_unweighted("a", "b");

        let tree = bfs(&graph, &"a", None).unwrap();
        // 不可达顶点在两个映射中都缺席
        assert!(!tree.distance.contains_key(&"c"));
        assert!(!tree.parent.contains_key(&"c"));
        assert_eq!(tree.distance.len(), 2);
    }

    #[test]
    fn test_bfs_early_exit() {
        let graph = line_graph();
        let tree = bfs(&graph, &"a", Some(&"b")).unwrap();

        // b 出队时提前结束，c 尚未被发现
        assert!(tree.distance.contains_key(&"b"));
        assert!(!tree.distance.contains_key(&"c"));
    }

    #[test]
    fn test_bfs_missing_origin() {
        let graph = line_graph();
        assert!(matches!(
            bfs(&graph, &"z", None),
            Err(Error::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_bfs_range_counts_exact_distance() {
        // 星形加一条延伸：center 的一跳邻居 3 个，两跳 1 个
        let mut graph = Graph::undirected();
        for v in ["center", "a", "b", "c", "far"] {
            graph.add_vertex(v);
        }
        graph.add_edge_unweighted("center", "a");
        graph.add_edge_unweighted("center", "b");
        graph.add_edge_unweighted("center", "c");
        graph.add_edge_unweighted("a", "far");

        assert_eq!(bfs_range(&graph, &"center", 1).unwrap(), 3);
        assert_eq!(bfs_range(&graph, &"center", 2).unwrap(), 1);
        assert_eq!(bfs_range(&graph, &"center", 5).unwrap(), 0);
    }

    #[test]
    fn test_bfs_range_serializable() {
        let graph = line_graph();
        let tree = bfs(&graph, &"a", None).unwrap();

        let json = serde_json::to_string(&tree.distance).unwrap();
        assert!(json.contains("\"d\":3"));
    }
}
