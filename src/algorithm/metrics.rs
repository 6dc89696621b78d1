//! 图度量
//!
//! 直径（全源 BFS 最大距离）与聚集系数（单点与全图平均）

use crate::algorithm::bfs;
use crate::error::{Error, Result};
use crate::graph::{Graph, VertexKey};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// 直径结果：达到最大距离的那次 BFS 的父映射、距离值和两个端点
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diameter<K: VertexKey> {
    /// 产生该直径的 BFS 父映射
    pub parent: HashMap<K, Option<K>>,
    /// 直径值（最大的最短路径边数）
    pub value: usize,
    /// 起点
    pub source: K,
    /// 终点
    pub destination: K,
}

/// 计算图的直径：从每个顶点做无权 BFS，取所有 (源, 可达点) 距离的最大值
///
/// 并列最大值时第一个遇到的获胜，结果依赖顶点迭代顺序。
/// 图为空或不存在任何距离大于 0 的可达顶点对时返回 None
pub fn diameter<K: VertexKey>(graph: &Graph<K>) -> Option<Diameter<K>> {
    let mut result: Option<Diameter<K>> = None;

    for v in graph.vertices() {
        let Ok(tree) = bfs(graph, v, None) else {
            continue;
        };
        for (w, &d) in &tree.distance {
            if d > result.as_ref().map_or(0, |r| r.value) {
                trace!(distance = d, "发现更大的最短路径距离");
                result = Some(Diameter {
                    parent: tree.parent.clone(),
                    value: d,
                    source: v.clone(),
                    destination: w.clone(),
                });
            }
        }
    }

    result
}

/// 计算顶点 `v` 的聚集系数
///
/// 统计有序邻居对 (w, x)：w、x 均为 v 的邻居，w ≠ v，x ≠ w，
/// 且 w 与 x 相连。系数 = 对数 / (deg² - deg)，deg ≤ 1 时为 0。
/// 自环顶点不计入自己的邻居对
pub fn clustering_coefficient<K: VertexKey>(graph: &Graph<K>, v: &K) -> Result<f64> {
    if !graph.contains(v) {
        return Err(Error::vertex_not_found(v));
    }

    let adjacent: HashSet<&K> = graph.neighbors(v).collect();
    let degree = graph.degree(v);
    if degree <= 1 {
        return Ok(0.0);
    }

    let mut closed_pairs = 0usize;
    for &w in &adjacent {
        if w == v {
            continue;
        }
        for x in graph.neighbors(w) {
            if x == w {
                continue;
            }
            if adjacent.contains(x) {
                closed_pairs += 1;
            }
        }
    }

    Ok(closed_pairs as f64 / (degree * degree - degree) as f64)
}

/// 全图平均聚集系数，空图返回 0
pub fn average_clustering_coefficient<K: VertexKey>(graph: &Graph<K>) -> f64 {
    let mut total = 0.0;
    let mut count = 0usize;
    for v in graph.vertices() {
        total += clustering_coefficient(graph, v).unwrap_or(0.0);
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}
