//! PageRank 排名算法
//!
//! 迭代式不动点计算，固定阻尼系数与迭代上限

use crate::graph::{Graph, VertexKey};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// 默认阻尼系数
pub const DEFAULT_DAMPING: f64 = 0.85;
/// 默认迭代上限
pub const DEFAULT_MAX_ITERATIONS: usize = 20;

/// PageRank 配置，进程级常量在构造时注入
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRankConfig {
    /// 阻尼系数 D：随机跳转与沿边行走的混合比例
    pub damping: f64,
    /// 迭代上限 K
    pub max_iterations: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// 计算每个顶点的 PageRank 值
///
/// 排名初始化为 1，按 `rank(v) = (1 - D) + D * Σ rank(w) / outdegree(w)`
/// 对入边邻居 w 迭代更新。每轮更新前克隆一份显式快照，整轮排名与
/// 快照完全相等时视为收敛并提前结束，否则运行满 `max_iterations` 轮。
/// 排名在一轮内就地更新，后处理的顶点会看到同轮已更新的邻居值。
/// 没有入边的顶点收敛后保持 `1 - D`
pub fn page_rank<K: VertexKey>(graph: &Graph<K>, config: &PageRankConfig) -> HashMap<K, f64> {
    let mut ranks: HashMap<K, f64> = HashMap::new();
    let mut incoming: HashMap<&K, Vec<&K>> = HashMap::new();
    let mut out_degree: HashMap<&K, usize> = HashMap::new();

    // 一次扫描同时收集排名初值、入边集合与出度
    for v in graph.vertices() {
        ranks.insert(v.clone(), 1.0);
        for w in graph.neighbors(v) {
            *out_degree.entry(v).or_insert(0) += 1;
            incoming.entry(w).or_default().push(v);
        }
    }

    for iteration in 0..config.max_iterations {
        // 显式快照：收敛判定不受就地更新影响
        let snapshot = ranks.clone();
        for v in graph.vertices() {
            let mut sum = 0.0;
            if let Some(sources) = incoming.get(v) {
                for w in sources {
                    let rank_w = ranks.get(*w).copied().unwrap_or(0.0);
                    let degree_w = out_degree.get(w).copied().unwrap_or(1);
                    sum += rank_w / degree_w as f64;
                }
            }
            ranks.insert(v.clone(), (1.0 - config.damping) + config.damping * sum);
        }
        if ranks == snapshot {
            debug!(iteration, "PageRank 已收敛，提前结束迭代");
            break;
        }
    }

    ranks
}

/// 使用默认配置（D = 0.85，K = 20）计算 PageRank
pub fn page_rank_default<K: VertexKey>(graph: &Graph<K>) -> HashMap<K, f64> {
    page_rank(graph, &PageRankConfig::default())
}
