//! 结构分析算法
//!
//! 二分图判定、诱导子集上的拓扑排序、Tarjan 强连通分量

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexKey};
use rand::Rng;
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::debug;

/// 两个顶点是否互相连接（二元环）
fn has_two_cycle<K: VertexKey>(graph: &Graph<K>, v: &K, w: &K) -> bool {
    graph.are_connected(v, w) && graph.are_connected(w, v)
}

/// 判定 `subset` 诱导的子图是否为二分图
///
/// 空子集恒为真；恰好两个互相连接的顶点（二元环）恒为假。
/// 其余情况从 `subset` 中随机选取起点做双色 BFS，随机源由调用方注入。
///
/// 着色只覆盖起点所在的连通分量，子集中与起点不连通的部分
/// 不会被检查，这是既定行为
pub fn is_bipartite<K: VertexKey, R: Rng + ?Sized>(
    graph: &Graph<K>,
    subset: &[K],
    rng: &mut R,
) -> bool {
    if subset.is_empty() {
        return true;
    }
    if subset.len() == 2 && has_two_cycle(graph, &subset[0], &subset[1]) {
        return false;
    }

    let mut color: HashMap<&K, bool> = HashMap::new();
    let origin = &subset[rng.gen_range(0..subset.len())];
    color.insert(origin, true);

    let mut queue = VecDeque::new();
    queue.push_back(origin);

    while let Some(v) = queue.pop_front() {
        let color_v = color.get(v).copied().unwrap_or(true);
        for w in subset {
            if !graph.are_connected(v, w) {
                continue;
            }
            match color.get(w) {
                // 相邻同色，不是二分图
                Some(&color_w) if color_w == color_v => return false,
                Some(_) => {}
                None => {
                    color.insert(w, !color_v);
                    queue.push_back(w);
                }
            }
        }
    }

    true
}

/// 对 `subset` 中属于图的顶点做 DFS 拓扑排序
///
/// 使用显式栈代替递归，保持前序标记、后序追加的访问语义。
/// 探索中遇到未访问邻居携带回边（构成二元环）时，当前顶点的
/// 分支被放弃且不进入排序，调用方不会收到环存在的信号
pub fn topological_order<K: VertexKey>(graph: &Graph<K>, subset: &[K]) -> Vec<K> {
    let mut visited: HashSet<&K> = HashSet::new();
    let mut order: Vec<K> = Vec::new();

    for v in subset {
        if visited.contains(v) || !graph.contains(v) {
            continue;
        }
        visited.insert(v);

        // 显式调用栈：(当前顶点, 下一个待检查的子集下标)
        let mut stack: Vec<(&K, usize)> = vec![(v, 0)];
        'outer: loop {
            let Some(frame) = stack.last_mut() else { break };
            let current = frame.0;
            while frame.1 < subset.len() {
                let w = &subset[frame.1];
                frame.1 += 1;
                if visited.contains(w) || !graph.are_connected(current, w) {
                    continue;
                }
                if graph.are_connected(w, current) {
                    // 回边：放弃当前顶点，不追加到排序
                    stack.pop();
                    continue 'outer;
                }
                visited.insert(w);
                stack.push((w, 0));
                continue 'outer;
            }
            // 邻居耗尽，后序追加
            order.push(current.clone());
            stack.pop();
        }
    }

    order.reverse();
    order
}

/// Tarjan 强连通分量，只枚举从 `start` 可达的分量
///
/// 显式栈模拟递归下降；发现序号使用全局计数器。
/// 分量按闭合顺序返回，包含 `start` 的分量排在最后
pub fn strongly_connected_components<K: VertexKey>(
    graph: &Graph<K>,
    start: &K,
) -> Result<Vec<HashSet<K>>> {
    if !graph.contains(start) {
        return Err(Error::vertex_not_found(start));
    }

    let mut discovery: HashMap<K, usize> = HashMap::new();
    let mut low_link: HashMap<K, usize> = HashMap::new();
    let mut on_stack: HashSet<K> = HashSet::new();
    let mut component_stack: Vec<K> = Vec::new();
    let mut components: Vec<HashSet<K>> = Vec::new();
    let mut next_index = 0usize;

    // 显式调用栈：(顶点, 邻居快照, 下一个邻居下标)
    let mut call_stack: Vec<(K, Vec<K>, usize)> = Vec::new();

    discovery.insert(start.clone(), next_index);
    low_link.insert(start.clone(), next_index);
    next_index += 1;
    on_stack.insert(start.clone());
    component_stack.push(start.clone());
    let neighbors: Vec<K> = graph.neighbors(start).cloned().collect();
    call_stack.push((start.clone(), neighbors, 0));

    loop {
        let Some(frame) = call_stack.last_mut() else { break };

        // 扫描剩余邻居，找到第一个未发现的就下降
        let mut descend: Option<K> = None;
        while frame.2 < frame.1.len() {
            let w = frame.1[frame.2].clone();
            frame.2 += 1;
            match discovery.get(&w).copied() {
                None => {
                    descend = Some(w);
                    break;
                }
                Some(index_w) if on_stack.contains(&w) => {
                    // 回边指向栈上顶点，收紧 low-link
                    let low_v = low_link.get(&frame.0).copied().unwrap_or(index_w);
                    if index_w < low_v {
                        low_link.insert(frame.0.clone(), index_w);
                    }
                }
                Some(_) => {}
            }
        }

        if let Some(w) = descend {
            discovery.insert(w.clone(), next_index);
            low_link.insert(w.clone(), next_index);
            next_index += 1;
            on_stack.insert(w.clone());
            component_stack.push(w.clone());
            let neighbors: Vec<K> = graph.neighbors(&w).cloned().collect();
            call_stack.push((w, neighbors, 0));
            continue;
        }

        // 邻居耗尽：low-link 等于发现序号时闭合一个分量
        let v = frame.0.clone();
        let low_v = low_link.get(&v).copied().unwrap_or(0);
        if discovery.get(&v).copied() == Some(low_v) {
            let mut component = HashSet::new();
            while let Some(w) = component_stack.pop() {
                on_stack.remove(&w);
                let finished = w == v;
                component.insert(w);
                if finished {
                    break;
                }
            }
            components.push(component);
        }

        call_stack.pop();
        // 返回父顶点时回传 low-link
        if let Some(parent) = call_stack.last() {
            let parent_key = parent.0.clone();
            let low_parent = low_link.get(&parent_key).copied().unwrap_or(low_v);
            if low_v < low_parent {
                low_link.insert(parent_key, low_v);
            }
        }
    }

    debug!(count = components.len(), "强连通分量枚举完成");
    Ok(components)
}
