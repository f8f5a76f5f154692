//! Dijkstra 最短路径
//!
//! 二叉堆按 `(距离, NodeId)` 取最小；距离相同时较小的 `NodeId` 先出队，
//! 保证同一拓扑上每次计算结果一致。权重非负由 [`Graph::add_edge`] 保证。

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::{debug, trace};

use super::path::Path;
use crate::net::{Graph, GraphError, NodeId};

/// 路径查询结果。不可达是正常结果而非错误，调用方必须显式处理。
#[derive(Debug, Clone, PartialEq)]
pub enum Reachability {
    Reachable(Path),
    Unreachable,
}

impl Reachability {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Reachability::Reachable(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Reachability::Reachable(p) => Some(p),
            Reachability::Unreachable => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Reachability::Reachable(p) => Some(p),
            Reachability::Unreachable => None,
        }
    }
}

/// 堆中的候选节点
#[derive(Debug, Clone, Copy)]
struct Frontier {
    dist: f64,
    node: NodeId,
}

// BinaryHeap 是 max-heap；我们需要最小距离优先，因此反向比较。
impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.dist.total_cmp(&other.dist) {
            Ordering::Equal => self.node.cmp(&other.node),
            ord => ord,
        }
        .reverse()
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

/// 以某个源节点为根的最短路径树
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: NodeId,
    /// 已确定的最短距离
    dist: HashMap<NodeId, f64>,
    /// 最短路径上的前驱及该跳权重
    prev: HashMap<NodeId, (NodeId, f64)>,
}

impl ShortestPathTree {
    /// 对整张图运行 Dijkstra（不提前退出）
    pub fn build(graph: &Graph, source: NodeId) -> Result<Self, GraphError> {
        if !graph.has_node(source) {
            return Err(GraphError::NodeNotFound(source));
        }
        Ok(Self::grow(graph, source, None))
    }

    /// `stop_at` 出队时提前结束；此时只有已出队节点的距离是最终值。
    fn grow(graph: &Graph, source: NodeId, stop_at: Option<NodeId>) -> Self {
        let mut tentative: HashMap<NodeId, f64> = HashMap::new();
        let mut prev: HashMap<NodeId, (NodeId, f64)> = HashMap::new();
        let mut settled: HashMap<NodeId, f64> = HashMap::new();
        let mut heap = BinaryHeap::new();

        tentative.insert(source, 0.0);
        heap.push(Frontier {
            dist: 0.0,
            node: source,
        });

        while let Some(Frontier { dist, node }) = heap.pop() {
            // 过期条目：该节点已以更小距离出队
            if settled.contains_key(&node) {
                continue;
            }
            settled.insert(node, dist);
            if stop_at == Some(node) {
                trace!(node = %node, dist, "目的节点出队，提前结束");
                break;
            }

            for &(nbr, w) in graph.adjacency(node) {
                if settled.contains_key(&nbr) {
                    continue;
                }
                let cand = dist + w;
                let better = match tentative.get(&nbr) {
                    Some(&cur) => cand < cur,
                    None => true,
                };
                if better {
                    trace!(from = %node, to = %nbr, cand, "松弛");
                    tentative.insert(nbr, cand);
                    prev.insert(nbr, (node, w));
                    heap.push(Frontier {
                        dist: cand,
                        node: nbr,
                    });
                }
            }
        }

        Self {
            source,
            dist: settled,
            prev,
        }
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    /// 到 `node` 的最短距离；不可达为 `None`
    pub fn distance(&self, node: NodeId) -> Option<f64> {
        self.dist.get(&node).copied()
    }

    /// 所有可达节点（含源），按 `NodeId` 升序
    pub fn reachable(&self) -> Vec<NodeId> {
        let mut out: Vec<NodeId> = self.dist.keys().copied().collect();
        out.sort_unstable();
        out
    }

    /// 沿前驱回溯得到源到 `node` 的路径
    pub fn path_to(&self, node: NodeId) -> Reachability {
        if !self.dist.contains_key(&node) {
            return Reachability::Unreachable;
        }

        let mut hops = Vec::new();
        let mut cur = node;
        while cur != self.source {
            let Some(&(p, w)) = self.prev.get(&cur) else {
                return Reachability::Unreachable;
            };
            hops.push((cur, w));
            cur = p;
        }
        hops.reverse();
        Reachability::Reachable(Path::from_hops(self.source, hops))
    }
}

/// 计算 `source` 到 `destination` 的最短路径
///
/// 端点不存在返回 [`GraphError::NodeNotFound`]；不连通返回
/// [`Reachability::Unreachable`]。
pub fn shortest_path(
    graph: &Graph,
    source: NodeId,
    destination: NodeId,
) -> Result<Reachability, GraphError> {
    for id in [source, destination] {
        if !graph.has_node(id) {
            return Err(GraphError::NodeNotFound(id));
        }
    }
    if source == destination {
        return Ok(Reachability::Reachable(Path::trivial(source)));
    }

    let tree = ShortestPathTree::grow(graph, source, Some(destination));
    let result = tree.path_to(destination);
    match &result {
        Reachability::Reachable(p) => {
            debug!(src = %source, dst = %destination, path = %p, cost = p.cost(), "找到最短路径")
        }
        Reachability::Unreachable => debug!(src = %source, dst = %destination, "目的不可达"),
    }
    Ok(result)
}
