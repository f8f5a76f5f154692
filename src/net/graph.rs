//! 网络拓扑图
//!
//! 路由器为节点，带权链路为边。节点按 `NodeId` 升序保存，保证遍历顺序与
//! 插入顺序无关、每次运行一致；邻接表保留链路的插入顺序。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::congestion::Congestion;
use super::error::{EdgeFault, GraphError};
use super::id::NodeId;

/// 图的方向性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphKind {
    /// 插入 (a, b) 同时插入 (b, a)
    #[default]
    Undirected,
    Directed,
}

#[derive(Debug, Clone, Default)]
struct NodeEntry {
    label: Option<String>,
    adj: Vec<(NodeId, f64)>,
}

/// 带权网络拓扑
#[derive(Debug, Clone, Default)]
pub struct Graph {
    kind: GraphKind,
    nodes: BTreeMap<NodeId, NodeEntry>,
    /// 逻辑链路数（无向链路只计一次）
    links: usize,
}

impl Graph {
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            nodes: BTreeMap::new(),
            links: 0,
        }
    }

    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// 添加节点；节点已存在时什么也不做，返回 `false`
    pub fn add_node(&mut self, id: NodeId) -> bool {
        if self.nodes.contains_key(&id) {
            return false;
        }
        self.nodes.insert(id, NodeEntry::default());
        true
    }

    /// 添加带显示名的节点。已存在的节点不会被改名。
    pub fn add_node_labeled(&mut self, id: NodeId, label: impl Into<String>) -> bool {
        if self.nodes.contains_key(&id) {
            return false;
        }
        self.nodes.insert(
            id,
            NodeEntry {
                label: Some(label.into()),
                adj: Vec::new(),
            },
        );
        true
    }

    /// 添加链路
    ///
    /// 以下情况返回 [`GraphError::InvalidEdge`]，且图不被修改：
    /// 自环、权重为负或非有限值、端点不存在、链路已存在。
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) -> Result<(), GraphError> {
        let invalid = |reason| GraphError::InvalidEdge { from, to, reason };

        if from == to {
            return Err(invalid(EdgeFault::SelfLoop));
        }
        if !weight.is_finite() {
            return Err(invalid(EdgeFault::NonFiniteWeight));
        }
        if weight < 0.0 {
            return Err(invalid(EdgeFault::NegativeWeight));
        }
        if !self.has_node(from) || !self.has_node(to) {
            return Err(invalid(EdgeFault::UnknownEndpoint));
        }
        if self.has_edge(from, to) {
            return Err(invalid(EdgeFault::Duplicate));
        }

        self.push_adj(from, to, weight);
        if self.kind == GraphKind::Undirected {
            self.push_adj(to, from, weight);
        }
        self.links += 1;
        trace!(from = %from, to = %to, weight, kind = ?self.kind, "添加链路");
        Ok(())
    }

    fn push_adj(&mut self, from: NodeId, to: NodeId, weight: f64) {
        if let Some(entry) = self.nodes.get_mut(&from) {
            entry.adj.push((to, weight));
        }
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// 是否存在 from -> to 的链路（无向图中与方向无关）
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.adjacency(from).iter().any(|&(n, _)| n == to)
    }

    /// 出边邻居及权重，按插入顺序
    pub fn neighbors(&self, id: NodeId) -> Result<&[(NodeId, f64)], GraphError> {
        self.nodes
            .get(&id)
            .map(|e| e.adj.as_slice())
            .ok_or(GraphError::NodeNotFound(id))
    }

    /// from -> to 的链路权重；链路不存在时为 `None`
    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Result<Option<f64>, GraphError> {
        Ok(self
            .neighbors(from)?
            .iter()
            .find(|&&(n, _)| n == to)
            .map(|&(_, w)| w))
    }

    /// 路由算法内部使用：不存在的节点视为没有出边
    pub(crate) fn adjacency(&self, id: NodeId) -> &[(NodeId, f64)] {
        self.nodes.get(&id).map(|e| e.adj.as_slice()).unwrap_or(&[])
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(&id).and_then(|e| e.label.as_deref())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.links
    }

    /// 所有节点，按 `NodeId` 升序
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// 所有逻辑链路 `(from, to, weight)`
    ///
    /// 无向图每条链路只出现一次，且 `from < to`。
    pub fn edges(&self) -> Vec<(NodeId, NodeId, f64)> {
        let mut out = Vec::with_capacity(self.links);
        for (&from, entry) in &self.nodes {
            for &(to, w) in &entry.adj {
                if self.kind == GraphKind::Undirected && to < from {
                    continue;
                }
                out.push((from, to, w));
            }
        }
        out
    }

    /// 按拥塞系数重新计算权重，得到一个新的拓扑快照：
    /// `effective = base * c(from) * c(to)`。原图不变。
    pub fn reweighted(&self, congestion: &Congestion) -> Graph {
        let nodes = self
            .nodes
            .iter()
            .map(|(&id, entry)| {
                let adj = entry
                    .adj
                    .iter()
                    .map(|&(to, w)| (to, congestion.effective_weight(id, to, w)))
                    .collect();
                (
                    id,
                    NodeEntry {
                        label: entry.label.clone(),
                        adj,
                    },
                )
            })
            .collect();
        Graph {
            kind: self.kind,
            nodes,
            links: self.links,
        }
    }
}
