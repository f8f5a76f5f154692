//! 路径类型

use std::fmt;

use crate::net::NodeId;

/// 从源到目的的节点序列，附带计算时每一跳的链路权重。
///
/// 路径只对计算它的那份拓扑有效；拓扑变化后必须重新计算。
/// 构造保证节点序列非空，且 `hops.len() + 1 == nodes.len()`。
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    nodes: Vec<NodeId>,
    hops: Vec<f64>,
}

impl Path {
    /// 源与目的相同：单节点、代价 0
    pub fn trivial(node: NodeId) -> Self {
        Self {
            nodes: vec![node],
            hops: Vec::new(),
        }
    }

    /// 逐跳构建：`start` 之后依次为 `(下一节点, 链路权重)`
    pub fn from_hops(start: NodeId, hops: impl IntoIterator<Item = (NodeId, f64)>) -> Self {
        let mut path = Self::trivial(start);
        for (node, w) in hops {
            path.nodes.push(node);
            path.hops.push(w);
        }
        path
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn src(&self) -> NodeId {
        self.nodes[0]
    }

    pub fn dst(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    /// 节点数
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// 构造保证至少含源节点，恒为 `false`
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn hop_count(&self) -> usize {
        self.hops.len()
    }

    pub fn is_trivial(&self) -> bool {
        self.hops.is_empty()
    }

    pub fn node(&self, idx: usize) -> Option<NodeId> {
        self.nodes.get(idx).copied()
    }

    /// 第 `idx` 个节点到第 `idx + 1` 个节点的链路权重
    pub fn hop_weight(&self, idx: usize) -> Option<f64> {
        self.hops.get(idx).copied()
    }

    /// 路径总代价
    pub fn cost(&self) -> f64 {
        self.hops.iter().sum()
    }

    /// 依次经过的链路 `(from, to, weight)`
    pub fn links(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        self.nodes
            .windows(2)
            .zip(&self.hops)
            .map(|(pair, &w)| (pair[0], pair[1], w))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str("->")?;
            }
            write!(f, "{n}")?;
        }
        Ok(())
    }
}
