use serde::{Deserialize, Serialize};

use crate::net::{NodeId, PacketId, PacketStatus};

/// 某一步结束时的仿真状态快照（只读，供外部可视化消费）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// 第几次运行（同一场景可重复运行多次）
    pub run: u32,
    /// 步数；0 表示刚注入完所有 flow
    pub step: u64,
    pub nodes: Vec<SnapshotNode>,
    pub edges: Vec<SnapshotEdge>,
    pub packets: Vec<SnapshotPacket>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotNode {
    pub id: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// 本次运行的拥塞系数；未启用拥塞时省略
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub congestion: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEdge {
    pub from: NodeId,
    pub to: NodeId,
    /// 拓扑中配置的原始权重
    pub base_weight: f64,
    /// 本次运行使用的（有效）权重，`base_weight × c(from) × c(to)`
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotPacket {
    pub id: PacketId,
    pub src: NodeId,
    pub dst: NodeId,
    /// 当前所在节点；不可达的包没有位置
    pub position: Option<NodeId>,
    /// 路径中的索引
    pub hop: usize,
    pub status: PacketStatus,
    pub distance: f64,
}
