//! 数据包类型
//!
//! 定义仿真数据包及其状态机：
//! `Pending -> InTransit -> {Delivered | Unreachable}`。

use serde::{Deserialize, Serialize};

use super::id::{NodeId, PacketId};
use crate::route::Path;

/// 数据包状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PacketStatus {
    /// 刚创建，尚未分配路径
    Pending,
    InTransit,
    Delivered,
    /// 注入时找不到路径，不会发生任何传输
    Unreachable,
}

impl PacketStatus {
    /// Delivered / Unreachable 为终态，进入后不再改变
    pub fn is_terminal(self) -> bool {
        matches!(self, PacketStatus::Delivered | PacketStatus::Unreachable)
    }
}

/// 仿真数据包
#[derive(Debug, Clone, PartialEq)]
pub struct Packet {
    pub id: PacketId,
    pub src: NodeId,
    pub dst: NodeId,
    pub path: Option<Path>,
    pub position: usize, // 当前所在节点在 path 中的索引
    pub distance: f64,
    pub status: PacketStatus,
}

impl Packet {
    pub(crate) fn pending(id: PacketId, src: NodeId, dst: NodeId) -> Self {
        Self {
            id,
            src,
            dst,
            path: None,
            position: 0,
            distance: 0.0,
            status: PacketStatus::Pending,
        }
    }

    /// 获取当前所在节点（没有路径时为 `None`）
    pub fn at(&self) -> Option<NodeId> {
        self.path.as_ref().and_then(|p| p.node(self.position))
    }

    /// 获取下一跳节点（如果有）
    pub fn next(&self) -> Option<NodeId> {
        self.path.as_ref().and_then(|p| p.node(self.position + 1))
    }

    /// 检查是否有下一跳
    pub fn has_next(&self) -> bool {
        self.next().is_some()
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}
