//! 仿真运行错误

use thiserror::Error;

use crate::net::{GraphError, PacketId};

/// 数据包内部状态被破坏的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PacketFault {
    #[error("packet was never injected")]
    NotInjected,
    #[error("in-transit packet has no path")]
    MissingPath,
    #[error("in-transit packet has a path with fewer than two nodes")]
    PathTooShort,
    #[error("in-transit packet is already at or past its destination")]
    PastDestination,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// 编排逻辑的 bug，而非输入数据问题；运行随即终止
    #[error("packet {packet} is in an invalid state: {reason}")]
    InvalidPacketState { packet: PacketId, reason: PacketFault },
    #[error("invalid congestion range [{min}, {max}]")]
    InvalidCongestion { min: f64, max: f64 },
}
