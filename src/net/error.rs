//! 拓扑构建与查询错误

use super::id::NodeId;
use thiserror::Error;

/// 链路定义不合法的具体原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EdgeFault {
    #[error("weight is negative")]
    NegativeWeight,
    #[error("weight is not a finite number")]
    NonFiniteWeight,
    #[error("self-loop")]
    SelfLoop,
    #[error("endpoint does not exist")]
    UnknownEndpoint,
    #[error("edge already exists")]
    Duplicate,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// 链路不合法；图保持调用前的状态
    #[error("invalid edge {from} -> {to}: {reason}")]
    InvalidEdge {
        from: NodeId,
        to: NodeId,
        reason: EdgeFault,
    },
    #[error("node {0} not found")]
    NodeNotFound(NodeId),
}
