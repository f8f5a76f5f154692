//! 网络拓扑模块
//!
//! 此模块包含路由器网络的核心组件：标识符、带权拓扑图、拥塞系数和数据包。

// 子模块声明
mod congestion;
mod error;
mod graph;
mod id;
mod packet;

// 重新导出公共接口
pub use congestion::{Congestion, DEFAULT_CONGESTION_MAX, DEFAULT_CONGESTION_MIN};
pub use error::{EdgeFault, GraphError};
pub use graph::{Graph, GraphKind};
pub use id::{NodeId, PacketId};
pub use packet::{Packet, PacketStatus};
