//! 仿真快照（供外部可视化回放）
//!
//! 设计目标：
//! - **结构化**：每一步输出一份完整的 JSON 快照，而不是解析文本日志
//! - **解耦**：核心只通过 [`SnapshotSink`] 交出快照，渲染器可任意替换

mod sink;
mod types;

pub use sink::{SnapshotLog, SnapshotSink};
pub use types::{Snapshot, SnapshotEdge, SnapshotNode, SnapshotPacket};
