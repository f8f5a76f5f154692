//! 路由模块
//!
//! 基于 Dijkstra 的最短路径计算。数据包在注入时一次性拿到完整路径，
//! 之后逐跳前进时只使用路径中记录的链路权重。

mod dijkstra;
mod path;

pub use dijkstra::{shortest_path, Reachability, ShortestPathTree};
pub use path::Path;
