//! 六路由器网格（默认演示拓扑）

use crate::net::NodeId;
use crate::sim::{EdgeSpec, NodeSpec, TopologySpec};

pub const ROUTERS: u32 = 6;

/// (from, to, 基础权重)
pub const LINKS: [(u32, u32, f64); 9] = [
    (0, 1, 1.0),
    (0, 2, 2.0),
    (1, 2, 1.0),
    (1, 3, 3.0),
    (2, 3, 2.0),
    (2, 4, 2.0),
    (3, 4, 1.0),
    (3, 5, 2.0),
    (4, 5, 1.0),
];

pub fn topology() -> TopologySpec {
    let nodes = (0..ROUTERS)
        .map(|i| NodeSpec {
            id: NodeId(i),
            label: Some(format!("r{i}")),
        })
        .collect();
    let edges = LINKS
        .iter()
        .map(|&(from, to, weight)| EdgeSpec {
            from: NodeId(from),
            to: NodeId(to),
            weight,
        })
        .collect();
    TopologySpec {
        directed: false,
        nodes,
        edges,
    }
}
