//! 四节点菱形拓扑
//!
//! ```text
//!     B
//!  1 / \ 1
//!   A   D
//!  4 \ / 1
//!     C
//! ```
//! A->D 的最短路径为 A-B-D，代价 2。

use crate::net::NodeId;
use crate::sim::{EdgeSpec, NodeSpec, TopologySpec};

pub const A: NodeId = NodeId(0);
pub const B: NodeId = NodeId(1);
pub const C: NodeId = NodeId(2);
pub const D: NodeId = NodeId(3);

pub fn topology() -> TopologySpec {
    let nodes = [(A, "A"), (B, "B"), (C, "C"), (D, "D")]
        .into_iter()
        .map(|(id, label)| NodeSpec {
            id,
            label: Some(label.to_string()),
        })
        .collect();
    let edges = [(A, B, 1.0), (B, D, 1.0), (A, C, 4.0), (C, D, 1.0)]
        .into_iter()
        .map(|(from, to, weight)| EdgeSpec { from, to, weight })
        .collect();
    TopologySpec {
        directed: false,
        nodes,
        edges,
    }
}
