//! Snapshot hooks for the simulation state.

use crate::viz::{Snapshot, SnapshotEdge, SnapshotNode, SnapshotPacket};

use super::SimulationState;

impl SimulationState {
    /// Capture the current step for the visualizer. Nodes and edges come out
    /// in ascending id order, packets in injection order. Router congestion is
    /// only present when the run sampled it.
    pub fn snapshot(&self, run: u32) -> Snapshot {
        let graph = self.graph();
        let base = self.base_graph();
        let congestion = self.congestion();
        let nodes = graph
            .nodes()
            .map(|id| SnapshotNode {
                id,
                label: graph.label(id).map(str::to_string),
                congestion: congestion.map(|c| c.factor(id)),
            })
            .collect();
        let edges = graph
            .edges()
            .into_iter()
            .map(|(from, to, weight)| SnapshotEdge {
                from,
                to,
                base_weight: base.edge_weight(from, to).ok().flatten().unwrap_or(weight),
                weight,
            })
            .collect();
        let packets = self
            .packets()
            .iter()
            .map(|p| SnapshotPacket {
                id: p.id,
                src: p.src,
                dst: p.dst,
                position: p.at(),
                hop: p.position,
                status: p.status,
                distance: p.distance,
            })
            .collect();
        Snapshot {
            run,
            step: self.step(),
            nodes,
            edges,
            packets,
        }
    }
}
