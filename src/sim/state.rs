//! 仿真状态
//!
//! 一次运行的全部可变状态，由控制器独占；路由和数据包推进只借用它。

use crate::net::{Congestion, Graph, Packet, PacketId, PacketStatus};

#[derive(Debug, Clone)]
pub struct SimulationState {
    /// 路由使用的有效拓扑
    graph: Graph,
    /// 拥塞前的原始拓扑和本次运行采样到的拥塞
    conditions: Option<(Graph, Congestion)>,
    pub(crate) packets: Vec<Packet>,
    pub(crate) step: u64,
    next_packet_id: u64,
}

impl SimulationState {
    /// 拓扑在本次运行中不可变
    pub fn new(graph: Graph) -> Self {
        Self {
            graph,
            conditions: None,
            packets: Vec::new(),
            step: 0,
            next_packet_id: 0,
        }
    }

    /// 按拥塞系数重算权重；原始权重保留下来供快照输出
    pub fn with_congestion(base: Graph, congestion: Congestion) -> Self {
        let mut state = Self::new(base.reweighted(&congestion));
        state.conditions = Some((base, congestion));
        state
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// 拥塞前的拓扑；未启用拥塞时就是 [`Self::graph`]
    pub fn base_graph(&self) -> &Graph {
        match &self.conditions {
            Some((base, _)) => base,
            None => &self.graph,
        }
    }

    pub fn congestion(&self) -> Option<&Congestion> {
        self.conditions.as_ref().map(|(_, c)| c)
    }

    /// 所有数据包，按注入顺序
    pub fn packets(&self) -> &[Packet] {
        &self.packets
    }

    pub fn packet(&self, id: PacketId) -> Option<&Packet> {
        self.packets.iter().find(|p| p.id == id)
    }

    /// 已执行的步数
    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn all_terminal(&self) -> bool {
        self.packets.iter().all(Packet::is_terminal)
    }

    pub fn count(&self, status: PacketStatus) -> usize {
        self.packets.iter().filter(|p| p.status == status).count()
    }

    pub(crate) fn alloc_packet_id(&mut self) -> PacketId {
        let id = PacketId(self.next_packet_id);
        self.next_packet_id = self.next_packet_id.wrapping_add(1);
        id
    }
}
