//! 数据包注入与逐跳推进

use tracing::{debug, info, trace, warn};

use super::error::{PacketFault, SimError};
use super::state::SimulationState;
use crate::net::{NodeId, Packet, PacketId, PacketStatus};
use crate::route::{shortest_path, Reachability};

/// 一步之内发生的状态变化
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub packet: PacketId,
    pub from: PacketStatus,
    pub to: PacketStatus,
}

/// 注入一个数据包并立即为其计算路径
///
/// - 路径有两个及以上节点：`InTransit`，位于源节点
/// - 源即目的：直接 `Delivered`，距离 0
/// - 不连通或端点不存在：直接 `Unreachable`，不会发生任何传输
#[tracing::instrument(skip(state), fields(src = %src, dst = %dst))]
pub fn inject_packet(state: &mut SimulationState, src: NodeId, dst: NodeId) -> PacketId {
    let id = state.alloc_packet_id();
    let mut pkt = Packet::pending(id, src, dst);

    match shortest_path(state.graph(), src, dst) {
        Ok(Reachability::Reachable(path)) => {
            pkt.status = if path.is_trivial() {
                PacketStatus::Delivered
            } else {
                PacketStatus::InTransit
            };
            debug!(pkt_id = %id, path = %path, cost = path.cost(), status = ?pkt.status, "📦 注入数据包");
            pkt.path = Some(path);
        }
        Ok(Reachability::Unreachable) => {
            debug!(pkt_id = %id, "📦 注入数据包：目的不可达");
            pkt.status = PacketStatus::Unreachable;
        }
        Err(err) => {
            warn!(pkt_id = %id, %err, "📦 注入数据包：端点不存在，标记为不可达");
            pkt.status = PacketStatus::Unreachable;
        }
    }

    state.packets.push(pkt);
    id
}

fn check_in_transit(pkt: &Packet) -> Result<(), PacketFault> {
    match pkt.status {
        PacketStatus::Pending => return Err(PacketFault::NotInjected),
        PacketStatus::InTransit => {}
        PacketStatus::Delivered | PacketStatus::Unreachable => return Ok(()),
    }
    let path = pkt.path.as_ref().ok_or(PacketFault::MissingPath)?;
    if path.len() < 2 {
        return Err(PacketFault::PathTooShort);
    }
    if pkt.position + 1 >= path.len() {
        return Err(PacketFault::PastDestination);
    }
    Ok(())
}

/// 所有在途数据包前进一跳
///
/// 按注入顺序推进；终态数据包被跳过。没有在途数据包时什么也不做
/// （步数也不增加），返回空列表。任何数据包状态被破坏时整步不执行，
/// 返回 [`SimError::InvalidPacketState`]。
pub fn step_all(state: &mut SimulationState) -> Result<Vec<StatusChange>, SimError> {
    for pkt in &state.packets {
        check_in_transit(pkt).map_err(|reason| SimError::InvalidPacketState {
            packet: pkt.id,
            reason,
        })?;
    }
    if !state
        .packets
        .iter()
        .any(|p| p.status == PacketStatus::InTransit)
    {
        return Ok(Vec::new());
    }

    state.step += 1;
    let step = state.step;
    let mut changes = Vec::new();

    for pkt in state
        .packets
        .iter_mut()
        .filter(|p| p.status == PacketStatus::InTransit)
    {
        // check_in_transit 已保证路径存在且还有下一跳
        let Some(path) = pkt.path.as_ref() else {
            continue;
        };
        let Some(w) = path.hop_weight(pkt.position) else {
            continue;
        };
        pkt.position += 1;
        pkt.distance += w;
        trace!(step, pkt_id = %pkt.id, at = ?pkt.at(), distance = pkt.distance, "前进一跳");

        if pkt.position + 1 == path.len() {
            info!(step, pkt_id = %pkt.id, dst = %pkt.dst, distance = pkt.distance, "✅ 数据包送达目的地");
            pkt.status = PacketStatus::Delivered;
            changes.push(StatusChange {
                packet: pkt.id,
                from: PacketStatus::InTransit,
                to: PacketStatus::Delivered,
            });
        }
    }

    Ok(changes)
}
