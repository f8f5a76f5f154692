//! 仿真控制器
//!
//! 构建拓扑、注入 flow、驱动逐步推进，并在每一步之后输出快照。

use tracing::{debug, info, warn};

use super::error::SimError;
use super::packets::{inject_packet, step_all};
use super::scenario::{CongestionSpec, FlowSpec, ScenarioSpec};
use super::state::SimulationState;
use crate::net::{Congestion, Graph, PacketStatus};
use crate::viz::SnapshotSink;

/// 一次运行的统计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub steps: u64,
    pub delivered: usize,
    pub unreachable: usize,
    pub in_flight: usize,
    /// 达到步数上限时仍有数据包在途
    pub hit_step_limit: bool,
}

/// 运行结束后的统计与最终状态
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub run: u32,
    pub summary: RunSummary,
    pub state: SimulationState,
}

/// 单次运行的控制器；`run` 消耗自身，一个状态只跑一次
#[derive(Debug)]
pub struct Controller {
    run: u32,
    state: SimulationState,
    flows: Vec<FlowSpec>,
    max_steps: u64,
}

impl Controller {
    pub fn new(graph: Graph, flows: Vec<FlowSpec>, max_steps: u64) -> Self {
        Self::with_state(SimulationState::new(graph), flows, max_steps)
    }

    fn with_state(state: SimulationState, flows: Vec<FlowSpec>, max_steps: u64) -> Self {
        Self {
            run: 0,
            state,
            flows,
            max_steps,
        }
    }

    /// 按场景构建第 `run` 次运行。配置了拥塞时使用种子 `seed + run`。
    pub fn from_scenario(spec: &ScenarioSpec, run: u32) -> Result<Self, SimError> {
        let base = spec.topology.build()?;
        let state = match spec.congestion {
            Some(c) => {
                let congestion = sample_congestion(&base, c, run)?;
                SimulationState::with_congestion(base, congestion)
            }
            None => SimulationState::new(base),
        };
        let mut ctl = Self::with_state(state, spec.flows.clone(), spec.max_steps);
        ctl.run = run;
        Ok(ctl)
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    #[tracing::instrument(skip(self, sink), fields(run = self.run, flows = self.flows.len(), max_steps = self.max_steps))]
    pub fn run(mut self, sink: &mut dyn SnapshotSink) -> Result<RunOutcome, SimError> {
        info!(
            routers = self.state.graph().node_count(),
            links = self.state.graph().edge_count(),
            "▶️  开始运行仿真"
        );

        for flow in &self.flows {
            inject_packet(&mut self.state, flow.src, flow.dst);
        }
        sink.emit(&self.state.snapshot(self.run));

        while !self.state.all_terminal() && self.state.step() < self.max_steps {
            let changes = step_all(&mut self.state)?;
            debug!(step = self.state.step(), changed = changes.len(), "完成一步");
            sink.emit(&self.state.snapshot(self.run));
        }

        let in_flight = self.state.count(PacketStatus::InTransit);
        let summary = RunSummary {
            steps: self.state.step(),
            delivered: self.state.count(PacketStatus::Delivered),
            unreachable: self.state.count(PacketStatus::Unreachable),
            in_flight,
            hit_step_limit: in_flight > 0,
        };
        if summary.hit_step_limit {
            warn!(in_flight, max_steps = self.max_steps, "达到步数上限，仍有数据包在途");
        }
        info!(
            steps = summary.steps,
            delivered = summary.delivered,
            unreachable = summary.unreachable,
            "✅ 仿真完成"
        );

        Ok(RunOutcome {
            run: self.run,
            summary,
            state: self.state,
        })
    }
}

fn sample_congestion(base: &Graph, spec: CongestionSpec, run: u32) -> Result<Congestion, SimError> {
    let CongestionSpec { seed, min, max } = spec;
    if !(min.is_finite() && max.is_finite() && min >= 0.0 && min <= max) {
        return Err(SimError::InvalidCongestion { min, max });
    }
    let congestion = Congestion::sample(base, seed.wrapping_add(u64::from(run)), min, max);
    debug!(run, routers = base.node_count(), "已采样拥塞系数");
    Ok(congestion)
}

/// 把同一场景独立运行 `runs` 次；每次运行拥有自己的状态。
pub fn run_scenario(
    spec: &ScenarioSpec,
    runs: u32,
    sink: &mut dyn SnapshotSink,
) -> Result<Vec<RunOutcome>, SimError> {
    (0..runs)
        .map(|run| Controller::from_scenario(spec, run)?.run(&mut *sink))
        .collect()
}
