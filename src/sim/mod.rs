//! 仿真核心模块
//!
//! 离散步进的数据包仿真：状态、数据包推进、控制器和场景配置。

// 子模块声明
mod controller;
mod error;
mod packets;
mod scenario;
mod snapshot;
mod state;

// 重新导出公共接口
pub use controller::{run_scenario, Controller, RunOutcome, RunSummary};
pub use error::{PacketFault, SimError};
pub use packets::{inject_packet, step_all, StatusChange};
pub use scenario::{
    CongestionSpec, EdgeSpec, FlowSpec, NodeSpec, ScenarioSpec, TopologySpec, DEFAULT_MAX_STEPS,
};
pub use state::SimulationState;
