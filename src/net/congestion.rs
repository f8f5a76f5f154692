//! 路由器拥塞系数
//!
//! 每个路由器一个乘性系数，用来把链路的基础权重换算成有效权重。
//! 系数由固定种子的 ChaCha8 生成，相同种子得到相同的网络状况。

use std::collections::BTreeMap;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::graph::Graph;
use super::id::NodeId;

/// 默认拥塞系数下界
pub const DEFAULT_CONGESTION_MIN: f64 = 0.5;
/// 默认拥塞系数上界
pub const DEFAULT_CONGESTION_MAX: f64 = 2.0;

/// 各路由器的拥塞系数；未记录的路由器系数为 1.0
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Congestion {
    factors: BTreeMap<NodeId, f64>,
}

impl Congestion {
    /// 按节点升序依次抽样，系数落在 `[min, max]` 内。
    /// `min >= max` 时所有节点取 `min`。
    pub fn sample(graph: &Graph, seed: u64, min: f64, max: f64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let factors = graph
            .nodes()
            .map(|id| {
                let c = if max > min {
                    rng.gen_range(min..=max)
                } else {
                    min
                };
                (id, c)
            })
            .collect::<BTreeMap<_, _>>();
        debug!(seed, min, max, routers = factors.len(), "抽样拥塞系数");
        Self { factors }
    }

    pub fn set(&mut self, node: NodeId, factor: f64) {
        self.factors.insert(node, factor);
    }

    pub fn factor(&self, node: NodeId) -> f64 {
        self.factors.get(&node).copied().unwrap_or(1.0)
    }

    pub fn effective_weight(&self, from: NodeId, to: NodeId, base: f64) -> f64 {
        base * self.factor(from) * self.factor(to)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.factors.iter().map(|(&id, &c)| (id, c))
    }
}
