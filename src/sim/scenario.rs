use serde::{Deserialize, Serialize};

use crate::net::{
    Graph, GraphError, GraphKind, NodeId, DEFAULT_CONGESTION_MAX, DEFAULT_CONGESTION_MIN,
};
use crate::topo;

pub const DEFAULT_MAX_STEPS: u64 = 64;

/// 一次仿真的完整描述（scenario.json）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub topology: TopologySpec,
    #[serde(default)]
    pub flows: Vec<FlowSpec>,
    #[serde(default = "default_max_steps")]
    pub max_steps: u64,
    #[serde(default)]
    pub congestion: Option<CongestionSpec>,
}

fn default_max_steps() -> u64 {
    DEFAULT_MAX_STEPS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopologySpec {
    #[serde(default)]
    pub directed: bool,
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpec {
    pub id: NodeId,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlowSpec {
    pub src: NodeId,
    pub dst: NodeId,
}

/// 路由器拥塞系数的抽样参数
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CongestionSpec {
    pub seed: u64,
    #[serde(default = "default_congestion_min")]
    pub min: f64,
    #[serde(default = "default_congestion_max")]
    pub max: f64,
}

fn default_congestion_min() -> f64 {
    DEFAULT_CONGESTION_MIN
}

fn default_congestion_max() -> f64 {
    DEFAULT_CONGESTION_MAX
}

impl CongestionSpec {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            min: DEFAULT_CONGESTION_MIN,
            max: DEFAULT_CONGESTION_MAX,
        }
    }
}

impl TopologySpec {
    /// 按声明顺序构建拓扑；第一条不合法的链路即返回错误
    pub fn build(&self) -> Result<Graph, GraphError> {
        let kind = if self.directed {
            GraphKind::Directed
        } else {
            GraphKind::Undirected
        };
        let mut graph = Graph::new(kind);
        for n in &self.nodes {
            match &n.label {
                Some(label) => graph.add_node_labeled(n.id, label.clone()),
                None => graph.add_node(n.id),
            };
        }
        for e in &self.edges {
            graph.add_edge(e.from, e.to, e.weight)?;
        }
        Ok(graph)
    }
}

impl ScenarioSpec {
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// 四节点菱形：A-B(1) B-D(1) A-C(4) C-D(1)，一条 A->D 的 flow
    pub fn diamond() -> Self {
        Self {
            topology: topo::diamond::topology(),
            flows: vec![FlowSpec {
                src: topo::diamond::A,
                dst: topo::diamond::D,
            }],
            max_steps: DEFAULT_MAX_STEPS,
            congestion: None,
        }
    }

    /// 六路由器网格，一条 0->5 的 flow
    pub fn mesh6() -> Self {
        Self {
            topology: topo::mesh6::topology(),
            flows: vec![FlowSpec {
                src: NodeId(0),
                dst: NodeId(5),
            }],
            max_steps: DEFAULT_MAX_STEPS,
            congestion: None,
        }
    }
}
