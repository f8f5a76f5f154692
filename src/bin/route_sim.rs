//! 路由仿真
//!
//! 运行 scenario.json（默认内置六路由器网格），打印每个数据包的结果，
//! 可选把逐步快照写成 JSON 供可视化回放。

use clap::Parser;
use routesim_rs::sim::{run_scenario, CongestionSpec, ScenarioSpec};
use routesim_rs::viz::SnapshotLog;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "route-sim", about = "Shortest-path packet routing simulation over a router graph")]
struct Args {
    /// Path to scenario.json; defaults to the built-in six-router mesh
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Override the step cap
    #[arg(long)]
    max_steps: Option<u64>,

    /// Number of independent runs
    #[arg(long, default_value_t = 1)]
    runs: u32,

    /// Enable router congestion with this seed (overrides the scenario's seed)
    #[arg(long)]
    congestion_seed: Option<u64>,

    /// Output snapshot JSON file
    #[arg(long)]
    snapshots_json: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut spec = match &args.scenario {
        Some(path) => {
            let raw = fs::read_to_string(path).expect("read scenario.json");
            ScenarioSpec::from_json_str(&raw).expect("parse scenario.json")
        }
        None => ScenarioSpec::mesh6(),
    };
    if let Some(max_steps) = args.max_steps {
        spec.max_steps = max_steps;
    }
    if let Some(seed) = args.congestion_seed {
        spec.congestion = Some(match spec.congestion {
            Some(c) => CongestionSpec { seed, ..c },
            None => CongestionSpec::with_seed(seed),
        });
    }

    info!(
        routers = spec.topology.nodes.len(),
        flows = spec.flows.len(),
        runs = args.runs,
        "加载场景"
    );

    let mut log = SnapshotLog::default();
    let outcomes = run_scenario(&spec, args.runs, &mut log).expect("run scenario");

    let mut total_steps = 0;
    for outcome in &outcomes {
        total_steps += outcome.summary.steps;
        if let Some(congestion) = outcome.state.congestion() {
            for (id, factor) in congestion.iter() {
                println!("router run={} id={} congestion={:.3}", outcome.run, id, factor);
            }
        }
        for pkt in outcome.state.packets() {
            let path = pkt
                .path
                .as_ref()
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "packet run={} id={} src={} dst={} status={:?} distance={:.3} path={}",
                outcome.run, pkt.id, pkt.src, pkt.dst, pkt.status, pkt.distance, path
            );
        }
    }

    if let Some(path) = args.snapshots_json {
        let json = serde_json::to_string_pretty(&log.snapshots).expect("serialize snapshots");
        fs::write(&path, json).expect("write snapshots json");
        info!(path = %path.display(), snapshots = log.snapshots.len(), "已写出快照");
    }

    println!("done runs={} steps={}", outcomes.len(), total_steps);
}
