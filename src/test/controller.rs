use crate::net::{Graph, NodeId, PacketStatus};
use crate::sim::{
    run_scenario, CongestionSpec, Controller, FlowSpec, ScenarioSpec, SimError,
};
use crate::topo::diamond::{A, D};
use crate::viz::{Snapshot, SnapshotLog};
use std::sync::mpsc;

#[test]
fn diamond_run_delivers_and_emits_one_snapshot_per_step() {
    let mut log = SnapshotLog::default();
    let outcome = Controller::from_scenario(&ScenarioSpec::diamond(), 0)
        .expect("build controller")
        .run(&mut log)
        .expect("run");

    assert_eq!(outcome.summary.steps, 2);
    assert_eq!(outcome.summary.delivered, 1);
    assert_eq!(outcome.summary.unreachable, 0);
    assert!(!outcome.summary.hit_step_limit);

    let steps: Vec<u64> = log.snapshots.iter().map(|s| s.step).collect();
    assert_eq!(steps, vec![0, 1, 2]);

    let last = log.snapshots.last().unwrap();
    assert_eq!(last.packets.len(), 1);
    assert_eq!(last.packets[0].status, PacketStatus::Delivered);
    assert_eq!(last.packets[0].position, Some(D));
    assert_eq!(last.packets[0].distance, 2.0);
}

#[test]
fn unreachable_flow_consumes_no_steps() {
    let mut spec = ScenarioSpec::diamond();
    spec.topology.nodes.push(crate::sim::NodeSpec {
        id: NodeId(4),
        label: Some("E".into()),
    });
    spec.flows = vec![FlowSpec { src: A, dst: NodeId(4) }];

    let mut log = SnapshotLog::default();
    let outcome = Controller::from_scenario(&spec, 0).unwrap().run(&mut log).unwrap();
    assert_eq!(outcome.summary.steps, 0);
    assert_eq!(outcome.summary.unreachable, 1);
    assert_eq!(log.snapshots.len(), 1);
    assert_eq!(log.snapshots[0].packets[0].position, None);
}

#[test]
fn step_limit_stops_run_with_packets_in_flight() {
    let mut spec = ScenarioSpec::diamond();
    spec.max_steps = 1;

    let mut log = SnapshotLog::default();
    let outcome = Controller::from_scenario(&spec, 0).unwrap().run(&mut log).unwrap();
    assert_eq!(outcome.summary.steps, 1);
    assert_eq!(outcome.summary.in_flight, 1);
    assert!(outcome.summary.hit_step_limit);
    assert_eq!(log.snapshots.len(), 2);
}

#[test]
fn identical_inputs_produce_identical_snapshot_sequences() {
    let mut spec = ScenarioSpec::mesh6();
    spec.flows.push(FlowSpec { src: NodeId(5), dst: NodeId(0) });
    spec.flows.push(FlowSpec { src: NodeId(3), dst: NodeId(1) });
    spec.congestion = Some(CongestionSpec::with_seed(11));

    let mut a = SnapshotLog::default();
    let mut b = SnapshotLog::default();
    run_scenario(&spec, 3, &mut a).unwrap();
    run_scenario(&spec, 3, &mut b).unwrap();
    assert!(!a.snapshots.is_empty());
    assert_eq!(a.snapshots, b.snapshots);
}

#[test]
fn repeated_runs_use_independent_state_and_congestion() {
    let mut spec = ScenarioSpec::mesh6();
    spec.congestion = Some(CongestionSpec::with_seed(3));

    let mut log = SnapshotLog::default();
    let outcomes = run_scenario(&spec, 2, &mut log).unwrap();
    assert_eq!(outcomes.len(), 2);
    for (i, o) in outcomes.iter().enumerate() {
        assert_eq!(o.run, i as u32);
        assert_eq!(o.state.packets().len(), 1);
        assert_eq!(o.summary.delivered, 1);
    }

    let first_run_edges = &log.snapshots.iter().find(|s| s.run == 0).unwrap().edges;
    let second_run_edges = &log.snapshots.iter().find(|s| s.run == 1).unwrap().edges;
    assert_ne!(first_run_edges, second_run_edges);
}

#[test]
fn invalid_topology_fails_construction() {
    let mut spec = ScenarioSpec::diamond();
    spec.topology.edges[0].weight = -1.0;
    assert!(matches!(
        Controller::from_scenario(&spec, 0),
        Err(SimError::Graph(_))
    ));
}

#[test]
fn invalid_congestion_range_is_rejected() {
    let mut spec = ScenarioSpec::diamond();
    spec.congestion = Some(CongestionSpec { seed: 1, min: 2.0, max: 1.0 });
    assert!(matches!(
        Controller::from_scenario(&spec, 0),
        Err(SimError::InvalidCongestion { .. })
    ));
}

#[test]
fn closure_and_channel_sinks_receive_snapshots() {
    let mut steps = Vec::new();
    let mut closure = |s: &Snapshot| steps.push(s.step);
    Controller::from_scenario(&ScenarioSpec::diamond(), 0)
        .unwrap()
        .run(&mut closure)
        .unwrap();
    assert_eq!(steps, vec![0, 1, 2]);

    let (mut tx, rx) = mpsc::channel::<Snapshot>();
    Controller::from_scenario(&ScenarioSpec::diamond(), 0)
        .unwrap()
        .run(&mut tx)
        .unwrap();
    drop(tx);
    assert_eq!(rx.iter().count(), 3);
}

#[test]
fn controller_with_empty_flow_list_emits_initial_snapshot_only() {
    let ctl = Controller::new(Graph::undirected(), Vec::new(), 10);
    assert_eq!(ctl.state().packets().len(), 0);
    let mut log = SnapshotLog::default();
    let outcome = ctl.run(&mut log).unwrap();
    assert_eq!(outcome.summary.steps, 0);
    assert_eq!(log.snapshots.len(), 1);
}

#[test]
fn closed_channel_sink_does_not_abort_the_run() {
    let (mut tx, rx) = mpsc::channel::<Snapshot>();
    drop(rx);
    let outcome = Controller::from_scenario(&ScenarioSpec::diamond(), 0)
        .unwrap()
        .run(&mut tx)
        .expect("run completes with closed receiver");
    assert_eq!(outcome.summary.delivered, 1);
    assert_eq!(outcome.summary.steps, 2);
}
