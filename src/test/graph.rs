use crate::net::{EdgeFault, Graph, GraphError, GraphKind, NodeId};

fn graph_with_nodes(kind: GraphKind, n: u32) -> Graph {
    let mut g = Graph::new(kind);
    for i in 0..n {
        g.add_node(NodeId(i));
    }
    g
}

#[test]
fn add_node_is_idempotent_and_keeps_first_label() {
    let mut g = Graph::undirected();
    assert!(g.add_node_labeled(NodeId(1), "core"));
    assert!(!g.add_node(NodeId(1)));
    assert!(!g.add_node_labeled(NodeId(1), "edge"));
    assert_eq!(g.node_count(), 1);
    assert_eq!(g.label(NodeId(1)), Some("core"));
}

#[test]
fn undirected_edge_is_inserted_in_both_directions() {
    let mut g = graph_with_nodes(GraphKind::Undirected, 2);
    g.add_edge(NodeId(0), NodeId(1), 2.5).expect("add edge");

    assert!(g.has_edge(NodeId(0), NodeId(1)));
    assert!(g.has_edge(NodeId(1), NodeId(0)));
    assert_eq!(g.neighbors(NodeId(1)).unwrap(), &[(NodeId(0), 2.5)]);
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.edges(), vec![(NodeId(0), NodeId(1), 2.5)]);
}

#[test]
fn directed_edge_is_one_way() {
    let mut g = graph_with_nodes(GraphKind::Directed, 2);
    g.add_edge(NodeId(1), NodeId(0), 1.0).expect("add edge");

    assert!(g.has_edge(NodeId(1), NodeId(0)));
    assert!(!g.has_edge(NodeId(0), NodeId(1)));
    assert!(g.neighbors(NodeId(0)).unwrap().is_empty());

    // 反方向是另一条链路
    g.add_edge(NodeId(0), NodeId(1), 3.0).expect("add reverse edge");
    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.edge_weight(NodeId(0), NodeId(1)).unwrap(), Some(3.0));
}

#[test]
fn add_edge_rejects_malformed_links_without_mutation() {
    let mut g = graph_with_nodes(GraphKind::Undirected, 3);
    g.add_edge(NodeId(0), NodeId(1), 1.0).expect("add edge");

    let cases = [
        (NodeId(0), NodeId(2), -1.0, EdgeFault::NegativeWeight),
        (NodeId(0), NodeId(2), f64::NAN, EdgeFault::NonFiniteWeight),
        (NodeId(0), NodeId(2), f64::INFINITY, EdgeFault::NonFiniteWeight),
        (NodeId(2), NodeId(2), 1.0, EdgeFault::SelfLoop),
        (NodeId(0), NodeId(9), 1.0, EdgeFault::UnknownEndpoint),
        (NodeId(1), NodeId(0), 5.0, EdgeFault::Duplicate),
    ];
    for (from, to, w, fault) in cases {
        let err = g.add_edge(from, to, w).unwrap_err();
        assert_eq!(err, GraphError::InvalidEdge { from, to, reason: fault });
    }

    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.edges(), vec![(NodeId(0), NodeId(1), 1.0)]);
    assert!(g.neighbors(NodeId(2)).unwrap().is_empty());
}

#[test]
fn zero_weight_edges_are_allowed() {
    let mut g = graph_with_nodes(GraphKind::Undirected, 2);
    g.add_edge(NodeId(0), NodeId(1), 0.0).expect("zero weight is valid");
    assert_eq!(g.edge_weight(NodeId(0), NodeId(1)).unwrap(), Some(0.0));
}

#[test]
fn queries_on_missing_nodes_report_node_not_found() {
    let g = graph_with_nodes(GraphKind::Undirected, 1);
    assert_eq!(
        g.neighbors(NodeId(7)).unwrap_err(),
        GraphError::NodeNotFound(NodeId(7))
    );
    assert_eq!(
        g.edge_weight(NodeId(7), NodeId(0)).unwrap_err(),
        GraphError::NodeNotFound(NodeId(7))
    );
    assert!(!g.has_node(NodeId(7)));
    assert!(!g.has_edge(NodeId(7), NodeId(0)));
}

#[test]
fn nodes_and_edges_iterate_in_id_order() {
    let mut g = Graph::undirected();
    for id in [5, 1, 3] {
        g.add_node(NodeId(id));
    }
    g.add_edge(NodeId(5), NodeId(1), 1.0).unwrap();
    g.add_edge(NodeId(3), NodeId(1), 2.0).unwrap();

    assert_eq!(
        g.nodes().collect::<Vec<_>>(),
        vec![NodeId(1), NodeId(3), NodeId(5)]
    );
    assert_eq!(
        g.edges(),
        vec![(NodeId(1), NodeId(5), 1.0), (NodeId(1), NodeId(3), 2.0)]
    );
    // 邻接表保留插入顺序
    assert_eq!(
        g.neighbors(NodeId(1)).unwrap(),
        &[(NodeId(5), 1.0), (NodeId(3), 2.0)]
    );
}
