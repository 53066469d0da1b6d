use strandgraph::{
    transitive_reduction, EdgeId, OrientedVertex, ReductionConfig, RevSymGraph,
    OVERLAP_LENGTH_KEY, READ_LENGTH_KEY,
};

fn fwd(index: usize) -> OrientedVertex {
    OrientedVertex::forward(index)
}

fn rev(index: usize) -> OrientedVertex {
    OrientedVertex::reverse_strand(index)
}

/// Build a graph from read lengths and oriented overlaps.
fn build(
    read_lens: &[usize],
    overlaps: &[(OrientedVertex, OrientedVertex, usize)],
) -> RevSymGraph {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut graph = RevSymGraph::with_reads(read_lens.len());
    for (index, &len) in read_lens.iter().enumerate() {
        graph
            .vertices_mut()
            .set_attr(index, READ_LENGTH_KEY, len)
            .unwrap();
    }
    for &(u, v, ov_len) in overlaps {
        let id = graph.edges_mut().add(u, v).unwrap();
        graph
            .edges_mut()
            .set_attr(id, OVERLAP_LENGTH_KEY, ov_len)
            .unwrap();
    }
    graph
}

fn edge_set(graph: &RevSymGraph) -> Vec<(OrientedVertex, OrientedVertex, EdgeId)> {
    let mut edges: Vec<_> = graph.edges().iter().collect();
    edges.sort_by_key(|&(u, v, id)| (u.linear(), v.linear(), id));
    edges
}

fn assert_symmetric(graph: &RevSymGraph) {
    for (u, v, id) in graph.edges().iter() {
        let mirror_ids: Vec<EdgeId> = graph
            .edges()
            .edge_ids(v.reverse(), u.reverse())
            .unwrap()
            .collect();
        assert!(
            mirror_ids.contains(&id),
            "edge {u:?} -> {v:?} has no mirror"
        );
    }
}

/// Chain 0 -> 1 -> 2 with each overlap covering 80% of the target read and a
/// shallower direct 0 -> 2 shortcut. The two-hop path dominates the shortcut
/// within the default fuzz, so only the shortcut goes.
#[test]
fn linear_chain_drops_direct_shortcut() {
    let mut graph = build(
        &[100, 100, 100],
        &[
            (fwd(0), fwd(1), 80),
            (fwd(1), fwd(2), 80),
            (fwd(0), fwd(2), 50),
        ],
    );

    let removed = transitive_reduction(&mut graph, &ReductionConfig::default()).unwrap();

    assert_eq!(removed, 1);
    assert!(graph.edges().contains(fwd(0), fwd(1)));
    assert!(graph.edges().contains(fwd(1), fwd(2)));
    assert!(!graph.edges().contains(fwd(0), fwd(2)));
    assert!(!graph.edges().contains(rev(2), rev(0)));
    assert_symmetric(&graph);
}

/// A vertex with a single successor has no two-hop candidates; the graph is
/// untouched.
#[test]
fn single_successor_leaves_graph_unchanged() {
    let mut graph = build(&[100, 100], &[(fwd(0), fwd(1), 80)]);
    let before = edge_set(&graph);

    let removed = transitive_reduction(&mut graph, &ReductionConfig::default()).unwrap();

    assert_eq!(removed, 0);
    assert_eq!(edge_set(&graph), before);
}

/// Nearest-neighbor elimination: the combined-budget test fails for w's
/// closest two-hop neighbor x0 (suffix 10 + 40 = 50 > longest 40), yet x0 is
/// eliminated because it sits at k == 0. Pinned with literal lengths; a
/// classic reduction would keep v -> x0 here.
#[test]
fn nearest_two_hop_neighbor_is_eliminated_despite_failed_budget() {
    // v = 0, w = 1, x0 = 2, x1 = 3; all reads 100 long.
    // Overhangs from v: w 10, x0 20, x1 30 (longest = 30 + 10 fuzz = 40).
    // Overhangs from w: x0 40, x1 50.
    let mut graph = build(
        &[100, 100, 100, 100],
        &[
            (fwd(0), fwd(1), 90),
            (fwd(0), fwd(2), 80),
            (fwd(0), fwd(3), 70),
            (fwd(1), fwd(2), 60),
            (fwd(1), fwd(3), 50),
        ],
    );

    let removed = transitive_reduction(&mut graph, &ReductionConfig::default()).unwrap();

    // v -> x0 goes on the forward sweep via k == 0. v -> x1 survives the
    // forward sweep (10 + 50 = 60 > 40, k == 1) but its mirror is eliminated
    // when the outer loop reaches rev(x1): rev(v) is rev(w)'s nearest in-play
    // neighbor (k == 0) and the mirrored budget also fits exactly
    // (50 + 10 = 60 <= longest 50 + fuzz 10).
    assert_eq!(removed, 2);
    assert!(!graph.edges().contains(fwd(0), fwd(2)));
    assert!(!graph.edges().contains(fwd(0), fwd(3)));
    assert!(graph.edges().contains(fwd(0), fwd(1)));
    assert!(graph.edges().contains(fwd(1), fwd(2)));
    assert!(graph.edges().contains(fwd(1), fwd(3)));
    assert_symmetric(&graph);
}

/// At fuzz = 0 the combined-budget rule admits exact domination only:
/// 20 + 20 = 40 equals the longest one-hop overhang, so the shortcut is
/// still removed.
#[test]
fn fuzz_zero_removes_exactly_dominated_shortcut() {
    let mut graph = build(
        &[100, 100, 100],
        &[
            (fwd(0), fwd(1), 80),
            (fwd(1), fwd(2), 80),
            (fwd(0), fwd(2), 60),
        ],
    );

    let removed = transitive_reduction(&mut graph, &ReductionConfig::with_fuzz(0)).unwrap();

    assert_eq!(removed, 1);
    assert!(!graph.edges().contains(fwd(0), fwd(2)));
    assert!(graph.edges().contains(fwd(0), fwd(1)));
    assert!(graph.edges().contains(fwd(1), fwd(2)));
}

/// At fuzz = 0 the budget rule fails for an overshooting two-hop path
/// (20 + 21 > 40), but the k == 0 rule is fuzz-independent and removes the
/// shortcut anyway.
#[test]
fn fuzz_zero_still_applies_nearest_neighbor_rule() {
    let mut graph = build(
        &[100, 100, 100],
        &[
            (fwd(0), fwd(1), 80),
            (fwd(1), fwd(2), 79),
            (fwd(0), fwd(2), 60),
        ],
    );

    let removed = transitive_reduction(&mut graph, &ReductionConfig::with_fuzz(0)).unwrap();

    assert_eq!(removed, 1);
    assert!(!graph.edges().contains(fwd(0), fwd(2)));
    assert!(graph.edges().contains(fwd(0), fwd(1)));
    assert!(graph.edges().contains(fwd(1), fwd(2)));
}

/// A chain crossing strands: 0+ -> 1- -> 2+ with a direct 0+ -> 2+ shortcut.
/// Orientation plumbing must resolve the two-hop path through the reverse
/// strand of read 1.
#[test]
fn reduction_follows_paths_across_strands() {
    let mut graph = build(
        &[100, 100, 100],
        &[
            (fwd(0), rev(1), 80),
            (rev(1), fwd(2), 80),
            (fwd(0), fwd(2), 50),
        ],
    );

    let removed = transitive_reduction(&mut graph, &ReductionConfig::default()).unwrap();

    assert_eq!(removed, 1);
    assert!(!graph.edges().contains(fwd(0), fwd(2)));
    assert!(graph.edges().contains(fwd(0), rev(1)));
    assert!(graph.edges().contains(rev(1), fwd(2)));
    assert_symmetric(&graph);
}

/// Chain 0..4 with layered shortcuts and a strand-crossing tail. Reduction
/// must strip every shortcut, keep the backbone, and uphold the global
/// properties: the surviving edge set is a subset of the original, symmetry
/// is intact, and a second pass is a no-op.
#[test]
fn layered_shortcuts_reduce_to_backbone() {
    let overlaps = [
        (fwd(0), fwd(1), 90),
        (fwd(1), fwd(2), 90),
        (fwd(2), fwd(3), 90),
        (fwd(3), fwd(4), 90),
        (fwd(0), fwd(2), 80),
        (fwd(1), fwd(3), 80),
        (fwd(2), fwd(4), 80),
        (fwd(0), fwd(3), 70),
        (fwd(4), rev(5), 85),
    ];
    let mut graph = build(&[100; 6], &overlaps);
    let before = edge_set(&graph);

    let removed = transitive_reduction(&mut graph, &ReductionConfig::default()).unwrap();
    let after = edge_set(&graph);

    assert_eq!(removed, 4);
    for edge in &after {
        assert!(before.contains(edge), "reduction must never add edges");
    }
    assert_symmetric(&graph);

    let backbone = [
        (fwd(0), fwd(1)),
        (fwd(1), fwd(2)),
        (fwd(2), fwd(3)),
        (fwd(3), fwd(4)),
        (fwd(4), rev(5)),
    ];
    assert_eq!(graph.edges().card_overlaps(), backbone.len());
    for &(u, v) in &backbone {
        assert!(graph.edges().contains(u, v), "backbone edge {u:?} -> {v:?} lost");
    }

    // Idempotence: the backbone is a fixpoint.
    let removed_again = transitive_reduction(&mut graph, &ReductionConfig::default()).unwrap();
    assert_eq!(removed_again, 0);
    assert_eq!(edge_set(&graph), after);
}

/// Mirror edges share their attribute record, so symmetry of attributes is
/// preserved by construction even after deletions.
#[test]
fn surviving_mirrors_keep_identical_attributes() {
    let mut graph = build(
        &[100, 100, 100],
        &[
            (fwd(0), fwd(1), 80),
            (fwd(1), fwd(2), 80),
            (fwd(0), fwd(2), 50),
        ],
    );
    transitive_reduction(&mut graph, &ReductionConfig::default()).unwrap();

    for (u, v, id) in graph.edges().iter() {
        let mirror_id = graph
            .edges()
            .edge_ids(v.reverse(), u.reverse())
            .unwrap()
            .next()
            .expect("mirror edge present");
        assert_eq!(
            graph.edges().attr(id, OVERLAP_LENGTH_KEY).unwrap(),
            graph.edges().attr(mirror_id, OVERLAP_LENGTH_KEY).unwrap(),
        );
    }
}

/// Custom attribute keys are honored end to end.
#[test]
fn reduction_reads_configured_attribute_keys() {
    let mut graph = RevSymGraph::new();
    graph.vertices_mut().new_attr("len");
    graph.edges_mut().new_attr("ov");
    assert_eq!(graph.add_vertices(3), Some(2));
    for index in 0..3 {
        graph.vertices_mut().set_attr(index, "len", 100).unwrap();
    }
    for (u, v, ov_len) in [(0, 1, 80), (1, 2, 80), (0, 2, 50)] {
        let id = graph.edges_mut().add(fwd(u), fwd(v)).unwrap();
        graph.edges_mut().set_attr(id, "ov", ov_len).unwrap();
    }

    let config = ReductionConfig {
        fuzz: 10,
        read_len_key: "len".to_string(),
        ov_len_key: "ov".to_string(),
    };
    let removed = transitive_reduction(&mut graph, &config).unwrap();
    assert_eq!(removed, 1);
    assert!(!graph.edges().contains(fwd(0), fwd(2)));
}
