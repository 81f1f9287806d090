use narwhal::solver::{SolveStats, floyd_warshall};
use narwhal::{Distance, Engine, Matrix, VertexId};

fn abc() -> (Engine, VertexId, VertexId, VertexId) {
    let mut e = Engine::new();
    let a = e.add_vertex("A").unwrap();
    let b = e.add_vertex("B").unwrap();
    let c = e.add_vertex("C").unwrap();
    e.set_edge(a, b, Distance::Finite(1)).unwrap();
    e.set_edge(b, c, Distance::Finite(2)).unwrap();
    e.set_edge(a, c, Distance::Finite(10)).unwrap();
    e.solve();
    (e, a, b, c)
}

#[test]
fn shorter_indirect_route_wins() {
    let (e, a, b, c) = abc();
    assert_eq!(e.distance(a, c).unwrap(), Distance::Finite(3));
    assert_eq!(e.path(a, c).unwrap(), vec![a, b, c]);
}

#[test]
fn clearing_edges_makes_target_unreachable() {
    let (mut e, a, b, c) = abc();
    e.set_edge(a, c, Distance::Infinite).unwrap();
    e.set_edge(b, c, Distance::Infinite).unwrap();
    e.solve();
    assert_eq!(e.distance(a, c).unwrap(), Distance::Infinite);
    assert!(e.path(a, c).unwrap().is_empty());
}

#[test]
fn added_vertex_joins_existing_routes() {
    let (mut e, a, _, c) = abc();
    let d = e.add_vertex("D").unwrap();
    e.set_edge(c, d, Distance::Finite(1)).unwrap();
    e.solve();
    assert_eq!(e.distance(a, d).unwrap(), Distance::Finite(4));
    assert_eq!(
        e.route("A", "D").unwrap().vertices,
        vec!["A", "B", "C", "D"]
    );
}

#[test]
fn raising_an_edge_after_a_solve_drops_the_old_shortcut() {
    let (mut e, a, b, c) = abc();
    e.set_edge(a, b, Distance::Finite(50)).unwrap();
    e.solve();
    assert_eq!(e.distance(a, c).unwrap(), Distance::Finite(10));
    assert_eq!(e.path(a, c).unwrap(), vec![a, c]);
}

#[test]
fn removing_a_relay_vertex_reroutes() {
    let (mut e, ..) = abc();
    e.remove_vertex("B").unwrap();
    e.solve();
    let a = e.vertex_id("A").unwrap();
    let c = e.vertex_id("C").unwrap();
    assert_eq!(c, 1);
    assert_eq!(e.distance(a, c).unwrap(), Distance::Finite(10));
    assert_eq!(e.path(a, c).unwrap(), vec![a, c]);
}

#[test]
fn graph_is_directed() {
    let (e, a, _, c) = abc();
    assert_eq!(e.distance(c, a).unwrap(), Distance::Infinite);
    assert!(e.path(c, a).unwrap().is_empty());
}

#[test]
fn diagonal_is_zero_and_path_to_self_is_the_vertex() {
    let (e, a, b, c) = abc();
    for v in [a, b, c] {
        assert_eq!(e.distance(v, v).unwrap(), Distance::ZERO);
        assert_eq!(e.path(v, v).unwrap(), vec![v]);
    }
}

#[test]
fn solving_twice_changes_nothing() {
    let (mut e, ..) = abc();
    let dist = e.distance_matrix().clone();
    let next = e.store().next().clone();
    e.solve();
    assert_eq!(e.distance_matrix(), &dist);
    assert_eq!(e.store().next(), &next);
}

#[test]
fn negative_edges_without_cycles_are_supported() {
    let mut e = Engine::new();
    let a = e.add_vertex("a").unwrap();
    let b = e.add_vertex("b").unwrap();
    let c = e.add_vertex("c").unwrap();
    e.set_edge(a, b, Distance::Finite(4)).unwrap();
    e.set_edge(b, c, Distance::Finite(-3)).unwrap();
    e.set_edge(a, c, Distance::Finite(2)).unwrap();
    e.solve();
    assert_eq!(e.distance(a, c).unwrap(), Distance::Finite(1));
    assert_eq!(e.path(a, c).unwrap(), vec![a, b, c]);
}

#[test]
fn huge_weights_do_not_overflow_into_shortcuts() {
    let mut e = Engine::new();
    let a = e.add_vertex("a").unwrap();
    let b = e.add_vertex("b").unwrap();
    let c = e.add_vertex("c").unwrap();
    e.set_edge(a, b, Distance::Finite(i64::MAX)).unwrap();
    e.set_edge(b, c, Distance::Finite(i64::MAX)).unwrap();
    e.solve();
    assert_eq!(e.distance(a, c).unwrap(), Distance::Infinite);
    assert!(e.path(a, c).unwrap().is_empty());
}

#[test]
fn solver_accepts_raw_matrices_directly() {
    // 0 -> 1 -> 2 -> 3, plus a long 0 -> 3 edge.
    let n = 4;
    let mut dist = Matrix::filled(n, Distance::Infinite);
    let mut next = Matrix::filled(n, None);
    for (u, v, w) in [(0, 1, 1), (1, 2, 1), (2, 3, 1), (0, 3, 9)] {
        dist[(u, v)] = Distance::Finite(w);
        next[(u, v)] = Some(v);
    }

    let stats = floyd_warshall(&mut dist, &mut next);
    assert_eq!(stats.vertices, 4);
    assert!(stats.relaxations > 0);
    assert_eq!(dist[(0, 3)], Distance::Finite(3));
    assert_eq!(next[(0, 3)], Some(1));
    assert_eq!(dist[(3, 0)], Distance::Infinite);
    assert_eq!(next[(3, 0)], None);

    let again = floyd_warshall(&mut dist, &mut next);
    assert_eq!(
        again,
        SolveStats {
            vertices: 4,
            relaxations: 0
        }
    );
}

#[test]
fn empty_graph_solves_trivially() {
    let mut e = Engine::new();
    assert_eq!(e.solve(), SolveStats::default());
    assert!(e.is_solved());
}
