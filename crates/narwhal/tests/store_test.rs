use narwhal::{Distance, Error, Store};

fn store_with(names: &[&str]) -> Store {
    let mut s = Store::new();
    for name in names {
        s.add_vertex(*name).unwrap();
    }
    s
}

#[test]
fn add_vertex_assigns_dense_ids_in_order() {
    let mut s = Store::new();
    assert!(s.is_empty());
    assert_eq!(s.add_vertex("a").unwrap(), 0);
    assert_eq!(s.add_vertex("b").unwrap(), 1);
    assert_eq!(s.add_vertex("c").unwrap(), 2);
    assert_eq!(s.len(), 3);
    assert_eq!(s.names().collect::<Vec<_>>(), vec!["a", "b", "c"]);
}

#[test]
fn add_vertex_initializes_row_and_column() {
    let mut s = store_with(&["a", "b"]);
    s.set_edge(0, 1, Distance::Finite(4)).unwrap();
    let c = s.add_vertex("c").unwrap();

    assert_eq!(s.distance(c, c).unwrap(), Distance::ZERO);
    assert_eq!(s.next_hop(c, c).unwrap(), None);
    for other in 0..2 {
        assert_eq!(s.distance(c, other).unwrap(), Distance::Infinite);
        assert_eq!(s.distance(other, c).unwrap(), Distance::Infinite);
        assert_eq!(s.next_hop(c, other).unwrap(), None);
        assert_eq!(s.next_hop(other, c).unwrap(), None);
    }
    // Existing cells are untouched.
    assert_eq!(s.distance(0, 1).unwrap(), Distance::Finite(4));
    assert_eq!(s.next_hop(0, 1).unwrap(), Some(1));
}

#[test]
fn duplicate_vertex_is_rejected_without_changes() {
    let mut s = store_with(&["a", "b"]);
    assert_eq!(
        s.add_vertex("a"),
        Err(Error::DuplicateVertex {
            name: "a".to_string()
        })
    );
    assert_eq!(s.len(), 2);
    assert_eq!(s.dist().len(), 2);
    assert_eq!(s.next().len(), 2);
}

#[test]
fn remove_vertex_compacts_higher_ids() {
    let mut s = store_with(&["a", "b", "c", "d"]);
    assert_eq!(s.remove_vertex("b").unwrap(), 1);

    assert_eq!(s.len(), 3);
    assert_eq!(s.vertex_id("a").unwrap(), 0);
    assert_eq!(s.vertex_id("c").unwrap(), 1);
    assert_eq!(s.vertex_id("d").unwrap(), 2);
    assert_eq!(s.vertex_name(1).unwrap(), "c");
    assert_eq!(
        s.vertex_id("b"),
        Err(Error::VertexNotFound {
            name: "b".to_string()
        })
    );
}

#[test]
fn remove_vertex_keeps_edges_between_survivors() {
    let mut s = store_with(&["a", "b", "c"]);
    s.set_edge(0, 1, Distance::Finite(1)).unwrap();
    s.set_edge(2, 0, Distance::Finite(5)).unwrap();
    s.set_edge(1, 2, Distance::Finite(7)).unwrap();

    s.remove_vertex("b").unwrap();
    let a = s.vertex_id("a").unwrap();
    let c = s.vertex_id("c").unwrap();
    assert_eq!(s.edge(c, a).unwrap(), Distance::Finite(5));
    assert_eq!(s.edge(a, c).unwrap(), Distance::Infinite);
    assert_eq!(s.dist().len(), 2);
    assert_eq!(s.edges().len(), 2);
}

#[test]
fn remove_unknown_vertex_fails_without_changes() {
    let mut s = store_with(&["a"]);
    assert_eq!(
        s.remove_vertex("zzz"),
        Err(Error::VertexNotFound {
            name: "zzz".to_string()
        })
    );
    assert_eq!(s.len(), 1);
}

#[test]
fn removing_every_vertex_leaves_an_empty_store() {
    let mut s = store_with(&["a", "b"]);
    s.remove_vertex("a").unwrap();
    s.remove_vertex("b").unwrap();
    assert!(s.is_empty());
    assert!(s.dist().is_empty());
    s.solve();
}

#[test]
fn set_edge_touches_a_single_cell() {
    let mut s = store_with(&["a", "b", "c"]);
    s.set_edge(0, 2, Distance::Finite(3)).unwrap();
    assert_eq!(s.distance(0, 2).unwrap(), Distance::Finite(3));
    assert_eq!(s.next_hop(0, 2).unwrap(), Some(2));
    assert_eq!(s.distance(2, 0).unwrap(), Distance::Infinite);

    s.set_edge(0, 2, Distance::Infinite).unwrap();
    assert_eq!(s.distance(0, 2).unwrap(), Distance::Infinite);
    assert_eq!(s.next_hop(0, 2).unwrap(), None);
}

#[test]
fn reads_before_solve_see_raw_edges() {
    let mut s = store_with(&["a", "b", "c"]);
    s.set_edge(0, 1, Distance::Finite(1)).unwrap();
    s.set_edge(1, 2, Distance::Finite(1)).unwrap();
    assert_eq!(s.distance(0, 2).unwrap(), Distance::Infinite);
    s.solve();
    assert_eq!(s.distance(0, 2).unwrap(), Distance::Finite(2));
}

#[test]
fn out_of_range_ids_are_rejected() {
    let mut s = store_with(&["a", "b"]);
    assert_eq!(
        s.set_edge(0, 2, Distance::Finite(1)),
        Err(Error::VertexOutOfRange { id: 2, len: 2 })
    );
    assert_eq!(
        s.distance(5, 0),
        Err(Error::VertexOutOfRange { id: 5, len: 2 })
    );
    assert_eq!(
        s.vertex_name(2),
        Err(Error::VertexOutOfRange { id: 2, len: 2 })
    );
    assert!(s.path(0, 9).is_err());
}
