//! Path reconstruction from a solved next-hop matrix.

use crate::matrix::Matrix;
use crate::store::VertexId;

/// Ordered vertices from `u` to `v` inclusive, or empty when `v` is unreachable from `u`.
///
/// Expects a solved matrix. A consistent next-hop chain visits each vertex at most once, so the
/// walk gives up after `n` hops; that only happens when a negative cycle corrupted the solve.
pub fn reconstruct(next: &Matrix<Option<VertexId>>, u: VertexId, v: VertexId) -> Vec<VertexId> {
    let Some(Some(_)) = next.get(u, v) else {
        return Vec::new();
    };

    let mut path = Vec::new();
    let mut current = u;
    while current != v {
        if path.len() >= next.len() {
            tracing::warn!(u, v, "next-hop chain does not terminate; is there a negative cycle?");
            return Vec::new();
        }
        path.push(current);
        match next.get(current, v).flatten() {
            Some(hop) => current = hop,
            None => {
                debug_assert!(false, "next-hop chain broken at {current} toward {v}");
                return Vec::new();
            }
        }
    }
    path.push(v);
    path
}
