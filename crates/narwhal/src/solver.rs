//! Floyd-Warshall all-pairs shortest paths over the distance/next-hop matrices.
//!
//! The recurrence must iterate the intermediate vertex `k` outermost: after finishing `k`,
//! `dist[i][j]` is optimal among paths whose interior vertices are all in `{0..=k}`.
//!
//! Accepts either raw direct edges or an already-solved matrix pair; in the latter case no cell
//! improves and the matrices are left as they were. Negative cycles are not detected.

use crate::distance::Distance;
use crate::matrix::Matrix;
use crate::store::VertexId;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolveStats {
    pub vertices: usize,
    /// Number of cells improved by routing through an intermediate vertex.
    pub relaxations: usize,
}

pub fn floyd_warshall(
    dist: &mut Matrix<Distance>,
    next: &mut Matrix<Option<VertexId>>,
) -> SolveStats {
    let n = dist.len();
    debug_assert_eq!(n, next.len(), "distance/next-hop matrices disagree on size");
    let n = n.min(next.len());

    // The diagonal belongs to the solver.
    for i in 0..n {
        dist[(i, i)] = Distance::ZERO;
        next[(i, i)] = Some(i);
    }

    let mut relaxations = 0usize;
    for k in 0..n {
        for i in 0..n {
            let ik = dist[(i, k)];
            if ik.is_infinite() {
                continue;
            }
            for j in 0..n {
                let Some(through) = ik.checked_add(dist[(k, j)]) else {
                    continue;
                };
                if Distance::Finite(through) < dist[(i, j)] {
                    dist[(i, j)] = Distance::Finite(through);
                    next[(i, j)] = next[(i, k)];
                    relaxations += 1;
                    tracing::trace!(i, j, k, through, "relaxed");
                }
            }
        }
    }

    tracing::debug!(vertices = n, relaxations, "floyd-warshall solved");
    SolveStats {
        vertices: n,
        relaxations,
    }
}
