//! Distance/next-hop store with the vertex name <-> ID bijection.
//!
//! The store keeps three matrices: the caller's direct edges, and the distance/next-hop pair the
//! solver works on. All three and the name index are reshaped together on every add/remove, so
//! the store is never observed with mismatched dimensions.
//!
//! [`Store::set_edge`] writes the direct edge into the distance/next-hop cells as well, so a read
//! before the next [`Store::solve`] sees the raw edge rather than a shortest path. `solve` always
//! restarts from the direct edges, which keeps raised or removed edges from leaving stale
//! shortcuts behind.

use crate::distance::Distance;
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::path;
use crate::solver::{self, SolveStats};
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

/// Dense vertex position in `[0, n)`. Not stable across [`Store::remove_vertex`].
pub type VertexId = usize;

type NameIndex = IndexSet<String, FxBuildHasher>;

#[derive(Debug, Clone, Default)]
pub struct Store {
    edges: Matrix<Distance>,
    dist: Matrix<Distance>,
    next: Matrix<Option<VertexId>>,
    // Position in the set is the vertex ID; `shift_remove` keeps the IDs dense.
    names: NameIndex,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Vertex names in ID order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn vertex_id(&self, name: &str) -> Result<VertexId> {
        self.names
            .get_index_of(name)
            .ok_or_else(|| Error::VertexNotFound {
                name: name.to_string(),
            })
    }

    pub fn vertex_name(&self, id: VertexId) -> Result<&str> {
        self.names
            .get_index(id)
            .map(String::as_str)
            .ok_or(Error::VertexOutOfRange {
                id,
                len: self.len(),
            })
    }

    pub fn check_id(&self, id: VertexId) -> Result<()> {
        if id < self.len() {
            Ok(())
        } else {
            Err(Error::VertexOutOfRange {
                id,
                len: self.len(),
            })
        }
    }

    /// Registers `name` at the next ID with no edges; its own distance is `0`.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> Result<VertexId> {
        let name = name.into();
        if self.names.contains(&name) {
            return Err(Error::DuplicateVertex { name });
        }

        self.edges.push(Distance::Infinite);
        self.dist.push(Distance::Infinite);
        self.next.push(None);
        let (id, _) = self.names.insert_full(name);
        self.edges[(id, id)] = Distance::ZERO;
        self.dist[(id, id)] = Distance::ZERO;

        debug_assert_eq!(self.dist.len(), self.names.len());
        debug_assert_eq!(self.next.len(), self.names.len());
        tracing::debug!(id, name = %self.names[id], "vertex added");
        Ok(id)
    }

    /// Drops the vertex's row and column; every vertex with a higher ID moves down by one.
    pub fn remove_vertex(&mut self, name: &str) -> Result<VertexId> {
        let Some((id, name)) = self.names.shift_remove_full(name) else {
            return Err(Error::VertexNotFound {
                name: name.to_string(),
            });
        };

        self.edges.remove(id);
        // Solved cells may route through the removed vertex and hold pre-compaction IDs.
        self.reseed();

        debug_assert_eq!(self.dist.len(), self.names.len());
        tracing::debug!(id, %name, remaining = self.len(), "vertex removed");
        Ok(id)
    }

    /// Writes the direct edge `u -> v`. Touches exactly one cell of each matrix.
    pub fn set_edge(&mut self, u: VertexId, v: VertexId, weight: Distance) -> Result<()> {
        self.check_id(u)?;
        self.check_id(v)?;
        self.edges[(u, v)] = weight;
        self.dist[(u, v)] = weight;
        self.next[(u, v)] = weight.is_finite().then_some(v);
        tracing::debug!(u, v, %weight, "edge set");
        Ok(())
    }

    /// The direct edge `u -> v` as last set by the caller.
    pub fn edge(&self, u: VertexId, v: VertexId) -> Result<Distance> {
        self.check_id(u)?;
        self.check_id(v)?;
        Ok(self.edges[(u, v)])
    }

    pub fn distance(&self, u: VertexId, v: VertexId) -> Result<Distance> {
        self.check_id(u)?;
        self.check_id(v)?;
        Ok(self.dist[(u, v)])
    }

    pub fn next_hop(&self, u: VertexId, v: VertexId) -> Result<Option<VertexId>> {
        self.check_id(u)?;
        self.check_id(v)?;
        Ok(self.next[(u, v)])
    }

    pub fn path(&self, u: VertexId, v: VertexId) -> Result<Vec<VertexId>> {
        self.check_id(u)?;
        self.check_id(v)?;
        Ok(path::reconstruct(&self.next, u, v))
    }

    /// Recomputes all-pairs shortest paths in place.
    pub fn solve(&mut self) -> SolveStats {
        self.reseed();
        solver::floyd_warshall(&mut self.dist, &mut self.next)
    }

    fn reseed(&mut self) {
        self.dist = self.edges.clone();
        self.next = Matrix::filled(self.edges.len(), None);
        for u in 0..self.edges.len() {
            for v in 0..self.edges.len() {
                self.next[(u, v)] = self.edges[(u, v)].is_finite().then_some(v);
            }
        }
    }

    pub fn edges(&self) -> &Matrix<Distance> {
        &self.edges
    }

    pub fn dist(&self) -> &Matrix<Distance> {
        &self.dist
    }

    pub fn next(&self) -> &Matrix<Option<VertexId>> {
        &self.next
    }
}
