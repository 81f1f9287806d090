//! The engine facade: owns one [`Store`] and applies [`EngineOptions`] to it.
//!
//! The engine never decides when to recompute. Callers mutate, call [`Engine::solve`], then
//! query; [`Engine::is_solved`] tells whether that order has been respected.

use crate::distance::{Distance, Weight};
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::options::{DiagonalPolicy, EngineOptions};
use crate::solver::SolveStats;
use crate::store::{Store, VertexId};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Engine {
    options: EngineOptions,
    store: Store,
    solved: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_options(EngineOptions::default())
    }
}

/// A name-level answer to a shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub vertices: Vec<String>,
    pub distance: Weight,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.vertices.join(" -> "))
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EngineOptions) -> Self {
        Self {
            options,
            store: Store::new(),
            // An empty graph has nothing to solve.
            solved: true,
        }
    }

    /// Builds an unsolved engine from `n` names and an `n x n` direct-edge matrix.
    ///
    /// The diagonal of `weights` is ignored (it is always `0`).
    pub fn from_matrix<I, S>(names: I, weights: &[Vec<Distance>]) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_matrix_with_options(EngineOptions::default(), names, weights)
    }

    pub fn from_matrix_with_options<I, S>(
        options: EngineOptions,
        names: I,
        weights: &[Vec<Distance>],
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let n = names.len();
        if weights.len() != n {
            return Err(Error::MatrixShape {
                expected: n,
                found: weights.len(),
            });
        }
        if let Some(row) = weights.iter().find(|row| row.len() != n) {
            return Err(Error::MatrixShape {
                expected: n,
                found: row.len(),
            });
        }

        let mut engine = Self::with_options(options);
        for name in names {
            engine.store.add_vertex(name)?;
        }
        for (u, row) in weights.iter().enumerate() {
            for (v, &weight) in row.iter().enumerate() {
                if u != v {
                    engine.store.set_edge(u, v, weight)?;
                }
            }
        }
        engine.solved = n == 0;
        Ok(engine)
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// True when no successful mutation happened since the last [`Engine::solve`].
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn vertex_count(&self) -> usize {
        self.store.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.store.contains(name)
    }

    pub fn vertex_names(&self) -> impl Iterator<Item = &str> {
        self.store.names()
    }

    pub fn vertex_id(&self, name: &str) -> Result<VertexId> {
        self.store.vertex_id(name)
    }

    pub fn vertex_name(&self, id: VertexId) -> Result<&str> {
        self.store.vertex_name(id)
    }

    pub fn add_vertex(&mut self, name: impl Into<String>) -> Result<VertexId> {
        let id = self.store.add_vertex(name)?;
        self.solved = false;
        Ok(id)
    }

    /// Adds `name`, then the edges `name -> existing[i]` (`outgoing`) and `existing[i] -> name`
    /// (`incoming`) for every vertex that existed before the call, in ID order.
    pub fn add_vertex_with_edges(
        &mut self,
        name: impl Into<String>,
        outgoing: &[Distance],
        incoming: &[Distance],
    ) -> Result<VertexId> {
        let name = name.into();
        let n = self.store.len();
        for found in [outgoing.len(), incoming.len()] {
            if found != n {
                return Err(Error::MatrixShape { expected: n, found });
            }
        }

        let id = self.add_vertex(name)?;
        for (other, (&out, &inc)) in outgoing.iter().zip(incoming).enumerate() {
            self.store.set_edge(id, other, out)?;
            self.store.set_edge(other, id, inc)?;
        }
        Ok(id)
    }

    /// Removes `name` and returns the ID it had. Every higher ID shifts down by one.
    pub fn remove_vertex(&mut self, name: &str) -> Result<VertexId> {
        let id = self.store.remove_vertex(name)?;
        self.solved = false;
        Ok(id)
    }

    pub fn set_edge(&mut self, u: VertexId, v: VertexId, weight: Distance) -> Result<()> {
        self.store.check_id(u)?;
        self.store.check_id(v)?;
        if u == v {
            return match self.options.diagonal {
                DiagonalPolicy::Reject => Err(Error::DiagonalEdge { id: u }),
                DiagonalPolicy::Ignore => {
                    tracing::debug!(id = u, "ignoring diagonal edge");
                    Ok(())
                }
            };
        }
        self.store.set_edge(u, v, weight)?;
        self.solved = false;
        Ok(())
    }

    pub fn set_edge_by_name(&mut self, from: &str, to: &str, weight: Distance) -> Result<()> {
        let u = self.store.vertex_id(from)?;
        let v = self.store.vertex_id(to)?;
        self.set_edge(u, v, weight)
    }

    /// The direct edge weight last set for `u -> v`, independent of solving.
    pub fn edge(&self, u: VertexId, v: VertexId) -> Result<Distance> {
        self.store.edge(u, v)
    }

    pub fn solve(&mut self) -> SolveStats {
        let stats = self.store.solve();
        self.solved = true;
        stats
    }

    pub fn distance(&self, u: VertexId, v: VertexId) -> Result<Distance> {
        self.check_solved()?;
        self.store.distance(u, v)
    }

    /// Vertex IDs from `u` to `v` inclusive; empty when `v` is unreachable.
    pub fn path(&self, u: VertexId, v: VertexId) -> Result<Vec<VertexId>> {
        self.check_solved()?;
        self.store.path(u, v)
    }

    pub fn route(&self, from: &str, to: &str) -> Result<Route> {
        self.check_solved()?;
        let u = self.store.vertex_id(from)?;
        let v = self.store.vertex_id(to)?;
        let Distance::Finite(distance) = self.store.distance(u, v)? else {
            return Err(Error::NoPathExists {
                from: from.to_string(),
                to: to.to_string(),
            });
        };
        let vertices = self
            .store
            .path(u, v)?
            .into_iter()
            .map(|id| self.store.vertex_name(id).map(str::to_string))
            .collect::<Result<Vec<_>>>()?;
        Ok(Route { vertices, distance })
    }

    pub fn distance_matrix(&self) -> &Matrix<Distance> {
        self.store.dist()
    }

    pub fn table(&self) -> DistanceTable<'_> {
        DistanceTable {
            vertices: self.store.names().collect(),
            distances: self.store.dist(),
        }
    }

    fn check_solved(&self) -> Result<()> {
        if self.options.strict_queries && !self.solved {
            return Err(Error::Unsolved);
        }
        Ok(())
    }
}

/// Printable view of the distance matrix.
///
/// `Display` renders tab-separated rows with `INF` for unreachable cells; the `Serialize` form
/// uses `null` instead.
#[derive(Debug, Serialize)]
pub struct DistanceTable<'a> {
    pub vertices: Vec<&'a str>,
    pub distances: &'a Matrix<Distance>,
}

impl fmt::Display for DistanceTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.distances.rows() {
            for cell in row {
                write!(f, "{cell}\t")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
