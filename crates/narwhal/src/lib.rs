#![forbid(unsafe_code)]

//! All-pairs shortest path (APSP) engine for small, mutable, weighted directed graphs.
//!
//! The engine keeps a dense distance matrix and a next-hop matrix indexed by vertex ID, plus a
//! bijection between vertex names and IDs. Mutations (adding/removing vertices, setting direct
//! edges) only touch the store; the caller decides when to run [`Engine::solve`], and read
//! queries are meaningful only right after a solve.
//!
//! Vertex IDs are positions, not handles: removing a vertex compacts every higher ID down by one.
//! Callers that need stable references should key by name and resolve to an ID just before use.
//!
//! ```
//! use narwhal::{Distance, Engine};
//!
//! let mut engine = Engine::new();
//! let a = engine.add_vertex("A").unwrap();
//! let b = engine.add_vertex("B").unwrap();
//! let c = engine.add_vertex("C").unwrap();
//! engine.set_edge(a, b, Distance::Finite(1)).unwrap();
//! engine.set_edge(b, c, Distance::Finite(2)).unwrap();
//! engine.set_edge(a, c, Distance::Finite(10)).unwrap();
//! engine.solve();
//!
//! assert_eq!(engine.distance(a, c).unwrap(), Distance::Finite(3));
//! assert_eq!(engine.path(a, c).unwrap(), vec![a, b, c]);
//! ```

pub mod distance;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod options;
pub mod path;
pub mod solver;
pub mod store;

pub use distance::{Distance, Weight};
pub use engine::{DistanceTable, Engine, Route};
pub use error::{Error, Result};
pub use matrix::Matrix;
pub use options::{DiagonalPolicy, EngineOptions};
pub use store::{Store, VertexId};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
