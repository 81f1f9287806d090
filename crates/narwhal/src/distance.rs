//! Path lengths with an explicit "no path" marker.
//!
//! Using a dedicated variant instead of a large sentinel integer means the solver never adds two
//! "infinite" legs together: [`Distance::checked_add`] returns `None` whenever either leg is
//! [`Distance::Infinite`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Edge weight / path length. Negative weights are accepted but negative cycles are unsupported.
pub type Weight = i64;

/// Length of a path, or [`Distance::Infinite`] when no path is known.
///
/// Ordering puts every finite value below `Infinite`, so `min`/`<` read naturally.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "Option<Weight>", into = "Option<Weight>")]
pub enum Distance {
    // Variant order is load-bearing for the derived `Ord`.
    Finite(Weight),
    #[default]
    Infinite,
}

impl Distance {
    pub const ZERO: Self = Self::Finite(0);

    /// Interprets the front-end input convention where `-1` means "no edge".
    pub fn from_input(raw: Weight) -> Self {
        if raw == -1 {
            Self::Infinite
        } else {
            Self::Finite(raw)
        }
    }

    pub fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }

    pub fn is_infinite(self) -> bool {
        matches!(self, Self::Infinite)
    }

    pub fn finite(self) -> Option<Weight> {
        match self {
            Self::Finite(w) => Some(w),
            Self::Infinite => None,
        }
    }

    /// Sum of two legs, or `None` if either leg is infinite or the sum overflows.
    pub fn checked_add(self, other: Self) -> Option<Weight> {
        match (self, other) {
            (Self::Finite(a), Self::Finite(b)) => a.checked_add(b),
            _ => None,
        }
    }
}

impl From<Weight> for Distance {
    fn from(value: Weight) -> Self {
        Self::Finite(value)
    }
}

impl From<Option<Weight>> for Distance {
    fn from(value: Option<Weight>) -> Self {
        value.map_or(Self::Infinite, Self::Finite)
    }
}

impl From<Distance> for Option<Weight> {
    fn from(value: Distance) -> Self {
        value.finite()
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(w) => write!(f, "{w}"),
            Self::Infinite => f.write_str("INF"),
        }
    }
}
