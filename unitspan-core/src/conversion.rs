//! Conversion record: a directed unit pair with a multiplicative factor

use std::fmt;

use serde::{Deserialize, Serialize};

/// Interned unit identifier
///
/// A dense index into the registry's declaration order. Cheap to copy
/// and compare; resolved from a unit name once at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub usize);

impl UnitId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A directed conversion: `value_in_target = value_in_source * factor`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub source: UnitId,
    pub target: UnitId,
    pub factor: f64,
}

impl Conversion {
    pub fn new(source: UnitId, target: UnitId, factor: f64) -> Self {
        Conversion {
            source,
            target,
            factor,
        }
    }

    /// The identity conversion for a unit (factor 1)
    ///
    /// Synthesized on demand by the query path; never stored.
    pub fn identity(unit: UnitId) -> Self {
        Conversion {
            source: unit,
            target: unit,
            factor: 1.0,
        }
    }

    /// A factor is valid when it is finite and strictly positive
    pub fn is_valid_factor(factor: f64) -> bool {
        factor.is_finite() && factor > 0.0
    }

    /// The algebraic inverse: target -> source with factor 1/f
    pub fn inverse(&self) -> Self {
        Conversion {
            source: self.target,
            target: self.source,
            factor: 1.0 / self.factor,
        }
    }

    /// Apply the conversion to a value in the source unit
    pub fn apply(&self, value: f64) -> f64 {
        value * self.factor
    }
}
