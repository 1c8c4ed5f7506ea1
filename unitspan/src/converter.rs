//! Unit converter - construction, lazy queries, completeness
//!
//! The converter owns its registry and store exclusively. Direct
//! conversions are supplied once at construction; afterwards the
//! store grows only through derivation. Queries are lazy: a missing
//! pair triggers single derivation steps until the pair appears or a
//! full unproductive pass proves the units disconnected.

use tracing::debug;
use unitspan_core::{Conversion, ConvertError};

use crate::closure;
use crate::registry::UnitRegistry;
use crate::store::ConversionStore;

/// A conversion-graph engine over a fixed set of units
#[derive(Debug, Clone)]
pub struct UnitConverter {
    registry: UnitRegistry,
    store: ConversionStore,
}

impl UnitConverter {
    /// Build a converter from unit names and direct conversions
    ///
    /// Each `(source, target, factor)` triple is inserted together
    /// with its inverse. Construction fails atomically on a duplicate
    /// unit name, a triple referencing an unregistered unit, or an
    /// invalid factor.
    pub fn new<U, N, C, S, T>(units: U, conversions: C) -> Result<Self, ConvertError>
    where
        U: IntoIterator<Item = N>,
        N: Into<String>,
        C: IntoIterator<Item = (S, T, f64)>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let registry = UnitRegistry::new(units)?;
        let mut store = ConversionStore::new(registry.len());

        for (source, target, factor) in conversions {
            let source = registry.require(source.as_ref())?;
            let target = registry.require(target.as_ref())?;
            store.put(&registry, source, target, factor)?;
        }

        debug!(
            units = registry.len(),
            direct_edges = store.len(),
            "constructed converter"
        );
        Ok(UnitConverter { registry, store })
    }

    /// Look up or derive the conversion between two units
    ///
    /// Self-pairs return a synthesized identity conversion without
    /// touching the store. Otherwise the store is consulted and, on a
    /// miss, enriched one derivation step at a time until the pair
    /// appears or a full pass derives nothing, which proves the units
    /// lie in disconnected components (`NoConversionPath`). Every
    /// intermediate edge derived along the way stays cached.
    pub fn get_conversion(&mut self, source: &str, target: &str) -> Result<Conversion, ConvertError> {
        let src = self.registry.require(source)?;
        let dst = self.registry.require(target)?;

        if src == dst {
            return Ok(Conversion::identity(src));
        }

        loop {
            if let Some(conversion) = self.store.get(src, dst) {
                return Ok(*conversion);
            }
            if !closure::derive_one(&self.registry, &mut self.store)? {
                return Err(ConvertError::NoConversionPath {
                    source: source.to_string(),
                    target: target.to_string(),
                });
            }
        }
    }

    /// Convert a value from one unit to another
    pub fn convert(&mut self, value: f64, source: &str, target: &str) -> Result<f64, ConvertError> {
        Ok(self.get_conversion(source, target)?.apply(value))
    }

    /// Derive every reachable conversion (diagnostic/offline mode)
    pub fn saturate(&mut self) -> Result<(), ConvertError> {
        closure::saturate(&self.registry, &mut self.store)
    }

    /// Whether every ordered pair of distinct units is cached
    ///
    /// Self-pairs are excluded: they are never stored. For a
    /// disconnected graph this stays false no matter how much
    /// derivation runs; that is the intended signal.
    pub fn is_complete(&self) -> bool {
        self.registry.ids().all(|a| {
            self.registry
                .ids()
                .all(|b| a == b || self.store.contains(a, b))
        })
    }

    pub fn registry(&self) -> &UnitRegistry {
        &self.registry
    }

    /// Read-only view of the cache, for diagnostics
    pub fn store(&self) -> &ConversionStore {
        &self.store
    }
}
