//! Conversion store - the cache of known conversions
//!
//! A sparse map from (source, target) to a `Conversion`, kept
//! consistent with its algebraic inverse: whenever (A -> B, m) is
//! present, (B -> A, 1/m) is present. Self-pairs are never stored.
//! The store only grows; edges are never removed or overwritten.

use std::collections::HashMap;

use tracing::trace;
use unitspan_core::{Conversion, ConvertError, UnitId};

use crate::registry::UnitRegistry;

/// Cache of known conversions, including auto-derived inverses
///
/// Iteration and per-unit neighbor lists preserve insertion order,
/// which the closure engine relies on for reproducible derivation.
#[derive(Debug, Clone)]
pub struct ConversionStore {
    edges: HashMap<(UnitId, UnitId), Conversion>,
    order: Vec<(UnitId, UnitId)>,
    neighbors: Vec<Vec<UnitId>>,
}

impl ConversionStore {
    pub(crate) fn new(unit_count: usize) -> Self {
        ConversionStore {
            edges: HashMap::new(),
            order: Vec::new(),
            neighbors: vec![Vec::new(); unit_count],
        }
    }

    /// Insert a conversion and its inverse, both or neither
    ///
    /// Both directions are validated before either is inserted, so a
    /// failure leaves the store untouched. Refuses self-pairs and
    /// pairs already present; the closure engine checks `contains`
    /// before deriving, so those refusals are only reachable from the
    /// construction boundary.
    pub(crate) fn put(
        &mut self,
        registry: &UnitRegistry,
        source: UnitId,
        target: UnitId,
        factor: f64,
    ) -> Result<(), ConvertError> {
        if source == target {
            return Err(ConvertError::SelfConversion(
                registry.name(source).to_string(),
            ));
        }
        if self.contains(source, target) {
            return Err(ConvertError::DuplicateConversion {
                source: registry.name(source).to_string(),
                target: registry.name(target).to_string(),
            });
        }

        let forward = Conversion::new(source, target, factor);
        let inverse = forward.inverse();

        // 1/f can overflow to infinity for subnormal f, so the
        // inverse is validated too before anything is committed.
        if !Conversion::is_valid_factor(forward.factor) {
            return Err(ConvertError::InvalidMultiplier {
                source: registry.name(source).to_string(),
                target: registry.name(target).to_string(),
                factor: forward.factor,
            });
        }
        if !Conversion::is_valid_factor(inverse.factor) {
            return Err(ConvertError::InvalidMultiplier {
                source: registry.name(target).to_string(),
                target: registry.name(source).to_string(),
                factor: inverse.factor,
            });
        }

        self.insert(forward);
        self.insert(inverse);

        trace!(
            source = registry.name(source),
            target = registry.name(target),
            factor,
            "cached conversion pair"
        );
        Ok(())
    }

    fn insert(&mut self, conversion: Conversion) {
        let key = (conversion.source, conversion.target);
        self.edges.insert(key, conversion);
        self.order.push(key);
        self.neighbors[conversion.source.index()].push(conversion.target);
    }

    /// The cached conversion for a pair, if any
    ///
    /// Absence is not an error; the query path decides what to do.
    pub fn get(&self, source: UnitId, target: UnitId) -> Option<&Conversion> {
        self.edges.get(&(source, target))
    }

    pub fn contains(&self, source: UnitId, target: UnitId) -> bool {
        self.edges.contains_key(&(source, target))
    }

    /// Units adjacent to `unit`, in edge insertion order
    pub fn neighbors(&self, unit: UnitId) -> &[UnitId] {
        &self.neighbors[unit.index()]
    }

    /// All cached conversions in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Conversion> {
        self.order.iter().map(|key| &self.edges[key])
    }

    /// Number of cached directed edges
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
