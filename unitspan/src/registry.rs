//! Unit registry - the fixed set of unit names known to a converter

use std::collections::HashMap;

use unitspan_core::{ConvertError, UnitId};

/// Registry of unit names, fixed at construction
///
/// Names are interned into dense [`UnitId`]s. Declaration order is
/// preserved and significant: the closure engine scans units in this
/// order, which makes derivation reproducible.
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    names: Vec<String>,
    index: HashMap<String, UnitId>,
}

impl UnitRegistry {
    /// Build a registry from unique unit names
    ///
    /// Rejects duplicates; the whole construction fails, nothing is
    /// kept.
    pub fn new<I, S>(units: I) -> Result<Self, ConvertError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names = Vec::new();
        let mut index = HashMap::new();

        for unit in units {
            let name = unit.into();
            let id = UnitId(names.len());
            if index.insert(name.clone(), id).is_some() {
                return Err(ConvertError::DuplicateUnit(name));
            }
            names.push(name);
        }

        Ok(UnitRegistry { names, index })
    }

    /// Resolve a unit name to its id
    pub fn resolve(&self, name: &str) -> Option<UnitId> {
        self.index.get(name).copied()
    }

    /// Resolve a name, failing with `UnknownUnit` when absent
    pub fn require(&self, name: &str) -> Result<UnitId, ConvertError> {
        self.resolve(name)
            .ok_or_else(|| ConvertError::UnknownUnit(name.to_string()))
    }

    /// The name of a registered unit
    pub fn name(&self, id: UnitId) -> &str {
        &self.names[id.index()]
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of registered units
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All unit ids in declaration order
    pub fn ids(&self) -> impl Iterator<Item = UnitId> + '_ {
        (0..self.names.len()).map(UnitId)
    }

    /// All unit names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order() {
        let reg = UnitRegistry::new(["m", "ft", "in"]).unwrap();
        let names: Vec<_> = reg.names().collect();
        assert_eq!(names, vec!["m", "ft", "in"]);
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn test_resolve_and_name() {
        let reg = UnitRegistry::new(["m", "ft"]).unwrap();
        let ft = reg.resolve("ft").unwrap();
        assert_eq!(reg.name(ft), "ft");
        assert_eq!(ft, UnitId(1));
        assert!(reg.resolve("yd").is_none());
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = UnitRegistry::new(["m", "ft", "m"]).unwrap_err();
        assert_eq!(err, ConvertError::DuplicateUnit("m".to_string()));
    }

    #[test]
    fn test_require_unknown() {
        let reg = UnitRegistry::new(["m"]).unwrap();
        let err = reg.require("kg").unwrap_err();
        assert_eq!(err, ConvertError::UnknownUnit("kg".to_string()));
    }
}
