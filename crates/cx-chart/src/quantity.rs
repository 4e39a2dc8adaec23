//! Named quantities of the active record.

use cx_core::Real;
use indexmap::IndexMap;

use crate::aggregate::DisplayPoint;

/// Name -> value lookup that remembers insertion order.
///
/// Built once per active record. A stored `0.0` is a real value: lookups
/// return `Option`, so "missing" and "zero" never get confused.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuantityMap {
    values: IndexMap<String, Real>,
}

impl QuantityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Insert or overwrite. An overwritten name keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: Real) {
        self.values.insert(name.into(), value);
    }

    pub fn resolve(&self, name: &str) -> Option<Real> {
        self.values.get(name).copied()
    }

    /// Like `resolve`, but also hands back the stored name.
    pub fn entry(&self, name: &str) -> Option<(&str, Real)> {
        self.values
            .get_key_value(name)
            .map(|(stored, value)| (stored.as_str(), *value))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Real)> + '_ {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.keys().map(String::as_str)
    }

    /// Every quantity as a display point, in map order.
    pub fn to_points(&self) -> Vec<DisplayPoint> {
        self.iter()
            .map(|(name, value)| DisplayPoint::new(name, value))
            .collect()
    }
}

impl<K: Into<String>> FromIterator<(K, Real)> for QuantityMap {
    fn from_iter<I: IntoIterator<Item = (K, Real)>>(iter: I) -> Self {
        let mut map = QuantityMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}
