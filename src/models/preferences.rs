use serde::{Deserialize, Serialize};

/// User-selected constraints applied to a product list.
///
/// An absent budget and empty brand/feature lists impose no
/// restriction. A fresh set is built on every filter interaction;
/// nothing here is persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PreferenceSet {
    /// Budget ceiling; retained products must not cost more
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,

    /// Accepted brands; empty means any brand
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub brands: Vec<String>,

    /// Requested features; a product needs at least one of them
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

impl PreferenceSet {
    /// Creates a set that restricts nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no dimension imposes a restriction
    pub fn is_unconstrained(&self) -> bool {
        self.budget.is_none() && self.brands.is_empty() && self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_deserializes_to_unconstrained() {
        let prefs: PreferenceSet = serde_json::from_str("{}").unwrap();
        assert!(prefs.is_unconstrained());
    }

    #[test]
    fn test_partial_object_keeps_other_dimensions_open() {
        let prefs: PreferenceSet = serde_json::from_str(r#"{"budget": 150}"#).unwrap();
        assert_eq!(prefs.budget, Some(150.0));
        assert!(prefs.brands.is_empty());
        assert!(!prefs.is_unconstrained());
    }

    #[test]
    fn test_serialization_omits_empty_dimensions() {
        let json = serde_json::to_string(&PreferenceSet::new()).unwrap();
        assert_eq!(json, "{}");
    }
}
