use crate::models::{PreferenceSet, Product};

/// Returns the products satisfying every populated preference dimension.
///
/// The result preserves the order of the input sequence and is always a
/// fresh list; the authoritative sequence is never mutated. An empty
/// result is valid.
pub fn apply(products: &[Product], prefs: &PreferenceSet) -> Vec<Product> {
    products
        .iter()
        .filter(|p| matches(p, prefs))
        .cloned()
        .collect()
}

/// Whether a single product satisfies the preference set.
///
/// Brand membership is exact; the feature clause is satisfied by any one
/// overlap between the requested features and the product's feature list.
pub fn matches(product: &Product, prefs: &PreferenceSet) -> bool {
    if let Some(budget) = prefs.budget {
        // A non-finite (unavailable) price cannot satisfy a ceiling.
        if !(product.price <= budget) {
            return false;
        }
    }

    if !prefs.brands.is_empty() && !prefs.brands.contains(&product.brand) {
        return false;
    }

    if !prefs.features.is_empty()
        && !prefs.features.iter().any(|f| product.features.contains(f))
    {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn luggage() -> Vec<Product> {
        catalog::luggage().products
    }

    #[test]
    fn test_unconstrained_preferences_are_identity() {
        let products = luggage();
        let filtered = apply(&products, &PreferenceSet::new());
        assert_eq!(filtered, products);
    }

    #[test]
    fn test_budget_ceiling_is_inclusive() {
        let products = luggage();
        let prefs = PreferenceSet {
            budget: Some(129.0),
            ..Default::default()
        };
        let filtered = apply(&products, &prefs);
        let names: Vec<&str> = filtered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Samsonite Omni PC", "American Tourister Moonlight"]);
    }

    #[test]
    fn test_brand_restriction() {
        let products = luggage();
        let prefs = PreferenceSet {
            brands: vec!["Delsey".to_string(), "Samsonite".to_string()],
            ..Default::default()
        };
        let filtered = apply(&products, &prefs);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|p| prefs.brands.contains(&p.brand)));
    }

    #[test]
    fn test_feature_clause_needs_only_one_match() {
        let products = luggage();
        let prefs = PreferenceSet {
            features: vec!["Lightweight".to_string(), "TSA lock".to_string()],
            ..Default::default()
        };
        let filtered = apply(&products, &prefs);
        // Maxlite is Lightweight, Omni PC has a TSA lock; neither has both.
        let names: Vec<&str> = filtered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["TravelPro Maxlite 5", "Samsonite Omni PC"]);
    }

    #[test]
    fn test_all_dimensions_populated() {
        let products = luggage();
        let prefs = PreferenceSet {
            budget: Some(150.0),
            brands: vec!["Samsonite".to_string()],
            features: vec![],
        };
        let filtered = apply(&products, &prefs);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Samsonite Omni PC");
        assert_eq!(filtered[0].price, 129.0);
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let products = luggage();
        let prefs = PreferenceSet {
            budget: Some(160.0),
            ..Default::default()
        };
        let filtered = apply(&products, &prefs);
        let positions: Vec<usize> = filtered
            .iter()
            .map(|f| products.iter().position(|p| p == f).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_empty_result_is_valid() {
        let products = luggage();
        let prefs = PreferenceSet {
            budget: Some(10.0),
            ..Default::default()
        };
        assert!(apply(&products, &prefs).is_empty());
    }

    #[test]
    fn test_unavailable_price_fails_budget_clause() {
        let mut products = luggage();
        products[0].price = f64::NAN;
        let prefs = PreferenceSet {
            budget: Some(1000.0),
            ..Default::default()
        };
        let filtered = apply(&products, &prefs);
        assert!(filtered.iter().all(|p| p.name != products[0].name));
    }
}
