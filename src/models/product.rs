use serde::{Deserialize, Serialize};

/// A single recommended or catalogued product.
///
/// The `id` is positional within one result set (1-based after
/// normalization) and is not stable across calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub rating: f64,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    /// Whether a usable price is known for this product.
    ///
    /// A price that failed normalization is carried as a non-finite
    /// number; display code treats it as "price unavailable" rather
    /// than an error.
    pub fn has_price(&self) -> bool {
        self.price.is_finite()
    }

    /// Price for display, or `None` when unavailable
    pub fn display_price(&self) -> Option<f64> {
        self.has_price().then_some(self.price)
    }
}
