mod preferences;
mod product;

pub use preferences::PreferenceSet;
pub use product::Product;

use serde::{Deserialize, Serialize};

/// Request body accepted by the recommendation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub product_type: String,
    #[serde(default)]
    pub user_preferences: PreferenceSet,
}

/// Response body produced by the recommendation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default)]
    pub products: Vec<Product>,
}
