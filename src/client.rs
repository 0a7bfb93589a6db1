use reqwest::Client as HttpClient;

use crate::error::{AppError, AppResult};
use crate::models::{PreferenceSet, Product, RecommendationRequest, RecommendationResponse};

/// Thin wrapper over the recommendation endpoint.
///
/// One attempt per invocation: no retry, no timeout configuration, no
/// caching. Failures are logged and propagated to the caller.
#[derive(Clone)]
pub struct RecommendationClient {
    http_client: HttpClient,
    base_url: String,
}

impl RecommendationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetches recommendations for one category.
    ///
    /// Returns the response's `products` field, defaulting to an empty
    /// list when the field is absent. A non-success status is a
    /// transport error.
    pub async fn get_recommendations(
        &self,
        product_type: &str,
        preferences: &PreferenceSet,
    ) -> AppResult<Vec<Product>> {
        let url = format!("{}/api/recommendations", self.base_url);
        let request = RecommendationRequest {
            product_type: product_type.to_string(),
            user_preferences: preferences.clone(),
        };

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .inspect_err(|e| {
                tracing::error!(error = %e, product_type, "Error fetching recommendations");
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, body = %body, product_type, "Error fetching recommendations");
            return Err(AppError::Transport(format!(
                "HTTP error! status: {}",
                status
            )));
        }

        let body: RecommendationResponse = response.json().await?;
        Ok(body.products)
    }
}
