//! Category-page composition.
//!
//! A page owns the authoritative product sequence and the current
//! preference set; the filtered grid and comparison table are derived
//! views, recomputed on demand and never mutated independently. The
//! page always renders something: real recommendations, previously set
//! products, or an empty list with an advisory message.

use crate::catalog::{DataSource, FilterOptions, InterestingFact, KeyFactor, PageSpec};
use crate::client::RecommendationClient;
use crate::error::AppResult;
use crate::models::{PreferenceSet, Product};
use crate::services::filter;

/// Advisory shown when the fetch fails or comes back empty
pub const FETCH_ADVISORY: &str =
    "Failed to load personalized recommendations. Showing default options.";

/// One row of the comparison table
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub name: String,
    pub brand: String,
    pub price_label: String,
    pub rating: f64,
    pub features: String,
}

impl ComparisonRow {
    fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            brand: product.brand.clone(),
            price_label: match product.display_price() {
                Some(price) => format!("${price:.2}"),
                None => "N/A".to_string(),
            },
            rating: product.rating,
            features: product.features.join(", "),
        }
    }
}

/// Snapshot handed to the rendering layer
#[derive(Debug)]
pub struct PageView<'a> {
    pub title: &'a str,
    pub key_factors: &'a [KeyFactor],
    pub products: Vec<Product>,
    pub total_models: usize,
    pub comparison: Vec<ComparisonRow>,
    pub interesting_facts: &'a [InterestingFact],
    pub filter_options: &'a FilterOptions,
    pub advisory: Option<&'a str>,
    pub show_filters: bool,
    pub loading: bool,
}

/// State owned by one category page
pub struct RecommendationPage {
    title: String,
    key_factors: Vec<KeyFactor>,
    products: Vec<Product>,
    interesting_facts: Vec<InterestingFact>,
    filter_options: FilterOptions,
    data_source: DataSource,
    preferences: PreferenceSet,
    show_filters: bool,
    loading: bool,
    advisory: Option<String>,
    using_fallback: bool,
}

impl RecommendationPage {
    /// Builds a page from its category definition.
    ///
    /// Static pages are ready immediately; remote pages start in the
    /// loading state until [`load`](Self::load) resolves.
    pub fn new(spec: PageSpec) -> Self {
        let loading = matches!(spec.data_source, DataSource::Remote { .. });
        Self {
            title: spec.title,
            key_factors: spec.key_factors,
            products: spec.products,
            interesting_facts: spec.interesting_facts,
            filter_options: spec.filter_options,
            data_source: spec.data_source,
            preferences: PreferenceSet::new(),
            show_filters: false,
            loading,
            advisory: None,
            using_fallback: false,
        }
    }

    /// Runs the page's single mount-time fetch, if it has one.
    ///
    /// A re-mounted page calls this again and issues a new request;
    /// nothing is deduplicated or cancelled.
    pub async fn load(&mut self, client: &RecommendationClient) {
        let DataSource::Remote { product_type } = self.data_source.clone() else {
            self.loading = false;
            return;
        };
        self.loading = true;
        let result = client
            .get_recommendations(&product_type, &PreferenceSet::new())
            .await;
        self.apply_fetch_result(result);
    }

    /// Applies the outcome of a fetch to the page state.
    ///
    /// An error or an empty result sets the advisory and the fallback
    /// indicator but leaves whatever product list the page already has,
    /// so rendering is never blocked.
    pub fn apply_fetch_result(&mut self, result: AppResult<Vec<Product>>) {
        match result {
            Ok(products) if !products.is_empty() => {
                self.products = products;
                self.advisory = None;
                self.using_fallback = false;
            }
            Ok(_) => {
                tracing::warn!(title = %self.title, "No recommendations received");
                self.advisory = Some(FETCH_ADVISORY.to_string());
                self.using_fallback = true;
            }
            Err(e) => {
                tracing::warn!(error = %e, title = %self.title, "Error fetching recommendations");
                self.advisory = Some(FETCH_ADVISORY.to_string());
                self.using_fallback = true;
            }
        }
        self.loading = false;
    }

    /// Replaces the current preference set; the filtered view picks the
    /// change up on the next read.
    pub fn apply_filter_change(&mut self, preferences: PreferenceSet) {
        self.preferences = preferences;
    }

    /// Sidebar visibility, independent of data state
    pub fn toggle_filters(&mut self) {
        self.show_filters = !self.show_filters;
    }

    /// The filtered view, derived from the authoritative list
    pub fn filtered_products(&self) -> Vec<Product> {
        filter::apply(&self.products, &self.preferences)
    }

    /// Comparison table over the filtered products
    pub fn comparison_rows(&self) -> Vec<ComparisonRow> {
        self.filtered_products()
            .iter()
            .map(ComparisonRow::from_product)
            .collect()
    }

    /// Snapshot of everything the rendering layer needs
    pub fn view(&self) -> PageView<'_> {
        let products = self.filtered_products();
        let comparison = products.iter().map(ComparisonRow::from_product).collect();
        PageView {
            title: &self.title,
            key_factors: &self.key_factors,
            total_models: self.products.len(),
            products,
            comparison,
            interesting_facts: &self.interesting_facts,
            filter_options: &self.filter_options,
            advisory: self.advisory.as_deref(),
            show_filters: self.show_filters,
            loading: self.loading,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn using_fallback(&self) -> bool {
        self.using_fallback
    }

    pub fn advisory(&self) -> Option<&str> {
        self.advisory.as_deref()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn preferences(&self) -> &PreferenceSet {
        &self.preferences
    }

    pub fn show_filters(&self) -> bool {
        self.show_filters
    }
}
