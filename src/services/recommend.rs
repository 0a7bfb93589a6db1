//! Fetch → validate → fallback pipeline for model-backed recommendations.
//!
//! The model's output is never trusted: it crosses an explicit validation
//! boundary, identifiers and image URLs are always reassigned, and any
//! failure past the request itself degrades silently to a fixed fallback
//! list rather than surfacing an error.

use serde_json::Value;

use crate::models::{PreferenceSet, Product};

use super::diagnostics::DiagnosticSink;
use super::model::ChatModel;

/// Number of products requested from the model per call
pub const RECOMMENDATION_COUNT: usize = 5;

const SYSTEM_PROMPT: &str = "You are a helpful product recommendation assistant. \
     Always respond with a valid JSON array of product objects.";

/// Builds the user-facing instruction for one request
pub fn build_prompt(product_type: &str, prefs: &PreferenceSet) -> String {
    let prefs_json = serde_json::to_string(prefs).unwrap_or_else(|_| "{}".to_string());
    format!(
        "Recommend {RECOMMENDATION_COUNT} {product_type} based on these preferences: {prefs_json}. \
         For each product, provide the name, brand, price (as a number), rating (out of 5), \
         and a list of key features. Format the response as a JSON array of objects. \
         Do not include any explanatory text outside the JSON array."
    )
}

/// Removes optional ```json fences around the model's reply
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Shape check for the parsed model reply.
///
/// Accepts an array of objects carrying name (string), brand (string),
/// price (number or string), rating (number), and features (array).
/// An empty array is valid.
pub fn validate_products(value: &Value) -> bool {
    let Some(items) = value.as_array() else {
        return false;
    };
    items.iter().all(|item| {
        let Some(obj) = item.as_object() else {
            return false;
        };
        obj.get("name").is_some_and(Value::is_string)
            && obj.get("brand").is_some_and(Value::is_string)
            && obj
                .get("price")
                .is_some_and(|p| p.is_number() || p.is_string())
            && obj.get("rating").is_some_and(Value::is_number)
            && obj.get("features").is_some_and(Value::is_array)
    })
}

/// Coerces a price field to a number.
///
/// String prices are stripped down to digits and dots before parsing;
/// anything that still fails becomes a non-finite "price unavailable"
/// marker. Already-numeric prices pass through unchanged.
pub fn normalize_price(price: &Value) -> f64 {
    match price {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => {
            let numeric: String = s
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            numeric.parse().unwrap_or(f64::NAN)
        }
        _ => f64::NAN,
    }
}

/// Image-search URL derived from the category; model-supplied images are
/// always discarded in favour of this.
pub fn image_url_for(product_type: &str) -> String {
    format!(
        "https://source.unsplash.com/300x200/?{}",
        urlencoding::encode(product_type)
    )
}

/// Repairs validated items into `Product`s: 1-based positional ids,
/// coerced prices, features defaulted to empty, category-derived image.
pub fn normalize_products(items: &[Value], product_type: &str) -> Vec<Product> {
    let image = image_url_for(product_type);
    items
        .iter()
        .enumerate()
        .map(|(index, item)| Product {
            id: index as u32 + 1,
            name: item
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            brand: item
                .get("brand")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            price: item.get("price").map(normalize_price).unwrap_or(f64::NAN),
            rating: item.get("rating").and_then(Value::as_f64).unwrap_or(0.0),
            features: item
                .get("features")
                .and_then(Value::as_array)
                .map(|features| {
                    features
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            image: Some(image.clone()),
        })
        .collect()
}

/// Pre-authored recommendations returned whenever the model path fails
pub fn fallback_products() -> Vec<Product> {
    fn item(id: u32, name: &str, brand: &str, price: f64, rating: f64, features: [&str; 3], query: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            brand: brand.to_string(),
            price,
            rating,
            features: features.iter().map(|f| f.to_string()).collect(),
            image: Some(format!("https://source.unsplash.com/300x200/?{query}")),
        }
    }

    vec![
        item(
            1,
            "EcoWash Pro",
            "GreenTech",
            599.99,
            4.5,
            ["Energy-efficient", "Large capacity", "Smart connectivity"],
            "washing-machine",
        ),
        item(
            2,
            "UltraClean 3000",
            "CleanMaster",
            499.99,
            4.3,
            ["Multiple wash cycles", "Quiet operation", "Stainless steel drum"],
            "laundry",
        ),
        item(
            3,
            "SmartWash Deluxe",
            "TechHome",
            749.99,
            4.7,
            ["AI-powered washing", "Steam cleaning", "Mobile app control"],
            "smart-appliance",
        ),
        item(
            4,
            "EconoWash Basic",
            "BudgetAppliances",
            349.99,
            4.0,
            ["Compact design", "Energy-saving mode", "Easy-to-use controls"],
            "compact-washer",
        ),
        item(
            5,
            "LuxeClean 5000",
            "PremiumHome",
            999.99,
            4.8,
            ["Premium build quality", "Advanced stain removal", "Customizable wash programs"],
            "luxury-appliance",
        ),
    ]
}

/// Runs the full pipeline for one request.
///
/// Once invoked this never fails: any model, parse, or validation
/// failure is recorded and resolves to the fallback list, so the HTTP
/// caller always receives a product list.
pub async fn recommend(
    model: &dyn ChatModel,
    diagnostics: &dyn DiagnosticSink,
    product_type: &str,
    prefs: &PreferenceSet,
) -> Vec<Product> {
    let prompt = build_prompt(product_type, prefs);
    diagnostics.record(&format!("Prompt sent to model: {prompt}"));

    let raw = match model.complete(SYSTEM_PROMPT, &prompt).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!(error = %e, provider = model.name(), "Model invocation failed");
            diagnostics.record(&format!("Error: {e}"));
            return fallback_products();
        }
    };
    diagnostics.record(&format!("Response from model: {raw}"));

    let stripped = strip_code_fences(&raw);
    let parsed: Value = match serde_json::from_str(&stripped) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!(error = %e, "Failed to parse model response");
            diagnostics.record(&format!("Parse error: {e}"));
            return fallback_products();
        }
    };

    if !validate_products(&parsed) {
        tracing::error!("Invalid product array structure");
        diagnostics.record("Invalid product array structure");
        return fallback_products();
    }

    match parsed.as_array() {
        Some(items) => normalize_products(items, product_type),
        None => fallback_products(),
    }
}
