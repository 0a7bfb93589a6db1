use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;

use shelfwise::api::{create_router, AppState};
use shelfwise::client::RecommendationClient;
use shelfwise::error::{AppError, AppResult};
use shelfwise::models::PreferenceSet;
use shelfwise::page::{RecommendationPage, FETCH_ADVISORY};
use shelfwise::services::diagnostics::NullDiagnostics;
use shelfwise::services::model::ChatModel;
use shelfwise::{catalog, services::recommend};

/// Canned stand-in for the generative model
struct StubModel {
    reply: AppResult<String>,
}

impl StubModel {
    fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            reply: Err(AppError::ModelApi(message.to_string())),
        }
    }
}

#[async_trait]
impl ChatModel for StubModel {
    async fn complete(&self, _system_prompt: &str, _user_prompt: &str) -> AppResult<String> {
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(e) => Err(AppError::ModelApi(e.to_string())),
        }
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

fn test_state(model: StubModel) -> AppState {
    AppState::with_parts(Arc::new(model), Arc::new(NullDiagnostics))
}

fn create_test_server(model: StubModel) -> TestServer {
    TestServer::new(create_router(test_state(model))).unwrap()
}

const MODEL_REPLY: &str = r#"[
    {"id": 42, "name": "EcoWash Prime", "brand": "GreenTech", "price": 649,
     "rating": 4.6, "features": ["Energy-efficient"], "image": "https://model.example/a.png"},
    {"name": "SpinCycle X", "brand": "CleanMaster", "price": "$549.99",
     "rating": 4.2, "features": ["Quiet operation", "Steam Clean"]}
]"#;

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(StubModel::replying("[]"));
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_recommendations_pass_through_with_normalization() {
    let server = create_test_server(StubModel::replying(MODEL_REPLY));

    let response = server
        .post("/api/recommendations")
        .json(&json!({
            "product_type": "washing-machines",
            "user_preferences": { "budget": 700 }
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 2);

    // Identifiers are positional, whatever the model claimed.
    assert_eq!(products[0]["id"], 1);
    assert_eq!(products[1]["id"], 2);

    // String prices are coerced; images come from the category, not the model.
    assert_eq!(products[1]["price"], 549.99);
    assert_eq!(
        products[0]["image"],
        "https://source.unsplash.com/300x200/?washing-machines"
    );
}

#[tokio::test]
async fn test_fenced_reply_equals_unfenced() {
    let fenced = format!("```json\n{MODEL_REPLY}\n```");

    let request = json!({ "product_type": "washing-machines", "user_preferences": {} });
    let from_fenced: serde_json::Value = create_test_server(StubModel::replying(&fenced))
        .post("/api/recommendations")
        .json(&request)
        .await
        .json();
    let from_plain: serde_json::Value = create_test_server(StubModel::replying(MODEL_REPLY))
        .post("/api/recommendations")
        .json(&request)
        .await
        .json();

    assert_eq!(from_fenced, from_plain);
}

#[tokio::test]
async fn test_unparsable_reply_yields_fallback_with_200() {
    let server = create_test_server(StubModel::replying(
        "Sure! Here are five washing machines I would recommend:",
    ));

    let response = server
        .post("/api/recommendations")
        .json(&json!({ "product_type": "washing-machines", "user_preferences": {} }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 5);
    assert_eq!(products[0]["name"], "EcoWash Pro");
    assert_eq!(products[4]["name"], "LuxeClean 5000");
}

#[tokio::test]
async fn test_wrongly_shaped_reply_yields_fallback() {
    let server = create_test_server(StubModel::replying(
        r#"{"products": [{"name": "EcoWash Pro"}]}"#,
    ));

    let response = server
        .post("/api/recommendations")
        .json(&json!({ "product_type": "washing-machines", "user_preferences": {} }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["products"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_model_failure_yields_fallback_not_error() {
    let server = create_test_server(StubModel::failing("insufficient quota"));

    let response = server
        .post("/api/recommendations")
        .json(&json!({ "product_type": "washing-machines", "user_preferences": {} }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["products"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_get_method_is_rejected_with_allow_header() {
    let server = create_test_server(StubModel::replying("[]"));

    let response = server.get("/api/recommendations").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        response.headers().get("allow").unwrap().to_str().unwrap(),
        "POST"
    );
    assert_eq!(response.text(), "Method GET Not Allowed");
}

#[tokio::test]
async fn test_empty_model_array_is_a_valid_empty_result() {
    let server = create_test_server(StubModel::replying("[]"));

    let response = server
        .post("/api/recommendations")
        .json(&json!({ "product_type": "luggage", "user_preferences": {} }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["products"].as_array().unwrap().len(), 0);
}

/// Runs the real server on an ephemeral port for client-side tests
async fn spawn_server(model: StubModel) -> String {
    let app = create_router(test_state(model));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_client_fetches_products_end_to_end() {
    let base_url = spawn_server(StubModel::replying(MODEL_REPLY)).await;
    let client = RecommendationClient::new(base_url);

    let products = client
        .get_recommendations("washing-machines", &PreferenceSet::new())
        .await
        .unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, 1);
    assert_eq!(products[0].name, "EcoWash Prime");
}

#[tokio::test]
async fn test_client_raises_on_non_success_status() {
    // Point the client at a path with no route behind it.
    let base_url = spawn_server(StubModel::replying("[]")).await;
    let client = RecommendationClient::new(format!("{base_url}/missing"));

    let result = client
        .get_recommendations("washing-machines", &PreferenceSet::new())
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_remote_page_load_against_live_server() {
    let base_url = spawn_server(StubModel::replying(MODEL_REPLY)).await;
    let client = RecommendationClient::new(base_url);

    let mut page = RecommendationPage::new(catalog::washing_machines());
    page.load(&client).await;

    assert!(!page.is_loading());
    assert!(!page.using_fallback());
    assert_eq!(page.products().len(), 2);
}

#[tokio::test]
async fn test_remote_page_load_degrades_to_advisory() {
    let client = RecommendationClient::new("http://127.0.0.1:1"); // nothing listens here
    let mut page = RecommendationPage::new(catalog::washing_machines());
    page.load(&client).await;

    assert!(!page.is_loading());
    assert!(page.using_fallback());
    assert_eq!(page.advisory(), Some(FETCH_ADVISORY));
    assert!(page.view().products.is_empty());
}

#[tokio::test]
async fn test_fallback_list_matches_pipeline_fallback() {
    // The HTTP fallback and the library-level fallback are the same list.
    let server = create_test_server(StubModel::failing("offline"));
    let response = server
        .post("/api/recommendations")
        .json(&json!({ "product_type": "washing-machines", "user_preferences": {} }))
        .await;

    let body: serde_json::Value = response.json();
    let expected = serde_json::to_value(recommend::fallback_products()).unwrap();
    assert_eq!(body["products"], expected);
}
