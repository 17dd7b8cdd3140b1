//! Axum router configuration with middleware.
//!
//! Middleware: permissive CORS (browser clients served from any origin,
//! no credentials, preflight cached for 24 hours) and request tracing.

use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(86_400));

    Router::new()
        .route("/", get(read_root))
        .route("/api/bundles", get(handlers::bundle::list_bundles))
        .route(
            "/api/bundles/update_prompt",
            post(handlers::bundle::update_prompt),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / - Liveness message for the API root.
async fn read_root() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "message": "Bundle API is running",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    const SAMPLE: &str = r#"{
        "bundles": [{
            "name": "alpha",
            "percentage": 72.5,
            "recipes": [{
                "recipe_name": "baseline",
                "percentage": 64.0,
                "ci_minimum_band": 58.0,
                "ci_maximum_band": 70.0,
                "prompts": [
                    {"score": 2, "notes": "x", "id": "0-0-0"},
                    {"score": 4, "notes": "other"}
                ]
            }]
        }]
    }"#;

    async fn state_with_file(content: Option<&str>) -> (TempDir, AppState) {
        let dir = TempDir::new().unwrap();
        let data_file = dir.path().join("bundles.json");
        if let Some(content) = content {
            tokio::fs::write(&data_file, content).await.unwrap();
        }
        let state = AppState::init(data_file).await.unwrap();
        (dir, state)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn update_request(body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/bundles/update_prompt")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn root_reports_running() {
        let (_dir, state) = state_with_file(None).await;
        let app = build_router(state);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"message": "Bundle API is running"})
        );
    }

    #[tokio::test]
    async fn list_bundles_returns_transformed_schema() {
        let (_dir, state) = state_with_file(Some(SAMPLE)).await;
        let app = build_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/bundles")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let bundles = body.as_array().unwrap();
        assert_eq!(bundles.len(), 1);
        assert_eq!(bundles[0]["name"], "alpha");
        assert_eq!(bundles[0]["percentage"], 72.5);

        let recipe = &bundles[0]["recipes"][0];
        assert_eq!(recipe["name"], "baseline");
        assert!(recipe.get("recipe_name").is_none());
        assert_eq!(recipe["ci_minimum_band"], 58.0);
        assert_eq!(recipe["ci_maximum_band"], 70.0);
        assert_eq!(recipe["prompts"][0]["id"], "0-0-0");
    }

    #[tokio::test]
    async fn list_bundles_missing_file_is_404() {
        let (_dir, state) = state_with_file(None).await;
        let app = build_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/bundles")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"detail": "Bundles data file not found"})
        );
    }

    #[tokio::test]
    async fn list_bundles_malformed_file_is_500() {
        let (_dir, state) = state_with_file(Some("{broken")).await;
        let app = build_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/bundles")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"detail": "Error parsing bundles data"})
        );
    }

    #[tokio::test]
    async fn update_prompt_then_list_shows_new_values() {
        let (_dir, state) = state_with_file(Some(SAMPLE)).await;
        let app = build_router(state);

        let response = app
            .clone()
            .oneshot(update_request(json!({
                "prompt_id": "0-0-0",
                "score": 5,
                "notes": "y"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"message": "Prompt updated successfully"})
        );

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/bundles")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = body_json(response).await;
        let prompts = body[0]["recipes"][0]["prompts"].as_array().unwrap();
        assert_eq!(prompts[0]["score"], 5);
        assert_eq!(prompts[0]["notes"], "y");
        assert_eq!(prompts[0]["id"], "0-0-0");
        // The sibling prompt is untouched.
        assert_eq!(prompts[1]["score"], 4);
        assert_eq!(prompts[1]["notes"], "other");
    }

    #[tokio::test]
    async fn update_prompt_out_of_range_is_404_and_file_unchanged() {
        let (_dir, state) = state_with_file(Some(SAMPLE)).await;
        let data_file = state.data_file.clone();
        let app = build_router(state);

        let response = app
            .oneshot(update_request(json!({
                "prompt_id": "0-0-9",
                "score": 5,
                "notes": "y"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"detail": "Prompt not found"}));

        let raw = tokio::fs::read_to_string(&data_file).await.unwrap();
        assert_eq!(raw, SAMPLE, "failed update must not touch the file");
    }

    #[tokio::test]
    async fn update_prompt_missing_file_is_404() {
        let (_dir, state) = state_with_file(None).await;
        let app = build_router(state);

        let response = app
            .oneshot(update_request(json!({
                "prompt_id": "0-0-0",
                "score": 5,
                "notes": "y"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"detail": "Prompt not found"}));
    }

    #[tokio::test]
    async fn update_prompt_malformed_id_is_500_and_file_unchanged() {
        let (_dir, state) = state_with_file(Some(SAMPLE)).await;
        let data_file = state.data_file.clone();
        let app = build_router(state);

        for id in ["abc", "1-2"] {
            let response = app
                .clone()
                .oneshot(update_request(json!({
                    "prompt_id": id,
                    "score": 1,
                    "notes": "n"
                })))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            let body = body_json(response).await;
            let detail = body["detail"].as_str().unwrap();
            assert!(detail.contains(&format!("'{id}'")), "detail: {detail}");
        }

        let raw = tokio::fs::read_to_string(&data_file).await.unwrap();
        assert_eq!(raw, SAMPLE);
    }

    #[tokio::test]
    async fn update_prompt_malformed_store_is_500() {
        let (_dir, state) = state_with_file(Some("not json at all")).await;
        let app = build_router(state);

        let response = app
            .oneshot(update_request(json!({
                "prompt_id": "0-0-0",
                "score": 1,
                "notes": "n"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"detail": "Error parsing bundles data"})
        );
    }

    #[tokio::test]
    async fn cors_allows_any_origin_without_credentials() {
        let (_dir, state) = state_with_file(Some(SAMPLE)).await;
        let app = build_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/bundles/update_prompt")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "86400");
        assert!(headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).is_none());
    }
}
