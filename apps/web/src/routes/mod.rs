pub mod health;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::pages::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let images = ServeDir::new(&state.config.images_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/",
            get(handlers::handle_listing).post(handlers::handle_listing_submit),
        )
        .route("/details", get(handlers::handle_details))
        .nest_service("/images", images)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tempfile::TempDir;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::generation::{prompts::PROPERTY_INSTRUCTION, Instructions};
    use crate::llm_client::{GeminiClient, LlmError, TextGenerator};
    use crate::pages::{load_templates, templates_dir};

    /// Records every prompt and answers with a fixed rewrite.
    #[derive(Default)]
    struct StubGenerator {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok("Rewritten just for you.".to_string())
        }
    }

    struct Fixture {
        _dir: TempDir,
        config: Config,
    }

    fn fixture() -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        for sub in ["data", "personas", "images"] {
            std::fs::create_dir(root.join(sub)).unwrap();
        }
        std::fs::write(
            root.join("data/property.json"),
            r#"[
                {"ID": 3, "Name": "Harbour Loft", "Description": "Open plan loft.", "ImageURL": "/images/loft.jpg"},
                {"ID": 1, "Name": "Cedar Cottage", "Description": "Two bedroom cottage.", "ImageURL": "/images/cottage.jpg"},
                {"ID": 0, "Name": "Zero Street Flat", "Description": "Studio flat.", "ImageURL": "/images/flat.jpg"}
            ]"#,
        )
        .unwrap();
        std::fs::write(
            root.join("data/store.json"),
            r#"[{"ID": 1, "Name": "Canvas Tote", "Description": "A cotton tote.", "ImageURL": "/images/tote.jpg"}]"#,
        )
        .unwrap();
        std::fs::write(
            root.join("personas/person1.json"),
            r#"{"Name": "Alex", "Preferences": "walkable neighbourhood, natural light"}"#,
        )
        .unwrap();
        std::fs::write(root.join("images/loft.jpg"), b"jpeg-bytes").unwrap();

        let config = Config {
            gemini_api_key: "test-key".to_string(),
            gemini_api_base: "http://127.0.0.1:1".to_string(),
            gemini_max_retries: 1,
            port: 0,
            rust_log: "debug".to_string(),
            data_dir: root.join("data"),
            personas_dir: root.join("personas"),
            templates_dir: templates_dir(),
            images_dir: root.join("images"),
        };
        Fixture { _dir: dir, config }
    }

    fn state_with(config: &Config, generator: Arc<dyn TextGenerator>) -> AppState {
        AppState {
            config: config.clone(),
            templates: Arc::new(load_templates(&config.templates_dir).unwrap()),
            instructions: Arc::new(Instructions::default()),
            generator,
        }
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_form(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[tokio::test]
    async fn test_listing_shows_every_record_in_file_order() {
        let fx = fixture();
        let app = build_router(state_with(&fx.config, Arc::new(StubGenerator::default())));

        let (status, body) = send(app, get("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(count(&body, "class=\"record\""), 3);

        let loft = body.find("Harbour Loft").unwrap();
        let cottage = body.find("Cedar Cottage").unwrap();
        let flat = body.find("Zero Street Flat").unwrap();
        assert!(loft < cottage && cottage < flat, "records must keep file order");
        assert!(body.contains("person1"));
    }

    #[tokio::test]
    async fn test_listing_post_switches_category() {
        let fx = fixture();
        let app = build_router(state_with(&fx.config, Arc::new(StubGenerator::default())));

        let (status, body) = send(app, post_form("recordtype=store&person=person1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(count(&body, "class=\"record\""), 1);
        assert!(body.contains("Canvas Tote"));
        assert!(!body.contains("Harbour Loft"));
    }

    #[tokio::test]
    async fn test_listing_post_missing_fields_uses_defaults() {
        let fx = fixture();
        let app = build_router(state_with(&fx.config, Arc::new(StubGenerator::default())));

        let (status, body) = send(app, post_form("")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Harbour Loft"));
    }

    #[tokio::test]
    async fn test_listing_rejects_unknown_category() {
        let fx = fixture();
        let app = build_router(state_with(&fx.config, Arc::new(StubGenerator::default())));

        let (status, _) = send(app, post_form("recordtype=..%2F..%2Fsecrets")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_listing_missing_data_file_is_404() {
        let fx = fixture();
        let app = build_router(state_with(&fx.config, Arc::new(StubGenerator::default())));

        let (status, _) = send(app, post_form("recordtype=restaurant")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_details_rewrites_description() {
        let fx = fixture();
        let generator = Arc::new(StubGenerator::default());
        let app = build_router(state_with(&fx.config, generator.clone()));

        let (status, body) = send(
            app,
            get("/details?id=1&recordtype=property&person=person1"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Cedar Cottage"));
        assert!(body.contains("Rewritten just for you."));
        assert!(!body.contains("Two bedroom cottage."));

        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(
            prompts.as_slice(),
            [format!(
                "{PROPERTY_INSTRUCTION} walkable neighbourhood, natural light. Two bedroom cottage."
            )]
        );
    }

    #[tokio::test]
    async fn test_details_unknown_id_is_404_without_generation() {
        let fx = fixture();
        let generator = Arc::new(StubGenerator::default());
        let app = build_router(state_with(&fx.config, generator.clone()));

        let (status, body) = send(app, get("/details?id=42&recordtype=property&person=person1")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(!body.contains("Harbour Loft"));
        assert!(generator.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_details_id_zero_is_a_real_record() {
        let fx = fixture();
        let app = build_router(state_with(&fx.config, Arc::new(StubGenerator::default())));
        let (status, body) = send(app, get("/details?id=0&recordtype=property&person=person1")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Zero Street Flat"));

        let app = build_router(state_with(&fx.config, Arc::new(StubGenerator::default())));
        let (status, _) = send(app, get("/details?id=0&recordtype=store&person=person1")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_details_non_numeric_id_is_400() {
        let fx = fixture();
        let app = build_router(state_with(&fx.config, Arc::new(StubGenerator::default())));
        let (status, _) = send(app, get("/details?id=abc&recordtype=property")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_details_rejects_traversal_person() {
        let fx = fixture();
        let app = build_router(state_with(&fx.config, Arc::new(StubGenerator::default())));
        let (status, _) = send(
            app,
            get("/details?id=1&recordtype=property&person=..%2Fdata%2Fproperty"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_details_missing_persona_is_404() {
        let fx = fixture();
        let app = build_router(state_with(&fx.config, Arc::new(StubGenerator::default())));
        let (status, _) = send(app, get("/details?id=1&recordtype=property&person=person9")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unreachable_generator_fails_request_not_server() {
        let fx = fixture();
        let client = GeminiClient::new(fx.config.gemini_api_key.clone())
            .unwrap()
            .with_api_base(fx.config.gemini_api_base.clone())
            .with_max_retries(fx.config.gemini_max_retries);
        let app = build_router(state_with(&fx.config, Arc::new(client)));

        let (status, _) = send(
            app.clone(),
            get("/details?id=1&recordtype=property&person=person1"),
        )
        .await;
        assert!(status.is_server_error());

        let (status, _) = send(app, get("/")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_images_are_served() {
        let fx = fixture();
        let app = build_router(state_with(&fx.config, Arc::new(StubGenerator::default())));

        let (status, body) = send(app.clone(), get("/images/loft.jpg")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "jpeg-bytes");

        let (status, _) = send(app, get("/images/missing.jpg")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health() {
        let fx = fixture();
        let app = build_router(state_with(&fx.config, Arc::new(StubGenerator::default())));
        let (status, body) = send(app, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["status"], "ok");
    }
}
