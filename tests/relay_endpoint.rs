#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    use mingyuan::api::routes;
    use mingyuan::config::{AiConfig, AppConfig, ServerConfig};
    use mingyuan::provider::{
        models::{ChatOptions, ProviderMessage},
        ChatProvider, ProviderError,
    };

    struct FixedReplyProvider(&'static str);

    #[async_trait]
    impl ChatProvider for FixedReplyProvider {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn chat(
            &self,
            _messages: &[ProviderMessage],
            _options: ChatOptions,
        ) -> Result<String, ProviderError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingProvider(u16);

    #[async_trait]
    impl ChatProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        async fn chat(
            &self,
            _messages: &[ProviderMessage],
            _options: ChatOptions,
        ) -> Result<String, ProviderError> {
            Err(ProviderError::Api {
                status: self.0,
                body: "upstream detail that must not leak".to_string(),
            })
        }
    }

    struct BrokenShapeProvider;

    #[async_trait]
    impl ChatProvider for BrokenShapeProvider {
        fn name(&self) -> &str {
            "broken"
        }

        async fn chat(
            &self,
            _messages: &[ProviderMessage],
            _options: ChatOptions,
        ) -> Result<String, ProviderError> {
            Err(ProviderError::InvalidResponse)
        }
    }

    fn test_config() -> AppConfig {
        AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            ai: AiConfig {
                api_base: "http://localhost".to_string(),
                api_key: "test-key".to_string(),
                default_model: "deepseek-chat".to_string(),
                system_prompt: "测试系统提示".to_string(),
            },
        }
    }

    macro_rules! init_app {
        ($provider:expr) => {{
            let provider: Arc<dyn ChatProvider> = Arc::new($provider);
            test::init_service(
                App::new()
                    .app_data(web::Data::new(test_config()))
                    .app_data(web::Data::new(provider))
                    .configure(routes::configure),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_missing_messages_is_rejected() {
        let app = init_app!(FixedReplyProvider("X"));

        let req = test::TestRequest::post()
            .uri("/api/ai/chat")
            .set_json(serde_json::json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(!body["error"].as_str().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_non_array_messages_is_rejected() {
        let app = init_app!(FixedReplyProvider("X"));

        let req = test::TestRequest::post()
            .uri("/api/ai/chat")
            .set_json(serde_json::json!({ "messages": "not-an-array" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_malformed_entries_are_rejected() {
        let app = init_app!(FixedReplyProvider("X"));

        let req = test::TestRequest::post()
            .uri("/api/ai/chat")
            .set_json(serde_json::json!({ "messages": [{ "foo": 1 }] }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_success_returns_response_field() {
        let app = init_app!(FixedReplyProvider("X"));

        let req = test::TestRequest::post()
            .uri("/api/ai/chat")
            .set_json(serde_json::json!({
                "messages": [{ "role": "user", "content": "你好" }]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["response"], "X");
    }

    #[actix_web::test]
    async fn test_upstream_status_passes_through_sanitized() {
        let app = init_app!(FailingProvider(503));

        let req = test::TestRequest::post()
            .uri("/api/ai/chat")
            .set_json(serde_json::json!({
                "messages": [{ "role": "user", "content": "你好" }]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: serde_json::Value = test::read_body_json(resp).await;
        let error = body["error"].as_str().unwrap();
        assert!(!error.contains("upstream detail"));
        assert!(!error.is_empty());
    }

    // End to end: the real provider behind the endpoint, with the upstream
    // API mocked at the wire level.
    #[actix_web::test]
    async fn test_relay_against_mocked_upstream() {
        use mingyuan::provider::deepseek::DeepSeekProvider;
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let upstream = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{ "message": { "content": "X" } }]
            })))
            .mount(&upstream)
            .await;

        let app = init_app!(DeepSeekProvider::new(
            "test-key".to_string(),
            upstream.uri(),
            "deepseek-chat".to_string(),
        ));

        let req = test::TestRequest::post()
            .uri("/api/ai/chat")
            .set_json(serde_json::json!({
                "messages": [{ "role": "user", "content": "你好" }]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["response"], "X");
    }

    #[actix_web::test]
    async fn test_unexpected_shape_maps_to_500() {
        let app = init_app!(BrokenShapeProvider);

        let req = test::TestRequest::post()
            .uri("/api/ai/chat")
            .set_json(serde_json::json!({
                "messages": [{ "role": "user", "content": "你好" }]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
