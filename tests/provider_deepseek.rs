#[cfg(test)]
mod tests {
    use mingyuan::provider::{
        deepseek::DeepSeekProvider,
        models::{ChatOptions, ProviderMessage, ProviderRole},
        ChatProvider, ProviderError,
    };
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn user_message(content: &str) -> ProviderMessage {
        ProviderMessage {
            role: ProviderRole::User,
            content: content.to_string(),
            timestamp: None,
        }
    }

    fn options() -> ChatOptions {
        ChatOptions {
            model: None,
            system_prompt: Some("系统提示".to_string()),
        }
    }

    #[tokio::test]
    async fn test_chat_extracts_first_choice_content() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [
                    { "message": { "role": "assistant", "content": "建议了解计算机类专业" } }
                ]
            })))
            .mount(&server)
            .await;

        let provider =
            DeepSeekProvider::new("test-key".to_string(), server.uri(), "deepseek-chat".to_string());

        let reply = provider
            .chat(&[user_message("我喜欢编程")], options())
            .await
            .unwrap();

        assert_eq!(reply, "建议了解计算机类专业");
    }

    #[tokio::test]
    async fn test_upstream_error_carries_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let provider =
            DeepSeekProvider::new("test-key".to_string(), server.uri(), "deepseek-chat".to_string());

        let err = provider
            .chat(&[user_message("你好")], options())
            .await
            .unwrap_err();

        match err {
            ProviderError::Api { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "overloaded");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_choice_content_is_invalid_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "choices": [] })),
            )
            .mount(&server)
            .await;

        let provider =
            DeepSeekProvider::new("test-key".to_string(), server.uri(), "deepseek-chat".to_string());

        let err = provider
            .chat(&[user_message("你好")], options())
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::InvalidResponse));
    }
}
