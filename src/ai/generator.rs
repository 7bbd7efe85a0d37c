use crate::ai::{transport::HttpTransport, AiProvider, ProviderFactory, Transport};
use crate::config::Config;
use crate::error::Result;
use std::sync::Arc;
use tracing::debug;

/// 자연어 요청 → 셸 명령어
///
/// 검증(생성 시점) → payload 생성 → 요청 1회 → 에러 확인 → 응답 파싱 순서로만 동작하며
/// 호출 사이에 상태를 남기지 않습니다.
pub struct CommandGenerator {
    provider: Arc<dyn AiProvider>,
    transport: Arc<dyn Transport>,
}

impl CommandGenerator {
    pub fn new(provider: Arc<dyn AiProvider>, transport: Arc<dyn Transport>) -> Self {
        Self {
            provider,
            transport,
        }
    }

    /// 설정 검증 후 실제 HTTP 전송으로 구성
    pub fn from_config(config: &Config) -> Result<Self> {
        let provider = ProviderFactory::create(config)?;
        let transport = Arc::new(HttpTransport::new(config)?);
        Ok(Self::new(provider, transport))
    }

    /// 설정 검증 후 주어진 전송 계층으로 구성 (검증 실패시 전송 계층은 쓰이지 않음)
    pub fn with_transport(config: &Config, transport: Arc<dyn Transport>) -> Result<Self> {
        let provider = ProviderFactory::create(config)?;
        Ok(Self::new(provider, transport))
    }

    pub fn provider(&self) -> &dyn AiProvider {
        self.provider.as_ref()
    }

    pub async fn generate(&self, prompt: &str, context: &str) -> Result<String> {
        let payload = self.provider.build_payload(prompt, context)?;
        let endpoint = self.provider.endpoint()?;

        let raw = self.transport.post(&endpoint, payload).await?;
        debug!(provider = self.provider.name(), "checking response");

        self.provider.check_error(&raw)?;
        self.provider.parse_response(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::openai::OpenAiProvider;
    use crate::ai::transport::Endpoint;
    use crate::error::{AskCmdError, ErrorKind};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// 고정 응답을 돌려주고 받은 요청을 기록
    struct StubTransport {
        reply: std::result::Result<String, String>,
        requests: Mutex<Vec<(Endpoint, String)>>,
    }

    impl StubTransport {
        fn replying(body: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(body.to_string()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(message.to_string()),
                requests: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl Transport for StubTransport {
        async fn post(&self, endpoint: &Endpoint, body: String) -> Result<String> {
            self.requests.lock().unwrap().push((endpoint.clone(), body));
            self.reply.clone().map_err(|message| AskCmdError::Transport {
                provider: endpoint.provider,
                message,
            })
        }
    }

    fn provider() -> Arc<dyn AiProvider> {
        Arc::new(OpenAiProvider::new(
            "sk-test".to_string(),
            "http://localhost:1/v1".to_string(),
            "gpt-4o-mini".to_string(),
        ))
    }

    #[tokio::test]
    async fn test_generate_success() {
        let transport = StubTransport::replying(r#"{"choices":[{"message":{"content":"ls \n"}}]}"#);
        let generator = CommandGenerator::new(provider(), transport.clone());

        let command = generator
            .generate("list files in current directory", "OS: linux")
            .await
            .unwrap();
        assert_eq!(command, "ls");

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0.url, "http://localhost:1/v1/chat/completions");
        assert!(requests[0].1.contains("list files in current directory"));
    }

    #[tokio::test]
    async fn test_generate_api_error() {
        let transport = StubTransport::replying(r#"{"error":{"message":"model not found"}}"#);
        let generator = CommandGenerator::new(provider(), transport);

        let err = generator.generate("x", "").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Api);
        assert!(err.to_string().contains("model not found"));
    }

    #[tokio::test]
    async fn test_generate_transport_error() {
        let transport = StubTransport::failing("connection refused");
        let generator = CommandGenerator::new(provider(), transport.clone());

        let err = generator.generate("x", "").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(transport.requests.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_from_config_requires_key() {
        let config = Config::default();
        let result = CommandGenerator::from_config(&config);
        assert!(matches!(result, Err(AskCmdError::MissingCredential { .. })));
    }
}
