use crate::config::Config;
use crate::error::{AskCmdError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// provider가 요청을 보낼 위치
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// provider 이름 (에러 메시지용)
    pub provider: &'static str,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
}

impl Endpoint {
    /// 로그에 남길 URL (`key=` 쿼리 값 가림)
    pub fn redacted_url(&self) -> String {
        let (base, query) = match self.url.split_once('?') {
            Some(parts) => parts,
            None => return self.url.clone(),
        };

        let query: Vec<String> = query
            .split('&')
            .map(|pair| match pair.split_once('=') {
                Some(("key", _)) => "key=***".to_string(),
                _ => pair.to_string(),
            })
            .collect();

        format!("{}?{}", base, query.join("&"))
    }
}

/// 요청 본문 하나를 보내고 원본 응답 본문을 돌려받는 전송 계층
///
/// HTTP 교환이 끝났다면 상태 코드와 무관하게 본문을 돌려줍니다.
/// 재시도는 하지 않습니다.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, endpoint: &Endpoint, body: String) -> Result<String>;
}

/// reqwest 기반 HTTP 전송
pub struct HttpTransport {
    client: Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let mut builder = Client::builder().timeout(timeout);

        // 프록시는 설정에서만 가져옴
        builder = match config.proxy.as_deref() {
            Some(proxy) => {
                let proxy = reqwest::Proxy::all(proxy).map_err(|e| {
                    AskCmdError::ConfigError(format!("invalid proxy URL {}: {}", proxy, e))
                })?;
                builder.proxy(proxy)
            }
            None => builder.no_proxy(),
        };

        let client = builder
            .build()
            .map_err(|e| AskCmdError::ConfigError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, timeout })
    }

    fn transport_error(&self, provider: &'static str, error: reqwest::Error) -> AskCmdError {
        let message = if error.is_timeout() {
            format!("request timed out after {}s", self.timeout.as_secs())
        } else {
            error_chain(&error.without_url())
        };

        AskCmdError::Transport { provider, message }
    }
}

/// 에러와 그 원인들을 ": "로 이어붙임
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, endpoint: &Endpoint, body: String) -> Result<String> {
        debug!(
            provider = endpoint.provider,
            url = %endpoint.redacted_url(),
            bytes = body.len(),
            "sending request"
        );

        let mut request = self.client.post(&endpoint.url);
        for (name, value) in &endpoint.headers {
            request = request.header(*name, value);
        }

        let response = request
            .body(body)
            .send()
            .await
            .map_err(|e| self.transport_error(endpoint.provider, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(provider = endpoint.provider, %status, "provider returned non-success status");
        }

        let text = response
            .text()
            .await
            .map_err(|e| self.transport_error(endpoint.provider, e))?;

        debug!(provider = endpoint.provider, %status, bytes = text.len(), "received response");
        Ok(text)
    }
}
