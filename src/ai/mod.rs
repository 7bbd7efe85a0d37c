pub mod context;
pub mod factory;
pub mod gemini;
pub mod generator;
pub mod openai;
pub mod prompt_template;
pub mod response_processor;
pub mod transport;

use crate::error::{AskCmdError, Result};
use reqwest::Url;
use transport::Endpoint;

pub use factory::ProviderFactory;
pub use generator::CommandGenerator;
pub use transport::{HttpTransport, Transport};

/// AI provider trait for extensible API integration
///
/// One implementation per provider. Adding a provider means adding one
/// implementation and one factory arm.
pub trait AiProvider: Send + Sync {
    /// Provider name (e.g., "openai", "gemini")
    fn name(&self) -> &'static str;

    /// Model the request will target
    fn model(&self) -> &str;

    /// Render the JSON request body
    fn build_payload(&self, prompt: &str, context: &str) -> Result<String>;

    /// URL and headers for the completion endpoint
    fn endpoint(&self) -> Result<Endpoint>;

    /// Fail with the provider's message if the body is an error envelope
    fn check_error(&self, raw: &str) -> Result<()>;

    /// Extract the generated command from a successful body
    fn parse_response(&self, raw: &str) -> Result<String>;
}

/// base URL 뒤에 path segment 추가 (각 segment는 percent-encode 됨)
pub(crate) fn endpoint_url(provider: &str, base_url: &str, segments: &[&str]) -> Result<Url> {
    let invalid = |reason: String| {
        AskCmdError::ConfigError(format!("invalid {} base URL {}: {}", provider, base_url, reason))
    };

    let mut url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| invalid("cannot be a base URL".to_string()))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}
