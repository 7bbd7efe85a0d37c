use crate::ai::{gemini::GeminiProvider, openai::OpenAiProvider, AiProvider};
use crate::config::{self, validator::ProviderKind, Config};
use crate::error::Result;
use std::sync::Arc;

/// Provider factory for creating AI providers from configuration
pub struct ProviderFactory;

impl ProviderFactory {
    /// Validate the configuration and create the selected provider
    ///
    /// # Arguments
    /// * `config` - Loaded configuration (provider selector, keys, URLs, models)
    ///
    /// # Returns
    /// * `Result<Arc<dyn AiProvider>>` - Shared provider instance
    ///
    /// # Errors
    /// * `AskCmdError::UnsupportedProvider` if the selector is unknown
    /// * `AskCmdError::MissingCredential` if the selected provider has no API key
    pub fn create(config: &Config) -> Result<Arc<dyn AiProvider>> {
        let kind = config::validate(config)?;

        let provider: Arc<dyn AiProvider> = match kind {
            ProviderKind::OpenAi => Arc::new(OpenAiProvider::new(
                config.openai.api_key.clone().unwrap_or_default(),
                config.openai.base_url.clone(),
                config.openai.model.clone(),
            )),
            ProviderKind::Gemini => Arc::new(GeminiProvider::new(
                config.gemini.api_key.clone().unwrap_or_default(),
                config.gemini.base_url.clone(),
                config.gemini.model.clone(),
            )),
        };

        tracing::debug!(
            provider = provider.name(),
            model = provider.model(),
            "provider selected"
        );

        Ok(provider)
    }
}
