use crate::ai::{
    endpoint_url, prompt_template::PromptTemplate, response_processor::ResponseProcessor,
    transport::Endpoint, AiProvider,
};
use crate::error::{AskCmdError, Result};
use serde::Serialize;
use serde_json::Value;

const NAME: &str = "openai";

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// OpenAI 호환 chat completions API
pub struct OpenAiProvider {
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiProvider {
    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        Self {
            api_key,
            base_url,
            model,
        }
    }
}

impl AiProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        NAME
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn build_payload(&self, prompt: &str, context: &str) -> Result<String> {
        let system = PromptTemplate::system_prompt(context);

        // 명령어 생성은 결정적이어야 하므로 temperature 0
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: 0.0,
        };

        Ok(serde_json::to_string(&request)?)
    }

    fn endpoint(&self) -> Result<Endpoint> {
        let url = endpoint_url(NAME, &self.base_url, &["chat", "completions"])?;

        Ok(Endpoint {
            provider: NAME,
            url: url.into(),
            headers: vec![
                ("Authorization", format!("Bearer {}", self.api_key)),
                ("Content-Type", "application/json".to_string()),
            ],
        })
    }

    fn check_error(&self, raw: &str) -> Result<()> {
        match serde_json::from_str::<Value>(raw) {
            Ok(doc) => ResponseProcessor::check_error_envelope(&doc),
            // JSON이 아니면 파싱 단계에서 보고
            Err(_) => Ok(()),
        }
    }

    fn parse_response(&self, raw: &str) -> Result<String> {
        let doc = ResponseProcessor::parse_json(NAME, raw)?;
        ResponseProcessor::check_error_envelope(&doc)?;

        let content = doc
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .ok_or_else(|| AskCmdError::UnknownFormat {
                provider: NAME,
                raw: raw.to_string(),
            })?;

        ResponseProcessor::finalize_command(content)
    }
}
