use crate::ai::{
    endpoint_url, prompt_template::PromptTemplate, response_processor::ResponseProcessor,
    transport::Endpoint, AiProvider,
};
use crate::error::{AskCmdError, Result};
use serde::Serialize;
use serde_json::Value;

const NAME: &str = "gemini";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// 생성 파라미터 (고정값)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
    response_mime_type: &'static str,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.0,
            top_k: 1,
            top_p: 1.0,
            max_output_tokens: 256,
            response_mime_type: "text/plain",
        }
    }
}

/// Gemini generateContent API
pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        Self {
            api_key,
            base_url,
            model,
        }
    }

    /// Gemini 응답은 문자열 안에 raw 개행이 섞여 올 수 있어 먼저 escape 후 파싱
    fn parse_document(&self, raw: &str) -> Result<Value> {
        let sanitized = ResponseProcessor::escape_raw_newlines(raw);
        ResponseProcessor::parse_json(NAME, &sanitized).map_err(|e| match e {
            AskCmdError::Parse { provider, reason, .. } => AskCmdError::Parse {
                provider,
                reason,
                raw: raw.to_string(),
            },
            other => other,
        })
    }
}

impl AiProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        NAME
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn build_payload(&self, prompt: &str, context: &str) -> Result<String> {
        // 시스템 역할 없이 user part 하나에 지시문 + 컨텍스트 + 요청을 모두 담음
        let text = PromptTemplate::single_turn_prompt(prompt, context);

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: &text }],
            }],
            generation_config: GenerationConfig::default(),
        };

        Ok(serde_json::to_string(&request)?)
    }

    fn endpoint(&self) -> Result<Endpoint> {
        let method = format!("{}:generateContent", self.model);
        let mut url = endpoint_url(NAME, &self.base_url, &["v1beta", "models", method.as_str()])?;

        // bearer 헤더 대신 쿼리 파라미터로 키 전달
        url.query_pairs_mut().append_pair("key", &self.api_key);

        Ok(Endpoint {
            provider: NAME,
            url: url.into(),
            headers: vec![("Content-Type", "application/json".to_string())],
        })
    }

    fn check_error(&self, raw: &str) -> Result<()> {
        match self.parse_document(raw) {
            Ok(doc) => ResponseProcessor::check_error_envelope(&doc),
            Err(_) => Ok(()),
        }
    }

    fn parse_response(&self, raw: &str) -> Result<String> {
        let doc = self.parse_document(raw)?;
        ResponseProcessor::check_error_envelope(&doc)?;

        let text = doc
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .ok_or_else(|| AskCmdError::UnknownFormat {
                provider: NAME,
                raw: raw.to_string(),
            })?;

        ResponseProcessor::finalize_command(text)
    }
}
