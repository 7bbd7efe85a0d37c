use crate::error::{AskCmdError, Result};
use serde_json::Value;

/// provider 응답 본문을 다루는 공통 모듈
///
/// 에러 envelope 감지, JSON 파싱, 추출된 명령어 정리를 담당합니다.
pub struct ResponseProcessor;

impl ResponseProcessor {
    /// 원본 응답을 JSON으로 파싱. 실패하면 원본을 포함한 파싱 에러.
    pub fn parse_json(provider: &'static str, raw: &str) -> Result<Value> {
        serde_json::from_str(raw).map_err(|e| AskCmdError::Parse {
            provider,
            reason: e.to_string(),
            raw: raw.to_string(),
        })
    }

    /// 최상위 "error" 필드가 있으면 그 메시지로 실패
    ///
    /// 두 provider 모두 `{"error": {"message": "..."}}` 형태를 사용합니다.
    pub fn check_error_envelope(doc: &Value) -> Result<()> {
        let error = match doc.get("error") {
            Some(error) if !error.is_null() => error,
            _ => return Ok(()),
        };

        let message = error
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| error.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());

        Err(AskCmdError::Api(message))
    }

    /// 문자열 리터럴 안의 raw 개행/탭을 escape 시퀀스로 바꿈
    ///
    /// 문자열 밖의 공백(들여쓰기된 JSON)은 그대로 둡니다.
    ///
    /// # Examples
    /// ```
    /// use askcmd::ai::response_processor::ResponseProcessor;
    ///
    /// let fixed = ResponseProcessor::escape_raw_newlines("{\"text\": \"a\nb\"}");
    /// assert_eq!(fixed, "{\"text\": \"a\\nb\"}");
    /// ```
    pub fn escape_raw_newlines(raw: &str) -> String {
        let mut out = String::with_capacity(raw.len());
        let mut in_string = false;
        let mut escaped = false;

        for c in raw.chars() {
            if !in_string {
                if c == '"' {
                    in_string = true;
                }
                out.push(c);
                continue;
            }

            if escaped {
                escaped = false;
                out.push(c);
                continue;
            }

            match c {
                '\\' => {
                    escaped = true;
                    out.push(c);
                }
                '"' => {
                    in_string = false;
                    out.push(c);
                }
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                _ => out.push(c),
            }
        }

        out
    }

    /// 추출된 텍스트 정리: 뒤쪽 공백만 제거 (앞 공백, 내부 서식 유지)
    pub fn finalize_command(text: &str) -> Result<String> {
        let command = text.trim_end();

        if command.trim_start().is_empty() {
            return Err(AskCmdError::EmptyCommand);
        }

        Ok(command.to_string())
    }
}
