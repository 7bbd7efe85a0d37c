use crate::config::Config;
use crate::error::{AskCmdError, Result};
use std::fmt;
use std::str::FromStr;

/// 지원하는 provider 목록
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Gemini,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 2] = [ProviderKind::OpenAi, ProviderKind::Gemini];

    pub fn name(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Gemini => "gemini",
        }
    }

    /// 에러 메시지용 목록 ("openai, gemini")
    pub fn supported_names() -> String {
        Self::ALL
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// API 키를 담는 환경 변수 이름
    pub fn api_key_var(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OPENAI_API_KEY",
            ProviderKind::Gemini => "GEMINI_API_KEY",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProviderKind {
    type Err = AskCmdError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "gemini" => Ok(ProviderKind::Gemini),
            _ => Err(AskCmdError::UnsupportedProvider {
                name: s.to_string(),
                supported: Self::supported_names(),
            }),
        }
    }
}

pub fn parse_provider(name: &str) -> Result<ProviderKind> {
    name.parse()
}

/// 선택된 provider와 그 API 키가 설정되어 있는지 확인
///
/// 네트워크 요청 전에 호출되며, 알 수 없는 provider는 기본값으로 대체하지 않고 실패합니다.
pub fn validate(config: &Config) -> Result<ProviderKind> {
    let kind = parse_provider(&config.provider)?;

    let api_key = match kind {
        ProviderKind::OpenAi => config.openai.api_key.as_deref(),
        ProviderKind::Gemini => config.gemini.api_key.as_deref(),
    };

    if api_key.map_or(true, |k| k.trim().is_empty()) {
        tracing::debug!(provider = kind.name(), "missing credential");
        return Err(AskCmdError::MissingCredential {
            provider: kind.name(),
            var: kind.api_key_var(),
        });
    }

    Ok(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(provider: &str, openai_key: Option<&str>, gemini_key: Option<&str>) -> Config {
        let mut config = Config::default();
        config.provider = provider.to_string();
        config.openai.api_key = openai_key.map(str::to_string);
        config.gemini.api_key = gemini_key.map(str::to_string);
        config
    }

    #[test]
    fn test_valid_openai() {
        let config = config_with("openai", Some("sk-test"), None);
        assert_eq!(validate(&config).unwrap(), ProviderKind::OpenAi);
    }

    #[test]
    fn test_valid_gemini_case_insensitive() {
        let config = config_with("GeMiNi", None, Some("g-key"));
        assert_eq!(validate(&config).unwrap(), ProviderKind::Gemini);
    }

    #[test]
    fn test_unsupported_provider() {
        for name in ["claude", "", "open ai", "openai2"] {
            let config = config_with(name, Some("k"), Some("k"));
            let err = validate(&config).unwrap_err();
            assert!(matches!(err, AskCmdError::UnsupportedProvider { .. }), "{name}");
        }
    }

    #[test]
    fn test_unsupported_message_lists_every_provider() {
        let config = config_with("claude", Some("k"), Some("k"));
        let message = validate(&config).unwrap_err().to_string();

        assert!(message.contains("claude"));
        for kind in ProviderKind::ALL {
            assert!(message.contains(&kind.to_string()));
        }
        assert_eq!(ProviderKind::supported_names(), "openai, gemini");
    }

    #[test]
    fn test_missing_key_names_variable() {
        for kind in ProviderKind::ALL {
            for key in [None, Some(""), Some("   ")] {
                let config = config_with(kind.name(), key, key);
                let err = validate(&config).unwrap_err();
                assert!(err.to_string().contains(kind.api_key_var()));
            }
        }
    }

    #[test]
    fn test_other_provider_key_does_not_count() {
        let config = config_with("gemini", Some("sk-test"), None);
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }
}
