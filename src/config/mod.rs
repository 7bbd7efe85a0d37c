pub mod validator;

use crate::error::{AskCmdError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use validator::validate;

/// 요청 제한 시간 (초)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// askcmd 사용자 설정
///
/// 기본값 → ~/.askcmd/config.toml → 환경 변수 순서로 덮어씁니다.
/// 한 번 만들어서 각 컴포넌트에 명시적으로 넘깁니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// AI provider (openai, gemini)
    #[serde(default = "default_provider")]
    pub provider: String,

    #[serde(default)]
    pub openai: OpenAiSettings,

    #[serde(default)]
    pub gemini: GeminiSettings,

    /// HTTP 프록시 URL
    #[serde(default)]
    pub proxy: Option<String>,

    /// 요청 제한 시간. 설정 파일로는 바꿀 수 없음
    #[serde(skip, default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiSettings {
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_openai_base_url")]
    pub base_url: String,

    #[serde(default = "default_openai_model")]
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiSettings {
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,

    #[serde(default = "default_gemini_model")]
    pub model: String,
}

fn default_provider() -> String {
    "openai".to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_gemini_model() -> String {
    "gemini-1.5-flash".to_string()
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_openai_base_url(),
            model: default_openai_model(),
        }
    }
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_gemini_base_url(),
            model: default_gemini_model(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            openai: OpenAiSettings::default(),
            gemini: GeminiSettings::default(),
            proxy: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// 설정 파일 경로 (~/.askcmd/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".askcmd").join("config.toml"))
    }

    /// 설정 파일 + 프로세스 환경 변수로 설정 구성
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };

        config.apply_env_with(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// TOML 설정 파일 읽기
    ///
    /// # Examples
    /// ```no_run
    /// use askcmd::config::Config;
    ///
    /// let config = Config::from_file("/etc/askcmd.toml").unwrap();
    /// println!("{}", config.provider);
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| {
            AskCmdError::ConfigError(format!(
                "invalid config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })
    }

    /// 환경 변수 덮어쓰기
    ///
    /// `lookup`을 주입받기 때문에 테스트에서 프로세스 환경을 건드리지 않아도 됩니다.
    /// 빈 값은 설정되지 않은 것으로 취급합니다.
    ///
    /// # Examples
    /// ```
    /// use askcmd::config::Config;
    ///
    /// let mut config = Config::default();
    /// config.apply_env_with(|key| match key {
    ///     "AI_PROVIDER" => Some("gemini".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(config.provider, "gemini");
    /// ```
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("AI_PROVIDER") {
            self.provider = v;
        }
        if let Some(v) = get("AI_PROXY") {
            self.proxy = Some(v);
        }

        if let Some(v) = get("OPENAI_API_KEY") {
            self.openai.api_key = Some(v);
        }
        if let Some(v) = get("OPENAI_BASE_URL") {
            self.openai.base_url = v;
        }
        if let Some(v) = get("OPENAI_MODEL") {
            self.openai.model = v;
        }

        if let Some(v) = get("GEMINI_API_KEY") {
            self.gemini.api_key = Some(v);
        }
        if let Some(v) = get("GEMINI_BASE_URL") {
            self.gemini.base_url = v;
        }
        if let Some(v) = get("GEMINI_MODEL") {
            self.gemini.model = v;
        }
    }

    /// 현재 선택된 provider의 모델 이름 변경 (CLI --model)
    pub fn override_model(&mut self, model: &str) -> Result<()> {
        match validator::parse_provider(&self.provider)? {
            validator::ProviderKind::OpenAi => self.openai.model = model.to_string(),
            validator::ProviderKind::Gemini => self.gemini.model = model.to_string(),
        }
        Ok(())
    }
}
