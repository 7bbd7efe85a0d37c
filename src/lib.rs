//! askcmd: 자연어 요청을 LLM API(OpenAI 호환 / Gemini)로 보내 셸 명령어 하나로 변환

pub mod ai;
pub mod config;
pub mod error;
pub mod logging;

pub use ai::{AiProvider, CommandGenerator, ProviderFactory};
pub use config::Config;
pub use error::{AskCmdError, ErrorKind, Result};
