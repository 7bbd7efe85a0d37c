use thiserror::Error;

#[derive(Error, Debug)]
pub enum AskCmdError {
    #[error("Unsupported provider: {name} (supported: {supported})")]
    UnsupportedProvider { name: String, supported: String },

    #[error("{var} is not set (required for the {provider} provider)")]
    MissingCredential {
        provider: &'static str,
        var: &'static str,
    },

    #[error("{0}")]
    ConfigError(String),

    #[error("Request to {provider} failed: {message}")]
    Transport {
        provider: &'static str,
        message: String,
    },

    #[error("{0}")]
    Api(String),

    #[error("Failed to parse {provider} response: {reason}\nRaw response: {raw}")]
    Parse {
        provider: &'static str,
        reason: String,
        raw: String,
    },

    #[error("Unknown response format from {provider}\nRaw response: {raw}")]
    UnknownFormat { provider: &'static str, raw: String },

    #[error("AI returned an empty command. Please try again.")]
    EmptyCommand,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// 실패 분류 (설정 / 전송 / API / 파싱)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Transport,
    Api,
    Parse,
}

impl ErrorKind {
    /// 진단 메시지 앞에 붙는 접두어
    pub fn prefix(&self) -> &'static str {
        match self {
            ErrorKind::Config => "Configuration error:",
            ErrorKind::Transport => "Transport error:",
            ErrorKind::Api => "API error:",
            ErrorKind::Parse => "Parse error:",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorKind::Config => 2,
            ErrorKind::Transport => 3,
            ErrorKind::Api => 4,
            ErrorKind::Parse => 5,
        }
    }
}

impl AskCmdError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AskCmdError::UnsupportedProvider { .. }
            | AskCmdError::MissingCredential { .. }
            | AskCmdError::ConfigError(_)
            | AskCmdError::IoError(_) => ErrorKind::Config,
            AskCmdError::Transport { .. } => ErrorKind::Transport,
            AskCmdError::Api(_) => ErrorKind::Api,
            AskCmdError::Parse { .. }
            | AskCmdError::UnknownFormat { .. }
            | AskCmdError::EmptyCommand
            | AskCmdError::JsonError(_) => ErrorKind::Parse,
        }
    }
}

pub type Result<T> = std::result::Result<T, AskCmdError>;
