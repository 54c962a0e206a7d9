use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkdeckError {
    Validation(String),
    Network(String),
    Api { status: u16, message: String },
    Serialization(String),
    Config(String),
    Io(String),
    Internal(String),
}

impl LinkdeckError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LinkdeckError::Validation(_) => "E001",
            LinkdeckError::Network(_) => "E002",
            LinkdeckError::Api { .. } => "E003",
            LinkdeckError::Serialization(_) => "E004",
            LinkdeckError::Config(_) => "E005",
            LinkdeckError::Io(_) => "E006",
            LinkdeckError::Internal(_) => "E007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LinkdeckError::Validation(_) => "Validation Error",
            LinkdeckError::Network(_) => "Network Error",
            LinkdeckError::Api { .. } => "API Error",
            LinkdeckError::Serialization(_) => "Serialization Error",
            LinkdeckError::Config(_) => "Configuration Error",
            LinkdeckError::Io(_) => "I/O Error",
            LinkdeckError::Internal(_) => "Internal Error",
        }
    }

    /// 获取错误详情
    ///
    /// For API errors this is the server-provided message, which is what the
    /// banner shows to the user.
    pub fn message(&self) -> &str {
        match self {
            LinkdeckError::Validation(msg) => msg,
            LinkdeckError::Network(msg) => msg,
            LinkdeckError::Api { message, .. } => message,
            LinkdeckError::Serialization(msg) => msg,
            LinkdeckError::Config(msg) => msg,
            LinkdeckError::Io(msg) => msg,
            LinkdeckError::Internal(msg) => msg,
        }
    }

    /// HTTP status for API errors
    pub fn status(&self) -> Option<u16> {
        match self {
            LinkdeckError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 TUI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LinkdeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LinkdeckError {}

// 便捷的构造函数
impl LinkdeckError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Validation(msg.into())
    }

    pub fn network<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Network(msg.into())
    }

    pub fn api<T: Into<String>>(status: u16, message: T) -> Self {
        LinkdeckError::Api {
            status,
            message: message.into(),
        }
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Serialization(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Config(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Io(msg.into())
    }

    pub fn internal<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Internal(msg.into())
    }
}

impl From<std::io::Error> for LinkdeckError {
    fn from(err: std::io::Error) -> Self {
        LinkdeckError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LinkdeckError {
    fn from(err: serde_json::Error) -> Self {
        LinkdeckError::Serialization(err.to_string())
    }
}

impl From<::config::ConfigError> for LinkdeckError {
    fn from(err: ::config::ConfigError) -> Self {
        LinkdeckError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for LinkdeckError {
    fn from(err: toml::ser::Error) -> Self {
        LinkdeckError::Config(err.to_string())
    }
}

impl From<tokio::task::JoinError> for LinkdeckError {
    fn from(err: tokio::task::JoinError) -> Self {
        LinkdeckError::Internal(format!("background task failed: {}", err))
    }
}

impl From<crate::utils::validators::ValidationError> for LinkdeckError {
    fn from(err: crate::utils::validators::ValidationError) -> Self {
        LinkdeckError::Validation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinkdeckError>;
