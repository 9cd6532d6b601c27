use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkdeskError {
    Validation(String),
    RequestFailure(String),
    ServerError(String),
    ClipboardFailure(String),
    Serialization(String),
    Config(String),
}

impl LinkdeskError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LinkdeskError::Validation(_) => "E001",
            LinkdeskError::RequestFailure(_) => "E002",
            LinkdeskError::ServerError(_) => "E003",
            LinkdeskError::ClipboardFailure(_) => "E004",
            LinkdeskError::Serialization(_) => "E005",
            LinkdeskError::Config(_) => "E006",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LinkdeskError::Validation(_) => "Validation Error",
            LinkdeskError::RequestFailure(_) => "Request Failure",
            LinkdeskError::ServerError(_) => "Server Error",
            LinkdeskError::ClipboardFailure(_) => "Clipboard Failure",
            LinkdeskError::Serialization(_) => "Serialization Error",
            LinkdeskError::Config(_) => "Configuration Error",
        }
    }

    /// User-facing message, shown verbatim in the console
    pub fn message(&self) -> &str {
        match self {
            LinkdeskError::Validation(msg) => msg,
            LinkdeskError::RequestFailure(msg) => msg,
            LinkdeskError::ServerError(msg) => msg,
            LinkdeskError::ClipboardFailure(msg) => msg,
            LinkdeskError::Serialization(msg) => msg,
            LinkdeskError::Config(msg) => msg,
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

    /// 格式化为简洁输出（用于日志）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LinkdeskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LinkdeskError {}

// 便捷的构造函数
impl LinkdeskError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LinkdeskError::Validation(msg.into())
    }

    pub fn request_failure<T: Into<String>>(msg: T) -> Self {
        LinkdeskError::RequestFailure(msg.into())
    }

    pub fn server_error<T: Into<String>>(msg: T) -> Self {
        LinkdeskError::ServerError(msg.into())
    }

    pub fn clipboard_failure<T: Into<String>>(msg: T) -> Self {
        LinkdeskError::ClipboardFailure(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LinkdeskError::Serialization(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        LinkdeskError::Config(msg.into())
    }
}

impl From<serde_json::Error> for LinkdeskError {
    fn from(err: serde_json::Error) -> Self {
        LinkdeskError::Serialization(err.to_string())
    }
}

impl From<url::ParseError> for LinkdeskError {
    fn from(err: url::ParseError) -> Self {
        LinkdeskError::Config(format!("Invalid URL: {}", err))
    }
}

impl From<config::ConfigError> for LinkdeskError {
    fn from(err: config::ConfigError) -> Self {
        LinkdeskError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinkdeskError>;
