use std::fmt;

#[derive(Debug, Clone)]
pub enum DisasterScanError {
    FileOperation(String),
    DirectoryNotFound(String),
    Validation(String),
    Serialization(String),
    ConfigParse(String),
    DateParse(String),
}

impl DisasterScanError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            DisasterScanError::FileOperation(_) => "E001",
            DisasterScanError::DirectoryNotFound(_) => "E002",
            DisasterScanError::Validation(_) => "E003",
            DisasterScanError::Serialization(_) => "E004",
            DisasterScanError::ConfigParse(_) => "E005",
            DisasterScanError::DateParse(_) => "E006",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            DisasterScanError::FileOperation(_) => "File Operation Error",
            DisasterScanError::DirectoryNotFound(_) => "Directory Not Found",
            DisasterScanError::Validation(_) => "Validation Error",
            DisasterScanError::Serialization(_) => "Serialization Error",
            DisasterScanError::ConfigParse(_) => "Config Parse Error",
            DisasterScanError::DateParse(_) => "Date Parse Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            DisasterScanError::FileOperation(msg) => msg,
            DisasterScanError::DirectoryNotFound(msg) => msg,
            DisasterScanError::Validation(msg) => msg,
            DisasterScanError::Serialization(msg) => msg,
            DisasterScanError::ConfigParse(msg) => msg,
            DisasterScanError::DateParse(msg) => msg,
        }
    }

    /// 格式化为彩色输出
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

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for DisasterScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 默认使用简洁格式
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for DisasterScanError {}

// 便捷的构造函数
impl DisasterScanError {
    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        DisasterScanError::FileOperation(msg.into())
    }

    pub fn directory_not_found<T: Into<String>>(msg: T) -> Self {
        DisasterScanError::DirectoryNotFound(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        DisasterScanError::Validation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        DisasterScanError::Serialization(msg.into())
    }

    pub fn config_parse<T: Into<String>>(msg: T) -> Self {
        DisasterScanError::ConfigParse(msg.into())
    }

    pub fn date_parse<T: Into<String>>(msg: T) -> Self {
        DisasterScanError::DateParse(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for DisasterScanError {
    fn from(err: std::io::Error) -> Self {
        DisasterScanError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for DisasterScanError {
    fn from(err: serde_json::Error) -> Self {
        DisasterScanError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for DisasterScanError {
    fn from(err: csv::Error) -> Self {
        DisasterScanError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for DisasterScanError {
    fn from(err: toml::de::Error) -> Self {
        DisasterScanError::ConfigParse(err.to_string())
    }
}

impl From<chrono::ParseError> for DisasterScanError {
    fn from(err: chrono::ParseError) -> Self {
        DisasterScanError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DisasterScanError>;
