//! 表单输入验证
//!
//! Shape checks for the original URL and the optional custom alias. Both run
//! on every keystroke in the TUI and before any request in the CLI.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Maximum accepted length of an original URL, in characters
pub const MAX_URL_LENGTH: usize = 2048;

/// Maximum accepted length of a custom alias, in characters
pub const MAX_ALIAS_LENGTH: usize = 50;

/// Optional scheme, optional `www.`, dot-separated labels, an alphabetic
/// TLD of at least two letters and an optional whitespace-free path.
pub static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?(www\.)?([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}(/[^\s]*)?$")
        .expect("URL_REGEX is a valid pattern")
});

static ALIAS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("ALIAS_REGEX is a valid pattern"));

/// 字段级验证错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Required,
    UrlTooLong,
    InvalidUrl,
    AliasTooLong,
    InvalidAliasChars,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "URL is required"),
            Self::UrlTooLong => write!(f, "URL must be {} characters or less", MAX_URL_LENGTH),
            Self::InvalidUrl => write!(f, "Please enter a valid URL"),
            Self::AliasTooLong => write!(
                f,
                "Custom alias must be {} characters or less",
                MAX_ALIAS_LENGTH
            ),
            Self::InvalidAliasChars => write!(
                f,
                "Only letters, numbers, hyphens, and underscores are allowed"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Length in UTF-16 code units, the unit browsers and the backend count in
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Required-field rule for the original URL
pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required);
    }
    Ok(())
}

/// 验证原始 URL
///
/// 检查项目：
/// 1. 长度不超过 2048 个字符
/// 2. 符合主机名模式
/// 3. 可以被解析为 URL（无协议时补 `http://`）
pub fn validate_original_url(value: &str) -> Result<(), ValidationError> {
    if utf16_len(value) > MAX_URL_LENGTH {
        return Err(ValidationError::UrlTooLong);
    }

    if !URL_REGEX.is_match(value) {
        return Err(ValidationError::InvalidUrl);
    }

    let candidate = if value.starts_with("http") {
        value.to_string()
    } else {
        format!("http://{}", value)
    };

    Url::parse(&candidate).map_err(|_| ValidationError::InvalidUrl)?;

    Ok(())
}

/// 验证自定义别名（可选）
pub fn validate_custom_alias(value: Option<&str>) -> Result<(), ValidationError> {
    let alias = match value {
        Some(alias) if !alias.is_empty() => alias,
        _ => return Ok(()),
    };

    if utf16_len(alias) > MAX_ALIAS_LENGTH {
        return Err(ValidationError::AliasTooLong);
    }

    if !ALIAS_REGEX.is_match(alias) {
        return Err(ValidationError::InvalidAliasChars);
    }

    Ok(())
}
