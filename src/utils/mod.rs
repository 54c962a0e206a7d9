pub mod date;
pub mod validators;

pub use date::format_date_to_locale;
pub use validators::{
    ValidationError, validate_custom_alias, validate_original_url, validate_required,
};

/// Truncate a string to `max` characters, appending `...` when cut
pub fn truncate_display(value: &str, max: usize) -> String {
    if value.chars().count() > max {
        let head: String = value.chars().take(max).collect();
        format!("{}...", head)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_display() {
        assert_eq!(truncate_display("short", 10), "short");
        assert_eq!(truncate_display("abcdef", 3), "abc...");
        // 多字节字符按字符截断
        assert_eq!(truncate_display("日本語テキスト", 3), "日本語...");
    }
}
