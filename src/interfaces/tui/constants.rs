//! TUI 常量定义
//!
//! 集中管理所有 UI 相关的常量，避免魔法数字分散在代码各处

use std::time::Duration;

/// 原始 URL 显示截断长度
pub const URL_TRUNCATE_LENGTH: usize = 50;

/// 事件轮询间隔
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// 帮助弹窗尺寸 (宽度百分比, 高度百分比)
pub const HELP_POPUP: (u16, u16) = (70, 70);

/// 颜色主题
pub mod colors {
    use ratatui::style::Color;

    /// 主色调
    pub const PRIMARY: Color = Color::Cyan;
    /// 成功色
    pub const SUCCESS: Color = Color::Green;
    /// 警告色
    pub const WARNING: Color = Color::Yellow;
    /// 错误色
    pub const ERROR: Color = Color::Red;
    /// 次要文本色
    pub const MUTED: Color = Color::DarkGray;
    /// 高亮背景色
    pub const HIGHLIGHT_BG: Color = Color::Yellow;
    /// 高亮前景色
    pub const HIGHLIGHT_FG: Color = Color::Black;
}

/// 界面文本
pub mod text {
    pub const FORM_TITLE: &str = "Create Short URL";
    pub const LIST_TITLE: &str = "Shortened URLs";
    pub const SUBMIT: &str = "Shorten URL";
    pub const SUBMITTING: &str = "Shortening...";
    pub const EMPTY: &str = "No URLs shortened yet";
    pub const LOADING: &str = "Loading...";
}
