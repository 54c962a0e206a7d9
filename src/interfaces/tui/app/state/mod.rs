//! App state definition and basic state management
//!
//! 包含核心 App 结构：查询与变更句柄、表单、焦点和列表选择

mod form_state;

pub use form_state::{FormField, FormState};

use tokio::sync::{broadcast, mpsc};

use crate::store::{Mutation, Query, QueryKey, UrlList, UrlStore};
use crate::structs::{ShortenRequest, ShortenResponse, UrlEntry};

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Main,
    Help,
}

/// 当前焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    OriginalUrl,
    CustomAlias,
    List,
}

impl Focus {
    const ALL: [Self; 3] = [Self::OriginalUrl, Self::CustomAlias, Self::List];

    /// 切换到下一个焦点
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|x| x == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// 切换到上一个焦点
    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|x| x == self).unwrap_or(0);
        if idx == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[idx - 1]
        }
    }

    /// The form field under focus, if any
    pub fn field(&self) -> Option<FormField> {
        match self {
            Self::OriginalUrl => Some(FormField::OriginalUrl),
            Self::CustomAlias => Some(FormField::CustomAlias),
            Self::List => None,
        }
    }
}

/// Completions reported back to the UI loop by spawned mutations
#[derive(Debug, Clone)]
pub enum AppEvent {
    Shortened(ShortenResponse),
    Deleted(String),
}

pub struct App {
    pub urls: Query<UrlList>,
    pub shorten: Mutation<ShortenRequest, ShortenResponse>,
    pub delete: Mutation<String, ()>,
    pub current_screen: CurrentScreen,

    // Form state for create
    pub form: FormState,
    pub focus: Focus,

    // UI state
    pub selected_index: usize,
    pub status_message: String,
    pub short_link_prefix: String,
    pub backend_name: &'static str,

    pub(super) events_tx: mpsc::UnboundedSender<AppEvent>,
    pub(super) events_rx: mpsc::UnboundedReceiver<AppEvent>,
    pub(super) invalidations: broadcast::Receiver<QueryKey>,
}

impl App {
    pub fn new(store: &UrlStore, short_link_prefix: impl Into<String>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        Self {
            urls: store.urls(),
            shorten: store.shorten_url(),
            delete: store.delete_url(),
            current_screen: CurrentScreen::Main,
            form: FormState::new(),
            focus: Focus::default(),
            selected_index: 0,
            status_message: String::new(),
            short_link_prefix: short_link_prefix.into(),
            backend_name: store.api_name(),
            events_tx,
            events_rx,
            invalidations: store.cache().subscribe(),
        }
    }

    /// Current collection, empty until the first load lands
    pub fn entries(&self) -> UrlList {
        self.urls.data().unwrap_or_default()
    }

    pub fn selected_entry(&self) -> Option<UrlEntry> {
        self.entries().get(self.selected_index).cloned()
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    pub fn clear_status(&mut self) {
        self.status_message.clear();
    }
}
