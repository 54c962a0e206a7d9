use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Falls back to loading from the default sources if `init_config()` was
/// never called.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::load()))
        .load_full()
}

/// Initialize the global configuration
///
/// Loads configuration from "linkdeck.toml" in the current directory plus
/// `LINKDECK__*` environment variables.
pub fn init_config() {
    CONFIG.get_or_init(|| ArcSwap::from_pointee(StaticConfig::load()));
}

/// Initialize from an explicit file path
pub fn init_config_from(path: &str) {
    let loaded = StaticConfig::load_from(path);
    match CONFIG.get() {
        Some(current) => current.store(Arc::new(loaded)),
        None => {
            let _ = CONFIG.set(ArcSwap::from_pointee(loaded));
        }
    }
}

/// Override the backend base URL (from `--api-url`)
pub fn set_api_base_url(base_url: &str) {
    init_config();
    if let Some(current) = CONFIG.get() {
        current.rcu(|config| {
            let mut next = StaticConfig::clone(config);
            next.api.base_url = base_url.to_string();
            next
        });
    }
}
