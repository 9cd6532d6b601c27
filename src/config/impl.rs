use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, which is cheap to clone
/// and doesn't hold any locks. Falls back to defaults when `init_config`
/// has not run.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::default()))
        .load_full()
}

/// Initialize the global configuration
///
/// Loads `path` (or "config.toml" in the current directory) plus `LD__*`
/// environment overrides. If the file doesn't exist, uses in-memory defaults.
///
/// # Examples
/// ```no_run
/// use linkdesk::config::init_config;
/// init_config(None);
/// ```
pub fn init_config(path: Option<&str>) {
    CONFIG.get_or_init(|| ArcSwap::from_pointee(StaticConfig::load(path)));
}

/// Apply an in-process override (e.g. `--base-url`) to the global config
pub fn update_config<F>(f: F)
where
    F: Fn(&mut StaticConfig),
{
    let swap = CONFIG.get_or_init(|| ArcSwap::from_pointee(StaticConfig::default()));
    swap.rcu(|current| {
        let mut next = StaticConfig::clone(current);
        f(&mut next);
        next
    });
}
