//! Application Configuration
//!
//! Fixed UI constants plus the remote API base URLs. The URLs and log level
//! can be overridden at build time through environment variables.

use log::LevelFilter;

/// localStorage key holding the task collection
pub const TASKS_KEY: &str = "tasks";
/// localStorage key holding the theme preference
pub const THEME_KEY: &str = "theme";

/// Items per page in the remote data panel
pub const PAGE_SIZE: usize = 6;
/// Page buttons shown in the pagination bar
pub const MAX_VISIBLE_PAGES: usize = 5;
/// Quiet period before a search query is sent
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Posts loaded for the posts tab
pub const POSTS_LIMIT: u32 = 50;
/// Photos loaded for the photos tab
pub const PHOTOS_LIMIT: u32 = 24;
/// Posts fetched as the pool that search filters
pub const SEARCH_POOL_LIMIT: u32 = 100;
/// Albums offered in the photo filter
pub const ALBUMS_LIMIT: u32 = 10;
/// Quotes fetched for the hero banner
pub const QUOTES_LIMIT: u32 = 30;

const DEFAULT_API_BASE: &str = "https://jsonplaceholder.typicode.com";
const DEFAULT_BACKUP_API_BASE: &str = "https://dummyjson.com";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// JSONPlaceholder-compatible API root
    pub api_base_url: String,
    /// DummyJSON-compatible API root
    pub backup_api_base_url: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            backup_api_base_url: DEFAULT_BACKUP_API_BASE.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    /// Defaults, overridden by `TASK_MANAGER_API_BASE`,
    /// `TASK_MANAGER_BACKUP_API_BASE` and `TASK_MANAGER_LOG_LEVEL` if they
    /// were set when the app was built
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("TASK_MANAGER_API_BASE"),
            option_env!("TASK_MANAGER_BACKUP_API_BASE"),
            option_env!("TASK_MANAGER_LOG_LEVEL"),
        )
    }

    fn from_overrides(api_base: Option<&str>, backup_base: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_base.map(normalize_base).unwrap_or(defaults.api_base_url),
            backup_api_base_url: backup_base.map(normalize_base).unwrap_or(defaults.backup_api_base_url),
            log_level: log_level
                .map(|l| console_logger::parse_level(l, DEFAULT_LOG_LEVEL))
                .unwrap_or(defaults.log_level),
        }
    }
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
