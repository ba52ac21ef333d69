//! Defaults and environment variable names.

use std::time::Duration;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Distance from the bottom of the list, in pixels, that counts as "near the end".
pub const DEFAULT_SCROLL_THRESHOLD_PX: f32 = 20.0;
pub const DEFAULT_CONFIG_FILE: &str = "marquee.toml";

pub const ENV_CONFIG_PATH: &str = "MARQUEE_CONFIG_PATH";
pub const ENV_SERVER_URL: &str = "MARQUEE_SERVER_URL";
pub const ENV_REQUEST_TIMEOUT: &str = "MARQUEE_REQUEST_TIMEOUT";
pub const ENV_SCROLL_THRESHOLD_PX: &str = "MARQUEE_SCROLL_THRESHOLD_PX";
pub const ENV_PERSIST_RECENT: &str = "MARQUEE_PERSIST_RECENT";
pub const ENV_RECENT_PATH: &str = "MARQUEE_RECENT_PATH";
