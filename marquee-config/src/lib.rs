//! Shared configuration library for Marquee.
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then `MARQUEE_*` environment variables (optionally seeded from a `.env`
//! file). The remote service base URL is the only value most deployments
//! need to set.

pub mod constants;
pub mod loader;
pub mod models;
pub mod util;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::sources::FileConfig;
pub use models::{
    Config, ConfigMetadata, RecentConfig, SearchConfig, ServerConfig,
};
