pub mod recent_disk_cache;

pub use recent_disk_cache::{
    DiskRecentStore, MemoryRecentStore, RecentStore, RecentStoreError,
};
