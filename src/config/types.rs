//! Runtime settings for the bookmark service.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::PathBuf;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://bookmarks.db";
pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8000));
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;
pub const DEFAULT_LOG_FILTER: &str = "bookmark_tracker=info,bookmarks_server=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// SQLite connection string. The database file is created if missing.
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    /// Upper bound on request body size.
    pub body_limit_bytes: usize,
    /// Used when `RUST_LOG` is not set.
    pub log_filter: String,
    /// The `.env` file that seeded the environment, if one was found.
    pub env_file: Option<PathBuf>,
}
