//! Runtime configuration for the server and store.

use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://api_database.sqlite3";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_API_PREFIX: &str = "/api";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Prefix the resource routes are nested under. `/` mounts them at root.
    pub api_prefix: String,
    pub max_connections: u32,
    pub max_body_bytes: usize,
    /// Seed the todo store with the sample tasks at startup.
    pub seed_todos: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            seed_todos: true,
        }
    }
}
