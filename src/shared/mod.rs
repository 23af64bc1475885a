//! Cross-cutting pieces: configuration and the HTTP client.

pub mod config;
pub mod http;
