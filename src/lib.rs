//! bsky-countdown: daily AI-written countdown posts to Bluesky, Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
