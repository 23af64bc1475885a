//! Infrastructure adapters. Implement outbound ports.
//!
//! Text generation and Bluesky XRPC. Map errors to the domain taxonomy.

pub mod ai;
pub mod bluesky;
