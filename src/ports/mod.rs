//! Port traits. API boundaries for the hexagon.
//!
//! - Outbound: Called by the application into infrastructure

pub mod outbound;

pub use outbound::{AuthPort, PublisherPort, TextGeneratorPort};
