//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the countdown schedule and the error taxonomy live here.

pub mod entities;
pub mod errors;
pub mod schedule;

pub use entities::{Credentials, RunOutcome, Session};
pub use errors::{DomainError, GenerationError};
pub use schedule::{Milestone, Prompt, Schedule};
