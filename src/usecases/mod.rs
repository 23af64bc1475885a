//! Application use cases. Orchestrate domain logic via ports.

pub mod daily_post;

pub use daily_post::DailyPostService;
