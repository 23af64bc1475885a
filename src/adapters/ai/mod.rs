//! AI adapter module. Implements TextGeneratorPort for LLM integration.

pub mod openai_adapter;

pub use openai_adapter::OpenAiAdapter;
