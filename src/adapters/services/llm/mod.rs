//! Generation backend adapters
//!
//! Implementations of the GenerationPort trait.

pub mod anthropic;

pub use anthropic::AnthropicBackend;
