/// Domain layer - core business models
///
/// These models are platform-agnostic and represent core business entities.
pub mod catalog;
pub mod models;
pub mod prompts;

pub use catalog::{AudienceProfile, SectionSpec, MAX_HEADLINE_WORDS, MAX_QUOTE_WORDS};
pub use models::{
    Audience, NarrativeLength, SynthesisParameters, SynthesisRequest, SynthesisResult,
    FOCUS_THEMES, MAX_HEADLINES, MIN_HEADLINES,
};
pub use prompts::{Instruction, PromptBuilder};
