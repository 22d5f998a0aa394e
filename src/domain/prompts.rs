//! Instruction composition for audience-tailored synthesis
//!
//! Turns a transcript, an audience profile and the request parameters into one
//! complete generation instruction. Composition is deterministic: identical
//! inputs always render byte-identical instructions.

use crate::domain::catalog::{AudienceProfile, SectionSpec, MAX_HEADLINE_WORDS, MAX_QUOTE_WORDS};
use crate::domain::models::SynthesisParameters;
use crate::error::{AppError, Result};

/// A fully rendered generation instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction(String);

impl Instruction {
    pub fn text(&self) -> &str {
        &self.0
    }

    pub fn into_text(self) -> String {
        self.0
    }
}

/// Composes generation instructions from catalog profiles.
pub struct PromptBuilder;

impl PromptBuilder {
    /// Builds the instruction for one audience.
    ///
    /// The transcript is embedded verbatim, with no truncation or chunking.
    /// Fails only on an empty transcript; transcript content is never
    /// inspected.
    pub fn build(
        transcript: &str,
        profile: &AudienceProfile,
        parameters: &SynthesisParameters,
    ) -> Result<Instruction> {
        if transcript.trim().is_empty() {
            return Err(AppError::InvalidRequest("transcript is empty".to_string()));
        }

        let mut out = String::new();
        out.push_str(&format!(
            "Analyze this interview transcript and create a targeted summary for {}.\n\n",
            profile.name()
        ));

        out.push_str(&format!("Create a {} summary focusing on:\n", profile.name()));
        for bullet in profile.focus {
            out.push_str(&format!("- {}\n", bullet));
        }

        out.push_str("\nStructure:\n");
        for (index, section) in profile.sections.iter().enumerate() {
            out.push_str(&Self::render_section(index + 1, section, parameters));
        }

        if !parameters.focus_themes().is_empty() {
            out.push_str(&format!(
                "\nGive extra weight to these themes wherever the transcript supports them: {}.\n",
                parameters.focus_themes().join(", ")
            ));
        }

        out.push_str(&format!(
            "\nRequirements:\n\
             - Headlines must be {} words or less\n\
             - All quotes must be verbatim from transcript, maximum {} words\n\
             - Make each audience version DRAMATICALLY different in focus and language\n\
             - Be specific and actionable, not generic\n",
            MAX_HEADLINE_WORDS, MAX_QUOTE_WORDS
        ));

        out.push_str(&format!("\nTranscript:\n{}\n", transcript));

        Ok(Instruction(out))
    }

    fn render_section(
        position: usize,
        section: &SectionSpec,
        parameters: &SynthesisParameters,
    ) -> String {
        match section {
            SectionSpec::Headlines { style } => {
                let count = parameters.headline_count();
                if count == 1 {
                    format!(
                        "{}. ONE headline (max {} words, {})\n",
                        position, MAX_HEADLINE_WORDS, style
                    )
                } else {
                    format!(
                        "{}. {} headline options (max {} words each, {})\n",
                        position, count, MAX_HEADLINE_WORDS, style
                    )
                }
            }
            SectionSpec::Narrative { title, angle } => format!(
                "{}. {} ({} words) - {}\n",
                position,
                title,
                parameters.narrative_words(),
                angle
            ),
            SectionSpec::Insights {
                title,
                min,
                max,
                angle,
            }
            | SectionSpec::Actions {
                title,
                min,
                max,
                angle,
            } => format!(
                "{}. {} - {} {}\n",
                position,
                title,
                Self::render_count(*min, *max),
                angle
            ),
            SectionSpec::Quotes {
                title,
                count,
                angle,
            } => format!(
                "{}. {} - {} verbatim quotes (max {} words each), {}\n",
                position, title, count, MAX_QUOTE_WORDS, angle
            ),
        }
    }

    fn render_count(min: u8, max: u8) -> String {
        if min == max {
            min.to_string()
        } else {
            format!("{}-{}", min, max)
        }
    }
}
