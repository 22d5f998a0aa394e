/// Domain models for the interview synthesizer
///
/// These models represent core business entities and are platform-agnostic.
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};

/// A target audience for a tailored synthesis.
///
/// The set is closed: single audiences and named pairings are distinct
/// variants, so adding or validating an audience is a compile-time change
/// rather than a string-keyed lookup. Pairings are first-class profiles, not
/// derived from their constituents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    BoardDirectors,
    Ceos,
    SeniorExecutives,
    HrLeaders,
    GeneralBusiness,
    BoardAndCeos,
    CeosAndSeniorExecutives,
    HrAndSeniorExecutives,
}

impl Audience {
    /// All audiences in catalog order.
    pub const ALL: [Audience; 8] = [
        Audience::BoardDirectors,
        Audience::Ceos,
        Audience::SeniorExecutives,
        Audience::HrLeaders,
        Audience::GeneralBusiness,
        Audience::BoardAndCeos,
        Audience::CeosAndSeniorExecutives,
        Audience::HrAndSeniorExecutives,
    ];

    /// Display name, also the identifier accepted by the catalog.
    pub fn name(&self) -> &'static str {
        match self {
            Audience::BoardDirectors => "Board Directors",
            Audience::Ceos => "CEOs",
            Audience::SeniorExecutives => "Senior Executives",
            Audience::HrLeaders => "HR Leaders",
            Audience::GeneralBusiness => "General Business Audience",
            Audience::BoardAndCeos => "Board Directors + CEOs",
            Audience::CeosAndSeniorExecutives => "CEOs + Senior Executives",
            Audience::HrAndSeniorExecutives => "HR Leaders + Senior Executives",
        }
    }

    /// Snake-case slug used for export file names.
    pub fn slug(&self) -> String {
        self.name()
            .to_lowercase()
            .replace(" + ", "_and_")
            .replace(' ', "_")
    }
}

impl std::fmt::Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Audience {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        Audience::ALL
            .into_iter()
            .find(|a| a.name() == s.trim())
            .ok_or_else(|| AppError::UnknownAudience(s.to_string()))
    }
}

/// Target word count for the narrative section. Closed set; the backend is
/// instructed with the numeric value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NarrativeLength {
    Brief,
    Standard,
    Extended,
}

impl NarrativeLength {
    pub fn words(&self) -> u32 {
        match self {
            NarrativeLength::Brief => 100,
            NarrativeLength::Standard => 250,
            NarrativeLength::Extended => 500,
        }
    }

    /// Maps a requested word count onto the closed set.
    pub fn from_words(words: u32) -> Result<Self> {
        match words {
            100 => Ok(NarrativeLength::Brief),
            250 => Ok(NarrativeLength::Standard),
            500 => Ok(NarrativeLength::Extended),
            other => Err(AppError::InvalidRequest(format!(
                "unsupported narrative word count: {} (expected 100, 250 or 500)",
                other
            ))),
        }
    }
}

/// Fixed vocabulary for focus themes.
pub const FOCUS_THEMES: [&str; 10] = [
    "leadership",
    "strategy",
    "culture",
    "innovation",
    "risk",
    "growth",
    "transformation",
    "talent",
    "execution",
    "customer",
];

/// Bounds for the requested headline count.
pub const MIN_HEADLINES: u8 = 1;
pub const MAX_HEADLINES: u8 = 5;

/// Tunable knobs for one synthesis request. Value object, validated at
/// construction, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisParameters {
    narrative_length: NarrativeLength,
    headline_count: u8,
    focus_themes: Vec<String>,
}

impl SynthesisParameters {
    /// Creates parameters, validating the headline count bounds and that every
    /// focus theme belongs to the fixed vocabulary.
    pub fn new(
        narrative_length: NarrativeLength,
        headline_count: u8,
        focus_themes: Vec<String>,
    ) -> Result<Self> {
        if !(MIN_HEADLINES..=MAX_HEADLINES).contains(&headline_count) {
            return Err(AppError::InvalidRequest(format!(
                "headline count must be between {} and {}, got {}",
                MIN_HEADLINES, MAX_HEADLINES, headline_count
            )));
        }

        for theme in &focus_themes {
            if !FOCUS_THEMES.contains(&theme.as_str()) {
                return Err(AppError::InvalidRequest(format!(
                    "unknown focus theme: {}",
                    theme
                )));
            }
        }

        Ok(Self {
            narrative_length,
            headline_count,
            focus_themes,
        })
    }

    pub fn narrative_words(&self) -> u32 {
        self.narrative_length.words()
    }

    pub fn headline_count(&self) -> u8 {
        self.headline_count
    }

    pub fn focus_themes(&self) -> &[String] {
        &self.focus_themes
    }
}

impl Default for SynthesisParameters {
    /// One headline and a 100-word narrative, matching the classic layout.
    fn default() -> Self {
        Self {
            narrative_length: NarrativeLength::Brief,
            headline_count: 1,
            focus_themes: Vec::new(),
        }
    }
}

/// One user submission: a transcript plus the audiences to synthesize for.
/// Created per submission, discarded after processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisRequest {
    transcript: String,
    audiences: Vec<Audience>,
    parameters: SynthesisParameters,
}

impl SynthesisRequest {
    /// Creates a request. The transcript must contain non-whitespace text and
    /// at least one audience must be selected. Duplicate audiences collapse to
    /// their first position so selection order is preserved.
    pub fn new(
        transcript: impl Into<String>,
        audiences: Vec<Audience>,
        parameters: SynthesisParameters,
    ) -> Result<Self> {
        let transcript = transcript.into();
        if transcript.trim().is_empty() {
            return Err(AppError::InvalidRequest("transcript is empty".to_string()));
        }

        let mut unique: Vec<Audience> = Vec::with_capacity(audiences.len());
        for audience in audiences {
            if !unique.contains(&audience) {
                unique.push(audience);
            }
        }
        if unique.is_empty() {
            return Err(AppError::InvalidRequest(
                "no target audience selected".to_string(),
            ));
        }

        Ok(Self {
            transcript,
            audiences: unique,
            parameters,
        })
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Selected audiences in selection order, duplicates removed.
    pub fn audiences(&self) -> &[Audience] {
        &self.audiences
    }

    pub fn parameters(&self) -> &SynthesisParameters {
        &self.parameters
    }
}

/// Outcome of one audience's backend call. Exactly one of `content` and
/// `error` is present. Created by the orchestrator, read-only thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisResult {
    pub audience: Audience,
    pub content: Option<String>,
    pub error: Option<String>,
}

impl SynthesisResult {
    pub fn success(audience: Audience, content: String) -> Self {
        Self {
            audience,
            content: Some(content),
            error: None,
        }
    }

    pub fn failure(audience: Audience, error: &AppError) -> Self {
        Self {
            audience,
            content: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.content.is_some()
    }
}
