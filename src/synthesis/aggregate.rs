//! Assembly of per-audience results into deliverable artifacts
//!
//! Artifacts are derived and stateless: they can be recomputed from the same
//! result set at any time and aggregation is fully deterministic.

use crate::domain::models::{Audience, SynthesisResult};
use serde::{Deserialize, Serialize};

/// Delimiter rule used above and below each audience header in the combined
/// artifact.
pub const SECTION_RULE: &str = "==================================================";

/// One audience's deliverable text blob. For failed audiences the content is
/// an explicit failure notice, so consumers can still render something rather
/// than omit the audience silently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    pub audience: Audience,
    pub content: String,
    pub succeeded: bool,
}

impl Artifact {
    /// Download file name, e.g. `ceos_summary_20260806_0915.txt`.
    pub fn file_name(&self, stamp: &str) -> String {
        format!("{}_summary_{}.txt", self.audience.slug(), stamp)
    }
}

/// All selected audiences concatenated in selection order, each section
/// introduced by a delimited audience header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinedArtifact {
    pub content: String,
}

impl CombinedArtifact {
    /// Download file name, e.g. `all_summaries_20260806_0915.txt`.
    pub fn file_name(stamp: &str) -> String {
        format!("all_summaries_{}.txt", stamp)
    }
}

/// Aggregation output handed to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatedArtifacts {
    /// One entry per requested audience, in selection order, including
    /// failures.
    pub per_audience: Vec<Artifact>,
    /// Present only when more than one audience was requested.
    pub combined: Option<CombinedArtifact>,
}

impl AggregatedArtifacts {
    pub fn get(&self, audience: Audience) -> Option<&Artifact> {
        self.per_audience.iter().find(|a| a.audience == audience)
    }
}

/// Assembles synthesis results into deliverable artifacts.
pub struct ResultAggregator;

impl ResultAggregator {
    /// Builds per-audience artifacts for every result and, when more than one
    /// audience was requested, the combined artifact. Failed audiences appear
    /// in both as explicit failure notices rather than being skipped.
    pub fn aggregate(results: &[SynthesisResult]) -> AggregatedArtifacts {
        let per_audience: Vec<Artifact> = results
            .iter()
            .map(|result| match &result.content {
                Some(content) => Artifact {
                    audience: result.audience,
                    content: content.clone(),
                    succeeded: true,
                },
                None => Artifact {
                    audience: result.audience,
                    content: Self::failure_notice(result),
                    succeeded: false,
                },
            })
            .collect();

        let combined = (results.len() > 1).then(|| {
            let mut content = String::new();
            for artifact in &per_audience {
                content.push_str(&format!(
                    "\n{}\nAUDIENCE: {}\n{}\n\n",
                    SECTION_RULE,
                    artifact.audience.name().to_uppercase(),
                    SECTION_RULE
                ));
                content.push_str(&artifact.content);
                content.push_str("\n\n");
            }
            CombinedArtifact { content }
        });

        AggregatedArtifacts {
            per_audience,
            combined,
        }
    }

    fn failure_notice(result: &SynthesisResult) -> String {
        format!(
            "No summary was generated for {}.\nError: {}",
            result.audience.name(),
            result.error.as_deref().unwrap_or("unknown error")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn ok(audience: Audience) -> SynthesisResult {
        SynthesisResult::success(audience, format!("summary for {}", audience))
    }

    fn failed(audience: Audience) -> SynthesisResult {
        SynthesisResult::failure(audience, &AppError::backend(Some(500), "overloaded"))
    }

    #[test]
    fn test_single_audience_has_no_combined_artifact() {
        let artifacts = ResultAggregator::aggregate(&[ok(Audience::Ceos)]);
        assert_eq!(artifacts.per_audience.len(), 1);
        assert!(artifacts.per_audience[0].succeeded);
        assert!(artifacts.combined.is_none());
    }

    #[test]
    fn test_per_audience_includes_failures_with_error_text() {
        let artifacts =
            ResultAggregator::aggregate(&[ok(Audience::BoardDirectors), failed(Audience::Ceos)]);

        assert_eq!(artifacts.per_audience.len(), 2);
        let ceos = artifacts.get(Audience::Ceos).unwrap();
        assert!(!ceos.succeeded);
        assert!(ceos.content.contains("No summary was generated for CEOs"));
        assert!(ceos.content.contains("overloaded"));
    }

    #[test]
    fn test_combined_preserves_selection_order() {
        let artifacts = ResultAggregator::aggregate(&[
            ok(Audience::HrLeaders),
            ok(Audience::BoardDirectors),
            ok(Audience::Ceos),
        ]);

        let combined = artifacts.combined.unwrap().content;
        let hr = combined.find("AUDIENCE: HR LEADERS").unwrap();
        let board = combined.find("AUDIENCE: BOARD DIRECTORS").unwrap();
        let ceos = combined.find("AUDIENCE: CEOS").unwrap();
        assert!(hr < board && board < ceos);
    }

    #[test]
    fn test_combined_carries_failure_notice_at_original_index() {
        let artifacts =
            ResultAggregator::aggregate(&[ok(Audience::BoardDirectors), failed(Audience::Ceos)]);

        let combined = artifacts.combined.unwrap().content;
        let board_at = combined.find("AUDIENCE: BOARD DIRECTORS").unwrap();
        let ceos_at = combined.find("AUDIENCE: CEOS").unwrap();
        assert!(board_at < ceos_at);
        assert!(combined.contains("summary for Board Directors"));
        assert!(combined.contains("No summary was generated for CEOs"));

        // the failure notice sits inside the CEOs section, not before it
        assert!(combined.find("No summary was generated").unwrap() > ceos_at);
    }

    #[test]
    fn test_combined_sections_are_delimited() {
        let artifacts =
            ResultAggregator::aggregate(&[ok(Audience::Ceos), ok(Audience::HrLeaders)]);
        let combined = artifacts.combined.unwrap().content;
        assert_eq!(combined.matches(SECTION_RULE).count(), 4);
        assert_eq!(SECTION_RULE.len(), 50);
    }

    #[test]
    fn test_aggregation_is_deterministic() {
        let results = [ok(Audience::Ceos), failed(Audience::HrLeaders)];
        let a = ResultAggregator::aggregate(&results);
        let b = ResultAggregator::aggregate(&results);
        assert_eq!(
            a.combined.unwrap().content,
            b.combined.unwrap().content
        );
    }

    #[test]
    fn test_file_names() {
        let artifact = Artifact {
            audience: Audience::BoardDirectors,
            content: "text".to_string(),
            succeeded: true,
        };
        assert_eq!(
            artifact.file_name("20260806_0915"),
            "board_directors_summary_20260806_0915.txt"
        );
        assert_eq!(
            CombinedArtifact::file_name("20260806_0915"),
            "all_summaries_20260806_0915.txt"
        );
    }
}
