//! Audience-tailored interview transcript synthesizer
//!
//! Converts one free-text interview transcript into audience-tailored
//! structured text artifacts: headline options, a narrative synthesis,
//! enumerated insights, recommended actions and verbatim supporting quotes.
//! One backend call runs per selected audience, concurrently, with failures
//! isolated per audience and results reported in selection order.

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod synthesis;
pub mod utils;

pub use error::{AppError, Result};

use crate::domain::models::{SynthesisRequest, SynthesisResult};
use crate::ports::llm::{GenerationConfig, GenerationPort};
use crate::synthesis::aggregate::{AggregatedArtifacts, ResultAggregator};
use crate::synthesis::counter::RequestCounter;
use crate::synthesis::SynthesisOrchestrator;
use serde::Serialize;
use std::sync::Arc;

/// Everything the presentation layer needs from one request: the raw results
/// and the assembled deliverables, both in selection order.
#[derive(Debug, Clone, Serialize)]
pub struct SynthesisOutput {
    pub results: Vec<SynthesisResult>,
    pub artifacts: AggregatedArtifacts,
}

impl SynthesisOutput {
    pub fn successes(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    /// JSON rendering for presentation layers that consume structured output.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Application facade: one orchestrator plus the process-lifetime counter.
pub struct Synthesizer {
    orchestrator: SynthesisOrchestrator,
    counter: RequestCounter,
}

impl Synthesizer {
    pub fn new(backend: Arc<dyn GenerationPort>) -> Self {
        Self {
            orchestrator: SynthesisOrchestrator::new(backend),
            counter: RequestCounter::new(),
        }
    }

    pub fn with_config(backend: Arc<dyn GenerationPort>, config: GenerationConfig) -> Self {
        Self {
            orchestrator: SynthesisOrchestrator::with_config(backend, config),
            counter: RequestCounter::new(),
        }
    }

    /// Runs one request end to end: orchestrate, tally confirmed successes,
    /// aggregate.
    pub async fn synthesize(&self, request: &SynthesisRequest) -> Result<SynthesisOutput> {
        let results = self.orchestrator.run(request).await?;
        self.counter
            .record(results.iter().filter(|r| r.is_success()).count() as u64);

        let artifacts = ResultAggregator::aggregate(&results);
        Ok(SynthesisOutput { results, artifacts })
    }

    /// Total artifacts successfully produced since process start.
    pub fn total_generated(&self) -> u64 {
        self.counter.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Audience, SynthesisParameters};
    use crate::ports::mocks::MockBackend;

    fn request(audiences: Vec<Audience>) -> SynthesisRequest {
        SynthesisRequest::new(
            "CEO: We cut costs by 20%. [...]",
            audiences,
            SynthesisParameters::default(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_single_audience_output_has_no_combined_artifact() {
        let synthesizer = Synthesizer::new(Arc::new(MockBackend::new()));

        let output = synthesizer
            .synthesize(&request(vec![Audience::Ceos]))
            .await
            .unwrap();

        assert_eq!(output.results.len(), 1);
        assert_eq!(output.successes(), 1);
        assert_eq!(output.artifacts.per_audience.len(), 1);
        assert!(output.artifacts.combined.is_none());
    }

    #[tokio::test]
    async fn test_partial_failure_is_delivered_not_dropped() {
        let backend = Arc::new(
            MockBackend::new()
                .respond_when("Board Directors", "board summary")
                .fail_when("CEOs", Some(500), "overloaded"),
        );
        let synthesizer = Synthesizer::new(backend);

        let output = synthesizer
            .synthesize(&request(vec![Audience::BoardDirectors, Audience::Ceos]))
            .await
            .unwrap();

        assert_eq!(output.successes(), 1);
        let combined = output.artifacts.combined.as_ref().unwrap();
        assert!(combined.content.contains("board summary"));
        assert!(combined.content.contains("No summary was generated for CEOs"));
    }

    #[tokio::test]
    async fn test_counter_tallies_only_successes() {
        let backend = Arc::new(MockBackend::new().fail_when("CEOs", Some(500), "overloaded"));
        let synthesizer = Synthesizer::new(backend);
        assert_eq!(synthesizer.total_generated(), 0);

        synthesizer
            .synthesize(&request(vec![Audience::BoardDirectors, Audience::Ceos]))
            .await
            .unwrap();
        assert_eq!(synthesizer.total_generated(), 1);

        synthesizer
            .synthesize(&request(vec![Audience::HrLeaders]))
            .await
            .unwrap();
        assert_eq!(synthesizer.total_generated(), 2);
    }

    #[tokio::test]
    async fn test_output_serializes_for_the_presentation_layer() {
        let synthesizer = Synthesizer::new(Arc::new(MockBackend::new()));
        let output = synthesizer
            .synthesize(&request(vec![Audience::Ceos, Audience::HrLeaders]))
            .await
            .unwrap();

        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["results"].as_array().unwrap().len(), 2);
        assert!(json["artifacts"]["combined"].is_object());
    }

    #[test]
    fn test_unconfigured_backend_surfaces_distinct_condition() {
        let synthesizer = Synthesizer::new(Arc::new(MockBackend::unconfigured()));
        let err = tokio_test::block_on(
            synthesizer.synthesize(&request(vec![Audience::Ceos])),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::ConfigurationMissing));
    }
}
