//! Synthesis orchestration
//!
//! Dispatches one backend call per selected audience and collects the results
//! in selection order, isolating per-audience failures.

pub mod aggregate;
pub mod counter;

use crate::domain::catalog;
use crate::domain::models::{Audience, SynthesisRequest, SynthesisResult};
use crate::domain::prompts::{Instruction, PromptBuilder};
use crate::error::{AppError, Result};
use crate::ports::llm::{GenerationConfig, GenerationPort};
use futures_util::future::join_all;
use std::sync::Arc;

pub use aggregate::{AggregatedArtifacts, Artifact, CombinedArtifact, ResultAggregator};
pub use counter::RequestCounter;

/// Runs one synthesis request against the generation backend.
pub struct SynthesisOrchestrator {
    backend: Arc<dyn GenerationPort>,
    config: GenerationConfig,
}

impl SynthesisOrchestrator {
    /// Creates an orchestrator with the fixed default call parameters.
    pub fn new(backend: Arc<dyn GenerationPort>) -> Self {
        Self::with_config(backend, GenerationConfig::default())
    }

    pub fn with_config(backend: Arc<dyn GenerationPort>, config: GenerationConfig) -> Self {
        Self { backend, config }
    }

    /// Produces one `SynthesisResult` per requested audience, in selection
    /// order.
    ///
    /// All instructions are built before anything is dispatched, so
    /// request-level failures abort with no backend call made. The calls
    /// themselves run concurrently; a failed call yields a failed result for
    /// that audience only and is never retried. Results are joined back in
    /// selection order regardless of completion order.
    pub async fn run(&self, request: &SynthesisRequest) -> Result<Vec<SynthesisResult>> {
        if !self.backend.is_configured() {
            return Err(AppError::ConfigurationMissing);
        }

        let jobs: Vec<(Audience, Instruction)> = request
            .audiences()
            .iter()
            .map(|&audience| {
                let profile = catalog::profile(audience);
                PromptBuilder::build(request.transcript(), profile, request.parameters())
                    .map(|instruction| (audience, instruction))
            })
            .collect::<Result<_>>()?;

        log::info!(
            "Dispatching {} synthesis call(s) to {}",
            jobs.len(),
            self.backend.provider_name()
        );

        let calls = jobs.iter().map(|(audience, instruction)| {
            let audience = *audience;
            async move {
                match self
                    .backend
                    .generate(&self.config, instruction.text())
                    .await
                {
                    Ok(content) => SynthesisResult::success(audience, content),
                    Err(error) => {
                        log::warn!("Synthesis failed for {}: {}", audience, error);
                        SynthesisResult::failure(audience, &error)
                    }
                }
            }
        });

        let results = join_all(calls).await;

        log::info!(
            "Synthesis complete: {}/{} audience(s) succeeded",
            results.iter().filter(|r| r.is_success()).count(),
            results.len()
        );

        Ok(results)
    }
}
