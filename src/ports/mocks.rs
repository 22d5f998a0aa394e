//! Mock implementations for testing

use crate::error::{AppError, Result};
use crate::ports::llm::{GenerationConfig, GenerationPort};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

enum Behavior {
    Respond(String),
    Fail { status: Option<u16>, message: String },
}

struct Rule {
    pattern: String,
    behavior: Behavior,
}

/// Mock generation backend.
///
/// Rules match on a substring of the instruction text (the audience name is
/// always embedded, so tests key rules on it). Delays let tests permute
/// completion order across concurrent calls.
pub struct MockBackend {
    configured: bool,
    calls: AtomicUsize,
    rules: Mutex<Vec<Rule>>,
    delays: Mutex<Vec<(String, u64)>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            configured: true,
            calls: AtomicUsize::new(0),
            rules: Mutex::new(Vec::new()),
            delays: Mutex::new(Vec::new()),
        }
    }

    /// A backend that reports no API key.
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new()
        }
    }

    /// Respond with `text` for instructions containing `pattern`.
    pub fn respond_when(self, pattern: &str, text: &str) -> Self {
        self.rules.lock().unwrap().push(Rule {
            pattern: pattern.to_string(),
            behavior: Behavior::Respond(text.to_string()),
        });
        self
    }

    /// Fail for instructions containing `pattern`.
    pub fn fail_when(self, pattern: &str, status: Option<u16>, message: &str) -> Self {
        self.rules.lock().unwrap().push(Rule {
            pattern: pattern.to_string(),
            behavior: Behavior::Fail {
                status,
                message: message.to_string(),
            },
        });
        self
    }

    /// Sleep before answering instructions containing `pattern`.
    pub fn delay_when(self, pattern: &str, millis: u64) -> Self {
        self.delays
            .lock()
            .unwrap()
            .push((pattern.to_string(), millis));
        self
    }

    /// Number of generate calls observed.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationPort for MockBackend {
    async fn generate(&self, _config: &GenerationConfig, instruction: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let delay: u64 = self
            .delays
            .lock()
            .unwrap()
            .iter()
            .filter(|(pattern, _)| instruction.contains(pattern))
            .map(|(_, millis)| millis)
            .sum();
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let outcome = {
            let rules = self.rules.lock().unwrap();
            rules
                .iter()
                .find(|rule| instruction.contains(&rule.pattern))
                .map(|rule| match &rule.behavior {
                    Behavior::Respond(text) => Ok(text.clone()),
                    Behavior::Fail { status, message } => {
                        Err(AppError::backend(*status, message.clone()))
                    }
                })
        };

        outcome.unwrap_or_else(|| Ok("synthesized output".to_string()))
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}
