//! Mock driver for fast, deterministic pipeline tests.

use async_trait::async_trait;
use fadein_core::{GenerateRequest, GenerateResponse, Output};
use fadein_error::{FadeinResult, GeminiError, GeminiErrorKind};
use fadein_interface::FadeinDriver;
use std::sync::Mutex;

/// What the mock should do when `generate` is called.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return the given text.
    Success(String),
    /// Always return the given error kind.
    Error(GeminiErrorKind),
}

/// Mock implementation of [`FadeinDriver`] with call counting.
pub struct MockDriver {
    behavior: MockBehavior,
    calls: Mutex<Vec<GenerateRequest>>,
}

impl MockDriver {
    /// Mock that always succeeds with the given response text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Success(text.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Mock that always fails with the given error kind.
    pub fn new_error(kind: GeminiErrorKind) -> Self {
        Self {
            behavior: MockBehavior::Error(kind),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Number of generate calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// The last request seen, if any.
    pub fn last_request(&self) -> Option<GenerateRequest> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl FadeinDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> FadeinResult<GenerateResponse> {
        self.calls.lock().unwrap().push(req.clone());
        match &self.behavior {
            MockBehavior::Success(text) => Ok(GenerateResponse {
                outputs: vec![Output::Text(text.clone())],
            }),
            MockBehavior::Error(kind) => Err(GeminiError::new(kind.clone()).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
