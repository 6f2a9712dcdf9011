//! Trait definitions for generation backends.

use async_trait::async_trait;
use fadein_core::{GenerateRequest, GenerateResponse};
use fadein_error::FadeinResult;

/// Core trait that all generation backends must implement.
///
/// The `generate` call is the single suspension point in a screenplay
/// request; callers apply their own timeout and cancellation policy around
/// it (or rely on the backend's configured deadline).
#[async_trait]
pub trait FadeinDriver: Send + Sync {
    /// Generate model output for the given request.
    async fn generate(&self, req: &GenerateRequest) -> FadeinResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier (e.g., "gemini-2.0-flash").
    fn model_name(&self) -> &str;
}
