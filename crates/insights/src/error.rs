use std::time::Duration;

use helpdesk_llm::LlmError;

/// Why a remote insight attempt was abandoned. Never surfaced to callers of
/// the orchestrator; every variant triggers the heuristic fallback.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
    #[error("LLM call timed out after {0:?}")]
    Timeout(Duration),
    #[error("response is not valid JSON: {reason}")]
    InvalidJson {
        reason: String,
        raw_response: String,
    },
    #[error("response has the wrong shape: {0}")]
    InvalidShape(String),
    #[error("LLM returned an empty response")]
    EmptyResponse,
}
