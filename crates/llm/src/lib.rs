pub mod json;
pub mod provider;
pub mod providers;

pub use json::extract_json;
pub use provider::{LlmError, LlmProvider, Message, Role};
pub use providers::create_provider;
