// Optimization pipeline: prompt composition, LLM call, validation, persistence.
// All LLM calls go through llm_client — no direct Anthropic calls here.

pub mod composer;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
