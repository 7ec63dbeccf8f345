// Carbon footprint prediction: request builder, model adapter and routes.
// All LLM calls go through llm_client.

pub mod handlers;
pub mod in_flight;
pub mod models;
pub mod prompts;
pub mod service;
pub mod validation;
