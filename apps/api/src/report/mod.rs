// Comprehensive environmental report: same contract as prediction, richer schema.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod service;
