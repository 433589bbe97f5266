// Resume/job matching and optimization engine.
// Implements: keyword lexicon, heuristic matching, mock report assembly,
// prompt building, and the pluggable analyzer backends.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod analyzer;
pub mod handlers;
pub mod lexicon;
pub mod matcher;
pub mod mock;
pub mod models;
pub mod prompts;
