//! Resolution core for the cultural heritage guide.
//!
//! A free-text question is resolved through an ordered fallback chain:
//! the curated fact dataset, then the geographic index, then each
//! configured AI provider in turn, and finally a fixed guidance message.
//! Local stages are free and synchronous, so they always run to
//! completion before any network call is attempted.

pub mod pipeline;
pub mod prompts;
pub mod services;

pub use pipeline::{Resolution, Resolver, ResolutionEntry, ServiceStatus, Stage, FALLBACK_GUIDANCE};
