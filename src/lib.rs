//! Finley, an interactive financial-advice orchestrator
//!
//! A turn-based assistant where specialist steps (tax assessment,
//! investment suggestion, filing guidance) run in fixed dependency order
//! against a shared per-session context, coordinated by a menu-driven
//! orchestrator. Generation-backend failures degrade to fixed fallback
//! messages instead of aborting the pipeline.

pub mod advisor;
pub mod advisory;
pub mod console;
pub mod context;
pub mod error;
pub mod gemini;
pub mod input;
pub mod models;
pub mod orchestrator;
pub mod specialists;
pub mod tax;

pub use error::Result;

// Re-export common types
pub use context::FinancialContext;
pub use models::*;
