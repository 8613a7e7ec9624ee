//! Remote model layer for Rutina.
//!
//! Defines the provider-agnostic `ModelClient`/`Dialogue` traits, the Gemini
//! REST implementation, and the fixed interview script that every analysis
//! dialogue is opened with.

pub mod gemini;
pub mod model_client;
pub mod script;

pub use gemini::{API_KEY_ENV, GeminiClient};
pub use model_client::{Dialogue, ModelClient};
pub use script::{
    ANALYSIS_FALLBACK, ANALYSIS_TRIGGER, DEFAULT_MODEL, FOLLOW_UP_FALLBACK, SYSTEM_INSTRUCTION,
};
