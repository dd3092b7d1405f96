//! # agro-gemini
//!
//! Hosted model access for the agroforestry planner.
//!
//! - [`GeminiClient`]: `generateContent` over HTTPS, mapped onto the
//!   provider-neutral [`LanguageModel`] trait
//! - [`ToolRegistry`]: function declarations generated from the record types
//!   and validated decoding of the model's tool calls
//! - [`converse`]: one user turn of the conversational mode, including any
//!   tool-call rounds
//!
//! Tool calls only carry data. Applying a decoded [`ToolInvocation`] to a
//! chart or the checklist is up to the caller.

pub mod client;
pub mod conversation;
pub mod models;
pub mod tools;
pub mod wire;

mod error;
mod http;

pub use client::{ClientOptions, GeminiClient, LanguageModel, ModelReply, ModelRequest};
pub use conversation::{ConverseOptions, ToolFailure, TurnOutcome, converse};
pub use error::{GeminiError, ToolError};
pub use models::{MODEL_CHOICES, ModelChoice};
pub use tools::{ToolInvocation, ToolRegistry};
