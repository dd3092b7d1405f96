//! # agro-session
//!
//! State and context owned by the caller, never by the extraction core:
//! - [`SessionContext`]: conversation history, language and the editable
//!   implementation checklist
//! - [`ReferenceDataset`]: the semicolon-delimited plant dataset passed
//!   verbatim into every prompt
//! - Prompt templates for the one-shot plan and the conversational mode

pub mod dataset;
pub mod error;
pub mod prompt;
pub mod session;

pub use dataset::ReferenceDataset;
pub use error::{DatasetError, SessionError};
pub use prompt::{PlanRequest, chat_instruction, plan_prompt};
pub use session::SessionContext;
