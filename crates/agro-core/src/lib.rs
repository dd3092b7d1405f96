//! # agro-core
//!
//! Core types shared across the agroforestry planner crates:
//! - Record structs extracted from model responses or tool calls
//!   (schedule events, development stages, yield, production, soil)
//! - The editable implementation checklist entry
//! - Section catalog: labels, required columns and chart kinds
//! - Conversation turns exchanged with the hosted model
//! - Supported UI languages and their translated strings

pub mod conversation;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod i18n;
