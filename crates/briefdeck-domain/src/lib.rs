//! Briefdeck Domain Types
//!
//! Core types and boundary traits shared by every layer of Briefdeck.
//!
//! # Architecture
//!
//! This crate is dependency-light by design: it defines what an [`Example`]
//! is, what a chat turn looks like, and the traits the infrastructure crates
//! implement (`briefdeck-store`, `briefdeck-llm`). No I/O happens here.

#![warn(missing_docs)]

pub mod chat;
pub mod error;
pub mod example;
pub mod traits;

pub use chat::{ChatMessage, Role};
pub use error::InferenceError;
pub use example::Example;
