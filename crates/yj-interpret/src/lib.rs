//! Natural-language interpretation of hexagram casts.
//!
//! Builds a typed prompt from a hexagram's reference texts and forwards it
//! to an OpenAI-compatible chat-completion API, returning the answer text
//! together with the raw upstream response.

pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod prompt;

pub use client::{Interpretation, Interpreter};
pub use config::InterpreterConfig;
pub use context::{ContextLine, HexagramContext};
pub use error::{InterpretError, InterpretResult};
