//! Core library for the daily trivia viewer.
//!
//! Provides:
//! - Parser for tab-separated daily trivia files
//! - Date keys and the data/image paths derived from them
//! - The session state machine (active card, progressive reveal)
//! - The `CardSource` fetch abstraction

pub mod date;
pub mod error;
pub mod parser;
pub mod session;
pub mod source;
pub mod types;
pub mod viewer;

pub use date::{DateKey, PLACEHOLDER_IMAGE};
pub use error::{FetchError, LoadError, ParseError, Result};
pub use parser::parse;
pub use session::{RevealEntry, RevealState, RevealStep, RevealedQuestion, Session, SessionView};
pub use source::{CardSource, MemorySource};
pub use types::{Card, CardSet, Question, CARDS_PER_SET, QUESTIONS_PER_CARD};
pub use viewer::{FailurePolicy, LoadTicket, Status, Viewer};
