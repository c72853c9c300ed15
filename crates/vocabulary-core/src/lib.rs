//! Vocabulary.com Client Library
//!
//! Async client for vocabulary.com: word definitions scraped from the
//! dictionary pages, example sentences from the corpus API, challenge
//! blurbs, named sample texts, and vocab-grabber text analysis.
//!
//! # Overview
//!
//! The library is a thin, unopinionated pass-through:
//! - Definition pages are scraped into typed [`WordDefinition`] records
//! - The JSON endpoints (examples, vocab grabber) deserialize directly
//! - No caching, no retries, no client-side rate limiting
//!
//! # Example
//!
//! ```no_run
//! use vocabulary_core::{Domain, Result, Vocabulary};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let vocab = Vocabulary::new()?;
//!
//!     // Definition page, scraped into a structured record
//!     let def = vocab.definition("run").await?;
//!     for sense in &def.primary {
//!         println!("{}: {}", sense.part_of_speech, sense.gloss.as_deref().unwrap_or("-"));
//!     }
//!
//!     // Example sentences, optionally narrowed to a domain
//!     let examples = vocab.examples("run", Some(Domain::Fiction)).await?;
//!     for example in &examples {
//!         println!("e.g. {}", example.text);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Endpoint overrides
//!
//! The endpoint table is a plain struct with a `Default`, so the whole
//! client can be pointed at a test server; see [`Endpoints`].

mod client;
mod error;
pub mod parser;
mod scraper;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, VocabClient};

// Re-export error types
pub use error::{Result, VocabularyError};

// Re-export parser functions
pub use parser::{parse_blurb, parse_definition};

// Re-export the main API
pub use scraper::Vocabulary;

// Re-export data types
pub use types::{
    Domain, ExampleSentence, GrabbedWord, PosDefinitions, PrimarySense, WordDefinition,
    WordProfile,
};

// Re-export the endpoint table
pub use url::Endpoints;
