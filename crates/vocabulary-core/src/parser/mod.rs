//! HTML parsers for vocabulary.com pages
//!
//! Contains modules for parsing the definition and challenge pages.

pub mod blurb;
pub mod definition;

pub use blurb::parse_blurb;
pub use definition::parse_definition;
